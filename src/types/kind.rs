//! Defines the forecast granularity offered by the points endpoint and the
//! labels the selection widget presents for it.

use std::fmt;

/// The two forecast variants api.weather.gov serves for a point.
///
/// The points endpoint advertises both in one metadata document; the kind
/// decides which advertised URL the forecast fetch follows and which field
/// set the formatter renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastKind {
    /// Hour-by-hour periods with temperature, wind, and a short summary.
    Hourly,
    /// Half-day named periods ("Tonight", "Monday") that additionally carry
    /// a detailed prose forecast.
    Daily,
}

impl ForecastKind {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            ForecastKind::Hourly => "Hourly",
            ForecastKind::Daily => "Daily",
        }
    }
}

/// Allows formatting a `ForecastKind` variant using its widget label.
///
/// # Examples
///
/// ```
/// use pointcast::ForecastKind;
///
/// assert_eq!(format!("{}", ForecastKind::Hourly), "Hourly");
/// assert_eq!(ForecastKind::Daily.to_string(), "Daily");
/// ```
impl fmt::Display for ForecastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
