//! Renders forecast periods into the text block the display pane shows.

use crate::forecast::error::ForecastError;
use crate::nws::types::ForecastPeriod;
use crate::types::kind::ForecastKind;
use chrono::{DateTime, FixedOffset};

const HEADER: &str = "Date       Time     UTC\n";

// Wire timestamps look like 2025-03-01T06:00:00-06:00; they are re-printed
// with a space separator and the offset kept.
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Renders `periods` as a multi-line text block, in upstream order.
///
/// Every period becomes one block: the re-stringified start timestamp, then
/// tab-indented labeled fields. Daily periods additionally carry the period
/// name and split the summary (`Summary Forecast:`) from the detailed prose
/// (`Forecast:`); hourly periods have only the short summary under
/// `Forecast:`.
///
/// # Errors
///
/// [`ForecastError::Timestamp`] if any period's start time does not parse;
/// a malformed upstream document is not something to render around.
pub fn render_forecast(
    kind: ForecastKind,
    periods: &[ForecastPeriod],
) -> Result<String, ForecastError> {
    let mut out = String::from(HEADER);

    for period in periods {
        let start = parse_start_time(&period.start_time)?;
        out.push_str(&format!("{}\n\t", start.format(DISPLAY_FORMAT)));

        if kind == ForecastKind::Daily {
            out.push_str(&format!("{}\n\t", period.name));
        }

        out.push_str(&format!(
            "Temperature: {} {}\n\t",
            period.temperature, period.temperature_unit
        ));
        out.push_str(&format!(
            "Wind Speed: {} {}\n\t",
            period.wind_speed,
            period.wind_direction.as_deref().unwrap_or("")
        ));

        match kind {
            ForecastKind::Hourly => {
                out.push_str(&format!("Forecast: {}\n\n", period.short_forecast));
            }
            ForecastKind::Daily => {
                out.push_str(&format!("Summary Forecast: {}\n\t", period.short_forecast));
                out.push_str(&format!("Forecast: {}\n\n", period.detailed_forecast));
            }
        }
    }

    Ok(out)
}

fn parse_start_time(value: &str) -> Result<DateTime<FixedOffset>, ForecastError> {
    DateTime::parse_from_str(value, WIRE_FORMAT).map_err(|source| ForecastError::Timestamp {
        value: value.to_string(),
        source,
    })
}
