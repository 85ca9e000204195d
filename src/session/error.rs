use thiserror::Error;

/// A user-entered or selected value that failed validation against the fixed
/// state set or the current zone/station mappings. These abort the current
/// workflow step only; no request is issued for the failing value.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("'{0}' is not one of the recognized state codes")]
    UnknownState(String),

    #[error("Zone '{0}' is not in the current zone list")]
    UnknownZone(String),

    #[error("Station '{0}' is not in the current station list")]
    UnknownStation(String),

    #[error("Only numbers are allowed for coordinates")]
    CoordinateParse(#[source] std::num::ParseFloatError),

    #[error("{value} is outside the valid {axis} range")]
    CoordinateRange { axis: &'static str, value: f64 },
}
