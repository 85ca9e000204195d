use crate::nws::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to parse period start time '{value}'")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
