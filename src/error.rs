use crate::forecast::error::ForecastError;
use crate::nws::error::FetchError;
use crate::session::error::SelectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointcastError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),
}
