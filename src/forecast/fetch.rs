//! The two-call forecast pipeline: point metadata, then the forecast
//! document the metadata points at.

use crate::forecast::error::ForecastError;
use crate::nws::client::NwsClient;
use crate::nws::types::{ForecastPeriod, PointEndpoints};
use crate::types::kind::ForecastKind;
use crate::types::location::LatLon;
use log::info;

/// Fetches the ordered forecast periods for a coordinate.
///
/// Resolves the point metadata for `location`, follows the advertised URL
/// for `kind`, and returns the periods in upstream order. Any failure at
/// either step aborts the pipeline; no partial forecast is produced.
pub async fn point_forecast(
    client: &NwsClient,
    location: LatLon,
    kind: ForecastKind,
) -> Result<Vec<ForecastPeriod>, ForecastError> {
    let metadata = client.point_metadata(location).await?;
    let url = forecast_url(kind, &metadata.properties);
    info!("Fetching {} forecast for {} from {}", kind, location, url);

    let forecast = client.forecast(&url).await?;
    Ok(forecast.properties.periods)
}

/// Selects the forecast URL for `kind` from the advertised endpoints.
///
/// The grid-data URL carries no textual forecast itself; the daily document
/// lives under its `/forecast` sub-resource.
pub(crate) fn forecast_url(kind: ForecastKind, endpoints: &PointEndpoints) -> String {
    match kind {
        ForecastKind::Hourly => endpoints.forecast_hourly.clone(),
        ForecastKind::Daily => format!("{}/forecast", endpoints.forecast_grid_data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> PointEndpoints {
        serde_json::from_str(
            r#"{
                "forecastHourly": "https://api.weather.gov/gridpoints/LOT/65,73/forecast/hourly",
                "forecastGridData": "https://api.weather.gov/gridpoints/LOT/65,73"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn hourly_uses_the_advertised_hourly_url() {
        assert_eq!(
            forecast_url(ForecastKind::Hourly, &endpoints()),
            "https://api.weather.gov/gridpoints/LOT/65,73/forecast/hourly"
        );
    }

    #[test]
    fn daily_appends_forecast_to_the_grid_data_url() {
        assert_eq!(
            forecast_url(ForecastKind::Daily, &endpoints()),
            "https://api.weather.gov/gridpoints/LOT/65,73/forecast"
        );
    }
}
