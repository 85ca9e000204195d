//! Wire types for the api.weather.gov documents this crate consumes.
//!
//! Only the fields the application reads are modeled; the API attaches a lot
//! more (JSON-LD context, elevation, office metadata) that serde is free to
//! skip. Zone and station listings arrive as GeoJSON feature collections;
//! the interesting parts sit under each feature's `properties`.

use serde::Deserialize;

/// `GET /zones/forecast/?area={state}`: the forecast zones of one state.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneCollection {
    pub features: Vec<ZoneFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneFeature {
    pub properties: ZoneProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneProperties {
    /// Opaque zone identifier, e.g. `ILZ014`.
    pub id: String,
    /// Human-readable zone name, e.g. `Central Cook`.
    pub name: String,
}

/// `GET /zones/forecast/{zoneId}/stations`: observation stations in a zone.
#[derive(Debug, Clone, Deserialize)]
pub struct StationCollection {
    pub features: Vec<StationFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationFeature {
    pub properties: StationProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationProperties {
    /// Station callsign, e.g. `KORD`.
    pub station_identifier: String,
    pub name: String,
}

/// `GET /stations/{stationId}`: the detail document for one station.
///
/// Only the point geometry is consumed, to recover the station's
/// coordinates for the forecast lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDetail {
    pub geometry: PointGeometry,
}

/// A GeoJSON point. Coordinates are `[longitude, latitude]`, reversed
/// relative to this crate's [`LatLon`](crate::LatLon) convention.
#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

/// `GET /points/{lat},{lon}`: forecast metadata for a coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct PointMetadata {
    pub properties: PointEndpoints,
}

/// The two forecast URLs the points endpoint advertises. The grid-data URL
/// does not serve a textual forecast itself; appending `/forecast` to it
/// yields the daily one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointEndpoints {
    pub forecast_hourly: String,
    pub forecast_grid_data: String,
}

/// `GET <forecast url>`: the forecast document itself, hourly or daily.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

/// One time-bucketed prediction entry.
///
/// Hourly and daily forecasts share this shape; hourly payloads carry empty
/// strings for `name` and `detailed_forecast`, so both default when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// ISO-8601 timestamp with UTC offset, e.g. `2025-03-01T06:00:00-06:00`.
    pub start_time: String,
    pub temperature: f64,
    pub temperature_unit: String,
    /// Already a display string, e.g. `10 mph` or `5 to 10 mph`.
    pub wind_speed: String,
    /// Compass direction, e.g. `NW`; absent on calm periods.
    #[serde(default)]
    pub wind_direction: Option<String>,
    pub short_forecast: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detailed_forecast: String,
}
