mod error;
mod forecast;
mod nws;
mod session;
mod states;
mod types;

pub use error::PointcastError;

pub use nws::client::NwsClient;
pub use nws::error::FetchError;
pub use nws::types::{
    Forecast, ForecastPeriod, ForecastProperties, PointEndpoints, PointGeometry, PointMetadata,
    StationCollection, StationDetail, StationFeature, StationProperties, ZoneCollection,
    ZoneFeature, ZoneProperties,
};

pub use session::cascade::{parse_coordinates, Session};
pub use session::error::SelectionError;

pub use forecast::error::ForecastError;
pub use forecast::fetch::point_forecast;
pub use forecast::format::render_forecast;

pub use states::{is_state_code, STATE_CODES};

pub use types::kind::ForecastKind;
pub use types::location::LatLon;
