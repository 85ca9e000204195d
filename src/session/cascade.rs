//! The three-level narrowing selection (state → zone → station) and the
//! in-memory lookup state it derives.
//!
//! A [`Session`] owns the mappings produced by the most recent fetch of each
//! kind. Selecting a new upstream value replaces everything the next fetch
//! writes; there is no separate invalidation step, so a stale downstream
//! selection is only rejected when the user acts on a key that no longer
//! exists.

use crate::error::PointcastError;
use crate::nws::client::NwsClient;
use crate::nws::types::{StationCollection, ZoneCollection};
use crate::session::error::SelectionError;
use crate::states::is_state_code;
use crate::types::location::LatLon;
use log::info;
use std::collections::HashMap;

/// Parses user-entered coordinate text into a [`LatLon`].
///
/// Both fields must parse as floating point, be finite, and lie inside the
/// geographic axis ranges. Zero is a legitimate value on either axis.
///
/// # Examples
///
/// ```
/// use pointcast::parse_coordinates;
///
/// let loc = parse_coordinates("40.0", "-75.0").unwrap();
/// assert_eq!((loc.0, loc.1), (40.0, -75.0));
/// assert!(parse_coordinates("abc", "-75.0").is_err());
/// ```
pub fn parse_coordinates(lat_text: &str, lon_text: &str) -> Result<LatLon, SelectionError> {
    let latitude: f64 = lat_text
        .trim()
        .parse()
        .map_err(SelectionError::CoordinateParse)?;
    let longitude: f64 = lon_text
        .trim()
        .parse()
        .map_err(SelectionError::CoordinateParse)?;
    check_axis("latitude", latitude, 90.0)?;
    check_axis("longitude", longitude, 180.0)?;
    Ok(LatLon(latitude, longitude))
}

fn check_axis(axis: &'static str, value: f64, limit: f64) -> Result<(), SelectionError> {
    // is_finite also rejects the NaN that "nan" parses to.
    if value.is_finite() && value.abs() <= limit {
        Ok(())
    } else {
        Err(SelectionError::CoordinateRange { axis, value })
    }
}

/// The selection-cascade state for one user session.
///
/// Zone and station mappings are keyed by display name, because display
/// names are what the selection widgets hand back. Two entries with the same
/// display name collide last-write-wins; the ordered name lists are what the
/// widgets should present.
pub struct Session {
    client: NwsClient,
    zones: HashMap<String, String>,
    zone_names: Vec<String>,
    stations: HashMap<String, String>,
    station_names: Vec<String>,
}

impl Session {
    pub fn new(client: NwsClient) -> Self {
        Self {
            client,
            zones: HashMap::new(),
            zone_names: Vec::new(),
            stations: HashMap::new(),
            station_names: Vec::new(),
        }
    }

    /// The client this session fetches through, for workflows that continue
    /// past the cascade (the forecast pipeline).
    pub fn client(&self) -> &NwsClient {
        &self.client
    }

    /// Zone display names from the most recent state selection, in the order
    /// the API returned them (duplicates preserved).
    pub fn zone_names(&self) -> &[String] {
        &self.zone_names
    }

    /// Station display names from the most recent zone selection, first
    /// occurrence wins on duplicates.
    pub fn station_names(&self) -> &[String] {
        &self.station_names
    }

    /// Resolves the forecast zones of `state`, replacing the zone mapping,
    /// then auto-advances one level by resolving the first returned zone's
    /// stations. Returns the ordered zone display names.
    ///
    /// # Errors
    ///
    /// [`SelectionError::UnknownState`] (before any request) if `state` is
    /// not in the fixed state set; otherwise any fetch failure from the zone
    /// or station listing.
    pub async fn resolve_zones_for_state(
        &mut self,
        state: &str,
    ) -> Result<Vec<String>, PointcastError> {
        if !is_state_code(state) {
            return Err(SelectionError::UnknownState(state.to_string()).into());
        }

        let zones = self.client.zones_for_state(state).await?;
        self.replace_zones(zones);
        info!("Resolved {} zones for state {}", self.zone_names.len(), state);

        if let Some(first) = self.zone_names.first().cloned() {
            self.resolve_stations_for_zone(&first).await?;
        }

        Ok(self.zone_names.clone())
    }

    /// Resolves the stations of the zone named `zone_name`, replacing the
    /// station mapping. Returns the ordered station display names.
    ///
    /// # Errors
    ///
    /// [`SelectionError::UnknownZone`] (before any request) if the name is
    /// not in the current zone mapping; otherwise any fetch failure.
    pub async fn resolve_stations_for_zone(
        &mut self,
        zone_name: &str,
    ) -> Result<Vec<String>, PointcastError> {
        let zone_id = self.zone_id(zone_name)?.to_string();

        let stations = self.client.stations_for_zone(&zone_id).await?;
        self.replace_stations(stations);
        info!(
            "Resolved {} stations for zone {} ({})",
            self.station_names.len(),
            zone_name,
            zone_id
        );

        Ok(self.station_names.clone())
    }

    /// Resolves the coordinates of the station named `station_name` from its
    /// detail document.
    ///
    /// The API's point geometry is `[longitude, latitude]`; the returned
    /// [`LatLon`] is swapped into this crate's latitude-first convention.
    ///
    /// # Errors
    ///
    /// [`SelectionError::UnknownStation`] (before any request) if the name
    /// is not in the current station mapping; otherwise any fetch failure.
    pub async fn resolve_coordinates_for_station(
        &self,
        station_name: &str,
    ) -> Result<LatLon, PointcastError> {
        let station_id = self.station_identifier(station_name)?.to_string();

        let detail = self.client.station(&station_id).await?;
        let [lon, lat] = detail.geometry.coordinates;
        Ok(LatLon(lat, lon))
    }

    fn zone_id(&self, zone_name: &str) -> Result<&str, SelectionError> {
        self.zones
            .get(zone_name)
            .map(String::as_str)
            .ok_or_else(|| SelectionError::UnknownZone(zone_name.to_string()))
    }

    fn station_identifier(&self, station_name: &str) -> Result<&str, SelectionError> {
        self.stations
            .get(station_name)
            .map(String::as_str)
            .ok_or_else(|| SelectionError::UnknownStation(station_name.to_string()))
    }

    fn replace_zones(&mut self, zones: ZoneCollection) {
        self.zones.clear();
        self.zone_names.clear();
        for feature in zones.features {
            let props = feature.properties;
            self.zone_names.push(props.name.clone());
            self.zones.insert(props.name, props.id);
        }
    }

    fn replace_stations(&mut self, stations: StationCollection) {
        self.stations.clear();
        self.station_names.clear();
        for feature in stations.features {
            let props = feature.properties;
            if !self.stations.contains_key(&props.name) {
                self.station_names.push(props.name.clone());
            }
            self.stations.insert(props.name, props.station_identifier);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(NwsClient::builder().build().unwrap())
    }

    fn zone_fixture() -> ZoneCollection {
        serde_json::from_str(
            r#"{"features": [
                {"properties": {"id": "ILZ003", "name": "Winnebago"}},
                {"properties": {"id": "ILZ014", "name": "Central Cook"}},
                {"properties": {"id": "ILZ999", "name": "Central Cook"}}
            ]}"#,
        )
        .unwrap()
    }

    fn station_fixture() -> StationCollection {
        serde_json::from_str(
            r#"{"features": [
                {"properties": {"stationIdentifier": "KORD", "name": "Chicago O'Hare"}},
                {"properties": {"stationIdentifier": "KMDW", "name": "Chicago Midway"}},
                {"properties": {"stationIdentifier": "KXXX", "name": "Chicago Midway"}}
            ]}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn unknown_state_fails_before_any_request() {
        let mut session = session();
        let err = session.resolve_zones_for_state("ZZ").await.unwrap_err();
        assert!(matches!(
            err,
            PointcastError::Selection(SelectionError::UnknownState(_))
        ));
    }

    #[tokio::test]
    async fn unknown_zone_fails_before_any_request() {
        let mut session = session();
        let err = session.resolve_stations_for_zone("Nowhere").await.unwrap_err();
        assert!(matches!(
            err,
            PointcastError::Selection(SelectionError::UnknownZone(_))
        ));
    }

    #[tokio::test]
    async fn unknown_station_fails_before_any_request() {
        let session = session();
        let err = session
            .resolve_coordinates_for_station("Nowhere Field")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PointcastError::Selection(SelectionError::UnknownStation(_))
        ));
    }

    #[test]
    fn replace_zones_keeps_order_and_last_write_wins() {
        let mut session = session();
        session.replace_zones(zone_fixture());

        assert_eq!(
            session.zone_names(),
            ["Winnebago", "Central Cook", "Central Cook"]
        );
        assert_eq!(session.zone_id("Winnebago").unwrap(), "ILZ003");
        // Duplicate display name: the later feature owns the key.
        assert_eq!(session.zone_id("Central Cook").unwrap(), "ILZ999");
    }

    #[test]
    fn replace_stations_dedupes_names_for_presentation() {
        let mut session = session();
        session.replace_stations(station_fixture());

        assert_eq!(
            session.station_names(),
            ["Chicago O'Hare", "Chicago Midway"]
        );
        assert_eq!(
            session.station_identifier("Chicago Midway").unwrap(),
            "KXXX"
        );
    }

    #[test]
    fn new_zone_fetch_replaces_the_previous_mapping() {
        let mut session = session();
        session.replace_zones(zone_fixture());
        session.replace_zones(
            serde_json::from_str(
                r#"{"features": [{"properties": {"id": "AKZ101", "name": "Anchorage"}}]}"#,
            )
            .unwrap(),
        );

        assert_eq!(session.zone_names(), ["Anchorage"]);
        assert!(matches!(
            session.zone_id("Winnebago"),
            Err(SelectionError::UnknownZone(_))
        ));
    }

    #[test]
    fn parses_valid_coordinates() {
        let loc = parse_coordinates("40.0", "-75.0").unwrap();
        assert_eq!(loc, LatLon(40.0, -75.0));
    }

    #[test]
    fn accepts_zero_coordinates() {
        assert_eq!(parse_coordinates("0", "0").unwrap(), LatLon(0.0, 0.0));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(matches!(
            parse_coordinates("abc", "-75.0"),
            Err(SelectionError::CoordinateParse(_))
        ));
        assert!(matches!(
            parse_coordinates("40.0", ""),
            Err(SelectionError::CoordinateParse(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_and_non_finite_values() {
        assert!(matches!(
            parse_coordinates("91", "0"),
            Err(SelectionError::CoordinateRange { axis: "latitude", .. })
        ));
        assert!(matches!(
            parse_coordinates("0", "-180.5"),
            Err(SelectionError::CoordinateRange { axis: "longitude", .. })
        ));
        assert!(matches!(
            parse_coordinates("nan", "0"),
            Err(SelectionError::CoordinateRange { .. })
        ));
        assert!(matches!(
            parse_coordinates("inf", "0"),
            Err(SelectionError::CoordinateRange { .. })
        ));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            parse_coordinates(" 41.8781 ", " -87.6298 ").unwrap(),
            LatLon(41.8781, -87.6298)
        );
    }
}
