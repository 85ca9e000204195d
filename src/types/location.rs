use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// Note that the api.weather.gov GeoJSON geometries carry coordinates in
/// `[longitude, latitude]` order; conversion happens at the extraction site,
/// and everything inside this crate is latitude-first.
///
/// # Examples
///
/// ```
/// use pointcast::LatLon;
///
/// let philadelphia = LatLon(39.9526, -75.1652);
/// assert_eq!(philadelphia.0, 39.9526); // Latitude
/// assert_eq!(philadelphia.1, -75.1652); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Formats as `lat,lon`, the form the points endpoint expects in its path.
impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_latitude_first() {
        assert_eq!(LatLon(39.9526, -75.1652).to_string(), "39.9526,-75.1652");
    }

    #[test]
    fn whole_degrees_print_without_fraction() {
        // f64 Display keeps the path segment short for round coordinates.
        assert_eq!(LatLon(40.0, -75.0).to_string(), "40,-75");
    }
}
