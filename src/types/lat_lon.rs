/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use weather_trends::LatLon;
///
/// let pittsburgh = LatLon(40.42, -79.79);
/// assert_eq!(pittsburgh.latitude(), 40.42);
/// assert_eq!(pittsburgh.longitude(), -79.79);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(self) -> f64 {
        self.0
    }

    pub fn longitude(self) -> f64 {
        self.1
    }
}
