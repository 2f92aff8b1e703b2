use serde::{Deserialize, Serialize};

/// A geographic position in WGS84 degrees.
///
/// The location API stores positions as `lat, lon` (northing first), while the
/// projection functions work in `lon, lat` order like every x/y pair. Keeping
/// the two named fields avoids mixing the orders up; `as_lat_lon` gives the
/// stored order when an array is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a coordinate from an `[x, y]` = `[lon, lat]` pair as returned by
    /// an inverse projection.
    pub fn from_lon_lat(lon_lat: [f64; 2]) -> Self {
        Self {
            lat: lon_lat[1],
            lon: lon_lat[0],
        }
    }

    pub fn as_lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    pub fn as_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Parses user input such as `"58.3, 24.7"` or `"58.3 24.7"` (lat first).
    pub fn parse_lat_lon(input: &str) -> Option<Self> {
        let mut parts = input
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let lat = parts.next()?.parse::<f64>().ok()?;
        let lon = parts.next()?.parse::<f64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        Some(Self { lat, lon })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}
