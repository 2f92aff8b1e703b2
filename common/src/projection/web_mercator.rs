use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Spherical Mercator on the WGS84 semi-major axis.
pub struct WebMercator;

impl WebMercator {
    pub const RADIUS: f64 = 6_378_137.0;
    /// Half the width of the projected world, in metres.
    pub const HALF_SIZE: f64 = std::f64::consts::PI * Self::RADIUS;
    /// Latitude at which the square world is cut off.
    pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

    pub fn forward(lon_lat: [f64; 2]) -> [f64; 2] {
        let lat = lon_lat[1].clamp(-Self::MAX_LATITUDE, Self::MAX_LATITUDE);
        let x = Self::RADIUS * lon_lat[0].to_radians();
        let y = Self::RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
        [x, y]
    }

    pub fn inverse(xy: [f64; 2]) -> [f64; 2] {
        let lon = (xy[0] / Self::RADIUS).to_degrees();
        let lat = (2.0 * (xy[1] / Self::RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
        [lon, lat]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_known_point() {
        let xy = WebMercator::forward([24.7, 58.3]);
        assert!((xy[0] - 2_749_591.4226).abs() < 1e-3);
        assert!((xy[1] - 8_030_603.9783).abs() < 1e-3);
    }

    #[test]
    fn inverse_recovers_lon_lat() {
        let lon_lat = WebMercator::inverse([2_749_591.422_593_857, 8_030_603.978_274_522]);
        assert!((lon_lat[0] - 24.7).abs() < 1e-9);
        assert!((lon_lat[1] - 58.3).abs() < 1e-9);
    }

    #[test]
    fn origin_maps_to_null_island() {
        let xy = WebMercator::forward([0.0, 0.0]);
        assert!(xy[0].abs() < 1e-6 && xy[1].abs() < 1e-6);
    }
}
