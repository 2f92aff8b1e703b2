//! Coordinate reference systems used by the map.
//!
//! The map widget renders in Web Mercator (EPSG:3857) because that is the grid
//! of the XYZ tile services. The Estonian national grid L-EST97 (EPSG:3301) is
//! registered next to it so that positions can be shown and exchanged in the
//! system the land board uses. Both projections work on `[x, y]` pairs, so
//! geographic input is `[lon, lat]` in degrees.

mod lest97;
mod web_mercator;

pub use lest97::Lest97;
pub use web_mercator::WebMercator;

/// The projections known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    WebMercator,
    Lest97,
}

impl Projection {
    pub fn code(&self) -> &'static str {
        match self {
            Projection::WebMercator => "EPSG:3857",
            Projection::Lest97 => "EPSG:3301",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EPSG:3857" | "EPSG:900913" => Some(Projection::WebMercator),
            "EPSG:3301" => Some(Projection::Lest97),
            _ => None,
        }
    }

    /// Geographic `[lon, lat]` degrees to projected `[x, y]` metres.
    pub fn forward(&self, lon_lat: [f64; 2]) -> [f64; 2] {
        match self {
            Projection::WebMercator => WebMercator::forward(lon_lat),
            Projection::Lest97 => Lest97::forward(lon_lat),
        }
    }

    /// Projected `[x, y]` metres to geographic `[lon, lat]` degrees.
    pub fn inverse(&self, xy: [f64; 2]) -> [f64; 2] {
        match self {
            Projection::WebMercator => WebMercator::inverse(xy),
            Projection::Lest97 => Lest97::inverse(xy),
        }
    }
}

/// Reprojects a point from one system into another through geographic
/// coordinates.
pub fn transform(xy: [f64; 2], from: Projection, to: Projection) -> [f64; 2] {
    if from == to {
        return xy;
    }
    to.forward(from.inverse(xy))
}

/// `toLonLat` of the map view: Web Mercator metres to `[lon, lat]`.
pub fn to_lon_lat(xy: [f64; 2]) -> [f64; 2] {
    Projection::WebMercator.inverse(xy)
}

/// `fromLonLat` of the map view: `[lon, lat]` to Web Mercator metres.
pub fn from_lon_lat(lon_lat: [f64; 2]) -> [f64; 2] {
    Projection::WebMercator.forward(lon_lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for projection in [Projection::WebMercator, Projection::Lest97] {
            assert_eq!(Projection::from_code(projection.code()), Some(projection));
        }
        assert_eq!(Projection::from_code("EPSG:4326"), None);
    }

    #[test]
    fn transform_between_grids_keeps_the_geographic_point() {
        let mercator = from_lon_lat([24.7536, 59.437]);
        let lest = transform(mercator, Projection::WebMercator, Projection::Lest97);
        assert!((lest[0] - 542_763.369).abs() < 0.01);
        assert!((lest[1] - 6_589_036.275).abs() < 0.01);

        let back = transform(lest, Projection::Lest97, Projection::WebMercator);
        assert!((back[0] - mercator[0]).abs() < 1e-3);
        assert!((back[1] - mercator[1]).abs() < 1e-3);
    }
}
