use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// L-EST97 (EPSG:3301): Lambert Conformal Conic with two standard parallels on
/// the GRS80 ellipsoid.
pub struct Lest97;

const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
const INVERSE_FLATTENING: f64 = 298.257_222_101;
const STANDARD_PARALLEL_1: f64 = 59.0 + 20.0 / 60.0;
const STANDARD_PARALLEL_2: f64 = 58.0;
const LATITUDE_OF_ORIGIN: f64 = 57.517_553_930_555_56;
const CENTRAL_MERIDIAN: f64 = 24.0;
const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING: f64 = 6_375_000.0;

struct Cone {
    e: f64,
    n: f64,
    a_f: f64,
    rho0: f64,
}

fn eccentricity() -> f64 {
    let f = 1.0 / INVERSE_FLATTENING;
    (2.0 * f - f * f).sqrt()
}

fn m(phi: f64, e: f64) -> f64 {
    phi.cos() / (1.0 - (e * phi.sin()).powi(2)).sqrt()
}

fn t(phi: f64, e: f64) -> f64 {
    let es = e * phi.sin();
    (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - es) / (1.0 + es)).powf(e / 2.0)
}

fn cone() -> Cone {
    let e = eccentricity();
    let phi1 = STANDARD_PARALLEL_1.to_radians();
    let phi2 = STANDARD_PARALLEL_2.to_radians();
    let n = (m(phi1, e).ln() - m(phi2, e).ln()) / (t(phi1, e).ln() - t(phi2, e).ln());
    let f = m(phi1, e) / (n * t(phi1, e).powf(n));
    let a_f = SEMI_MAJOR_AXIS * f;
    let rho0 = a_f * t(LATITUDE_OF_ORIGIN.to_radians(), e).powf(n);
    Cone { e, n, a_f, rho0 }
}

impl Lest97 {
    pub fn forward(lon_lat: [f64; 2]) -> [f64; 2] {
        let c = cone();
        let phi = lon_lat[1].to_radians();
        let rho = c.a_f * t(phi, c.e).powf(c.n);
        let theta = c.n * (lon_lat[0] - CENTRAL_MERIDIAN).to_radians();
        [
            FALSE_EASTING + rho * theta.sin(),
            FALSE_NORTHING + c.rho0 - rho * theta.cos(),
        ]
    }

    pub fn inverse(xy: [f64; 2]) -> [f64; 2] {
        let c = cone();
        let dx = xy[0] - FALSE_EASTING;
        let dy = c.rho0 - (xy[1] - FALSE_NORTHING);
        let rho = dx.hypot(dy).copysign(c.n);
        let theta = dx.atan2(dy);
        let t = (rho / c.a_f).powf(1.0 / c.n);

        // Latitude has no closed form on the ellipsoid; the series converges
        // well below a micrometre within a handful of rounds.
        let mut phi = FRAC_PI_2 - 2.0 * t.atan();
        for _ in 0..15 {
            let es = c.e * phi.sin();
            let next = FRAC_PI_2 - 2.0 * (t * ((1.0 - es) / (1.0 + es)).powf(c.e / 2.0)).atan();
            if (next - phi).abs() < 1e-12 {
                phi = next;
                break;
            }
            phi = next;
        }

        [
            (theta / c.n).to_degrees() + CENTRAL_MERIDIAN,
            phi.to_degrees(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_origin_maps_to_false_origin() {
        let xy = Lest97::forward([CENTRAL_MERIDIAN, LATITUDE_OF_ORIGIN]);
        assert!((xy[0] - FALSE_EASTING).abs() < 1e-6);
        assert!((xy[1] - FALSE_NORTHING).abs() < 1e-6);
    }

    #[test]
    fn projects_tallinn() {
        let xy = Lest97::forward([24.7536, 59.437]);
        assert!((xy[0] - 542_763.369).abs() < 0.01);
        assert!((xy[1] - 6_589_036.275).abs() < 0.01);
    }

    #[test]
    fn inverse_recovers_lon_lat() {
        let lon_lat = Lest97::inverse([541_043.567, 6_462_362.271]);
        assert!((lon_lat[0] - 24.7).abs() < 1e-6);
        assert!((lon_lat[1] - 58.3).abs() < 1e-6);
    }
}
