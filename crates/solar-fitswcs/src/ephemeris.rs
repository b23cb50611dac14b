//! Low-precision Earth ephemeris in the heliographic Stonyhurst frame.
//!
//! Accurate to a few hundredths of a degree in latitude and ~1e-5 AU in
//! distance over the 20th and 21st centuries, which is well below the
//! precision FITS observer keywords are normally quoted to.

use chrono::NaiveDateTime;

use crate::frame::HeliographicPosition;
use crate::time::julian_date;
use crate::units::Unit;

const J2000_JD: f64 = 2_451_545.0;
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;

const SOLAR_EQUATOR_INCLINATION_DEG: f64 = 7.25;
const SOLAR_ASCENDING_NODE_J2000_DEG: f64 = 75.76;
const SOLAR_ASCENDING_NODE_RATE_DEG: f64 = 1.395_833_3;

/// Julian centuries since J2000.0.
fn centuries_since_j2000(time: &NaiveDateTime) -> f64 {
    (julian_date(time) - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Sun's mean anomaly in radians.
fn mean_anomaly(t: f64) -> f64 {
    (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t) * DEG_TO_RAD
}

/// Orbital eccentricity of the Earth.
fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Equation of centre in radians.
fn equation_of_centre(t: f64, m: f64) -> f64 {
    ((1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * libm::sin(m)
        + (0.019_993 - 0.000_101 * t) * libm::sin(2.0 * m)
        + 0.000_289 * libm::sin(3.0 * m))
        * DEG_TO_RAD
}

/// Apparent geocentric ecliptic longitude of the Sun in radians.
fn sun_apparent_longitude(t: f64) -> f64 {
    let mean_longitude = (280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t) * DEG_TO_RAD;
    let true_longitude = mean_longitude + equation_of_centre(t, mean_anomaly(t));
    let omega = (125.04 - 1_934.136 * t) * DEG_TO_RAD;
    true_longitude - (0.005_69 + 0.004_78 * libm::sin(omega)) * DEG_TO_RAD
}

/// Sun-Earth distance in AU.
pub fn sun_earth_distance(time: &NaiveDateTime) -> f64 {
    let t = centuries_since_j2000(time);
    let m = mean_anomaly(t);
    let e = eccentricity(t);
    let true_anomaly = m + equation_of_centre(t, m);
    let semi_major_axis = 1.000_001_018;
    semi_major_axis * (1.0 - e * e) / (1.0 + e * libm::cos(true_anomaly))
}

/// Heliographic latitude of the disk centre as seen from Earth (B0), in
/// radians.
pub fn b0(time: &NaiveDateTime) -> f64 {
    let t = centuries_since_j2000(time);
    let node = (SOLAR_ASCENDING_NODE_J2000_DEG + SOLAR_ASCENDING_NODE_RATE_DEG * t) * DEG_TO_RAD;
    let theta = sun_apparent_longitude(t) - node;
    libm::asin(libm::sin(theta) * libm::sin(SOLAR_EQUATOR_INCLINATION_DEG * DEG_TO_RAD))
}

/// Position of the Earth in the heliographic Stonyhurst frame.
///
/// Stonyhurst longitude is zero at the Earth by construction.
pub fn earth_observer(time: &NaiveDateTime) -> HeliographicPosition {
    HeliographicPosition {
        lon: 0.0 * Unit::DEGREE,
        lat: b0(time) * Unit::RADIAN,
        radius: sun_earth_distance(time) * Unit::ASTRONOMICAL_UNIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_time;

    #[test]
    fn b0_within_inclination() {
        for date in ["2013-01-01", "2013-03-07", "2013-06-06", "2013-09-08", "2013-12-07"] {
            let t = parse_time(date).unwrap();
            let deg = b0(&t) / DEG_TO_RAD;
            assert!(deg.abs() <= 7.26, "B0 = {deg} on {date}");
        }
    }

    #[test]
    fn b0_extremes() {
        // B0 peaks near +7.25 in early September and -7.25 in early March.
        let sep = parse_time("2013-09-08").unwrap();
        let mar = parse_time("2013-03-07").unwrap();
        assert!(b0(&sep) / DEG_TO_RAD > 7.0);
        assert!(b0(&mar) / DEG_TO_RAD < -7.0);
    }

    #[test]
    fn distance_bounds() {
        let perihelion = parse_time("2013-01-02").unwrap();
        let aphelion = parse_time("2013-07-05").unwrap();
        assert!((sun_earth_distance(&perihelion) - 0.9833).abs() < 1e-3);
        assert!((sun_earth_distance(&aphelion) - 1.0167).abs() < 1e-3);
    }

    #[test]
    fn earth_observer_at_stonyhurst_zero() {
        let t = parse_time("2013-10-28 00:00").unwrap();
        let earth = earth_observer(&t);
        assert_eq!(earth.lon.to_value(Unit::DEGREE).unwrap(), 0.0);
        let lat = earth.lat.to_value(Unit::DEGREE).unwrap();
        assert!(lat > 4.0 && lat < 5.5, "B0 = {lat}");
        let au = earth.radius.to_value(Unit::ASTRONOMICAL_UNIT).unwrap();
        assert!((au - 0.9937).abs() < 1e-3, "distance = {au}");
    }
}
