//! End-to-end checks of header construction and map creation.

#![cfg(feature = "array")]

use ndarray::Array2;
use solar_fitswcs::{
    make_fitswcs_header, meta_keywords, Error, Frame, FrameKind, GenericMap, HeaderBuilder,
    Observer, Quantity, SkyCoord, Unit, Value,
};

const OBSTIME: &str = "2013-10-28 00:00";

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn map_data() -> Array2<f64> {
    Array2::from_shape_fn((10, 10), |(i, j)| ((i * 7 + j * 13) % 17) as f64 / 17.0)
}

fn hpc_test_header() -> SkyCoord {
    let frame = Frame::helioprojective()
        .with_observer(Observer::Earth)
        .with_obstime_str(OBSTIME)
        .unwrap();
    SkyCoord::new(0.0 * Unit::ARCSEC, 0.0 * Unit::ARCSEC, frame).unwrap()
}

fn hgc_test_header() -> SkyCoord {
    let frame = Frame::heliographic_carrington()
        .with_observer(Observer::Earth)
        .with_obstime_str(OBSTIME)
        .unwrap();
    SkyCoord::new(70.0 * Unit::DEGREE, -30.0 * Unit::DEGREE, frame).unwrap()
}

fn hgs_test_header() -> SkyCoord {
    let frame = Frame::heliographic_stonyhurst()
        .with_observer(Observer::Earth)
        .with_obstime_str(OBSTIME)
        .unwrap();
    SkyCoord::new(-50.0 * Unit::DEGREE, 50.0 * Unit::DEGREE, frame).unwrap()
}

fn hcc_test_header() -> SkyCoord {
    let frame = Frame::heliocentric().with_obstime_str(OBSTIME).unwrap();
    SkyCoord::from_cartesian(
        -72_241.0 * Unit::KILOMETER,
        361_206.1 * Unit::KILOMETER,
        589_951.4 * Unit::KILOMETER,
        frame,
    )
    .unwrap()
}

fn hpc_test_header_notime() -> SkyCoord {
    SkyCoord::new(
        0.0 * Unit::ARCSEC,
        0.0 * Unit::ARCSEC,
        Frame::helioprojective(),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn meta_keywords_table() {
    let meta = meta_keywords();
    assert!(!meta.is_empty());
    assert!(meta.iter().any(|(k, _)| *k == "dsun_obs"));
}

#[test]
fn supported_frames_build() {
    let data = map_data();
    for coord in [hpc_test_header(), hgc_test_header(), hgs_test_header()] {
        assert!(make_fitswcs_header(&data, &coord).is_ok());
    }
}

#[test]
fn heliocentric_unsupported() {
    assert_eq!(
        make_fitswcs_header(&map_data(), &hcc_test_header()),
        Err(Error::UnsupportedFrameKind(FrameKind::Heliocentric))
    );
}

#[test]
fn array_is_not_a_coordinate() {
    let data = map_data();
    assert_eq!(
        make_fitswcs_header(&data, &data),
        Err(Error::InvalidInputKind("coordinate"))
    );
}

#[test]
fn observation_time_required() {
    assert_eq!(
        make_fitswcs_header(&map_data(), &hpc_test_header_notime()),
        Err(Error::MissingObservationTime)
    );
}

#[test]
fn helioprojective_header_contents() {
    let coord = hpc_test_header();
    let header = make_fitswcs_header(&map_data(), &coord).unwrap();
    assert_eq!(header.get_f64("crval1"), Some(0.0));
    assert_eq!(header.get_f64("crpix1"), Some(5.5));
    assert_eq!(header.get_str("ctype1"), Some("HPLN-TAN"));

    let frame = coord.frame();
    let observer = frame.observer().unwrap();
    let obstime = frame.obstime().unwrap();
    let expected = observer
        .resolve(&obstime)
        .radius
        .to_value(Unit::METER)
        .unwrap();
    assert_eq!(header.get_f64("dsun_obs"), Some(expected));
}

#[test]
fn heliographic_headers_have_no_observer() {
    let data = map_data();
    let header = make_fitswcs_header(&data, &hgs_test_header()).unwrap();
    assert!(header.get("dsun_obs").is_none());
    let header = make_fitswcs_header(&data, &hgc_test_header()).unwrap();
    assert!(header.get("dsun_obs").is_none());
}

#[test]
fn arguments_must_be_quantities() {
    let data = map_data();
    let coord = hpc_test_header();
    assert_eq!(
        HeaderBuilder::new(&data, &coord)
            .reference_pixel([0.0, 0.0])
            .build(),
        Err(Error::InvalidInputKind("reference_pixel"))
    );
    assert_eq!(
        HeaderBuilder::new(&data, &coord).scale([0.0, 0.0]).build(),
        Err(Error::InvalidInputKind("scale"))
    );
}

#[test]
fn arguments_must_have_compatible_units() {
    let data = map_data();
    let coord = hpc_test_header();
    let dimensionless = Quantity::new([0.0, 0.0], Unit::DIMENSIONLESS);

    let r = HeaderBuilder::new(&data, &coord)
        .reference_pixel(dimensionless)
        .build();
    assert!(matches!(r, Err(Error::IncompatibleUnits { .. })));

    let r = HeaderBuilder::new(&data, &coord).scale(dimensionless).build();
    assert!(matches!(r, Err(Error::IncompatibleUnits { .. })));

    let r = HeaderBuilder::new(&data, &coord)
        .scale([0.0, 0.0] * Unit::ARCSEC)
        .build();
    assert!(matches!(r, Err(Error::IncompatibleUnits { .. })));
}

#[test]
fn instrument_keyword_helper() {
    let header = HeaderBuilder::new(&map_data(), &hpc_test_header())
        .keyword("instrument", "test name")
        .build()
        .unwrap();
    assert_eq!(header.get("instrume"), Some(&Value::from("test name")));
}

#[test]
fn header_makes_a_map() {
    let data = map_data();
    let header = make_fitswcs_header(&data, &hpc_test_header()).unwrap();
    let map = GenericMap::new(data.clone(), header).unwrap();
    assert_eq!(map.data(), &data);
    assert_eq!(map.coordinate_frame(), Some(FrameKind::Helioprojective));
}
