//! Known solar map metadata keywords.

/// Every keyword a solar map understands, with a short description.
/// Keywords a map cannot be built without are marked `**required`.
const META_KEYWORDS: [(&str, &str); 34] = [
    ("wcsaxes", "Number of world coordinate axes"),
    ("cunit1", "Units of the coordinate increments along naxis1, e.g. arcsec **required"),
    ("cunit2", "Units of the coordinate increments along naxis2, e.g. arcsec **required"),
    ("crval1", "Coordinate value at reference point on naxis1 **required"),
    ("crval2", "Coordinate value at reference point on naxis2 **required"),
    ("cdelt1", "Spatial scale of pixels for naxis1, i.e. coordinate increment at reference point"),
    ("cdelt2", "Spatial scale of pixels for naxis2, i.e. coordinate increment at reference point"),
    ("crpix1", "Pixel coordinate at reference point naxis1"),
    ("crpix2", "Pixel coordinate at reference point naxis2"),
    ("ctype1", "Coordinate type projection along naxis1 of data, e.g. HPLN-TAN"),
    ("ctype2", "Coordinate type projection along naxis2 of data, e.g. HPLT-TAN"),
    ("hgln_obs", "Heliographic longitude of observation, in degrees"),
    ("hglt_obs", "Heliographic latitude of observation, in degrees"),
    ("dsun_obs", "Distance from the Sun to the observer, in metres"),
    ("rsun_ref", "Reference radius of the Sun, in metres"),
    ("rsun_obs", "Angular radius of the Sun as seen by the observer, in arcseconds"),
    ("crln_obs", "Carrington longitude of the observer, in degrees"),
    ("crlt_obs", "Carrington latitude of the observer, in degrees"),
    ("solar_r", "Angular radius of the Sun, in arcseconds"),
    ("date-obs", "Date and time of the observation **required"),
    ("obsrvtry", "Name of the observatory"),
    ("instrume", "Name of the instrument"),
    ("telescop", "Name of the telescope"),
    ("detector", "Name of the detector"),
    ("wavelnth", "Wavelength of the observation"),
    ("waveunit", "Units of the wavelength, e.g. Angstrom"),
    ("exptime", "Exposure time of the observation, in seconds"),
    ("pc1_1", "Matrix element PCi_j describing the rotation required to align the solar North with the top of the image"),
    ("pc1_2", "Matrix element PCi_j describing the rotation required to align the solar North with the top of the image"),
    ("pc2_1", "Matrix element PCi_j describing the rotation required to align the solar North with the top of the image"),
    ("pc2_2", "Matrix element PCi_j describing the rotation required to align the solar North with the top of the image"),
    ("crota2", "Rotation of the horizontal and vertical axes in degrees"),
    ("naxis1", "Number of pixels along naxis1"),
    ("naxis2", "Number of pixels along naxis2"),
];

/// Instrument overrides the header builder accepts, mapped to the header
/// keyword each one fills.
/// `wavelength` is absent: it carries a unit and goes through
/// `HeaderBuilder::wavelength` so `wavelnth` and `waveunit` stay paired.
const INSTRUMENT_KEYWORDS: [(&str, &str); 5] = [
    ("instrument", "instrume"),
    ("telescope", "telescop"),
    ("exposure", "exptime"),
    ("observatory", "obsrvtry"),
    ("detector", "detector"),
];

/// The ordered table of metadata keywords and their descriptions.
pub fn meta_keywords() -> &'static [(&'static str, &'static str)] {
    &META_KEYWORDS
}

/// Description of `key` (case-insensitive), if it is a known keyword.
pub fn describe(key: &str) -> Option<&'static str> {
    META_KEYWORDS
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|&(_, d)| d)
}

/// Header keyword for an instrument override name. Unknown names map to
/// `None` and are dropped by the caller.
pub fn instrument_keyword(name: &str) -> Option<&'static str> {
    INSTRUMENT_KEYWORDS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, k)| k)
}
