//! A generic solar image: a two-dimensional array plus its WCS header.

use chrono::NaiveDateTime;
use ndarray::Array2;

use crate::error::{Error, Result};
use crate::frame::FrameKind;
use crate::header::Header;
use crate::time::parse_time;

const REQUIRED_NUMERIC: [&str; 6] = ["crpix1", "crpix2", "crval1", "crval2", "cdelt1", "cdelt2"];
const REQUIRED_STRING: [&str; 2] = ["ctype1", "ctype2"];

/// Default unit for axes without a `cunitN` keyword.
const DEFAULT_UNIT: &str = "deg";

/// Image data with validated world-coordinate metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericMap<A = f64> {
    data: Array2<A>,
    meta: Header,
}

fn require_f64(meta: &Header, key: &'static str) -> Result<f64> {
    match meta.get(key) {
        None => Err(Error::MissingKeyword(key)),
        Some(v) => v.as_f64().ok_or(Error::InvalidKeywordValue(key)),
    }
}

fn require_str<'a>(meta: &'a Header, key: &'static str) -> Result<&'a str> {
    match meta.get(key) {
        None => Err(Error::MissingKeyword(key)),
        Some(v) => v.as_str().ok_or(Error::InvalidKeywordValue(key)),
    }
}

/// If the header records an axis length it must agree with the data.
fn check_axis_length(meta: &Header, key: &'static str, len: usize) -> Result<()> {
    match meta.get(key) {
        None => Ok(()),
        Some(v) if v.as_f64() == Some(len as f64) => Ok(()),
        Some(_) => Err(Error::InvalidKeywordValue(key)),
    }
}

impl<A> GenericMap<A> {
    /// Pair `data` with `meta`, checking that the header describes a
    /// two-axis world coordinate system consistent with the array.
    pub fn new(data: Array2<A>, meta: Header) -> Result<Self> {
        for key in REQUIRED_NUMERIC {
            require_f64(&meta, key)?;
        }
        for key in REQUIRED_STRING {
            require_str(&meta, key)?;
        }
        let (rows, columns) = data.dim();
        check_axis_length(&meta, "naxis1", columns)?;
        check_axis_length(&meta, "naxis2", rows)?;
        if let Some(date) = meta.get("date-obs") {
            let text = date.as_str().ok_or(Error::InvalidKeywordValue("date-obs"))?;
            parse_time(text)?;
        }
        Ok(GenericMap { data, meta })
    }

    pub fn data(&self) -> &Array2<A> {
        &self.data
    }

    pub fn meta(&self) -> &Header {
        &self.meta
    }

    /// `(columns, rows)`, i.e. lengths along axis 1 and axis 2.
    pub fn dimensions(&self) -> (usize, usize) {
        let (rows, columns) = self.data.dim();
        (columns, rows)
    }

    fn pair(&self, key1: &str, key2: &str) -> [f64; 2] {
        [
            self.meta.get_f64(key1).unwrap_or_default(),
            self.meta.get_f64(key2).unwrap_or_default(),
        ]
    }

    pub fn reference_pixel(&self) -> [f64; 2] {
        self.pair("crpix1", "crpix2")
    }

    pub fn reference_coordinate(&self) -> [f64; 2] {
        self.pair("crval1", "crval2")
    }

    /// Coordinate increment per pixel, in [`GenericMap::spatial_units`].
    pub fn scale(&self) -> [f64; 2] {
        self.pair("cdelt1", "cdelt2")
    }

    pub fn spatial_units(&self) -> [&str; 2] {
        [
            self.meta.get_str("cunit1").unwrap_or(DEFAULT_UNIT),
            self.meta.get_str("cunit2").unwrap_or(DEFAULT_UNIT),
        ]
    }

    /// The solar frame named by the `ctype1` axis prefix.
    pub fn coordinate_frame(&self) -> Option<FrameKind> {
        let ctype = self.meta.get_str("ctype1")?;
        match ctype.get(..4)? {
            "HPLN" => Some(FrameKind::Helioprojective),
            "HGLN" => Some(FrameKind::HeliographicStonyhurst),
            "CRLN" => Some(FrameKind::HeliographicCarrington),
            _ => None,
        }
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        self.meta.get_str("date-obs").and_then(|t| parse_time(t).ok())
    }

    pub fn instrument(&self) -> Option<&str> {
        self.meta.get_str("instrume")
    }

    /// Observer distance from Sun centre in metres.
    pub fn observer_distance(&self) -> Option<f64> {
        self.meta.get_f64("dsun_obs")
    }

    /// The `PCi_j` matrix, identity when absent.
    pub fn rotation_matrix(&self) -> [[f64; 2]; 2] {
        let get = |key: &str, default: f64| self.meta.get_f64(key).unwrap_or(default);
        [
            [get("pc1_1", 1.0), get("pc1_2", 0.0)],
            [get("pc2_1", 0.0), get("pc2_2", 1.0)],
        ]
    }
}
