//! Construction of FITS-WCS headers for solar images.
//!
//! [`make_fitswcs_header`] covers the common case; [`HeaderBuilder`] takes the
//! optional reference pixel, plate scale, rotation, projection and instrument
//! keywords.
//!
//! ```
//! use solar_fitswcs::{make_fitswcs_header, Frame, Observer, SkyCoord, Unit};
//!
//! let frame = Frame::helioprojective()
//!     .with_observer(Observer::Earth)
//!     .with_obstime_str("2013-10-28 00:00")
//!     .unwrap();
//! let coord = SkyCoord::new(0.0 * Unit::ARCSEC, 0.0 * Unit::ARCSEC, frame).unwrap();
//! let header = make_fitswcs_header(&[10usize, 10], &coord).unwrap();
//! assert_eq!(header.get_str("ctype1"), Some("HPLN-TAN"));
//! assert_eq!(header.get_f64("crpix1"), Some(5.5));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::frame::{CoordinateSource, Frame, FrameKind};
use crate::header::Header;
use crate::keywords::instrument_keyword;
use crate::time::format_isot;
use crate::units::{Quantity, Scalable, Unit};
use crate::value::Value;

const IDENTITY: [[f64; 2]; 2] = [[1.0, 0.0], [0.0, 1.0]];

// ── Inputs ──

/// Anything with an array shape. Only two-dimensional shapes are accepted by
/// the builder.
pub trait ImageShape {
    fn image_shape(&self) -> &[usize];
}

impl ImageShape for [usize] {
    fn image_shape(&self) -> &[usize] {
        self
    }
}

impl<const N: usize> ImageShape for [usize; N] {
    fn image_shape(&self) -> &[usize] {
        self
    }
}

impl ImageShape for Vec<usize> {
    fn image_shape(&self) -> &[usize] {
        self
    }
}

#[cfg(feature = "array")]
impl<S, D> ImageShape for ndarray::ArrayBase<S, D>
where
    S: ndarray::RawData,
    D: ndarray::Dimension,
{
    fn image_shape(&self) -> &[usize] {
        self.shape()
    }
}

/// A builder argument that should be a [`Quantity`] but may arrive as a bare
/// number, which is rejected at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument<V> {
    Bare(V),
    Quantity(Quantity<V>),
}

impl<V: Scalable> Argument<V> {
    fn require(self, name: &'static str, unit: Unit) -> Result<Quantity<V>> {
        match self {
            Argument::Bare(_) => Err(Error::InvalidInputKind(name)),
            Argument::Quantity(q) => {
                q.require(unit)?;
                Ok(q)
            }
        }
    }
}

impl<V> From<Quantity<V>> for Argument<V> {
    fn from(q: Quantity<V>) -> Self {
        Argument::Quantity(q)
    }
}

impl From<f64> for Argument<f64> {
    fn from(v: f64) -> Self {
        Argument::Bare(v)
    }
}

impl From<[f64; 2]> for Argument<[f64; 2]> {
    fn from(v: [f64; 2]) -> Self {
        Argument::Bare(v)
    }
}

// ── Frame dispatch ──

/// Per-frame header conventions.
struct FrameAxes {
    lon_prefix: &'static str,
    lat_prefix: &'static str,
    unit: Unit,
    unit_per_pixel: Unit,
    projection: &'static str,
}

impl FrameAxes {
    fn for_kind(kind: FrameKind) -> Result<FrameAxes> {
        match kind {
            FrameKind::Helioprojective => Ok(FrameAxes {
                lon_prefix: "HPLN",
                lat_prefix: "HPLT",
                unit: Unit::ARCSEC,
                unit_per_pixel: Unit::ARCSEC_PER_PIXEL,
                projection: "TAN",
            }),
            FrameKind::HeliographicStonyhurst => Ok(FrameAxes {
                lon_prefix: "HGLN",
                lat_prefix: "HGLT",
                unit: Unit::DEGREE,
                unit_per_pixel: Unit::DEGREE_PER_PIXEL,
                projection: "CAR",
            }),
            FrameKind::HeliographicCarrington => Ok(FrameAxes {
                lon_prefix: "CRLN",
                lat_prefix: "CRLT",
                unit: Unit::DEGREE,
                unit_per_pixel: Unit::DEGREE_PER_PIXEL,
                projection: "CAR",
            }),
            FrameKind::Heliocentric => Err(Error::UnsupportedFrameKind(kind)),
        }
    }
}

fn validate_projection_code(code: &str) -> Result<()> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(Error::InvalidProjectionCode)
    }
}

// ── Builder ──

/// Builds a FITS-WCS [`Header`] for an image of shape `data` anchored at
/// `coordinate`.
///
/// Validation happens in [`HeaderBuilder::build`], so option setters never
/// fail.
pub struct HeaderBuilder<'a, D: ?Sized, C: ?Sized> {
    data: &'a D,
    coordinate: &'a C,
    reference_pixel: Option<Argument<[f64; 2]>>,
    scale: Option<Argument<[f64; 2]>>,
    rotation_angle: Option<Argument<f64>>,
    rotation_matrix: Option<[[f64; 2]; 2]>,
    projection_code: Option<String>,
    wavelength: Option<Argument<f64>>,
    instrument: Vec<(&'static str, Value)>,
}

impl<'a, D, C> HeaderBuilder<'a, D, C>
where
    D: ImageShape + ?Sized,
    C: CoordinateSource + ?Sized,
{
    pub fn new(data: &'a D, coordinate: &'a C) -> Self {
        HeaderBuilder {
            data,
            coordinate,
            reference_pixel: None,
            scale: None,
            rotation_angle: None,
            rotation_matrix: None,
            projection_code: None,
            wavelength: None,
            instrument: Vec::new(),
        }
    }

    /// One-indexed pixel that `coordinate` sits on, in `pix`. Defaults to the
    /// centre of the array.
    pub fn reference_pixel(mut self, pixel: impl Into<Argument<[f64; 2]>>) -> Self {
        self.reference_pixel = Some(pixel.into());
        self
    }

    /// Plate scale along each axis, as an angle per pixel. Defaults to
    /// 1 arcsec / pix.
    pub fn scale(mut self, scale: impl Into<Argument<[f64; 2]>>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    /// Rotate the image axes by `angle` (counter-clockwise).
    pub fn rotation_angle(mut self, angle: impl Into<Argument<f64>>) -> Self {
        self.rotation_angle = Some(angle.into());
        self
    }

    /// Set the `PCi_j` matrix directly.
    pub fn rotation_matrix(mut self, matrix: [[f64; 2]; 2]) -> Self {
        self.rotation_matrix = Some(matrix);
        self
    }

    /// Three-letter projection code such as `TAN` or `CAR`.
    pub fn projection_code(mut self, code: &str) -> Self {
        self.projection_code = Some(String::from(code));
        self
    }

    /// Observation wavelength; fills `wavelnth` and `waveunit`.
    pub fn wavelength(mut self, wavelength: impl Into<Argument<f64>>) -> Self {
        self.wavelength = Some(wavelength.into());
        self
    }

    /// Pass an instrument keyword through to the header.
    ///
    /// Recognised names are `instrument`, `telescope`, `exposure`,
    /// `observatory` and `detector`. Any other name is ignored; this is a
    /// permissive passthrough, not a schema. Use [`Self::wavelength`] for
    /// the observation wavelength.
    pub fn keyword(mut self, name: &str, value: impl Into<Value>) -> Self {
        match instrument_keyword(name) {
            Some(key) => self.instrument.push((key, value.into())),
            None => debug!(name, "ignoring unrecognised instrument keyword"),
        }
        self
    }

    fn pc_matrix(&self) -> Result<[[f64; 2]; 2]> {
        match (self.rotation_angle, self.rotation_matrix) {
            (Some(_), Some(_)) => Err(Error::ConflictingRotation),
            (Some(angle), None) => {
                let theta = angle
                    .require("rotation_angle", Unit::RADIAN)?
                    .to_value(Unit::RADIAN)?;
                let (s, c) = (libm::sin(theta), libm::cos(theta));
                Ok([[c, -s], [s, c]])
            }
            (None, Some(matrix)) => Ok(matrix),
            (None, None) => Ok(IDENTITY),
        }
    }

    /// Validate the inputs and assemble the header.
    pub fn build(self) -> Result<Header> {
        let coordinate = self
            .coordinate
            .sky_coord()
            .ok_or(Error::InvalidInputKind("coordinate"))?;
        let frame = coordinate.frame();
        let obstime = frame.obstime().ok_or(Error::MissingObservationTime)?;
        let axes = FrameAxes::for_kind(frame.kind())?;

        let shape = self.data.image_shape();
        if shape.len() != 2 {
            return Err(Error::InvalidDimensions(shape.len()));
        }
        let (lon, lat) = coordinate
            .spherical()
            .ok_or(Error::InvalidInputKind("coordinate"))?;

        let crpix = match self.reference_pixel {
            Some(arg) => arg
                .require("reference_pixel", Unit::PIXEL)?
                .to_value(Unit::PIXEL)?,
            None => [
                (shape[1] as f64 + 1.0) / 2.0,
                (shape[0] as f64 + 1.0) / 2.0,
            ],
        };
        let cdelt = match self.scale {
            Some(arg) => arg.require("scale", axes.unit_per_pixel)?,
            None => [1.0, 1.0] * Unit::ARCSEC_PER_PIXEL,
        }
        .to_value(axes.unit_per_pixel)?;
        let pc = self.pc_matrix()?;
        let projection = self.projection_code.as_deref().unwrap_or(axes.projection);
        validate_projection_code(projection)?;

        debug!(frame = %frame.kind(), projection, "building WCS header");

        let mut header = Header::new();
        header.insert("wcsaxes", 2i64);
        header.insert("crpix1", crpix[0]);
        header.insert("crpix2", crpix[1]);
        header.insert("cdelt1", cdelt[0]);
        header.insert("cdelt2", cdelt[1]);
        header.insert("cunit1", axes.unit.name());
        header.insert("cunit2", axes.unit.name());
        header.insert("ctype1", alloc::format!("{}-{}", axes.lon_prefix, projection));
        header.insert("ctype2", alloc::format!("{}-{}", axes.lat_prefix, projection));
        header.insert("crval1", lon.to_value(axes.unit)?);
        header.insert("crval2", lat.to_value(axes.unit)?);
        header.insert("date-obs", format_isot(&obstime));
        header.insert("pc1_1", pc[0][0]);
        header.insert("pc1_2", pc[0][1]);
        header.insert("pc2_1", pc[1][0]);
        header.insert("pc2_2", pc[1][1]);

        insert_observer(&mut header, frame, &obstime)?;

        if let Some(arg) = self.wavelength {
            let wavelength = arg.require("wavelength", Unit::METER)?;
            header.insert("wavelnth", wavelength.value());
            header.insert("waveunit", wavelength.unit().name());
        }
        for (key, value) in self.instrument {
            header.insert(key, value);
        }

        trace!(keywords = header.len(), "WCS header complete");
        Ok(header)
    }
}

/// Add observer position keywords for frames that define an observer.
fn insert_observer(
    header: &mut Header,
    frame: &Frame,
    obstime: &chrono::NaiveDateTime,
) -> Result<()> {
    let (observer, rsun) = match *frame {
        Frame::Helioprojective {
            observer: Some(observer),
            rsun,
            ..
        } => (observer, rsun),
        _ => return Ok(()),
    };

    let position = observer.resolve(obstime);
    let dsun = position.radius.to_value(Unit::METER)?;
    let rsun = rsun.to_value(Unit::METER)?;
    if !(dsun > rsun) {
        return Err(Error::InvalidObserverDistance);
    }
    let angular_radius = (libm::asin(rsun / dsun) * Unit::RADIAN).to_value(Unit::ARCSEC)?;

    header.insert("hgln_obs", position.lon.to_value(Unit::DEGREE)?);
    header.insert("hglt_obs", position.lat.to_value(Unit::DEGREE)?);
    header.insert("dsun_obs", dsun);
    header.insert("rsun_ref", rsun);
    header.insert("rsun_obs", angular_radius);
    Ok(())
}

/// Build a FITS-WCS header with default reference pixel, scale and rotation.
pub fn make_fitswcs_header<D, C>(data: &D, coordinate: &C) -> Result<Header>
where
    D: ImageShape + ?Sized,
    C: CoordinateSource + ?Sized,
{
    HeaderBuilder::new(data, coordinate).build()
}
