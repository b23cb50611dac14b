//! Solar coordinate frames and sky coordinates.

use chrono::NaiveDateTime;

use crate::ephemeris::earth_observer;
use crate::error::{Error, Result};
use crate::time::parse_time;
use crate::units::{Quantity, Unit};

/// Nominal photospheric solar radius (IAU 2015 B3) in kilometres.
pub const RSUN_REF_KM: f64 = 695_700.0;

// ── Types ──

/// The closed set of solar frames a coordinate may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Helioprojective,
    HeliographicStonyhurst,
    HeliographicCarrington,
    Heliocentric,
}

impl core::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            FrameKind::Helioprojective => "helioprojective",
            FrameKind::HeliographicStonyhurst => "heliographic_stonyhurst",
            FrameKind::HeliographicCarrington => "heliographic_carrington",
            FrameKind::Heliocentric => "heliocentric",
        };
        f.write_str(name)
    }
}

/// A point in the heliographic Stonyhurst frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliographicPosition {
    pub lon: Quantity,
    pub lat: Quantity,
    pub radius: Quantity,
}

impl HeliographicPosition {
    /// Angles must be angular and `radius` a positive, finite length.
    pub fn new(lon: Quantity, lat: Quantity, radius: Quantity) -> Result<Self> {
        lon.require(Unit::DEGREE)?;
        lat.require(Unit::DEGREE)?;
        radius.require(Unit::METER)?;
        if !(radius.value() > 0.0 && radius.value().is_finite()) {
            return Err(Error::InvalidObserverDistance);
        }
        Ok(HeliographicPosition { lon, lat, radius })
    }
}

/// The vantage point an observer-centred frame is defined from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observer {
    /// The Earth at the frame's observation time.
    Earth,
    /// A fixed heliographic Stonyhurst position.
    Position(HeliographicPosition),
}

impl Observer {
    /// Resolve to a concrete heliographic Stonyhurst position at `obstime`.
    pub fn resolve(&self, obstime: &NaiveDateTime) -> HeliographicPosition {
        match self {
            Observer::Earth => earth_observer(obstime),
            Observer::Position(p) => *p,
        }
    }
}

/// A solar coordinate frame together with its frame attributes.
///
/// Only the observer-centred frames (helioprojective and heliocentric) carry
/// an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Helioprojective {
        obstime: Option<NaiveDateTime>,
        observer: Option<Observer>,
        rsun: Quantity,
    },
    HeliographicStonyhurst {
        obstime: Option<NaiveDateTime>,
    },
    HeliographicCarrington {
        obstime: Option<NaiveDateTime>,
    },
    Heliocentric {
        obstime: Option<NaiveDateTime>,
        observer: Option<Observer>,
    },
}

impl Frame {
    pub fn helioprojective() -> Self {
        Frame::Helioprojective {
            obstime: None,
            observer: None,
            rsun: RSUN_REF_KM * Unit::KILOMETER,
        }
    }

    pub fn heliographic_stonyhurst() -> Self {
        Frame::HeliographicStonyhurst { obstime: None }
    }

    pub fn heliographic_carrington() -> Self {
        Frame::HeliographicCarrington { obstime: None }
    }

    pub fn heliocentric() -> Self {
        Frame::Heliocentric {
            obstime: None,
            observer: None,
        }
    }

    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Helioprojective { .. } => FrameKind::Helioprojective,
            Frame::HeliographicStonyhurst { .. } => FrameKind::HeliographicStonyhurst,
            Frame::HeliographicCarrington { .. } => FrameKind::HeliographicCarrington,
            Frame::Heliocentric { .. } => FrameKind::Heliocentric,
        }
    }

    pub fn obstime(&self) -> Option<NaiveDateTime> {
        match *self {
            Frame::Helioprojective { obstime, .. }
            | Frame::HeliographicStonyhurst { obstime }
            | Frame::HeliographicCarrington { obstime }
            | Frame::Heliocentric { obstime, .. } => obstime,
        }
    }

    pub fn observer(&self) -> Option<Observer> {
        match *self {
            Frame::Helioprojective { observer, .. } | Frame::Heliocentric { observer, .. } => {
                observer
            }
            Frame::HeliographicStonyhurst { .. } | Frame::HeliographicCarrington { .. } => None,
        }
    }

    pub fn with_obstime(mut self, time: NaiveDateTime) -> Self {
        match &mut self {
            Frame::Helioprojective { obstime, .. }
            | Frame::HeliographicStonyhurst { obstime }
            | Frame::HeliographicCarrington { obstime }
            | Frame::Heliocentric { obstime, .. } => *obstime = Some(time),
        }
        self
    }

    /// Set the observation time from a string such as `2013-10-28 00:00`.
    pub fn with_obstime_str(self, time: &str) -> Result<Self> {
        Ok(self.with_obstime(parse_time(time)?))
    }

    /// Set the observer. Heliographic frames have no observer and ignore it.
    pub fn with_observer(mut self, new_observer: Observer) -> Self {
        match &mut self {
            Frame::Helioprojective { observer, .. } | Frame::Heliocentric { observer, .. } => {
                *observer = Some(new_observer)
            }
            Frame::HeliographicStonyhurst { .. } | Frame::HeliographicCarrington { .. } => {}
        }
        self
    }

    /// Override the reference solar radius of a helioprojective frame.
    pub fn with_rsun(mut self, radius: Quantity) -> Result<Self> {
        radius.require(Unit::METER)?;
        if let Frame::Helioprojective { rsun, .. } = &mut self {
            *rsun = radius;
        }
        Ok(self)
    }
}

/// Coordinate components, as angles or as Cartesian lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Components {
    Spherical { lon: Quantity, lat: Quantity },
    Cartesian { x: Quantity, y: Quantity, z: Quantity },
}

/// A position in a solar [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyCoord {
    components: Components,
    frame: Frame,
}

impl SkyCoord {
    /// Build a spherical coordinate; `lon` and `lat` must be angles.
    pub fn new(lon: Quantity, lat: Quantity, frame: Frame) -> Result<Self> {
        lon.require(Unit::DEGREE)?;
        lat.require(Unit::DEGREE)?;
        Ok(SkyCoord {
            components: Components::Spherical { lon, lat },
            frame,
        })
    }

    /// Build a Cartesian coordinate; every component must be a length.
    pub fn from_cartesian(x: Quantity, y: Quantity, z: Quantity, frame: Frame) -> Result<Self> {
        for c in [x, y, z] {
            c.require(Unit::METER)?;
        }
        Ok(SkyCoord {
            components: Components::Cartesian { x, y, z },
            frame,
        })
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    /// `(lon, lat)` for spherical coordinates.
    pub fn spherical(&self) -> Option<(Quantity, Quantity)> {
        match self.components {
            Components::Spherical { lon, lat } => Some((lon, lat)),
            Components::Cartesian { .. } => None,
        }
    }
}

/// Anything that may be handed to the header builder as its reference
/// coordinate. Non-coordinate values report `None`.
pub trait CoordinateSource {
    fn sky_coord(&self) -> Option<&SkyCoord>;
}

impl CoordinateSource for SkyCoord {
    fn sky_coord(&self) -> Option<&SkyCoord> {
        Some(self)
    }
}

impl CoordinateSource for [f64] {
    fn sky_coord(&self) -> Option<&SkyCoord> {
        None
    }
}

impl<V> CoordinateSource for Quantity<V> {
    fn sky_coord(&self) -> Option<&SkyCoord> {
        None
    }
}

#[cfg(feature = "array")]
impl<S, D> CoordinateSource for ndarray::ArrayBase<S, D>
where
    S: ndarray::RawData,
    D: ndarray::Dimension,
{
    fn sky_coord(&self) -> Option<&SkyCoord> {
        None
    }
}
