//! Physical units and quantities.
//!
//! A [`Unit`] is a scale factor to a base unit plus integer exponents over the
//! four dimensions this crate needs: angle (radian), length (metre), time
//! (second) and detector pixels. Two units are *equivalent* when their
//! exponents match; conversion between equivalent units is a single multiply.

use core::f64::consts::PI;
use core::ops::Mul;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dimensions {
    angle: i8,
    length: i8,
    time: i8,
    pixel: i8,
}

impl Dimensions {
    const NONE: Dimensions = Dimensions::new(0, 0, 0, 0);
    const ANGLE: Dimensions = Dimensions::new(1, 0, 0, 0);
    const LENGTH: Dimensions = Dimensions::new(0, 1, 0, 0);
    const TIME: Dimensions = Dimensions::new(0, 0, 1, 0);
    const PIXEL: Dimensions = Dimensions::new(0, 0, 0, 1);
    const ANGLE_PER_PIXEL: Dimensions = Dimensions::new(1, 0, 0, -1);

    const fn new(angle: i8, length: i8, time: i8, pixel: i8) -> Self {
        Dimensions {
            angle,
            length,
            time,
            pixel,
        }
    }
}

/// A unit of measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    name: &'static str,
    scale: f64,
    dims: Dimensions,
}

impl Unit {
    pub const DIMENSIONLESS: Unit = Unit::new("dimensionless", 1.0, Dimensions::NONE);
    pub const PIXEL: Unit = Unit::new("pix", 1.0, Dimensions::PIXEL);

    pub const RADIAN: Unit = Unit::new("rad", 1.0, Dimensions::ANGLE);
    pub const DEGREE: Unit = Unit::new("deg", PI / 180.0, Dimensions::ANGLE);
    pub const ARCMIN: Unit = Unit::new("arcmin", PI / 10_800.0, Dimensions::ANGLE);
    pub const ARCSEC: Unit = Unit::new("arcsec", PI / 648_000.0, Dimensions::ANGLE);

    pub const METER: Unit = Unit::new("m", 1.0, Dimensions::LENGTH);
    pub const KILOMETER: Unit = Unit::new("km", 1.0e3, Dimensions::LENGTH);
    pub const ASTRONOMICAL_UNIT: Unit = Unit::new("AU", 1.495_978_707e11, Dimensions::LENGTH);
    pub const NANOMETER: Unit = Unit::new("nm", 1.0e-9, Dimensions::LENGTH);
    pub const ANGSTROM: Unit = Unit::new("Angstrom", 1.0e-10, Dimensions::LENGTH);

    pub const SECOND: Unit = Unit::new("s", 1.0, Dimensions::TIME);

    pub const ARCSEC_PER_PIXEL: Unit =
        Unit::new("arcsec / pix", PI / 648_000.0, Dimensions::ANGLE_PER_PIXEL);
    pub const DEGREE_PER_PIXEL: Unit =
        Unit::new("deg / pix", PI / 180.0, Dimensions::ANGLE_PER_PIXEL);

    const fn new(name: &'static str, scale: f64, dims: Dimensions) -> Self {
        Unit { name, scale, dims }
    }

    /// The FITS unit string (`arcsec`, `deg`, `m`, ...).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if `self` and `other` measure the same physical dimension.
    pub fn is_equivalent(&self, other: Unit) -> bool {
        self.dims == other.dims
    }

    /// Returns `true` for any plain angle unit.
    pub fn is_angle(&self) -> bool {
        self.dims == Dimensions::ANGLE
    }

    /// Returns `true` for any plain length unit.
    pub fn is_length(&self) -> bool {
        self.dims == Dimensions::LENGTH
    }

    /// Factor that converts a value in `self` into a value in `target`.
    pub fn conversion_factor(&self, target: Unit) -> Result<f64> {
        if !self.is_equivalent(target) {
            return Err(Error::IncompatibleUnits {
                expected: target.name,
                found: self.name,
            });
        }
        Ok(self.scale / target.scale)
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}

/// Values that can be multiplied through by a unit conversion factor.
pub trait Scalable: Copy {
    fn scaled(self, factor: f64) -> Self;
}

impl Scalable for f64 {
    fn scaled(self, factor: f64) -> Self {
        self * factor
    }
}

impl<const N: usize> Scalable for [f64; N] {
    fn scaled(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }
}

/// A value (scalar or fixed-size array) tagged with a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<V = f64> {
    value: V,
    unit: Unit,
}

impl<V: Scalable> Quantity<V> {
    pub fn new(value: V, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// The raw value, expressed in [`Quantity::unit`].
    pub fn value(&self) -> V {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Convert to `unit` and return the bare value.
    pub fn to_value(&self, unit: Unit) -> Result<V> {
        let factor = self.unit.conversion_factor(unit)?;
        Ok(self.value.scaled(factor))
    }

    /// Convert to an equivalent `unit`.
    pub fn to(&self, unit: Unit) -> Result<Quantity<V>> {
        Ok(Quantity::new(self.to_value(unit)?, unit))
    }

    /// Fail unless this quantity is equivalent to `expected`.
    pub(crate) fn require(&self, expected: Unit) -> Result<()> {
        self.unit.conversion_factor(expected).map(|_| ())
    }
}

impl Mul<Unit> for f64 {
    type Output = Quantity<f64>;

    fn mul(self, unit: Unit) -> Quantity<f64> {
        Quantity::new(self, unit)
    }
}

impl<const N: usize> Mul<Unit> for [f64; N] {
    type Output = Quantity<[f64; N]>;

    fn mul(self, unit: Unit) -> Quantity<[f64; N]> {
        Quantity::new(self, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcsec_to_degree() {
        let q = 3600.0 * Unit::ARCSEC;
        let deg = q.to_value(Unit::DEGREE).unwrap();
        assert!((deg - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kilometer_to_meter() {
        let q = 695_700.0 * Unit::KILOMETER;
        assert!((q.to_value(Unit::METER).unwrap() - 6.957e8).abs() < 1e-3);
    }

    #[test]
    fn array_quantity_converts_every_element() {
        let q = [1.0, 2.0] * Unit::DEGREE_PER_PIXEL;
        let v = q.to_value(Unit::ARCSEC_PER_PIXEL).unwrap();
        assert!((v[0] - 3600.0).abs() < 1e-9);
        assert!((v[1] - 7200.0).abs() < 1e-9);
    }

    #[test]
    fn dimensionless_is_not_pixel() {
        let q = Quantity::new([0.0, 0.0], Unit::DIMENSIONLESS);
        assert_eq!(
            q.to_value(Unit::PIXEL),
            Err(Error::IncompatibleUnits {
                expected: "pix",
                found: "dimensionless",
            })
        );
    }

    #[test]
    fn angle_is_not_angle_per_pixel() {
        let q = [0.0, 0.0] * Unit::ARCSEC;
        assert!(q.require(Unit::ARCSEC_PER_PIXEL).is_err());
        assert!(q.require(Unit::RADIAN).is_ok());
    }

    #[test]
    fn unit_classification() {
        assert!(Unit::ARCMIN.is_angle());
        assert!(!Unit::ARCSEC_PER_PIXEL.is_angle());
        assert!(Unit::ANGSTROM.is_length());
        assert!(Unit::ANGSTROM.is_equivalent(Unit::NANOMETER));
        assert!(!Unit::SECOND.is_equivalent(Unit::METER));
    }

    #[test]
    fn to_keeps_target_unit() {
        let q = (1.0 * Unit::ASTRONOMICAL_UNIT).to(Unit::KILOMETER).unwrap();
        assert_eq!(q.unit(), Unit::KILOMETER);
        assert!((q.value() - 1.495_978_707e8).abs() < 1e-3);
    }
}
