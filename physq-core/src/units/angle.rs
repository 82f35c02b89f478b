//! Angle units and the [`Angle`] quantity.
//!
//! The standard unit is the radian. Angles are dimensionless, but they are kept apart from plain numbers so that
//! degrees and radians cannot be mixed up.
//!
//! [`Angle::between`] builds the angle between any two three-component quantities (vectors, directions, positions,
//! velocities, …):
//!
//! ```rust
//! use physq_core::angle::{Angle, AngleUnit};
//! use physq_core::Vector;
//!
//! let right = Angle::between(Vector::new(0.0, -2.0, 0.0), Vector::new(0.0, 0.0, 3.0));
//! assert_eq!(right, Angle::new(90.0, AngleUnit::Degree));
//! ```
//!
//! The cosine ratio is clamped to `[-1, 1]` before taking the arc cosine, so nearly parallel inputs give `0` or `π`
//! rather than NaN. Zero-length inputs still give NaN.

use crate::vector::{dot, norm, AsPlanarVector, AsVector};
use crate::Dimensions;
use core::f64::consts::PI;
use physq_derive::Unit;

/// Units of plane angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "angle", dimensions = Dimensions::DIMENSIONLESS)]
pub enum AngleUnit {
    /// Radian.
    #[unit(symbol = "rad", scale = 1.0, standard, spellings = ["radian", "radians"])]
    Radian,
    /// Degree (`π/180 rad`).
    #[unit(symbol = "deg", scale = PI / 180.0, spellings = ["°", "degree", "degrees"])]
    Degree,
    /// Arcminute (`1/60 deg`).
    #[unit(symbol = "arcmin", scale = PI / 10800.0, spellings = ["′", "arcminute", "arcminutes"])]
    Arcminute,
    /// Arcsecond (`1/3600 deg`).
    #[unit(symbol = "arcsec", scale = PI / 648000.0, spellings = ["″", "arcsecond", "arcseconds"])]
    Arcsecond,
    /// Milliradian.
    #[unit(symbol = "mrad", scale = 1e-3, spellings = ["milliradian", "milliradians"])]
    Milliradian,
    /// Full revolution (`2π rad`).
    #[unit(symbol = "rev", scale = 2.0 * PI, spellings = ["revolution", "revolutions", "turn", "turns"])]
    Revolution,
    /// Gradian (`π/200 rad`).
    #[unit(symbol = "grad", scale = PI / 200.0, spellings = ["gon", "gradian", "gradians"])]
    Gradian,
}

scalar_quantity! {
    /// A plane angle.
    Angle: AngleUnit
}

impl Angle {
    /// Angle between two three-component quantities, in `[0, π]`.
    ///
    /// Computed as `acos(a·b / (|a| |b|))` with the ratio clamped to `[-1, 1]`. NaN when either input has zero length.
    pub fn between<A: AsVector, B: AsVector>(a: A, b: B) -> Self {
        let a = a.as_vector().value;
        let b = b.as_vector().value;
        Self::from_cosine(dot(a, b) / (norm(a) * norm(b)))
    }

    /// Angle between two two-component quantities, in `[0, π]`.
    ///
    /// Same convention as [`Angle::between`].
    pub fn between_planar<A: AsPlanarVector, B: AsPlanarVector>(a: A, b: B) -> Self {
        let a = a.as_planar_vector().value;
        let b = b.as_planar_vector().value;
        Self::from_cosine(dot(a, b) / (norm(a) * norm(b)))
    }

    fn from_cosine(ratio: f64) -> Self {
        // clamp() keeps NaN, so zero-length inputs stay NaN.
        Self {
            value: ratio.clamp(-1.0, 1.0).acos(),
        }
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.value.sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.value.cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.value.tan()
    }

    /// The equivalent angle in `[0, 2π)`.
    #[inline]
    pub fn wrap_positive(self) -> Self {
        Self {
            value: self.value.rem_euclid(2.0 * PI),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{LengthUnit, Position};
    use crate::{Direction, PlanarDirection, PlanarVector, Unit, Vector};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn every_unit_round_trips() {
        for &unit in AngleUnit::ALL {
            for &x in &[0.0, -1.0, 720.0] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn degree_conversions() {
        let a = Angle::new(180.0, AngleUnit::Degree);
        assert_relative_eq!(a.value(), PI, max_relative = 1e-15);
        assert_relative_eq!(a.value_in(AngleUnit::Revolution), 0.5, max_relative = 1e-15);
        assert_relative_eq!(a.value_in(AngleUnit::Gradian), 200.0, max_relative = 1e-12);
        assert_relative_eq!(Angle::new(1.0, AngleUnit::Degree).value_in(AngleUnit::Arcsecond), 3600.0, max_relative = 1e-12);
    }

    #[test]
    fn orthogonal_vectors_are_exactly_ninety_degrees() {
        let right = Angle::between(Vector::new(0.0, -2.0, 0.0), Vector::new(0.0, 0.0, 3.0));
        assert_eq!(right, Angle::new(90.0, AngleUnit::Degree));
        assert_eq!(right.static_value::<Degree>(), 90.0);
    }

    #[test]
    fn between_accepts_any_vector_quantity() {
        let p = Position::new([1.0, 0.0, 0.0], LengthUnit::Metre);
        assert_eq!(Angle::between(p, Direction::X), Angle::zero());
        assert_relative_eq!(Angle::between(p, -Direction::X).value(), PI);
        assert_relative_eq!(
            Angle::between_planar(PlanarVector::new(1.0, 1.0), PlanarDirection::X).value_in(AngleUnit::Degree),
            45.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn nearly_parallel_inputs_are_clamped() {
        let a = Vector::new(0.1, 0.2, 0.3);
        let b = Vector::new(0.1, 0.2, 0.3) * 3.0;
        let angle = Angle::between(a, b);
        assert!(!angle.value().is_nan());
        assert!(angle.value() < 1e-7);
    }

    #[test]
    fn zero_vector_gives_nan() {
        assert!(Angle::between(Vector::zero(), Vector::new(1.0, 0.0, 0.0)).value().is_nan());
        assert!(Angle::between_planar(PlanarVector::zero(), PlanarVector::zero()).value().is_nan());
    }

    #[test]
    fn trigonometry() {
        let a = Angle::new(30.0, AngleUnit::Degree);
        assert_relative_eq!(a.sin(), 0.5, max_relative = 1e-12);
        assert_relative_eq!(Angle::new(60.0, AngleUnit::Degree).cos(), 0.5, max_relative = 1e-12);
        assert_relative_eq!(Angle::new(45.0, AngleUnit::Degree).tan(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(Angle::new(-90.0, AngleUnit::Degree).wrap_positive().value_in(AngleUnit::Degree), 270.0, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_between_is_within_range(
            a in prop::array::uniform3(-1e3..1e3f64),
            b in prop::array::uniform3(-1e3..1e3f64),
        ) {
            let va = Vector::from(a);
            let vb = Vector::from(b);
            prop_assume!(va.magnitude() > 1e-6 && vb.magnitude() > 1e-6);
            let angle = Angle::between(va, vb).value();
            prop_assert!((0.0..=PI).contains(&angle));
            prop_assert_eq!(angle, Angle::between(vb, va).value());
        }
    }
}
