//! Length units and the length, position and displacement quantities.
//!
//! The standard unit of this dimension is the metre. Imperial units follow the international definitions (the inch is
//! exactly `0.0254 m`, the mile exactly `1609.344 m`).
//!
//! This module provides:
//!
//! - [`LengthUnit`] and one marker type per unit ([`Metre`], [`Foot`], …) for the static conversion path.
//! - [`Length`], a scalar distance.
//! - [`Position`] and [`PlanarPosition`], points relative to an origin. Positions are affine: the difference of two
//!   positions is a [`Displacement`], and a displacement moves a position. Two positions never add to each other,
//!   while scaling or negating a position scales it about the origin.
//! - [`Displacement`] and [`PlanarDisplacement`], free vectors of length dimension.
//!
//! ```rust
//! use physq_core::length::{Length, LengthUnit, Position};
//! use physq_core::Direction;
//!
//! let p = Length::new(7.0, LengthUnit::Metre) * Direction::new(2.0, -3.0, 6.0);
//! assert_eq!(p, Position::new([2.0, -3.0, 6.0], LengthUnit::Metre));
//! ```

use crate::{Dimensions, Direction, PlanarDirection};
use core::ops::{Add, AddAssign, Sub, SubAssign};
use physq_derive::Unit;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "length", dimensions = Dimensions::LENGTH)]
pub enum LengthUnit {
    /// Metre (SI base unit).
    #[unit(symbol = "m", scale = 1.0, standard, spellings = ["metre", "metres", "meter", "meters"])]
    Metre,
    /// Kilometre (`1000 m`).
    #[unit(symbol = "km", scale = 1e3, spellings = ["kilometre", "kilometres", "kilometer", "kilometers"])]
    Kilometre,
    /// Decimetre (`0.1 m`).
    #[unit(symbol = "dm", scale = 1e-1, spellings = ["decimetre", "decimetres", "decimeter", "decimeters"])]
    Decimetre,
    /// Centimetre (`0.01 m`).
    #[unit(symbol = "cm", scale = 1e-2, spellings = ["centimetre", "centimetres", "centimeter", "centimeters"])]
    Centimetre,
    /// Millimetre (`1e-3 m`).
    #[unit(symbol = "mm", scale = 1e-3, spellings = ["millimetre", "millimetres", "millimeter", "millimeters"])]
    Millimetre,
    /// Micrometre (`1e-6 m`).
    #[unit(symbol = "μm", scale = 1e-6, spellings = ["um", "micrometre", "micrometres", "micrometer", "micrometers", "micron", "microns"])]
    Micrometre,
    /// Nanometre (`1e-9 m`).
    #[unit(symbol = "nm", scale = 1e-9, spellings = ["nanometre", "nanometres", "nanometer", "nanometers"])]
    Nanometre,
    /// Statute mile (`1609.344 m`).
    #[unit(symbol = "mi", scale = 1609.344, spellings = ["mile", "miles"])]
    Mile,
    /// Nautical mile (`1852 m`).
    #[unit(symbol = "nmi", scale = 1852.0, spellings = ["NM", "nautical mile", "nautical miles"])]
    NauticalMile,
    /// Yard (`0.9144 m`).
    #[unit(symbol = "yd", scale = 0.9144, spellings = ["yard", "yards"])]
    Yard,
    /// Foot (`0.3048 m`).
    #[unit(symbol = "ft", scale = 0.3048, spellings = ["foot", "feet", "'"])]
    Foot,
    /// Inch (`0.0254 m`).
    #[unit(symbol = "in", scale = 0.0254, spellings = ["inch", "inches", "\""])]
    Inch,
    /// Thousandth of an inch.
    #[unit(symbol = "mil", scale = 2.54e-5, spellings = ["mils", "thou"])]
    Mil,
    /// Millionth of an inch.
    #[unit(symbol = "μin", scale = 2.54e-8, spellings = ["uin", "microinch", "microinches"])]
    Microinch,
}

scalar_quantity! {
    /// A scalar distance.
    ///
    /// ```rust
    /// use physq_core::length::{Foot, Length, LengthUnit};
    ///
    /// const TEN_FEET: Length = Length::create::<Foot>(10.0);
    /// assert!((TEN_FEET.value() - 3.048).abs() < 1e-12);
    /// assert!((TEN_FEET.value_in(LengthUnit::Inch) - 120.0).abs() < 1e-9);
    /// ```
    Length: LengthUnit
}

vector_quantity! {
    /// A point in space, relative to an origin.
    ///
    /// Positions do not add to one another; subtracting two positions gives a [`Displacement`].
    affine Position: LengthUnit, magnitude Length, planar PlanarPosition
}

vector_quantity! {
    /// A change of position in space.
    Displacement: LengthUnit, magnitude Length, planar PlanarDisplacement
}

planar_quantity! {
    /// A point in the plane, relative to an origin.
    affine PlanarPosition: LengthUnit, magnitude Length
}

planar_quantity! {
    /// A change of position in the plane.
    PlanarDisplacement: LengthUnit, magnitude Length
}

impl_directed!(Length, Direction => Position);
impl_directed!(Length, PlanarDirection => PlanarPosition);

// ─────────────────────────────────────────────────────────────────────────────
// Affine arithmetic
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! affine_ops {
    ($point:ident, $offset:ident) => {
        impl Sub for $point {
            type Output = $offset;

            #[inline]
            fn sub(self, rhs: Self) -> $offset {
                $offset::standard(crate::quantity::Linear::minus(self.value, rhs.value))
            }
        }

        impl Add<$offset> for $point {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $offset) -> Self {
                $point::standard(crate::quantity::Linear::plus(self.value, rhs.value))
            }
        }

        impl Add<$point> for $offset {
            type Output = $point;

            #[inline]
            fn add(self, rhs: $point) -> $point {
                rhs + self
            }
        }

        impl Sub<$offset> for $point {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $offset) -> Self {
                $point::standard(crate::quantity::Linear::minus(self.value, rhs.value))
            }
        }

        impl AddAssign<$offset> for $point {
            #[inline]
            fn add_assign(&mut self, rhs: $offset) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<$offset> for $point {
            #[inline]
            fn sub_assign(&mut self, rhs: $offset) {
                *self = *self - rhs;
            }
        }

        impl From<$offset> for $point {
            /// The position reached from the origin by the displacement.
            #[inline]
            fn from(offset: $offset) -> Self {
                $point::standard(offset.value)
            }
        }

        impl From<$point> for $offset {
            /// The displacement from the origin to the position.
            #[inline]
            fn from(point: $point) -> Self {
                $offset::standard(point.value)
            }
        }
    };
}

affine_ops!(Position, Displacement);
affine_ops!(PlanarPosition, PlanarDisplacement);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Quantity, Unit};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn every_unit_round_trips() {
        for &unit in LengthUnit::ALL {
            for &x in &[0.0, -12.5, 1.0, 7.25e15] {
                let back = unit.from_standard(unit.to_standard(x));
                assert_relative_eq!(back, x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn every_abbreviation_parses_back() {
        for &unit in LengthUnit::ALL {
            assert_eq!(LengthUnit::parse(unit.abbreviation()), Some(unit));
        }
        assert_eq!(LengthUnit::parse("not a unit"), None);
    }

    #[test]
    fn spellings_resolve() {
        assert_eq!("metres".parse::<LengthUnit>(), Ok(LengthUnit::Metre));
        assert_eq!("feet".parse::<LengthUnit>(), Ok(LengthUnit::Foot));
        assert_eq!("NM".parse::<LengthUnit>(), Ok(LengthUnit::NauticalMile));
        assert_eq!("nm".parse::<LengthUnit>(), Ok(LengthUnit::Nanometre));
        assert_eq!("um".parse::<LengthUnit>(), Ok(LengthUnit::Micrometre));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Length
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn construction_stores_metres() {
        let l = Length::new(1.0, LengthUnit::Mile);
        assert_eq!(l.value(), 1609.344);
        assert_relative_eq!(l.value_in(LengthUnit::Foot), 5280.0, max_relative = 1e-12);
        assert_relative_eq!(l.static_value::<Yard>(), 1760.0, max_relative = 1e-12);
    }

    #[test]
    fn static_and_dynamic_construction_agree() {
        assert_eq!(Length::create::<Inch>(3.0), Length::new(3.0, LengthUnit::Inch));
        assert_eq!(Length::create::<Metre>(3.0), Length::standard(3.0));
    }

    #[test]
    fn arithmetic() {
        let mut l = Length::new(1.0, LengthUnit::Metre) + Length::new(50.0, LengthUnit::Centimetre);
        assert_relative_eq!(l.value(), 1.5);
        l -= Length::standard(0.5);
        assert_relative_eq!(l.value(), 1.0);
        l *= 4.0;
        assert_eq!(l, Length::standard(4.0));
        assert_eq!(l / 2.0, Length::standard(2.0));
        assert_eq!(2.0 * l, Length::standard(8.0));
        assert_eq!(l / Length::standard(2.0), 2.0);
        assert_eq!(-l, Length::standard(-4.0));
        assert!(Length::new(1.0, LengthUnit::Yard) < Length::standard(1.0));
    }

    #[test]
    fn display_uses_standard_unit() {
        let l = Length::new(2.5, LengthUnit::Kilometre);
        assert_eq!(l.to_string(), "2500 m");
        assert_eq!(format!("{:.2}", l), "2500.00 m");
        assert_eq!(l.print(LengthUnit::Kilometre, 3), "2.500 km");
    }

    #[test]
    fn hash_distinguishes_values() {
        assert_ne!(hash_of(&Length::standard(1.0)), hash_of(&Length::standard(2.0)));
        assert_eq!(hash_of(&Length::standard(0.0)), hash_of(&Length::standard(-0.0)));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Positions and displacements
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn length_times_direction_is_position() {
        let p = Length::new(7.0, LengthUnit::Metre) * Direction::new(2.0, -3.0, 6.0);
        assert_eq!(p, Position::new([2.0, -3.0, 6.0], LengthUnit::Metre));
        let q = Direction::new(2.0, -3.0, 6.0) * Length::new(7.0, LengthUnit::Metre);
        assert_eq!(p, q);
    }

    #[test]
    fn position_magnitude_and_direction() {
        let p = Position::new([3.0, 0.0, 4.0], LengthUnit::Foot);
        assert_relative_eq!(p.magnitude().value_in(LengthUnit::Foot), 5.0, max_relative = 1e-12);
        assert_eq!(Length::from(p), p.magnitude());
        let d = p.direction();
        assert_relative_eq!(d.x(), 0.6, max_relative = 1e-12);
        assert_relative_eq!(d.z(), 0.8, max_relative = 1e-12);
        let rebuilt = Position::from_magnitude_direction(p.magnitude(), d);
        for (a, b) in rebuilt.value().iter().zip(p.value().iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn positions_are_affine() {
        let a = Position::new([1.0, 2.0, 3.0], LengthUnit::Metre);
        let b = Position::new([4.0, 6.0, 3.0], LengthUnit::Metre);
        let d: Displacement = b - a;
        assert_eq!(d, Displacement::new([3.0, 4.0, 0.0], LengthUnit::Metre));
        assert_eq!(d.magnitude(), Length::standard(5.0));
        assert_eq!(a + d, b);
        assert_eq!(d + a, b);
        assert_eq!(b - d, a);
        let mut c = a;
        c += d;
        c -= d;
        assert_eq!(c, a);
    }

    #[test]
    fn positions_scale_about_the_origin() {
        let p = Position::new([1.0, -2.0, 4.0], LengthUnit::Metre);
        assert_eq!(2.0 * p, Position::standard([2.0, -4.0, 8.0]));
        assert_eq!(p / 2.0, Position::standard([0.5, -1.0, 2.0]));
        assert_eq!(-p, Position::standard([-1.0, 2.0, -4.0]));
        assert_relative_eq!((p * 3.0).magnitude().value(), 3.0 * p.magnitude().value(), max_relative = 1e-12);
        assert_eq!(-PlanarPosition::standard([1.0, 0.0]), PlanarPosition::standard([-1.0, 0.0]));
    }

    #[test]
    fn vector_components_and_units() {
        let d = Displacement::new([1.0, 2.0, 3.0], LengthUnit::Centimetre);
        assert_eq!(d.x(), Length::new(1.0, LengthUnit::Centimetre));
        assert_eq!(d.z(), Length::new(3.0, LengthUnit::Centimetre));
        let cm = d.value_in(LengthUnit::Centimetre);
        assert_relative_eq!(cm[1], 2.0, max_relative = 1e-12);
        assert_eq!(Displacement::create::<Centimetre>([1.0, 2.0, 3.0]), d);
        assert_eq!(d.to_string(), "(0.01, 0.02, 0.03) m");
    }

    #[test]
    fn planar_projection_and_lift() {
        let p = Position::standard([1.0, 2.0, 3.0]);
        assert_eq!(p.planar(), PlanarPosition::standard([1.0, 2.0]));
        assert_eq!(Position::from(PlanarPosition::standard([1.0, 2.0])), Position::standard([1.0, 2.0, 0.0]));
        let planar = Length::standard(5.0) * PlanarDirection::new(3.0, 4.0);
        assert_relative_eq!(planar.x().value(), 3.0, max_relative = 1e-12);
        assert_relative_eq!(planar.y().value(), 4.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_position_has_nan_direction() {
        assert!(Position::zero().direction().x().is_nan());
    }

    proptest! {
        #[test]
        fn prop_value_in_inverts_new(v in -1e9..1e9f64, idx in 0usize..14) {
            let unit = LengthUnit::ALL[idx];
            let l = Length::new(v, unit);
            prop_assert!((l.value_in(unit) - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_position_difference_roundtrip(
            a in prop::array::uniform3(-1e6..1e6f64),
            b in prop::array::uniform3(-1e6..1e6f64),
        ) {
            let pa = Position::standard(a);
            let pb = Position::standard(b);
            let back = pa + (pb - pa);
            for i in 0..3 {
                prop_assert!((back.value()[i] - b[i]).abs() <= 1e-9 * b[i].abs().max(1.0));
            }
        }
    }
}
