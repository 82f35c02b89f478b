//! Dimensionless vectors and directions.
//!
//! [`Vector`] and [`PlanarVector`] are plain component triples/pairs. [`Direction`] and [`PlanarDirection`] are unit
//! vectors: their constructors normalise the given components, so `Length * Direction` yields a `Position` whose norm
//! is the length.
//!
//! ```rust
//! use physq_core::{Direction, Vector};
//!
//! let d = Direction::new(2.0, -3.0, 6.0);
//! assert_eq!(d.value(), [2.0 / 7.0, -3.0 / 7.0, 6.0 / 7.0]);
//!
//! let v = Vector::new(1.0, 0.0, 0.0).cross(Vector::new(0.0, 1.0, 0.0));
//! assert_eq!(v, Vector::new(0.0, 0.0, 1.0));
//! ```

use crate::dimension::Dimensions;
use crate::quantity::{hash_f64, write_components, Canonical, Linear, Over, Times};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Euclidean norm of a component array.
#[inline]
pub(crate) fn norm<const N: usize>(value: [f64; N]) -> f64 {
    dot(value, value).sqrt()
}

#[inline]
pub(crate) fn dot<const N: usize>(a: [f64; N], b: [f64; N]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[inline]
pub(crate) fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Quantities that have a three-component canonical payload.
///
/// Implemented by [`Vector`], [`Direction`] and every vector quantity; used by `Angle::between`.
pub trait AsVector: Copy {
    /// The canonical components as a dimensionless vector.
    fn as_vector(&self) -> Vector;
}

/// Quantities that have a two-component canonical payload.
///
/// Implemented by [`PlanarVector`], [`PlanarDirection`] and every planar quantity; used by `Angle::between_planar`.
pub trait AsPlanarVector: Copy {
    /// The canonical components as a dimensionless planar vector.
    fn as_planar_vector(&self) -> PlanarVector;
}

macro_rules! dimensionless_common {
    ($name:ident, $n:literal) => {
        impl Canonical for $name {
            type Value = [f64; $n];

            const DIMENSIONS: Dimensions = Dimensions::DIMENSIONLESS;

            #[inline]
            fn canonical(self) -> [f64; $n] {
                self.value
            }

            #[inline]
            fn from_canonical(value: [f64; $n]) -> Self {
                $name { value }
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                for &c in &self.value {
                    hash_f64(c, state);
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_components(f, &self.value)
            }
        }

        impl From<$name> for [f64; $n] {
            #[inline]
            fn from(value: $name) -> Self {
                value.value
            }
        }
    };
}

macro_rules! free_vector {
    ($name:ident, $n:literal) => {
        dimensionless_common!($name, $n);

        impl From<[f64; $n]> for $name {
            #[inline]
            fn from(value: [f64; $n]) -> Self {
                $name { value }
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                $name {
                    value: self.value.plus(rhs.value),
                }
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $name {
                    value: self.value.minus(rhs.value),
                }
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $name {
                    value: self.value.negated(),
                }
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f64) -> Self {
                $name {
                    value: self.value.times(rhs),
                }
            }
        }

        impl Mul<$name> for f64 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Div<f64> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f64) -> Self {
                $name {
                    value: self.value.over(rhs),
                }
            }
        }

        impl MulAssign<f64> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f64) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<f64> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: f64) {
                *self = *self / rhs;
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.value, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <[f64; $n] as serde::Deserialize>::deserialize(deserializer).map(|value| $name { value })
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Free vectors
// ─────────────────────────────────────────────────────────────────────────────

/// A dimensionless three-component vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub(crate) value: [f64; 3],
}

impl Vector {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { value: [x, y, z] }
    }

    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// The components.
    #[inline]
    pub const fn value(self) -> [f64; 3] {
        self.value
    }

    /// The x component.
    #[inline]
    pub const fn x(self) -> f64 {
        self.value[0]
    }

    /// The y component.
    #[inline]
    pub const fn y(self) -> f64 {
        self.value[1]
    }

    /// The z component.
    #[inline]
    pub const fn z(self) -> f64 {
        self.value[2]
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f64 {
        norm(self.value)
    }

    /// Unit vector along `self`; NaN components for the zero vector.
    #[inline]
    pub fn direction(self) -> Direction {
        Direction::normalized(self.value)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        dot(self.value, other.value)
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            value: cross(self.value, other.value),
        }
    }

    /// Projection onto the xy plane.
    #[inline]
    pub const fn planar(self) -> PlanarVector {
        PlanarVector::new(self.value[0], self.value[1])
    }
}

free_vector!(Vector, 3);

impl From<PlanarVector> for Vector {
    /// Lifts the planar vector into the xy plane (`z = 0`).
    #[inline]
    fn from(value: PlanarVector) -> Self {
        Self::new(value.value[0], value.value[1], 0.0)
    }
}

impl AsVector for Vector {
    #[inline]
    fn as_vector(&self) -> Vector {
        *self
    }
}

/// A dimensionless two-component vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanarVector {
    pub(crate) value: [f64; 2],
}

impl PlanarVector {
    /// Creates a planar vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { value: [x, y] }
    }

    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// The components.
    #[inline]
    pub const fn value(self) -> [f64; 2] {
        self.value
    }

    /// The x component.
    #[inline]
    pub const fn x(self) -> f64 {
        self.value[0]
    }

    /// The y component.
    #[inline]
    pub const fn y(self) -> f64 {
        self.value[1]
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f64 {
        norm(self.value)
    }

    /// Unit vector along `self`; NaN components for the zero vector.
    #[inline]
    pub fn direction(self) -> PlanarDirection {
        PlanarDirection::normalized(self.value)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        dot(self.value, other.value)
    }

    /// z component of the cross product of the two vectors lifted into the xy plane.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.value[0] * other.value[1] - self.value[1] * other.value[0]
    }
}

free_vector!(PlanarVector, 2);

impl AsPlanarVector for PlanarVector {
    #[inline]
    fn as_planar_vector(&self) -> PlanarVector {
        *self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Directions
// ─────────────────────────────────────────────────────────────────────────────

/// A three-dimensional unit vector.
///
/// The constructor normalises its input; a zero input gives NaN components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    pub(crate) value: [f64; 3],
}

impl Direction {
    /// Unit vector along +x.
    pub const X: Self = Self {
        value: [1.0, 0.0, 0.0],
    };
    /// Unit vector along +y.
    pub const Y: Self = Self {
        value: [0.0, 1.0, 0.0],
    };
    /// Unit vector along +z.
    pub const Z: Self = Self {
        value: [0.0, 0.0, 1.0],
    };

    /// Creates the direction of `(x, y, z)`.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::normalized([x, y, z])
    }

    #[inline]
    pub(crate) fn normalized(value: [f64; 3]) -> Self {
        Self {
            value: value.over(norm(value)),
        }
    }

    /// The normalised components.
    #[inline]
    pub const fn value(self) -> [f64; 3] {
        self.value
    }

    /// The x component.
    #[inline]
    pub const fn x(self) -> f64 {
        self.value[0]
    }

    /// The y component.
    #[inline]
    pub const fn y(self) -> f64 {
        self.value[1]
    }

    /// The z component.
    #[inline]
    pub const fn z(self) -> f64 {
        self.value[2]
    }

    /// Dot product, the cosine of the angle between the two directions.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        dot(self.value, other.value)
    }

    /// Cross product; its norm is the sine of the angle between the two directions.
    #[inline]
    pub fn cross(self, other: Self) -> Vector {
        Vector {
            value: cross(self.value, other.value),
        }
    }

    /// The direction as a dimensionless vector.
    #[inline]
    pub const fn vector(self) -> Vector {
        Vector { value: self.value }
    }
}

dimensionless_common!(Direction, 3);

impl Neg for Direction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            value: self.value.negated(),
        }
    }
}

impl Mul<f64> for Direction {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector {
            value: self.value.times(rhs),
        }
    }
}

impl Mul<Direction> for f64 {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Direction) -> Vector {
        rhs * self
    }
}

impl From<Vector> for Direction {
    #[inline]
    fn from(value: Vector) -> Self {
        value.direction()
    }
}

impl AsVector for Direction {
    #[inline]
    fn as_vector(&self) -> Vector {
        self.vector()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Direction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Direction {
    /// Normalises the stored components.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[f64; 3] as serde::Deserialize>::deserialize(deserializer).map(Self::normalized)
    }
}

/// A two-dimensional unit vector.
///
/// The constructor normalises its input; a zero input gives NaN components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarDirection {
    pub(crate) value: [f64; 2],
}

impl PlanarDirection {
    /// Unit vector along +x.
    pub const X: Self = Self { value: [1.0, 0.0] };
    /// Unit vector along +y.
    pub const Y: Self = Self { value: [0.0, 1.0] };

    /// Creates the direction of `(x, y)`.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self::normalized([x, y])
    }

    #[inline]
    pub(crate) fn normalized(value: [f64; 2]) -> Self {
        Self {
            value: value.over(norm(value)),
        }
    }

    /// The normalised components.
    #[inline]
    pub const fn value(self) -> [f64; 2] {
        self.value
    }

    /// The x component.
    #[inline]
    pub const fn x(self) -> f64 {
        self.value[0]
    }

    /// The y component.
    #[inline]
    pub const fn y(self) -> f64 {
        self.value[1]
    }

    /// Dot product, the cosine of the angle between the two directions.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        dot(self.value, other.value)
    }

    /// The direction as a dimensionless planar vector.
    #[inline]
    pub const fn vector(self) -> PlanarVector {
        PlanarVector { value: self.value }
    }
}

dimensionless_common!(PlanarDirection, 2);

impl Neg for PlanarDirection {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            value: self.value.negated(),
        }
    }
}

impl Mul<f64> for PlanarDirection {
    type Output = PlanarVector;

    #[inline]
    fn mul(self, rhs: f64) -> PlanarVector {
        PlanarVector {
            value: self.value.times(rhs),
        }
    }
}

impl Mul<PlanarDirection> for f64 {
    type Output = PlanarVector;

    #[inline]
    fn mul(self, rhs: PlanarDirection) -> PlanarVector {
        rhs * self
    }
}

impl From<PlanarVector> for PlanarDirection {
    #[inline]
    fn from(value: PlanarVector) -> Self {
        value.direction()
    }
}

impl AsPlanarVector for PlanarDirection {
    #[inline]
    fn as_planar_vector(&self) -> PlanarVector {
        self.vector()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PlanarDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PlanarDirection {
    /// Normalises the stored components.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[f64; 2] as serde::Deserialize>::deserialize(deserializer).map(Self::normalized)
    }
}
