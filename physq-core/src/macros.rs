//! Macros generating the quantity types and the identities between them.
//!
//! Every quantity type stores its canonical payload in a `pub(crate) value` field; the macros below generate the
//! constructors, accessors and operators around that field so that each unit module only lists its units, its types
//! and the physical identities its types take part in.

/// Items shared by every quantity kind: the `Quantity` and `Canonical` impls, scaling by a number, negation and
/// (behind the `serde` feature) compact serialization of the canonical payload.
macro_rules! quantity_common {
    ($name:ident, $unit:ty, $value:ty) => {
        impl $crate::Quantity for $name {
            type Unit = $unit;
            type Value = $value;

            #[inline]
            fn from_value(value: $value, unit: $unit) -> Self {
                $name::new(value, unit)
            }

            #[inline]
            fn value_in(&self, unit: $unit) -> $value {
                $name::value_in(*self, unit)
            }
        }

        impl $crate::quantity::Canonical for $name {
            type Value = $value;

            const DIMENSIONS: $crate::Dimensions = <$unit as $crate::Unit>::DIMENSIONS;

            #[inline]
            fn canonical(self) -> $value {
                self.value
            }

            #[inline]
            fn from_canonical(value: $value) -> Self {
                $name { value }
            }
        }

        impl ::core::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $name {
                    value: $crate::quantity::Linear::negated(self.value),
                }
            }
        }

        impl ::core::ops::Mul<f64> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f64) -> Self {
                $name {
                    value: $crate::quantity::Times::times(self.value, rhs),
                }
            }
        }

        impl ::core::ops::Mul<$name> for f64 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                $name {
                    value: $crate::quantity::Times::times(self, rhs.value),
                }
            }
        }

        impl ::core::ops::Div<f64> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f64) -> Self {
                $name {
                    value: $crate::quantity::Over::over(self.value, rhs),
                }
            }
        }

        impl ::core::ops::MulAssign<f64> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f64) {
                *self = *self * rhs;
            }
        }

        impl ::core::ops::DivAssign<f64> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: f64) {
                *self = *self / rhs;
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(&self.value, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                <$value as ::serde::Deserialize>::deserialize(deserializer).map(|value| $name { value })
            }
        }
    };
}

/// `Add`, `Sub`, `AddAssign` and `SubAssign` between two values of the same quantity type.
///
/// Kept apart from the other operators because affine quantities (positions, absolute temperatures) define their
/// own differences.
macro_rules! additive {
    ($name:ident) => {
        impl ::core::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                $name {
                    value: $crate::quantity::Linear::plus(self.value, rhs.value),
                }
            }
        }

        impl ::core::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $name {
                    value: $crate::quantity::Linear::minus(self.value, rhs.value),
                }
            }
        }

        impl ::core::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl ::core::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }
    };
}

/// Defines a scalar quantity type over a unit enumeration.
macro_rules! scalar_quantity {
    ($(#[$meta:meta])* $name:ident: $unit:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
        pub struct $name {
            pub(crate) value: f64,
        }

        impl $name {
            /// Creates the quantity from a value expressed in `unit`.
            #[inline]
            pub fn new(value: f64, unit: $unit) -> Self {
                $name {
                    value: <$unit as $crate::Unit>::to_standard(unit, value),
                }
            }

            /// Creates the quantity from a value expressed in the unit named by the marker `M`.
            #[inline]
            pub const fn create<M: $crate::StaticUnit<Unit = $unit>>(value: f64) -> Self {
                $name {
                    value: value * M::SCALE,
                }
            }

            /// Creates the quantity from a value expressed in the standard unit.
            #[inline]
            pub const fn standard(value: f64) -> Self {
                $name { value }
            }

            /// The zero quantity.
            #[inline]
            pub const fn zero() -> Self {
                $name { value: 0.0 }
            }

            /// The value in the standard unit.
            #[inline]
            pub const fn value(self) -> f64 {
                self.value
            }

            /// The value expressed in `unit`.
            #[inline]
            pub fn value_in(self, unit: $unit) -> f64 {
                <$unit as $crate::Unit>::from_standard(unit, self.value)
            }

            /// The value expressed in the unit named by the marker `M`.
            #[inline]
            pub const fn static_value<M: $crate::StaticUnit<Unit = $unit>>(self) -> f64 {
                self.value / M::SCALE
            }

            /// Absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                $name {
                    value: self.value.abs(),
                }
            }

            /// The smaller of two quantities.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                $name {
                    value: self.value.min(other.value),
                }
            }

            /// The larger of two quantities.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                $name {
                    value: self.value.max(other.value),
                }
            }
        }

        quantity_common!($name, $unit, f64);
        additive!($name);

        /// Ratio of two quantities of the same type.
        impl ::core::ops::Div for $name {
            type Output = f64;

            #[inline]
            fn div(self, rhs: Self) -> f64 {
                self.value / rhs.value
            }
        }

        /// Equality is reflexive for every non-NaN value.
        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $crate::quantity::hash_f64(self.value, state);
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::quantity::write_number(f, self.value)?;
                write!(f, " {}", <$unit as $crate::Unit>::abbreviation(<$unit as $crate::Unit>::STANDARD))
            }
        }
    };
}

/// Array-payload constructors and accessors shared by planar and vector quantities.
macro_rules! array_quantity {
    ($name:ident, $unit:ty, $n:literal) => {
        impl $name {
            /// Creates the quantity from components expressed in `unit`.
            #[inline]
            pub fn new(value: [f64; $n], unit: $unit) -> Self {
                let mut value = value;
                <$unit as $crate::Unit>::to_standard_in_place(unit, &mut value);
                $name { value }
            }

            /// Creates the quantity from components expressed in the unit named by the marker `M`.
            #[inline]
            pub const fn create<M: $crate::StaticUnit<Unit = $unit>>(value: [f64; $n]) -> Self {
                $name {
                    value: $crate::quantity::scale_array(value, M::SCALE),
                }
            }

            /// Creates the quantity from components expressed in the standard unit.
            #[inline]
            pub const fn standard(value: [f64; $n]) -> Self {
                $name { value }
            }

            /// The zero quantity.
            #[inline]
            pub const fn zero() -> Self {
                $name { value: [0.0; $n] }
            }

            /// The components in the standard unit.
            #[inline]
            pub const fn value(self) -> [f64; $n] {
                self.value
            }

            /// The components expressed in `unit`.
            #[inline]
            pub fn value_in(self, unit: $unit) -> [f64; $n] {
                let mut value = self.value;
                <$unit as $crate::Unit>::from_standard_in_place(unit, &mut value);
                value
            }

            /// The components expressed in the unit named by the marker `M`.
            #[inline]
            pub const fn static_value<M: $crate::StaticUnit<Unit = $unit>>(self) -> [f64; $n] {
                $crate::quantity::scale_array(self.value, 1.0 / M::SCALE)
            }
        }

        quantity_common!($name, $unit, [f64; $n]);

        /// Equality is reflexive for every value without NaN components.
        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                for &c in &self.value {
                    $crate::quantity::hash_f64(c, state);
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::quantity::write_components(f, &self.value)?;
                write!(f, " {}", <$unit as $crate::Unit>::abbreviation(<$unit as $crate::Unit>::STANDARD))
            }
        }
    };
}

/// Defines a two-component quantity type over a unit enumeration.
///
/// `magnitude` names the scalar type of its components and norm. A leading `affine` skips the same-type `Add`/`Sub`.
macro_rules! planar_quantity {
    ($(#[$meta:meta])* $name:ident: $unit:ty, magnitude $magnitude:ident) => {
        planar_quantity!(@base $(#[$meta])* $name: $unit, magnitude $magnitude);
        additive!($name);
    };
    ($(#[$meta:meta])* affine $name:ident: $unit:ty, magnitude $magnitude:ident) => {
        planar_quantity!(@base $(#[$meta])* $name: $unit, magnitude $magnitude);
    };
    (@base $(#[$meta:meta])* $name:ident: $unit:ty, magnitude $magnitude:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) value: [f64; 2],
        }

        array_quantity!($name, $unit, 2);

        impl $name {
            /// The x component.
            #[inline]
            pub const fn x(self) -> $magnitude {
                $magnitude { value: self.value[0] }
            }

            /// The y component.
            #[inline]
            pub const fn y(self) -> $magnitude {
                $magnitude { value: self.value[1] }
            }

            /// Euclidean norm.
            #[inline]
            pub fn magnitude(self) -> $magnitude {
                $magnitude {
                    value: $crate::vector::norm(self.value),
                }
            }

            /// Unit direction of the quantity; NaN components for the zero quantity.
            #[inline]
            pub fn direction(self) -> $crate::PlanarDirection {
                $crate::PlanarDirection::normalized(self.value)
            }

            /// Builds the quantity from its norm and its direction.
            #[inline]
            pub fn from_magnitude_direction(magnitude: $magnitude, direction: $crate::PlanarDirection) -> Self {
                $name {
                    value: $crate::quantity::Times::times(direction.value, magnitude.value),
                }
            }
        }

        impl ::core::convert::From<$name> for $magnitude {
            /// Norm of the planar quantity.
            #[inline]
            fn from(quantity: $name) -> Self {
                quantity.magnitude()
            }
        }

        impl $crate::AsPlanarVector for $name {
            #[inline]
            fn as_planar_vector(&self) -> $crate::PlanarVector {
                $crate::PlanarVector { value: self.value }
            }
        }
    };
}

/// Defines a three-component quantity type over a unit enumeration.
///
/// `magnitude` names the scalar type of its components and norm, `planar` its two-component counterpart. A leading
/// `affine` skips the same-type `Add`/`Sub`.
macro_rules! vector_quantity {
    ($(#[$meta:meta])* $name:ident: $unit:ty, magnitude $magnitude:ident, planar $planar:ident) => {
        vector_quantity!(@base $(#[$meta])* $name: $unit, magnitude $magnitude, planar $planar);
        additive!($name);
    };
    ($(#[$meta:meta])* affine $name:ident: $unit:ty, magnitude $magnitude:ident, planar $planar:ident) => {
        vector_quantity!(@base $(#[$meta])* $name: $unit, magnitude $magnitude, planar $planar);
    };
    (@base $(#[$meta:meta])* $name:ident: $unit:ty, magnitude $magnitude:ident, planar $planar:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) value: [f64; 3],
        }

        array_quantity!($name, $unit, 3);

        impl $name {
            /// The x component.
            #[inline]
            pub const fn x(self) -> $magnitude {
                $magnitude { value: self.value[0] }
            }

            /// The y component.
            #[inline]
            pub const fn y(self) -> $magnitude {
                $magnitude { value: self.value[1] }
            }

            /// The z component.
            #[inline]
            pub const fn z(self) -> $magnitude {
                $magnitude { value: self.value[2] }
            }

            /// Euclidean norm.
            #[inline]
            pub fn magnitude(self) -> $magnitude {
                $magnitude {
                    value: $crate::vector::norm(self.value),
                }
            }

            /// Unit direction of the quantity; NaN components for the zero quantity.
            #[inline]
            pub fn direction(self) -> $crate::Direction {
                $crate::Direction::normalized(self.value)
            }

            /// Builds the quantity from its norm and its direction.
            #[inline]
            pub fn from_magnitude_direction(magnitude: $magnitude, direction: $crate::Direction) -> Self {
                $name {
                    value: $crate::quantity::Times::times(direction.value, magnitude.value),
                }
            }

            /// Projection onto the xy plane.
            #[inline]
            pub const fn planar(self) -> $planar {
                $planar {
                    value: [self.value[0], self.value[1]],
                }
            }
        }

        impl ::core::convert::From<$name> for $magnitude {
            /// Norm of the vector quantity.
            #[inline]
            fn from(quantity: $name) -> Self {
                quantity.magnitude()
            }
        }

        impl $crate::AsVector for $name {
            #[inline]
            fn as_vector(&self) -> $crate::Vector {
                $crate::Vector { value: self.value }
            }
        }

        impl ::core::convert::From<$planar> for $name {
            /// Lifts the planar quantity into the xy plane (`z = 0`).
            #[inline]
            fn from(quantity: $planar) -> Self {
                $name {
                    value: [quantity.value[0], quantity.value[1], 0.0],
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Identities between quantity types
// ─────────────────────────────────────────────────────────────────────────────

/// `$a * $b -> $c`, with a compile-time check that the dimension sets agree.
macro_rules! impl_mul {
    ($a:ty, $b:ty => $c:ty) => {
        const _: () = assert!(
            $crate::quantity::dimensions_of::<$a>()
                .mul($crate::quantity::dimensions_of::<$b>())
                .equals($crate::quantity::dimensions_of::<$c>()),
            concat!("dimension mismatch in ", stringify!($a), " * ", stringify!($b), " = ", stringify!($c))
        );

        impl ::core::ops::Mul<$b> for $a {
            type Output = $c;

            #[inline]
            fn mul(self, rhs: $b) -> $c {
                <$c as $crate::quantity::Canonical>::from_canonical($crate::quantity::Times::times(
                    $crate::quantity::Canonical::canonical(self),
                    $crate::quantity::Canonical::canonical(rhs),
                ))
            }
        }
    };
}

/// `$a / $b -> $c`, with a compile-time check that the dimension sets agree.
macro_rules! impl_div {
    ($a:ty, $b:ty => $c:ty) => {
        const _: () = assert!(
            $crate::quantity::dimensions_of::<$a>()
                .div($crate::quantity::dimensions_of::<$b>())
                .equals($crate::quantity::dimensions_of::<$c>()),
            concat!("dimension mismatch in ", stringify!($a), " / ", stringify!($b), " = ", stringify!($c))
        );

        impl ::core::ops::Div<$b> for $a {
            type Output = $c;

            #[inline]
            fn div(self, rhs: $b) -> $c {
                <$c as $crate::quantity::Canonical>::from_canonical($crate::quantity::Over::over(
                    $crate::quantity::Canonical::canonical(self),
                    $crate::quantity::Canonical::canonical(rhs),
                ))
            }
        }
    };
}

/// A product of two distinct scalar types: both multiplication orders and both quotients back.
macro_rules! impl_product {
    ($a:ty, $b:ty => $c:ty) => {
        impl_mul!($a, $b => $c);
        impl_mul!($b, $a => $c);
        impl_div!($c, $a => $b);
        impl_div!($c, $b => $a);
    };
}

/// A quotient of a planar or vector type by a scalar type, and the two products back.
macro_rules! impl_quotient {
    ($a:ty, $b:ty => $c:ty) => {
        impl_div!($a, $b => $c);
        impl_mul!($c, $b => $a);
        impl_mul!($b, $c => $a);
    };
}

/// A scalar magnitude times a direction, in both orders.
macro_rules! impl_directed {
    ($magnitude:ty, $direction:ty => $c:ty) => {
        impl_mul!($magnitude, $direction => $c);
        impl_mul!($direction, $magnitude => $c);
    };
}
