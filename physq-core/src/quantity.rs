//! The [`Quantity`] trait shared by every quantity type, plus helpers used by the generated impls.

use crate::dimension::Dimensions;
use crate::unit::Unit;
use core::hash::Hasher;

/// Common interface of every quantity type (scalar, planar and vector).
///
/// A quantity stores its value in the standard unit of its dimension. The inherent methods of each type
/// (`new`, `value`, `value_in`, …) are the primary API; this trait exists so generic code such as
/// [`serde_with_unit`] or display preferences can work over any quantity.
pub trait Quantity: Copy + Sized {
    /// Unit enumeration of the quantity's dimension.
    type Unit: Unit;

    /// Numeric payload: `f64`, `[f64; 2]` or `[f64; 3]`.
    type Value: Components;

    /// Builds the quantity from a value expressed in `unit`.
    fn from_value(value: Self::Value, unit: Self::Unit) -> Self;

    /// The value expressed in `unit`, computed on demand.
    fn value_in(&self, unit: Self::Unit) -> Self::Value;

    /// The value in the standard unit.
    fn standard_value(&self) -> Self::Value {
        self.value_in(<Self::Unit as Unit>::STANDARD)
    }

    /// Renders the quantity in `unit` with a fixed number of decimals, e.g. `"3.281 ft"`.
    ///
    /// ```rust
    /// use physq_core::Quantity;
    /// use physq_core::length::{Length, LengthUnit};
    ///
    /// let l = Length::new(1.0, LengthUnit::Metre);
    /// assert_eq!(l.print(LengthUnit::Centimetre, 1), "100.0 cm");
    /// ```
    fn print(&self, unit: Self::Unit, precision: usize) -> String {
        format!(
            "{} {}",
            self.value_in(unit).fixed(precision),
            unit.abbreviation()
        )
    }
}

/// Numeric payloads of the quantity kinds.
pub trait Components: Copy + PartialEq + core::fmt::Debug {
    /// Fixed-precision rendering: `1.50` for scalars, `(1.50, 2.00)` for planar and vector payloads.
    fn fixed(&self, precision: usize) -> String;
}

impl Components for f64 {
    fn fixed(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl<const N: usize> Components for [f64; N] {
    fn fixed(&self, precision: usize) -> String {
        let parts: Vec<String> = self.iter().map(|c| c.fixed(precision)).collect();
        format!("({})", parts.join(", "))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Canonical access for the algebra impls
// ─────────────────────────────────────────────────────────────────────────────

/// Read/write access to the canonical payload of any quantity, plus its dimension set.
///
/// This is the one crate-private accessor through which the operator impls of every module combine quantities;
/// `f64` implements it as the dimensionless number.
pub(crate) trait Canonical: Copy {
    type Value: Copy;

    const DIMENSIONS: Dimensions;

    fn canonical(self) -> Self::Value;

    /// Wraps an already canonical payload. For directions the payload must already be normalised.
    fn from_canonical(value: Self::Value) -> Self;
}

impl Canonical for f64 {
    type Value = f64;

    const DIMENSIONS: Dimensions = Dimensions::DIMENSIONLESS;

    #[inline]
    fn canonical(self) -> f64 {
        self
    }

    #[inline]
    fn from_canonical(value: f64) -> Self {
        value
    }
}

/// Component-wise addition and negation of payloads.
pub(crate) trait Linear: Copy {
    fn plus(self, rhs: Self) -> Self;
    fn minus(self, rhs: Self) -> Self;
    fn negated(self) -> Self;
}

impl Linear for f64 {
    #[inline]
    fn plus(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn minus(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn negated(self) -> Self {
        -self
    }
}

impl<const N: usize> Linear for [f64; N] {
    #[inline]
    fn plus(self, rhs: Self) -> Self {
        core::array::from_fn(|i| self[i] + rhs[i])
    }

    #[inline]
    fn minus(self, rhs: Self) -> Self {
        core::array::from_fn(|i| self[i] - rhs[i])
    }

    #[inline]
    fn negated(self) -> Self {
        self.map(|c| -c)
    }
}

/// Product of two payloads where at least one side is a plain number.
pub(crate) trait Times<Rhs> {
    type Output;
    fn times(self, rhs: Rhs) -> Self::Output;
}

impl Times<f64> for f64 {
    type Output = f64;

    #[inline]
    fn times(self, rhs: f64) -> f64 {
        self * rhs
    }
}

impl<const N: usize> Times<f64> for [f64; N] {
    type Output = [f64; N];

    #[inline]
    fn times(self, rhs: f64) -> [f64; N] {
        self.map(|c| c * rhs)
    }
}

impl<const N: usize> Times<[f64; N]> for f64 {
    type Output = [f64; N];

    #[inline]
    fn times(self, rhs: [f64; N]) -> [f64; N] {
        rhs.map(|c| self * c)
    }
}

/// Quotient of a payload by a plain number.
pub(crate) trait Over<Rhs> {
    type Output;
    fn over(self, rhs: Rhs) -> Self::Output;
}

impl Over<f64> for f64 {
    type Output = f64;

    #[inline]
    fn over(self, rhs: f64) -> f64 {
        self / rhs
    }
}

impl<const N: usize> Over<f64> for [f64; N] {
    type Output = [f64; N];

    #[inline]
    fn over(self, rhs: f64) -> [f64; N] {
        self.map(|c| c / rhs)
    }
}

/// `const` scaling of an array payload, used by the `create`/`static_value` constructors.
#[inline]
pub(crate) const fn scale_array<const N: usize>(mut value: [f64; N], factor: f64) -> [f64; N] {
    let mut i = 0;
    while i < N {
        value[i] *= factor;
        i += 1;
    }
    value
}

/// Hashes an `f64` by its bits, with `-0.0` folded onto `0.0` so that equal values hash equally.
#[inline]
pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0 } else { value };
    state.write_u64(value.to_bits());
}

/// Writes `value` honouring the formatter's precision when one was requested.
pub(crate) fn write_number(f: &mut core::fmt::Formatter<'_>, value: f64) -> core::fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{:.*}", precision, value),
        None => write!(f, "{}", value),
    }
}

/// Writes `(x, y[, z])`, each component through [`write_number`].
pub(crate) fn write_components(
    f: &mut core::fmt::Formatter<'_>,
    components: &[f64],
) -> core::fmt::Result {
    f.write_str("(")?;
    for (i, &c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_number(f, c)?;
    }
    f.write_str(")")
}

/// Dimension set of any quantity type.
pub(crate) const fn dimensions_of<Q: Canonical>() -> Dimensions {
    Q::DIMENSIONS
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to store the unit next to the value. The value is written
/// in the standard unit; on deserialization any accepted spelling of any unit of the dimension is converted back to
/// the standard unit.
///
/// ```rust
/// use physq_core::length::Length;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "physq_core::serde_with_unit")]
///     max_distance: Length,  // {"value": 100.0, "unit": "m"}
///
///     min_distance: Length,  // 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::Quantity;
    use crate::unit::{Unit, UnknownUnitError};
    use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    /// Serializes a quantity as a struct with `value` (standard unit) and `unit` fields.
    pub fn serialize<Q, S>(quantity: &Q, serializer: S) -> Result<S::Ok, S::Error>
    where
        Q: Quantity,
        Q::Value: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.standard_value())?;
        state.serialize_field("unit", <Q::Unit as Unit>::STANDARD.abbreviation())?;
        state.end()
    }

    /// Deserializes a quantity from a struct with `value` and optionally `unit` fields.
    ///
    /// A missing `unit` means the standard unit; an unknown one is an error.
    pub fn deserialize<'de, Q, D>(deserializer: D) -> Result<Q, D::Error>
    where
        Q: Quantity,
        Q::Value: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<Q>(core::marker::PhantomData<Q>);

        impl<'de, Q> Visitor<'de> for QuantityVisitor<Q>
        where
            Q: Quantity,
            Q::Value: Deserialize<'de>,
        {
            type Value = Q;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(
                    formatter,
                    "struct with a value and an optional {} unit",
                    <Q::Unit as Unit>::NAME
                )
            }

            fn visit_map<V>(self, mut map: V) -> Result<Q, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<Q::Value> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let unit = match unit {
                    Some(text) => <Q::Unit as Unit>::parse(&text).ok_or_else(|| {
                        de::Error::custom(UnknownUnitError::new::<Q::Unit>(&text))
                    })?,
                    None => <Q::Unit as Unit>::STANDARD,
                };

                Ok(Q::from_value(value, unit))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(core::marker::PhantomData),
        )
    }
}
