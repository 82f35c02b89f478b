//! Unit traits and the conversion dispatch between units of one dimension.
//!
//! Two paths convert a value between units:
//!
//! - **static**: both units are named at compile time through their marker types ([`StaticUnit`]);
//!   [`convert_statically`] is a branch-free `const fn`.
//! - **dynamic**: the units are runtime enumeration values (parsed from text, read from configuration, …);
//!   [`convert`] dispatches on the enumeration through [`Unit::scale`].
//!
//! Both paths go through the standard unit of the dimension and only ever multiply or divide.

use crate::dimension::Dimensions;
use core::fmt::{Debug, Display};
use core::hash::Hash;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Trait implemented by every **unit enumeration** (`LengthUnit`, `SpeedUnit`, …).
///
/// Implementations are generated by `#[derive(Unit)]`; each variant is one unit of the dimension and
/// carries its abbreviation, its accepted spellings and its scale relative to the standard unit.
///
/// # Invariants
///
/// - `STANDARD.scale() == 1.0`, so converting to or from the standard unit is exact.
/// - `scale()` is finite and non-zero for every variant.
/// - Spellings are unique within one enumeration.
pub trait Unit: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Dimension name, e.g. `"length"`. Used in messages and as configuration key.
    const NAME: &'static str;

    /// The standard unit in which quantities of this dimension are stored.
    const STANDARD: Self;

    /// Dimension set shared by every unit of the enumeration.
    const DIMENSIONS: Dimensions;

    /// Every unit of the enumeration, in declaration order.
    const ALL: &'static [Self];

    /// Canonical abbreviation, e.g. `"m"`.
    fn abbreviation(self) -> &'static str;

    /// Additional accepted spellings (plurals, symbol variants, long names).
    fn spellings(self) -> &'static [&'static str];

    /// Standard units per one of this unit (`0.3048` for the foot).
    fn scale(self) -> f64;

    /// Case-sensitive lookup of an abbreviation or spelling; `None` when nothing matches.
    fn parse(text: &str) -> Option<Self>;

    /// Converts a value expressed in this unit to the standard unit.
    #[inline]
    fn to_standard(self, value: f64) -> f64 {
        value * self.scale()
    }

    /// Converts a value expressed in the standard unit to this unit.
    #[inline]
    fn from_standard(self, value: f64) -> f64 {
        value / self.scale()
    }

    /// [`Unit::to_standard`] over a buffer, in place.
    #[inline]
    fn to_standard_in_place(self, values: &mut [f64]) {
        let scale = self.scale();
        for value in values.iter_mut() {
            *value *= scale;
        }
    }

    /// [`Unit::from_standard`] over a buffer, in place.
    #[inline]
    fn from_standard_in_place(self, values: &mut [f64]) {
        let scale = self.scale();
        for value in values.iter_mut() {
            *value /= scale;
        }
    }
}

/// Trait implemented by the zero-sized **marker type** of every unit (`length::Foot`, `time::Hour`, …).
///
/// Marker types name a unit at compile time, which lets [`convert_statically`] and the `create`/`static_value`
/// methods of the quantity types fold the conversion factor into a constant.
pub trait StaticUnit: Copy + Default + 'static {
    /// The unit enumeration the marker belongs to.
    type Unit: Unit;

    /// The enumeration value named by the marker.
    const UNIT: Self::Unit;

    /// Standard units per one of this unit.
    const SCALE: f64;
}

/// Converts `value` from unit `F` to unit `T`, both named at compile time.
///
/// ```rust
/// use physq_core::convert_statically;
/// use physq_core::length::{Foot, Inch};
///
/// const INCHES: f64 = convert_statically::<Foot, Inch>(2.0);
/// assert!((INCHES - 24.0).abs() < 1e-12);
/// ```
///
/// Converting between units of different dimensions does not compile:
///
/// ```compile_fail
/// use physq_core::convert_statically;
/// use physq_core::length::Foot;
/// use physq_core::time::Hour;
///
/// let _ = convert_statically::<Foot, Hour>(2.0);
/// ```
#[inline]
pub const fn convert_statically<F, T>(value: f64) -> f64
where
    F: StaticUnit,
    T: StaticUnit<Unit = F::Unit>,
{
    value * (F::SCALE / T::SCALE)
}

/// Converts `value` between two units of the same dimension chosen at runtime.
///
/// ```rust
/// use physq_core::convert;
/// use physq_core::length::LengthUnit;
///
/// let feet = convert(1.0, LengthUnit::Mile, LengthUnit::Foot);
/// assert!((feet - 5280.0).abs() < 1e-9);
/// ```
#[inline]
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    to.from_standard(from.to_standard(value))
}

/// [`convert`] over a buffer, in place.
pub fn convert_in_place<U: Unit>(values: &mut [f64], from: U, to: U) {
    if from == to {
        return;
    }
    from.to_standard_in_place(values);
    to.from_standard_in_place(values);
}

/// Parses a unit spelling, returning `None` for unknown input.
///
/// ```rust
/// use physq_core::parse_unit;
/// use physq_core::length::LengthUnit;
///
/// assert_eq!(parse_unit::<LengthUnit>("ft"), Some(LengthUnit::Foot));
/// assert_eq!(parse_unit::<LengthUnit>("feet"), Some(LengthUnit::Foot));
/// assert_eq!(parse_unit::<LengthUnit>("not a unit"), None);
/// ```
#[inline]
pub fn parse_unit<U: Unit>(text: &str) -> Option<U> {
    U::parse(text)
}

/// Error returned by the `FromStr` implementations of the unit enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {dimension} unit: '{text}'")]
pub struct UnknownUnitError {
    dimension: &'static str,
    text: String,
}

impl UnknownUnitError {
    /// Creates the error for a spelling rejected by the enumeration `U`.
    pub fn new<U: Unit>(text: &str) -> Self {
        Self {
            dimension: U::NAME,
            text: text.to_string(),
        }
    }

    /// Dimension name of the enumeration that rejected the text.
    pub fn dimension(&self) -> &'static str {
        self.dimension
    }

    /// The rejected text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Spelling tables
// ─────────────────────────────────────────────────────────────────────────────

/// Per-enumeration spelling map, built on first lookup and never mutated afterwards.
pub(crate) struct SpellingTable<U: Unit> {
    map: OnceCell<HashMap<&'static str, U>>,
}

impl<U: Unit> SpellingTable<U> {
    pub(crate) const fn new() -> Self {
        Self {
            map: OnceCell::new(),
        }
    }

    pub(crate) fn lookup(&self, text: &str) -> Option<U> {
        let found = self.map.get_or_init(build_spellings::<U>).get(text).copied();
        if found.is_none() {
            log::trace!("no {} unit is spelled '{}'", U::NAME, text);
        }
        found
    }
}

fn build_spellings<U: Unit>() -> HashMap<&'static str, U> {
    let mut map = HashMap::new();
    for &unit in U::ALL {
        for spelling in core::iter::once(unit.abbreviation()).chain(unit.spellings().iter().copied()) {
            if let Some(previous) = map.insert(spelling, unit) {
                log::warn!(
                    "{} spelling '{}' is claimed by both {:?} and {:?}",
                    U::NAME,
                    spelling,
                    previous,
                    unit
                );
            }
        }
    }
    log::debug!("built {} spelling table with {} entries", U::NAME, map.len());
    map
}

#[cfg(feature = "serde")]
pub(crate) fn deserialize_unit<'de, U, D>(deserializer: D) -> Result<U, D::Error>
where
    U: Unit,
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct UnitVisitor<U>(core::marker::PhantomData<U>);

    impl<'de, U: Unit> Visitor<'de> for UnitVisitor<U> {
        type Value = U;

        fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
            write!(formatter, "a {} unit spelling", U::NAME)
        }

        fn visit_str<E>(self, text: &str) -> Result<U, E>
        where
            E: de::Error,
        {
            U::parse(text).ok_or_else(|| de::Error::custom(UnknownUnitError::new::<U>(text)))
        }
    }

    deserializer.deserialize_str(UnitVisitor(core::marker::PhantomData))
}
