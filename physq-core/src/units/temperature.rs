//! Absolute [`Temperature`] and [`TemperatureDifference`].
//!
//! Both share [`TemperatureUnit`], whose scales are those of an *interval*: one degree Celsius is one kelvin, one
//! degree Fahrenheit is `5/9` of a kelvin. Converting a difference is therefore a plain multiplication, exactly like
//! every other unit in the crate.
//!
//! Absolute temperatures additionally depend on where each scale puts its zero. That shift is applied only by the
//! constructors and accessors of [`Temperature`], which stores kelvin:
//!
//! ```rust
//! use physq_core::temperature::{Temperature, TemperatureDifference, TemperatureUnit};
//!
//! let boiling = Temperature::new(100.0, TemperatureUnit::Celsius);
//! assert!((boiling.value_in(TemperatureUnit::Fahrenheit) - 212.0).abs() < 1e-9);
//!
//! let rise = Temperature::new(30.0, TemperatureUnit::Celsius) - Temperature::new(20.0, TemperatureUnit::Celsius);
//! assert!((rise.value_in(TemperatureUnit::Fahrenheit) - 18.0).abs() < 1e-9);
//! ```
//!
//! Absolute temperatures do not add to each other, scale, or negate; only differences do.

use crate::quantity::hash_f64;
use crate::{Dimensions, Quantity, StaticUnit, Unit};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Sub, SubAssign};
use physq_derive::Unit;

/// Temperature scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "temperature", dimensions = Dimensions::TEMPERATURE)]
pub enum TemperatureUnit {
    /// Kelvin.
    #[unit(symbol = "K", scale = 1.0, standard, spellings = ["kelvin", "kelvins"])]
    Kelvin,
    /// Degree Celsius.
    #[unit(symbol = "°C", scale = 1.0, spellings = ["C", "degC", "celsius"])]
    Celsius,
    /// Degree Fahrenheit.
    #[unit(symbol = "°F", scale = 5.0 / 9.0, spellings = ["F", "degF", "fahrenheit"])]
    Fahrenheit,
    /// Degree Rankine.
    #[unit(symbol = "°R", scale = 5.0 / 9.0, spellings = ["R", "degR", "rankine"])]
    Rankine,
}

impl TemperatureUnit {
    /// Absolute zero expressed on this scale.
    #[inline]
    pub const fn absolute_zero(self) -> f64 {
        match self {
            TemperatureUnit::Kelvin | TemperatureUnit::Rankine => 0.0,
            TemperatureUnit::Celsius => -273.15,
            TemperatureUnit::Fahrenheit => -459.67,
        }
    }
}

/// An absolute (thermodynamic) temperature, stored in kelvin.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Temperature {
    pub(crate) value: f64,
}

impl Temperature {
    /// Creates the temperature from a reading on the scale `unit`.
    #[inline]
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Temperature {
            value: unit.to_standard(value - unit.absolute_zero()),
        }
    }

    /// Creates the temperature from a reading on the scale named by the marker `M`.
    #[inline]
    pub const fn create<M: StaticUnit<Unit = TemperatureUnit>>(value: f64) -> Self {
        Temperature {
            value: (value - M::UNIT.absolute_zero()) * M::SCALE,
        }
    }

    /// Creates the temperature from a value in kelvin.
    #[inline]
    pub const fn standard(value: f64) -> Self {
        Temperature { value }
    }

    /// Absolute zero.
    #[inline]
    pub const fn zero() -> Self {
        Temperature { value: 0.0 }
    }

    /// The value in kelvin.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The reading on the scale `unit`.
    #[inline]
    pub fn value_in(self, unit: TemperatureUnit) -> f64 {
        unit.from_standard(self.value) + unit.absolute_zero()
    }

    /// The reading on the scale named by the marker `M`.
    #[inline]
    pub const fn static_value<M: StaticUnit<Unit = TemperatureUnit>>(self) -> f64 {
        self.value / M::SCALE + M::UNIT.absolute_zero()
    }

    /// The colder of two temperatures.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Temperature {
            value: self.value.min(other.value),
        }
    }

    /// The warmer of two temperatures.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Temperature {
            value: self.value.max(other.value),
        }
    }
}

impl Quantity for Temperature {
    type Unit = TemperatureUnit;
    type Value = f64;

    #[inline]
    fn from_value(value: f64, unit: TemperatureUnit) -> Self {
        Temperature::new(value, unit)
    }

    #[inline]
    fn value_in(&self, unit: TemperatureUnit) -> f64 {
        Temperature::value_in(*self, unit)
    }
}

/// Equality is reflexive for every non-NaN temperature.
impl Eq for Temperature {}

impl Hash for Temperature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.value, state);
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::quantity::write_number(f, self.value)?;
        write!(f, " {}", TemperatureUnit::STANDARD.abbreviation())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Temperature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Temperature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <f64 as serde::Deserialize>::deserialize(deserializer).map(Temperature::standard)
    }
}

scalar_quantity! {
    /// A temperature interval, stored in kelvin.
    ///
    /// Converting a difference never applies a zero-point shift: `1 °C` of difference is `1 K`.
    TemperatureDifference: TemperatureUnit
}

// ─────────────────────────────────────────────────────────────────────────────
// Affine arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl Sub for Temperature {
    type Output = TemperatureDifference;

    #[inline]
    fn sub(self, rhs: Self) -> TemperatureDifference {
        TemperatureDifference {
            value: self.value - rhs.value,
        }
    }
}

impl Add<TemperatureDifference> for Temperature {
    type Output = Temperature;

    #[inline]
    fn add(self, rhs: TemperatureDifference) -> Temperature {
        Temperature {
            value: self.value + rhs.value,
        }
    }
}

impl Add<Temperature> for TemperatureDifference {
    type Output = Temperature;

    #[inline]
    fn add(self, rhs: Temperature) -> Temperature {
        rhs + self
    }
}

impl Sub<TemperatureDifference> for Temperature {
    type Output = Temperature;

    #[inline]
    fn sub(self, rhs: TemperatureDifference) -> Temperature {
        Temperature {
            value: self.value - rhs.value,
        }
    }
}

impl AddAssign<TemperatureDifference> for Temperature {
    #[inline]
    fn add_assign(&mut self, rhs: TemperatureDifference) {
        self.value += rhs.value;
    }
}

impl SubAssign<TemperatureDifference> for Temperature {
    #[inline]
    fn sub_assign(&mut self, rhs: TemperatureDifference) {
        self.value -= rhs.value;
    }
}
