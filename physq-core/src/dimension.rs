//! Dimension sets: the seven base-dimension exponents of a unit family.

use core::fmt;

/// Exponents of the seven base dimensions that identify a unit family.
///
/// Two quantities can only be converted into one another when their units share the same dimension set. Every
/// unit enumeration exposes its set as [`Unit::DIMENSIONS`](crate::Unit::DIMENSIONS); derived sets are built with the
/// `const` operations below, so the same set reached along two derivation paths compares equal:
///
/// ```rust
/// use physq_core::Dimensions;
///
/// assert_eq!(Dimensions::LENGTH.mul(Dimensions::LENGTH), Dimensions::AREA);
/// assert_eq!(Dimensions::MASS.mul(Dimensions::ACCELERATION), Dimensions::FORCE);
/// ```
///
/// Equality and ordering compare the exponent tuple in field order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimensions {
    /// Length exponent [L].
    pub length: i8,
    /// Mass exponent [M].
    pub mass: i8,
    /// Time exponent [T].
    pub time: i8,
    /// Thermodynamic temperature exponent [Θ].
    pub temperature: i8,
    /// Electric current exponent [I].
    pub current: i8,
    /// Amount of substance exponent [N].
    pub substance: i8,
    /// Luminous intensity exponent [J].
    pub luminosity: i8,
}

impl Dimensions {
    // ─────────────────────────────────────────────────────────────────────────────
    // Base dimensions
    // ─────────────────────────────────────────────────────────────────────────────

    /// Pure number.
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);
    /// Length [L].
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    /// Mass [M].
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    /// Time [T].
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    /// Thermodynamic temperature [Θ].
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 1, 0, 0, 0);
    /// Electric current [I].
    pub const CURRENT: Self = Self::new(0, 0, 0, 0, 1, 0, 0);
    /// Amount of substance [N].
    pub const SUBSTANCE: Self = Self::new(0, 0, 0, 0, 0, 1, 0);
    /// Luminous intensity [J].
    pub const LUMINOSITY: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    // ─────────────────────────────────────────────────────────────────────────────
    // Derived dimensions modelled by this crate
    // ─────────────────────────────────────────────────────────────────────────────

    /// Area [L²].
    pub const AREA: Self = Self::new(2, 0, 0, 0, 0, 0, 0);
    /// Volume [L³].
    pub const VOLUME: Self = Self::new(3, 0, 0, 0, 0, 0, 0);
    /// Frequency [T⁻¹].
    pub const FREQUENCY: Self = Self::new(0, 0, -1, 0, 0, 0, 0);
    /// Speed [L T⁻¹].
    pub const SPEED: Self = Self::new(1, 0, -1, 0, 0, 0, 0);
    /// Acceleration [L T⁻²].
    pub const ACCELERATION: Self = Self::new(1, 0, -2, 0, 0, 0, 0);
    /// Mass density [M L⁻³].
    pub const MASS_DENSITY: Self = Self::new(-3, 1, 0, 0, 0, 0, 0);
    /// Force [M L T⁻²].
    pub const FORCE: Self = Self::new(1, 1, -2, 0, 0, 0, 0);
    /// Energy [M L² T⁻²].
    pub const ENERGY: Self = Self::new(2, 1, -2, 0, 0, 0, 0);
    /// Power [M L² T⁻³].
    pub const POWER: Self = Self::new(2, 1, -3, 0, 0, 0, 0);
    /// Pressure [M L⁻¹ T⁻²].
    pub const PRESSURE: Self = Self::new(-1, 1, -2, 0, 0, 0, 0);

    /// Creates a dimension set from its exponents.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        temperature: i8,
        current: i8,
        substance: i8,
        luminosity: i8,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            temperature,
            current,
            substance,
            luminosity,
        }
    }

    /// Dimension set of a product (exponents add).
    pub const fn mul(self, other: Self) -> Self {
        Self::new(
            self.length + other.length,
            self.mass + other.mass,
            self.time + other.time,
            self.temperature + other.temperature,
            self.current + other.current,
            self.substance + other.substance,
            self.luminosity + other.luminosity,
        )
    }

    /// Dimension set of a quotient (exponents subtract).
    pub const fn div(self, other: Self) -> Self {
        self.mul(other.recip())
    }

    /// Dimension set of a reciprocal (exponents negate).
    pub const fn recip(self) -> Self {
        self.pow(-1)
    }

    /// Dimension set raised to an integer power.
    pub const fn pow(self, n: i8) -> Self {
        Self::new(
            self.length * n,
            self.mass * n,
            self.time * n,
            self.temperature * n,
            self.current * n,
            self.substance * n,
            self.luminosity * n,
        )
    }

    /// `const` equality, for compile-time checks.
    pub const fn equals(self, other: Self) -> bool {
        self.length == other.length
            && self.mass == other.mass
            && self.time == other.time
            && self.temperature == other.temperature
            && self.current == other.current
            && self.substance == other.substance
            && self.luminosity == other.luminosity
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        self.equals(Self::DIMENSIONLESS)
    }

    fn exponents(self) -> [(&'static str, i8); 7] {
        [
            ("L", self.length),
            ("M", self.mass),
            ("T", self.time),
            ("Θ", self.temperature),
            ("I", self.current),
            ("N", self.substance),
            ("J", self.luminosity),
        ]
    }
}

/// Formats as a product of base symbols, e.g. `L·T^-1`; dimensionless sets print `1`.
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (symbol, exponent) in self.exponents() {
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            if exponent == 1 {
                f.write_str(symbol)?;
            } else {
                write!(f, "{}^{}", symbol, exponent)?;
            }
        }
        Ok(())
    }
}

/// Dimension set of a unit enumeration.
///
/// ```rust
/// use physq_core::{related_dimensions, Dimensions};
/// use physq_core::speed::SpeedUnit;
///
/// assert_eq!(related_dimensions::<SpeedUnit>(), Dimensions::LENGTH.div(Dimensions::TIME));
/// ```
pub const fn related_dimensions<U: crate::Unit>() -> Dimensions {
    U::DIMENSIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn independent_derivations_agree() {
        assert_eq!(Dimensions::LENGTH.mul(Dimensions::LENGTH), Dimensions::AREA);
        assert_eq!(Dimensions::AREA.mul(Dimensions::LENGTH), Dimensions::VOLUME);
        assert_eq!(Dimensions::LENGTH.pow(3), Dimensions::VOLUME);
        assert_eq!(Dimensions::TIME.recip(), Dimensions::FREQUENCY);
        assert_eq!(Dimensions::LENGTH.div(Dimensions::TIME), Dimensions::SPEED);
        assert_eq!(Dimensions::SPEED.mul(Dimensions::FREQUENCY), Dimensions::ACCELERATION);
        assert_eq!(Dimensions::MASS.div(Dimensions::VOLUME), Dimensions::MASS_DENSITY);
        assert_eq!(Dimensions::MASS.mul(Dimensions::ACCELERATION), Dimensions::FORCE);
        assert_eq!(Dimensions::FORCE.mul(Dimensions::LENGTH), Dimensions::ENERGY);
        assert_eq!(Dimensions::ENERGY.div(Dimensions::TIME), Dimensions::POWER);
        assert_eq!(Dimensions::FORCE.mul(Dimensions::SPEED), Dimensions::POWER);
        assert_eq!(Dimensions::FORCE.div(Dimensions::AREA), Dimensions::PRESSURE);
    }

    #[test]
    fn const_equals_matches_eq() {
        assert!(Dimensions::FORCE.equals(Dimensions::new(1, 1, -2, 0, 0, 0, 0)));
        assert!(!Dimensions::FORCE.equals(Dimensions::ENERGY));
        assert!(Dimensions::SPEED.div(Dimensions::SPEED).is_dimensionless());
    }

    #[test]
    fn ordering_is_tuple_order() {
        assert!(Dimensions::MASS < Dimensions::LENGTH);
        assert!(Dimensions::AREA > Dimensions::LENGTH);
        assert!(Dimensions::DIMENSIONLESS < Dimensions::LUMINOSITY);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Dimensions::DIMENSIONLESS.to_string(), "1");
        assert_eq!(Dimensions::LENGTH.to_string(), "L");
        assert_eq!(Dimensions::SPEED.to_string(), "L·T^-1");
        assert_eq!(Dimensions::FORCE.to_string(), "L·M·T^-2");
        assert_eq!(Dimensions::TEMPERATURE.to_string(), "Θ");
    }
}
