//! Mass units and the [`Mass`] quantity.
//!
//! The standard unit is the kilogram; the avoirdupois pound is exactly `0.45359237 kg`.

use crate::Dimensions;
use physq_derive::Unit;

/// Units of mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "mass", dimensions = Dimensions::MASS)]
pub enum MassUnit {
    /// Kilogram (SI base unit).
    #[unit(symbol = "kg", scale = 1.0, standard, spellings = ["kilogram", "kilograms", "kilogramme", "kilogrammes"])]
    Kilogram,
    /// Gram.
    #[unit(symbol = "g", scale = 1e-3, spellings = ["gram", "grams", "gramme", "grammes"])]
    Gram,
    /// Milligram.
    #[unit(symbol = "mg", scale = 1e-6, spellings = ["milligram", "milligrams"])]
    Milligram,
    /// Microgram.
    #[unit(symbol = "μg", scale = 1e-9, spellings = ["ug", "microgram", "micrograms"])]
    Microgram,
    /// Metric tonne (`1000 kg`).
    #[unit(symbol = "t", scale = 1e3, spellings = ["tonne", "tonnes", "metric ton", "metric tons"])]
    Tonne,
    /// Avoirdupois pound.
    #[unit(symbol = "lb", scale = 0.45359237, spellings = ["lbs", "lbm", "pound", "pounds"])]
    Pound,
    /// Avoirdupois ounce (`1/16 lb`).
    #[unit(symbol = "oz", scale = 0.028349523125, spellings = ["ounce", "ounces"])]
    Ounce,
    /// Slug (`1 lbf·s^2/ft`).
    #[unit(symbol = "slug", scale = 14.593902937206362, spellings = ["slugs"])]
    Slug,
}

scalar_quantity! {
    /// A mass.
    Mass: MassUnit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in MassUnit::ALL {
            for &x in &[0.0, -0.5, 6e24] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn imperial_ladder() {
        assert_relative_eq!(Mass::new(1.0, MassUnit::Pound).value_in(MassUnit::Ounce), 16.0, max_relative = 1e-12);
        assert_relative_eq!(Mass::create::<Slug>(1.0).value_in(MassUnit::Pound), 32.17404855643044, max_relative = 1e-12);
        assert_eq!(Mass::new(2.5, MassUnit::Tonne), Mass::standard(2500.0));
    }

    #[test]
    fn parsing() {
        assert_eq!(MassUnit::parse("g"), Some(MassUnit::Gram));
        assert_eq!(MassUnit::parse("lbs"), Some(MassUnit::Pound));
        assert_eq!(MassUnit::parse("G"), None);
    }
}
