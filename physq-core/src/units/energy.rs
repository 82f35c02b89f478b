//! Energy units and the [`Energy`] quantity.

use crate::force::ScalarForce;
use crate::length::Length;
use crate::Dimensions;
use physq_derive::Unit;

/// Units of energy, work and heat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "energy", dimensions = Dimensions::ENERGY)]
pub enum EnergyUnit {
    /// Joule.
    #[unit(symbol = "J", scale = 1.0, standard, spellings = ["joule", "joules", "N·m", "N*m"])]
    Joule,
    /// Kilojoule.
    #[unit(symbol = "kJ", scale = 1e3, spellings = ["kilojoule", "kilojoules"])]
    Kilojoule,
    /// Megajoule.
    #[unit(symbol = "MJ", scale = 1e6, spellings = ["megajoule", "megajoules"])]
    Megajoule,
    /// Millijoule.
    #[unit(symbol = "mJ", scale = 1e-3, spellings = ["millijoule", "millijoules"])]
    Millijoule,
    /// Thermochemical calorie (`4.184 J`).
    #[unit(symbol = "cal", scale = 4.184, spellings = ["calorie", "calories"])]
    Calorie,
    /// Thermochemical kilocalorie.
    #[unit(symbol = "kcal", scale = 4184.0, spellings = ["Cal", "kilocalorie", "kilocalories"])]
    Kilocalorie,
    /// Watt-hour.
    #[unit(symbol = "Wh", scale = 3600.0, spellings = ["W·h", "watt-hour", "watt-hours"])]
    WattHour,
    /// Kilowatt-hour.
    #[unit(symbol = "kWh", scale = 3.6e6, spellings = ["kW·h", "kilowatt-hour", "kilowatt-hours"])]
    KilowattHour,
    /// Electronvolt.
    #[unit(symbol = "eV", scale = 1.602176634e-19, spellings = ["electronvolt", "electronvolts"])]
    Electronvolt,
    /// Foot-pound (`1 ft·lbf`).
    #[unit(symbol = "ft·lbf", scale = 1.3558179483314003, spellings = ["ft*lbf", "ft-lbf", "ft-lb", "foot-pound", "foot-pounds"])]
    FootPound,
    /// International Table British thermal unit.
    #[unit(symbol = "BTU", scale = 1055.05585262, spellings = ["Btu", "btu"])]
    BritishThermalUnit,
}

scalar_quantity! {
    /// An amount of energy.
    Energy: EnergyUnit
}

impl_product!(ScalarForce, Length => Energy);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::ForceUnit;
    use crate::length::LengthUnit;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in EnergyUnit::ALL {
            for &x in &[0.0, -12.5, 1e9] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn work_is_force_times_distance() {
        let f = ScalarForce::new(1.0, ForceUnit::PoundForce);
        let d = Length::new(1.0, LengthUnit::Foot);
        let w = f * d;
        assert_relative_eq!(w.static_value::<FootPound>(), 1.0, max_relative = 1e-12);
        assert_eq!(d * f, w);
        assert_eq!(w / f, d);
        assert_relative_eq!((w / d).value(), f.value(), max_relative = 1e-15);
    }

    #[test]
    fn everyday_conversions() {
        let e = Energy::new(1.0, EnergyUnit::KilowattHour);
        assert_relative_eq!(e.value_in(EnergyUnit::Megajoule), 3.6, max_relative = 1e-15);
        assert_relative_eq!(Energy::create::<Kilocalorie>(1.0).value_in(EnergyUnit::Calorie), 1000.0, max_relative = 1e-15);
        assert_eq!(EnergyUnit::parse("ft-lb"), Some(EnergyUnit::FootPound));
    }
}
