//! Mass density units and the [`MassDensity`] quantity.

use crate::mass::Mass;
use crate::volume::Volume;
use crate::Dimensions;
use physq_derive::Unit;

/// Units of mass density.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "mass_density", dimensions = Dimensions::MASS_DENSITY)]
pub enum MassDensityUnit {
    /// Kilogram per cubic metre.
    #[unit(symbol = "kg/m^3", scale = 1.0, standard, spellings = ["kg/m3", "kg/m³"])]
    KilogramPerCubicMetre,
    /// Gram per cubic centimetre.
    #[unit(symbol = "g/cm^3", scale = 1e3, spellings = ["g/cm3", "g/cm³", "g/mL", "g/ml"])]
    GramPerCubicCentimetre,
    /// Kilogram per litre.
    #[unit(symbol = "kg/L", scale = 1e3, spellings = ["kg/l"])]
    KilogramPerLitre,
    /// Gram per litre.
    #[unit(symbol = "g/L", scale = 1.0, spellings = ["g/l"])]
    GramPerLitre,
    /// Pound per cubic foot.
    #[unit(symbol = "lb/ft^3", scale = 16.018463373960138, spellings = ["lb/ft3", "lb/ft³"])]
    PoundPerCubicFoot,
    /// Pound per cubic inch.
    #[unit(symbol = "lb/in^3", scale = 27679.904710203125, spellings = ["lb/in3", "lb/in³"])]
    PoundPerCubicInch,
    /// Slug per cubic foot.
    #[unit(symbol = "slug/ft^3", scale = 515.3788183931961, spellings = ["slug/ft3", "slug/ft³"])]
    SlugPerCubicFoot,
}

scalar_quantity! {
    /// Mass per unit volume.
    MassDensity: MassDensityUnit
}

impl_product!(MassDensity, Volume => Mass);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mass::MassUnit;
    use crate::volume::VolumeUnit;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in MassDensityUnit::ALL {
            for &x in &[0.0, -1.0, 2.2e4] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn density_identities() {
        let m = Mass::new(2.0, MassUnit::Kilogram);
        let v = Volume::new(1.0, VolumeUnit::Litre);
        let rho: MassDensity = m / v;
        assert_relative_eq!(rho.value_in(MassDensityUnit::GramPerCubicCentimetre), 2.0, max_relative = 1e-12);
        assert_relative_eq!((rho * v).value(), m.value(), max_relative = 1e-15);
        assert_relative_eq!((v * rho).value(), m.value(), max_relative = 1e-15);
        assert_relative_eq!((m / rho).value(), v.value(), max_relative = 1e-15);
    }

    #[test]
    fn imperial_units_agree_with_their_parts() {
        let lb_ft3 = Mass::new(1.0, MassUnit::Pound) / Volume::new(1.0, VolumeUnit::CubicFoot);
        assert_relative_eq!(lb_ft3.value_in(MassDensityUnit::PoundPerCubicFoot), 1.0, max_relative = 1e-12);
        let slug_ft3 = Mass::new(1.0, MassUnit::Slug) / Volume::new(1.0, VolumeUnit::CubicFoot);
        assert_relative_eq!(slug_ft3.value_in(MassDensityUnit::SlugPerCubicFoot), 1.0, max_relative = 1e-12);
    }
}
