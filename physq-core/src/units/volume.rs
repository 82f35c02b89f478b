//! Volume units and the [`Volume`] quantity.

use crate::area::Area;
use crate::length::Length;
use crate::Dimensions;
use physq_derive::Unit;

/// Units of volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "volume", dimensions = Dimensions::VOLUME)]
pub enum VolumeUnit {
    /// Cubic metre.
    #[unit(symbol = "m^3", scale = 1.0, standard, spellings = ["m3", "m³", "cubic metre", "cubic metres", "cubic meter", "cubic meters"])]
    CubicMetre,
    /// Cubic kilometre.
    #[unit(symbol = "km^3", scale = 1e9, spellings = ["km3", "km³"])]
    CubicKilometre,
    /// Litre (`1e-3 m^3`).
    #[unit(symbol = "L", scale = 1e-3, spellings = ["l", "litre", "litres", "liter", "liters"])]
    Litre,
    /// Millilitre (`1e-6 m^3`).
    #[unit(symbol = "mL", scale = 1e-6, spellings = ["ml", "millilitre", "millilitres", "milliliter", "milliliters"])]
    Millilitre,
    /// Cubic centimetre.
    #[unit(symbol = "cm^3", scale = 1e-6, spellings = ["cm3", "cm³", "cc"])]
    CubicCentimetre,
    /// Cubic millimetre.
    #[unit(symbol = "mm^3", scale = 1e-9, spellings = ["mm3", "mm³"])]
    CubicMillimetre,
    /// Cubic foot.
    #[unit(symbol = "ft^3", scale = 0.028316846592, spellings = ["ft3", "ft³"])]
    CubicFoot,
    /// Cubic inch.
    #[unit(symbol = "in^3", scale = 1.6387064e-5, spellings = ["in3", "in³"])]
    CubicInch,
    /// US liquid gallon (`231 in^3`).
    #[unit(symbol = "gal", scale = 3.785411784e-3, spellings = ["gallon", "gallons"])]
    Gallon,
}

scalar_quantity! {
    /// A volume.
    Volume: VolumeUnit
}

impl_product!(Area, Length => Volume);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::AreaUnit;
    use crate::length::LengthUnit;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in VolumeUnit::ALL {
            for &x in &[0.0, -1.25, 5e9] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn volume_identities() {
        let base = Area::new(6.0, AreaUnit::SquareMetre);
        let height = Length::new(2.0, LengthUnit::Metre);
        let v = base * height;
        assert_eq!(v, Volume::new(12.0, VolumeUnit::CubicMetre));
        assert_eq!(height * base, v);
        assert_eq!(v / base, height);
        assert_eq!(v / height, base);
    }

    #[test]
    fn gallon_is_231_cubic_inches() {
        assert_relative_eq!(
            Volume::new(1.0, VolumeUnit::Gallon).value_in(VolumeUnit::CubicInch),
            231.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            Volume::new(1.0, VolumeUnit::Litre).static_value::<Millilitre>(),
            1000.0,
            max_relative = 1e-12
        );
    }
}
