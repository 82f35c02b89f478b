//! Pressure units and the [`Pressure`] quantity.

use crate::area::Area;
use crate::energy::Energy;
use crate::force::ScalarForce;
use crate::volume::Volume;
use crate::Dimensions;
use physq_derive::Unit;

/// Units of pressure and stress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "pressure", dimensions = Dimensions::PRESSURE)]
pub enum PressureUnit {
    /// Pascal.
    #[unit(symbol = "Pa", scale = 1.0, standard, spellings = ["pascal", "pascals", "N/m^2"])]
    Pascal,
    /// Kilopascal.
    #[unit(symbol = "kPa", scale = 1e3, spellings = ["kilopascal", "kilopascals"])]
    Kilopascal,
    /// Megapascal.
    #[unit(symbol = "MPa", scale = 1e6, spellings = ["megapascal", "megapascals"])]
    Megapascal,
    /// Gigapascal.
    #[unit(symbol = "GPa", scale = 1e9, spellings = ["gigapascal", "gigapascals"])]
    Gigapascal,
    /// Bar (`1e5 Pa`).
    #[unit(symbol = "bar", scale = 1e5, spellings = ["bars"])]
    Bar,
    /// Millibar.
    #[unit(symbol = "mbar", scale = 100.0, spellings = ["millibar", "millibars", "hPa"])]
    Millibar,
    /// Standard atmosphere (`101325 Pa`).
    #[unit(symbol = "atm", scale = 101325.0, spellings = ["atmosphere", "atmospheres"])]
    Atmosphere,
    /// Torr (`1/760 atm`).
    #[unit(symbol = "Torr", scale = 101325.0 / 760.0, spellings = ["torr"])]
    Torr,
    /// Conventional millimetre of mercury.
    #[unit(symbol = "mmHg", scale = 133.322387415, spellings = ["mm Hg"])]
    MillimetreOfMercury,
    /// Pound-force per square inch.
    #[unit(symbol = "psi", scale = 6894.757293168361, spellings = ["lbf/in^2", "lbf/in2"])]
    PoundPerSquareInch,
    /// Pound-force per square foot.
    #[unit(symbol = "psf", scale = 47.88025898033584, spellings = ["lbf/ft^2", "lbf/ft2"])]
    PoundPerSquareFoot,
}

scalar_quantity! {
    /// Force per unit area.
    Pressure: PressureUnit
}

impl_product!(Pressure, Area => ScalarForce);
impl_product!(Pressure, Volume => Energy);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::AreaUnit;
    use crate::force::ForceUnit;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in PressureUnit::ALL {
            for &x in &[0.0, -1.0, 2.5e11] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn psi_is_pound_force_over_square_inch() {
        let p = ScalarForce::new(1.0, ForceUnit::PoundForce) / Area::new(1.0, AreaUnit::SquareInch);
        assert_relative_eq!(p.value_in(PressureUnit::PoundPerSquareInch), 1.0, max_relative = 1e-12);
        let psf = ScalarForce::new(1.0, ForceUnit::PoundForce) / Area::new(1.0, AreaUnit::SquareFoot);
        assert_relative_eq!(psf.static_value::<PoundPerSquareFoot>(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn atmosphere_ladder() {
        let atm = Pressure::create::<Atmosphere>(1.0);
        assert_relative_eq!(atm.value_in(PressureUnit::Torr), 760.0, max_relative = 1e-12);
        assert_relative_eq!(atm.value_in(PressureUnit::Millibar), 1013.25, max_relative = 1e-12);
        assert_relative_eq!(atm.value_in(PressureUnit::MillimetreOfMercury), 760.0, max_relative = 1e-6);
    }

    #[test]
    fn pressure_identities() {
        let p = Pressure::standard(200.0);
        let a = Area::standard(0.5);
        assert_eq!(p * a, ScalarForce::standard(100.0));
        assert_eq!(a * p, ScalarForce::standard(100.0));
        assert_eq!(ScalarForce::standard(100.0) / a, p);
        assert_eq!(ScalarForce::standard(100.0) / p, a);
        let v = Volume::standard(0.25);
        assert_eq!(p * v, Energy::standard(50.0));
        assert_eq!(Energy::standard(50.0) / v, p);
    }
}
