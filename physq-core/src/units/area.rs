//! Area units and the [`Area`] quantity.
//!
//! ```rust
//! use physq_core::area::{Area, AreaUnit};
//! use physq_core::length::{Length, LengthUnit};
//!
//! let side = Length::new(4.0, LengthUnit::Metre);
//! assert_eq!(side * side, Area::new(16.0, AreaUnit::SquareMetre));
//! assert_eq!(Area::new(8.0, AreaUnit::SquareMetre) / side, Length::new(2.0, LengthUnit::Metre));
//! ```

use crate::length::Length;
use crate::Dimensions;
use physq_derive::Unit;

/// Units of area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "area", dimensions = Dimensions::AREA)]
pub enum AreaUnit {
    /// Square metre.
    #[unit(symbol = "m^2", scale = 1.0, standard, spellings = ["m2", "m²", "square metre", "square metres", "square meter", "square meters"])]
    SquareMetre,
    /// Square kilometre.
    #[unit(symbol = "km^2", scale = 1e6, spellings = ["km2", "km²"])]
    SquareKilometre,
    /// Hectare (`1e4 m^2`).
    #[unit(symbol = "ha", scale = 1e4, spellings = ["hectare", "hectares"])]
    Hectare,
    /// Square centimetre.
    #[unit(symbol = "cm^2", scale = 1e-4, spellings = ["cm2", "cm²"])]
    SquareCentimetre,
    /// Square millimetre.
    #[unit(symbol = "mm^2", scale = 1e-6, spellings = ["mm2", "mm²"])]
    SquareMillimetre,
    /// Square mile.
    #[unit(symbol = "mi^2", scale = 2589988.110336, spellings = ["mi2", "mi²"])]
    SquareMile,
    /// International acre (`43560 ft^2`).
    #[unit(symbol = "ac", scale = 4046.8564224, spellings = ["acre", "acres"])]
    Acre,
    /// Square yard.
    #[unit(symbol = "yd^2", scale = 0.83612736, spellings = ["yd2", "yd²"])]
    SquareYard,
    /// Square foot.
    #[unit(symbol = "ft^2", scale = 0.09290304, spellings = ["ft2", "ft²"])]
    SquareFoot,
    /// Square inch.
    #[unit(symbol = "in^2", scale = 0.00064516, spellings = ["in2", "in²"])]
    SquareInch,
}

scalar_quantity! {
    /// A surface area.
    Area: AreaUnit
}

impl_mul!(Length, Length => Area);
impl_div!(Area, Length => Length);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::LengthUnit;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in AreaUnit::ALL {
            for &x in &[0.0, -3.5, 1e12] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn squared_lengths_match_area_units() {
        let ft = Length::new(1.0, LengthUnit::Foot);
        assert_relative_eq!((ft * ft).value_in(AreaUnit::SquareFoot), 1.0, max_relative = 1e-12);
        let mi = Length::new(1.0, LengthUnit::Mile);
        assert_relative_eq!((mi * mi).value_in(AreaUnit::SquareMile), 1.0, max_relative = 1e-12);
        assert_relative_eq!(
            Area::new(1.0, AreaUnit::SquareMile).value_in(AreaUnit::Acre),
            640.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn area_over_length() {
        let area = Area::new(8.0, AreaUnit::SquareMetre);
        let side = Length::new(4.0, LengthUnit::Metre);
        assert_eq!(area / side, Length::new(2.0, LengthUnit::Metre));
        assert_eq!(area / area, 1.0);
    }

    #[test]
    fn parses_symbol_variants() {
        assert_eq!(AreaUnit::parse("m²"), Some(AreaUnit::SquareMetre));
        assert_eq!(AreaUnit::parse("acres"), Some(AreaUnit::Acre));
        assert_eq!(AreaUnit::parse("M2"), None);
    }
}
