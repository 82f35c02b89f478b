//! Power units and the [`Power`] quantity.
//!
//! ```rust
//! use physq_core::energy::{Energy, EnergyUnit};
//! use physq_core::power::{Power, PowerUnit};
//! use physq_core::time::{Time, TimeUnit};
//!
//! let e: Energy = Power::new(2.0, PowerUnit::Kilowatt) * Time::new(3.0, TimeUnit::Hour);
//! assert!((e.value_in(EnergyUnit::KilowattHour) - 6.0).abs() < 1e-12);
//! ```

use crate::energy::Energy;
use crate::force::ScalarForce;
use crate::frequency::Frequency;
use crate::speed::Speed;
use crate::time::Time;
use crate::Dimensions;
use physq_derive::Unit;

/// Units of power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "power", dimensions = Dimensions::POWER)]
pub enum PowerUnit {
    /// Watt.
    #[unit(symbol = "W", scale = 1.0, standard, spellings = ["watt", "watts", "J/s"])]
    Watt,
    /// Kilowatt.
    #[unit(symbol = "kW", scale = 1e3, spellings = ["kilowatt", "kilowatts"])]
    Kilowatt,
    /// Megawatt.
    #[unit(symbol = "MW", scale = 1e6, spellings = ["megawatt", "megawatts"])]
    Megawatt,
    /// Gigawatt.
    #[unit(symbol = "GW", scale = 1e9, spellings = ["gigawatt", "gigawatts"])]
    Gigawatt,
    /// Milliwatt.
    #[unit(symbol = "mW", scale = 1e-3, spellings = ["milliwatt", "milliwatts"])]
    Milliwatt,
    /// Mechanical horsepower (`550 ft·lbf/s`).
    #[unit(symbol = "hp", scale = 745.6998715822702, spellings = ["horsepower"])]
    Horsepower,
    /// Foot-pound per second.
    #[unit(symbol = "ft·lbf/s", scale = 1.3558179483314003, spellings = ["ft*lbf/s", "ft-lbf/s"])]
    FootPoundPerSecond,
    /// British thermal unit per hour.
    #[unit(symbol = "BTU/hr", scale = 1055.05585262 / 3600.0, spellings = ["BTU/h", "Btu/h", "btu/h"])]
    BritishThermalUnitPerHour,
}

scalar_quantity! {
    /// Energy per unit time.
    Power: PowerUnit
}

impl_product!(Power, Time => Energy);
impl_product!(Energy, Frequency => Power);
impl_product!(ScalarForce, Speed => Power);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in PowerUnit::ALL {
            for &x in &[0.0, -3.0, 4.2e10] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn horsepower_is_550_foot_pounds_per_second() {
        let hp = Power::new(1.0, PowerUnit::Horsepower);
        assert_relative_eq!(hp.static_value::<FootPoundPerSecond>(), 550.0, max_relative = 1e-12);
    }

    #[test]
    fn power_identities() {
        let p = Power::standard(60.0);
        let t = Time::standard(10.0);
        let e = p * t;
        assert_eq!(e, Energy::standard(600.0));
        assert_eq!(t * p, e);
        assert_eq!(e / t, p);
        assert_eq!(e / p, t);

        let f = Frequency::standard(0.1);
        assert_relative_eq!((e * f).value(), p.value(), max_relative = 1e-15);
        assert_relative_eq!((f * e).value(), p.value(), max_relative = 1e-15);
        assert_relative_eq!((p / e).value(), f.value(), max_relative = 1e-15);
        assert_relative_eq!((p / f).value(), e.value(), max_relative = 1e-15);

        let force = ScalarForce::standard(20.0);
        let v = Speed::standard(3.0);
        assert_eq!(force * v, p);
        assert_eq!(v * force, p);
        assert_eq!(p / v, force);
        assert_eq!(p / force, v);
    }
}
