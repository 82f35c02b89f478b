//! Force units, the scalar [`ScalarForce`] and the vector [`Force`] / [`PlanarForce`] quantities.
//!
//! ```rust
//! use physq_core::acceleration::{Acceleration, AccelerationUnit};
//! use physq_core::force::{Force, ForceUnit};
//! use physq_core::mass::{Mass, MassUnit};
//!
//! let m = Mass::new(2.0, MassUnit::Kilogram);
//! let a = Acceleration::new([0.0, 0.0, -9.0], AccelerationUnit::MetrePerSquareSecond);
//! assert_eq!(m * a, Force::new([0.0, 0.0, -18.0], ForceUnit::Newton));
//! ```

use crate::acceleration::{Acceleration, PlanarAcceleration, ScalarAcceleration};
use crate::mass::Mass;
use crate::{Dimensions, Direction, PlanarDirection};
use physq_derive::Unit;

/// Units of force.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "force", dimensions = Dimensions::FORCE)]
pub enum ForceUnit {
    /// Newton.
    #[unit(symbol = "N", scale = 1.0, standard, spellings = ["newton", "newtons"])]
    Newton,
    /// Kilonewton.
    #[unit(symbol = "kN", scale = 1e3, spellings = ["kilonewton", "kilonewtons"])]
    Kilonewton,
    /// Meganewton.
    #[unit(symbol = "MN", scale = 1e6, spellings = ["meganewton", "meganewtons"])]
    Meganewton,
    /// Millinewton.
    #[unit(symbol = "mN", scale = 1e-3, spellings = ["millinewton", "millinewtons"])]
    Millinewton,
    /// Micronewton.
    #[unit(symbol = "μN", scale = 1e-6, spellings = ["uN", "micronewton", "micronewtons"])]
    Micronewton,
    /// Dyne (`1e-5 N`).
    #[unit(symbol = "dyn", scale = 1e-5, spellings = ["dyne", "dynes"])]
    Dyne,
    /// Kilogram-force (`9.80665 N`).
    #[unit(symbol = "kgf", scale = 9.80665, spellings = ["kilogram-force", "kp"])]
    KilogramForce,
    /// Pound-force.
    #[unit(symbol = "lbf", scale = 4.4482216152605, spellings = ["pound-force"])]
    PoundForce,
    /// Ounce-force (`1/16 lbf`).
    #[unit(symbol = "ozf", scale = 0.2780138509537812, spellings = ["ounce-force"])]
    OunceForce,
}

scalar_quantity! {
    /// The magnitude of a force.
    ScalarForce: ForceUnit
}

vector_quantity! {
    /// A three-dimensional force.
    Force: ForceUnit, magnitude ScalarForce, planar PlanarForce
}

planar_quantity! {
    /// A two-dimensional force.
    PlanarForce: ForceUnit, magnitude ScalarForce
}

impl_product!(Mass, ScalarAcceleration => ScalarForce);

impl_directed!(ScalarForce, Direction => Force);
impl_directed!(ScalarForce, PlanarDirection => PlanarForce);

impl_quotient!(Force, Mass => Acceleration);
impl_quotient!(PlanarForce, Mass => PlanarAcceleration);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acceleration::AccelerationUnit;
    use crate::mass::MassUnit;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in ForceUnit::ALL {
            for &x in &[0.0, -100.0, 3.3e8] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn pound_force_is_pound_times_gravity() {
        let w = Mass::new(1.0, MassUnit::Pound) * ScalarAcceleration::new(1.0, AccelerationUnit::StandardGravity);
        assert_relative_eq!(w.value_in(ForceUnit::PoundForce), 1.0, max_relative = 1e-12);
        let slug = Mass::new(1.0, MassUnit::Slug) * ScalarAcceleration::new(1.0, AccelerationUnit::FootPerSquareSecond);
        assert_relative_eq!(slug.value_in(ForceUnit::PoundForce), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn newtons_second_law() {
        let m = Mass::standard(4.0);
        let a = ScalarAcceleration::standard(2.5);
        let f = m * a;
        assert_eq!(f, ScalarForce::standard(10.0));
        assert_eq!(a * m, f);
        assert_eq!(f / m, a);
        assert_eq!(f / a, m);

        let va = Acceleration::standard([1.0, -2.0, 0.5]);
        let vf = m * va;
        assert_eq!(vf, Force::standard([4.0, -8.0, 2.0]));
        assert_eq!(va * m, vf);
        assert_eq!(vf / m, va);
    }

    #[test]
    fn directed_forces() {
        let f = ScalarForce::new(3.0, ForceUnit::Kilonewton) * Direction::Y;
        assert_eq!(f.y(), ScalarForce::standard(3000.0));
        assert_eq!(f.magnitude(), ScalarForce::standard(3000.0));
        let p = PlanarDirection::new(0.0, -1.0) * ScalarForce::standard(2.0);
        assert_eq!(p, PlanarForce::standard([0.0, -2.0]));
        assert_eq!(p / Mass::standard(2.0), PlanarAcceleration::standard([0.0, -1.0]));
        assert_eq!(Force::from(p), Force::standard([0.0, -2.0, 0.0]));
    }
}
