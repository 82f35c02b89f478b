//! Acceleration units, the scalar [`ScalarAcceleration`] and the vector [`Acceleration`] /
//! [`PlanarAcceleration`] quantities.

use crate::frequency::Frequency;
use crate::speed::{PlanarVelocity, Speed, Velocity};
use crate::time::Time;
use crate::{Dimensions, Direction, PlanarDirection};
use physq_derive::Unit;

/// Units of acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "acceleration", dimensions = Dimensions::ACCELERATION)]
pub enum AccelerationUnit {
    /// Metre per square second.
    #[unit(symbol = "m/s^2", scale = 1.0, standard, spellings = ["m/s2", "m/s²", "m s^-2"])]
    MetrePerSquareSecond,
    /// Kilometre per square second.
    #[unit(symbol = "km/s^2", scale = 1e3, spellings = ["km/s2", "km/s²"])]
    KilometrePerSquareSecond,
    /// Centimetre per square second (gal).
    #[unit(symbol = "cm/s^2", scale = 1e-2, spellings = ["cm/s2", "cm/s²", "Gal"])]
    CentimetrePerSquareSecond,
    /// Millimetre per square second.
    #[unit(symbol = "mm/s^2", scale = 1e-3, spellings = ["mm/s2", "mm/s²"])]
    MillimetrePerSquareSecond,
    /// Standard gravity (`9.80665 m/s^2`).
    #[unit(symbol = "g0", scale = 9.80665, spellings = ["gn", "g₀"])]
    StandardGravity,
    /// Foot per square second.
    #[unit(symbol = "ft/s^2", scale = 0.3048, spellings = ["ft/s2", "ft/s²"])]
    FootPerSquareSecond,
    /// Inch per square second.
    #[unit(symbol = "in/s^2", scale = 0.0254, spellings = ["in/s2", "in/s²"])]
    InchPerSquareSecond,
}

scalar_quantity! {
    /// The magnitude of an acceleration.
    ScalarAcceleration: AccelerationUnit
}

vector_quantity! {
    /// A three-dimensional acceleration.
    Acceleration: AccelerationUnit, magnitude ScalarAcceleration, planar PlanarAcceleration
}

planar_quantity! {
    /// A two-dimensional acceleration.
    PlanarAcceleration: AccelerationUnit, magnitude ScalarAcceleration
}

impl_product!(ScalarAcceleration, Time => Speed);
impl_product!(Speed, Frequency => ScalarAcceleration);

impl_directed!(ScalarAcceleration, Direction => Acceleration);
impl_directed!(ScalarAcceleration, PlanarDirection => PlanarAcceleration);

impl_quotient!(Velocity, Time => Acceleration);
impl_quotient!(Acceleration, Frequency => Velocity);
impl_quotient!(PlanarVelocity, Time => PlanarAcceleration);
impl_quotient!(PlanarAcceleration, Frequency => PlanarVelocity);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speed::SpeedUnit;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in AccelerationUnit::ALL {
            for &x in &[0.0, -9.80665, 1e7] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn scalar_identities() {
        let a = ScalarAcceleration::new(2.0, AccelerationUnit::MetrePerSquareSecond);
        let t = Time::standard(3.0);
        let s = a * t;
        assert_eq!(s, Speed::new(6.0, SpeedUnit::MetrePerSecond));
        assert_eq!(t * a, s);
        assert_eq!(s / t, a);
        assert_eq!(s / a, t);
        let f = Frequency::standard(0.5);
        assert_eq!(s * f, ScalarAcceleration::standard(3.0));
        assert_eq!(ScalarAcceleration::standard(3.0) / f, s);
        assert_eq!(ScalarAcceleration::standard(3.0) / s, f);
    }

    #[test]
    fn vector_identities() {
        let v = Velocity::standard([4.0, 0.0, -2.0]);
        let t = Time::standard(2.0);
        let a = v / t;
        assert_eq!(a, Acceleration::standard([2.0, 0.0, -1.0]));
        assert_eq!(a * t, v);
        assert_eq!(t * a, v);
        let f = Frequency::standard(0.5);
        assert_eq!(v * f, a);
        assert_eq!(f * v, a);
        assert_eq!(a / f, v);
    }

    #[test]
    fn gravity_along_direction() {
        let g = ScalarAcceleration::create::<StandardGravity>(1.0) * -Direction::Z;
        assert_eq!(g.z(), ScalarAcceleration::standard(-9.80665));
        assert_eq!(g.magnitude().static_value::<StandardGravity>(), 1.0);
        let planar = PlanarDirection::X * ScalarAcceleration::standard(1.5);
        assert_eq!(planar, PlanarAcceleration::standard([1.5, 0.0]));
        assert_eq!(PlanarVelocity::standard([3.0, 0.0]) / Time::standard(2.0), planar);
    }
}
