//! Speed units, the scalar [`Speed`] and the vector [`Velocity`] / [`PlanarVelocity`] quantities.
//!
//! ```rust
//! use physq_core::length::{Displacement, Length, LengthUnit};
//! use physq_core::speed::{Speed, SpeedUnit, Velocity};
//! use physq_core::time::{Time, TimeUnit};
//!
//! let v: Speed = Length::new(100.0, LengthUnit::Metre) / Time::new(20.0, TimeUnit::Second);
//! assert_eq!(v, Speed::new(5.0, SpeedUnit::MetrePerSecond));
//!
//! let d = Displacement::new([10.0, 0.0, -4.0], LengthUnit::Metre);
//! let velocity: Velocity = d / Time::new(2.0, TimeUnit::Second);
//! assert_eq!(velocity * Time::new(2.0, TimeUnit::Second), d);
//! ```

use crate::frequency::Frequency;
use crate::length::{Displacement, Length, PlanarDisplacement};
use crate::time::Time;
use crate::{Dimensions, Direction, PlanarDirection};
use physq_derive::Unit;

/// Units of speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "speed", dimensions = Dimensions::SPEED)]
pub enum SpeedUnit {
    /// Metre per second.
    #[unit(symbol = "m/s", scale = 1.0, standard, spellings = ["m s^-1", "metre per second", "metres per second", "meter per second", "meters per second"])]
    MetrePerSecond,
    /// Kilometre per hour.
    #[unit(symbol = "km/hr", scale = 1000.0 / 3600.0, spellings = ["km/h", "kph", "kmh"])]
    KilometrePerHour,
    /// Mile per hour.
    #[unit(symbol = "mi/hr", scale = 0.44704, spellings = ["mi/h", "mph"])]
    MilePerHour,
    /// Knot (nautical mile per hour).
    #[unit(symbol = "kn", scale = 1852.0 / 3600.0, spellings = ["kt", "knot", "knots"])]
    Knot,
    /// Kilometre per second.
    #[unit(symbol = "km/s", scale = 1e3, spellings = [])]
    KilometrePerSecond,
    /// Centimetre per second.
    #[unit(symbol = "cm/s", scale = 1e-2, spellings = [])]
    CentimetrePerSecond,
    /// Millimetre per second.
    #[unit(symbol = "mm/s", scale = 1e-3, spellings = [])]
    MillimetrePerSecond,
    /// Foot per second.
    #[unit(symbol = "ft/s", scale = 0.3048, spellings = ["fps"])]
    FootPerSecond,
    /// Inch per second.
    #[unit(symbol = "in/s", scale = 0.0254, spellings = ["ips"])]
    InchPerSecond,
}

scalar_quantity! {
    /// The magnitude of a velocity.
    Speed: SpeedUnit
}

vector_quantity! {
    /// A three-dimensional velocity.
    Velocity: SpeedUnit, magnitude Speed, planar PlanarVelocity
}

planar_quantity! {
    /// A two-dimensional velocity.
    PlanarVelocity: SpeedUnit, magnitude Speed
}

impl_product!(Speed, Time => Length);
impl_product!(Length, Frequency => Speed);

impl_directed!(Speed, Direction => Velocity);
impl_directed!(Speed, PlanarDirection => PlanarVelocity);

impl_quotient!(Displacement, Time => Velocity);
impl_quotient!(Velocity, Frequency => Displacement);
impl_quotient!(PlanarDisplacement, Time => PlanarVelocity);
impl_quotient!(PlanarVelocity, Frequency => PlanarDisplacement);
