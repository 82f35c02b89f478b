//! Frequency units and the [`Frequency`] quantity.
//!
//! Frequency is the reciprocal of [`Time`]: `1.0 / time` gives a frequency, and a time multiplied by a frequency is a
//! plain number.

use crate::time::Time;
use crate::Dimensions;
use physq_derive::Unit;

/// Units of frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "frequency", dimensions = Dimensions::FREQUENCY)]
pub enum FrequencyUnit {
    /// Hertz (`1/s`).
    #[unit(symbol = "Hz", scale = 1.0, standard, spellings = ["hertz", "1/s", "s^-1"])]
    Hertz,
    /// Kilohertz.
    #[unit(symbol = "kHz", scale = 1e3, spellings = ["kilohertz"])]
    Kilohertz,
    /// Megahertz.
    #[unit(symbol = "MHz", scale = 1e6, spellings = ["megahertz"])]
    Megahertz,
    /// Gigahertz.
    #[unit(symbol = "GHz", scale = 1e9, spellings = ["gigahertz"])]
    Gigahertz,
    /// Events per minute.
    #[unit(symbol = "1/min", scale = 1.0 / 60.0, spellings = ["min^-1", "rpm", "per minute"])]
    PerMinute,
    /// Events per hour.
    #[unit(symbol = "1/hr", scale = 1.0 / 3600.0, spellings = ["hr^-1", "1/h", "per hour"])]
    PerHour,
}

scalar_quantity! {
    /// A frequency, the number of events per unit time.
    Frequency: FrequencyUnit
}

impl_product!(Time, Frequency => f64);

impl Time {
    /// The period of `frequency`.
    #[inline]
    pub fn period(frequency: Frequency) -> Self {
        1.0 / frequency
    }
}

impl Frequency {
    /// The frequency of an event repeating every `period`.
    #[inline]
    pub fn of_period(period: Time) -> Self {
        1.0 / period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeUnit;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn every_unit_round_trips() {
        for &unit in FrequencyUnit::ALL {
            for &x in &[0.0, -2.0, 4.4e9] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn reciprocal_of_time() {
        let t = Time::new(2.0, TimeUnit::Millisecond);
        let f: Frequency = 1.0 / t;
        assert_relative_eq!(f.value_in(FrequencyUnit::Hertz), 500.0, max_relative = 1e-12);
        assert_relative_eq!((1.0 / f).value(), t.value(), max_relative = 1e-15);
        assert_relative_eq!(t * f, 1.0, max_relative = 1e-15);
        assert_relative_eq!(f * t, 1.0, max_relative = 1e-15);
        assert_eq!(Frequency::of_period(t), f);
        assert_eq!(Time::period(f), 1.0 / f);
    }

    #[test]
    fn per_minute() {
        let f = Frequency::new(120.0, FrequencyUnit::PerMinute);
        assert_relative_eq!(f.value(), 2.0, max_relative = 1e-15);
        assert_eq!(FrequencyUnit::parse("rpm"), Some(FrequencyUnit::PerMinute));
    }
}
