//! Time units and the [`Time`] quantity.
//!
//! The standard unit is the SI second. A day is exactly `86400 s`; leap seconds are not modelled.
//!
//! ```rust
//! use physq_core::time::{Hour, Minute, Time, TimeUnit};
//! use physq_core::Quantity;
//!
//! let t = Time::create::<Hour>(1.5);
//! assert_eq!(t.value(), 5400.0);
//! assert_eq!(t.static_value::<Minute>(), 90.0);
//! assert_eq!(t.print(TimeUnit::Hour, 2), "1.50 hr");
//! ```

use crate::Dimensions;
use physq_derive::Unit;

/// Units of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(name = "time", dimensions = Dimensions::TIME)]
pub enum TimeUnit {
    /// Second (SI base unit).
    #[unit(symbol = "s", scale = 1.0, standard, spellings = ["sec", "secs", "second", "seconds"])]
    Second,
    /// Minute (`60 s`).
    #[unit(symbol = "min", scale = 60.0, spellings = ["mins", "minute", "minutes"])]
    Minute,
    /// Hour (`3600 s`).
    #[unit(symbol = "hr", scale = 3600.0, spellings = ["h", "hrs", "hour", "hours"])]
    Hour,
    /// Day (`86400 s`).
    #[unit(symbol = "d", scale = 86400.0, spellings = ["day", "days"])]
    Day,
    /// Millisecond.
    #[unit(symbol = "ms", scale = 1e-3, spellings = ["millisecond", "milliseconds"])]
    Millisecond,
    /// Microsecond.
    #[unit(symbol = "μs", scale = 1e-6, spellings = ["us", "microsecond", "microseconds"])]
    Microsecond,
    /// Nanosecond.
    #[unit(symbol = "ns", scale = 1e-9, spellings = ["nanosecond", "nanoseconds"])]
    Nanosecond,
}

scalar_quantity! {
    /// A duration.
    Time: TimeUnit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn every_unit_round_trips() {
        for &unit in TimeUnit::ALL {
            for &x in &[0.0, -60.0, 3.15e9] {
                assert_relative_eq!(unit.from_standard(unit.to_standard(x)), x, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn calendar_units() {
        let day = Time::new(1.0, TimeUnit::Day);
        assert_eq!(day.value_in(TimeUnit::Hour), 24.0);
        assert_eq!(day.value_in(TimeUnit::Minute), 1440.0);
        assert_eq!(Time::create::<Second>(86400.0), day);
    }

    #[test]
    fn spellings() {
        assert_eq!(TimeUnit::parse("h"), Some(TimeUnit::Hour));
        assert_eq!(TimeUnit::parse("us"), Some(TimeUnit::Microsecond));
        assert_eq!(TimeUnit::parse("μs"), Some(TimeUnit::Microsecond));
        assert_eq!(TimeUnit::parse("Seconds"), None);
    }

    proptest! {
        #[test]
        fn prop_minutes_hours_consistent(v in -1e6..1e6f64) {
            let t = Time::new(v, TimeUnit::Hour);
            prop_assert!((t.value_in(TimeUnit::Minute) - 60.0 * v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
