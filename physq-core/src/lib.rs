//! Core type system for strongly typed physical quantities.
//!
//! `physq-core` provides a compile-time dimensional-analysis model:
//!
//! - A *unit enumeration* ([`Unit`]) lists the units of one dimension, each with an abbreviation, accepted spellings
//!   and a scale relative to the dimension's standard unit. Every unit also has a zero-sized *marker type*
//!   ([`StaticUnit`]) naming it at compile time.
//! - A *quantity type* (`Length`, `Velocity`, `Pressure`, …) stores its value, or its 2/3 components, in the standard
//!   unit. Constructors take any unit and convert once; accessors convert back on request.
//! - *Identities* between quantity types are operators: `Length / Time` is a `Speed`, `Length * Direction` is a
//!   `Position`, `Mass * Acceleration` is a `Force`. Each identity carries a compile-time check that the
//!   [`Dimensions`] of its operands multiply out to those of its result.
//!
//! Most users should depend on `physq` (the facade crate), which adds configurable display preferences.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions: adding a `Length` to a `Time` does not compile.
//! - Static conversions folded into constants ([`convert_statically`], `create::<M>`, `static_value::<M>`).
//! - Dynamic conversions and case-sensitive parsing for units chosen at runtime ([`convert`], [`parse_unit`]).
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: every quantity is `f64`.
//! - Symbolic unit expressions: only the identities declared by the unit modules exist.
//!
//! # Quick start
//!
//! ```rust
//! use physq_core::length::{Length, LengthUnit};
//! use physq_core::speed::{Speed, SpeedUnit};
//! use physq_core::time::{Time, TimeUnit};
//!
//! let d = Length::new(100.0, LengthUnit::Metre);
//! let t = Time::new(20.0, TimeUnit::Second);
//! let v: Speed = d / t;
//! assert!((v.value_in(SpeedUnit::KilometrePerHour) - 18.0).abs() < 1e-12);
//! ```
//!
//! Mixing dimensions is rejected by the compiler:
//!
//! ```compile_fail
//! use physq_core::length::Length;
//! use physq_core::time::Time;
//!
//! let _ = Length::standard(1.0) + Time::standard(1.0);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support. Quantities serialize compactly as their standard-unit value; see
//!   [`serde_with_unit`] for the `{ value, unit }` form. Unit enumerations serialize as their abbreviation.
//!
//! # Panics and errors
//!
//! Conversions and arithmetic are pure `f64` computations and follow IEEE-754 behavior: normalising a zero vector or
//! measuring the angle to one yields NaN. The only error type is [`UnknownUnitError`], returned by the `FromStr`
//! implementations of the unit enumerations.
//!
//! # Logging
//!
//! Spelling tables report through the [`log`](https://docs.rs/log) facade: `debug!` when a table is built, `warn!` on
//! a duplicated spelling and `trace!` on a failed lookup.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod dimension;
mod quantity;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{related_dimensions, Dimensions};
pub use quantity::{Components, Quantity};
pub use unit::{convert, convert_in_place, convert_statically, parse_unit, StaticUnit, Unit, UnknownUnitError};
pub use vector::{AsPlanarVector, AsVector, Direction, PlanarDirection, PlanarVector, Vector};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
pub mod units;

pub use units::acceleration;
pub use units::angle;
pub use units::area;
pub use units::energy;
pub use units::force;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::mass_density;
pub use units::power;
pub use units::pressure;
pub use units::speed;
pub use units::temperature;
pub use units::time;
pub use units::volume;
