//! Strongly typed physical quantities with compile-time dimensional analysis.
//!
//! `physq` is the user-facing crate in this workspace. It re-exports the full API from `physq-core` (unit
//! enumerations, quantity types and the identities between them) and adds [`config`], which loads per-dimension
//! display preferences from TOML.
//!
//! Every quantity stores its value in the standard unit of its dimension; units only matter when a value enters or
//! leaves the program.
//!
//! # Quick start
//!
//! Convert between units:
//!
//! ```rust
//! use physq::length::{Length, LengthUnit};
//!
//! let marathon = Length::new(26.2188, LengthUnit::Mile);
//! assert!((marathon.value_in(LengthUnit::Kilometre) - 42.195).abs() < 1e-3);
//! ```
//!
//! Combine quantities through physical identities:
//!
//! ```rust
//! use physq::length::{Length, LengthUnit, Position};
//! use physq::Direction;
//!
//! let p: Position = Length::new(7.0, LengthUnit::Metre) * Direction::new(2.0, -3.0, 6.0);
//! assert_eq!(p, Position::new([2.0, -3.0, 6.0], LengthUnit::Metre));
//! ```
//!
//! Render quantities in configured units:
//!
//! ```rust
//! use physq::config::DisplayPreferences;
//! use physq::speed::Speed;
//!
//! let prefs = DisplayPreferences::from_toml_str("precision = 1\n[units]\nspeed = \"km/hr\"\n")?;
//! assert_eq!(prefs.format(&Speed::standard(10.0)), "36.0 km/hr");
//! # Ok::<(), physq::ConfigError>(())
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use physq::length::Length;
//! use physq::time::Time;
//!
//! let _ = Length::standard(1.0) + Time::standard(1.0); // cannot add different dimensions
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support in `physq-core`; quantities serialize as their standard-unit value.
//!
//! # Panics and errors
//!
//! Conversions and arithmetic never return `Result`; they follow IEEE-754 behavior. Loading display preferences
//! returns [`ConfigError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![forbid(unsafe_code)]

pub use physq_core::*;

pub mod config;

pub use config::{ConfigError, DisplayPreferences};
