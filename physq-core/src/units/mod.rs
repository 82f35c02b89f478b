//! Predefined unit modules grouped by dimension.
//!
//! Each module declares one unit enumeration (with its marker types) and the quantity types stored in that
//! dimension's standard unit, plus the identities that produce those types from quantities declared earlier.
//!
//! ## Modules
//!
//! - [`length`]: length units; `Length`, `Position`, `Displacement` and their planar forms.
//! - [`area`], [`volume`]: square and cubic lengths.
//! - [`time`], [`frequency`]: the second and its reciprocal.
//! - [`speed`]: `Speed`, `Velocity`, `PlanarVelocity`.
//! - [`acceleration`]: `ScalarAcceleration`, `Acceleration`, `PlanarAcceleration`.
//! - [`angle`]: plane angles and the angle between two vectors.
//! - [`mass`], [`mass_density`].
//! - [`force`]: `ScalarForce`, `Force`, `PlanarForce`.
//! - [`energy`], [`power`], [`pressure`].
//! - [`temperature`]: absolute `Temperature` and `TemperatureDifference`.

pub mod length;
pub mod area;
pub mod volume;
pub mod time;
pub mod frequency;
pub mod speed;
pub mod acceleration;
pub mod angle;
pub mod mass;
pub mod mass_density;
pub mod force;
pub mod energy;
pub mod power;
pub mod pressure;
pub mod temperature;
