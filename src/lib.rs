//! scale-anchor: scale constraints for 2-D plot axes.
//!
//! Axes grouped under a constraint keep a fixed ratio of pixels per data
//! unit. Enforcement recomputes each axis's visible range or on-screen
//! domain so the ratio holds, disturbing the requested view as little as
//! possible.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ConstraintEnforcer, ConstraintGroup, EnforcerConfig, enforce_axis_constraints};
pub use error::{ConstraintError, ConstraintResult};
