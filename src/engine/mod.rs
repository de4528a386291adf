//! Crossing-detection engine.
//!
//! [`point::CardinalPoint`] holds the per-point state machine;
//! [`compass::CompassEngine`] owns the registry and fans each heading
//! transition out to every point.

pub mod compass;
pub mod point;

pub use compass::CompassEngine;
pub use point::CardinalPoint;
