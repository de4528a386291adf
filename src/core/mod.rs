//! Core foundation layer.
//!
//! Angle math and the data types shared by every other module. No internal
//! dependencies.

pub mod math;
pub mod types;
