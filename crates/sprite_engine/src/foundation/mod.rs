//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and affine helpers
//! - Cartesian/polar point conversion
//! - Shared randomization helpers
//! - Logging utilities

pub mod math;
pub mod polar;
pub mod random;
pub mod logging;
