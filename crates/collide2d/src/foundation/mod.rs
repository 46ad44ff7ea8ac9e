//! Foundation module - Core utilities and types
//!
//! Provides the math primitives the collision kernel is built on:
//! - 2D vector aliases over nalgebra
//! - Axis-aligned rectangles
//! - Rigid/scaling 2D transforms
//! - 2D rays and small geometric helpers

pub mod math;
