//! # BoxKit Core
//!
//! Core types and utilities for BoxKit.
//! Provides the 2D geometry value types, validated box configuration,
//! unit conversion, and the shared error types used by the notching
//! pipeline.
//!
//! All internal computation is in millimeters.

pub mod config;
pub mod error;
pub mod geometry;
pub mod units;

pub use config::BoxConfig;
pub use error::{Error, ParameterError, ParameterResult, Result};
pub use geometry::{Line, Point, Rect, Vector, EPSILON};
pub use units::MeasurementSystem;
