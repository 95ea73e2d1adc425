//! Utility module - shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] - per-request API error type
//! - [`money`] - decimal money arithmetic
//! - logging setup

pub mod error;
pub mod logger;
pub mod money;

pub use error::{AppError, AppResult};
