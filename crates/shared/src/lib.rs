//! Shared errors and configuration for Moneta.
//!
//! This crate provides the pieces every other crate agrees on:
//! - The money error taxonomy
//! - Configuration management and rounding modes

pub mod config;
pub mod error;

pub use self::config::{MoneyConfig, Rounding};
pub use error::{ConversionFault, MoneyError, MoneyResult};
