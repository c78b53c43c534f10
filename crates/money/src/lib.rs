//! Integer-cents money with currency safety checks.
//!
//! This crate provides:
//! - The `Money` value type and its `Currency` token
//! - Arithmetic and ordering that refuse to mix currencies
//! - Standalone validation helpers for dynamically typed operands
//! - Error types shared by every operation
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, Money};
pub use validation::{Operand, validate_currency, validate_money, validate_type};
