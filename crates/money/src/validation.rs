//! Operand validation for money operations.
//!
//! The typed API (`Money::checked_add`, `Money::compare`, ...) can only ever
//! receive `Money`, so only the currency check applies there. These helpers
//! also accept operands whose type is only known at runtime and report what
//! was actually passed.

use std::any::{Any, type_name};

use crate::error::{MoneyError, MoneyResult};
use crate::types::{Currency, Money};

/// A value whose concrete type is checked at runtime.
///
/// Implemented for every sized `'static` type and for the `dyn Any` trait
/// objects, so a `Money` behind `&dyn Any` or `Box<dyn Any>` is still found.
pub trait Operand {
    /// Returns the value as a type-erased reference.
    fn as_any(&self) -> &dyn Any;

    /// Returns the name of the value's static type.
    fn operand_type(&self) -> &'static str;
}

impl<T: Any> Operand for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn operand_type(&self) -> &'static str {
        type_name::<T>()
    }
}

impl Operand for dyn Any {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn operand_type(&self) -> &'static str {
        "dyn Any"
    }
}

impl Operand for dyn Any + Send {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn operand_type(&self) -> &'static str {
        "dyn Any + Send"
    }
}

impl Operand for dyn Any + Send + Sync {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn operand_type(&self) -> &'static str {
        "dyn Any + Send + Sync"
    }
}

/// Looks through a boxed trait object to the value it holds.
fn unbox(any: &dyn Any) -> &dyn Any {
    if let Some(inner) = any.downcast_ref::<Box<dyn Any>>() {
        return &**inner;
    }
    if let Some(inner) = any.downcast_ref::<Box<dyn Any + Send>>() {
        return &**inner;
    }
    if let Some(inner) = any.downcast_ref::<Box<dyn Any + Send + Sync>>() {
        return &**inner;
    }
    any
}

/// Checks that `value` is a `Money` and returns it.
///
/// # Errors
///
/// Returns `TypeMismatch` naming the expected and the actual type.
pub fn validate_type<T: Operand + ?Sized>(value: &T) -> MoneyResult<&Money> {
    unbox(value.as_any())
        .downcast_ref::<Money>()
        .ok_or_else(|| MoneyError::TypeMismatch {
            expected: type_name::<Money>(),
            actual: value.operand_type(),
        })
}

/// Checks that `money` is denominated in `expected`.
///
/// # Errors
///
/// Returns `CurrencyMismatch` if the currencies differ.
pub fn validate_currency(money: &Money, expected: &Currency) -> MoneyResult<()> {
    if money.currency() != expected {
        return Err(MoneyError::CurrencyMismatch {
            expected: expected.clone(),
            actual: money.currency().clone(),
        });
    }
    Ok(())
}

/// Checks type first, then currency.
///
/// A non-money operand always reports `TypeMismatch`, never a currency error.
///
/// # Errors
///
/// Returns `TypeMismatch` or `CurrencyMismatch`.
pub fn validate_money<'a, T: Operand + ?Sized>(
    value: &'a T,
    expected: &Currency,
) -> MoneyResult<&'a Money> {
    let money = validate_type(value)?;
    validate_currency(money, expected)?;
    Ok(money)
}
