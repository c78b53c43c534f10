//! Money type with integer-cents precision and currency.
//!
//! Amounts are whole minor units. Every operation returns a new value and
//! refuses to combine or order amounts in different currencies.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Currency;
use crate::error::{MoneyError, MoneyResult};
use crate::validation::{Operand, validate_currency, validate_money};

/// Represents a monetary amount with currency.
///
/// `Money` deliberately has no `PartialOrd`: ordering across currencies is an
/// error, so use [`Money::compare`] instead of the comparison operators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Money {
    /// The amount in the smallest currency unit (e.g., cents).
    amount: i64,
    /// Currency token (e.g., "$", "€").
    currency: Currency,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(amount: i64, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates an amount in the default currency (`"$"`).
    #[must_use]
    pub const fn from_cents(amount: i64) -> Self {
        Self {
            amount,
            currency: Currency::DOLLAR,
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::new(0, currency)
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency token.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Returns true for any non-zero amount, positive or negative.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        self.amount != 0
    }

    fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
        }
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the currencies differ and
    /// `AmountOverflow` if the sum does not fit in an `i64`.
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        validate_currency(other, &self.currency)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::AmountOverflow { operation: "add" })
    }

    /// Subtracts `other` from `self`; both must share a currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the currencies differ and
    /// `AmountOverflow` if the difference does not fit in an `i64`.
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        validate_currency(other, &self.currency)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::AmountOverflow {
                operation: "subtract",
            })
    }

    /// Adds an operand of unknown type.
    ///
    /// The operand is checked for type before currency, so a non-money
    /// operand always yields `TypeMismatch`.
    pub fn try_add<T: Operand + ?Sized>(&self, other: &T) -> MoneyResult<Self> {
        let other = validate_money(other, &self.currency)?;
        self.checked_add(other)
    }

    /// Subtracts an operand of unknown type. See [`Money::try_add`].
    pub fn try_subtract<T: Operand + ?Sized>(&self, other: &T) -> MoneyResult<Self> {
        let other = validate_money(other, &self.currency)?;
        self.checked_sub(other)
    }

    /// Returns the amount with its sign flipped.
    ///
    /// `i64::MIN` saturates to `i64::MAX`.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_amount(self.amount.saturating_neg())
    }

    /// Returns the absolute amount. `i64::MIN` saturates to `i64::MAX`.
    #[must_use]
    pub fn absolute(&self) -> Self {
        self.with_amount(self.amount.saturating_abs())
    }

    /// Multiplies the amount by `factor`, truncating toward zero.
    ///
    /// The amount is widened to `f64` first. Results beyond the `i64` range
    /// saturate and a NaN product becomes zero.
    #[must_use]
    #[allow(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation
    )]
    pub fn scale(&self, factor: f64) -> Self {
        self.with_amount((self.amount as f64 * factor) as i64)
    }

    /// Divides the amount by `divisor`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `divisor` is zero (either sign).
    #[allow(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation
    )]
    pub fn divide(&self, divisor: f64) -> MoneyResult<Self> {
        if divisor == 0.0 {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(self.with_amount((self.amount as f64 / divisor) as i64))
    }

    /// Orders two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        validate_currency(other, &self.currency)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Orders against an operand of unknown type. See [`Money::try_add`].
    pub fn try_compare<T: Operand + ?Sized>(&self, other: &T) -> MoneyResult<Ordering> {
        let other = validate_money(other, &self.currency)?;
        self.compare(other)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self::from_cents(amount)
    }
}

impl fmt::Display for Money {
    /// Formats as `{units}.{cents}{currency}`, e.g. `-5.00$` or `0.50€`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let cents = self.amount.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:02}{}",
            cents / 100,
            cents % 100,
            self.currency
        )
    }
}
