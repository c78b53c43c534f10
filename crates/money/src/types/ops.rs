//! Operator impls for `Money`.
//!
//! `+`, `-` and `/` can fail, so their output is `MoneyResult<Money>`.
//! Unary `-` and scalar `*` always succeed.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Money;
use crate::error::MoneyResult;

impl Add for Money {
    type Output = MoneyResult<Money>;

    fn add(self, rhs: Money) -> Self::Output {
        self.checked_add(&rhs)
    }
}

impl<'a> Add<&'a Money> for &'a Money {
    type Output = MoneyResult<Money>;

    fn add(self, rhs: &'a Money) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for Money {
    type Output = MoneyResult<Money>;

    fn sub(self, rhs: Money) -> Self::Output {
        self.checked_sub(&rhs)
    }
}

impl<'a> Sub<&'a Money> for &'a Money {
    type Output = MoneyResult<Money>;

    fn sub(self, rhs: &'a Money) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Mul<f64> for Money {
    type Output = Money;

    fn mul(self, factor: f64) -> Self::Output {
        self.scale(factor)
    }
}

impl Mul<f64> for &Money {
    type Output = Money;

    fn mul(self, factor: f64) -> Self::Output {
        self.scale(factor)
    }
}

impl Mul<Money> for f64 {
    type Output = Money;

    fn mul(self, money: Money) -> Self::Output {
        money.scale(self)
    }
}

impl Mul<&Money> for f64 {
    type Output = Money;

    fn mul(self, money: &Money) -> Self::Output {
        money.scale(self)
    }
}

impl Div<f64> for Money {
    type Output = MoneyResult<Money>;

    fn div(self, divisor: f64) -> Self::Output {
        self.divide(divisor)
    }
}

impl Div<f64> for &Money {
    type Output = MoneyResult<Money>;

    fn div(self, divisor: f64) -> Self::Output {
        self.divide(divisor)
    }
}
