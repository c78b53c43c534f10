//! Property-based tests for money arithmetic and ordering.
//!
//! - Additive inverse and subtraction identities
//! - Currency preservation
//! - Truncation toward zero for scale and divide
//! - Total equality, currency-guarded ordering
#![allow(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

use std::cmp::Ordering;

use proptest::prelude::*;

use super::{Currency, Money};
use crate::error::MoneyError;

/// Strategy to generate amounts well inside the i64 range (±10,000,000,000.00).
fn cents() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to pick one of a few currency tokens.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::DOLLAR),
        Just(Currency::EURO),
        Just(Currency::from("IDR")),
    ]
}

fn money() -> impl Strategy<Value = Money> {
    (cents(), currency()).prop_map(|(amount, currency)| Money::new(amount, currency))
}

fn dollars() -> impl Strategy<Value = Money> {
    cents().prop_map(Money::from_cents)
}

/// Strategy to generate scalar factors (-100.0 to 100.0).
fn factor() -> impl Strategy<Value = f64> {
    -100.0f64..100.0f64
}

/// Asserts `result` is `exact` with its fractional part dropped.
fn assert_truncated(result: i64, exact: f64) -> Result<(), TestCaseError> {
    let result_f = result as f64;
    prop_assert!(
        result_f.abs() <= exact.abs(),
        "{} rounded away from zero ({})",
        result,
        exact
    );
    prop_assert!(
        exact.abs() - result_f.abs() < 1.0,
        "{} dropped more than the fraction of {}",
        result,
        exact
    );
    if result != 0 {
        prop_assert_eq!(result.signum() as f64, exact.signum());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Adding the negation yields zero in the original currency.
    #[test]
    fn prop_additive_inverse(a in money()) {
        let sum = a.checked_add(&a.negate()).unwrap();
        prop_assert_eq!(sum.amount(), 0);
        prop_assert_eq!(sum.currency(), a.currency());
    }

    /// `a - b == -b + a` for the same currency.
    #[test]
    fn prop_subtraction_is_negated_addition(a in dollars(), b in dollars()) {
        let left = (&a - &b).unwrap();
        let right = (-&b + a.clone()).unwrap();
        prop_assert_eq!(left, right);
    }

    /// Addition is commutative.
    #[test]
    fn prop_addition_commutes(a in dollars(), b in dollars()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    /// Results keep the left operand's currency.
    #[test]
    fn prop_results_keep_currency(
        a in cents(),
        b in cents(),
        currency in currency(),
        k in factor(),
    ) {
        let a = Money::new(a, currency.clone());
        let b = Money::new(b, currency.clone());
        let results = [
            (&a + &b).unwrap(),
            (&a - &b).unwrap(),
            -&a,
            a.absolute(),
            &a * k,
            (&a / 2.0).unwrap(),
        ];
        for result in &results {
            prop_assert_eq!(result.currency(), &currency);
        }
    }

    /// Scaling is deterministic and `k * a == a * k`.
    #[test]
    fn prop_scale_commutes(a in money(), k in factor()) {
        prop_assert_eq!(a.scale(k), a.scale(k));
        prop_assert_eq!(&a * k, k * &a);
    }

    /// Scaling truncates toward zero for every sign combination.
    #[test]
    fn prop_scale_truncates_toward_zero(a in cents(), k in factor()) {
        let result = Money::from_cents(a).scale(k).amount();
        assert_truncated(result, a as f64 * k)?;
    }

    /// Division truncates toward zero for every non-zero divisor.
    #[test]
    fn prop_divide_truncates_toward_zero(
        a in cents(),
        d in factor().prop_filter("non-zero divisor", |d| d.abs() > 1e-6),
    ) {
        let result = Money::from_cents(a).divide(d).unwrap().amount();
        assert_truncated(result, a as f64 / d)?;
    }

    /// Absolute value is never negative and preserves magnitude.
    #[test]
    fn prop_absolute_is_non_negative(a in money()) {
        let abs = a.absolute();
        prop_assert!(!abs.is_negative());
        prop_assert_eq!(abs.amount(), a.amount().abs());
    }

    /// Equality is reflexive, symmetric and never fails across currencies.
    #[test]
    fn prop_equality_is_total(a in money(), b in money()) {
        prop_assert_eq!(&a, &a.clone());
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(
            a == b,
            a.amount() == b.amount() && a.currency() == b.currency()
        );
    }

    /// Equality is transitive.
    #[test]
    fn prop_equality_is_transitive(a in money()) {
        let b = Money::new(a.amount(), a.currency().clone());
        let c = b.clone();
        prop_assert!(a == b && b == c);
        prop_assert_eq!(a, c);
    }

    /// Within one currency, ordering follows the amount and is antisymmetric.
    #[test]
    fn prop_ordering_is_strict_within_currency(a in dollars(), b in dollars()) {
        let forward = a.compare(&b).unwrap();
        let backward = b.compare(&a).unwrap();
        prop_assert_eq!(forward, a.amount().cmp(&b.amount()));
        prop_assert_eq!(forward, backward.reverse());
        prop_assert_eq!(forward == Ordering::Equal, a == b);
    }

    /// Ordering across currencies always fails loudly.
    #[test]
    fn prop_ordering_rejects_mixed_currencies(a in cents(), b in cents()) {
        let dollars = Money::from_cents(a);
        let euros = Money::new(b, Currency::EURO);
        prop_assert_eq!(
            dollars.compare(&euros),
            Err(MoneyError::CurrencyMismatch {
                expected: Currency::DOLLAR,
                actual: Currency::EURO,
            })
        );
    }

    /// Truthiness is exactly "non-zero".
    #[test]
    fn prop_truthiness(a in money()) {
        prop_assert_eq!(a.is_truthy(), a.amount() != 0);
    }
}
