//! Money and currency types.

pub mod currency;
pub mod money;
mod ops;

#[cfg(test)]
mod money_props;

pub use currency::Currency;
pub use money::Money;
