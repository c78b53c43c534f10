//! Currency token attached to every money value.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A currency marker such as `"$"` or `"€"`.
///
/// The token is opaque: any string is accepted, and two currencies are the
/// same only when their tokens are equal byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(Cow<'static, str>);

impl Currency {
    /// The dollar sign, used when no currency is given.
    pub const DOLLAR: Self = Self(Cow::Borrowed("$"));

    /// The euro sign.
    pub const EURO: Self = Self(Cow::Borrowed("€"));

    /// Creates a currency from any string token.
    #[must_use]
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::DOLLAR
    }
}

impl From<&'static str> for Currency {
    fn from(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }
}

impl From<String> for Currency {
    fn from(token: String) -> Self {
        Self(Cow::Owned(token))
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
