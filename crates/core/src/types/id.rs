//! Product line identifiers.
//!
//! A cart is keyed by the product id coerced to a string. The only rule is
//! that the string is non-empty; everything else the page hands us is kept
//! verbatim so ids written by other scripts still match.

use core::borrow::Borrow;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`LineId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineIdError {
    /// The input string is empty.
    #[error("line id cannot be empty")]
    Empty,
}

/// Identifier of a product line within a cart.
///
/// ## Examples
///
/// ```
/// use local_cart_core::LineId;
///
/// assert!(LineId::parse("p1").is_ok());
/// assert!(LineId::parse(" 42 ").is_ok()); // kept verbatim
/// assert!(LineId::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    /// Parse a `LineId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`LineIdError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, LineIdError> {
        if s.is_empty() {
            return Err(LineIdError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Coerce an optional raw identifier, yielding `None` when it is missing
    /// or empty.
    #[must_use]
    pub fn coerce(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|s| Self::parse(s).ok())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `LineId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LineId {
    type Err = LineIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LineId {
    type Error = LineIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(LineIdError::Empty);
        }
        Ok(Self(s))
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> Self {
        id.0
    }
}

impl Borrow<str> for LineId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LineId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
