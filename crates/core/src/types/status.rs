//! Cart actions and sort keys read from page attributes.

use serde::{Deserialize, Serialize};

/// A quantity mutation requested by a cart form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartAction {
    /// Add the submitted quantity to the line.
    Add,
    /// Increase the quantity by one.
    Inc,
    /// Decrease the quantity by one.
    Dec,
    /// Replace the quantity with the submitted one.
    Set,
    /// Drop the line regardless of quantity.
    Remove,
}

impl std::fmt::Display for CartAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Inc => write!(f, "inc"),
            Self::Dec => write!(f, "dec"),
            Self::Set => write!(f, "set"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

impl std::str::FromStr for CartAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "inc" => Ok(Self::Inc),
            "dec" => Ok(Self::Dec),
            "set" => Ok(Self::Set),
            "remove" => Ok(Self::Remove),
            _ => Err(format!("invalid cart action: {s}")),
        }
    }
}

/// Ordering applied to the rendered cart table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Case-insensitive product name, ascending.
    #[default]
    Name,
    /// Unit price, ascending.
    Price,
}

impl SortKey {
    /// Read a sort key from a trigger attribute.
    ///
    /// Anything other than `price` sorts by name.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("price") => Self::Price,
            _ => Self::Name,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Price => write!(f, "price"),
        }
    }
}
