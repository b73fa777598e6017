//! Cart lines, the cart map, and the quantity reducer.
//!
//! The cart is serialized as a JSON object keyed by line id:
//!
//! ```json
//! { "p1": { "id": "p1", "name": "Widget", "price": 10, "qty": 2 } }
//! ```
//!
//! Every line held by a [`Cart`] has `qty > 0`. Mutations that would leave a
//! line at zero or below remove it instead, and lines with a non-positive
//! quantity are dropped when a cart is deserialized.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::id::LineId;
use super::status::CartAction;

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier, also the cart key.
    pub id: LineId,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Unit price, stored as an exact JSON number.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Quantity; positive while the line is in a cart.
    pub qty: i64,
}

impl CartLine {
    /// Create a line with the given quantity.
    #[must_use]
    pub const fn new(id: LineId, name: String, price: Decimal, qty: i64) -> Self {
        Self {
            id,
            name,
            price,
            qty,
        }
    }

    /// Price multiplied by quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::from(self.qty))
            .unwrap_or(Decimal::MAX)
    }
}

/// Payload of a cart mutation as read from a form.
///
/// Missing values are defaulted by [`Cart::apply`]: the name to an empty
/// string, the price to zero. `qty` is only read by `add` and `set`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartInput {
    /// Raw product id; missing or empty ids make the mutation a no-op.
    pub id: Option<String>,
    /// Product name used when the line is new.
    pub name: Option<String>,
    /// Unit price used when the line is new.
    pub price: Option<Decimal>,
    /// Quantity for `add` and `set`.
    pub qty: i64,
}

impl CartInput {
    /// Create an input carrying only an id.
    #[must_use]
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the product name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the unit price.
    #[must_use]
    pub const fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the quantity.
    #[must_use]
    pub const fn qty(mut self, qty: i64) -> Self {
        self.qty = qty;
        self
    }
}

/// Outcome of applying an action to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The input id was missing or empty; nothing was touched.
    Ignored,
    /// The line was stored with this positive quantity.
    Stored(i64),
    /// The line is no longer in the cart.
    Removed,
}

/// A cart keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: BTreeMap<LineId, CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: BTreeMap::new(),
        }
    }

    /// Returns `true` if the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Look up a line by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.get(id)
    }

    /// Iterate over lines in id order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Consume the cart, yielding its lines in id order.
    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines.into_values().collect()
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .values()
            .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.subtotal()))
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.lines
            .values()
            .fold(0_i64, |acc, line| acc.saturating_add(line.qty))
    }

    /// Insert a line, replacing any line with the same id.
    ///
    /// Lines with `qty <= 0` are not stored; any existing line with that id
    /// is removed instead.
    pub fn insert(&mut self, line: CartLine) {
        if line.qty <= 0 {
            self.lines.remove(&line.id);
        } else {
            self.lines.insert(line.id.clone(), line);
        }
    }

    /// Remove a line, returning it if it was present.
    pub fn remove(&mut self, id: &LineId) -> Option<CartLine> {
        self.lines.remove(id)
    }

    /// Apply a quantity mutation.
    ///
    /// A line missing from the cart starts at `qty = 0` with the input's name
    /// and price; an existing line keeps its stored name and price. `remove`
    /// drops the line without looking at quantities. Any other result at or
    /// below zero removes the line.
    pub fn apply(&mut self, action: CartAction, input: &CartInput) -> Applied {
        let Some(id) = LineId::coerce(input.id.as_deref()) else {
            return Applied::Ignored;
        };

        if action == CartAction::Remove {
            self.lines.remove(&id);
            return Applied::Removed;
        }

        let mut line = self.lines.remove(&id).unwrap_or_else(|| CartLine {
            name: input.name.clone().unwrap_or_default(),
            price: input.price.unwrap_or(Decimal::ZERO),
            qty: 0,
            id,
        });

        line.qty = match action {
            CartAction::Add => line.qty.saturating_add(input.qty),
            CartAction::Inc => line.qty.saturating_add(1),
            CartAction::Dec => line.qty.saturating_sub(1),
            CartAction::Set => input.qty,
            CartAction::Remove => 0,
        };

        if line.qty <= 0 {
            return Applied::Removed;
        }
        let qty = line.qty;
        self.lines.insert(line.id.clone(), line);
        Applied::Stored(qty)
    }
}

/// Builds a cart from lines, keeping the last line seen per id and skipping
/// lines with `qty <= 0`.
impl FromIterator<CartLine> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        let mut cart = Self::new();
        for line in iter {
            if line.qty > 0 {
                cart.lines.insert(line.id.clone(), line);
            }
        }
        cart
    }
}

// Stored keys are not trusted: lines are re-keyed by their own id.
impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = BTreeMap::<String, CartLine>::deserialize(deserializer)?;
        Ok(stored.into_values().collect())
    }
}
