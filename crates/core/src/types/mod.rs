//! Core types for the local cart.
//!
//! This module provides type-safe wrappers for cart concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod status;

pub use cart::{Applied, Cart, CartInput, CartLine};
pub use id::{LineId, LineIdError};
pub use price::{DISPLAY_SCALE, coerce_price, coerce_quantity, format_amount};
pub use status::{CartAction, SortKey};
