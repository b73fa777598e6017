//! Integration tests for the browser-local cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p local-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `local_cart_store` - Persistence and mutation rules through `CartStore`
//! - `local_cart_view` - Page bindings and table rendering through `CartView`
//! - `local_cart_properties` - Property tests over arbitrary mutation sequences
//!
//! This library holds the page fixtures shared by those tests.

use local_cart_storefront::surface::{ElementRef, MemoryElement, MemorySurface};

/// A product form as the shop templates emit it.
#[must_use]
pub fn product_form(action: &str, id: &str, name: &str, price: &str) -> MemoryElement {
    MemoryElement::new("form")
        .attr("data-cart-action", action)
        .attr("data-product-id", id)
        .attr("data-product-name", name)
        .attr("data-product-price", price)
}

/// A cart page: table body, summaries, and one sort trigger per key.
#[derive(Debug)]
pub struct CartPage {
    pub surface: MemorySurface,
    pub sort_by_name: ElementRef,
    pub sort_by_price: ElementRef,
}

impl CartPage {
    /// Build a page with the cart table and both sort triggers.
    #[must_use]
    pub fn new() -> Self {
        let mut surface = MemorySurface::new().with_cart_table();
        let sort_by_name = surface.push(MemoryElement::new("button").attr("data-sort", "name"));
        let sort_by_price = surface.push(MemoryElement::new("button").attr("data-sort", "price"));
        Self {
            surface,
            sort_by_name,
            sort_by_price,
        }
    }
}

impl Default for CartPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of table rows in a rendered body fragment.
#[must_use]
pub fn row_count(html: &str) -> usize {
    html.matches("<tr").count()
}
