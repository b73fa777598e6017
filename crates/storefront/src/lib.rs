//! Local Cart Storefront library.
//!
//! Browser-local cart for the shop pages: the cart lives in one key-value
//! slot, cart forms mutate it, and a sortable table summarizes it. There is
//! no server round-trip; checkout happens elsewhere.
//!
//! # Architecture
//!
//! - [`store::CartStore`] - Loads, saves, and mutates the persisted cart
//! - [`view::CartView`] - Binds page events and renders the cart table
//! - [`storage::KeyValueStore`] - Port over the persistent slot
//! - [`surface::UiSurface`] - Port over the page document
//!
//! Everything is synchronous and single-threaded; each event is handled to
//! completion before the next.
//!
//! # Example
//!
//! ```
//! use local_cart_storefront::config::CartConfig;
//! use local_cart_storefront::storage::MemoryStore;
//! use local_cart_storefront::surface::{MemoryElement, MemorySurface, UiEvent};
//! use local_cart_storefront::view::CartView;
//!
//! let mut surface = MemorySurface::new().with_cart_table();
//! let form = surface.push(
//!     MemoryElement::new("form")
//!         .attr("data-cart-action", "add")
//!         .attr("data-product-id", "p1")
//!         .attr("data-product-name", "Widget")
//!         .attr("data-product-price", "10")
//!         .input("qty", "2"),
//! );
//! surface.push(MemoryElement::new("button").attr("data-sort", "price"));
//!
//! let storage = MemoryStore::new();
//! let mut view = CartView::with_storage(&storage, surface, CartConfig::default());
//! view.initialize();
//! view.dispatch(&form, UiEvent::Submit);
//! view.render(Default::default());
//!
//! assert_eq!(view.surface().text_by_id("local-cart-total"), "20.00 lei");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod storage;
pub mod store;
pub mod surface;
pub mod view;

pub use config::CartConfig;
pub use error::{CartError, StorageError};
pub use store::CartStore;
pub use view::{CartSummary, CartView};
