//! Page surface the cart view reads from and writes to.
//!
//! The view never touches a DOM directly. A host implements [`UiSurface`]
//! over whatever document it has, registers native listeners when the view
//! calls [`UiSurface::listen`], and forwards the events back through
//! [`CartView::dispatch`](crate::view::CartView::dispatch).
//!
//! # Page contract
//!
//! - `form[data-cart-action]` with `data-product-id`, `data-product-name`,
//!   `data-product-price` and an optional input named `qty`
//! - `#local-cart-body`, `#local-cart-total`, `#local-cart-count`
//! - Any number of `[data-sort]` triggers

mod memory;

use std::fmt;

pub use memory::{ElementRef, MemoryElement, MemorySurface};

/// Attribute names read from the page.
pub mod attributes {
    /// Marks a cart form and names its action.
    pub const CART_ACTION: &str = "data-cart-action";
    /// Product identifier on a cart form.
    pub const PRODUCT_ID: &str = "data-product-id";
    /// Product display name on a cart form.
    pub const PRODUCT_NAME: &str = "data-product-name";
    /// Unit price on a cart form.
    pub const PRODUCT_PRICE: &str = "data-product-price";
    /// Marks a sort trigger and names its key.
    pub const SORT: &str = "data-sort";
}

/// Tag of cart forms.
pub const FORM_TAG: &str = "form";

/// Name of the optional quantity input inside a cart form.
pub const QTY_INPUT: &str = "qty";

/// Events the view listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEvent {
    /// A form was submitted. Its default action is never prevented.
    Submit,
    /// An element was clicked.
    Click,
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit => write!(f, "submit"),
            Self::Click => write!(f, "click"),
        }
    }
}

/// A document the cart view can query and update.
pub trait UiSurface {
    /// Handle to an element of the document.
    type Element: Clone + PartialEq + fmt::Debug;

    /// All elements carrying `attribute`, optionally restricted to `tag`, in
    /// document order.
    fn elements_with_attribute(&self, tag: Option<&str>, attribute: &str) -> Vec<Self::Element>;

    /// The element with the given id, if present.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Value of an attribute on `element`.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Current value of the input named `name` inside `form`, or `None` if
    /// the form has no such input.
    fn input_value(&self, form: &Self::Element, name: &str) -> Option<String>;

    /// Ask the host to forward `event` on `element` to the view.
    fn listen(&mut self, element: &Self::Element, event: UiEvent);

    /// Replace the children of `element` with `html`.
    fn set_inner_html(&mut self, element: &Self::Element, html: &str);

    /// Replace the text content of `element`.
    fn set_text(&mut self, element: &Self::Element, text: &str);
}
