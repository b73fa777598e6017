//! Headless in-memory document.
//!
//! A flat list of elements with attributes, named inputs, and writable
//! content. Enough of a page to drive the cart view in tests or to render a
//! cart table outside a browser.

use std::collections::BTreeMap;

use super::{UiEvent, UiSurface};

/// Handle to an element of a [`MemorySurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef(usize);

/// An element definition.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    tag: String,
    attributes: BTreeMap<String, String>,
    inputs: BTreeMap<String, String>,
    inner_html: String,
    text: String,
    listeners: Vec<UiEvent>,
}

impl MemoryElement {
    /// Create an element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Set the element id.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Add a named input with its current value.
    #[must_use]
    pub fn input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_string(), value.to_string());
        self
    }
}

/// An in-memory [`UiSurface`].
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    elements: Vec<MemoryElement>,
}

impl MemorySurface {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn push(&mut self, element: MemoryElement) -> ElementRef {
        self.elements.push(element);
        ElementRef(self.elements.len() - 1)
    }

    /// Add the three summary targets with their default ids.
    pub fn with_cart_table(mut self) -> Self {
        self.push(MemoryElement::new("tbody").id("local-cart-body"));
        self.push(MemoryElement::new("span").id("local-cart-total"));
        self.push(MemoryElement::new("span").id("local-cart-count"));
        self
    }

    /// Change the value of an input, as a user typing would.
    pub fn set_input(&mut self, form: ElementRef, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(form.0) {
            element.inputs.insert(name.to_string(), value.to_string());
        }
    }

    /// Current inner HTML of an element.
    #[must_use]
    pub fn inner_html(&self, element: ElementRef) -> &str {
        self.elements
            .get(element.0)
            .map_or("", |e| e.inner_html.as_str())
    }

    /// Current text content of an element.
    #[must_use]
    pub fn text(&self, element: ElementRef) -> &str {
        self.elements.get(element.0).map_or("", |e| e.text.as_str())
    }

    /// Inner HTML of the element with the given id.
    #[must_use]
    pub fn inner_html_by_id(&self, id: &str) -> &str {
        self.element_by_id(id).map_or("", |e| self.inner_html(e))
    }

    /// Text content of the element with the given id.
    #[must_use]
    pub fn text_by_id(&self, id: &str) -> &str {
        self.element_by_id(id).map_or("", |e| self.text(e))
    }

    /// Events registered on an element, in registration order.
    #[must_use]
    pub fn listeners(&self, element: ElementRef) -> &[UiEvent] {
        self.elements
            .get(element.0)
            .map(|e| e.listeners.as_slice())
            .unwrap_or_default()
    }
}

impl UiSurface for MemorySurface {
    type Element = ElementRef;

    fn elements_with_attribute(&self, tag: Option<&str>, attribute: &str) -> Vec<ElementRef> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| tag.is_none_or(|t| e.tag.eq_ignore_ascii_case(t)))
            .filter(|(_, e)| e.attributes.contains_key(attribute))
            .map(|(i, _)| ElementRef(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.elements
            .iter()
            .position(|e| e.attributes.get("id").is_some_and(|v| v == id))
            .map(ElementRef)
    }

    fn attribute(&self, element: &ElementRef, name: &str) -> Option<String> {
        self.elements.get(element.0)?.attributes.get(name).cloned()
    }

    fn input_value(&self, form: &ElementRef, name: &str) -> Option<String> {
        self.elements.get(form.0)?.inputs.get(name).cloned()
    }

    fn listen(&mut self, element: &ElementRef, event: UiEvent) {
        if let Some(e) = self.elements.get_mut(element.0) {
            e.listeners.push(event);
        }
    }

    fn set_inner_html(&mut self, element: &ElementRef, html: &str) {
        if let Some(e) = self.elements.get_mut(element.0) {
            e.inner_html = html.to_string();
        }
    }

    fn set_text(&mut self, element: &ElementRef, text: &str) {
        if let Some(e) = self.elements.get_mut(element.0) {
            e.text = text.to_string();
        }
    }
}
