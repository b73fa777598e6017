//! Page bindings and cart table rendering.
//!
//! [`CartView`] connects a [`UiSurface`] to a [`CartStore`]. It keeps no cart
//! state of its own: submits go straight to [`CartStore::mutate`] and every
//! render reads the store again. The only thing it remembers is which
//! elements it bound, so events forwarded by the host can be routed.
//!
//! # Flow
//!
//! ```text
//! initialize() --> bind_forms()      form submit --> dispatch() --> mutate()
//!              \-> bind sort triggers  sort click --> dispatch() --> render(key)
//!              \-> render(Name)
//! ```

mod summary;

use tracing::instrument;

use local_cart_core::{CartAction, CartInput, SortKey, coerce_price, coerce_quantity};

use crate::config::CartConfig;
use crate::storage::KeyValueStore;
use crate::store::CartStore;
use crate::surface::{FORM_TAG, QTY_INPUT, UiEvent, UiSurface, attributes};

pub use summary::{CartRowsTemplate, CartSummary, RowView};

/// What a bound element does when its event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    /// Cart form: mutate on submit.
    Form,
    /// Sort control: re-render on click with its current key.
    Sort,
}

impl Trigger {
    const fn event(self) -> UiEvent {
        match self {
            Self::Form => UiEvent::Submit,
            Self::Sort => UiEvent::Click,
        }
    }
}

#[derive(Debug, Clone)]
struct Binding<E> {
    element: E,
    trigger: Trigger,
}

/// Event bindings and rendering over a page surface.
pub struct CartView<S, U: UiSurface> {
    store: CartStore<S>,
    surface: U,
    config: CartConfig,
    bindings: Vec<Binding<U::Element>>,
}

impl<S: KeyValueStore, U: UiSurface> CartView<S, U> {
    /// Create a view over `surface` backed by `store`.
    pub const fn new(store: CartStore<S>, surface: U, config: CartConfig) -> Self {
        Self {
            store,
            surface,
            config,
            bindings: Vec::new(),
        }
    }

    /// Create a view and a store over `storage`, both using `config`.
    pub fn with_storage(storage: S, surface: U, config: CartConfig) -> Self {
        let store = CartStore::from_config(storage, &config);
        Self::new(store, surface, config)
    }

    /// The backing cart store.
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// The page surface.
    pub const fn surface(&self) -> &U {
        &self.surface
    }

    /// Mutable access to the page surface, e.g. to simulate user input.
    pub const fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    /// The active configuration.
    pub const fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Release the store and surface.
    pub fn into_parts(self) -> (CartStore<S>, U) {
        (self.store, self.surface)
    }

    /// Bind forms and sort triggers, then render once if any sort trigger
    /// exists.
    ///
    /// A page without sort triggers has no cart table to fill, so nothing is
    /// rendered.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        self.bind_forms();

        let triggers = self.surface.elements_with_attribute(None, attributes::SORT);
        if triggers.is_empty() {
            tracing::debug!("No sort triggers on page, skipping initial render");
            return;
        }
        for trigger in triggers {
            self.bind(trigger, Trigger::Sort);
        }
        self.render(SortKey::default());
    }

    /// Register a submit listener on every cart form.
    ///
    /// Binding is idempotent per element. The form's own submission is left
    /// alone; the cart update happens alongside it.
    #[instrument(skip(self))]
    pub fn bind_forms(&mut self) {
        let forms = self
            .surface
            .elements_with_attribute(Some(FORM_TAG), attributes::CART_ACTION);
        tracing::debug!(forms = forms.len(), "Binding cart forms");
        for form in forms {
            self.bind(form, Trigger::Form);
        }
    }

    fn bind(&mut self, element: U::Element, trigger: Trigger) {
        if self
            .bindings
            .iter()
            .any(|b| b.element == element && b.trigger == trigger)
        {
            return;
        }
        self.surface.listen(&element, trigger.event());
        self.bindings.push(Binding { element, trigger });
    }

    /// Handle an event the host observed on `element`.
    ///
    /// Events on elements the view did not bind, or of a kind it did not
    /// listen for, are ignored.
    pub fn dispatch(&mut self, element: &U::Element, event: UiEvent) {
        let trigger = self
            .bindings
            .iter()
            .find(|b| &b.element == element && b.trigger.event() == event)
            .map(|b| b.trigger);

        match trigger {
            Some(Trigger::Form) => self.submit(element),
            Some(Trigger::Sort) => {
                let key = self.surface.attribute(element, attributes::SORT);
                self.render(SortKey::from_attribute(key.as_deref()));
            }
            None => tracing::debug!(?element, %event, "Ignoring unbound event"),
        }
    }

    /// Read a cart form into an action and its payload.
    ///
    /// The quantity comes from the form's `qty` input and defaults to 1 when
    /// the input is missing or not a positive integer. The price defaults to
    /// zero. Returns `None` if the form names no known action.
    pub fn extract_submission(&self, form: &U::Element) -> Option<(CartAction, CartInput)> {
        let raw_action = self.surface.attribute(form, attributes::CART_ACTION);
        let action = match raw_action.as_deref().map(str::parse::<CartAction>) {
            Some(Ok(action)) => action,
            Some(Err(e)) => {
                tracing::debug!(error = %e, "Ignoring cart form");
                return None;
            }
            None => {
                tracing::debug!("Ignoring form without a cart action");
                return None;
            }
        };

        let price = self.surface.attribute(form, attributes::PRODUCT_PRICE);
        let qty = self.surface.input_value(form, QTY_INPUT);
        let input = CartInput {
            id: self.surface.attribute(form, attributes::PRODUCT_ID),
            name: self.surface.attribute(form, attributes::PRODUCT_NAME),
            price: Some(coerce_price(price.as_deref())),
            qty: coerce_quantity(qty.as_deref()),
        };
        Some((action, input))
    }

    fn submit(&self, form: &U::Element) {
        if let Some((action, input)) = self.extract_submission(form) {
            self.store.mutate(action, &input);
        }
    }

    /// Write the cart table, total, and item count.
    ///
    /// Does nothing if the table body is missing. The total and count are
    /// each skipped if their element is missing.
    #[instrument(skip(self))]
    pub fn render(&mut self, sort_key: SortKey) {
        let Some(body) = self.surface.element_by_id(&self.config.body_id) else {
            tracing::debug!(body_id = %self.config.body_id, "No cart table on page");
            return;
        };

        let cart = self.store.load();
        let summary = CartSummary::build(&cart, sort_key, &self.config);
        match summary.render_rows() {
            Ok(html) => self.surface.set_inner_html(&body, &html),
            Err(e) => tracing::error!(error = %e, "Failed to render cart rows"),
        }

        if let Some(total) = self.surface.element_by_id(&self.config.total_id) {
            self.surface.set_text(&total, &summary.total);
        }
        if let Some(count) = self.surface.element_by_id(&self.config.count_id) {
            self.surface.set_text(&count, &summary.count);
        }
    }
}
