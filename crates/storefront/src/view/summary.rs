//! Sorted, formatted cart display data.

use askama::Template;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::Locale;
use tracing::warn;

use local_cart_core::{Cart, CartLine, SortKey, format_amount};

use crate::config::CartConfig;

/// One table row, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Line id, rendered as `data-line-id`
    pub id: String,
    /// Product name, escaped by the template
    pub name: String,
    /// Unit price with currency suffix
    pub price: String,
    /// Quantity
    pub qty: i64,
    /// Price times quantity with currency suffix
    pub subtotal: String,
}

/// Everything the cart table shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Rows in display order; empty for an empty cart
    pub rows: Vec<RowView>,
    /// Formatted total cost
    pub total: String,
    /// Item count with its unit label
    pub count: String,
    /// Placeholder text shown when there are no rows
    pub empty_message: String,
}

/// Table body fragment.
#[derive(Template)]
#[template(path = "cart/rows.html")]
pub struct CartRowsTemplate<'a> {
    pub rows: &'a [RowView],
    pub empty_message: &'a str,
}

impl CartSummary {
    /// Sort and format `cart` for display.
    ///
    /// Totals cover every line, so they do not depend on the sort key.
    #[must_use]
    pub fn build(cart: &Cart, sort_key: SortKey, config: &CartConfig) -> Self {
        let suffix = config.currency_suffix.as_str();
        let rows = sorted_lines(cart, sort_key, &config.collation_locale)
            .into_iter()
            .map(|line| RowView {
                id: line.id.to_string(),
                name: line.name.clone(),
                price: format_amount(line.price, suffix),
                qty: line.qty,
                subtotal: format_amount(line.subtotal(), suffix),
            })
            .collect();

        Self {
            rows,
            total: format_amount(cart.total(), suffix),
            count: config.format_count(cart.item_count()),
            empty_message: config.empty_message.clone(),
        }
    }

    /// Returns `true` if the placeholder row is shown instead of items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table body: one row per line, or the placeholder row.
    ///
    /// # Errors
    ///
    /// Returns `askama::Error` if the template fails to render.
    pub fn render_rows(&self) -> askama::Result<String> {
        CartRowsTemplate {
            rows: &self.rows,
            empty_message: &self.empty_message,
        }
        .render()
    }
}

/// Lines in display order.
///
/// Names compare with the locale's collation and fall back to the raw name as
/// tie-breaker; prices compare numerically. Both sorts are stable over id
/// order.
fn sorted_lines<'a>(cart: &'a Cart, sort_key: SortKey, locale: &str) -> Vec<&'a CartLine> {
    let mut lines: Vec<&CartLine> = cart.lines().collect();
    match sort_key {
        SortKey::Name => match name_collator(locale) {
            Some(collator) => lines.sort_by(|a, b| {
                collator
                    .compare(&a.name, &b.name)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            None => lines.sort_by(|a, b| a.name.cmp(&b.name)),
        },
        SortKey::Price => lines.sort_by(|a, b| a.price.cmp(&b.price)),
    }
    lines
}

/// Collator for `locale`, or the root collation if the tag does not parse.
fn name_collator(locale: &str) -> Option<CollatorBorrowed<'static>> {
    let parsed = locale.parse::<Locale>().unwrap_or_else(|e| {
        warn!(locale, error = %e, "Invalid collation locale, using root collation");
        Locale::UNKNOWN
    });
    match Collator::try_new(parsed.into(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(locale, error = %e, "Collation data unavailable, sorting by raw name");
            None
        }
    }
}
