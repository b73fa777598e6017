//! Numeric coercion and money formatting.
//!
//! Form attributes arrive as loose strings. Prices follow float-prefix
//! parsing (`"12.5 lei"` is `12.5`) and quantities follow integer-prefix
//! parsing (`"3 pcs"` is `3`). Nothing is rejected; unparsable input falls
//! back to a default.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for every amount.
pub const DISPLAY_SCALE: u32 = 2;

/// Coerce a raw price attribute to a non-negative decimal.
///
/// Missing, unparsable and negative values become zero.
///
/// ```
/// use local_cart_core::coerce_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coerce_price(Some("19.99")), Decimal::new(1999, 2));
/// assert_eq!(coerce_price(Some(" 5abc")), Decimal::from(5));
/// assert_eq!(coerce_price(Some("abc")), Decimal::ZERO);
/// assert_eq!(coerce_price(None), Decimal::ZERO);
/// ```
#[must_use]
pub fn coerce_price(raw: Option<&str>) -> Decimal {
    raw.and_then(parse_decimal_prefix)
        .map_or(Decimal::ZERO, |price| price.max(Decimal::ZERO))
}

/// Coerce a raw quantity field to a positive integer.
///
/// Missing fields, unparsable values and anything `<= 0` become `1`.
///
/// ```
/// use local_cart_core::coerce_quantity;
///
/// assert_eq!(coerce_quantity(Some("3")), 3);
/// assert_eq!(coerce_quantity(Some("0")), 1);
/// assert_eq!(coerce_quantity(Some("")), 1);
/// assert_eq!(coerce_quantity(None), 1);
/// ```
#[must_use]
pub fn coerce_quantity(raw: Option<&str>) -> i64 {
    match raw.and_then(parse_integer_prefix) {
        Some(qty) if qty > 0 => qty,
        _ => 1,
    }
}

/// Format an amount with two decimals and a unit suffix, e.g. `"11.00 lei"`.
#[must_use]
pub fn format_amount(amount: Decimal, suffix: &str) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if suffix.is_empty() {
        format!("{rounded:.2}")
    } else {
        format!("{rounded:.2} {suffix}")
    }
}

/// Split off an optional leading sign, returning `(negative, rest)`.
fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.get(..end).unwrap_or("")
}

/// Parse the longest integer prefix of `s`, saturating on overflow.
fn parse_integer_prefix(s: &str) -> Option<i64> {
    let (negative, rest) = split_sign(s.trim_start());
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the longest decimal prefix of `s`, including an optional exponent.
fn parse_decimal_prefix(s: &str) -> Option<Decimal> {
    let (negative, rest) = split_sign(s.trim_start());

    let int_part = leading_digits(rest);
    let after_int = rest.get(int_part.len()..).unwrap_or("");
    let frac_part = after_int.strip_prefix('.').map_or("", leading_digits);
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut literal = String::with_capacity(rest.len() + 2);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }

    let consumed = int_part.len() + usize::from(after_int.starts_with('.')) + frac_part.len();
    let tail = rest.get(consumed..).unwrap_or("");
    if let Some(exponent) = exponent_prefix(tail) {
        literal.push('e');
        literal.push_str(exponent);
        return Decimal::from_scientific(&literal).ok();
    }

    Decimal::from_str(&literal).ok()
}

/// Return the signed exponent digits following an `e`/`E`, if well-formed.
fn exponent_prefix(tail: &str) -> Option<&str> {
    let body = tail.strip_prefix(['e', 'E'])?;
    let sign_len = usize::from(body.starts_with(['+', '-']));
    let digits = leading_digits(body.get(sign_len..)?);
    if digits.is_empty() {
        return None;
    }
    body.get(..sign_len + digits.len())
}
