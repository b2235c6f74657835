use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Normalize a raw discount cell such as `"12.3%"` into `"12.30"`.
///
/// Every `%` is stripped before parsing. Returns `None` for empty, non-numeric
/// or non-finite input.
pub fn normalize_discount(raw: &str) -> Option<String> {
    let stripped = raw.replace('%', "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return None;
    }

    let value: f64 = stripped.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(two_places_half_up(value))
}

/// Round the shortest decimal form of `value` half away from zero, so `2.675`
/// gives `2.68` even though the binary value sits just below the midpoint.
fn two_places_half_up(value: f64) -> String {
    if let Ok(decimal) = Decimal::from_str(&value.to_string()) {
        let mut rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        if rounded.scale() == 2 {
            return rounded.to_string();
        }
    }
    // Beyond Decimal's precision there are no fraction digits left to round
    format!("{:.2}", value)
}

/// Normalized discount, or an empty cell when the input is malformed
pub fn format_discount(raw: &str) -> String {
    normalize_discount(raw).unwrap_or_default()
}
