//! Field-level cleaning and numeric normalization
//!
//! Text fields have embedded grouping separators removed so they can never
//! conflict with downstream delimited output. Numeric fields are stripped
//! of grouping separators before conversion; a value that still fails to
//! parse is a normalization failure, not a panic.

use crate::constants::GROUPING_SEPARATOR;

/// Remove every embedded separator character from a product name.
///
/// Applied unconditionally: "Mouse,Wireless" becomes "MouseWireless".
pub fn clean_product_name(value: &str) -> String {
    value.replace(GROUPING_SEPARATOR, "")
}

/// Parse a quantity field, stripping grouping separators first.
///
/// "1,916" parses to 1916. Returns `None` when the stripped value is not a
/// valid integer (including empty input).
pub fn parse_quantity(value: &str) -> Option<i64> {
    strip_grouping(value).parse().ok()
}

/// Parse a unit price field, stripping grouping separators first.
pub fn parse_unit_price(value: &str) -> Option<f64> {
    strip_grouping(value).parse().ok()
}

fn strip_grouping(value: &str) -> String {
    value.trim().replace(GROUPING_SEPARATOR, "")
}
