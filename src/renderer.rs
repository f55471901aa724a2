use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::{ValueClass, classify_cell};
use crate::utils::strip_chars;

static MILLIS_UTC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\d{3}Z").expect("utc suffix pattern is valid"));
static MILLIS_OFFSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\d{3}\+\d{4}").expect("offset suffix pattern is valid"));

/// drops the `ObjectId` wrapper and every paren and quote character.
fn strip_literal(value: &str) -> String {
    strip_chars(&value.replace("ObjectId", ""), &['(', ')', '\'', '"'])
}

// only `.mmmZ` and `.mmm+HHMM` fragments are removed. other iso-8601 shapes
// (`-HHMM` offsets, no fractional seconds) pass through apart from the T swap.
fn normalize_timestamp(value: &str) -> String {
    let spaced = value.replace('T', " ");
    let no_utc = MILLIS_UTC.replace_all(&spaced, "");
    MILLIS_OFFSET.replace_all(&no_utc, "").into_owned()
}

/// renders one raw csv value as a sql literal.
pub fn render_value(value: &str) -> String {
    let literal = strip_literal(value);

    match classify_cell(value) {
        // the bare literal keeps its decimal point
        ValueClass::NumericLike => literal,
        ValueClass::DateLike => format!("'{}'", normalize_timestamp(&literal)),
        ValueClass::ObjectId | ValueClass::TextLike => format!("'{}'", literal),
    }
}

/// renders one row as a `,\n` separated literal list.
pub fn render_row<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| render_value(value.as_ref()))
        .collect::<Vec<String>>()
        .join(",\n")
}

/// renders every row, keeping input order.
pub fn render_rows(rows: &[Vec<String>]) -> Vec<String> {
    rows.iter().map(|row| render_row(row.as_slice())).collect()
}
