use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::{is_all_digits, strip_chars};

pub(crate) const OBJECT_ID_PREFIX: &str = "ObjectId(";

static DATE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("date prefix pattern is valid"));

/// the closed set of shapes a raw csv value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    ObjectId,
    DateLike,
    NumericLike,
    TextLike,
}

/// true when the value starts with `yyyy-mm-dd`. anything may follow.
pub fn starts_with_date(value: &str) -> bool {
    DATE_PREFIX.is_match(value)
}

// classifies a first-row value for schema inference.
// order matters: the object id prefix wins, then the digit test runs on the value with
// quotes and dots stripped, and only non-numeric values are checked for a date prefix.
pub fn classify_sample(value: &str) -> ValueClass {
    if value.starts_with(OBJECT_ID_PREFIX) {
        return ValueClass::ObjectId;
    }

    let unquoted = strip_chars(value, &['\'', '"']);
    let digits = strip_chars(&unquoted, &['.']);

    if is_all_digits(&digits) {
        ValueClass::NumericLike
    } else if starts_with_date(value) {
        ValueClass::DateLike
    } else {
        ValueClass::TextLike
    }
}

// classifies a cell for row rendering.
// unlike sampling, quotes are kept for the digit test, so `'42'` renders quoted.
// object ids and plain text render the same way; the distinction is kept for callers.
pub fn classify_cell(value: &str) -> ValueClass {
    let digits = strip_chars(value, &['.']);

    if is_all_digits(&digits) {
        ValueClass::NumericLike
    } else if starts_with_date(value) {
        ValueClass::DateLike
    } else if value.starts_with(OBJECT_ID_PREFIX) {
        ValueClass::ObjectId
    } else {
        ValueClass::TextLike
    }
}
