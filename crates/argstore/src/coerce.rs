//! Conversions from stored string values to typed values.
//!
//! Every value is stored as text so one key can be read as a string, an
//! integer or a boolean without re-parsing the command line.

/// Stored form of `true` for values the parser synthesizes.
pub const TRUE: &str = "1";

/// Stored form of `false` for values the parser synthesizes.
pub const FALSE: &str = "0";

/// Boolean reading of a stored value.
///
/// Only the literal `"0"` is false. Anything else, including the empty string
/// left by a bare `-flag`, is true.
pub fn to_bool(value: &str) -> bool {
    value != FALSE
}

/// Stored form of a boolean.
pub fn from_bool(value: bool) -> &'static str {
    if value { TRUE } else { FALSE }
}

/// Parse the whole string as a base-10 integer.
///
/// Returns `None` for empty, partial (`"12abc"`) or non-numeric input.
pub fn to_int(value: &str) -> Option<i64> {
    value.parse().ok()
}

/// Integer reading of a value that is known to be present.
///
/// Unparseable text reads as `0`, not as any caller-supplied default.
pub fn to_int_lenient(value: &str) -> i64 {
    to_int(value).unwrap_or(0)
}
