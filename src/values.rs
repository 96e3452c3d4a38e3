//! The value table driving the color computation
//!
//! Keys are region identifiers; values are coerced to whole numbers at
//! insertion time. The table deliberately tolerates keys that never match
//! a drawn region and regions that never receive a value; both resolve
//! at colorize time, not here.

use indexmap::IndexMap;

/// Ordered key-value store with truncating numeric coercion
///
/// Iteration order is insertion order, and overwriting a key keeps its
/// original position. Values pass through [`f64::trunc`] on the way in;
/// NaN survives the truncation and is the sentinel for malformed input,
/// poisoning any range computation that includes it.
#[derive(Debug, Clone, Default)]
pub struct ValueTable {
    entries: IndexMap<String, f64>,
}

impl ValueTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, truncated toward zero
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.entries.insert(key.into(), value.trunc());
    }

    /// Store a textual value using integer-prefix parsing
    ///
    /// Lenient base-10 coercion: an optional sign and leading digits are
    /// honored, so `"42km"` stores 42 while anything without a digit
    /// prefix becomes NaN.
    pub fn insert_text(&mut self, key: impl Into<String>, value: &str) {
        self.insert(key, parse_int_prefix(value));
    }

    /// Look up a single key
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Minimum over all stored values
    ///
    /// Calling this on an empty table is a precondition violation and
    /// yields `+∞` rather than an error; a NaN entry anywhere in the
    /// table poisons the result to NaN.
    pub fn min(&self) -> f64 {
        self.entries.values().fold(f64::INFINITY, |acc, &v| {
            if acc.is_nan() || v.is_nan() {
                f64::NAN
            } else {
                acc.min(v)
            }
        })
    }

    /// Maximum over all stored values
    ///
    /// Yields `-∞` on an empty table; NaN entries poison the result.
    pub fn max(&self) -> f64 {
        self.entries.values().fold(f64::NEG_INFINITY, |acc, &v| {
            if acc.is_nan() || v.is_nan() {
                f64::NAN
            } else {
                acc.max(v)
            }
        })
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no value has been stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Parse the leading base-10 integer of `text`; NaN if there is none
pub(crate) fn parse_int_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let prefix: String = digits.chars().take_while(char::is_ascii_digit).collect();
    if prefix.is_empty() {
        f64::NAN
    } else {
        sign * prefix.parse::<f64>().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_truncates_toward_zero() {
        let mut table = ValueTable::new();
        table.insert("a", 12.9);
        table.insert("b", -3.7);
        assert_eq!(table.get("a"), Some(12.0));
        assert_eq!(table.get("b"), Some(-3.0));
    }

    #[test]
    fn test_insert_keeps_nan_sentinel() {
        let mut table = ValueTable::new();
        table.insert("bad", f64::NAN);
        assert!(table.get("bad").expect("Should be stored").is_nan());
    }

    #[test]
    fn test_get_missing_key() {
        let table = ValueTable::new();
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut table = ValueTable::new();
        table.insert("a", 1.0);
        table.insert("b", 2.0);
        table.insert("a", 9.0);

        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(table.get("a"), Some(9.0));
    }

    #[test]
    fn test_min_max() {
        let mut table = ValueTable::new();
        table.insert("a", 5.0);
        table.insert("b", -2.0);
        table.insert("c", 11.0);
        assert_eq!(table.min(), -2.0);
        assert_eq!(table.max(), 11.0);
    }

    #[test]
    fn test_min_max_on_empty_table_are_non_finite() {
        let table = ValueTable::new();
        assert_eq!(table.min(), f64::INFINITY);
        assert_eq!(table.max(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_nan_poisons_min_max() {
        let mut table = ValueTable::new();
        table.insert("a", 5.0);
        table.insert("bad", f64::NAN);
        table.insert("b", 10.0);
        assert!(table.min().is_nan());
        assert!(table.max().is_nan());
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), 42.0);
        assert_eq!(parse_int_prefix(" 42km"), 42.0);
        assert_eq!(parse_int_prefix("+7"), 7.0);
        assert_eq!(parse_int_prefix("-13.9"), -13.0);
        assert_eq!(parse_int_prefix("0042"), 42.0);
        // the exponent is not part of a base-10 integer prefix
        assert_eq!(parse_int_prefix("12e3"), 12.0);
    }

    #[test]
    fn test_parse_int_prefix_rejects_non_numeric() {
        assert!(parse_int_prefix("abc").is_nan());
        assert!(parse_int_prefix("").is_nan());
        assert!(parse_int_prefix("-").is_nan());
        assert!(parse_int_prefix("km42").is_nan());
    }

    #[test]
    fn test_insert_text_coerces() {
        let mut table = ValueTable::new();
        table.insert_text("a", "26");
        table.insert_text("b", "not a number");
        assert_eq!(table.get("a"), Some(26.0));
        assert!(table.get("b").expect("Should be stored").is_nan());
    }
}
