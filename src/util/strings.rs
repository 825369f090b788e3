// util/strings.rs: Splitting and joining of option values.

use crate::constants::VALUE_SEPARATOR;

/// Splits `src` into whitespace-separated words.
pub fn split_by_space(src: &str) -> Vec<&str> {
    src.split_whitespace().collect()
}

/// Splits an accumulated value on the NUL separator.
///
/// Interior empty pieces are kept; a trailing empty piece is dropped, so
/// `""` yields no items and `"a\0"` yields `["a"]`.
pub fn split_by_null(src: &str) -> Vec<&str> {
    let mut items: Vec<&str> = src.split(VALUE_SEPARATOR).collect();
    if items.last().is_some_and(|s| s.is_empty()) {
        items.pop();
    }
    items
}

/// Joins `items` with the NUL separator.
pub fn join_null<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(VALUE_SEPARATOR);
        }
        out.push_str(item.as_ref());
    }
    out
}
