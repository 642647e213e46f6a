//! Helpers over string sequences.

use std::collections::HashSet;

/// Elements of `a` that do not occur anywhere in `b`.
///
/// Order of `a` is preserved and duplicates in `a` are kept once per
/// occurrence; `b` is only used for membership.
pub fn difference(a: &[String], b: &[String]) -> Vec<String> {
    let exclude: HashSet<&str> = b.iter().map(String::as_str).collect();
    a.iter().filter(|item| !exclude.contains(item.as_str())).cloned().collect()
}
