//! Joining class fragments.

use std::collections::HashSet;

/// Joins class fragments into a single space-separated class string.
///
/// Each fragment may hold several whitespace-separated classes. Empty
/// fragments are skipped and a class that already appeared is not repeated;
/// otherwise order is preserved.
///
/// # Example
///
/// ```rust
/// use duskmode::class_names;
///
/// assert_eq!(class_names(["shrink-0 bg-border", "", "w-full bg-border"]), "shrink-0 bg-border w-full");
/// ```
pub fn class_names<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = String::new();

    for fragment in fragments {
        for class in fragment.as_ref().split_whitespace() {
            if !seen.insert(class.to_string()) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        }
    }

    out
}
