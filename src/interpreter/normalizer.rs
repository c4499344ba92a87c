/// Collapses every run of consecutive spaces into a single space.
///
/// Only `' '` is affected; tabs and newlines are kept as they are. A single
/// leading or trailing space survives, so `" 1 + 2"` stays malformed.
///
/// # Example
/// ```
/// use mixfrac::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize("1/2   *  3_3/4"), "1/2 * 3_3/4");
/// assert_eq!(normalize("  1 + 2  "), " 1 + 2 ");
/// assert_eq!(normalize("1\t\t+ 2"), "1\t\t+ 2");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let mut normalized = String::with_capacity(input.len());
    let mut after_space = false;

    for c in input.chars() {
        let is_space = c == ' ';
        if !(is_space && after_space) {
            normalized.push(c);
        }
        after_space = is_space;
    }

    normalized
}
