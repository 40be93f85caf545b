//! OMI name character rules

/// Punctuation allowed in an OMI name besides ASCII letters and digits
const ALLOWED_PUNCTUATION: &[char] = &['(', ')', '[', ']', ' ', '.', '/', '-', '\'', '@', '_'];

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ALLOWED_PUNCTUATION.contains(&c)
}

/// Whether `name` only uses characters allowed in an OMI name
pub fn is_clean_name(name: &str) -> bool {
    name.chars().all(is_allowed_char)
}

/// Replace every character not allowed in an OMI name with `-`
///
/// This is the `clean_omi_name` template filter.
pub fn clean_omi_name(name: &str) -> String {
    name.chars()
        .map(|c| if is_allowed_char(c) { c } else { '-' })
        .collect()
}
