//! Conversion of raw record values into text.

/// Decode a raw record value into a `String`.
///
/// Valid UTF-8 (which includes plain ASCII) is taken as is. Anything else
/// is decoded as ISO-8859-1, where every byte maps to the code point of the
/// same value, so the conversion never fails.
#[must_use]
pub fn normalize_text(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_owned(),
        Err(_) => raw.iter().copied().map(char::from).collect(),
    }
}
