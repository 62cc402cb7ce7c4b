use crate::compat::String;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Query component percent-encode set
/// Everything except ASCII alphanumerics and `-`, `_`, `.`, `~`.
/// Note: space is handled separately and written as `+`, so a literal `+` is always escaped.
pub const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Write a percent-encoded key or value directly to buffer
/// Spaces become `+`, matching how [`percent_decode_component`] reads them.
pub fn percent_encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for (i, part) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        for chunk in utf8_percent_encode(part, QUERY_COMPONENT_SET) {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a key or value from a query string.
///
/// `+` reads as a space and `%2B` as a literal `+`. Malformed escapes are kept
/// as-is and invalid UTF-8 is replaced, so this never fails.
pub fn percent_decode_component(input: &str) -> String {
    let bytes = input.as_bytes();
    if memchr::memchr2(b'%', b'+', bytes).is_none() {
        return input.into();
    }

    if memchr::memchr(b'+', bytes).is_none() {
        return percent_decode_str(input).decode_utf8_lossy().into();
    }
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into()
}
