//! Small string conversions
//!
//! Trimming, case changes and substring tests are left to `str`.

use std::fmt::Display;

/// Longest label a DNS name may carry
pub const MAX_DNS_LABEL_LEN: usize = 63;

/// Split on `separator`, dropping empty pieces
///
/// ```
/// use slogger::utils::strings::split;
/// assert_eq!(split("a,,b,", ','), vec!["a", "b"]);
/// ```
pub fn split(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Render items as `[a, b, c]`
pub fn to_list_string<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Comma separated values, no brackets or spaces
pub fn array_to_string<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode labels as a DNS/mDNS wire name: each label prefixed by its
/// length byte, then a terminating zero
///
/// Returns `None` if a label is empty or longer than
/// [`MAX_DNS_LABEL_LEN`] bytes.
///
/// ```
/// use slogger::utils::strings::to_mdns_string;
/// let wire = to_mdns_string(&["_ravenna", "local"]).unwrap();
/// assert_eq!(wire, b"\x08_ravenna\x05local\x00");
/// ```
pub fn to_mdns_string<S: AsRef<str>>(labels: &[S]) -> Option<Vec<u8>> {
    let encoded_len: usize = labels.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut wire = Vec::with_capacity(encoded_len + 1);
    for label in labels {
        let label = label.as_ref().as_bytes();
        if label.is_empty() || label.len() > MAX_DNS_LABEL_LEN {
            return None;
        }
        wire.push(label.len() as u8);
        wire.extend_from_slice(label);
    }
    wire.push(0);
    Some(wire)
}

/// Parse hexadecimal, with or without a `0x` prefix
pub fn hex_string_to_int(text: &str) -> Option<u32> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).ok()
}

/// Parse a decimal integer, ignoring surrounding whitespace
pub fn parse_int(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// True if the last element of `items` equals `expected`
pub fn last_item_equals<S: AsRef<str>>(items: &[S], expected: &str) -> bool {
    items.last().is_some_and(|last| last.as_ref() == expected)
}
