//! Hexadecimal helpers for APDU logging and key parsing.

use std::fmt::Write;

/// Lowercase hex without separators: `&[0xff, 0xca]` -> `"ffca"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing to a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex, one space between bytes: `&[0xff, 0xca]` -> `"ff ca"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02x}", b);
    }
    s
}

/// Parse hex such as `"FF FF FF FF FF FF"` or `"a0a1a2a3a4a5"`.
/// Whitespace and `:` separators are ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in '{}'", s));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text: String = pair.iter().collect();
            u8::from_str_radix(&text, 16).map_err(|e| format!("invalid hex byte '{}': {}", text, e))
        })
        .collect()
}
