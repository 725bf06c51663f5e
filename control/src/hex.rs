//! Conversion between `u32` and hexadecimal ASCII text.

/// Number of digits produced by `encode`.
pub const DIGITS: usize = 8;

/// Format the value as eight zero-padded lowercase hexadecimal digits.
#[must_use]
pub fn encode(value: u32) -> [u8; DIGITS] {
    let mut text = [0; DIGITS];
    for (i, digit) in text.iter_mut().enumerate() {
        let nibble = ((value >> (28 - 4 * i)) & 0xF) as u8;
        *digit = if nibble < 10 {
            b'0' + nibble
        } else {
            b'a' + nibble - 10
        };
    }
    text
}

/// Parse hexadecimal digits of either case.
///
/// Returns `None` if the text is empty, holds more than eight digits, or
/// contains anything but hexadecimal digits.
#[must_use]
pub fn decode(text: &str) -> Option<u32> {
    if text.is_empty() || text.len() > DIGITS {
        return None;
    }

    text.bytes().try_fold(0u32, |value, c| {
        let nibble = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => return None,
        };
        Some((value << 4) | u32::from(nibble))
    })
}
