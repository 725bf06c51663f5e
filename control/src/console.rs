//! Byte-oriented text output, such as a UART.

use crate::hex;

/// Sink of ASCII text.
///
/// There is no acknowledgement. Implementations either accept all bytes or
/// block until they can.
pub trait Console {
    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_str(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    /// Write the value as eight hexadecimal digits.
    fn write_hex(&mut self, value: u32) {
        self.write_bytes(&hex::encode(value));
    }
}
