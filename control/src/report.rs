//! Text report printed on the console.
//!
//! Layout of a full report:
//!
//! ```text
//!
//! === 1D Filter Convolution Test ===
//!
//! [Index]  [Input]   [HW Result]  [SW Result]   [Check]
//!   00000000       00000001     00000001     00000001      OK
//!   ...
//!
//! Performance Comparison (Cycles):
//! HW Accelerator: 000000a4
//! Software (CPU): 000002f1
//!
//! FINAL RESULT: SUCCESS
//! ```
//!
//! Lines are terminated with CRLF.

use crate::comparison::Verdict;
use crate::console::Console;

/// One line of the result table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Row {
    pub index: u32,
    pub input: u32,
    pub hardware: u32,
    pub software: u32,
    pub matched: bool,
}

pub fn write_banner<C: Console>(console: &mut C) {
    console.write_str("\r\n=== 1D Filter Convolution Test ===\r\n");
}

pub fn write_table_header<C: Console>(console: &mut C) {
    console.write_str("\r\n[Index]  [Input]   [HW Result]  [SW Result]   [Check]\r\n");
}

pub fn write_row<C: Console>(console: &mut C, row: &Row) {
    console.write_str("  ");
    console.write_hex(row.index);
    console.write_str("       ");
    console.write_hex(row.input);
    console.write_str("     ");
    console.write_hex(row.hardware);
    console.write_str("     ");
    console.write_hex(row.software);
    if row.matched {
        console.write_str("      OK\r\n");
    } else {
        console.write_str("      FAIL\r\n");
    }
}

pub fn write_performance<C: Console>(
    console: &mut C,
    hardware_cycles: u32,
    software_cycles: u32,
) {
    console.write_str("\r\nPerformance Comparison (Cycles):\r\n");
    console.write_str("HW Accelerator: ");
    console.write_hex(hardware_cycles);
    console.write_str("\r\n");
    console.write_str("Software (CPU): ");
    console.write_hex(software_cycles);
    console.write_str("\r\n");
}

pub fn write_verdict<C: Console>(console: &mut C, verdict: Verdict) {
    console.write_str("\r\nFINAL RESULT: ");
    console.write_str(verdict.as_str());
    console.write_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    use heapless::Vec;

    #[derive(Default)]
    struct Capture {
        bytes: Vec<u8, 256>,
    }

    impl Console for Capture {
        fn write_bytes(&mut self, bytes: &[u8]) {
            self.bytes.extend_from_slice(bytes).unwrap();
        }
    }

    impl Capture {
        fn text(&self) -> &str {
            core::str::from_utf8(&self.bytes).unwrap()
        }
    }

    #[test]
    fn matching_row_is_marked_ok() {
        let mut capture = Capture::default();
        write_row(
            &mut capture,
            &Row {
                index: 0x13,
                input: 1,
                hardware: 8,
                software: 8,
                matched: true,
            },
        );
        assert_eq!(
            capture.text(),
            "  00000013       00000001     00000008     00000008      OK\r\n"
        );
    }

    #[test]
    fn differing_row_is_marked_fail() {
        let mut capture = Capture::default();
        write_row(
            &mut capture,
            &Row {
                index: 2,
                input: 3,
                hardware: 0xdead,
                software: 8,
                matched: false,
            },
        );
        assert_eq!(
            capture.text(),
            "  00000002       00000003     0000dead     00000008      FAIL\r\n"
        );
    }

    #[test]
    fn performance_lists_both_counts_in_hex() {
        let mut capture = Capture::default();
        write_performance(&mut capture, 0xa4, 0x2f1);
        assert_eq!(
            capture.text(),
            "\r\nPerformance Comparison (Cycles):\r\nHW Accelerator: 000000a4\r\nSoftware (CPU): 000002f1\r\n"
        );
    }

    #[test]
    fn verdict_line() {
        let mut capture = Capture::default();
        write_verdict(&mut capture, Verdict::Fail);
        assert_eq!(capture.text(), "\r\nFINAL RESULT: FAIL\r\n");
    }
}
