//! Addresses of memory-mapped peripherals.

pub const UART: usize = 0x8000_0000;
pub const COUNTERS: usize = 0x8000_0010;
pub const ACCELERATOR: usize = 0x8001_0000;
