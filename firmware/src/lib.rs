//! Bare-metal side of the accelerator harness.
//!
//! Provides the concrete peripherals of the RV32I core the accelerator is
//! attached to. The program is loaded and started by the resident monitor
//! and hands control back to it once the report is printed.

#![no_main]
#![no_std]

use panic_halt as _; // Halt on panic, there is nowhere to report it.

pub mod system;
