//! Verification harness of the FIR filter accelerator.
//!
//! Everything here is written against abstract hardware, so it can be run
//! on the target as well as tested on the host:
//!
//! ```text
//!   [ Registers ] <-- [ Driver ] --+
//!                                  |
//!   [ ReferenceFilter ] -----------+--> [ Harness ] --> [ Console ]
//!                                  |
//!   [ CycleCounter ] --------------+
//! ```
//!
//! The firmware provides the concrete registers, counter and console, and
//! takes care of returning to the monitor afterwards.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

pub mod accelerator;
pub mod comparison;
pub mod console;
pub mod counter;
pub mod harness;
pub mod hex;
mod log;
pub mod registers;
pub mod report;
pub mod scenario;

pub use accelerator::{Accelerator, Driver};
pub use comparison::{Comparison, Verdict};
pub use console::Console;
pub use counter::{CycleCounter, CycleMeasurement};
pub use harness::{Harness, Summary};
pub use registers::{Register, Registers};
