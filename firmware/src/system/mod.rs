mod accelerator;
mod counters;
pub mod memory_map;
pub mod monitor;
mod uart;

use core::sync::atomic::{AtomicBool, Ordering};

pub use accelerator::Accelerator;
pub use counters::Counters;
pub use uart::Uart;

static TAKEN: AtomicBool = AtomicBool::new(false);

pub struct System {
    pub accelerator: Accelerator,
    pub counters: Counters,
    pub uart: Uart,
}

impl System {
    /// Take ownership of all peripherals used by the harness.
    ///
    /// Returns `None` if the system was already taken.
    #[must_use]
    pub fn take() -> Option<Self> {
        // The program runs on a single hart without interrupts, a plain
        // load and store is enough.
        if TAKEN.load(Ordering::Relaxed) {
            return None;
        }
        TAKEN.store(true, Ordering::Relaxed);

        // SAFETY: This is the only place creating the handles and it can
        // pass only once.
        let system = unsafe {
            Self {
                accelerator: Accelerator::new(),
                counters: Counters::new(),
                uart: Uart::new(),
            }
        };
        Some(system)
    }
}
