use volatile_register::{RO, WO};

use tapcheck_control::CycleCounter;

use super::memory_map;

#[repr(C)]
pub struct RegisterBlock {
    pub cycles: RO<u32>,
    pub instructions: RO<u32>,
    pub reset: WO<u32>,
}

/// Free-running cycle and instruction counters of the core.
///
/// Both counters are restarted by the same reset.
pub struct Counters {
    block: &'static mut RegisterBlock,
}

impl Counters {
    /// # Safety
    ///
    /// There must be no other handle to the counters.
    pub(crate) unsafe fn new() -> Self {
        Self {
            block: &mut *(memory_map::COUNTERS as *mut RegisterBlock),
        }
    }
}

impl CycleCounter for Counters {
    fn reset(&mut self) {
        // SAFETY: Writes to the counters have no effect on memory.
        unsafe { self.block.reset.write(1) };
    }

    fn read(&mut self) -> u32 {
        self.block.cycles.read()
    }
}
