//! Measuring elapsed cycles on a free-running counter.

use core::sync::atomic::{self, Ordering};

/// Free-running cycle counter that can be restarted from zero.
pub trait CycleCounter {
    fn reset(&mut self);
    fn read(&mut self) -> u32;
}

/// Pair of counter readings taken around a measured operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleMeasurement {
    pub start: u32,
    pub end: u32,
}

impl CycleMeasurement {
    /// Cycles between both readings.
    ///
    /// If the counter overflowed in between, the result wraps around. Only
    /// a single overflow can be accounted for.
    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.end.wrapping_sub(self.start)
    }
}

/// Reset the counter and measure how long `op` takes.
pub fn measure<C: CycleCounter, T>(
    counter: &mut C,
    op: impl FnOnce() -> T,
) -> (T, CycleMeasurement) {
    counter.reset();

    atomic::compiler_fence(Ordering::Acquire);
    let start = counter.read();
    let result = op();
    let end = counter.read();
    atomic::compiler_fence(Ordering::Release);

    (result, CycleMeasurement { start, end })
}
