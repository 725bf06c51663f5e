//! Element-wise comparison of hardware and software results.

use crate::log;

/// Overall outcome of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    Success,
    Fail,
}

impl Verdict {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Fail => "FAIL",
        }
    }
}

/// Per-index match flags with a running count of mismatches.
///
/// Indices are recorded one by one. A mismatch never stops the comparison,
/// every index gets its flag.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Comparison<const N: usize> {
    matches: [bool; N],
    mismatches: usize,
}

impl<const N: usize> Default for Comparison<N> {
    fn default() -> Self {
        Self {
            matches: [false; N],
            mismatches: 0,
        }
    }
}

impl<const N: usize> Comparison<N> {
    #[must_use]
    pub fn new(hardware: &[u32; N], software: &[u32; N]) -> Self {
        let mut comparison = Self::default();
        for (index, (hardware, software)) in hardware.iter().zip(software).enumerate() {
            comparison.record(index, *hardware, *software);
        }
        comparison
    }

    /// Compare results at the given index, returning whether they match.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub(crate) fn record(&mut self, index: usize, hardware: u32, software: u32) -> bool {
        let matched = hardware == software;
        self.matches[index] = matched;
        if !matched {
            log::warning!(
                "Mismatch at index={}: hardware={} software={}",
                index,
                hardware,
                software
            );
            self.mismatches += 1;
        }
        matched
    }

    #[must_use]
    pub fn matched(&self, index: usize) -> bool {
        self.matches[index]
    }

    #[must_use]
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.mismatches == 0 {
            Verdict::Success
        } else {
            Verdict::Fail
        }
    }
}
