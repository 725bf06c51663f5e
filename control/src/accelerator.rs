//! Driving the filter accelerator through its register protocol.
//!
//! The accelerator must be cleared, then loaded with weights, and only then
//! fed with samples one by one. Writing a sample starts the computation and
//! the result is read right after, without polling any ready flag. The
//! accelerator is expected to finish within the gap between the two
//! accesses.

use tapcheck_dsp::fir::Weights;

use crate::registers::{Register, Registers};

/// Operations of the filter accelerator, in the order they must be issued.
pub trait Accelerator {
    /// Zero the internal history. Must be called before `load_weights`.
    fn reset(&mut self);

    /// Set tap coefficients, kept until the next `reset`.
    fn load_weights(&mut self, weights: Weights);

    /// Feed one sample and return the filtered value.
    fn submit(&mut self, sample: u32) -> u32;
}

/// Register-level driver of the accelerator.
///
/// Owns the register block handle, so there is exactly one party talking
/// to the hardware.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Driver<R> {
    registers: R,
}

impl<R: Registers> Driver<R> {
    #[must_use]
    pub fn new(registers: R) -> Self {
        Self { registers }
    }

    /// Give up the driver, returning the register block.
    #[must_use]
    pub fn release(self) -> R {
        self.registers
    }
}

impl<R: Registers> Accelerator for Driver<R> {
    fn reset(&mut self) {
        self.registers.write(Register::Clear, 1);
    }

    fn load_weights(&mut self, weights: Weights) {
        self.registers.write(Register::Weight0, weights.w0);
        self.registers.write(Register::Weight1, weights.w1);
        self.registers.write(Register::Weight2, weights.w2);
    }

    fn submit(&mut self, sample: u32) -> u32 {
        self.registers.write(Register::DataIn, sample);
        self.registers.read_data_out()
    }
}

/// Run the full protocol over the given samples.
///
/// Resets the accelerator, loads the weights and submits every sample in
/// order, collecting one result per sample.
pub fn filter<A: Accelerator, const N: usize>(
    accelerator: &mut A,
    samples: &[u32; N],
    weights: Weights,
) -> [u32; N] {
    accelerator.reset();
    accelerator.load_weights(weights);

    let mut results = [0; N];
    for (result, sample) in results.iter_mut().zip(samples) {
        *result = accelerator.submit(*sample);
    }
    results
}
