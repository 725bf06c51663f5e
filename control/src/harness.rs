//! Verification run comparing the accelerator against the reference filter.
//!
//! The run goes through fixed phases, each starting only after the previous
//! one finished:
//!
//! 1. Timed hardware run over all samples.
//! 2. Timed software run over the same samples.
//! 3. Element-wise comparison, printing one row per sample.
//! 4. Summary with cycle counts and the final verdict.
//!
//! Handing control back to the monitor is left to the caller.

use core::hint::black_box;

use tapcheck_dsp::fir::{self, Weights};

use crate::accelerator::{self, Accelerator};
use crate::comparison::{Comparison, Verdict};
use crate::console::Console;
use crate::counter::{self, CycleCounter};
use crate::log;
use crate::report::{self, Row};

/// Outcome of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Summary {
    pub hardware_cycles: u32,
    pub software_cycles: u32,
    pub mismatches: usize,
    pub verdict: Verdict,
}

/// Everything the run needs to talk to.
pub struct Harness<A, C, O> {
    pub accelerator: A,
    pub counter: C,
    pub console: O,
}

impl<A, C, O> Harness<A, C, O>
where
    A: Accelerator,
    C: CycleCounter,
    O: Console,
{
    pub fn new(accelerator: A, counter: C, console: O) -> Self {
        Self {
            accelerator,
            counter,
            console,
        }
    }

    /// Run both filters over the samples, print the report and return its
    /// summary.
    pub fn run<const N: usize>(&mut self, samples: &[u32; N], weights: Weights) -> Summary {
        report::write_banner(&mut self.console);

        log::info!("Running on hardware");
        let (hardware, hardware_measurement) = counter::measure(&mut self.counter, || {
            accelerator::filter(&mut self.accelerator, samples, weights)
        });

        log::info!("Running in software");
        let (software, software_measurement) = counter::measure(&mut self.counter, || {
            fir::compute(black_box(samples), black_box(weights))
        });

        log::info!("Comparing results");
        report::write_table_header(&mut self.console);
        let mut comparison = Comparison::<N>::default();
        for (index, input) in samples.iter().enumerate() {
            let matched = comparison.record(index, hardware[index], software[index]);
            report::write_row(
                &mut self.console,
                &Row {
                    index: index as u32,
                    input: *input,
                    hardware: hardware[index],
                    software: software[index],
                    matched,
                },
            );
        }

        let summary = Summary {
            hardware_cycles: hardware_measurement.elapsed(),
            software_cycles: software_measurement.elapsed(),
            mismatches: comparison.mismatches(),
            verdict: comparison.verdict(),
        };
        log::info!("Finished: {:?}", summary);

        report::write_performance(
            &mut self.console,
            summary.hardware_cycles,
            summary.software_cycles,
        );
        report::write_verdict(&mut self.console, summary.verdict);

        summary
    }
}
