//! Fixed data of the bring-up run.

use tapcheck_dsp::fir::Weights;

pub const SAMPLE_COUNT: usize = 20;

/// Ramp up and back down, so the history spans both directions.
pub const SAMPLES: [u32; SAMPLE_COUNT] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
];

/// `y[n] = x[n] + 2 * x[n-1] + x[n-2]`
pub const WEIGHTS: Weights = Weights::new(1, 2, 1);

/// Entry point of the resident monitor, to be jumped to once done.
pub const MONITOR_ADDRESS: &str = "40000000";
