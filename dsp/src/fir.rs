//! Three-tap FIR filter over unsigned 32-bit samples.
//!
//! Computes `y[n] = w0 * x[n] + w1 * x[n-1] + w2 * x[n-2]` with wrapping
//! arithmetic, matching the width of the accelerator's registers. History
//! starts zeroed, the same state the accelerator holds after it is cleared.

pub const TAPS: usize = 3;

/// Tap coefficients of the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Weights {
    pub w0: u32,
    pub w1: u32,
    pub w2: u32,
}

impl Weights {
    #[must_use]
    pub const fn new(w0: u32, w1: u32, w2: u32) -> Self {
        Self { w0, w1, w2 }
    }
}

impl From<[u32; TAPS]> for Weights {
    fn from(other: [u32; TAPS]) -> Self {
        Self::new(other[0], other[1], other[2])
    }
}

/// Software reference of the accelerator's filter.
///
/// Call `tick` for every sample in order. `reset` drops the history, so the
/// next sample is treated as the first one of a sequence.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReferenceFilter {
    weights: Weights,
    x_m1: u32,
    x_m2: u32,
}

impl ReferenceFilter {
    #[must_use]
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            x_m1: 0,
            x_m2: 0,
        }
    }

    pub fn tick(&mut self, x: u32) -> u32 {
        let y = x
            .wrapping_mul(self.weights.w0)
            .wrapping_add(self.x_m1.wrapping_mul(self.weights.w1))
            .wrapping_add(self.x_m2.wrapping_mul(self.weights.w2));
        self.x_m2 = self.x_m1;
        self.x_m1 = x;
        y
    }

    pub fn reset(&mut self) {
        self.x_m1 = 0;
        self.x_m2 = 0;
    }

    pub fn process(&mut self, buffer: &mut [u32]) {
        for x in buffer.iter_mut() {
            *x = self.tick(*x);
        }
    }
}

/// Filter the whole sequence, starting from zeroed history.
#[must_use]
pub fn compute<const N: usize>(samples: &[u32; N], weights: Weights) -> [u32; N] {
    let mut results = *samples;
    ReferenceFilter::new(weights).process(&mut results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::Rng;

    const SAMPLES: [u32; 20] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
    const WEIGHTS: Weights = Weights::new(1, 2, 1);

    fn naive(samples: &[u32], weights: Weights, i: usize) -> u32 {
        let at = |offset: usize| i.checked_sub(offset).map_or(0, |j| samples[j]);
        at(0)
            .wrapping_mul(weights.w0)
            .wrapping_add(at(1).wrapping_mul(weights.w1))
            .wrapping_add(at(2).wrapping_mul(weights.w2))
    }

    #[test]
    fn first_results_use_zeroed_history() {
        let results = compute(&SAMPLES, WEIGHTS);
        assert_eq!(results[0], 1);
        assert_eq!(results[1], 4);
        assert_eq!(results[2], 8);
        assert_eq!(results[3], 12);
    }

    #[test]
    fn reference_scenario_matches_recurrence() {
        let results = compute(&SAMPLES, WEIGHTS);
        assert_eq!(
            results,
            [1, 4, 8, 12, 16, 20, 24, 28, 32, 36, 39, 39, 36, 32, 28, 24, 20, 16, 12, 8]
        );
    }

    #[test]
    fn history_shifts_by_one_sample_per_tick() {
        let mut filter = ReferenceFilter::new(Weights::new(0, 0, 1));
        assert_eq!(filter.tick(7), 0);
        assert_eq!(filter.tick(8), 0);
        assert_eq!(filter.tick(9), 7);
        assert_eq!(filter.tick(10), 8);
    }

    #[test]
    fn reset_clears_history() {
        let mut filter = ReferenceFilter::new(WEIGHTS);
        filter.tick(100);
        filter.tick(200);
        filter.reset();
        assert_eq!(filter.tick(1), 1);
    }

    #[test]
    fn overflow_wraps_around() {
        let results = compute(&[u32::MAX, 2], Weights::new(2, 1, 0));
        assert_eq!(results[0], u32::MAX - 1);
        assert_eq!(results[1], 3);
    }

    #[test]
    fn empty_sequence_yields_empty_result() {
        let results: [u32; 0] = compute(&[], WEIGHTS);
        assert!(results.is_empty());
    }

    #[test]
    fn random_weights_match_direct_convolution() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let weights = Weights::from([rng.gen(), rng.gen(), rng.gen()]);
            let mut samples = [0; 32];
            rng.fill(&mut samples[..]);
            let results = compute(&samples, weights);
            for (i, y) in results.iter().enumerate() {
                assert_eq!(*y, naive(&samples, weights, i));
            }
        }
    }

    proptest! {
        #[test]
        fn output_depends_only_on_three_latest_samples(
            samples in prop::array::uniform16(any::<u32>()),
            tail in prop::array::uniform16(any::<u32>()),
            weights in prop::array::uniform3(any::<u32>()),
            split in 0usize..16,
        ) {
            let weights = Weights::from(weights);
            let mut altered = samples;
            altered[split..].copy_from_slice(&tail[split..]);

            let original = compute(&samples, weights);
            let changed = compute(&altered, weights);
            prop_assert_eq!(&original[..split], &changed[..split]);
            for i in 0..16 {
                prop_assert_eq!(original[i], naive(&samples, weights, i));
            }
        }

        #[test]
        fn computing_twice_gives_identical_output(
            samples in prop::array::uniform20(any::<u32>()),
            weights in prop::array::uniform3(any::<u32>()),
        ) {
            let weights = Weights::from(weights);
            prop_assert_eq!(compute(&samples, weights), compute(&samples, weights));
        }
    }
}
