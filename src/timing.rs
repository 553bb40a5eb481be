use std::hint::black_box;
use std::time::{Duration, Instant};

/// Wall-clock durations of every timed trial of one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    samples: Vec<Duration>,
}

impl Timing {
    /// Returns `None` for an empty sample set.
    pub fn from_samples(samples: Vec<Duration>) -> Option<Self> {
        (!samples.is_empty()).then_some(Self { samples })
    }

    pub fn samples(&self) -> &[Duration] {
        &self.samples
    }

    pub fn trials(&self) -> usize {
        self.samples.len()
    }

    pub fn median(&self) -> Duration {
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2
        } else {
            sorted[mid]
        }
    }

    pub fn mean(&self) -> Duration {
        let total: Duration = self.samples.iter().sum();
        total / u32::try_from(self.samples.len()).unwrap_or(u32::MAX)
    }

    pub fn min(&self) -> Duration {
        self.samples.iter().copied().min().unwrap_or_default()
    }
}

/// How many times a strategy runs: untimed warm-ups first, then timed trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trials {
    trials: usize,
    warmup: usize,
}

impl Default for Trials {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl Trials {
    /// At least one trial always runs.
    pub fn new(trials: usize, warmup: usize) -> Self {
        Self {
            trials: trials.max(1),
            warmup,
        }
    }

    /// Run `run` over a fresh `setup()` input per execution and time each
    /// timed trial. Only `run` sits between the two clock reads.
    ///
    /// Returns the output of the last trial and logs
    /// `"<label> took: <N> ms"` with the median duration.
    pub fn measure<I, O>(
        &self,
        label: &str,
        mut setup: impl FnMut() -> I,
        mut run: impl FnMut(I) -> O,
    ) -> (O, Timing) {
        for _ in 0..self.warmup {
            let input = setup();
            black_box(run(input));
        }

        let mut samples = Vec::with_capacity(self.trials);
        let (mut output, first) = timed(&mut setup, &mut run);
        samples.push(first);
        for _ in 1..self.trials {
            let (next, elapsed) = timed(&mut setup, &mut run);
            output = next;
            samples.push(elapsed);
        }
        log::debug!("{label} samples: {samples:?}");

        let timing = Timing { samples };
        log::info!("{label} took: {} ms", timing.median().as_millis());
        (output, timing)
    }
}

fn timed<I, O>(setup: &mut impl FnMut() -> I, run: &mut impl FnMut(I) -> O) -> (O, Duration) {
    let input = setup();
    let start = Instant::now();
    let output = run(black_box(input));
    let elapsed = start.elapsed();
    (black_box(output), elapsed)
}
