//! Mock populations with explicit, bounded output history.

use std::collections::VecDeque;

use nfwave_core::{Delay, Population, PreconditionError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A population whose output frames are pushed by the test.
///
/// History starts as a single frame filled with the steady value. Growing
/// the history pads it with copies of the oldest frame, so any delay up to
/// the requested depth is served from the first step on.
#[derive(Clone, Debug)]
pub struct HistoryPopulation {
    nodes: usize,
    steady: f64,
    depth: usize,
    frames: VecDeque<Vec<f64>>,
}

impl HistoryPopulation {
    pub fn new(nodes: usize, steady: f64) -> Self {
        Self {
            nodes,
            steady,
            depth: 0,
            frames: VecDeque::from([vec![steady; nodes]]),
        }
    }

    /// Deepest delay currently served, in steps.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Override the value reported by `current_output()`.
    pub fn set_steady(&mut self, steady: f64) {
        self.steady = steady;
    }

    /// Push the newest output frame, dropping frames beyond the depth.
    pub fn push(&mut self, frame: Vec<f64>) -> Result<(), PreconditionError> {
        if frame.len() != self.nodes {
            return Err(PreconditionError::FieldLength {
                expected: self.nodes,
                got: frame.len(),
            });
        }
        self.frames.push_front(frame);
        self.frames.truncate(self.depth + 1);
        Ok(())
    }

    /// Push a frame with every node at `value`.
    pub fn push_uniform(&mut self, value: f64) {
        self.frames.push_front(vec![value; self.nodes]);
        self.frames.truncate(self.depth + 1);
    }

    /// Most recent frame.
    pub fn latest(&self) -> &[f64] {
        &self.frames[0]
    }
}

impl Population for HistoryPopulation {
    fn nodes(&self) -> usize {
        self.nodes
    }

    fn current_output(&self) -> f64 {
        self.steady
    }

    fn grow_history(&mut self, delay: Delay) {
        self.depth = self.depth.max(delay.steps());
        while self.frames.len() < self.depth + 1 {
            let oldest = self.frames[self.frames.len() - 1].clone();
            self.frames.push_back(oldest);
        }
    }

    fn delayed_output(&self, delay: Delay) -> Option<&[f64]> {
        if delay.steps() > self.depth {
            return None;
        }
        self.frames.get(delay.steps()).map(Vec::as_slice)
    }
}

/// A population emitting uniform noise around a mean, seeded for
/// reproducibility.
#[derive(Clone, Debug)]
pub struct NoisePopulation {
    inner: HistoryPopulation,
    amplitude: f64,
    rng: ChaCha8Rng,
}

impl NoisePopulation {
    pub fn new(nodes: usize, mean: f64, amplitude: f64, seed: u64) -> Self {
        Self {
            inner: HistoryPopulation::new(nodes, mean),
            amplitude,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw and push the next frame, each node in `mean ± amplitude`.
    pub fn advance(&mut self) {
        let mean = self.inner.steady;
        let amplitude = self.amplitude;
        let frame: Vec<f64> = (0..self.inner.nodes)
            .map(|_| mean + amplitude * self.rng.gen_range(-1.0..=1.0))
            .collect();
        self.inner.frames.push_front(frame);
        self.inner.frames.truncate(self.inner.depth + 1);
    }

    /// Most recent frame.
    pub fn latest(&self) -> &[f64] {
        self.inner.latest()
    }
}

impl Population for NoisePopulation {
    fn nodes(&self) -> usize {
        self.inner.nodes()
    }

    fn current_output(&self) -> f64 {
        self.inner.current_output()
    }

    fn grow_history(&mut self, delay: Delay) {
        self.inner.grow_history(delay);
    }

    fn delayed_output(&self, delay: Delay) -> Option<&[f64]> {
        self.inner.delayed_output(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_depth_keeps_only_latest() {
        let mut pop = HistoryPopulation::new(2, 1.0);
        pop.push(vec![2.0, 3.0]).unwrap();
        assert_eq!(pop.delayed_output(Delay::ZERO), Some(&[2.0, 3.0][..]));
        assert!(pop.delayed_output(Delay(1)).is_none());
    }

    #[test]
    fn grown_history_is_padded_with_steady_frames() {
        let mut pop = HistoryPopulation::new(1, 0.25);
        pop.grow_history(Delay(3));
        pop.push_uniform(1.0);
        assert_eq!(pop.delayed_output(Delay(0)), Some(&[1.0][..]));
        assert_eq!(pop.delayed_output(Delay(3)), Some(&[0.25][..]));
        assert!(pop.delayed_output(Delay(4)).is_none());
    }

    #[test]
    fn grow_history_never_shrinks() {
        let mut pop = HistoryPopulation::new(1, 0.0);
        pop.grow_history(Delay(5));
        pop.grow_history(Delay(2));
        assert_eq!(pop.depth(), 5);
    }

    #[test]
    fn push_rejects_wrong_length() {
        let mut pop = HistoryPopulation::new(3, 0.0);
        assert!(pop.push(vec![0.0; 2]).is_err());
    }

    #[test]
    fn noise_is_seeded_and_bounded() {
        let mut a = NoisePopulation::new(16, 5.0, 0.5, 42);
        let mut b = NoisePopulation::new(16, 5.0, 0.5, 42);
        a.advance();
        b.advance();
        assert_eq!(a.latest(), b.latest());
        assert!(a.latest().iter().all(|v| (4.5..=5.5).contains(v)));
    }
}
