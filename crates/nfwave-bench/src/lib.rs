//! Benchmark profiles for the nfwave crates.
//!
//! - [`reference_wave`]: 100x100 torus with cortical parameters, driven by
//!   seeded noise
//! - [`stress_wave`]: 316x316 torus (~100K nodes), same parameters

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use nfwave_core::ConfigError;
use nfwave_propagator::{Propagator, WavePropagator};
use nfwave_space::{LatticeShape, Topology};
use nfwave_test_utils::{cortical_params, NoisePopulation};

/// Time step used by every profile, well inside the Courant bound for
/// [`cortical_params`].
pub const PROFILE_DT: f64 = 1e-4;

/// Build a configured wave propagator over a `rows x cols` torus together
/// with the noise population driving it.
pub fn wave_profile(
    rows: usize,
    cols: usize,
    seed: u64,
) -> Result<(WavePropagator, NoisePopulation), ConfigError> {
    let shape = LatticeShape::grid(rows, cols)?;
    let mut wave = WavePropagator::new(shape, PROFILE_DT, Topology::Torus);
    let mut population = NoisePopulation::new(shape.nodes(), 5.0, 1.0, seed);
    wave.configure(&cortical_params(), &mut population)?;
    Ok((wave, population))
}

/// Reference profile: 100x100 torus (10K nodes).
pub fn reference_wave(seed: u64) -> Result<(WavePropagator, NoisePopulation), ConfigError> {
    wave_profile(100, 100, seed)
}

/// Stress profile: 316x316 torus (~100K nodes).
pub fn stress_wave(seed: u64) -> Result<(WavePropagator, NoisePopulation), ConfigError> {
    wave_profile(316, 316, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_steps() {
        let (mut wave, mut pop) = reference_wave(42).unwrap();
        assert_eq!(wave.shape().nodes(), 10_000);
        for _ in 0..3 {
            pop.advance();
            wave.step(&pop).unwrap();
        }
        assert!(wave.phi().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn profiles_are_deterministic_per_seed() {
        let (mut a, mut pa) = wave_profile(8, 8, 3).unwrap();
        let (mut b, mut pb) = wave_profile(8, 8, 3).unwrap();
        for _ in 0..5 {
            pa.advance();
            pb.advance();
            a.step(&pa).unwrap();
            b.step(&pb).unwrap();
        }
        assert_eq!(a.phi(), b.phi());
    }
}
