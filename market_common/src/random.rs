//! Randomness behind a trait so generation can be replayed.
//!
//! Production code draws from `StdRandom` (OS-seeded, or seeded from a `u64`
//! for reproducible sessions). `ScriptedRandom`, available under the `testing`
//! feature, replays fixed draws and makes the generation formulas exactly
//! checkable.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws used by the generator and the analyzer.
pub trait RandomSource {
    /// Uniform real from the closed interval `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform integer from the half-open interval `[low, high)`.
    fn uniform_int(&mut self, low: u64, high: u64) -> u64;
}

/// `StdRng`-backed source. `Send`, so it can move into the refresh task.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.random_range(low..=high)
    }

    fn uniform_int(&mut self, low: u64, high: u64) -> u64 {
        self.rng.random_range(low..high)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Replays scripted draws in order, cycling when exhausted.
///
/// Values are returned as-is, clamped into the requested interval, so a script
/// of `[1.0]` always yields the upper bound of `uniform`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    reals: Vec<f64>,
    ints: Vec<u64>,
    next_real: usize,
    next_int: usize,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedRandom {
    /// Creates a source replaying `reals` for `uniform` and `ints` for `uniform_int`.
    pub fn new(reals: Vec<f64>, ints: Vec<u64>) -> Self {
        Self {
            reals,
            ints,
            next_real: 0,
            next_int: 0,
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if self.reals.is_empty() {
            return low;
        }
        let value = self.reals[self.next_real % self.reals.len()];
        self.next_real += 1;
        value.clamp(low, high)
    }

    fn uniform_int(&mut self, low: u64, high: u64) -> u64 {
        if self.ints.is_empty() || high <= low {
            return low;
        }
        let value = self.ints[self.next_int % self.ints.len()];
        self.next_int += 1;
        value.clamp(low, high - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_repeat() {
        let mut a = StdRandom::seeded(7);
        let mut b = StdRandom::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.uniform(-1.0, 1.0), b.uniform(-1.0, 1.0));
            assert_eq!(a.uniform_int(10, 20), b.uniform_int(10, 20));
        }
    }

    #[test]
    fn test_std_random_stays_in_bounds() {
        let mut rng = StdRandom::from_entropy();
        for _ in 0..1000 {
            let x = rng.uniform(-1.0, 1.0);
            assert!((-1.0..=1.0).contains(&x));
            let n = rng.uniform_int(500, 1500);
            assert!((500..1500).contains(&n));
        }
    }

    #[test]
    fn test_scripted_cycles_and_clamps() {
        let mut rng = ScriptedRandom::new(vec![0.5, 3.0], vec![5, 99]);
        assert_eq!(rng.uniform(-1.0, 1.0), 0.5);
        assert_eq!(rng.uniform(-1.0, 1.0), 1.0);
        assert_eq!(rng.uniform(-1.0, 1.0), 0.5);
        assert_eq!(rng.uniform_int(0, 10), 5);
        assert_eq!(rng.uniform_int(0, 10), 9);
    }

    #[test]
    fn test_empty_script_returns_low() {
        let mut rng = ScriptedRandom::default();
        assert_eq!(rng.uniform(-1.0, 1.0), -1.0);
        assert_eq!(rng.uniform_int(3, 8), 3);
    }
}
