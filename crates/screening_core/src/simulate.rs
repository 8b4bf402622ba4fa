//! Result simulation.
//!
//! Three factors in `[0, 1)` are blended into a weighted score:
//!
//! | factor | source                    | weight |
//! |--------|---------------------------|--------|
//! | size   | `(size % 1000) / 1000`    | 0.4    |
//! | name   | `(name_len % 10) / 10`    | 0.3    |
//! | time   | `(epoch_ms % 1000) / 1000`| 0.3    |
//!
//! The score sets the base confidence and picks the classification tier.
//! Randomness and the clock come in through [`Entropy`] so tests can pin them.

use crate::model::{Classification, Outcome, SelectedFile};
use rand::Rng;
use rand::rngs::ThreadRng;

const SIZE_WEIGHT: f64 = 0.4;
const NAME_WEIGHT: f64 = 0.3;
const TIME_WEIGHT: f64 = 0.3;

const MIN_CONFIDENCE: f64 = 55.0;
const MAX_CONFIDENCE: f64 = 98.0;
const VARIATION_SPAN: f64 = 20.0;

/// Source of wall-clock time and uniform draws.
pub trait Entropy {
    /// Milliseconds since the Unix epoch.
    fn epoch_millis(&mut self) -> u64;
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// System clock plus a `rand` generator.
pub struct SystemEntropy<R = ThreadRng> {
    rng: R,
}

impl SystemEntropy<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for SystemEntropy<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SystemEntropy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Entropy for SystemEntropy<R> {
    fn epoch_millis(&mut self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }

    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Normalized inputs of the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factors {
    pub size: f64,
    pub name: f64,
    pub time: f64,
}

impl Factors {
    pub fn new(size: u64, name_len: usize, epoch_millis: u64) -> Self {
        Self {
            size: (size % 1000) as f64 / 1000.0,
            name: (name_len % 10) as f64 / 10.0,
            time: (epoch_millis % 1000) as f64 / 1000.0,
        }
    }

    /// Blend of the three factors, in `[0, 1)`.
    pub fn weighted_score(&self) -> f64 {
        self.size * SIZE_WEIGHT + self.name * NAME_WEIGHT + self.time * TIME_WEIGHT
    }
}

pub fn base_confidence(score: f64) -> f64 {
    50.0 + score * 30.0
}

/// Confidence percentage for `score` given a variation draw in `[0, 1)`.
pub fn confidence(score: f64, variation: f64) -> u8 {
    let raw = base_confidence(score) + variation * VARIATION_SPAN;
    raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE).floor() as u8
}

/// Tiered classification. A higher score lowers the bar for `Positive`.
pub fn classify(score: f64, threshold: f64) -> Classification {
    let bar = if score > 0.7 {
        0.3
    } else if score > 0.4 {
        0.5
    } else {
        0.7
    };
    if threshold > bar {
        Classification::Positive
    } else {
        Classification::Negative
    }
}

/// Simulates an analysis of `file`.
///
/// Draws the confidence variation first and the classification threshold
/// second.
pub fn simulate(file: &SelectedFile, entropy: &mut impl Entropy) -> Outcome {
    let factors = Factors::new(file.size, file.name_len(), entropy.epoch_millis());
    let score = factors.weighted_score();
    let confidence = confidence(score, entropy.unit());
    let classification = classify(score, entropy.unit());
    tracing::debug!(?factors, score, confidence, ?classification, "simulated analysis");
    Outcome {
        classification,
        confidence,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;
    use std::collections::VecDeque;

    /// Fixed clock and a queue of draws.
    pub(crate) struct Scripted {
        pub millis: u64,
        pub draws: VecDeque<f64>,
    }

    impl Scripted {
        pub(crate) fn new(millis: u64, draws: &[f64]) -> Self {
            Self {
                millis,
                draws: draws.iter().copied().collect(),
            }
        }
    }

    impl Entropy for Scripted {
        fn epoch_millis(&mut self) -> u64 {
            self.millis
        }

        fn unit(&mut self) -> f64 {
            self.draws.pop_front().expect("script ran out of draws")
        }
    }

    #[test]
    fn factors_use_remainders() {
        let f = Factors::new(1234, 8, 1_700_000_000_900);
        assert_relative_eq!(f.size, 0.234);
        assert_relative_eq!(f.name, 0.8);
        assert_relative_eq!(f.time, 0.9);
        assert_relative_eq!(f.weighted_score(), 0.6036, epsilon = 1e-12);
    }

    #[test]
    fn weighted_score_stays_below_one() {
        let f = Factors::new(999, 9, 999);
        let score = f.weighted_score();
        assert!(score < 1.0);
        assert_relative_eq!(score, 0.999 * 0.4 + 0.9 * 0.3 + 0.999 * 0.3, epsilon = 1e-12);
    }

    #[rstest]
    #[case(0.0, 0.0, 55)]
    #[case(0.0, 0.99, 69)]
    #[case(0.5, 0.0, 65)]
    #[case(0.5, 0.5, 75)]
    #[case(0.99, 0.99, 98)]
    #[case(0.9, 0.5, 87)]
    fn confidence_follows_formula(#[case] score: f64, #[case] variation: f64, #[case] expected: u8) {
        assert_eq!(confidence(score, variation), expected);
    }

    #[test]
    fn confidence_is_always_clamped() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let f = Factors::new(rng.random(), rng.random_range(0..64), rng.random());
            let c = confidence(f.weighted_score(), rng.random::<f64>());
            assert!((55..=98).contains(&c), "confidence {c} out of range");
        }
    }

    #[rstest]
    #[case(0.7 + 1e-9, 0.31, Classification::Positive)]
    #[case(0.7 + 1e-9, 0.29, Classification::Negative)]
    #[case(0.7 + 1e-9, 0.3, Classification::Negative)]
    #[case(0.7, 0.31, Classification::Negative)]
    #[case(0.7, 0.51, Classification::Positive)]
    #[case(0.4 + 1e-9, 0.51, Classification::Positive)]
    #[case(0.4 + 1e-9, 0.49, Classification::Negative)]
    #[case(0.4 + 1e-9, 0.5, Classification::Negative)]
    #[case(0.4, 0.69, Classification::Negative)]
    #[case(0.4, 0.71, Classification::Positive)]
    #[case(0.0, 0.71, Classification::Positive)]
    #[case(0.0, 0.7, Classification::Negative)]
    fn classification_tiers(
        #[case] score: f64,
        #[case] threshold: f64,
        #[case] expected: Classification,
    ) {
        assert_eq!(classify(score, threshold), expected);
    }

    #[test]
    fn simulate_draws_variation_before_threshold() {
        // score 0.6036: tier 2, base 68.108
        let file = SelectedFile::new("scan.png", 1234);
        let mut entropy = Scripted::new(900, &[0.6, 0.51]);
        let outcome = simulate(&file, &mut entropy);
        assert_eq!(outcome.classification, Classification::Positive);
        assert_eq!(outcome.confidence, 80);
        assert!(entropy.draws.is_empty());

        let mut swapped = Scripted::new(900, &[0.51, 0.6]);
        let outcome = simulate(&file, &mut swapped);
        assert_eq!(outcome.classification, Classification::Positive);
        assert_eq!(outcome.confidence, 78);
    }

    #[test]
    fn system_entropy_draws_in_unit_interval() {
        let mut entropy = SystemEntropy::with_rng(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let u = entropy.unit();
            assert!((0.0..1.0).contains(&u));
        }
        assert!(entropy.epoch_millis() > 1_600_000_000_000);
    }
}
