//! Probability values and Bernoulli trials.

use rand::Rng;
use serde::Serialize;

/// A probability in `[0, 1]`.
///
/// Construction rejects values outside the unit interval and NaN, so a
/// held `Probability` is always a valid threshold.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    /// Never succeeds.
    pub const ZERO: Self = Self(0.0);

    /// Always succeeds.
    pub const ONE: Self = Self(1.0);

    /// Wrap `value` if it lies in `[0, 1]`.
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    /// The raw value.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Run one Bernoulli trial.
    ///
    /// Always consumes exactly one uniform draw in `[0, 1)`, and succeeds
    /// when the draw falls below the threshold.
    pub fn trial<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        rng.random::<f64>() < self.0
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn accepts_the_closed_unit_interval() {
        assert_eq!(Probability::new(0.0), Some(Probability::ZERO));
        assert_eq!(Probability::new(1.0), Some(Probability::ONE));
        assert!(Probability::new(0.25).is_some());
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert_eq!(Probability::new(-0.01), None);
        assert_eq!(Probability::new(1.01), None);
        assert_eq!(Probability::new(f64::NAN), None);
        assert_eq!(Probability::new(f64::INFINITY), None);
    }

    #[test]
    fn bounds_are_certain() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(Probability::ONE.trial(&mut rng));
            assert!(!Probability::ZERO.trial(&mut rng));
        }
    }

    #[test]
    fn every_trial_consumes_one_draw() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        let _ = Probability::ZERO.trial(&mut a);
        let _ = Probability::ONE.trial(&mut a);
        let _: f64 = b.random();
        let _: f64 = b.random();
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
