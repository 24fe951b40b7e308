//! Target drawing: where the secret number comes from.
//!
//! The hub draws the target through the [`TargetSource`] trait so tests
//! can script the exact number a game uses. Production code never needs
//! anything but [`UniformTarget`].

use std::ops::RangeInclusive;

use rand::Rng;

/// Draws the secret target for a new game.
pub trait TargetSource: Send + Sync + 'static {
    /// Picks a number from `range` (inclusive on both ends). The range
    /// is never empty; configuration validation rejects that upstream.
    fn pick(&self, range: RangeInclusive<i64>) -> i64;
}

/// Uniform draw over the configured range. The production source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformTarget;

impl TargetSource for UniformTarget {
    fn pick(&self, range: RangeInclusive<i64>) -> i64 {
        rand::rng().random_range(range)
    }
}

/// Always returns the same number. For tests that script a game.
#[derive(Debug, Clone, Copy)]
pub struct FixedTarget(pub i64);

impl TargetSource for FixedTarget {
    fn pick(&self, _range: RangeInclusive<i64>) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_pick_stays_in_range() {
        let source = UniformTarget;
        for _ in 0..1000 {
            let target = source.pick(1..=10);
            assert!((1..=10).contains(&target), "out of range: {target}");
        }
    }

    #[test]
    fn test_uniform_pick_single_point_range() {
        let source = UniformTarget;
        for _ in 0..10 {
            assert_eq!(source.pick(5..=5), 5);
        }
    }

    #[test]
    fn test_uniform_pick_negative_range() {
        let source = UniformTarget;
        for _ in 0..100 {
            let target = source.pick(-10..=-1);
            assert!((-10..=-1).contains(&target), "out of range: {target}");
        }
    }

    #[test]
    fn test_fixed_target_ignores_range() {
        assert_eq!(FixedTarget(7).pick(1..=10), 7);
    }
}
