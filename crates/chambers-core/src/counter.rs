//! Count-up animation for headline statistics.
//!
//! Each counter climbs from zero to its target in equal steps, one per tick,
//! rounding to the nearest whole number and never overshooting. The host
//! drives [`CounterAnimation::tick`] from an interval timer.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    targets: Vec<u64>,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    /// Plans an animation of `duration`, advancing once per `tick`.
    ///
    /// Always takes at least one step.
    pub fn new(targets: Vec<u64>, duration: Duration, tick: Duration) -> Self {
        let steps = if tick.is_zero() {
            1
        } else {
            (duration.as_millis() / tick.as_millis().max(1)).clamp(1, u32::MAX as u128) as u32
        };
        Self {
            targets,
            steps,
            step: 0,
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Advances one step. Returns `true` while more steps remain.
    pub fn tick(&mut self) -> bool {
        if !self.is_finished() {
            self.step += 1;
        }
        !self.is_finished()
    }

    /// Displayed value of every counter at the current step.
    pub fn values(&self) -> Vec<u64> {
        self.targets
            .iter()
            .map(|&target| value_at(target, self.step, self.steps))
            .collect()
    }
}

/// Value shown for `target` after `step` of `steps`.
pub fn value_at(target: u64, step: u32, steps: u32) -> u64 {
    if steps == 0 {
        return target;
    }
    let per_step = target as f64 / f64::from(steps);
    let value = (per_step * f64::from(step)).round() as u64;
    value.min(target)
}

/// Converts a CMS number into a counter target.
///
/// Negative and non-finite values display as zero.
pub fn target_from(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animation(targets: Vec<u64>) -> CounterAnimation {
        CounterAnimation::new(
            targets,
            Duration::from_millis(2000),
            Duration::from_millis(20),
        )
    }

    #[test]
    fn test_step_count() {
        assert_eq!(animation(vec![10]).steps(), 100);
        let instant = CounterAnimation::new(vec![5], Duration::ZERO, Duration::from_millis(20));
        assert_eq!(instant.steps(), 1);
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(animation(vec![500, 25]).values(), vec![0, 0]);
    }

    #[test]
    fn test_midpoint_rounds() {
        let mut anim = animation(vec![500, 25]);
        for _ in 0..50 {
            anim.tick();
        }
        // 25 / 100 * 50 = 12.5, rounded up
        assert_eq!(anim.values(), vec![250, 13]);
    }

    #[test]
    fn test_finishes_on_targets() {
        let mut anim = animation(vec![1200, 7, 0]);
        let mut ticks = 0;
        while anim.tick() {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 100);
        assert!(anim.is_finished());
        assert_eq!(anim.values(), vec![1200, 7, 0]);

        // Ticking past the end is harmless.
        assert!(!anim.tick());
        assert_eq!(anim.step(), 100);
    }

    #[test]
    fn test_never_overshoots() {
        for step in 0..=100 {
            assert!(value_at(3, step, 100) <= 3);
        }
    }

    #[test]
    fn test_target_from_cms_number() {
        assert_eq!(target_from(149.6), 150);
        assert_eq!(target_from(-3.0), 0);
        assert_eq!(target_from(f64::NAN), 0);
    }
}
