//! Fixed-timestep clock.
//!
//! Converts a variable wall-clock frame delta into a run of fixed-size
//! physics steps so integration never runs at the frame rate.

use crate::constants::FIXED_TIMESTEP;
use crate::error::{Result, SimError};

/// What to do with time left over after the last full fixed step of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    /// Emit the leftover as one partial step so simulated time matches
    /// wall-clock time at the end of every frame.
    #[default]
    Flush,
    /// Keep the leftover in the accumulator for the next frame.
    Carry,
}

#[derive(Debug, Clone, Copy)]
pub struct SimulationClock {
    fixed_step: f32,
    accumulated_time: f32,
    policy: RemainderPolicy,
}

impl SimulationClock {
    pub fn new(fixed_step: f32, policy: RemainderPolicy) -> Result<Self> {
        if !fixed_step.is_finite() || fixed_step <= 0.0 {
            return Err(SimError::InvalidTimestep(fixed_step));
        }
        Ok(Self {
            fixed_step,
            accumulated_time: 0.0,
            policy,
        })
    }

    pub fn with_policy(policy: RemainderPolicy) -> Self {
        Self {
            fixed_step: FIXED_TIMESTEP,
            accumulated_time: 0.0,
            policy,
        }
    }

    pub fn fixed_step(&self) -> f32 {
        self.fixed_step
    }

    pub fn policy(&self) -> RemainderPolicy {
        self.policy
    }

    /// Time not yet handed out as a step
    pub fn accumulated_time(&self) -> f32 {
        self.accumulated_time
    }

    pub fn reset(&mut self) {
        self.accumulated_time = 0.0;
    }

    /// Feed one frame's elapsed time and get back the steps to simulate.
    ///
    /// A zero, negative or non-finite `frame_dt` yields no steps and leaves
    /// the accumulator untouched.
    pub fn advance(&mut self, frame_dt: f32) -> FrameSteps {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return FrameSteps::empty(self.fixed_step);
        }

        self.accumulated_time += frame_dt;

        let mut full_steps = 0u32;
        while self.accumulated_time >= self.fixed_step {
            self.accumulated_time -= self.fixed_step;
            full_steps += 1;
        }

        let partial = match self.policy {
            RemainderPolicy::Flush if self.accumulated_time > 0.0 => {
                Some(std::mem::take(&mut self.accumulated_time))
            }
            _ => None,
        };

        FrameSteps {
            fixed_step: self.fixed_step,
            full_steps,
            partial,
        }
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::with_policy(RemainderPolicy::default())
    }
}

/// Steps produced by one call to [`SimulationClock::advance`], in the order
/// they must be applied: every full fixed step first, then the partial one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSteps {
    fixed_step: f32,
    full_steps: u32,
    partial: Option<f32>,
}

impl FrameSteps {
    fn empty(fixed_step: f32) -> Self {
        Self {
            fixed_step,
            full_steps: 0,
            partial: None,
        }
    }

    pub fn full_steps(&self) -> u32 {
        self.full_steps
    }

    pub fn partial(&self) -> Option<f32> {
        self.partial
    }
}

impl Iterator for FrameSteps {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.full_steps > 0 {
            self.full_steps -= 1;
            return Some(self.fixed_step);
        }
        self.partial.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.full_steps as usize + usize::from(self.partial.is_some());
        (n, Some(n))
    }
}

impl ExactSizeIterator for FrameSteps {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_helpers::approx_eq_f32;

    #[test]
    fn splits_frame_into_full_and_partial_steps() {
        let mut clock = SimulationClock::default();
        let steps: Vec<f32> = clock.advance(0.05).collect();

        assert_eq!(steps.len(), 4);
        for dt in &steps[..3] {
            assert_eq!(*dt, FIXED_TIMESTEP);
        }
        assert!(approx_eq_f32(steps[3], 0.002, 1e-6));

        let total: f32 = steps.iter().sum();
        assert!(approx_eq_f32(total, 0.05, 1e-6));
        assert_eq!(clock.accumulated_time(), 0.0);
    }

    #[test]
    fn non_positive_frame_delta_emits_nothing() {
        let mut clock = SimulationClock::default();
        assert_eq!(clock.advance(0.0).count(), 0);
        assert_eq!(clock.advance(-0.3).count(), 0);
        assert_eq!(clock.advance(f32::NAN).count(), 0);
        assert_eq!(clock.accumulated_time(), 0.0);
    }

    #[test]
    fn exact_multiple_has_no_partial_step() {
        let mut clock = SimulationClock::new(0.25, RemainderPolicy::Flush).unwrap();
        let steps = clock.advance(0.5);
        assert_eq!(steps.full_steps(), 2);
        assert_eq!(steps.partial(), None);
    }

    #[test]
    fn short_frame_is_a_single_partial_step() {
        let mut clock = SimulationClock::default();
        let steps: Vec<f32> = clock.advance(0.005).collect();
        assert_eq!(steps, vec![0.005]);
    }

    #[test]
    fn carry_policy_keeps_remainder_for_next_frame() {
        let mut clock = SimulationClock::new(0.25, RemainderPolicy::Carry).unwrap();

        assert_eq!(clock.advance(0.125).count(), 0);
        assert_eq!(clock.accumulated_time(), 0.125);

        let steps = clock.advance(0.5);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps.sum::<f32>(), 0.5);
        assert_eq!(clock.accumulated_time(), 0.125);
    }

    #[test]
    fn rejects_invalid_fixed_step() {
        assert!(SimulationClock::new(0.0, RemainderPolicy::Flush).is_err());
        assert!(SimulationClock::new(-1.0, RemainderPolicy::Flush).is_err());
        assert!(SimulationClock::new(f32::INFINITY, RemainderPolicy::Carry).is_err());
    }
}
