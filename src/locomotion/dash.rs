//! Locomotion domain: dash ability as an explicit polled state machine.
//!
//! The phase order is always `Ready -> Dashing -> CoolingDown -> Ready`.
//! Timers advance synchronously inside the tick, so resetting the state at
//! any point takes effect on the next tick.

use bevy::prelude::*;

use crate::locomotion::LocomotionTuning;

/// Expiry tolerance in seconds, absorbing f32 drift from summed tick steps.
const TIMER_TOLERANCE: f32 = 1.0e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPhase {
    #[default]
    Ready,
    Dashing,
    CoolingDown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashState {
    phase: DashPhase,
    /// Seconds since entering `phase`.
    elapsed: f32,
}

impl DashState {
    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_dashing(&self) -> bool {
        self.phase == DashPhase::Dashing
    }

    /// Seconds until a dash can be triggered again.
    pub fn remaining_cooldown(&self, tuning: &LocomotionTuning) -> f32 {
        match self.phase {
            DashPhase::Ready => 0.0,
            DashPhase::Dashing => {
                (tuning.dash_duration - self.elapsed).max(0.0) + tuning.dash_cooldown
            }
            DashPhase::CoolingDown => (tuning.dash_cooldown - self.elapsed).max(0.0),
        }
    }

    /// Run one tick of the machine and return the phase that governed it.
    ///
    /// A press in `Ready` starts the dash this tick. Presses in any other phase
    /// are ignored. The timer is incremented and then checked, so a phase whose
    /// length is a whole number of ticks ends exactly on a tick boundary; the
    /// returned phase is the one in effect before that boundary.
    pub fn advance(&mut self, dash_pressed: bool, dt: f32, tuning: &LocomotionTuning) -> DashPhase {
        if self.phase == DashPhase::Ready && dash_pressed {
            self.enter(DashPhase::Dashing);
        }

        let active = self.phase;
        if self.phase != DashPhase::Ready {
            self.elapsed += dt;
            // Ready never expires, so this settles in at most two steps.
            while let Some(next) = self.expired(tuning) {
                self.enter(next);
            }
        }

        active
    }

    /// Abort any dash or cooldown; the next press starts a fresh dash.
    pub fn cancel(&mut self) {
        if self.phase != DashPhase::Ready {
            self.enter(DashPhase::Ready);
        }
    }

    fn expired(&self, tuning: &LocomotionTuning) -> Option<DashPhase> {
        match self.phase {
            DashPhase::Ready => None,
            DashPhase::Dashing if self.elapsed + TIMER_TOLERANCE >= tuning.dash_duration => {
                Some(DashPhase::CoolingDown)
            }
            DashPhase::CoolingDown if self.elapsed + TIMER_TOLERANCE >= tuning.dash_cooldown => {
                Some(DashPhase::Ready)
            }
            _ => None,
        }
    }

    fn enter(&mut self, phase: DashPhase) {
        debug!("Dash phase: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.elapsed = 0.0;
    }
}
