//! Simulated waitlist position that improves on correct answers.

use log::debug;

use crate::config::LedgerConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LedgerState {
    pub queue_position: u32,
    pub total_participants: u32,
    pub last_delta: Option<i32>,
    step: u32,
}

impl LedgerState {
    pub fn new(config: LedgerConfig) -> Self {
        let total_participants = config.total_participants.max(1);
        Self {
            queue_position: config.initial_position.clamp(1, total_participants),
            total_participants,
            last_delta: None,
            step: config.step,
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Move up by one step, never past first place.
    #[must_use]
    pub fn apply_correct(self) -> Self {
        let delta = i32::try_from(self.step).unwrap_or(i32::MAX);
        Self {
            queue_position: self.queue_position.saturating_sub(self.step).max(1),
            last_delta: Some(-delta),
            ..self
        }
    }

    /// Share of the queue still ahead of the player, for display only.
    pub fn progress_fraction(&self) -> f32 {
        (self.queue_position as f32 / self.total_participants.max(1) as f32).clamp(0.0, 1.0)
    }
}

/// Ledger plus the cosmetic timer that hides the last delta.
///
/// The delta timer runs on its own deadline and is not tied to the round
/// phase: a later correct answer simply pushes the deadline out.
#[derive(Clone, Copy, Debug)]
pub struct Ledger {
    state: LedgerState,
    delta_display_ms: u16,
    delta_clear_at_ms: Option<u64>,
}

impl Ledger {
    pub fn new(config: LedgerConfig, delta_display_ms: u16) -> Self {
        Self {
            state: LedgerState::new(config),
            delta_display_ms,
            delta_clear_at_ms: None,
        }
    }

    pub fn state(&self) -> LedgerState {
        self.state
    }

    pub fn record_correct(&mut self, now_ms: u64) {
        let before = self.state.queue_position;
        self.state = self.state.apply_correct();
        self.delta_clear_at_ms = Some(now_ms + self.delta_display_ms as u64);
        debug!(
            "ledger: position {} -> {} of {}",
            before, self.state.queue_position, self.state.total_participants
        );
    }

    /// Returns `true` when the visible delta was cleared on this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.delta_clear_at_ms {
            Some(due) if now_ms >= due => {
                self.delta_clear_at_ms = None;
                self.state.last_delta = None;
                true
            }
            _ => false,
        }
    }
}
