//! Integer tick countdowns for the decision and feedback clocks.
//!
//! Time is counted in whole ticks of a fixed granularity, so a countdown
//! started with `n` ticks expires after exactly `n` calls to
//! [`Countdown::tick`]. Conversion to fractions happens only at the view
//! boundary.

/// Number of ticks needed to cover `budget_ms`, rounding up.
pub const fn ticks_for(budget_ms: u32, tick_ms: u16) -> u32 {
    let tick_ms = if tick_ms == 0 { 1 } else { tick_ms as u32 };
    budget_ms.div_ceil(tick_ms)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CountdownState {
    Idle,
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    /// Not counting (never started, stopped, paused or already expired).
    Idle,
    Running {
        remaining: u32,
    },
    /// Reported once, on the tick that reaches zero.
    Expired,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Countdown {
    budget: u32,
    remaining: u32,
    state: CountdownState,
    pausable: bool,
}

impl Countdown {
    /// A countdown that ignores pause requests.
    pub const fn fixed() -> Self {
        Self {
            budget: 0,
            remaining: 0,
            state: CountdownState::Idle,
            pausable: false,
        }
    }

    pub const fn pausable() -> Self {
        Self {
            pausable: true,
            ..Self::fixed()
        }
    }

    pub fn start(&mut self, budget_ticks: u32) {
        self.budget = budget_ticks;
        self.remaining = budget_ticks;
        self.state = CountdownState::Running;
    }

    /// Returns `true` when the countdown moved from running to paused.
    pub fn pause(&mut self) -> bool {
        if !self.pausable || self.state != CountdownState::Running {
            return false;
        }
        self.state = CountdownState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != CountdownState::Paused {
            return false;
        }
        self.state = CountdownState::Running;
        true
    }

    /// Cancel without expiring. Remaining time is kept for display.
    pub fn stop(&mut self) {
        self.state = CountdownState::Idle;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state != CountdownState::Running {
            return TickOutcome::Idle;
        }

        // A zero budget expires on its first tick.
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = CountdownState::Idle;
            return TickOutcome::Expired;
        }

        TickOutcome::Running {
            remaining: self.remaining,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == CountdownState::Paused
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining
    }

    pub fn budget_ticks(&self) -> u32 {
        self.budget
    }

    pub fn remaining_ms(&self, tick_ms: u16) -> u32 {
        self.remaining.saturating_mul(tick_ms as u32)
    }

    /// Remaining share of the budget in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        if self.budget == 0 {
            return 0.0;
        }
        (self.remaining as f32 / self.budget as f32).clamp(0.0, 1.0)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::fixed()
    }
}
