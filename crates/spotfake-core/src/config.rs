//! Tunable timings and ledger parameters.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub initial_position: u32,
    pub total_participants: u32,
    pub step: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            initial_position: 23_085,
            total_participants: 49_747,
            step: 50,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuizConfig {
    /// Granularity of both round countdowns.
    pub tick_ms: u16,
    pub decision_budget_ms: u32,
    pub feedback_budget_ms: u32,
    /// Delay between locking an answer and showing feedback.
    pub settle_delay_ms: u16,
    pub delta_display_ms: u16,
    pub countdown_ms: u32,
    pub countdown_step_ms: u16,
    /// Fly-out animation between the countdown and the first card.
    pub countdown_exit_ms: u16,
    pub feedback_pulse_ms: u16,
    /// Guesses between two signup prompts.
    pub signup_every: u16,
    pub ledger: LedgerConfig,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            decision_budget_ms: 10_000,
            feedback_budget_ms: 3_500,
            settle_delay_ms: 500,
            delta_display_ms: 900,
            countdown_ms: 5_000,
            countdown_step_ms: 100,
            countdown_exit_ms: 800,
            feedback_pulse_ms: 600,
            signup_every: 3,
            ledger: LedgerConfig::default(),
        }
    }
}

impl QuizConfig {
    pub const fn with_tick_ms(mut self, tick_ms: u16) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub const fn with_decision_budget_ms(mut self, decision_budget_ms: u32) -> Self {
        self.decision_budget_ms = decision_budget_ms;
        self
    }

    pub const fn with_feedback_budget_ms(mut self, feedback_budget_ms: u32) -> Self {
        self.feedback_budget_ms = feedback_budget_ms;
        self
    }

    pub const fn with_countdown_ms(mut self, countdown_ms: u32) -> Self {
        self.countdown_ms = countdown_ms;
        self
    }

    pub const fn with_signup_every(mut self, signup_every: u16) -> Self {
        self.signup_every = signup_every;
        self
    }

    pub const fn with_ledger(mut self, ledger: LedgerConfig) -> Self {
        self.ledger = ledger;
        self
    }

    /// Replace degenerate values so every clock makes progress.
    pub fn normalized(mut self) -> Self {
        self.tick_ms = self.tick_ms.max(1);
        self.countdown_step_ms = self.countdown_step_ms.max(1);
        self.signup_every = self.signup_every.max(1);
        self.ledger.total_participants = self.ledger.total_participants.max(1);
        self.ledger.initial_position = self
            .ledger
            .initial_position
            .clamp(1, self.ledger.total_participants);
        self
    }
}
