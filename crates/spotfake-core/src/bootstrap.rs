//! Intro countdown that runs once before the first card.

use log::{debug, info};

use crate::config::QuizConfig;

const CUE_INTERVAL_MS: u32 = 1_000;
const HEADLINE_SWITCH_MS: u32 = 2_500;
const MAX_CATCHUP_STEPS: u32 = 64;

pub const HEADLINE_OPENING: &str = "Are you smarter than AI?";
pub const HEADLINE_CLOSING: &str = "Can you spot a fake document?";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionMode {
    Countdown,
    Playing,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BootstrapTick {
    Unchanged,
    Stepped,
    /// Countdown hit zero; the exit animation just started.
    Exiting,
    EnteredPlaying,
}

#[derive(Clone, Copy, Debug)]
pub struct SessionBootstrap {
    mode: SessionMode,
    remaining_ms: u32,
    step_ms: u16,
    next_step_ms: u64,
    exit_ms: u16,
    exit_at_ms: Option<u64>,
    pending_cues: u8,
}

impl SessionBootstrap {
    pub fn new(config: &QuizConfig, now_ms: u64) -> Self {
        let step_ms = config.countdown_step_ms.max(1);
        info!("bootstrap: countdown started from {}ms", config.countdown_ms);
        Self {
            mode: SessionMode::Countdown,
            remaining_ms: config.countdown_ms,
            step_ms,
            next_step_ms: now_ms + step_ms as u64,
            exit_ms: config.countdown_exit_ms,
            exit_at_ms: None,
            pending_cues: 0,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Zero reached and the exit animation is running.
    pub fn is_exiting(&self) -> bool {
        self.mode == SessionMode::Countdown && self.exit_at_ms.is_some()
    }

    pub fn headline(&self) -> &'static str {
        if self.remaining_ms >= HEADLINE_SWITCH_MS {
            HEADLINE_OPENING
        } else {
            HEADLINE_CLOSING
        }
    }

    pub fn drain_tick_cues(&mut self) -> u8 {
        core::mem::take(&mut self.pending_cues)
    }

    pub fn tick(&mut self, now_ms: u64) -> BootstrapTick {
        if self.mode == SessionMode::Playing {
            return BootstrapTick::Unchanged;
        }

        if let Some(exit_at_ms) = self.exit_at_ms {
            if now_ms < exit_at_ms {
                return BootstrapTick::Unchanged;
            }
            self.mode = SessionMode::Playing;
            info!("bootstrap: countdown finished, entering play");
            return BootstrapTick::EnteredPlaying;
        }

        let mut result = BootstrapTick::Unchanged;
        let mut steps = 0u32;
        while now_ms >= self.next_step_ms && steps < MAX_CATCHUP_STEPS {
            let at_ms = self.next_step_ms;
            self.next_step_ms += self.step_ms as u64;
            steps += 1;

            let before = self.remaining_ms;
            self.remaining_ms = before.saturating_sub(self.step_ms as u32);
            result = BootstrapTick::Stepped;

            if self.remaining_ms > 0
                && before.div_ceil(CUE_INTERVAL_MS) != self.remaining_ms.div_ceil(CUE_INTERVAL_MS)
            {
                self.pending_cues = self.pending_cues.saturating_add(1);
                debug!("bootstrap: tick cue at {}ms remaining", self.remaining_ms);
            }

            if self.remaining_ms == 0 {
                self.exit_at_ms = Some(at_ms + self.exit_ms as u64);
                return BootstrapTick::Exiting;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until(bootstrap: &mut SessionBootstrap, from_ms: u64, to_ms: u64, step_ms: u64) {
        let mut now = from_ms;
        while now <= to_ms {
            bootstrap.tick(now);
            now += step_ms;
        }
    }

    #[test]
    fn counts_down_in_steps_and_cues_each_second() {
        let mut bootstrap = SessionBootstrap::new(&QuizConfig::default(), 0);
        assert_eq!(bootstrap.headline(), HEADLINE_OPENING);

        assert_eq!(bootstrap.tick(100), BootstrapTick::Stepped);
        assert_eq!(bootstrap.remaining_ms(), 4_900);
        assert_eq!(bootstrap.drain_tick_cues(), 0);

        run_until(&mut bootstrap, 200, 1_000, 100);
        assert_eq!(bootstrap.remaining_ms(), 4_000);
        assert_eq!(bootstrap.drain_tick_cues(), 1);

        run_until(&mut bootstrap, 1_100, 2_500, 100);
        assert_eq!(bootstrap.headline(), HEADLINE_CLOSING);

        run_until(&mut bootstrap, 2_600, 4_900, 100);
        assert_eq!(bootstrap.drain_tick_cues(), 3);
        assert_eq!(bootstrap.mode(), SessionMode::Countdown);
    }

    #[test]
    fn exits_after_fly_out_and_never_returns() {
        let mut bootstrap = SessionBootstrap::new(&QuizConfig::default(), 0);
        run_until(&mut bootstrap, 100, 4_900, 100);
        assert!(!bootstrap.is_exiting());

        assert_eq!(bootstrap.tick(5_000), BootstrapTick::Exiting);
        assert!(bootstrap.is_exiting());
        assert_eq!(bootstrap.remaining_ms(), 0);

        assert_eq!(bootstrap.tick(5_799), BootstrapTick::Unchanged);
        assert_eq!(bootstrap.tick(5_800), BootstrapTick::EnteredPlaying);
        assert_eq!(bootstrap.mode(), SessionMode::Playing);
        assert_eq!(bootstrap.tick(20_000), BootstrapTick::Unchanged);
        assert_eq!(bootstrap.mode(), SessionMode::Playing);
    }

    #[test]
    fn late_poll_catches_up_to_zero() {
        let mut bootstrap = SessionBootstrap::new(&QuizConfig::default(), 0);
        assert_eq!(bootstrap.tick(6_000), BootstrapTick::Exiting);
        assert_eq!(bootstrap.drain_tick_cues(), 4);
        assert_eq!(bootstrap.tick(6_000), BootstrapTick::EnteredPlaying);
    }
}
