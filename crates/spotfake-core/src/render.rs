//! View models and animation metadata handed to host renderers.

use crate::{
    catalog::{Category, Difficulty},
    round::{Phase, SlideDirection},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    FlyOut,
    Pulse,
    Shake,
}

impl AnimationKind {
    pub const fn for_slide(direction: SlideDirection) -> Self {
        match direction {
            SlideDirection::Left => Self::SlideLeft,
            SlideDirection::Right => Self::SlideRight,
        }
    }

    /// Correct answers pulse, wrong ones shake.
    pub const fn for_feedback(correct: bool) -> Self {
        if correct { Self::Pulse } else { Self::Shake }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn is_finished(self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms.max(1) as u64
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        if self.is_finished(now_ms) {
            return None;
        }

        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutcomeView<'a> {
    pub correct: bool,
    pub timed_out: bool,
    pub truth_authentic: bool,
    /// Key indicators after a correct call, the "when wrong" note otherwise.
    pub explanation: &'a str,
    pub detection_clues: &'a [&'static str],
    pub security_features: &'a [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundView<'a> {
    pub phase: Phase,
    pub round_number: u32,
    pub label: &'a str,
    pub image_ref: &'a str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub description: &'a str,
    /// 1.0 when the decision clock is full.
    pub decision_fraction: f32,
    pub feedback_fraction: f32,
    pub feedback_paused: bool,
    pub outcome: Option<OutcomeView<'a>>,
    pub rank_label: &'a str,
    pub delta_label: Option<&'a str>,
    pub progress_fraction: f32,
    pub signup_visible: bool,
    pub animation: Option<AnimationFrame>,
}

/// App-level view model consumed by host renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    Loading {
        message: &'a str,
    },
    Countdown {
        headline: &'a str,
        remaining_label: &'a str,
        remaining_ms: u32,
        exiting: bool,
        animation: Option<AnimationFrame>,
    },
    Round(RoundView<'a>),
}
