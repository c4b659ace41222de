//! Plays slide-outs and reports when each one finishes.

use log::debug;

use spotfake_core::{
    render::{AnimationFrame, AnimationKind, AnimationSpec},
    round::{Phase, RoundEvent},
};

pub const DEFAULT_SLIDE_MS: u16 = 450;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ActiveSlide {
    generation: u32,
    spec: AnimationSpec,
}

#[derive(Debug)]
pub struct SlideCoordinator {
    duration_ms: u16,
    active: Option<ActiveSlide>,
}

impl SlideCoordinator {
    pub const fn new(duration_ms: u16) -> Self {
        Self {
            duration_ms,
            active: None,
        }
    }

    pub fn observe(&mut self, event: RoundEvent, now_ms: u64) {
        match event {
            RoundEvent::PhaseChanged {
                generation,
                phase: Phase::Transitioning,
                slide: Some(direction),
            } => {
                self.active = Some(ActiveSlide {
                    generation,
                    spec: AnimationSpec::new(
                        AnimationKind::for_slide(direction),
                        now_ms,
                        self.duration_ms,
                    ),
                });
            }
            RoundEvent::PhaseChanged { generation, .. } => {
                if self.active.is_some_and(|slide| slide.generation != generation) {
                    debug!("slide: superseded by generation {}", generation);
                    self.active = None;
                }
            }
            RoundEvent::FeedbackPulse { .. } => {}
        }
    }

    pub fn frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.active.and_then(|slide| slide.spec.frame(now_ms))
    }

    /// Generation whose slide just finished, if any.
    pub fn poll_finished(&mut self, now_ms: u64) -> Option<u32> {
        let slide = self.active?;
        if !slide.spec.is_finished(now_ms) {
            return None;
        }
        self.active = None;
        Some(slide.generation)
    }
}

impl Default for SlideCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDE_MS)
    }
}

#[cfg(test)]
mod tests {
    use spotfake_core::round::SlideDirection;

    use super::*;

    fn transition(generation: u32) -> RoundEvent {
        RoundEvent::PhaseChanged {
            generation,
            phase: Phase::Transitioning,
            slide: Some(SlideDirection::Right),
        }
    }

    #[test]
    fn reports_generation_once_slide_finishes() {
        let mut slides = SlideCoordinator::new(400);
        slides.observe(transition(5), 1_000);

        assert_eq!(
            slides.frame(1_200).map(|frame| frame.kind),
            Some(AnimationKind::SlideRight)
        );
        assert_eq!(slides.poll_finished(1_399), None);
        assert_eq!(slides.poll_finished(1_400), Some(5));
        assert_eq!(slides.poll_finished(1_500), None);
    }

    #[test]
    fn newer_phase_cancels_running_slide() {
        let mut slides = SlideCoordinator::default();
        slides.observe(transition(5), 0);
        slides.observe(
            RoundEvent::PhaseChanged {
                generation: 6,
                phase: Phase::AwaitingAnswer,
                slide: None,
            },
            100,
        );
        assert_eq!(slides.poll_finished(10_000), None);
    }
}
