//! Plain-text renderer for ANSI terminals.

use core::fmt::Write;

use spotfake_core::{
    render::{AnimationFrame, AnimationKind, OutcomeView, RoundView, Screen},
    round::Phase,
    text_policy::{EXCERPT_MAX_CHARS, excerpt},
};

use super::{FrameRenderer, TextFrame};

const BAR_WIDTH: usize = 30;
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";
const HELP_LINE: &str = "[f] fake  [r] real  [c] continue  [h] hover  [x] dismiss  [q] quit";

#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    clear_screen: bool,
    slide: Option<AnimationFrame>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            clear_screen: true,
            slide: None,
        }
    }
}

impl TextRenderer {
    pub const fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Slide-out progress owned by the host coordinator.
    pub fn set_slide(&mut self, slide: Option<AnimationFrame>) {
        self.slide = slide;
    }

    fn render_countdown(
        &self,
        frame: &mut TextFrame,
        headline: &str,
        remaining_label: &str,
        exiting: bool,
        animation: Option<AnimationFrame>,
    ) -> core::fmt::Result {
        writeln!(frame, "{headline}")?;
        writeln!(frame)?;
        if exiting {
            let pct = animation.map(|a| a.progress_pct).unwrap_or(100);
            let indent = (pct as usize * BAR_WIDTH) / 100;
            writeln!(frame, "{:indent$}GO!", "")?;
        } else {
            writeln!(frame, "  {remaining_label}")?;
        }
        Ok(())
    }

    fn render_round(&self, frame: &mut TextFrame, view: &RoundView<'_>) -> core::fmt::Result {
        writeln!(
            frame,
            "Round {} | {} | {}",
            view.round_number,
            view.category.as_str(),
            view.difficulty.as_str()
        )?;
        write!(frame, "Queue {}", view.rank_label)?;
        if let Some(delta) = view.delta_label {
            write!(frame, " ({delta})")?;
        }
        writeln!(frame)?;
        write_bar(frame, "rank", 1.0 - view.progress_fraction)?;
        writeln!(frame)?;

        let shift = self.slide_shift();
        write_card_line(frame, shift, &["[ ", view.label, " ]"])?;
        write_card_line(frame, shift, &["  ", view.image_ref])?;
        if !view.description.is_empty() {
            let mut buf = [0u8; EXCERPT_MAX_CHARS + 3];
            let text = excerpt(view.description, &mut buf, EXCERPT_MAX_CHARS);
            write_card_line(frame, shift, &["  ", text])?;
        }
        writeln!(frame)?;

        match view.phase {
            Phase::AwaitingAnswer => {
                write_bar(frame, "time", view.decision_fraction)?;
                writeln!(frame, "Fake or real?")?;
            }
            Phase::Locked => writeln!(frame, "Locked in...")?,
            Phase::ShowingFeedback | Phase::Transitioning => {
                if let Some(outcome) = view.outcome {
                    render_outcome(frame, &outcome, view.animation)?;
                }
                if view.phase == Phase::ShowingFeedback {
                    write_bar(frame, "next", view.feedback_fraction)?;
                    if view.feedback_paused {
                        writeln!(frame, "(paused)")?;
                    }
                }
            }
        }

        if view.signup_visible {
            writeln!(frame)?;
            writeln!(frame, "*** Join the waitlist to keep your place! [x] to close ***")?;
        }
        Ok(())
    }

    /// Columns the card has travelled; negative moves it off the left edge.
    fn slide_shift(&self) -> isize {
        let Some(slide) = self.slide else {
            return 0;
        };
        let travel = ((slide.progress_pct as usize * BAR_WIDTH) / 100) as isize;
        match slide.kind {
            AnimationKind::SlideRight => travel,
            AnimationKind::SlideLeft => -travel,
            _ => 0,
        }
    }
}

impl FrameRenderer for TextRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut TextFrame) {
        frame.clear();
        if self.clear_screen {
            let _ = frame.push_str(CLEAR_SCREEN);
        }

        let written = match screen {
            Screen::Loading { message } => writeln!(frame, "{message}..."),
            Screen::Countdown {
                headline,
                remaining_label,
                exiting,
                animation,
                ..
            } => self.render_countdown(frame, headline, remaining_label, exiting, animation),
            Screen::Round(view) => self.render_round(frame, &view),
        };
        let _ = written.and_then(|()| {
            writeln!(frame)?;
            writeln!(frame, "{HELP_LINE}")
        });
    }
}

fn render_outcome(
    frame: &mut TextFrame,
    outcome: &OutcomeView<'_>,
    animation: Option<AnimationFrame>,
) -> core::fmt::Result {
    let verdict = if outcome.timed_out {
        "TIME'S UP"
    } else if outcome.correct {
        "CORRECT"
    } else {
        "WRONG"
    };
    let emphasis = match animation.map(|a| a.kind) {
        Some(AnimationKind::Pulse) => "+",
        Some(AnimationKind::Shake) => "~",
        _ => "",
    };
    writeln!(frame, "{emphasis}{verdict}{emphasis}")?;
    writeln!(
        frame,
        "This document is {}.",
        if outcome.truth_authentic { "AUTHENTIC" } else { "FORGED" }
    )?;
    writeln!(frame, "{}", outcome.explanation)?;
    for clue in outcome.detection_clues {
        writeln!(frame, "  - {clue}")?;
    }
    for feature in outcome.security_features {
        writeln!(frame, "  + {feature}")?;
    }
    Ok(())
}

/// Write one card line shifted by `shift` columns. A left shift crops the
/// leading characters instead of padding.
fn write_card_line(frame: &mut TextFrame, shift: isize, parts: &[&str]) -> core::fmt::Result {
    if shift > 0 {
        write!(frame, "{:width$}", "", width = shift as usize)?;
    }
    let mut skip = if shift < 0 { shift.unsigned_abs() } else { 0 };
    for ch in parts.iter().flat_map(|part| part.chars()) {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        frame.push(ch).map_err(|_| core::fmt::Error)?;
    }
    writeln!(frame)
}

fn write_bar(frame: &mut TextFrame, label: &str, fraction: f32) -> core::fmt::Result {
    let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f32) as usize).min(BAR_WIDTH);
    write!(frame, "{label} [")?;
    for slot in 0..BAR_WIDTH {
        frame
            .push(if slot < filled { '#' } else { '.' })
            .map_err(|_| core::fmt::Error)?;
    }
    writeln!(frame, "]")
}

#[cfg(test)]
mod tests {
    use spotfake_core::catalog::{Category, Difficulty};

    use super::*;

    fn round_view(phase: Phase) -> RoundView<'static> {
        RoundView {
            phase,
            round_number: 2,
            label: "AI-Generated Receipt",
            image_ref: "receipt.png",
            category: Category::Receipt,
            difficulty: Difficulty::Medium,
            description: "",
            decision_fraction: 0.5,
            feedback_fraction: 1.0,
            feedback_paused: false,
            outcome: None,
            rank_label: "23035/49747",
            delta_label: Some("-50"),
            progress_fraction: 0.46,
            signup_visible: false,
            animation: None,
        }
    }

    #[test]
    fn awaiting_answer_shows_half_bar_and_rank() {
        let mut renderer = TextRenderer::default().with_clear_screen(false);
        let mut frame = TextFrame::new();
        renderer.render(Screen::Round(round_view(Phase::AwaitingAnswer)), &mut frame);

        assert!(frame.contains("Queue 23035/49747 (-50)"));
        assert!(frame.contains("time [###############...............]"));
        assert!(frame.contains("Fake or real?"));
        assert!(frame.trim_end().ends_with(HELP_LINE));
    }

    #[test]
    fn feedback_lists_clues_and_paused_marker() {
        let mut renderer = TextRenderer::default().with_clear_screen(false);
        let mut frame = TextFrame::new();
        let view = RoundView {
            feedback_paused: true,
            outcome: Some(OutcomeView {
                correct: false,
                timed_out: false,
                truth_authentic: false,
                explanation: "This receipt is FAKE.",
                detection_clues: &["Totals do not add up"],
                security_features: &[],
            }),
            ..round_view(Phase::ShowingFeedback)
        };
        renderer.render(Screen::Round(view), &mut frame);

        assert!(frame.contains("WRONG"));
        assert!(frame.contains("This document is FORGED."));
        assert!(frame.contains("  - Totals do not add up"));
        assert!(frame.contains("(paused)"));
    }

    #[test]
    fn loading_and_countdown_screens() {
        let mut renderer = TextRenderer::default().with_clear_screen(false);
        let mut frame = TextFrame::new();

        renderer.render(Screen::Loading { message: "Loading documents" }, &mut frame);
        assert!(frame.starts_with("Loading documents..."));

        renderer.render(
            Screen::Countdown {
                headline: "Are you smarter than AI?",
                remaining_label: "3.2",
                remaining_ms: 3_200,
                exiting: false,
                animation: None,
            },
            &mut frame,
        );
        assert!(frame.starts_with("Are you smarter than AI?"));
        assert!(frame.contains("  3.2"));
    }

    #[test]
    fn slides_move_the_card_in_both_directions() {
        let mut renderer = TextRenderer::default().with_clear_screen(false);
        let mut frame = TextFrame::new();

        renderer.set_slide(Some(AnimationFrame {
            kind: AnimationKind::SlideRight,
            progress_pct: 50,
        }));
        renderer.render(Screen::Round(round_view(Phase::Transitioning)), &mut frame);
        assert!(frame.contains("\n               [ AI-Generated Receipt ]\n"));

        renderer.set_slide(Some(AnimationFrame {
            kind: AnimationKind::SlideLeft,
            progress_pct: 50,
        }));
        renderer.render(Screen::Round(round_view(Phase::Transitioning)), &mut frame);
        assert!(frame.contains("\nReceipt ]\n"));
        assert!(!frame.contains("[ AI-Generated"));

        renderer.set_slide(None);
        renderer.render(Screen::Round(round_view(Phase::Transitioning)), &mut frame);
        assert!(frame.contains("\n[ AI-Generated Receipt ]\n"));
    }
}
