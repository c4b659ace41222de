//! Per-document round lifecycle.
//!
//! ```text
//! AwaitingAnswer --answer/timeout--> Locked --settle--> ShowingFeedback
//!       ^                                                    |
//!       +---- transition complete ---- Transitioning <-------+ continue/expiry
//! ```
//!
//! Every phase change bumps a generation token. Deferred effects carry the
//! generation they were scheduled in and are dropped when it no longer
//! matches, so a late callback from a superseded phase cannot apply.

use heapless::Deque;
use log::{debug, info};

use crate::{
    analytics::{AnalyticsSink, WrongAnswerEvent},
    catalog::{DEFAULT_ROUND_CAPACITY, DocumentCatalog, DocumentRecord, RoundSequence},
    config::QuizConfig,
    ledger::{Ledger, LedgerState},
    timer::{Countdown, TickOutcome, ticks_for},
};

const EVENT_QUEUE_DEPTH: usize = 8;
/// Ticks replayed per call before the clock grid is re-anchored.
const MAX_CATCHUP_TICKS: u32 = 40;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    AwaitingAnswer,
    Locked,
    ShowingFeedback,
    Transitioning,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingAnswer => "awaiting_answer",
            Self::Locked => "locked",
            Self::ShowingFeedback => "showing_feedback",
            Self::Transitioning => "transitioning",
        }
    }
}

/// Slide-out direction: left for forged, right for authentic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlideDirection {
    Left,
    Right,
}

impl SlideDirection {
    pub const fn for_truth(is_authentic: bool) -> Self {
        if is_authentic { Self::Right } else { Self::Left }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Outcome {
    /// `None` when the decision clock ran out.
    pub chosen_authentic: Option<bool>,
    /// Catalog index of the judged record.
    pub record_index: u16,
    pub was_correct: bool,
}

impl Outcome {
    pub const fn timed_out(&self) -> bool {
        self.chosen_authentic.is_none()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundEvent {
    PhaseChanged {
        generation: u32,
        phase: Phase,
        slide: Option<SlideDirection>,
    },
    FeedbackPulse {
        correct: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Deferred {
    generation: u32,
    due_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct RoundTimings {
    tick_ms: u16,
    decision_ticks: u32,
    feedback_ticks: u32,
    settle_delay_ms: u16,
}

impl RoundTimings {
    fn from_config(config: &QuizConfig) -> Self {
        let tick_ms = config.tick_ms.max(1);
        Self {
            tick_ms,
            decision_ticks: ticks_for(config.decision_budget_ms, tick_ms),
            feedback_ticks: ticks_for(config.feedback_budget_ms, tick_ms),
            settle_delay_ms: config.settle_delay_ms,
        }
    }
}

/// Read-only view of the round for presentation.
#[derive(Clone, Copy, Debug)]
pub struct RoundSnapshot<'a> {
    pub phase: Phase,
    pub generation: u32,
    pub round_number: u32,
    pub record: &'a DocumentRecord,
    pub decision_fraction: f32,
    pub feedback_fraction: f32,
    pub feedback_paused: bool,
    pub last_outcome: Option<Outcome>,
    pub ledger: LedgerState,
    pub slide: Option<SlideDirection>,
}

pub struct RoundMachine<C, A, const N: usize = DEFAULT_ROUND_CAPACITY>
where
    C: DocumentCatalog,
    A: AnalyticsSink,
{
    catalog: C,
    sequence: RoundSequence<N>,
    analytics: A,
    timings: RoundTimings,
    phase: Phase,
    generation: u32,
    cursor: u16,
    rounds_started: u32,
    decision: Countdown,
    feedback: Countdown,
    hover_active: bool,
    last_outcome: Option<Outcome>,
    settle: Option<Deferred>,
    next_tick_ms: u64,
    ledger: Ledger,
    events: Deque<RoundEvent, EVENT_QUEUE_DEPTH>,
}

impl<C, A, const N: usize> RoundMachine<C, A, N>
where
    C: DocumentCatalog,
    A: AnalyticsSink,
{
    /// Start a session on the first document of `sequence`.
    pub fn new(
        catalog: C,
        sequence: RoundSequence<N>,
        analytics: A,
        config: &QuizConfig,
        now_ms: u64,
    ) -> Self {
        let mut machine = Self {
            catalog,
            sequence,
            analytics,
            timings: RoundTimings::from_config(config),
            phase: Phase::AwaitingAnswer,
            generation: 0,
            cursor: 0,
            rounds_started: 1,
            decision: Countdown::fixed(),
            feedback: Countdown::pausable(),
            hover_active: false,
            last_outcome: None,
            settle: None,
            next_tick_ms: now_ms,
            ledger: Ledger::new(config.ledger, config.delta_display_ms),
            events: Deque::new(),
        };
        machine.start_decision(now_ms);
        info!(
            "round: session started documents={} decision_ticks={} feedback_ticks={}",
            machine.sequence.len(),
            machine.timings.decision_ticks,
            machine.timings.feedback_ticks
        );
        machine
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Position in the round sequence (wraps).
    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    pub fn sequence(&self) -> &RoundSequence<N> {
        &self.sequence
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn current_record(&self) -> Option<&DocumentRecord> {
        self.catalog.record_at(self.sequence.index_at(self.cursor))
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn decision(&self) -> &Countdown {
        &self.decision
    }

    pub fn feedback(&self) -> &Countdown {
        &self.feedback
    }

    pub fn ledger(&self) -> LedgerState {
        self.ledger.state()
    }

    pub fn analytics(&self) -> &A {
        &self.analytics
    }

    pub fn analytics_mut(&mut self) -> &mut A {
        &mut self.analytics
    }

    pub fn take_event(&mut self) -> Option<RoundEvent> {
        self.events.pop_front()
    }

    pub fn snapshot(&self) -> Option<RoundSnapshot<'_>> {
        let record = self.current_record()?;
        let slide = match self.phase {
            Phase::Transitioning => Some(SlideDirection::for_truth(record.is_authentic)),
            _ => None,
        };
        Some(RoundSnapshot {
            phase: self.phase,
            generation: self.generation,
            round_number: self.rounds_started,
            record,
            decision_fraction: self.decision.fraction(),
            feedback_fraction: self.feedback.fraction(),
            feedback_paused: self.feedback.is_paused(),
            last_outcome: self.last_outcome,
            ledger: self.ledger.state(),
            slide,
        })
    }

    /// Player verdict: `true` for authentic, `false` for forged.
    ///
    /// Ignored unless the round is awaiting an answer.
    pub fn answer(&mut self, choice: bool, now_ms: u64) -> bool {
        if self.phase != Phase::AwaitingAnswer {
            debug!("round: answer ignored in phase {}", self.phase.as_str());
            return false;
        }
        let record_index = self.sequence.index_at(self.cursor);
        let Some(record) = self.catalog.record_at(record_index) else {
            return false;
        };
        let (document_id, is_authentic) = (record.id, record.is_authentic);
        let was_correct = choice == is_authentic;

        self.decision.stop();
        self.lock(
            Outcome {
                chosen_authentic: Some(choice),
                record_index,
                was_correct,
            },
            now_ms,
        );

        if was_correct {
            self.ledger.record_correct(now_ms);
        } else {
            self.analytics.record_wrong_answer(WrongAnswerEvent {
                document_id,
                choice,
                correct_answer: is_authentic,
                timestamp_ms: now_ms,
            });
        }
        self.push_event(RoundEvent::FeedbackPulse {
            correct: was_correct,
        });

        debug!(
            "round: answered document={} choice={} correct={}",
            document_id.0, choice, was_correct
        );
        true
    }

    /// Skip the rest of the feedback window.
    pub fn continue_now(&mut self) -> bool {
        if self.phase != Phase::ShowingFeedback {
            debug!("round: continue ignored in phase {}", self.phase.as_str());
            return false;
        }
        self.feedback.stop();
        self.begin_transition();
        true
    }

    pub fn hover_pause_begin(&mut self) -> bool {
        self.hover_active = true;
        self.phase == Phase::ShowingFeedback && self.feedback.pause()
    }

    pub fn hover_pause_end(&mut self) -> bool {
        self.hover_active = false;
        self.feedback.resume()
    }

    /// Slide-out animation finished; present the next document.
    pub fn transition_complete(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Transitioning {
            debug!(
                "round: transition complete ignored in phase {}",
                self.phase.as_str()
            );
            return false;
        }

        self.cursor = self.sequence.next_position(self.cursor);
        self.rounds_started = self.rounds_started.saturating_add(1);
        self.last_outcome = None;
        self.start_decision(now_ms);
        self.set_phase(Phase::AwaitingAnswer, None);
        true
    }

    /// Like [`Self::transition_complete`], but only for the transition that
    /// was announced with `generation`.
    pub fn transition_complete_for(&mut self, generation: u32, now_ms: u64) -> bool {
        if generation != self.generation {
            debug!(
                "round: stale transition completion generation={} current={}",
                generation, self.generation
            );
            return false;
        }
        self.transition_complete(now_ms)
    }

    /// Advance clocks up to `now_ms`. Returns the number of timer steps run.
    pub fn tick(&mut self, now_ms: u64) -> u32 {
        self.ledger.tick(now_ms);

        let tick_ms = self.timings.tick_ms as u64;
        let mut steps = 0u32;
        while now_ms >= self.next_tick_ms {
            if steps == MAX_CATCHUP_TICKS {
                debug!(
                    "round: clock fell behind by {}ms, re-anchoring",
                    now_ms - self.next_tick_ms
                );
                self.next_tick_ms = now_ms + tick_ms;
                break;
            }
            let at_ms = self.next_tick_ms;
            self.next_tick_ms += tick_ms;
            self.step(at_ms);
            steps += 1;
        }
        steps
    }

    /// Re-anchor the tick grid at `now_ms`, dropping any ticks owed since the
    /// last call. Used after the host suspended the round.
    pub fn resync_clock(&mut self, now_ms: u64) {
        self.next_tick_ms = now_ms + self.timings.tick_ms as u64;
    }

    fn step(&mut self, at_ms: u64) {
        match self.phase {
            Phase::AwaitingAnswer => {
                if self.decision.tick() == TickOutcome::Expired {
                    self.lock_on_timeout(at_ms);
                }
            }
            Phase::ShowingFeedback => {
                if self.feedback.tick() == TickOutcome::Expired {
                    self.begin_transition();
                }
            }
            Phase::Locked | Phase::Transitioning => {}
        }

        if let Some(settle) = self.settle {
            if settle.generation != self.generation {
                debug!("round: dropping stale settle from generation {}", settle.generation);
                self.settle = None;
            } else if at_ms >= settle.due_ms {
                self.settle = None;
                self.enter_feedback(at_ms);
            }
        }
    }

    fn lock_on_timeout(&mut self, now_ms: u64) {
        let record_index = self.sequence.index_at(self.cursor);
        debug!("round: decision clock expired on catalog index {}", record_index);
        self.lock(
            Outcome {
                chosen_authentic: None,
                record_index,
                was_correct: false,
            },
            now_ms,
        );
    }

    fn lock(&mut self, outcome: Outcome, now_ms: u64) {
        self.last_outcome = Some(outcome);
        self.set_phase(Phase::Locked, None);
        self.settle = Some(Deferred {
            generation: self.generation,
            due_ms: now_ms + self.timings.settle_delay_ms as u64,
        });
    }

    fn enter_feedback(&mut self, now_ms: u64) {
        self.feedback.start(self.timings.feedback_ticks);
        if self.hover_active {
            self.feedback.pause();
        }
        self.next_tick_ms = now_ms + self.timings.tick_ms as u64;
        self.set_phase(Phase::ShowingFeedback, None);
    }

    fn begin_transition(&mut self) {
        let slide = self
            .current_record()
            .map(|record| SlideDirection::for_truth(record.is_authentic));
        self.set_phase(Phase::Transitioning, slide);
    }

    fn start_decision(&mut self, now_ms: u64) {
        self.feedback.stop();
        self.decision.start(self.timings.decision_ticks);
        self.next_tick_ms = now_ms + self.timings.tick_ms as u64;
    }

    fn set_phase(&mut self, phase: Phase, slide: Option<SlideDirection>) {
        self.phase = phase;
        self.generation = self.generation.wrapping_add(1);
        self.push_event(RoundEvent::PhaseChanged {
            generation: self.generation,
            phase,
            slide,
        });
    }

    fn push_event(&mut self, event: RoundEvent) {
        if self.events.is_full() {
            let _ = self.events.pop_front();
        }
        let _ = self.events.push_back(event);
    }
}

#[cfg(test)]
mod tests;
