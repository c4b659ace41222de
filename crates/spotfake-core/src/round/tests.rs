use heapless::Vec;
use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::catalog::{
    Category, Difficulty, DocumentId, EducationalContent, StaticCatalog, build_round_sequence,
};

const fn record(id: u16, is_authentic: bool) -> DocumentRecord {
    DocumentRecord {
        id: DocumentId(id),
        image_ref: "doc.png",
        is_authentic,
        label: "Doc",
        category: Category::Invoice,
        difficulty: Difficulty::Medium,
        description: "",
        security_features: &[],
        forgery: None,
        educational: EducationalContent {
            when_wrong: "wrong",
            key_indicators: "indicators",
        },
    }
}

static THREE_DOCS: [DocumentRecord; 3] = [record(1, false), record(2, true), record(3, true)];

#[derive(Default)]
struct RecordingSink {
    events: Vec<WrongAnswerEvent, 8>,
}

impl AnalyticsSink for RecordingSink {
    fn record_wrong_answer(&mut self, event: WrongAnswerEvent) {
        let _ = self.events.push(event);
    }
}

type TestMachine = RoundMachine<StaticCatalog, RecordingSink>;

fn machine() -> TestMachine {
    let catalog = StaticCatalog::new(&THREE_DOCS);
    let mut rng = StdRng::seed_from_u64(42);
    let sequence = build_round_sequence(&catalog, &mut rng).unwrap();
    RoundMachine::new(
        catalog,
        sequence,
        RecordingSink::default(),
        &QuizConfig::default(),
        0,
    )
}

fn advance(machine: &mut TestMachine, from_ms: u64, to_ms: u64) {
    let mut now = from_ms;
    while now <= to_ms {
        machine.tick(now);
        now += 50;
    }
}

fn drain(machine: &mut TestMachine) -> Vec<RoundEvent, 16> {
    let mut events = Vec::new();
    while let Some(event) = machine.take_event() {
        let _ = events.push(event);
    }
    events
}

fn current_truth(machine: &TestMachine) -> bool {
    machine.current_record().unwrap().is_authentic
}

/// Answer correctly at `at_ms` and wait for the feedback phase.
fn answer_and_settle(machine: &mut TestMachine, at_ms: u64) -> u64 {
    let truth = current_truth(machine);
    assert!(machine.answer(truth, at_ms));
    advance(machine, at_ms + 50, at_ms + 500);
    assert_eq!(machine.phase(), Phase::ShowingFeedback);
    at_ms + 500
}

#[test]
fn session_opens_awaiting_answer_on_forgery() {
    let machine = machine();
    assert_eq!(machine.phase(), Phase::AwaitingAnswer);
    assert_eq!(machine.cursor(), 0);
    assert!(!current_truth(&machine));
    assert_eq!(machine.decision().remaining_ticks(), 200);
    assert!(machine.last_outcome().is_none());
}

#[test]
fn correct_answer_locks_and_moves_ledger() {
    let mut machine = machine();
    let start_position = machine.ledger().queue_position;

    assert!(machine.answer(false, 1_000));

    assert_eq!(machine.phase(), Phase::Locked);
    let outcome = machine.last_outcome().unwrap();
    assert_eq!(outcome.chosen_authentic, Some(false));
    assert!(outcome.was_correct);
    assert_eq!(machine.ledger().queue_position, start_position - 50);
    assert_eq!(machine.ledger().last_delta, Some(-50));
    assert!(machine.analytics().events.is_empty());

    let events = drain(&mut machine);
    assert_eq!(
        events.as_slice(),
        &[
            RoundEvent::PhaseChanged {
                generation: 1,
                phase: Phase::Locked,
                slide: None,
            },
            RoundEvent::FeedbackPulse { correct: true },
        ]
    );
}

#[test]
fn wrong_answer_is_reported_and_leaves_ledger_alone() {
    let mut machine = machine();
    let before = machine.ledger();

    assert!(machine.answer(true, 2_500));

    let outcome = machine.last_outcome().unwrap();
    assert!(!outcome.was_correct);
    assert_eq!(machine.ledger(), before);
    assert_eq!(
        machine.analytics().events.as_slice(),
        &[WrongAnswerEvent {
            document_id: DocumentId(1),
            choice: true,
            correct_answer: false,
            timestamp_ms: 2_500,
        }]
    );
}

#[test]
fn answers_after_lock_are_ignored() {
    let mut machine = machine();
    assert!(machine.answer(false, 100));
    let outcome = machine.last_outcome();
    let ledger = machine.ledger();
    let generation = machine.generation();

    assert!(!machine.answer(true, 150));
    assert_eq!(machine.last_outcome(), outcome);
    assert_eq!(machine.ledger(), ledger);
    assert_eq!(machine.generation(), generation);

    advance(&mut machine, 150, 600);
    assert_eq!(machine.phase(), Phase::ShowingFeedback);
    assert!(!machine.answer(false, 650));
    assert_eq!(machine.last_outcome(), outcome);
}

#[test]
fn decision_timeout_locks_then_shows_feedback_without_input() {
    let mut machine = machine();

    advance(&mut machine, 50, 9_950);
    assert_eq!(machine.phase(), Phase::AwaitingAnswer);
    assert_eq!(machine.decision().remaining_ticks(), 1);

    machine.tick(10_000);
    assert_eq!(machine.phase(), Phase::Locked);
    let outcome = machine.last_outcome().unwrap();
    assert_eq!(outcome.chosen_authentic, None);
    assert!(outcome.timed_out());
    assert!(!outcome.was_correct);
    assert_eq!(machine.decision().remaining_ticks(), 0);

    advance(&mut machine, 10_050, 10_450);
    assert_eq!(machine.phase(), Phase::Locked);
    machine.tick(10_500);
    assert_eq!(machine.phase(), Phase::ShowingFeedback);
    assert_eq!(machine.feedback().remaining_ticks(), 70);
    assert!(machine.analytics().events.is_empty());
}

#[test]
fn feedback_expiry_requests_transition() {
    let mut machine = machine();
    let feedback_at = answer_and_settle(&mut machine, 0);

    advance(&mut machine, feedback_at + 50, feedback_at + 3_450);
    assert_eq!(machine.phase(), Phase::ShowingFeedback);
    machine.tick(feedback_at + 3_500);
    assert_eq!(machine.phase(), Phase::Transitioning);
}

#[test]
fn continue_skips_feedback_and_completion_advances() {
    let mut machine = machine();
    let feedback_at = answer_and_settle(&mut machine, 0);
    advance(&mut machine, feedback_at + 50, feedback_at + 200);
    assert!(machine.feedback().remaining_ticks() > 0);

    assert!(machine.continue_now());
    assert_eq!(machine.phase(), Phase::Transitioning);
    assert!(!machine.continue_now());

    assert!(machine.transition_complete(feedback_at + 600));
    assert_eq!(machine.phase(), Phase::AwaitingAnswer);
    assert_eq!(machine.cursor(), 1);
    assert!(machine.last_outcome().is_none());
    assert_eq!(machine.decision().remaining_ticks(), 200);
    assert!(machine.decision().is_running());
}

#[test]
fn cursor_wraps_after_last_document() {
    let mut machine = machine();
    let mut now = 0;

    for expected_next in [1, 2, 0] {
        now = answer_and_settle(&mut machine, now);
        assert!(machine.continue_now());
        now += 50;
        assert!(machine.transition_complete(now));
        assert_eq!(machine.cursor(), expected_next);
        now += 50;
    }

    assert!(!current_truth(&machine));
}

#[test]
fn out_of_phase_intents_are_no_ops() {
    let mut machine = machine();
    assert!(!machine.continue_now());
    assert!(!machine.transition_complete(10));
    assert_eq!(machine.phase(), Phase::AwaitingAnswer);
    assert_eq!(machine.cursor(), 0);
    assert_eq!(machine.generation(), 0);

    assert!(machine.answer(false, 20));
    assert!(!machine.transition_complete(30));
    assert!(!machine.continue_now());
    assert_eq!(machine.phase(), Phase::Locked);
}

#[test]
fn hover_pause_holds_feedback_clock() {
    let mut machine = machine();
    let feedback_at = answer_and_settle(&mut machine, 0);
    advance(&mut machine, feedback_at + 50, feedback_at + 500);
    assert_eq!(machine.feedback().remaining_ticks(), 60);

    assert!(machine.hover_pause_begin());
    advance(&mut machine, feedback_at + 550, feedback_at + 5_000);
    assert_eq!(machine.phase(), Phase::ShowingFeedback);
    assert_eq!(machine.feedback().remaining_ticks(), 60);
    assert!(machine.snapshot().unwrap().feedback_paused);

    assert!(machine.hover_pause_end());
    machine.tick(feedback_at + 5_050);
    assert_eq!(machine.feedback().remaining_ticks(), 59);

    advance(&mut machine, feedback_at + 5_100, feedback_at + 7_950);
    assert_eq!(machine.phase(), Phase::ShowingFeedback);
    machine.tick(feedback_at + 8_000);
    assert_eq!(machine.phase(), Phase::Transitioning);
}

#[test]
fn hover_before_feedback_starts_it_paused() {
    let mut machine = machine();
    assert!(machine.answer(false, 0));
    assert!(!machine.hover_pause_begin());
    advance(&mut machine, 50, 2_000);
    assert_eq!(machine.phase(), Phase::ShowingFeedback);
    assert_eq!(machine.feedback().remaining_ticks(), 70);
}

#[test]
fn slide_follows_the_truth_not_the_choice() {
    let mut machine = machine();
    // Opener is forged; calling it authentic is wrong.
    assert!(machine.answer(true, 0));
    advance(&mut machine, 50, 500);
    let _ = drain(&mut machine);

    assert!(machine.continue_now());
    let events = drain(&mut machine);
    assert_eq!(
        events.as_slice(),
        &[RoundEvent::PhaseChanged {
            generation: machine.generation(),
            phase: Phase::Transitioning,
            slide: Some(SlideDirection::Left),
        }]
    );
    assert_eq!(
        machine.snapshot().unwrap().slide,
        Some(SlideDirection::Left)
    );
}

#[test]
fn stale_transition_completion_is_rejected() {
    let mut machine = machine();
    let feedback_at = answer_and_settle(&mut machine, 0);
    assert!(machine.continue_now());
    let generation = machine.generation();

    assert!(!machine.transition_complete_for(generation - 1, feedback_at + 100));
    assert_eq!(machine.phase(), Phase::Transitioning);
    assert!(machine.transition_complete_for(generation, feedback_at + 100));
    assert_eq!(machine.phase(), Phase::AwaitingAnswer);
    assert!(!machine.transition_complete_for(generation, feedback_at + 150));
    assert_eq!(machine.cursor(), 1);
}

#[test]
fn long_stall_catches_up_a_bounded_number_of_ticks() {
    let mut machine = machine();
    let steps = machine.tick(60_000);
    assert_eq!(steps, MAX_CATCHUP_TICKS);
    assert_eq!(machine.phase(), Phase::AwaitingAnswer);
    assert_eq!(machine.decision().remaining_ticks(), 200 - MAX_CATCHUP_TICKS);
}
