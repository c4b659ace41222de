//! Quiz session: intro countdown, round machine and signup prompt.

use heapless::Deque;
use log::{debug, info, warn};
use rand::RngCore;

use crate::{
    analytics::AnalyticsSink,
    bootstrap::{BootstrapTick, SessionBootstrap, SessionMode},
    catalog::{
        CatalogError, DEFAULT_ROUND_CAPACITY, DocumentCatalog, RoundSequence, build_round_sequence,
    },
    config::QuizConfig,
    input::{InputEvent, InputProvider},
    render::{AnimationFrame, AnimationKind, AnimationSpec, OutcomeView, RoundView, Screen},
    round::{Phase, RoundEvent, RoundMachine},
    signup::SignupPrompt,
    text_policy::{LABEL_BYTES, delta_label, rank_label, seconds_tenths_label},
};

const OUTBOUND_EVENT_DEPTH: usize = 8;

const LOADING_MESSAGE: &str = "Loading documents";
const WAITING_MESSAGE: &str = "Ready when you are";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// `N` bounds the catalog size; see [`RoundSequence`].
pub struct QuizApp<C, IN, AS, const N: usize = DEFAULT_ROUND_CAPACITY>
where
    C: DocumentCatalog,
    IN: InputProvider,
    AS: AnalyticsSink,
{
    config: QuizConfig,
    input: IN,
    staged: Option<(C, RoundSequence<N>)>,
    analytics: Option<AS>,
    bootstrap: Option<SessionBootstrap>,
    round: Option<RoundMachine<C, AS, N>>,
    signup: SignupPrompt,
    guesses: u32,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
    events: Deque<RoundEvent, OUTBOUND_EVENT_DEPTH>,
}

include!("runtime.rs");
include!("input.rs");
include!("view.rs");
