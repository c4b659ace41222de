//! Input abstraction layer.

pub mod mock;

/// Player and presentation intents consumed by the quiz app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    AnswerFake,
    AnswerReal,
    /// Skip the rest of the feedback window.
    Continue,
    HoverBegin,
    HoverEnd,
    /// The slide-out finished for whatever transition is current.
    TransitionComplete,
    DismissSignup,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
