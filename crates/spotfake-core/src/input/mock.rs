use heapless::Deque;

use super::{InputEvent, InputProvider};

const QUEUE_DEPTH: usize = 16;

/// In-memory input source; events pushed by the owner are replayed in order.
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    events: Deque<InputEvent, QUEUE_DEPTH>,
}

impl QueuedInput {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Returns `false` when the queue is full and the event was dropped.
    pub fn push(&mut self, event: InputEvent) -> bool {
        self.events.push_back(event).is_ok()
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl InputProvider for QueuedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
