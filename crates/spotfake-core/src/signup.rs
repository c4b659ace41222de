//! Cadence of the "join the waitlist" prompt.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignupPrompt {
    every: u16,
    next_at: u32,
    visible: bool,
}

impl SignupPrompt {
    pub fn new(every: u16) -> Self {
        let every = every.max(1);
        Self {
            every,
            next_at: every as u32,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn next_at(&self) -> u32 {
        self.next_at
    }

    /// Opens the prompt once enough guesses were made, but never while a
    /// card is sliding out. Returns `true` when it opened on this call.
    pub fn observe(&mut self, guesses: u32, sliding: bool) -> bool {
        if self.visible || sliding || guesses < self.next_at {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn dismiss(&mut self, guesses: u32) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.next_at = guesses.saturating_add(self.every as u32);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_every_third_guess() {
        let mut prompt = SignupPrompt::new(3);
        assert!(!prompt.observe(2, false));
        assert!(prompt.observe(3, false));
        assert!(prompt.is_visible());
        assert!(!prompt.observe(4, false));

        assert!(prompt.dismiss(4));
        assert_eq!(prompt.next_at(), 7);
        assert!(!prompt.observe(6, false));
        assert!(prompt.observe(7, false));
    }

    #[test]
    fn waits_for_slide_to_finish() {
        let mut prompt = SignupPrompt::new(3);
        assert!(!prompt.observe(3, true));
        assert!(prompt.observe(3, false));
    }

    #[test]
    fn dismiss_without_prompt_is_ignored() {
        let mut prompt = SignupPrompt::new(0);
        assert!(!prompt.dismiss(5));
        assert_eq!(prompt.next_at(), 1);
    }
}
