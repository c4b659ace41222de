impl<C, IN, AS, const N: usize> QuizApp<C, IN, AS, N>
where
    C: DocumentCatalog,
    IN: InputProvider,
    AS: AnalyticsSink,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("session: input provider failed, skipping this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        if self.signup.is_visible() {
            self.apply_signup_input(event, now_ms);
            return;
        }

        let Some(round) = self.round.as_mut() else {
            debug!("session: {:?} ignored before the first round", event);
            return;
        };

        // Timer ticks owed up to `now_ms` fire before the intent applies.
        if round.tick(now_ms) > 0 {
            self.pending_redraw = true;
        }

        let handled = match event {
            InputEvent::AnswerFake | InputEvent::AnswerReal => {
                let answered = round.answer(event == InputEvent::AnswerReal, now_ms);
                if answered {
                    self.guesses = self.guesses.saturating_add(1);
                }
                answered
            }
            InputEvent::Continue => round.continue_now(),
            InputEvent::HoverBegin => round.hover_pause_begin(),
            InputEvent::HoverEnd => round.hover_pause_end(),
            InputEvent::TransitionComplete => round.transition_complete(now_ms),
            InputEvent::DismissSignup => false,
        };

        if handled {
            self.pending_redraw = true;
        }
    }

    /// The signup prompt is modal: the round is suspended until it closes.
    fn apply_signup_input(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::DismissSignup => {
                if self.signup.dismiss(self.guesses) {
                    info!(
                        "session: signup prompt dismissed, next after {} guesses",
                        self.signup.next_at()
                    );
                    if let Some(round) = self.round.as_mut() {
                        round.resync_clock(now_ms);
                    }
                    self.pending_redraw = true;
                }
            }
            // Hover tracking continues behind the prompt.
            InputEvent::HoverBegin | InputEvent::HoverEnd => {
                if let Some(round) = self.round.as_mut() {
                    if event == InputEvent::HoverBegin {
                        round.hover_pause_begin();
                    } else {
                        round.hover_pause_end();
                    }
                }
            }
            _ => debug!("session: {:?} ignored while the signup prompt is open", event),
        }
    }
}
