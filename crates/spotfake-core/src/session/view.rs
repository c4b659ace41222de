impl<C, IN, AS, const N: usize> QuizApp<C, IN, AS, N>
where
    C: DocumentCatalog,
    IN: InputProvider,
    AS: AnalyticsSink,
{
    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let animation = self.transition_frame(now_ms);

        if let Some(round) = self.round.as_ref() {
            let Some(snapshot) = round.snapshot() else {
                f(Screen::Loading {
                    message: LOADING_MESSAGE,
                });
                return;
            };

            let mut rank_buf = [0u8; LABEL_BYTES];
            let mut delta_buf = [0u8; LABEL_BYTES];
            let ledger = snapshot.ledger;
            let rank = rank_label(ledger.queue_position, ledger.total_participants, &mut rank_buf);
            let delta = match ledger.last_delta {
                Some(delta) => Some(delta_label(delta, &mut delta_buf)),
                None => None,
            };

            let record = snapshot.record;
            let outcome = snapshot.last_outcome.map(|outcome| OutcomeView {
                correct: outcome.was_correct,
                timed_out: outcome.timed_out(),
                truth_authentic: record.is_authentic,
                explanation: if outcome.was_correct {
                    record.educational.key_indicators
                } else {
                    record.educational.when_wrong
                },
                detection_clues: record
                    .forgery
                    .as_ref()
                    .map(|forgery| forgery.detection_clues)
                    .unwrap_or(&[]),
                security_features: record.security_features,
            });

            f(Screen::Round(RoundView {
                phase: snapshot.phase,
                round_number: snapshot.round_number,
                label: record.label,
                image_ref: record.image_ref,
                category: record.category,
                difficulty: record.difficulty,
                description: record.description,
                decision_fraction: snapshot.decision_fraction,
                feedback_fraction: snapshot.feedback_fraction,
                feedback_paused: snapshot.feedback_paused,
                outcome,
                rank_label: rank,
                delta_label: delta,
                progress_fraction: ledger.progress_fraction(),
                signup_visible: self.signup.is_visible(),
                animation,
            }));
            return;
        }

        match self.bootstrap.as_ref() {
            Some(bootstrap) if bootstrap.mode() == SessionMode::Countdown => {
                let mut label_buf = [0u8; LABEL_BYTES];
                let remaining_ms = bootstrap.remaining_ms();
                f(Screen::Countdown {
                    headline: bootstrap.headline(),
                    remaining_label: seconds_tenths_label(remaining_ms, &mut label_buf),
                    remaining_ms,
                    exiting: bootstrap.is_exiting(),
                    animation,
                });
            }
            Some(_) => f(Screen::Loading {
                message: LOADING_MESSAGE,
            }),
            None => f(Screen::Loading {
                message: WAITING_MESSAGE,
            }),
        }
    }
}
