impl<C, IN, AS, const N: usize> QuizApp<C, IN, AS, N>
where
    C: DocumentCatalog,
    IN: InputProvider,
    AS: AnalyticsSink,
{
    pub fn new(config: QuizConfig, input: IN, analytics: AS) -> Self {
        let config = config.normalized();
        Self {
            signup: SignupPrompt::new(config.signup_every),
            config,
            input,
            staged: None,
            analytics: Some(analytics),
            bootstrap: None,
            round: None,
            guesses: 0,
            pending_redraw: true,
            transition: None,
            events: Deque::new(),
        }
    }

    /// Validate `catalog` and shuffle the round order.
    ///
    /// Integrity failures are returned untouched; the app stays on the
    /// loading screen and never starts a round.
    pub fn load_catalog<R>(&mut self, catalog: C, rng: &mut R) -> Result<(), CatalogError>
    where
        R: RngCore + ?Sized,
    {
        if self.round.is_some() {
            warn!("session: catalog reload ignored while a round is running");
            return Ok(());
        }

        let sequence: RoundSequence<N> = build_round_sequence(&catalog, rng)?;
        info!(
            "session: catalog ready documents={} opener_index={}",
            sequence.len(),
            sequence.index_at(0)
        );
        self.staged = Some((catalog, sequence));
        self.pending_redraw = true;
        Ok(())
    }

    /// Begin the intro countdown. A second call is a no-op.
    pub fn start(&mut self, now_ms: u64) {
        if self.bootstrap.is_some() {
            debug!("session: start ignored, already started");
            return;
        }
        self.bootstrap = Some(SessionBootstrap::new(&self.config, now_ms));
        self.pending_redraw = true;
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    pub fn round(&self) -> Option<&RoundMachine<C, AS, N>> {
        self.round.as_ref()
    }

    pub fn analytics(&self) -> Option<&AS> {
        match &self.round {
            Some(round) => Some(round.analytics()),
            None => self.analytics.as_ref(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.round.is_some()
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn signup_visible(&self) -> bool {
        self.signup.is_visible()
    }

    /// Countdown cues since the last call, for the host's tick sound.
    pub fn drain_tick_cues(&mut self) -> u8 {
        self.bootstrap
            .as_mut()
            .map(SessionBootstrap::drain_tick_cues)
            .unwrap_or(0)
    }

    /// Round events forwarded to the host (slides, pulses).
    pub fn take_event(&mut self) -> Option<RoundEvent> {
        self.events.pop_front()
    }

    /// Slide-out for `generation` finished on the host side.
    pub fn complete_transition(&mut self, generation: u32, now_ms: u64) -> bool {
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        let completed = round.transition_complete_for(generation, now_ms);
        if completed {
            self.pending_redraw = true;
            self.forward_round_events(now_ms);
        }
        completed
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let mut render = core::mem::take(&mut self.pending_redraw);
        render |= self.tick_bootstrap(now_ms);

        if self.round.is_none() && self.bootstrap_finished() && self.staged.is_some() {
            self.enter_round(now_ms);
            render = true;
        }

        if let Some(round) = self.round.as_mut() {
            if !self.signup.is_visible() && round.tick(now_ms) > 0 {
                render = true;
            }
        }
        render |= self.forward_round_events(now_ms);

        if let Some(round) = self.round.as_ref() {
            let sliding = round.phase() == Phase::Transitioning;
            if self.signup.observe(self.guesses, sliding) {
                info!("session: signup prompt opened after {} guesses", self.guesses);
                render = true;
            }
        }

        if render || self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn bootstrap_finished(&self) -> bool {
        self.bootstrap
            .as_ref()
            .is_some_and(|bootstrap| bootstrap.mode() == SessionMode::Playing)
    }

    fn tick_bootstrap(&mut self, now_ms: u64) -> bool {
        let Some(bootstrap) = self.bootstrap.as_mut() else {
            return false;
        };
        match bootstrap.tick(now_ms) {
            BootstrapTick::Unchanged => false,
            BootstrapTick::Stepped => true,
            BootstrapTick::Exiting => {
                self.start_transition(AnimationKind::FlyOut, now_ms, self.config.countdown_exit_ms);
                true
            }
            BootstrapTick::EnteredPlaying => {
                self.transition = None;
                true
            }
        }
    }

    fn enter_round(&mut self, now_ms: u64) {
        let Some((catalog, sequence)) = self.staged.take() else {
            return;
        };
        let Some(analytics) = self.analytics.take() else {
            self.staged = Some((catalog, sequence));
            return;
        };
        self.round = Some(RoundMachine::new(
            catalog,
            sequence,
            analytics,
            &self.config,
            now_ms,
        ));
    }

    /// Move round events to the outbound queue. Returns `true` if any.
    fn forward_round_events(&mut self, now_ms: u64) -> bool {
        let mut forwarded = false;
        loop {
            let Some(event) = self.round.as_mut().and_then(|round| round.take_event()) else {
                break;
            };
            forwarded = true;
            if let RoundEvent::FeedbackPulse { correct } = event {
                self.start_transition(
                    AnimationKind::for_feedback(correct),
                    now_ms,
                    self.config.feedback_pulse_ms,
                );
            }
            if self.events.is_full() {
                let _ = self.events.pop_front();
            }
            let _ = self.events.push_back(event);
        }
        forwarded
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|spec| spec.frame(now_ms))
    }
}
