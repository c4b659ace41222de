use std::io::{self, Write};

use embassy_executor::Spawner;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use embassy_time::{Instant, Timer};
use log::{error, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use spotfake_core::{
    catalog::{DEFAULT_ROUND_CAPACITY, StaticCatalog, dataset::default_catalog},
    config::QuizConfig,
    session::{QuizApp, TickResult},
};
use spotfake_term::{
    analytics::LoggingAnalytics,
    input::keyboard::{
        COMMAND_QUEUE_DEPTH, CommandParser, KeyCommand, KeyboardConfig, KeyboardInput,
    },
    render::{FrameRenderer, TextFrame, text::TextRenderer},
    slide::SlideCoordinator,
};

#[path = "main/stdin_reader.rs"]
mod stdin_reader;

const FRAME_INTERVAL_MS: u64 = 20;
const SLIDE_MS: u16 = 450;
const ARROWS_INVERTED: bool = false;
const SEED_ENV: &str = "SPOTFAKE_SEED";
const TICK_CUE: &[u8] = b"\x07";

type HostApp = QuizApp<
    StaticCatalog,
    KeyboardInput<'static>,
    LoggingAnalytics<StaticCatalog>,
    DEFAULT_ROUND_CAPACITY,
>;

static COMMANDS: Channel<CriticalSectionRawMutex, KeyCommand, COMMAND_QUEUE_DEPTH> =
    Channel::new();

fn shuffle_rng() -> StdRng {
    match std::env::var(SEED_ENV) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => {
                info!("shuffle seed fixed from {}: {}", SEED_ENV, seed);
                StdRng::seed_from_u64(seed)
            }
            Err(err) => {
                warn!("ignoring {}={:?}: {}", SEED_ENV, raw, err);
                StdRng::from_rng(&mut rand::rng())
            }
        },
        Err(_) => StdRng::from_rng(&mut rand::rng()),
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = QuizConfig::default();
    let catalog = default_catalog();
    let mut app = HostApp::new(
        config,
        KeyboardInput::new(COMMANDS.receiver()),
        LoggingAnalytics::new(catalog),
    );

    let mut rng = shuffle_rng();
    if let Err(err) = app.load_catalog(catalog, &mut rng) {
        error!("document catalog rejected: {}", err);
        std::process::exit(1);
    }

    let parser = CommandParser::new(KeyboardConfig::default().with_arrows_inverted(ARROWS_INVERTED));
    if let Err(err) = stdin_reader::spawn(&COMMANDS, parser) {
        error!("stdin reader failed to start: {}", err);
        std::process::exit(1);
    }

    info!(
        "Quiz started: decision_ms={} feedback_ms={} tick_ms={} documents={}",
        config.decision_budget_ms,
        config.feedback_budget_ms,
        config.tick_ms,
        catalog.records().len()
    );

    let mut renderer = TextRenderer::default();
    let mut slides = SlideCoordinator::new(SLIDE_MS);
    let mut frame = TextFrame::new();
    let mut output_fault_logged = false;

    let loop_start = Instant::now();
    app.start(0);

    loop {
        let now_ms = loop_start.elapsed().as_millis();

        if let Some(generation) = slides.poll_finished(now_ms) {
            app.complete_transition(generation, now_ms);
        }

        let mut render = app.tick(now_ms) == TickResult::RenderRequested;
        while let Some(event) = app.take_event() {
            slides.observe(event, now_ms);
        }
        let slide = slides.frame(now_ms);
        render |= slide.is_some();

        let cues = app.drain_tick_cues();
        if render || cues > 0 {
            renderer.set_slide(slide);
            app.with_screen(now_ms, |screen| renderer.render(screen, &mut frame));

            let mut stdout = io::stdout().lock();
            let written = (0..cues)
                .try_for_each(|_| stdout.write_all(TICK_CUE))
                .and_then(|()| stdout.write_all(frame.as_bytes()))
                .and_then(|()| stdout.flush());
            if let Err(err) = written {
                if !output_fault_logged {
                    warn!("terminal write failed: {}", err);
                    output_fault_logged = true;
                }
            }
        }

        if app.input_mut().quit_requested() {
            break;
        }

        Timer::after_millis(FRAME_INTERVAL_MS).await;
    }

    info!("Quiz finished after {} guesses", app.guesses());
    if let Some(analytics) = app.analytics() {
        analytics.log_summary();
    }
    std::process::exit(0);
}
