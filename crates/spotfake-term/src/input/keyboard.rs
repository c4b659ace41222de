use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Receiver};
use log::debug;

use spotfake_core::input::{InputEvent, InputProvider};

pub const COMMAND_QUEUE_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy)]
pub struct KeyboardConfig {
    /// Swap the arrow keys so left means authentic.
    arrows_inverted: bool,
    /// `h` toggles hover instead of only starting it.
    hover_toggles: bool,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            arrows_inverted: false,
            hover_toggles: true,
        }
    }
}

impl KeyboardConfig {
    pub const fn with_arrows_inverted(mut self, arrows_inverted: bool) -> Self {
        self.arrows_inverted = arrows_inverted;
        self
    }

    pub const fn with_hover_toggles(mut self, hover_toggles: bool) -> Self {
        self.hover_toggles = hover_toggles;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyCommand {
    Input(InputEvent),
    Quit,
}

/// Line-based command parser. Keeps the hover latch between lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser {
    config: KeyboardConfig,
    hovering: bool,
}

impl CommandParser {
    pub const fn new(config: KeyboardConfig) -> Self {
        Self {
            config,
            hovering: false,
        }
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    /// Map one line of terminal input to a command.
    ///
    /// `f`/`fake` and the left arrow answer forged, `r`/`real` and the right
    /// arrow answer authentic, `c` or an empty line continues.
    pub fn parse(&mut self, line: &str) -> Option<KeyCommand> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (left, right) = if self.config.arrows_inverted {
            (InputEvent::AnswerReal, InputEvent::AnswerFake)
        } else {
            (InputEvent::AnswerFake, InputEvent::AnswerReal)
        };

        let event = match line.trim() {
            "" | "c" | "continue" => InputEvent::Continue,
            "f" | "fake" => InputEvent::AnswerFake,
            "r" | "real" => InputEvent::AnswerReal,
            "\u{1b}[D" | "left" => left,
            "\u{1b}[C" | "right" => right,
            "x" | "dismiss" => InputEvent::DismissSignup,
            "h" | "hover" => self.toggle_hover(),
            "q" | "quit" => return Some(KeyCommand::Quit),
            other => {
                debug!("keyboard: unknown command {:?}", other);
                return None;
            }
        };
        Some(KeyCommand::Input(event))
    }

    fn toggle_hover(&mut self) -> InputEvent {
        if self.hovering && self.config.hover_toggles {
            self.hovering = false;
            InputEvent::HoverEnd
        } else {
            self.hovering = true;
            InputEvent::HoverBegin
        }
    }
}

/// Input provider fed by the stdin reader through a channel.
pub struct KeyboardInput<'a> {
    commands: Receiver<'a, CriticalSectionRawMutex, KeyCommand, COMMAND_QUEUE_DEPTH>,
    quit_requested: bool,
}

impl<'a> KeyboardInput<'a> {
    pub fn new(
        commands: Receiver<'a, CriticalSectionRawMutex, KeyCommand, COMMAND_QUEUE_DEPTH>,
    ) -> Self {
        Self {
            commands,
            quit_requested: false,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl InputProvider for KeyboardInput<'_> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while let Ok(command) = self.commands.try_receive() {
            match command {
                KeyCommand::Input(event) => return Ok(Some(event)),
                KeyCommand::Quit => self.quit_requested = true,
            }
        }
        Ok(None)
    }
}
