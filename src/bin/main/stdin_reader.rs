use std::{
    io::{self, BufRead},
    thread,
};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use log::{debug, warn};
use spotfake_term::input::keyboard::{COMMAND_QUEUE_DEPTH, CommandParser, KeyCommand};

pub type CommandChannel = Channel<CriticalSectionRawMutex, KeyCommand, COMMAND_QUEUE_DEPTH>;

/// Forward parsed stdin lines to `commands`. End of input counts as quit.
pub fn spawn(commands: &'static CommandChannel, mut parser: CommandParser) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("stdin: read failed: {}", err);
                        break;
                    }
                };
                let Some(command) = parser.parse(&line) else {
                    continue;
                };
                if commands.try_send(command).is_err() {
                    warn!("stdin: command queue full, dropped {:?}", command);
                }
                if command == KeyCommand::Quit {
                    return;
                }
            }
            debug!("stdin: closed");
            let _ = commands.try_send(KeyCommand::Quit);
        })?;
    Ok(())
}
