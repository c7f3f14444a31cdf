use std::io::BufRead;

use snake_common::engine::session::snake_session::SessionCommand;
use snake_common::games::snake::KeyBindings;
use snake_common::log;
use tokio::sync::mpsc;

pub const HELP: &str = "keys: w/a/s/d or up/down/left/right, p pause, enter start, r reset, m mode, q quit";

pub fn parse_command(line: &str) -> Option<SessionCommand> {
    // An empty line is a bare Enter key press.
    let key = if line.is_empty() { "enter" } else { line };

    match key.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(SessionCommand::Quit),
        _ => KeyBindings::intent_for_key(key).map(SessionCommand::Intent),
    }
}

/// Blocking stdin reader; meant to run on its own thread.
pub fn read_commands(command_tx: mpsc::UnboundedSender<SessionCommand>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };

        match parse_command(&line) {
            Some(SessionCommand::Quit) => break,
            Some(command) => {
                if command_tx.send(command).is_err() {
                    return;
                }
            }
            None => println!("{}", HELP),
        }
    }

    log!("Input closed, stopping session");
    let _ = command_tx.send(SessionCommand::Quit);
}
