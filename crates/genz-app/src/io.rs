use std::io::BufRead;

use genz_types::{AppEvent, UiEvent};
use kanal::AsyncSender;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tokio_util::sync::CancellationToken;

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Query(String),
    /// Zero-based index into the results on screen
    Copy(usize),
    Share(usize),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_input(line: &str) -> InputCommand {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.strip_prefix(':') else {
        return InputCommand::Query(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("q" | "quit" | "exit", None) => InputCommand::Quit,
        ("h" | "help" | "?", None) => InputCommand::Help,
        ("c" | "copy", Some(n)) => match entry_index(n) {
            Some(i) => InputCommand::Copy(i),
            None => InputCommand::Invalid(line.to_string()),
        },
        ("s" | "share", Some(n)) => match entry_index(n) {
            Some(i) => InputCommand::Share(i),
            None => InputCommand::Invalid(line.to_string()),
        },
        _ => InputCommand::Invalid(line.to_string()),
    }
}

/// Entries are numbered from 1 on screen
fn entry_index(n: &str) -> Option<usize> {
    n.parse::<usize>().ok()?.checked_sub(1)
}

impl InputCommand {
    pub fn into_event(self) -> AppEvent {
        match self {
            InputCommand::Query(query) => AppEvent::QueryChanged(query),
            InputCommand::Copy(i) => AppEvent::CopyEntry(i),
            InputCommand::Share(i) => AppEvent::ShareEntry(i),
            InputCommand::Quit => AppEvent::UiEvent(UiEvent::Close),
            InputCommand::Help | InputCommand::Invalid(_) => AppEvent::UiEvent(UiEvent::Help),
        }
    }
}

/// Read stdin on a plain thread. Tokio's stdin can't be cancelled and would
/// hold up runtime shutdown until the next line arrives.
pub fn spawn_stdin_reader() -> UnboundedReceiver<String> {
    let (tx, rx) = unbounded_channel();

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    rx
}

/// Forward typed lines to the app as events. End of input closes the app.
pub async fn watcher_io(
    mut lines: UnboundedReceiver<String>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Input watcher stopping");
                break;
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    tracing::debug!("Input closed");
                    event_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                    break;
                };

                let command = parse_input(&line);
                if let InputCommand::Invalid(input) = &command {
                    tracing::warn!("Unknown command: {}", input);
                }

                let quit = command == InputCommand::Quit;
                event_tx.send(command.into_event()).await?;
                if quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_are_queries() {
        assert_eq!(parse_input("flex"), InputCommand::Query("flex".to_string()));
        assert_eq!(parse_input(""), InputCommand::Query(String::new()));
        assert_eq!(parse_input(" a b\r"), InputCommand::Query(" a b".to_string()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_input(":copy 1"), InputCommand::Copy(0));
        assert_eq!(parse_input(":s 3"), InputCommand::Share(2));
        assert_eq!(parse_input(":q"), InputCommand::Quit);
        assert_eq!(parse_input(":help"), InputCommand::Help);
    }

    #[test]
    fn test_bad_commands() {
        assert_eq!(parse_input(":copy 0"), InputCommand::Invalid(":copy 0".to_string()));
        assert_eq!(parse_input(":copy x"), InputCommand::Invalid(":copy x".to_string()));
        assert_eq!(parse_input(":share"), InputCommand::Invalid(":share".to_string()));
        assert_eq!(parse_input(":dance"), InputCommand::Invalid(":dance".to_string()));
    }
}
