//! Terminal session loop
//!
//! Reads one line at a time and runs each command to completion before
//! reading the next, so there is never more than one login attempt in
//! flight.

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::CredentialStore;
use crate::config::ScreenConfig;
use crate::error::ScreenError;
use crate::screen::{Destination, LoginController, Outcome, ScreenEvent};
use crate::terminal::commands::{HELP_TEXT, TerminalCommand, parse_command};
use crate::terminal::view::TerminalView;

/// What happened during a session, reported once input ends.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub attempts: usize,
    pub last_outcome: Option<Outcome>,
    pub last_destination: Option<Destination>,
}

/// Runs the login screen over a text stream until `QUIT` or end of input.
pub async fn run_session<R, W, S>(
    mut reader: R,
    mut writer: W,
    store: S,
    settings: &ScreenConfig,
) -> Result<SessionSummary, ScreenError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: CredentialStore,
{
    let mut screen = LoginController::new(TerminalView::default(), store);
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();

    write_lines(
        &mut writer,
        &[
            settings.greeting.clone(),
            "Type HELP for commands.".to_string(),
        ],
    )
    .await?;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input, closing login screen");
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(_) => {
                warn!("Rejected input line that is not valid UTF-8");
                write_lines(&mut writer, &["Input is not valid text".to_string()]).await?;
                continue;
            }
        };

        let content_len = line.trim_end_matches(['\r', '\n']).len();
        if content_len > settings.max_input_length {
            warn!(
                "Rejected input line of {} bytes (limit {})",
                content_len, settings.max_input_length
            );
            write_lines(&mut writer, &["Input too long".to_string()]).await?;
            continue;
        }

        let command = parse_command(line);
        debug!("Received: {}", command.name());

        let view = screen.view_mut();
        match command {
            TerminalCommand::User(username) => view.set_username(username),
            TerminalCommand::Pass(password) => view.set_password(password),
            TerminalCommand::Press(ScreenEvent::LoginPressed) => {
                let outcome = screen.on_login_pressed();
                summary.attempts += 1;
                summary.last_outcome = Some(outcome);
            }
            TerminalCommand::Press(event) => {
                screen.handle(event);
            }
            TerminalCommand::Help => {
                for entry in HELP_TEXT {
                    view.push_line(*entry);
                }
            }
            TerminalCommand::Quit => {
                view.push_line("Goodbye");
                let output = view.take_output();
                write_lines(&mut writer, &output).await?;
                break;
            }
            TerminalCommand::Unknown(cmd) if cmd.is_empty() => {}
            TerminalCommand::Unknown(cmd) => {
                view.push_line(format!("Unknown command '{}', type HELP", cmd));
            }
        }

        let output = screen.view_mut().take_output();
        write_lines(&mut writer, &output).await?;
    }

    let (view, _store) = screen.into_parts();
    summary.last_destination = view.last_destination();
    Ok(summary)
}

async fn write_lines<W>(writer: &mut W, lines: &[String]) -> Result<(), ScreenError>
where
    W: AsyncWrite + Unpin,
{
    if lines.is_empty() {
        return Ok(());
    }
    for line in lines {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;
    Ok(())
}
