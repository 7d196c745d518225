//! Terminal command parsing
//!
//! Parses one input line into a terminal command.

use crate::screen::ScreenEvent;

pub const HELP_TEXT: &[&str] = &[
    "USER <name>     set the username field",
    "PASS <secret>   set the password field",
    "LOGIN           press the log in button",
    "SIGNUP          follow the sign up link",
    "REGISTER        press the register button",
    "HELP            show this list",
    "QUIT            leave the screen",
];

/// A command typed on the terminal.
///
/// `User` and `Pass` carry the rest of the line verbatim; an empty value
/// clears the field.
#[derive(PartialEq)]
pub enum TerminalCommand {
    User(String),
    Pass(String),
    Press(ScreenEvent),
    Help,
    Quit,
    Unknown(String),
}

impl TerminalCommand {
    /// Name used in logs. Never includes anything the user typed.
    pub fn name(&self) -> &'static str {
        match self {
            TerminalCommand::User(_) => "USER",
            TerminalCommand::Pass(_) => "PASS",
            TerminalCommand::Press(ScreenEvent::LoginPressed) => "LOGIN",
            TerminalCommand::Press(ScreenEvent::SignupLinkPressed) => "SIGNUP",
            TerminalCommand::Press(ScreenEvent::RegisterButtonPressed) => "REGISTER",
            TerminalCommand::Help => "HELP",
            TerminalCommand::Quit => "QUIT",
            TerminalCommand::Unknown(_) => "UNKNOWN",
        }
    }
}

impl std::fmt::Debug for TerminalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalCommand::Pass(_) => f.write_str("Pass(***)"),
            TerminalCommand::User(name) => f.debug_tuple("User").field(name).finish(),
            TerminalCommand::Press(event) => f.debug_tuple("Press").field(event).finish(),
            TerminalCommand::Help => f.write_str("Help"),
            TerminalCommand::Quit => f.write_str("Quit"),
            TerminalCommand::Unknown(cmd) => f.debug_tuple("Unknown").field(cmd).finish(),
        }
    }
}

/// Parses a raw input line into a `TerminalCommand`.
///
/// The command word is case-insensitive. Field values keep their exact
/// spelling and spacing; only the line terminator and the single separator
/// after the command word are removed.
pub fn parse_command(raw: &str) -> TerminalCommand {
    let line = raw.trim_end_matches(['\r', '\n']).trim_start();
    let (cmd, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match cmd.to_ascii_uppercase().as_str() {
        "USER" => TerminalCommand::User(arg.to_string()),
        "PASS" => TerminalCommand::Pass(arg.to_string()),
        "LOGIN" => TerminalCommand::Press(ScreenEvent::LoginPressed),
        "SIGNUP" => TerminalCommand::Press(ScreenEvent::SignupLinkPressed),
        "REGISTER" => TerminalCommand::Press(ScreenEvent::RegisterButtonPressed),
        "HELP" | "?" => TerminalCommand::Help,
        "QUIT" | "Q" => TerminalCommand::Quit,
        _ => TerminalCommand::Unknown(cmd.to_string()),
    }
}
