//! Terminal implementation of the login view
//!
//! Keeps the two field buffers and queues output lines until the session
//! writes them out.

use crate::screen::{Destination, LoginView};

#[derive(Debug, Default)]
pub struct TerminalView {
    username: String,
    password: String,
    output: Vec<String>,
    last_destination: Option<Destination>,
}

impl TerminalView {
    pub fn set_username(&mut self, username: String) {
        self.username = username;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    /// Drains the queued output lines.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    pub fn last_destination(&self) -> Option<Destination> {
        self.last_destination
    }
}

impl LoginView for TerminalView {
    fn read_username(&self) -> String {
        self.username.clone()
    }

    fn read_password(&self) -> String {
        self.password.clone()
    }

    fn show_message(&mut self, message: &str) {
        self.push_line(message);
    }

    fn navigate(&mut self, destination: Destination) {
        self.push_line(format!("-> {}", destination));
        self.last_destination = Some(destination);
    }
}
