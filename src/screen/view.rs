//! View interface for the login screen
//!
//! Each platform provides its own implementation; the controller only ever
//! goes through these four capabilities.

use super::navigation::Destination;

pub trait LoginView {
    /// Current contents of the username field.
    fn read_username(&self) -> String;

    /// Current contents of the password field.
    fn read_password(&self) -> String;

    /// Shows a short, transient status message.
    fn show_message(&mut self, message: &str);

    /// Transfers control to another screen.
    fn navigate(&mut self, destination: Destination);
}
