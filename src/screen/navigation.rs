//! Navigation targets reachable from the login screen

use std::fmt;

/// The screen shown after an event has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The registration screen
    Registration,
    /// The post-login landing screen listing categories
    Categories,
    /// Remain on the login screen
    Stay,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Registration => write!(f, "registration"),
            Destination::Categories => write!(f, "categories"),
            Destination::Stay => write!(f, "login"),
        }
    }
}
