//! Login screen logic
//!
//! Everything here is independent of how the screen is drawn: the
//! controller talks to a [`LoginView`] and a
//! [`CredentialStore`](crate::auth::CredentialStore), and the outcome of an
//! attempt is decided by the pure [`decide`] function.

pub mod controller;
pub mod decision;
pub mod navigation;
pub mod view;

pub use controller::{LoginController, ScreenEvent};
pub use decision::{Outcome, decide};
pub use navigation::Destination;
pub use view::LoginView;
