//! Login controller
//!
//! Handles the three controls on the login screen. Every handler runs to
//! completion synchronously; attempts are independent of each other.

use super::decision::{Outcome, decide};
use super::navigation::Destination;
use super::view::LoginView;
use crate::auth::CredentialStore;
use log::{debug, info};

/// A press of one of the screen's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// The primary "log in" control
    LoginPressed,
    /// The "sign up" text link
    SignupLinkPressed,
    /// The "register" button
    RegisterButtonPressed,
}

pub struct LoginController<V, S> {
    view: V,
    store: S,
}

impl<V: LoginView, S: CredentialStore> LoginController<V, S> {
    pub fn new(view: V, store: S) -> Self {
        Self { view, store }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (V, S) {
        (self.view, self.store)
    }

    /// Dispatches a control press and returns where the screen went.
    pub fn handle(&mut self, event: ScreenEvent) -> Destination {
        match event {
            ScreenEvent::LoginPressed => self.on_login_pressed().destination(),
            ScreenEvent::SignupLinkPressed => self.on_signup_pressed(),
            ScreenEvent::RegisterButtonPressed => self.on_register_pressed(),
        }
    }

    /// Runs one login attempt against the current field contents.
    ///
    /// The fields are left as typed so a failed attempt can be retried.
    pub fn on_login_pressed(&mut self) -> Outcome {
        let username = self.view.read_username();
        let password = self.view.read_password();

        let store = &self.store;
        let outcome = decide(&username, &password, |u, p| store.verify(u, p));
        debug!("Login attempt for '{}': {:?}", username, outcome);

        self.view.show_message(outcome.message());

        let destination = outcome.destination();
        if destination != Destination::Stay {
            info!("User '{}' signed in", username);
            self.view.navigate(destination);
        }

        outcome
    }

    /// The sign-up link goes straight to registration.
    pub fn on_signup_pressed(&mut self) -> Destination {
        self.go_to_registration()
    }

    /// The register button goes straight to registration.
    pub fn on_register_pressed(&mut self) -> Destination {
        self.go_to_registration()
    }

    fn go_to_registration(&mut self) -> Destination {
        info!("Navigating to registration");
        self.view.navigate(Destination::Registration);
        Destination::Registration
    }
}
