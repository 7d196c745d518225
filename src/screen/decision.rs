//! Login decision
//!
//! Turns the two entered fields into one of three outcomes.

use super::navigation::Destination;

pub const MSG_MISSING_FIELDS: &str = "Please enter all the fields";
pub const MSG_SIGN_IN_SUCCESS: &str = "Sign in successful";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// Terminal result of one login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    MissingFields,
    InvalidCredentials,
    Success,
}

impl Outcome {
    /// Short status message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::MissingFields => MSG_MISSING_FIELDS,
            Outcome::InvalidCredentials => MSG_INVALID_CREDENTIALS,
            Outcome::Success => MSG_SIGN_IN_SUCCESS,
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            Outcome::Success => Destination::Categories,
            Outcome::MissingFields | Outcome::InvalidCredentials => Destination::Stay,
        }
    }
}

/// Decides the outcome of a login attempt.
///
/// Only an exactly empty field counts as missing; whitespace is passed
/// through untouched. `lookup` is not called when a field is missing.
pub fn decide<F>(username: &str, password: &str, lookup: F) -> Outcome
where
    F: FnOnce(&str, &str) -> bool,
{
    if username.is_empty() || password.is_empty() {
        return Outcome::MissingFields;
    }

    if lookup(username, password) {
        Outcome::Success
    } else {
        Outcome::InvalidCredentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice(username: &str, password: &str) -> bool {
        username == "alice" && password == "wonderland"
    }

    #[test]
    fn test_missing_fields_regardless_of_store() {
        for (user, pass) in [("", ""), ("alice", ""), ("", "wonderland")] {
            assert_eq!(decide(user, pass, |_, _| true), Outcome::MissingFields);
            assert_eq!(decide(user, pass, |_, _| false), Outcome::MissingFields);
        }
    }

    #[test]
    fn test_lookup_skipped_for_missing_fields() {
        let mut called = false;
        let outcome = decide("alice", "", |_, _| {
            called = true;
            true
        });
        assert_eq!(outcome, Outcome::MissingFields);
        assert!(!called);
    }

    #[test]
    fn test_success_and_invalid() {
        assert_eq!(decide("alice", "wonderland", alice), Outcome::Success);
        assert_eq!(
            decide("bob", "wonderland", alice),
            Outcome::InvalidCredentials
        );
        assert_eq!(
            decide("Alice", "wonderland", alice),
            Outcome::InvalidCredentials
        );
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        let mut seen = None;
        let outcome = decide(" ", " ", |u, p| {
            seen = Some((u.to_string(), p.to_string()));
            false
        });
        assert_eq!(outcome, Outcome::InvalidCredentials);
        assert_eq!(seen, Some((" ".to_string(), " ".to_string())));
    }

    #[test]
    fn test_messages_and_destinations() {
        assert_eq!(Outcome::MissingFields.message(), "Please enter all the fields");
        assert_eq!(Outcome::InvalidCredentials.message(), "Invalid Credentials");
        assert_eq!(Outcome::Success.message(), "Sign in successful");

        assert_eq!(Outcome::Success.destination(), Destination::Categories);
        assert_eq!(Outcome::MissingFields.destination(), Destination::Stay);
        assert_eq!(Outcome::InvalidCredentials.destination(), Destination::Stay);
    }
}
