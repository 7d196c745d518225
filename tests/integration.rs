use local_login::auth::{Credential, CredentialStore, SqliteCredentialStore};
use local_login::config::ScreenConfig;
use local_login::screen::{Destination, Outcome};
use local_login::terminal::run_session;

// Helper to build a store holding only alice
fn alice_store() -> SqliteCredentialStore {
    let store = SqliteCredentialStore::open_in_memory().unwrap();
    assert!(store.insert(&Credential::new("alice", "wonderland")).unwrap());
    store
}

// Helper to run a scripted session and collect the output
async fn run_script(store: &SqliteCredentialStore, script: &str) -> (Outcome, String) {
    let mut output = Vec::new();
    let summary = run_session(script.as_bytes(), &mut output, store, &ScreenConfig::default())
        .await
        .unwrap();
    (
        summary.last_outcome.unwrap(),
        String::from_utf8(output).unwrap(),
    )
}

#[test]
fn test_decide_scenario() {
    let store = alice_store();
    let lookup = |u: &str, p: &str| store.verify(u, p);

    assert_eq!(local_login::decide("alice", "wonderland", lookup), Outcome::Success);
    assert_eq!(local_login::decide("alice", "", lookup), Outcome::MissingFields);
    assert_eq!(
        local_login::decide("bob", "wonderland", lookup),
        Outcome::InvalidCredentials
    );
    assert_eq!(local_login::decide("", "", lookup), Outcome::MissingFields);
}

#[tokio::test]
async fn test_success_navigates_to_categories() {
    let store = alice_store();
    let mut output = Vec::new();
    let summary = run_session(
        "USER alice\nPASS wonderland\nLOGIN\n".as_bytes(),
        &mut output,
        &store,
        &ScreenConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(summary.last_outcome, Some(Outcome::Success));
    assert_eq!(summary.last_destination, Some(Destination::Categories));
    assert!(String::from_utf8(output).unwrap().contains("Sign in successful"));
}

#[tokio::test]
async fn test_scenario_failures() {
    let store = alice_store();

    let (outcome, _) = run_script(&store, "USER alice\nLOGIN\n").await;
    assert_eq!(outcome, Outcome::MissingFields);

    let (outcome, output) = run_script(&store, "USER bob\nPASS wonderland\nLOGIN\n").await;
    assert_eq!(outcome, Outcome::InvalidCredentials);
    assert!(output.contains("Invalid Credentials"));

    let (outcome, output) = run_script(&store, "LOGIN\n").await;
    assert_eq!(outcome, Outcome::MissingFields);
    assert!(output.contains("Please enter all the fields"));

    let (outcome, _) = run_script(&store, "USER Alice\nPASS wonderland\nLOGIN\n").await;
    assert_eq!(outcome, Outcome::InvalidCredentials);
}

#[tokio::test]
async fn test_register_with_invalid_fields() {
    let store = alice_store();
    let mut output = Vec::new();
    let summary = run_session(
        "USER bob\nPASS nope\nREGISTER\n".as_bytes(),
        &mut output,
        &store,
        &ScreenConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(summary.attempts, 0);
    assert_eq!(summary.last_destination, Some(Destination::Registration));
}
