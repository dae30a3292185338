//! Session Tests
//!
//! Tests verify:
//! - Cache-first FIND with one round trip per new term
//! - Cursor reset and placement after every FIND
//! - Cache and cursor untouched on not-found and transport errors
//! - ADD / DELETE validation and optional cache invalidation
//! - Independent sessions do not share state

#[path = "../common/mod.rs"]
mod common;

use common::{unused_addr, FakeServer, ORBIT};
use jhelp::protocol::Command;
use jhelp::{Config, CursorState, JHelpError, Lookup, Session};

// =============================================================================
// FIND Tests
// =============================================================================

#[test]
fn test_first_find_goes_to_server_second_uses_cache() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT)]);
    let mut session = Session::new(server.config());

    assert!(session.find("orbit").unwrap().is_found());
    assert_eq!(session.round_trips(), 1);
    assert_eq!(server.requests().len(), 1);

    assert!(session.find("orbit").unwrap().is_found());
    assert_eq!(session.round_trips(), 1);
    assert!(server.requests().is_empty());
}

#[test]
fn test_find_caches_sequence_in_order() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT)]);
    let mut session = Session::new(server.config());

    session.find("orbit").unwrap();

    assert!(session.cache().has("orbit"));
    assert_eq!(session.cache().get("orbit").unwrap().to_vec(), ORBIT);
}

#[test]
fn test_find_is_case_insensitive() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT)]);
    let mut session = Session::new(server.config());

    session.find("Orbit").unwrap();
    session.find("ORBIT").unwrap();

    assert_eq!(session.round_trips(), 1);
    assert_eq!(session.cache().terms().collect::<Vec<_>>(), vec!["orbit"]);
}

#[test]
fn test_find_places_cursor_on_first_definition() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT), ("lone", &["only one"][..])]);
    let mut session = Session::new(server.config());

    session.find("orbit").unwrap();
    let cursor = session.cursor();
    assert_eq!(cursor.current(), Some(ORBIT[0]));
    assert!(!cursor.has_previous());
    assert!(cursor.has_next());

    session.find("lone").unwrap();
    let cursor = session.cursor();
    assert_eq!(cursor.current(), Some("only one"));
    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
}

#[test]
fn test_repeated_find_restarts_cursor() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT)]);
    let mut session = Session::new(server.config());

    session.find("orbit").unwrap();
    session.cursor_mut().advance();
    assert_eq!(session.cursor().state(), CursorState::AtLast);

    session.find("orbit").unwrap();
    assert_eq!(session.cursor().state(), CursorState::AtFirst);
    assert_eq!(session.cursor().current(), Some(ORBIT[0]));
}

#[test]
fn test_find_not_found_leaves_cache_untouched() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT)]);
    let mut session = Session::new(server.config());

    session.find("orbit").unwrap();
    assert_eq!(session.find("zzz").unwrap(), Lookup::NotFound);

    assert!(!session.cache().has("zzz"));
    assert_eq!(session.cache().len(), 1);
    assert_eq!(session.cursor().state(), CursorState::Empty);
}

#[test]
fn test_not_found_is_asked_again() {
    let server = FakeServer::with_dictionary(&[]);
    let mut session = Session::new(server.config());

    session.find("zzz").unwrap();
    session.find("zzz").unwrap();

    assert_eq!(session.round_trips(), 2);
}

#[test]
fn test_find_connection_refused() {
    let config = Config::builder().server_addr(unused_addr()).build();
    let mut session = Session::new(config);

    assert!(matches!(session.find("orbit"), Err(JHelpError::Connect { .. })));
    assert!(session.cache().is_empty());
    assert_eq!(session.cursor().state(), CursorState::Empty);
}

#[test]
fn test_find_blank_term() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT)]);
    let mut session = Session::new(server.config());
    session.find("orbit").unwrap();

    assert!(matches!(session.find(""), Err(JHelpError::InvalidArgument(_))));
    // The cursor is reset even though nothing was looked up
    assert_eq!(session.cursor().state(), CursorState::Empty);
    assert_eq!(session.round_trips(), 1);
}

// =============================================================================
// ADD / DELETE Tests
// =============================================================================

#[test]
fn test_add_validation_messages() {
    let server = FakeServer::with_dictionary(&[]);
    let mut session = Session::new(server.config());

    let message = |result: jhelp::Result<()>| match result {
        Err(JHelpError::InvalidArgument(msg)) => msg,
        other => panic!("Expected InvalidArgument, got {:?}", other),
    };

    assert_eq!(message(session.add("", "")), "Nothing to add");
    assert_eq!(message(session.add(" ", "def")), "Term can not be empty");
    assert_eq!(message(session.add("orbit", "  ")), "Definition can not be empty");
    assert_eq!(session.round_trips(), 0);
}

#[test]
fn test_delete_blank_term() {
    let server = FakeServer::with_dictionary(&[]);
    let mut session = Session::new(server.config());

    assert!(matches!(session.delete(""), Err(JHelpError::InvalidArgument(_))));
    assert_eq!(session.round_trips(), 0);
}

#[test]
fn test_writes_keep_cache_by_default() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT)]);
    let mut session = Session::new(server.config());

    session.find("orbit").unwrap();
    session.add("orbit", "a third meaning").unwrap();
    session.delete("orbit").unwrap();

    assert!(session.cache().has("orbit"));
    assert_eq!(session.cursor().current(), Some(ORBIT[0]));
}

#[test]
fn test_writes_invalidate_cache_when_enabled() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT)]);
    let config = Config::builder()
        .server_addr(server.addr())
        .invalidate_on_write(true)
        .build();
    let mut session = Session::new(config);

    session.find("orbit").unwrap();
    session.add("Orbit", "a third meaning").unwrap();

    assert!(!session.cache().has("orbit"));
    assert_eq!(session.cursor().state(), CursorState::Empty);

    // Next FIND goes back to the server
    session.find("orbit").unwrap();
    assert_eq!(session.round_trips(), 3);
}

#[test]
fn test_failed_writes_are_reported() {
    let config = Config::builder()
        .server_addr(unused_addr())
        .invalidate_on_write(true)
        .build();
    let mut session = Session::new(config);

    assert!(session.add("orbit", "x").is_err());
    assert!(session.delete("orbit").is_err());
}

#[test]
fn test_add_reaches_server() {
    let server = FakeServer::with_dictionary(&[]);
    let mut session = Session::new(server.config());

    session.add("Orbit", "to circle around").unwrap();

    assert_eq!(
        server.next_request(),
        Some(Command::Add {
            term: "orbit".to_string(),
            definition: "to circle around".to_string(),
        })
    );
}

// =============================================================================
// Isolation Tests
// =============================================================================

#[test]
fn test_sessions_are_independent() {
    let server = FakeServer::with_dictionary(&[("orbit", ORBIT)]);
    let mut first = Session::new(server.config());
    let mut second = Session::new(server.config());

    first.find("orbit").unwrap();
    assert!(second.cache().is_empty());
    assert_eq!(second.cursor().state(), CursorState::Empty);

    second.find("orbit").unwrap();
    assert_eq!(first.round_trips(), 1);
    assert_eq!(second.round_trips(), 1);
}

#[test]
fn test_open_validates_config() {
    let config = Config::builder().max_definitions(0).build();
    assert!(matches!(Session::open(config), Err(JHelpError::Config(_))));
}
