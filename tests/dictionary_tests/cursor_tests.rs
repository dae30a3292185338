//! Pagination Cursor Tests
//!
//! Tests verify:
//! - State after start_over for one and many definitions
//! - advance / retreat transitions and boundary flags
//! - Navigation past either end panics

use jhelp::dictionary::{Cursor, CursorState, DefinitionCache, DefinitionSequence};

// =============================================================================
// Helper Functions
// =============================================================================

fn cache_with(term: &str, items: &[&str]) -> DefinitionCache {
    let mut cache = DefinitionCache::new();
    cache.put(
        term,
        DefinitionSequence::new(items.iter().map(|s| s.to_string()).collect()).unwrap(),
    );
    cache
}

const ORBIT: &[&str] = &["the path of a body in space", "to circle around"];

// =============================================================================
// Initial State Tests
// =============================================================================

#[test]
fn test_new_cursor_is_empty() {
    let cursor = Cursor::new();
    assert_eq!(cursor.state(), CursorState::Empty);
    assert!(cursor.is_empty());
    assert_eq!(cursor.index(), None);
    assert_eq!(cursor.current(), None);
    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
}

#[test]
fn test_start_over_on_uncached_term_stays_empty() {
    let cache = cache_with("orbit", ORBIT);
    let mut cursor = Cursor::new();

    assert_eq!(cursor.start_over(&cache, "zzz"), CursorState::Empty);
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.term(), None);
}

#[test]
fn test_start_over_single_definition() {
    let cache = cache_with("lone", &["only one"]);
    let mut cursor = Cursor::new();

    assert_eq!(cursor.start_over(&cache, "lone"), CursorState::AtFirst);
    assert_eq!(cursor.current(), Some("only one"));
    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
}

#[test]
fn test_start_over_many_definitions() {
    let cache = cache_with("orbit", ORBIT);
    let mut cursor = Cursor::new();

    cursor.start_over(&cache, "orbit");
    assert_eq!(cursor.state(), CursorState::AtFirst);
    assert_eq!(cursor.current(), Some(ORBIT[0]));
    assert_eq!(cursor.index(), Some(0));
    assert_eq!(cursor.term(), Some("orbit"));
    assert_eq!(cursor.len(), 2);
    assert!(cursor.has_next());
    assert!(!cursor.has_previous());
}

#[test]
fn test_start_over_returns_to_first() {
    let cache = cache_with("orbit", ORBIT);
    let mut cursor = Cursor::new();

    cursor.start_over(&cache, "orbit");
    cursor.advance();
    cursor.start_over(&cache, "orbit");

    assert_eq!(cursor.index(), Some(0));
    assert_eq!(cursor.current(), Some(ORBIT[0]));
}

// =============================================================================
// Navigation Tests
// =============================================================================

#[test]
fn test_orbit_scenario() {
    let cache = cache_with("orbit", ORBIT);
    let mut cursor = Cursor::new();
    cursor.start_over(&cache, "orbit");

    assert_eq!(cursor.advance(), Some(ORBIT[1]));
    assert_eq!(cursor.state(), CursorState::AtLast);
    assert!(!cursor.has_next());
    assert!(cursor.has_previous());

    assert_eq!(cursor.retreat(), Some(ORBIT[0]));
    assert_eq!(cursor.state(), CursorState::AtFirst);
    assert!(cursor.has_next());
}

#[test]
fn test_walk_through_middle() {
    let cache = cache_with("t", &["a", "b", "c", "d"]);
    let mut cursor = Cursor::new();
    cursor.start_over(&cache, "t");

    cursor.advance();
    assert_eq!(cursor.state(), CursorState::InMiddle);
    assert!(cursor.has_next() && cursor.has_previous());

    cursor.advance();
    assert_eq!(cursor.state(), CursorState::InMiddle);
    assert_eq!(cursor.current(), Some("c"));

    cursor.advance();
    assert_eq!(cursor.state(), CursorState::AtLast);
    assert_eq!(cursor.current(), Some("d"));
}

#[test]
fn test_advance_then_retreat_is_identity() {
    let cache = cache_with("t", &["a", "b", "c"]);
    let mut cursor = Cursor::new();
    cursor.start_over(&cache, "t");
    cursor.advance();

    let (index, current) = (cursor.index(), cursor.current().map(str::to_string));
    cursor.advance();
    cursor.retreat();

    assert_eq!(cursor.index(), index);
    assert_eq!(cursor.current().map(str::to_string), current);
}

#[test]
fn test_reset_clears_selection() {
    let cache = cache_with("orbit", ORBIT);
    let mut cursor = Cursor::new();
    cursor.start_over(&cache, "orbit");

    cursor.reset();
    assert_eq!(cursor.state(), CursorState::Empty);
    assert_eq!(cursor.len(), 0);
}

// =============================================================================
// Precondition Tests
// =============================================================================

#[test]
#[should_panic(expected = "no next definition")]
fn test_advance_at_last_panics() {
    let cache = cache_with("orbit", ORBIT);
    let mut cursor = Cursor::new();
    cursor.start_over(&cache, "orbit");
    cursor.advance();
    cursor.advance();
}

#[test]
#[should_panic(expected = "no previous definition")]
fn test_retreat_at_first_panics() {
    let cache = cache_with("orbit", ORBIT);
    let mut cursor = Cursor::new();
    cursor.start_over(&cache, "orbit");
    cursor.retreat();
}

#[test]
#[should_panic(expected = "no next definition")]
fn test_advance_on_empty_panics() {
    Cursor::new().advance();
}

#[test]
#[should_panic(expected = "no previous definition")]
fn test_retreat_on_empty_panics() {
    Cursor::new().retreat();
}

#[test]
#[should_panic(expected = "no next definition")]
fn test_advance_single_definition_panics() {
    let cache = cache_with("lone", &["only one"]);
    let mut cursor = Cursor::new();
    cursor.start_over(&cache, "lone");
    cursor.advance();
}
