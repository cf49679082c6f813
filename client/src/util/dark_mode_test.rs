#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn light_theme_without_a_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_returns_the_opposite_theme() {
    assert!(toggle(false));
    assert!(!toggle(true));
    apply(true);
    persist(false);
}

#[test]
fn stored_flag_round_trips_as_json() {
    assert_eq!(encode(true), "true");
    assert_eq!(encode(false), "false");
    assert_eq!(parse_stored(&encode(true)), Some(true));
    assert_eq!(parse_stored(" false "), Some(false));
}

#[test]
fn stored_garbage_is_ignored() {
    assert_eq!(parse_stored(""), None);
    assert_eq!(parse_stored("\"true\""), None);
    assert_eq!(parse_stored("1"), None);
}
