use super::*;
use crate::compose::Route;

// =============================================================
// Fragment parsing
// =============================================================

#[test]
fn empty_fragment_is_root() {
    assert_eq!(fragment_to_path(""), "/");
    assert_eq!(fragment_to_path("#"), "/");
}

#[test]
fn fragment_strips_single_hash() {
    assert_eq!(fragment_to_path("#/services/mentorship"), "/services/mentorship");
    assert_eq!(fragment_to_path("#/about"), "/about");
    assert_eq!(fragment_to_path("/contact"), "/contact");
}

#[test]
fn fragment_keeps_arbitrary_strings() {
    assert_eq!(fragment_to_path("#nonsense"), "nonsense");
    assert_eq!(fragment_to_path("##/about"), "#/about");
}

#[test]
fn path_to_fragment_prefixes_hash() {
    assert_eq!(path_to_fragment("/services"), "#/services");
}

// =============================================================
// RouteState
// =============================================================

#[test]
fn default_state_is_root() {
    let state = RouteState::default();
    assert_eq!(state.path, "/");
    assert_eq!(state.changes, 0);
    assert_eq!(state, RouteState::from_fragment(""));
}

#[test]
fn empty_fragment_renders_home() {
    let state = RouteState::from_fragment("");
    assert_eq!(state.layout().map(|l| l.route), Some(Route::Home));
}

#[test]
fn apply_fragment_reports_changes() {
    let mut state = RouteState::from_fragment("#/");
    assert!(state.apply_fragment("#/about"));
    assert_eq!(state.path, "/about");
    assert_eq!(state.changes, 1);

    assert!(!state.apply_fragment("#/about"));
    assert_eq!(state.changes, 1);

    assert!(state.apply_fragment(""));
    assert_eq!(state.path, "/");
    assert_eq!(state.changes, 2);
}

#[test]
fn unknown_fragment_is_accepted_but_composes_nothing() {
    let mut state = RouteState::default();
    assert!(state.apply_fragment("#/nonexistent"));
    assert_eq!(state.path, "/nonexistent");
    assert_eq!(state.layout(), None);
}

#[test]
fn returning_home_renders_identically() {
    let mut state = RouteState::default();
    let home = state.layout();
    for fragment in ["#/services", "#/services/web-app-dev", "#/missing", "#/contact", "#/"] {
        state.apply_fragment(fragment);
    }
    assert_eq!(state.path, "/");
    assert_eq!(state.layout(), home);
}
