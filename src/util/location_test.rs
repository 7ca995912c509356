#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn current_fragment_is_empty_without_browser() {
    assert_eq!(current_fragment(), "");
}

#[test]
fn navigate_and_ensure_fragment_are_callable() {
    navigate("/about");
    ensure_fragment();
    assert_eq!(current_fragment(), "");
}
