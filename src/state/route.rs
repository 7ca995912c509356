//! Current route derived from the URL fragment.
//!
//! DESIGN
//! ======
//! `RouteState` is the single owned route cell. The hash listener in
//! `util::location` is its only writer, through `navigation::on_route_change`; views read it through context and
//! recompose whenever `changes` moves. Any string is accepted as a path;
//! whether it names a page is decided by `compose`.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::compose::{Layout, compose};

/// Path used when the fragment is empty.
pub const DEFAULT_PATH: &str = "/";

/// Derive a route path from a location fragment (`#/about` -> `/about`).
pub fn fragment_to_path(fragment: &str) -> String {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    if path.is_empty() {
        DEFAULT_PATH.to_owned()
    } else {
        path.to_owned()
    }
}

/// Link target for a route path (`/about` -> `#/about`).
pub fn path_to_fragment(path: &str) -> String {
    format!("#{path}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteState {
    pub path: String,
    /// Number of route changes observed since startup.
    pub changes: u64,
}

impl Default for RouteState {
    fn default() -> Self {
        Self { path: DEFAULT_PATH.to_owned(), changes: 0 }
    }
}

impl RouteState {
    pub fn from_fragment(fragment: &str) -> Self {
        Self { path: fragment_to_path(fragment), changes: 0 }
    }

    /// Re-derive the path from `fragment`. Returns `true` when the route changed.
    pub fn apply_fragment(&mut self, fragment: &str) -> bool {
        let next = fragment_to_path(fragment);
        if next == self.path {
            return false;
        }
        self.path = next;
        self.changes += 1;
        true
    }

    pub fn layout(&self) -> Option<Layout> {
        compose(&self.path)
    }
}
