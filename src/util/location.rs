//! Browser glue for the hash router.
//!
//! Reads and writes `window.location.hash` and feeds `hashchange` events into
//! the route cell. Requires a browser environment; without the `csr` feature
//! every function is inert (empty fragment, no navigation, no listener).

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use leptos::prelude::*;

use crate::state::menu::MenuState;
#[cfg(feature = "csr")]
use crate::state::navigation::on_route_change;
use crate::state::route::{DEFAULT_PATH, RouteState};

/// Current location fragment including the leading `#`, or empty.
pub fn current_fragment() -> String {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        match window.location().hash() {
            Ok(hash) => hash,
            Err(err) => {
                log::warn!("failed to read location hash: {err:?}");
                String::new()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Point the fragment at `path`. The resulting `hashchange` updates the route.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn navigate(path: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_hash(path) {
            log::warn!("failed to set location hash to {path}: {err:?}");
        }
    }
}

/// Rewrite an empty fragment to `#/` so the address bar names the active page.
pub fn ensure_fragment() {
    if current_fragment().is_empty() {
        navigate(DEFAULT_PATH);
    }
}

/// Re-derive `route` on every `hashchange`, whatever triggered it, closing
/// `menu` when the route moves.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn install_hash_listener(route: RwSignal<RouteState>, menu: RwSignal<MenuState>) {
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            let fragment = current_fragment();
            let mut next_route = route.get_untracked();
            let mut next_menu = menu.get_untracked();
            if on_route_change(&mut next_route, &mut next_menu, &fragment) {
                log::debug!("route changed to {} (change #{})", next_route.path, next_route.changes);
                route.set(next_route);
                menu.set(next_menu);
            }
        });
        on_cleanup(move || handle.remove());
    }
}
