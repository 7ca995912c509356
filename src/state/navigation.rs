//! Reaction to a location fragment change.
//!
//! The hash listener calls `on_route_change` for every `hashchange`; it is the
//! only place the route cell is written and the only place menus are closed
//! by navigation.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::state::menu::MenuState;
use crate::state::route::RouteState;

/// Re-derive `route` from `fragment` and close every menu if the route moved.
/// Returns `true` when the route changed.
pub fn on_route_change(route: &mut RouteState, menu: &mut MenuState, fragment: &str) -> bool {
    if !route.apply_fragment(fragment) {
        return false;
    }
    menu.close_all();
    true
}
