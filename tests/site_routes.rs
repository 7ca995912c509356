//! End-to-end routing properties: fragment -> route cell -> layout -> content.

use launchlift::compose::{Route, Section, compose};
use launchlift::content::{Slug, lookup, menu_entries};
use launchlift::state::menu::{MenuState, NavMenu};
use launchlift::state::navigation::on_route_change;
use launchlift::state::route::{RouteState, path_to_fragment};

/// Follow a link the way the browser does: set the fragment, then let the
/// hash listener re-derive the route and close the menus.
fn follow(route: &mut RouteState, menu: &mut MenuState, path: &str) {
    on_route_change(route, menu, &path_to_fragment(path));
}

#[test]
fn empty_fragment_renders_home() {
    let route = RouteState::from_fragment("");
    assert_eq!(route.path, "/");
    let layout = route.layout().expect("home layout");
    assert_eq!(layout.route, Route::Home);
    assert_eq!(layout.sections[0], Section::Hero);
}

#[test]
fn mentorship_fragment_renders_detail() {
    let route = RouteState::from_fragment("#/services/mentorship");
    let layout = route.layout().expect("detail layout");
    let entry = layout.service().expect("service entry");
    assert_eq!(entry.title, "1:1 Mentorship");
    let names: Vec<&str> = entry.packages.iter().map(|p| p.name).collect();
    assert_eq!(names, ["Coach", "Advisor"]);
}

#[test]
fn every_menu_link_resolves_to_its_entry() {
    let mut route = RouteState::default();
    let mut menu = MenuState::default();
    for entry in menu_entries() {
        menu.open(NavMenu::Services);
        follow(&mut route, &mut menu, &entry.path());

        let layout = route.layout().expect("detail layout");
        let rendered = layout.service().expect("service entry");
        assert_eq!(rendered.title, entry.title);
        assert_eq!(rendered.packages.len(), entry.packages.len());
        assert!(!menu.any_open(), "menu still open after visiting {}", entry.slug);
    }
}

#[test]
fn menu_slugs_equal_table_keys() {
    let mut menu: Vec<Slug> = menu_entries().map(|entry| entry.slug).collect();
    let mut table: Vec<Slug> = Slug::ALL.iter().copied().filter(|slug| lookup(slug.as_str()).is_some()).collect();
    menu.sort();
    table.sort();
    assert_eq!(menu, table);
    assert_eq!(menu.len(), 8);
}

#[test]
fn unknown_route_renders_nothing() {
    let mut route = RouteState::default();
    let mut menu = MenuState::default();
    follow(&mut route, &mut menu, "/nonexistent");
    assert_eq!(route.layout(), None);
    assert_eq!(compose("/services/not-a-service"), None);
}

#[test]
fn leaving_and_returning_home_is_identical() {
    let mut route = RouteState::default();
    let mut menu = MenuState::default();
    let home = route.layout();
    for path in ["/about", "/services/finance-accounting", "/unknown", "/contact", "/"] {
        follow(&mut route, &mut menu, path);
    }
    assert_eq!(route.layout(), home);
    assert_eq!(route.changes, 5);
}

#[test]
fn company_links_close_the_menu() {
    let mut route = RouteState::default();
    let mut menu = MenuState::default();
    menu.toggle(NavMenu::Company);
    follow(&mut route, &mut menu, "/contact");
    assert!(!menu.is_open(NavMenu::Company));
    let layout = route.layout().expect("contact layout");
    assert!(!layout.has_call_to_action());
}
