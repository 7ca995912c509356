//! Root application component with hash routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::footer::Footer;
use crate::components::nav::Navbar;
use crate::config::BRAND;
use crate::contact::ContactEndpoint;
use crate::pages::LayoutView;
use crate::state::menu::MenuState;
use crate::state::route::RouteState;
use crate::util::location;

/// Root application component.
///
/// Owns the route cell, the menu cell and the contact endpoint. The hash
/// listener is the only writer of the route cell and closes the menus on every
/// route change. Renders whichever layout the current route composes to. Unknown routes render an empty `<main>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let route = RwSignal::new(RouteState::from_fragment(&location::current_fragment()));
    let menu = RwSignal::new(MenuState::default());

    provide_context(route);
    provide_context(menu);
    provide_context(ContactEndpoint::default());

    location::install_hash_listener(route, menu);
    location::ensure_fragment();

    let layout = Memo::new(move |_| route.with(RouteState::layout));
    let title = move || layout.get().map_or_else(|| BRAND.name.to_owned(), |l| l.document_title());

    view! {
        <Title text=title/>
        <div class="site" style=format!("background: {}; color: {}", BRAND.palette.bg, BRAND.palette.text)>
            <Navbar/>
            <main class="site__main">
                {move || layout.get().map(|layout| view! { <LayoutView layout=layout/> })}
            </main>
            <Footer/>
        </div>
    }
}
