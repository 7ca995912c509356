//! Sticky site header with the Services and Company dropdowns.
//!
//! DESIGN
//! ======
//! Dropdown and drawer visibility live in the shared `MenuState` cell so the
//! hash listener can close everything when the route changes. Links also close
//! the menus on click, because a link to the current page fires no
//! `hashchange`. Service links are generated from the catalog; there is no
//! second list to keep in sync.

use leptos::prelude::*;

use crate::compose::Route;
use crate::components::icon::Icon;
use crate::components::layout::Container;
use crate::config::BRAND;
use crate::content::{IconName, menu_entries};
use crate::state::menu::{MenuState, NavMenu};

#[derive(Clone, Copy)]
struct CompanyLink {
    route: Route,
    icon: IconName,
    label: &'static str,
    blurb: &'static str,
}

const COMPANY_LINKS: &[CompanyLink] = &[
    CompanyLink { route: Route::About, icon: IconName::Rocket, label: "About", blurb: "Who we are" },
    CompanyLink { route: Route::Contact, icon: IconName::Phone, label: "Contact", blurb: "Book a consult" },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    view! {
        <header class="navbar">
            <Container class="navbar__bar">
                <a class="navbar__brand" href=Route::Home.href()>
                    <span class="navbar__logo">
                        <Icon name=IconName::Rocket/>
                    </span>
                    <span class="navbar__brand-text">
                        <span class="navbar__name" style=format!("color: {}", BRAND.palette.indigo)>
                            {BRAND.name}
                        </span>
                        <span class="navbar__domain">{BRAND.domain}</span>
                    </span>
                </a>

                <nav class="navbar__desktop">
                    <NavDropdown menu_id=NavMenu::Services label="Services">
                        {service_menu_items()}
                    </NavDropdown>
                    <NavDropdown menu_id=NavMenu::Company label="Company">
                        {company_menu_items()}
                    </NavDropdown>
                </nav>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu.update(MenuState::toggle_mobile)
                >
                    {move || {
                        let icon = if menu.get().mobile_open { IconName::Close } else { IconName::Menu };
                        view! { <Icon name=icon/> }
                    }}
                </button>
            </Container>

            <Show when=move || menu.get().mobile_open>
                <nav class="navbar__mobile">
                    <Container class="navbar__mobile-inner">
                        <details class="navbar__group" open>
                            <summary>"Services"</summary>
                            <div class="navbar__group-links">
                                {menu_entries()
                                    .map(|entry| {
                                        view! {
                                            <a
                                                class="navbar__mobile-link"
                                                href=Route::Service(entry.slug).href()
                                                on:click=move |_| menu.update(MenuState::close_all)
                                            >
                                                {entry.nav_label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </details>
                        <details class="navbar__group">
                            <summary>"Company"</summary>
                            <div class="navbar__group-links">
                                {COMPANY_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                class="navbar__mobile-link"
                                                href=link.route.href()
                                                on:click=move |_| menu.update(MenuState::close_all)
                                            >
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </details>
                    </Container>
                </nav>
            </Show>
        </header>
    }
}

/// Trigger button plus hover/focus dropdown panel.
#[component]
fn NavDropdown(menu_id: NavMenu, label: &'static str, children: ChildrenFn) -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    view! {
        <div
            class="nav-dropdown"
            on:mouseenter=move |_| menu.update(|m| m.open(menu_id))
            on:focusin=move |_| menu.update(|m| m.open(menu_id))
        >
            <button
                class="nav-dropdown__trigger"
                aria-expanded=move || menu.get().is_open(menu_id).to_string()
                on:click=move |_| menu.update(|m| m.toggle(menu_id))
            >
                {label}
            </button>
            <Show when=move || menu.get().is_open(menu_id)>
                <div class="nav-dropdown__panel" on:mouseleave=move |_| menu.update(|m| m.close(menu_id))>
                    {children()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MenuItem(href: String, icon: IconName, label: &'static str, blurb: &'static str) -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    view! {
        <a class="menu-item" href=href on:click=move |_| menu.update(MenuState::close_all)>
            <span class="menu-item__icon">
                <Icon name=icon/>
            </span>
            <span class="menu-item__text">
                <span class="menu-item__label">{label}</span>
                <span class="menu-item__blurb">{blurb}</span>
            </span>
        </a>
    }
}

fn service_menu_items() -> impl IntoView {
    menu_entries()
        .map(|entry| {
            view! {
                <MenuItem
                    href=Route::Service(entry.slug).href()
                    icon=entry.icon
                    label=entry.nav_label
                    blurb=entry.nav_blurb
                />
            }
        })
        .collect_view()
}

fn company_menu_items() -> impl IntoView {
    COMPANY_LINKS
        .iter()
        .map(|link| {
            view! { <MenuItem href=link.route.href() icon=link.icon label=link.label blurb=link.blurb/> }
        })
        .collect_view()
}
