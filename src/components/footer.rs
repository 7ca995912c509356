//! Site footer with copyright and secondary links.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::compose::Route;
use crate::components::layout::Container;
use crate::config::BRAND;

const FOOTER_LINKS: &[(Route, &str)] = &[(Route::About, "About"), (Route::Services, "Services"), (Route::Contact, "Contact")];

/// Copyright line; omits the year when the clock is unavailable.
pub fn copyright_line(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("© {year} {}. All rights reserved.", BRAND.name),
        None => format!("© {}. All rights reserved.", BRAND.name),
    }
}

fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <Container class="footer__inner">
                <div>{copyright_line(current_year())}</div>
                <div class="footer__links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|(route, label)| view! { <a class="footer__link" href=route.href()>{*label}</a> })
                        .collect_view()}
                </div>
            </Container>
        </footer>
    }
}
