//! "Book a consult" banner closing most layouts.

use leptos::prelude::*;

use crate::compose::Route;
use crate::components::layout::Container;
use crate::config::BRAND;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <Container>
                <div class="cta__card">
                    <div class="cta__copy">
                        <h3>"Ready to launch and lift?"</h3>
                        <p>"Get a free 30‑minute consult. We’ll map a path from idea to impact."</p>
                    </div>
                    <div class="cta__action">
                        <a
                            class="button"
                            href=Route::Contact.href()
                            style=format!("background: {}", BRAND.palette.gold)
                        >
                            "Book a consult"
                        </a>
                    </div>
                </div>
            </Container>
        </section>
    }
}
