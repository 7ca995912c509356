//! Services overview grid.

use leptos::prelude::*;

use crate::components::layout::{Container, Pill};
use crate::components::service_card::ServiceCard;
use crate::content::menu_entries;

#[component]
pub fn ServicesOverview() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <Container>
                <div class="services__intro">
                    <Pill>"Full‑stack startup solutions"</Pill>
                    <h2>"What we can do for you"</h2>
                    <p>
                        "Pick a lane or combine streams. We meet you where you are — from problem/solution fit to scaling."
                    </p>
                </div>
                <div class="services__grid">
                    {menu_entries().map(|entry| view! { <ServiceCard entry=entry/> }).collect_view()}
                </div>
            </Container>
        </section>
    }
}
