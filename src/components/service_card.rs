//! Overview card linking to a service detail page.

use leptos::prelude::*;

use crate::compose::Route;
use crate::components::icon::Icon;
use crate::content::{IconName, ServiceEntry};

#[component]
pub fn ServiceCard(entry: &'static ServiceEntry) -> impl IntoView {
    view! {
        <article class="service-card">
            <div class="service-card__head">
                <span class="service-card__icon" style=format!("background: {}", entry.hue)>
                    <Icon name=entry.icon/>
                </span>
                <h3 class="service-card__title">{entry.card_title}</h3>
            </div>
            <p class="service-card__blurb">{entry.card_blurb}</p>
            <a class="service-card__link" href=Route::Service(entry.slug).href()>
                "Learn more"
                <Icon name=IconName::ArrowRight/>
            </a>
        </article>
    }
}
