//! Home-only sections: hero and the full-stack pitch.

use leptos::prelude::*;

use crate::compose::Route;
use crate::components::icon::Icon;
use crate::components::layout::{Container, GradientBg, Pill};
use crate::config::BRAND;
use crate::content::IconName;
use crate::content::copy::{FULL_STACK_PILLARS, HERO_BENEFITS, HERO_CARD_TAGS, HERO_HIGHLIGHTS};

#[component]
pub fn Hero() -> impl IntoView {
    let palette = BRAND.palette;

    view! {
        <section class="hero">
            <GradientBg/>
            <Container class="hero__inner">
                <div class="hero__copy">
                    <Pill class="hero__pill">
                        <span class="hero__dot" style=format!("background: {}", palette.purple)></span>
                        "From Idea to IPO — We’ve got you"
                    </Pill>
                    <h1 class="hero__title" style=format!("color: {}", palette.text)>
                        "Launch faster. Lift higher."
                    </h1>
                    <p class="hero__lead">
                        {format!(
                            "{} is your full‑stack partner for capital, customers, code and compliance — all under one roof.",
                            BRAND.name,
                        )}
                    </p>
                    <div class="hero__actions">
                        <a class="button button--outline" href=Route::Services.href()>
                            "Explore Services"
                            <Icon name=IconName::ChevronRight/>
                        </a>
                        <a
                            class="button"
                            href=Route::Contact.href()
                            style=format!("background: {}; color: white", palette.purple)
                        >
                            "Book a Free Consult"
                        </a>
                    </div>
                    <div class="hero__highlights">
                        {HERO_HIGHLIGHTS
                            .iter()
                            .map(|text| {
                                view! {
                                    <span class="hero__highlight">
                                        <Icon name=IconName::CheckCircle/>
                                        {*text}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="hero__cards">
                    <div class="hero-card">
                        <div class="hero-card__eyebrow" style=format!("color: {}", palette.indigo)>
                            "Your runway, extended"
                        </div>
                        <div class="hero-card__title">"Fundraising & GTM, done right"</div>
                        <div class="tag-grid">
                            {HERO_CARD_TAGS.iter().map(|tag| view! { <div class="tag">{*tag}</div> }).collect_view()}
                        </div>
                    </div>
                    <div class="hero-card hero-card--warm">
                        <div class="hero-card__eyebrow" style=format!("color: {}", palette.green)>
                            "What you get"
                        </div>
                        <ul class="hero-card__list">
                            {HERO_BENEFITS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[component]
pub fn FullStackSection() -> impl IntoView {
    view! {
        <section class="full-stack">
            <Container>
                <div class="full-stack__card">
                    <Pill>"Full‑stack services"</Pill>
                    <h3>"One partner for strategy, growth, product and ops"</h3>
                    <p>
                        "We combine investor readiness, growth marketing, product engineering, tech support and finance under a single roof. Mix‑and‑match modules or run end‑to‑end — we plug into your team as a fractional squad."
                    </p>
                    <div class="full-stack__pillars">
                        {FULL_STACK_PILLARS
                            .iter()
                            .map(|pillar| view! { <div class="full-stack__pillar">{*pillar}</div> })
                            .collect_view()}
                    </div>
                </div>
            </Container>
        </section>
    }
}
