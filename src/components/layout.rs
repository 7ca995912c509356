//! Small layout primitives shared by every section.

use leptos::prelude::*;

use crate::config::BRAND;

/// Centered, max-width content column.
#[component]
pub fn Container(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("container {class}")>{children()}</div> }
}

/// Rounded label chip.
#[component]
pub fn Pill(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <span class=format!("pill {class}")>{children()}</span> }
}

/// Blurred brand-colored blobs behind hero-style sections.
#[component]
pub fn GradientBg() -> impl IntoView {
    let palette = BRAND.palette;
    let blob = |modifier: &str, color: &str, at: &str| {
        view! {
            <div
                class=format!("gradient-bg__blob gradient-bg__blob--{modifier}")
                style=format!("background: radial-gradient(circle at {at}, {color}, transparent 60%)")
            ></div>
        }
    };

    view! {
        <div class="gradient-bg" aria-hidden="true">
            {blob("top", palette.purple, "30% 30%")}
            {blob("bottom", palette.green, "70% 70%")}
            {blob("center", palette.gold, "50% 50%")}
        </div>
    }
}
