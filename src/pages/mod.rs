//! Page sections and the layout renderer.
//!
//! ARCHITECTURE
//! ============
//! `compose` decides which sections a route shows; `LayoutView` only maps each
//! `Section` to its component, in order. Section components live in the page
//! module that owns them.

pub mod about;
pub mod contact;
pub mod home;
pub mod service_detail;
pub mod services;

use leptos::prelude::*;

use crate::components::cta::CallToAction;
use crate::compose::{Layout, Section};
use crate::config::PAGE_ENTER_CLASS;
use crate::content::ServiceEntry;
use about::AboutSection;
use contact::ContactSection;
use home::{FullStackSection, Hero};
use service_detail::{ServiceDetail, ServiceHeader};
use services::ServicesOverview;

/// Renders a composed layout. Remounted on every route change, which replays
/// the enter transition.
#[component]
pub fn LayoutView(layout: Layout) -> impl IntoView {
    let service = layout.service();
    let sections = layout
        .sections
        .iter()
        .map(|section| render_section(*section, service))
        .collect_view();

    view! {
        <div class=PAGE_ENTER_CLASS data-route=layout.route.path()>
            {sections}
        </div>
    }
}

fn render_section(section: Section, service: Option<&'static ServiceEntry>) -> AnyView {
    match section {
        Section::Hero => view! { <Hero/> }.into_any(),
        Section::FullStack => view! { <FullStackSection/> }.into_any(),
        Section::ServicesOverview => view! { <ServicesOverview/> }.into_any(),
        Section::About => view! { <AboutSection/> }.into_any(),
        Section::Contact => view! { <ContactSection/> }.into_any(),
        Section::ServiceHeader => service
            .map(|entry| view! { <ServiceHeader entry=entry/> })
            .into_any(),
        Section::ServiceDetail => service
            .map(|entry| view! { <ServiceDetail entry=entry/> })
            .into_any(),
        Section::CallToAction => view! { <CallToAction/> }.into_any(),
    }
}
