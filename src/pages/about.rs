//! About section, shown on its own page and as the home teaser.

use leptos::prelude::*;

use crate::compose::Route;
use crate::components::section_shell::{SectionShell, ShellLink};
use crate::content::IconName;
use crate::content::copy::{ABOUT_BULLETS, ABOUT_SUBTITLE};

const SEE_SERVICES: ShellLink = ShellLink { label: "See services", route: Route::Services };

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="about">
            <SectionShell
                title="About Launch & Lift"
                subtitle=ABOUT_SUBTITLE
                icon=IconName::Rocket
                bullets=ABOUT_BULLETS
                link=SEE_SERVICES
            />
        </section>
    }
}
