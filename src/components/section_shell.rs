//! Two-column section: titled bullet list beside the brand value card.

use leptos::prelude::*;

use crate::compose::Route;
use crate::components::icon::Icon;
use crate::components::layout::Container;
use crate::content::IconName;
use crate::content::copy::{SHELL_TAGS, TESTIMONIAL};

/// Optional link button under the bullet list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellLink {
    pub label: &'static str,
    pub route: Route,
}

#[component]
pub fn SectionShell(
    title: &'static str,
    subtitle: &'static str,
    icon: IconName,
    bullets: &'static [&'static str],
    #[prop(optional)] link: Option<ShellLink>,
) -> impl IntoView {
    view! {
        <Container class="section-shell">
            <div class="section-shell__main">
                <div class="section-shell__badge">
                    <Icon name=icon/>
                    <span>{title}</span>
                </div>
                <h3 class="section-shell__subtitle">{subtitle}</h3>
                <ul class="check-list">
                    {bullets
                        .iter()
                        .map(|bullet| {
                            view! {
                                <li class="check-list__item">
                                    <Icon name=IconName::CheckCircle/>
                                    <span>{*bullet}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                {link.map(|link| {
                    view! {
                        <a class="button button--outline" href=link.route.href()>
                            {link.label}
                            <Icon name=IconName::ChevronRight/>
                        </a>
                    }
                })}
            </div>
            <div class="section-shell__card">
                <div class="tag-grid">
                    {SHELL_TAGS.iter().map(|tag| view! { <div class="tag">{*tag}</div> }).collect_view()}
                </div>
                <blockquote class="section-shell__quote">{TESTIMONIAL}</blockquote>
            </div>
        </Container>
    }
}
