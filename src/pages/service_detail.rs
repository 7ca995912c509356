//! Service detail header and body (packages, outcomes, process).
//!
//! Both components take a resolved catalog entry; an unknown slug never
//! reaches them because `compose` yields no layout for it.

use leptos::prelude::*;

use crate::compose::Route;
use crate::components::icon::Icon;
use crate::components::layout::{Container, GradientBg, Pill};
use crate::components::section_shell::{SectionShell, ShellLink};
use crate::content::copy::SERVICE_HEADER_BLURB;
use crate::content::{IconName, Package, ServiceEntry};

const BOOK_CONSULT: ShellLink = ShellLink { label: "Book a consult", route: Route::Contact };

#[component]
pub fn ServiceHeader(entry: &'static ServiceEntry) -> impl IntoView {
    view! {
        <section class="service-header">
            <GradientBg/>
            <Container class="service-header__inner">
                <div>
                    <Pill>"Service"</Pill>
                    <h2 class="service-header__title">{entry.title}</h2>
                    <p class="service-header__blurb">{SERVICE_HEADER_BLURB}</p>
                </div>
                <a class="button button--outline" href=Route::Services.href()>
                    "All services"
                    <Icon name=IconName::ChevronRight/>
                </a>
            </Container>
        </section>
    }
}

#[component]
pub fn ServiceDetail(entry: &'static ServiceEntry) -> impl IntoView {
    view! {
        <section class="service-detail" data-slug=entry.slug.as_str()>
            <SectionShell
                title=entry.title
                subtitle=entry.subtitle
                icon=entry.icon
                bullets=entry.bullets
                link=BOOK_CONSULT
            />
            <Container class="service-detail__packages">
                <h4>"Packages"</h4>
                <div class="package-grid">
                    {entry.packages.iter().map(|package| view! { <PackageCard package=package/> }).collect_view()}
                </div>
            </Container>
            <Container class="service-detail__summary">
                <div>
                    <h4>"Expected Outcomes"</h4>
                    <ul class="check-list">
                        {entry
                            .outcomes
                            .iter()
                            .map(|outcome| {
                                view! {
                                    <li class="check-list__item">
                                        <Icon name=IconName::CheckCircle/>
                                        {*outcome}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Our Process"</h4>
                    <ol class="process">
                        {entry
                            .process
                            .iter()
                            .enumerate()
                            .map(|(index, step)| {
                                view! {
                                    <li class="process__step">
                                        <span class="process__number">{index + 1}</span>
                                        <span class="process__label">{*step}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </Container>
        </section>
    }
}

#[component]
fn PackageCard(package: &'static Package) -> impl IntoView {
    view! {
        <div class="package-card">
            <div class="package-card__name">{package.name}</div>
            <div class="package-card__price">{package.price}</div>
            <ul class="package-card__items">
                {package
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <Icon name=IconName::CheckCircle/>
                                {*item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a class="button button--small" href=Route::Contact.href()>"Get started"</a>
        </div>
    }
}
