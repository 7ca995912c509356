//! Static service catalog.
//!
//! DESIGN
//! ======
//! `Slug` is a closed enumeration and `catalog::SERVICES` holds exactly one
//! entry per variant, in `Slug::ALL` order. The navigation menu, the mobile
//! drawer and the services overview all iterate that one table, so a service
//! cannot be advertised without a detail page or vice versa.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub mod catalog;
pub mod copy;
mod icon;

pub use catalog::SERVICES;
pub use icon::IconName;

use std::fmt;

/// Route prefix shared by all service detail pages.
pub const SERVICE_PATH_PREFIX: &str = "/services/";

/// Unique identifier of a service; doubles as its route segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slug {
    InvestorConnects,
    FundraisingSupport,
    PitchDecksTemplates,
    GrowthMarketing,
    Mentorship,
    WebAppDev,
    TechSupport,
    FinanceAccounting,
}

impl Slug {
    pub const COUNT: usize = 8;

    /// Every slug, in menu order.
    pub const ALL: [Slug; Slug::COUNT] = [
        Slug::InvestorConnects,
        Slug::FundraisingSupport,
        Slug::PitchDecksTemplates,
        Slug::GrowthMarketing,
        Slug::Mentorship,
        Slug::WebAppDev,
        Slug::TechSupport,
        Slug::FinanceAccounting,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Slug::InvestorConnects => "investor-connects",
            Slug::FundraisingSupport => "fundraising-support",
            Slug::PitchDecksTemplates => "pitch-decks-templates",
            Slug::GrowthMarketing => "growth-marketing",
            Slug::Mentorship => "mentorship",
            Slug::WebAppDev => "web-app-dev",
            Slug::TechSupport => "tech-support",
            Slug::FinanceAccounting => "finance-accounting",
        }
    }

    /// Exact, case-sensitive match against the known slugs.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slug| slug.as_str() == raw)
    }

    /// Route path of the detail page, e.g. `/services/mentorship`.
    pub fn path(self) -> String {
        format!("{SERVICE_PATH_PREFIX}{}", self.as_str())
    }

    /// Catalog entry for this slug. Total over the enumeration.
    pub fn entry(self) -> &'static ServiceEntry {
        &SERVICES[self as usize]
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A priced engagement offered under a service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    /// Display string only; prices are never computed with.
    pub price: &'static str,
    pub items: &'static [&'static str],
}

/// Display data for one service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub slug: Slug,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: IconName,
    pub bullets: &'static [&'static str],
    pub packages: &'static [Package],
    pub outcomes: &'static [&'static str],
    pub process: &'static [&'static str],
    /// Label and one-line blurb in the navigation dropdown.
    pub nav_label: &'static str,
    pub nav_blurb: &'static str,
    /// Title, description and tint of the services overview card.
    pub card_title: &'static str,
    pub card_blurb: &'static str,
    pub hue: &'static str,
}

impl ServiceEntry {
    pub fn path(&self) -> String {
        self.slug.path()
    }
}

/// Look up a service by its raw slug string.
///
/// Returns `None` for anything that is not exactly one of the known slugs.
pub fn lookup(raw: &str) -> Option<&'static ServiceEntry> {
    Slug::parse(raw).map(Slug::entry)
}

/// Entries advertised in the navigation menu and services overview.
pub fn menu_entries() -> impl Iterator<Item = &'static ServiceEntry> {
    SERVICES.iter()
}
