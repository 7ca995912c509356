//! View composition: route path -> page layout.
//!
//! DESIGN
//! ======
//! Composition is a pure function of the path string. The UI renders whatever
//! `compose` returns and nothing when it returns `None`; there is no fallback
//! or not-found page.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use crate::config::BRAND;
use crate::content::{SERVICE_PATH_PREFIX, ServiceEntry, Slug};

/// A member of the known route set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Contact,
    Service(Slug),
}

impl Route {
    /// Parse a route path. Only exact members of the route set match.
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/services" => Some(Route::Services),
            "/contact" => Some(Route::Contact),
            _ => path
                .strip_prefix(SERVICE_PATH_PREFIX)
                .and_then(Slug::parse)
                .map(Route::Service),
        }
    }

    pub fn path(self) -> String {
        match self {
            Route::Home => "/".to_owned(),
            Route::About => "/about".to_owned(),
            Route::Services => "/services".to_owned(),
            Route::Contact => "/contact".to_owned(),
            Route::Service(slug) => slug.path(),
        }
    }

    /// In-page link target for this route.
    pub fn href(self) -> String {
        crate::state::route::path_to_fragment(&self.path())
    }

    pub fn sections(self) -> &'static [Section] {
        match self {
            Route::Home => &[
                Section::Hero,
                Section::FullStack,
                Section::ServicesOverview,
                Section::About,
                Section::CallToAction,
            ],
            Route::About => &[Section::About, Section::CallToAction],
            Route::Services => &[Section::ServicesOverview, Section::CallToAction],
            Route::Contact => &[Section::Contact],
            Route::Service(_) => &[Section::ServiceHeader, Section::ServiceDetail, Section::CallToAction],
        }
    }
}

/// One block of a page layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    FullStack,
    ServicesOverview,
    About,
    Contact,
    ServiceHeader,
    ServiceDetail,
    CallToAction,
}

/// The selected top-level layout for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub route: Route,
    pub sections: &'static [Section],
}

impl Layout {
    pub fn new(route: Route) -> Self {
        Self { route, sections: route.sections() }
    }

    /// Catalog entry backing a service detail layout.
    pub fn service(&self) -> Option<&'static ServiceEntry> {
        match self.route {
            Route::Service(slug) => Some(slug.entry()),
            _ => None,
        }
    }

    pub fn has_call_to_action(&self) -> bool {
        self.sections.contains(&Section::CallToAction)
    }

    pub fn document_title(&self) -> String {
        let page = match self.route {
            Route::Home => return BRAND.name.to_owned(),
            Route::About => "About",
            Route::Services => "Services",
            Route::Contact => "Contact",
            Route::Service(slug) => slug.entry().title,
        };
        format!("{page} | {}", BRAND.name)
    }
}

/// Select the layout for `path`, or `None` when the path is not a known route.
pub fn compose(path: &str) -> Option<Layout> {
    Route::parse(path).map(Layout::new)
}
