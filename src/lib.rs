//! # launchlift
//!
//! Leptos + WASM marketing site for the Launch & Lift startup-services
//! consultancy: hero, services catalog, per-service detail pages with pricing
//! packages, about and contact.
//!
//! Navigation is a URL-fragment router (`#/services/mentorship`). The route
//! string maps to a page layout through `compose`; service data comes from the
//! static `content` catalog. Browser glue lives in `util` behind the `csr`
//! feature, so everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod compose;
pub mod config;
pub mod contact;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
