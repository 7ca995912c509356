//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and shared section blocks. Stateful ones read
//! the route and menu cells from Leptos context providers set up by `App`.

pub mod cta;
pub mod footer;
pub mod icon;
pub mod layout;
pub mod nav;
pub mod section_shell;
pub mod service_card;
