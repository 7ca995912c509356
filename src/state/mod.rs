//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain struct wrapped in an `RwSignal` and provided through
//! Leptos context by `App`. The structs themselves carry no reactive types so
//! their transitions are unit tested without a browser.

pub mod menu;
pub mod navigation;
pub mod route;
