//! Icon glyph rendered from the external icon stylesheet.

use leptos::prelude::*;

use crate::content::IconName;

#[component]
pub fn Icon(name: IconName, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() { name.class() } else { format!("{} {class}", name.class()) };
    view! { <i class=class aria-hidden="true"></i> }
}
