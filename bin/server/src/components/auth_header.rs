//! Header with title, subtitle, and a link to the sibling auth page.

use crate::types::NavLink;
use leptos::prelude::*;

/// Auth card header.
#[component]
pub fn AuthHeader(
    /// Link shown after the subtitle, e.g. to the sign-up page.
    link: NavLink,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    let NavLink { href, text } = link;

    view! {
        <header class="auth-header">
            <h1 class="auth-title">{title}</h1>
            <p class="auth-subtitle">
                {subtitle}
                " "
                <a href=href class="auth-link">{text}</a>
            </p>
        </header>
    }
}
