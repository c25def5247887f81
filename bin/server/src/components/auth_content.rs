//! Content container for the auth pages.

use leptos::prelude::*;

/// Centers its children in the auth card.
#[component]
pub fn AuthContent(children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-content">{children()}</div>
        </div>
    }
}
