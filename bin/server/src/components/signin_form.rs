//! Email/password sign-in form.

use crate::paths::{Paths, auth_action};
use leptos::prelude::*;

/// Posts credentials to the auth handler's credentials callback.
///
/// A plain HTML form, so signing in works before hydration.
#[component]
pub fn SignInForm() -> impl IntoView {
    view! {
        <form class="auth-form" method="post" action=auth_action("callback/credentials")>
            <input type="hidden" name="callbackUrl" value=Paths::HOME/>
            <label class="auth-field">
                "Email"
                <input type="email" name="email" autocomplete="email" required=true/>
            </label>
            <label class="auth-field">
                "Password"
                <input
                    type="password"
                    name="password"
                    autocomplete="current-password"
                    required=true
                />
            </label>
            <button type="submit" class="auth-submit">"Sign in"</button>
        </form>
    }
}
