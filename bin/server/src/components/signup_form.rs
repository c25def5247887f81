//! Account registration form.

use crate::paths::{Paths, auth_action};
use leptos::prelude::*;

#[component]
pub fn SignUpForm() -> impl IntoView {
    view! {
        <form class="auth-form" method="post" action=auth_action("register")>
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
                    autocomplete="new-password"
                    minlength="8"
                    required=true
                />
            </label>
            <button type="submit" class="auth-submit">"Create account"</button>
        </form>
    }
}
