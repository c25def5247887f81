//! Sign-in page.

use crate::components::{AuthContent, AuthHeader, SignInForm};
use crate::paths::Paths;
use crate::types::NavLink;
use leptos::prelude::*;

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <AuthContent>
            <AuthHeader
                link=NavLink::new(Paths::SIGNUP, "Sign up")
                title="Login to your account"
                subtitle="Don’t have an account?"
            />

            <SignInForm/>
        </AuthContent>
    }
}
