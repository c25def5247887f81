//! Sign-up page.

use crate::components::{AuthContent, AuthHeader, SignUpForm};
use crate::paths::Paths;
use crate::types::NavLink;
use leptos::prelude::*;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <AuthContent>
            <AuthHeader
                link=NavLink::new(Paths::SIGNIN, "Sign in")
                title="Create your account"
                subtitle="Already have an account?"
            />

            <SignUpForm/>
        </AuthContent>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_back_to_sign_in_and_posts_to_register() {
        let html = view! { <SignUpPage/> }.to_html();

        assert_eq!(html.matches("<form").count(), 1);
        assert!(html.contains("href=\"/signIn\""));
        assert!(html.contains("Sign in"));
        assert!(html.contains("action=\"/api/auth/register\""));
    }
}
