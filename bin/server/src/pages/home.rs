//! Home page component.

use crate::paths::{Paths, auth_action};
use crate::user::get_current_user;
use leptos::prelude::*;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let user = Resource::new(|| (), |_| get_current_user());

    view! {
        <div class="home-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    user.get().map(|result| {
                        match result {
                            Ok(Some(user_info)) => view! {
                                <div>
                                    <h1>"Welcome back"</h1>
                                    <p>"Signed in as " {user_info.email}</p>
                                    <form method="post" action=auth_action("signout")>
                                        <button type="submit" class="cta-button">"Sign out"</button>
                                    </form>
                                </div>
                            }.into_any(),
                            Err(_) => view! {
                                <div>
                                    <h1>"portcullis"</h1>
                                    <p>"Your session could not be checked. Try again shortly."</p>
                                </div>
                            }.into_any(),
                            Ok(None) => view! {
                                <div>
                                    <h1>"portcullis"</h1>
                                    <p>"You are not signed in."</p>
                                    <a href=Paths::SIGNIN class="cta-button">"Sign in"</a>
                                </div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
