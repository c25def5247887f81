//! Main Leptos application component and routing.

use crate::pages::{HomePage, SignInPage, SignUpPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="portcullis"/>
        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/signIn") view=SignInPage/>
                    <Route path=path!("/signUp") view=SignUpPage/>
                </Routes>
            </main>
        </Router>
    }
}
