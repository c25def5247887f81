//! portcullis web server and UI.
//!
//! This crate provides the Leptos-based sign-in and sign-up pages and the
//! axum authentication route handler backed by `portcullis-identity`.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod pages;
pub mod paths;
pub mod types;
pub mod user;

#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
