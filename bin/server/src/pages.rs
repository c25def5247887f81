//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route.

pub mod home;
pub mod signin;
pub mod signup;

pub use home::HomePage;
pub use signin::SignInPage;
pub use signup::SignUpPage;
