//! Presentational building blocks shared by the auth pages.

pub mod auth_content;
pub mod auth_header;
pub mod signin_form;
pub mod signup_form;

pub use auth_content::AuthContent;
pub use auth_header::AuthHeader;
pub use signin_form::SignInForm;
pub use signup_form::SignUpForm;
