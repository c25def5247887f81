//! Core identifier types and utilities for the portcullis platform.
//!
//! This crate provides the foundational types and error handling shared by
//! the identity library and the web server.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{CredentialId, ParseIdError, SessionId, UserId};
