//! Request handlers, one submodule per resource.
//!
//! Read handlers are public. Every mutating handler takes an
//! [`AuthUser`](crate::middleware::auth::AuthUser) parameter, so a request
//! without a valid session is rejected before the handler body runs.

pub mod auth;
pub mod pages;
pub mod products;
pub mod settings;
pub mod testimonials;
pub mod upload;
