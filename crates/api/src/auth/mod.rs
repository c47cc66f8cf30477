//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed session token generation and validation.
//! - [`session`] -- session cookie construction and token extraction from
//!   either the cookie or an `Authorization: Bearer` header.

pub mod jwt;
pub mod password;
pub mod session;
