//! Domain rules for the Jennskin storefront CMS.
//!
//! This crate has no I/O: it holds the shared error type, id/timestamp
//! aliases, catalog rules and the image upload policy so both the
//! repository layer and the HTTP layer agree on them.

pub mod catalog;
pub mod content;
pub mod error;
pub mod types;
pub mod upload;
