//! Appointment Service client helpers.
//!
//! The host app owns the HTTP transport. This crate builds the request URLs it calls and
//! decodes the JSON it gets back into `carebook-core` types.

pub mod endpoints;
pub mod payloads;

pub use endpoints::*;
pub use payloads::*;
