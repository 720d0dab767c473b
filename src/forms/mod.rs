//! Form definitions backing the portal routes.

pub mod auth;
pub mod main;
