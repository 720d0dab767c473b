//! Domain state owned by a single portal session.

pub mod medicine;
pub mod prescription;
pub mod search;
pub mod selection;
pub mod session;
pub mod types;
