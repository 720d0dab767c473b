//! Boundary records: configuration and gateway wire payloads.

pub mod config;
pub mod gateway;
