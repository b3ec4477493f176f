//! Subcommand implementations.

pub mod delivery_types;
pub mod request;
pub mod token;
