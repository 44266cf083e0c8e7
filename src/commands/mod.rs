//! Command implementations
//!
//! One module per pipeline; each takes a validated [`Config`](crate::config::Config).

pub mod index;
pub mod relocate;
