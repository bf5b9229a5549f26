#![forbid(unsafe_code)]

/// Varsel action contract version. Written into every action's metadata.
pub const VARSEL_ACTION_VERSION: &str = "v2.1";

pub mod domain;
pub mod action;
pub mod ids;
pub mod validation;
pub mod serialize;
