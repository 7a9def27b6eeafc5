//! Core services and infrastructure

pub mod logging;
pub mod strings;
pub mod version;
