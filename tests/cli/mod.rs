//! CLI Integration Test Modules

pub mod argument_parsing;
pub mod metadata_output;
pub mod packaging_files;
pub mod toml_config;
