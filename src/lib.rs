pub mod app;
pub mod core;
pub mod metadata;
pub mod packaging;
pub mod window;

pub use metadata::{resolve, AppMetadata, LayeredSource, MetadataSource, ProcessEnv};
