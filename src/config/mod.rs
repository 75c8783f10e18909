//! Engine configuration.
//!
//! The engine's only configurable input is the administrative roster:
//! which employees (by id) and which areas (by name) are administrative
//! staff. The bucket rules themselves are fixed by law and live in code.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AdministrativeRoster, EngineConfig, EngineMetadata};
