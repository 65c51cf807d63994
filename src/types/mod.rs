// NexaBrowser shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod events;
pub mod settings;
pub mod tab;
pub mod update;
