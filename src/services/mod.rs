// NexaBrowser services
// Services provide core functionality: settings persistence, navigation
// input resolution, and update checks.

pub mod navigation;
pub mod settings_engine;
pub mod update_checker;
