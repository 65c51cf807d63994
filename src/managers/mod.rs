// NexaBrowser state managers
// Managers handle stateful operations: the tab registry and the view router.

pub mod tab_manager;
pub mod view_router;
