use crate::types::settings::{Settings, Theme};
use crate::types::tab::TabId;

/// Commands the chrome sends to the coordinator. Fire-and-forget: none of
/// these carry a reply, and an unknown tab id makes the intent a no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlIntent {
    CreateTab { url: Option<String> },
    SwitchTab(TabId),
    CloseTab(TabId),
    NavigateTab { id: TabId, input: String },
    GoBack(TabId),
    GoForward(TabId),
    Reload(TabId),
    GoHome(TabId),
    StopLoading(TabId),
    ShowSettings,
    LoadSettings,
    SaveSettings(serde_json::Value),
    ThemeChanged(Theme),
}

/// Notifications the coordinator pushes to subscribers (the chrome, tests).
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    TabLoadingStart(TabId),
    TabLoadingStop(TabId),
    TabUrlChange { id: TabId, url: String },
    TabTitleChange { id: TabId, title: String },
    ApplyTheme(Theme),
    SettingsLoaded(Settings),
    ShowSettings,
}
