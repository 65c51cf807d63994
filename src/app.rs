//! App core for NexaBrowser.
//!
//! Central struct tying the tab registry and the view router together. All
//! chrome commands enter through `dispatch`, all view notifications come
//! back through `handle_event`; neither path lets a failure cross back into
//! the chrome.

use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::managers::view_router::{EventBus, ViewFactory, ViewRouter};
use crate::services::navigation;
use crate::services::settings_engine::SettingsEngine;
use crate::types::events::{BrowserEvent, ControlIntent};
use crate::types::settings::StartupBehavior;
use crate::types::tab::{TabId, TabUpdate};

/// Central application struct: the tab registry plus the view router.
pub struct App {
    pub tab_manager: TabManager,
    pub router: ViewRouter,
}

impl App {
    pub fn new(factory: Box<dyn ViewFactory>, events: EventBus) -> Self {
        Self::with_settings_path(factory, events, None)
    }

    /// Variant taking an explicit settings file path, for tests.
    pub fn with_settings_path(
        factory: Box<dyn ViewFactory>,
        events: EventBus,
        settings_path: Option<String>,
    ) -> Self {
        let settings = SettingsEngine::new(settings_path);
        Self {
            tab_manager: TabManager::new(),
            router: ViewRouter::new(factory, settings, events),
        }
    }

    /// Startup sequence: load settings, apply the theme, open the initial
    /// tab per the configured startup behavior.
    pub fn startup(&mut self) {
        let settings = self.router.load_settings();
        self.tab_manager
            .set_home_url(settings.search_engine.home_url());
        self.router.apply_theme(settings.theme);

        match settings.startup {
            StartupBehavior::Homepage => self.open_tab(None),
            StartupBehavior::Blank => self.open_tab(Some("about:blank")),
        };
    }

    /// Register a tab and attach a content view for it. The view is shown
    /// when the registry makes the tab active (always true for the first).
    pub fn open_tab(&mut self, url: Option<&str>) -> TabId {
        let id = self.tab_manager.create_tab(url);
        let tab_url = self
            .tab_manager
            .get_tab(id)
            .map(|t| t.url.clone())
            .unwrap_or_default();
        self.router.attach(id, &tab_url);
        if self.tab_manager.active_tab_id() == Some(id) {
            self.router.activate(id);
        }
        id
    }

    /// Make a tab active and show its view. Unknown ids are ignored.
    pub fn activate_tab(&mut self, id: TabId) {
        if self.tab_manager.switch_tab(id).is_ok() {
            self.router.activate(id);
        }
    }

    /// Close a tab, dropping its view and following the registry's decision
    /// about which tab takes over. Unknown ids are ignored.
    pub fn close_tab(&mut self, id: TabId) {
        let outcome = match self.tab_manager.close_tab(id) {
            Ok(outcome) => outcome,
            Err(_) => return,
        };
        self.router.detach(id);

        if let Some(created) = outcome.created {
            let url = self
                .tab_manager
                .get_tab(created)
                .map(|t| t.url.clone())
                .unwrap_or_default();
            self.router.attach(created, &url);
            self.router.activate(created);
        } else if let Some(activated) = outcome.activated {
            self.router.activate(activated);
        }
    }

    /// Resolve address-bar input and load the result into the tab's view.
    /// Blank input is ignored.
    pub fn navigate(&mut self, id: TabId, input: &str) {
        let engine = self.router.current_settings().search_engine;
        if let Some(url) = navigation::resolve(input, engine) {
            let _ = self.tab_manager.update_tab(id, TabUpdate::url(&url));
            self.router.navigate(id, &url);
        }
    }

    /// Route a chrome command. Intents naming a tab the registry no longer
    /// knows are silent no-ops.
    pub fn dispatch(&mut self, intent: ControlIntent) {
        match intent {
            ControlIntent::CreateTab { url } => {
                self.open_tab(url.as_deref());
            }
            ControlIntent::SwitchTab(id) => self.activate_tab(id),
            ControlIntent::CloseTab(id) => self.close_tab(id),
            ControlIntent::NavigateTab { id, input } => self.navigate(id, &input),
            ControlIntent::GoBack(id) => self.router.go_back(id),
            ControlIntent::GoForward(id) => self.router.go_forward(id),
            ControlIntent::Reload(id) => self.router.reload(id),
            ControlIntent::StopLoading(id) => self.router.stop(id),
            ControlIntent::GoHome(id) => {
                self.router.go_home(id);
                let home = self
                    .router
                    .current_settings()
                    .search_engine
                    .home_url()
                    .to_string();
                self.tab_manager.set_home_url(&home);
                let _ = self.tab_manager.update_tab(id, TabUpdate::url(&home));
            }
            ControlIntent::ShowSettings => self.router.show_settings(),
            ControlIntent::LoadSettings => {
                let settings = self.router.load_settings();
                self.tab_manager
                    .set_home_url(settings.search_engine.home_url());
            }
            ControlIntent::SaveSettings(partial) => {
                let settings = self.router.save_settings(&partial);
                self.tab_manager
                    .set_home_url(settings.search_engine.home_url());
            }
            ControlIntent::ThemeChanged(theme) => self.router.apply_theme(theme),
        }
    }

    /// Mirror view notifications back into the registry so the tab strip
    /// stays in step with what the views are actually showing.
    pub fn handle_event(&mut self, event: &BrowserEvent) {
        match event {
            BrowserEvent::TabUrlChange { id, url } => {
                let _ = self.tab_manager.update_tab(*id, TabUpdate::url(url));
            }
            BrowserEvent::TabTitleChange { id, title } => {
                let _ = self.tab_manager.update_tab(*id, TabUpdate::title(title));
            }
            _ => {}
        }
    }
}
