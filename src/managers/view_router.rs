//! View router for NexaBrowser.
//!
//! Owns one content view per tab, keeps exactly one visible, and lays views
//! out in the content area below the chrome strip. Content views are reached
//! through the `ContentView` trait so the router works the same against wry
//! WebViews and against fakes in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::update_checker::UpdateChecker;
use crate::types::events::BrowserEvent;
use crate::types::settings::Settings;
use crate::types::tab::TabId;

/// Height in logical pixels of the chrome strip (42px tab bar + 60px nav bar).
pub const CHROME_HEIGHT: u32 = 102;

/// Position and size of a content view within the window, logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Bounds of the content area for a window of the given size: full width,
/// everything below the chrome.
pub fn content_bounds(window_width: u32, window_height: u32) -> ViewBounds {
    ViewBounds {
        x: 0,
        y: CHROME_HEIGHT as i32,
        width: window_width,
        height: window_height.saturating_sub(CHROME_HEIGHT),
    }
}

/// Capabilities the router needs from an embedded content view.
pub trait ContentView {
    fn load(&mut self, url: &str);
    fn reload(&mut self);
    fn stop(&mut self);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn set_bounds(&mut self, bounds: ViewBounds);
    fn show(&mut self);
    fn hide(&mut self);
}

/// Creates content views. The factory wires each view's lifecycle callbacks
/// (loading start/stop, URL change, title change) to the event bus.
pub trait ViewFactory {
    fn create_view(&mut self, id: TabId, events: EventBus) -> Box<dyn ContentView>;
}

/// Receives browser events pushed by the router and the views.
pub trait EventSubscriber: Send {
    fn notify(&self, event: &BrowserEvent);
}

/// Explicit subscriber list for browser events. Cloning shares the list.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Box<dyn EventSubscriber>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: Box<dyn EventSubscriber>) {
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(subscriber);
        }
    }

    pub fn emit(&self, event: &BrowserEvent) {
        if let Ok(subs) = self.subscribers.lock() {
            for sub in subs.iter() {
                sub.notify(event);
            }
        }
    }
}

/// Routes per-tab operations to the right content view.
///
/// Every operation taking a `TabId` is a silent no-op when no view is
/// attached under that id; a stale id from the chrome must never fault the
/// shell.
pub struct ViewRouter {
    views: HashMap<TabId, Box<dyn ContentView>>,
    active_id: Option<TabId>,
    viewport: (u32, u32),
    factory: Box<dyn ViewFactory>,
    settings: SettingsEngine,
    update_checker: UpdateChecker,
    events: EventBus,
}

impl ViewRouter {
    pub fn new(factory: Box<dyn ViewFactory>, settings: SettingsEngine, events: EventBus) -> Self {
        Self {
            views: HashMap::new(),
            active_id: None,
            viewport: (1200, 800),
            factory,
            settings,
            update_checker: UpdateChecker::new(),
            events,
        }
    }

    /// Create a view for a freshly registered tab and start loading `url`.
    /// The view stays hidden until `activate` selects it.
    pub fn attach(&mut self, id: TabId, url: &str) {
        let mut view = self.factory.create_view(id, self.events.clone());
        view.hide();
        view.load(url);
        self.views.insert(id, view);
    }

    /// Hide the currently visible view and show the view for `id`, laid out
    /// to the content area.
    pub fn activate(&mut self, id: TabId) {
        if !self.views.contains_key(&id) {
            return;
        }
        if self.active_id == Some(id) {
            return;
        }
        if let Some(prev) = self.active_id.and_then(|p| self.views.get_mut(&p)) {
            prev.hide();
        }
        let bounds = content_bounds(self.viewport.0, self.viewport.1);
        if let Some(view) = self.views.get_mut(&id) {
            view.set_bounds(bounds);
            view.show();
        }
        self.active_id = Some(id);
    }

    /// Drop the view for a closed tab.
    pub fn detach(&mut self, id: TabId) {
        if let Some(mut view) = self.views.remove(&id) {
            view.hide();
        }
        if self.active_id == Some(id) {
            self.active_id = None;
        }
    }

    pub fn navigate(&mut self, id: TabId, url: &str) {
        if let Some(view) = self.views.get_mut(&id) {
            view.load(url);
        }
    }

    pub fn reload(&mut self, id: TabId) {
        if let Some(view) = self.views.get_mut(&id) {
            view.reload();
        }
    }

    pub fn stop(&mut self, id: TabId) {
        if let Some(view) = self.views.get_mut(&id) {
            view.stop();
        }
    }

    pub fn go_back(&mut self, id: TabId) {
        if let Some(view) = self.views.get_mut(&id) {
            if view.can_go_back() {
                view.go_back();
            }
        }
    }

    pub fn go_forward(&mut self, id: TabId) {
        if let Some(view) = self.views.get_mut(&id) {
            if view.can_go_forward() {
                view.go_forward();
            }
        }
    }

    /// Load the configured engine's home page. Settings are re-read from disk
    /// so an engine change in another window is picked up.
    pub fn go_home(&mut self, id: TabId) {
        let settings = self.settings.load();
        let home = settings.search_engine.home_url().to_string();
        self.navigate(id, &home);
    }

    /// Reload settings from disk and announce them to subscribers.
    pub fn load_settings(&mut self) -> Settings {
        let settings = self.settings.load();
        self.events.emit(&BrowserEvent::SettingsLoaded(settings.clone()));
        settings
    }

    /// Shallow-merge a partial settings patch and persist. The merged
    /// settings are returned so callers can react to engine or theme changes.
    pub fn save_settings(&mut self, partial: &serde_json::Value) -> Settings {
        let settings = self.settings.save(partial);
        self.events.emit(&BrowserEvent::ApplyTheme(settings.theme));
        settings
    }

    pub fn current_settings(&self) -> &Settings {
        self.settings.settings()
    }

    pub fn apply_theme(&self, theme: crate::types::settings::Theme) {
        self.events.emit(&BrowserEvent::ApplyTheme(theme));
    }

    pub fn show_settings(&self) {
        self.events.emit(&BrowserEvent::ShowSettings);
    }

    pub fn update_checker(&self) -> &UpdateChecker {
        &self.update_checker
    }

    pub fn active_view_id(&self) -> Option<TabId> {
        self.active_id
    }

    /// Record the new window size and re-lay-out the visible view.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        let bounds = content_bounds(width, height);
        if let Some(view) = self.active_id.and_then(|id| self.views.get_mut(&id)) {
            view.set_bounds(bounds);
        }
    }
}
