use crate::types::errors::TabError;
use crate::types::settings::SearchEngine;
use crate::types::tab::{Tab, TabId, TabUpdate};

/// What happened to the active tab as a result of a close.
///
/// `activated` is set when an existing neighbor became active, `created` when
/// the last tab was closed and a fresh home tab was auto-created in its place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloseOutcome {
    pub activated: Option<TabId>,
    pub created: Option<TabId>,
}

/// Trait defining the tab registry interface.
pub trait TabManagerTrait {
    fn create_tab(&mut self, url: Option<&str>) -> TabId;
    fn close_tab(&mut self, tab_id: TabId) -> Result<CloseOutcome, TabError>;
    fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError>;
    fn update_tab(&mut self, tab_id: TabId, update: TabUpdate) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: TabId) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn get_active_tab(&self) -> Option<&Tab>;
    fn active_tab_id(&self) -> Option<TabId>;
    fn tab_count(&self) -> usize;
    fn set_home_url(&mut self, url: &str);
}

/// In-memory tab registry. Tabs are kept in creation/strip order, ids come
/// from an increasing counter and are never reused.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: Option<TabId>,
    next_id: TabId,
    home_url: String,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            next_id: 1,
            home_url: SearchEngine::default().home_url().to_string(),
        }
    }

    fn find_tab_index(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Create a new tab, optionally with a URL (defaults to the home URL).
    /// The first tab becomes active. Returns the new tab's ID.
    fn create_tab(&mut self, url: Option<&str>) -> TabId {
        let id = self.next_id;
        self.next_id += 1;
        let tab = Tab {
            id,
            url: url.unwrap_or(&self.home_url).to_string(),
            title: "New Tab".to_string(),
            favicon: None,
        };
        self.tabs.push(tab);
        if self.active_tab_id.is_none() {
            self.active_tab_id = Some(id);
        }
        id
    }

    /// Close a tab. If it was the active tab, the tab at `max(0, index - 1)`
    /// of the remaining strip becomes active. If it was the last tab, a fresh
    /// home tab is created so the registry is never left empty.
    fn close_tab(&mut self, tab_id: TabId) -> Result<CloseOutcome, TabError> {
        let idx = self
            .find_tab_index(tab_id)
            .ok_or(TabError::NotFound(tab_id))?;

        let was_active = self.active_tab_id == Some(tab_id);
        self.tabs.remove(idx);

        let mut outcome = CloseOutcome::default();

        if self.tabs.is_empty() {
            let new_id = self.create_tab(None);
            self.active_tab_id = Some(new_id);
            outcome.created = Some(new_id);
            return Ok(outcome);
        }

        if was_active {
            let neighbor = idx.saturating_sub(1);
            let new_active = self.tabs[neighbor].id;
            self.active_tab_id = Some(new_active);
            outcome.activated = Some(new_active);
        }

        Ok(outcome)
    }

    /// Switch the active tab. Switching to the already-active tab is a no-op.
    fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id));
        }
        self.active_tab_id = Some(tab_id);
        Ok(())
    }

    /// Apply a partial update to a tab. `None` fields are left untouched.
    fn update_tab(&mut self, tab_id: TabId, update: TabUpdate) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or(TabError::NotFound(tab_id))?;
        if let Some(url) = update.url {
            tab.url = url;
        }
        if let Some(title) = update.title {
            tab.title = title;
        }
        if let Some(favicon) = update.favicon {
            tab.favicon = Some(favicon);
        }
        Ok(())
    }

    fn get_tab(&self, tab_id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
    }

    fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Update the URL used for new and auto-created tabs. Called when the
    /// configured search engine changes.
    fn set_home_url(&mut self, url: &str) {
        self.home_url = url.to_string();
    }
}
