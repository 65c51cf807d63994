use nexabrowser::managers::tab_manager::{TabManager, TabManagerTrait};
use nexabrowser::types::errors::TabError;
use nexabrowser::types::tab::TabUpdate;

#[test]
fn test_create_tab_returns_increasing_ids() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None);
    let id2 = mgr.create_tab(None);
    let id3 = mgr.create_tab(None);
    assert!(id1 < id2);
    assert!(id2 < id3);
    assert_eq!(mgr.tab_count(), 3);
}

#[test]
fn test_first_tab_becomes_active() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(Some("https://example.com"));
    assert_eq!(mgr.active_tab_id(), Some(id));
    assert_eq!(mgr.get_active_tab().unwrap().id, id);
}

#[test]
fn test_later_tabs_do_not_steal_focus() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None);
    let _id2 = mgr.create_tab(None);
    assert_eq!(mgr.active_tab_id(), Some(id1));
}

#[test]
fn test_create_tab_with_url() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(Some("https://github.com"));
    assert_eq!(mgr.get_tab(id).unwrap().url, "https://github.com");
}

#[test]
fn test_create_tab_defaults_to_home_url() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(None);
    let tab = mgr.get_tab(id).unwrap();
    assert_eq!(tab.url, "https://northy2410.github.io/NexaSearch");
    assert_eq!(tab.title, "New Tab");
}

#[test]
fn test_set_home_url_changes_default() {
    let mut mgr = TabManager::new();
    mgr.set_home_url("https://www.bing.com/");
    let id = mgr.create_tab(None);
    assert_eq!(mgr.get_tab(id).unwrap().url, "https://www.bing.com/");
}

#[test]
fn test_ids_are_never_reused() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None);
    let _id2 = mgr.create_tab(None);
    mgr.close_tab(id1).unwrap();
    let id3 = mgr.create_tab(None);
    assert!(id3 > id1);
    assert!(mgr.get_tab(id1).is_none());
}

#[test]
fn test_close_active_tab_activates_left_neighbor() {
    let mut mgr = TabManager::new();
    let _id1 = mgr.create_tab(None);
    let id2 = mgr.create_tab(None);
    let id3 = mgr.create_tab(None);
    mgr.switch_tab(id3).unwrap();

    let outcome = mgr.close_tab(id3).unwrap();
    assert_eq!(outcome.activated, Some(id2));
    assert_eq!(mgr.active_tab_id(), Some(id2));
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_close_first_active_tab_activates_new_first() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None);
    let id2 = mgr.create_tab(None);
    let _id3 = mgr.create_tab(None);

    let outcome = mgr.close_tab(id1).unwrap();
    assert_eq!(outcome.activated, Some(id2));
    assert_eq!(mgr.active_tab_id(), Some(id2));
}

#[test]
fn test_close_inactive_tab_keeps_active() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None);
    let id2 = mgr.create_tab(None);

    let outcome = mgr.close_tab(id2).unwrap();
    assert_eq!(outcome.activated, None);
    assert_eq!(outcome.created, None);
    assert_eq!(mgr.active_tab_id(), Some(id1));
}

#[test]
fn test_close_last_tab_creates_replacement() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(None);
    let outcome = mgr.close_tab(id).unwrap();

    assert_eq!(mgr.tab_count(), 1);
    let replacement = outcome.created.unwrap();
    assert_ne!(replacement, id);
    assert_eq!(mgr.active_tab_id(), Some(replacement));
    assert_eq!(
        mgr.get_tab(replacement).unwrap().url,
        "https://northy2410.github.io/NexaSearch"
    );
}

#[test]
fn test_close_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::new();
    mgr.create_tab(None);
    assert_eq!(mgr.close_tab(9999), Err(TabError::NotFound(9999)));
}

#[test]
fn test_switch_tab() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None);
    let id2 = mgr.create_tab(None);
    assert_eq!(mgr.active_tab_id(), Some(id1));

    mgr.switch_tab(id2).unwrap();
    assert_eq!(mgr.active_tab_id(), Some(id2));
}

#[test]
fn test_switch_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(None);
    assert!(mgr.switch_tab(9999).is_err());
    // Active tab unchanged after the failed switch
    assert_eq!(mgr.active_tab_id(), Some(id));
}

#[test]
fn test_update_tab_partial_fields() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(Some("https://example.com"));

    mgr.update_tab(id, TabUpdate::title("Example Domain")).unwrap();
    let tab = mgr.get_tab(id).unwrap();
    assert_eq!(tab.title, "Example Domain");
    assert_eq!(tab.url, "https://example.com");

    mgr.update_tab(id, TabUpdate::url("https://example.com/page")).unwrap();
    let tab = mgr.get_tab(id).unwrap();
    assert_eq!(tab.url, "https://example.com/page");
    assert_eq!(tab.title, "Example Domain");
}

#[test]
fn test_update_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::new();
    assert!(mgr.update_tab(42, TabUpdate::title("nope")).is_err());
}

#[test]
fn test_get_all_tabs_preserves_creation_order() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(Some("https://a.com"));
    let id2 = mgr.create_tab(Some("https://b.com"));
    let id3 = mgr.create_tab(Some("https://c.com"));

    let all = mgr.get_all_tabs();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, id1);
    assert_eq!(all[1].id, id2);
    assert_eq!(all[2].id, id3);
}

#[test]
fn test_tab_count() {
    let mut mgr = TabManager::new();
    assert_eq!(mgr.tab_count(), 0);
    mgr.create_tab(None);
    assert_eq!(mgr.tab_count(), 1);
    mgr.create_tab(None);
    assert_eq!(mgr.tab_count(), 2);
}
