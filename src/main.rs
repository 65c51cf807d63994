//! NexaBrowser — a minimal tabbed web browser with NexaSearch integration.
//!
//! Entry point: opens the browser window with a chrome WebView and one
//! content WebView per tab. When built without the `gui` feature, runs
//! a console demo of the core components instead.

#[cfg(feature = "gui")]
fn main() {
    nexabrowser::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║             NexaBrowser v{} — Demo Mode              ║", env!("CARGO_PKG_VERSION"));
    println!("║      Minimal tabbed browser with NexaSearch integration      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_settings();
    demo_navigation();
    demo_tabs();
    demo_router();
    demo_update_checker();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 5 components demonstrated successfully!");
    println!("  NexaBrowser is ready for WebView UI integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_settings() {
    use nexabrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(Some("demo_settings.json".to_string()));
    let settings = engine.load();
    println!("  Theme: {:?}", settings.theme);
    println!("  Search engine: {:?}", settings.search_engine);
    println!("  Startup: {:?}", settings.startup);

    let updated = engine.save(&serde_json::json!({"searchEngine": "duckduckgo"}));
    println!("  Changed search engine to: {:?}", updated.search_engine);

    let reloaded = engine.load();
    println!("  Reloaded from disk: {:?}", reloaded.search_engine);
    let _ = std::fs::remove_file("demo_settings.json");
    println!("  ✓ SettingsEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_navigation() {
    use nexabrowser::services::navigation::resolve;
    use nexabrowser::types::settings::SearchEngine;
    section("Navigation Resolver");

    let engine = SearchEngine::default();
    println!("  'https://github.com' -> {:?}", resolve("https://github.com", engine));
    println!("  'rust-lang.org' -> {:?}", resolve("rust-lang.org", engine));
    println!("  'borrow checker' -> {:?}", resolve("borrow checker", engine));
    println!("  '' -> {:?}", resolve("", engine));
    println!("  Home URL: {}", engine.home_url());
    println!("  ✓ Navigation OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_tabs() {
    use nexabrowser::managers::tab_manager::{TabManager, TabManagerTrait};
    use nexabrowser::types::tab::TabUpdate;
    section("Tab Manager");

    let mut mgr = TabManager::new();
    let t1 = mgr.create_tab(None);
    let t2 = mgr.create_tab(Some("https://rust-lang.org"));
    let t3 = mgr.create_tab(Some("https://crates.io"));
    println!("  Created 3 tabs, count = {}", mgr.tab_count());
    println!("  Active tab: {}", mgr.get_active_tab().unwrap().url);

    mgr.switch_tab(t3).unwrap();
    println!("  Switched to tab {}: {}", t3, mgr.get_active_tab().unwrap().url);

    mgr.update_tab(t2, TabUpdate::title("Rust Programming Language")).unwrap();
    println!("  Updated tab {} title: {}", t2, mgr.get_tab(t2).unwrap().title);

    let outcome = mgr.close_tab(t3).unwrap();
    println!("  Closed active tab, new active = {:?}", outcome.activated);

    mgr.close_tab(t1).unwrap();
    mgr.close_tab(t2).unwrap();
    println!("  Closed last tab, auto-created replacement, count = {}", mgr.tab_count());
    println!("  ✓ TabManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_router() {
    use nexabrowser::app::App;
    use nexabrowser::managers::tab_manager::TabManagerTrait;
    use nexabrowser::managers::view_router::{
        ContentView, EventBus, ViewBounds, ViewFactory,
    };
    use nexabrowser::types::events::ControlIntent;
    use nexabrowser::types::tab::TabId;
    section("View Router + App Core");

    struct NullView;
    impl ContentView for NullView {
        fn load(&mut self, _url: &str) {}
        fn reload(&mut self) {}
        fn stop(&mut self) {}
        fn go_back(&mut self) {}
        fn go_forward(&mut self) {}
        fn can_go_back(&self) -> bool {
            false
        }
        fn can_go_forward(&self) -> bool {
            false
        }
        fn set_bounds(&mut self, _bounds: ViewBounds) {}
        fn show(&mut self) {}
        fn hide(&mut self) {}
    }
    struct NullFactory;
    impl ViewFactory for NullFactory {
        fn create_view(&mut self, _id: TabId, _events: EventBus) -> Box<dyn ContentView> {
            Box::new(NullView)
        }
    }

    let mut app = App::with_settings_path(
        Box::new(NullFactory),
        EventBus::new(),
        Some("demo_router_settings.json".to_string()),
    );
    app.startup();
    println!("  Startup: settings → theme → initial tab");
    println!("  Tabs: {}, active = {:?}", app.tab_manager.tab_count(), app.tab_manager.active_tab_id());

    app.dispatch(ControlIntent::CreateTab { url: None });
    println!("  Dispatched create-tab, count = {}", app.tab_manager.tab_count());

    let id = app.tab_manager.active_tab_id().unwrap();
    app.dispatch(ControlIntent::NavigateTab {
        id,
        input: "rust async book".to_string(),
    });
    println!("  Navigated via search: {}", app.tab_manager.get_active_tab().unwrap().url);

    // Unknown tab ids are ignored
    app.dispatch(ControlIntent::SwitchTab(9999));
    println!("  Switch to unknown id: ignored, active = {:?}", app.tab_manager.active_tab_id());

    let _ = std::fs::remove_file("demo_router_settings.json");
    println!("  ✓ ViewRouter + App OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_update_checker() {
    use nexabrowser::services::update_checker::UpdateChecker;
    section("Update Checker");

    let checker = UpdateChecker::new();
    println!("  Current version: {}", checker.current_version());

    let ok = checker.interpret_response(200, r#"{"tag_name": "v9.9.9", "html_url": "https://example.com/release"}"#);
    println!("  200 with v9.9.9: update_available = {:?}, latest = {:?}", ok.update_available, ok.latest_version);

    let missing = checker.interpret_response(404, "");
    println!("  404: error = {:?}", missing.error);
    println!("  ✓ UpdateChecker OK");
}
