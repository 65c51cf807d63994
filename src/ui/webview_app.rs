//! WebView-based browser shell using `wry` + `tao`.
//!
//! Architecture:
//! - One chrome child WebView pinned to the top 102px of the window renders
//!   the tab strip, navigation bar, and settings overlay from CHROME_HTML.
//! - Each tab gets its own child WebView laid out below the chrome; exactly
//!   one is visible at a time.
//! - IPC from chrome JS and callbacks from content views are forwarded to
//!   the event loop as user events, so all state lives on one thread.

use std::cell::RefCell;
use std::rc::Rc;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::app::App;
use crate::managers::tab_manager::TabManagerTrait;
use crate::managers::view_router::{
    content_bounds, ContentView, EventBus, EventSubscriber, ViewBounds, ViewFactory, CHROME_HEIGHT,
};
use crate::types::events::{BrowserEvent, ControlIntent};
use crate::types::tab::TabId;
use crate::types::update::UpdateCheckResult;

const CHROME_HTML: &str = include_str!("../../resources/ui/chrome.html");

#[derive(Debug)]
enum UserEvent {
    /// Raw IPC body from the chrome WebView.
    ChromeIpc(String),
    /// Notification from the router or a content view.
    Browser(BrowserEvent),
    /// Popup request redirected into the view that requested it.
    NavigateUrl { id: TabId, url: String },
    /// Finished update check from the worker thread.
    UpdateResult(UpdateCheckResult),
}

/// Forwards bus events onto the event loop.
struct ProxySubscriber(EventLoopProxy<UserEvent>);

impl EventSubscriber for ProxySubscriber {
    fn notify(&self, event: &BrowserEvent) {
        let _ = self.0.send_event(UserEvent::Browser(event.clone()));
    }
}

// ─── Navigation history ───

/// Session history mirror for one content view.
///
/// The WebView owns the real history; back/forward are driven by script, so
/// this mirror only exists to answer `can_go_back`/`can_go_forward`. A load
/// reported by the view only counts as a history traversal when the matching
/// `note_back`/`note_forward` marker was set by an explicit back/forward
/// command; a link navigation to a neighboring URL stays a new entry.
struct NavHistory {
    entries: Vec<String>,
    index: usize,
    pending: Option<PendingTraversal>,
}

enum PendingTraversal {
    Back,
    Forward,
}

impl NavHistory {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            pending: None,
        }
    }

    fn note_back(&mut self) {
        self.pending = Some(PendingTraversal::Back);
    }

    fn note_forward(&mut self) {
        self.pending = Some(PendingTraversal::Forward);
    }

    fn record(&mut self, url: &str) {
        let pending = self.pending.take();
        if self.entries.get(self.index).map(String::as_str) == Some(url) {
            return;
        }
        match pending {
            Some(PendingTraversal::Back)
                if self.index > 0
                    && self.entries.get(self.index - 1).map(String::as_str) == Some(url) =>
            {
                self.index -= 1;
            }
            Some(PendingTraversal::Forward)
                if self.entries.get(self.index + 1).map(String::as_str) == Some(url) =>
            {
                self.index += 1;
            }
            _ => {
                if !self.entries.is_empty() {
                    self.entries.truncate(self.index + 1);
                }
                self.entries.push(url.to_string());
                self.index = self.entries.len() - 1;
            }
        }
    }

    fn can_go_back(&self) -> bool {
        self.index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }
}

// ─── Content views ───

fn to_rect(bounds: ViewBounds) -> wry::Rect {
    wry::Rect {
        position: LogicalPosition::new(bounds.x as f64, bounds.y as f64).into(),
        size: LogicalSize::new(bounds.width as f64, bounds.height as f64).into(),
    }
}

struct WryContentView {
    webview: WebView,
    history: Rc<RefCell<NavHistory>>,
}

impl ContentView for WryContentView {
    fn load(&mut self, url: &str) {
        if let Err(e) = self.webview.load_url(url) {
            eprintln!("[VIEW] load failed: {}", e);
        }
    }

    fn reload(&mut self) {
        let _ = self.webview.evaluate_script("location.reload()");
    }

    fn stop(&mut self) {
        let _ = self.webview.evaluate_script("window.stop();");
    }

    fn go_back(&mut self) {
        self.history.borrow_mut().note_back();
        let _ = self.webview.evaluate_script("history.back()");
    }

    fn go_forward(&mut self) {
        self.history.borrow_mut().note_forward();
        let _ = self.webview.evaluate_script("history.forward()");
    }

    fn can_go_back(&self) -> bool {
        self.history.borrow().can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.borrow().can_go_forward()
    }

    fn set_bounds(&mut self, bounds: ViewBounds) {
        if let Err(e) = self.webview.set_bounds(to_rect(bounds)) {
            eprintln!("[VIEW] set_bounds failed: {}", e);
        }
    }

    fn show(&mut self) {
        let _ = self.webview.set_visible(true);
    }

    fn hide(&mut self) {
        let _ = self.webview.set_visible(false);
    }
}

/// Builds one child WebView per tab, wiring its lifecycle callbacks to the
/// event bus and popup requests back to the event loop.
struct WryViewFactory {
    window: Rc<Window>,
    proxy: EventLoopProxy<UserEvent>,
}

impl ViewFactory for WryViewFactory {
    fn create_view(&mut self, id: TabId, events: EventBus) -> Box<dyn ContentView> {
        let (width, height) = logical_size(&self.window);
        let history = Rc::new(RefCell::new(NavHistory::new()));

        let load_history = history.clone();
        let load_events = events.clone();
        let title_events = events;
        let popup_proxy = self.proxy.clone();

        let webview = WebViewBuilder::new()
            .with_bounds(to_rect(content_bounds(width, height)))
            .with_visible(false)
            .with_devtools(cfg!(debug_assertions))
            .with_on_page_load_handler(move |event, url| match event {
                PageLoadEvent::Started => {
                    load_history.borrow_mut().record(&url);
                    load_events.emit(&BrowserEvent::TabLoadingStart(id));
                    load_events.emit(&BrowserEvent::TabUrlChange { id, url });
                }
                PageLoadEvent::Finished => {
                    load_events.emit(&BrowserEvent::TabLoadingStop(id));
                }
            })
            .with_document_title_changed_handler(move |title| {
                title_events.emit(&BrowserEvent::TabTitleChange { id, title });
            })
            .with_new_window_req_handler(move |url, _features| {
                eprintln!("[POPUP] {}", url);
                // Popups load into the view that requested them
                if url.starts_with("http://") || url.starts_with("https://") {
                    let _ = popup_proxy.send_event(UserEvent::NavigateUrl { id, url });
                }
                wry::NewWindowResponse::Deny
            })
            .build_as_child(self.window.as_ref())
            .expect("Failed to create content WebView");

        Box::new(WryContentView { webview, history })
    }
}

// ─── IPC handling ───

fn parse_intent(cmd: &str, msg: &serde_json::Value) -> Option<ControlIntent> {
    let id = || msg.get("id").and_then(|v| v.as_u64());
    match cmd {
        "create-tab" => Some(ControlIntent::CreateTab {
            url: msg.get("url").and_then(|v| v.as_str()).map(String::from),
        }),
        "switch-tab" => id().map(ControlIntent::SwitchTab),
        "close-tab" => id().map(ControlIntent::CloseTab),
        "navigate" => {
            let input = msg.get("input")?.as_str()?.to_string();
            Some(ControlIntent::NavigateTab { id: id()?, input })
        }
        "go-back" => id().map(ControlIntent::GoBack),
        "go-forward" => id().map(ControlIntent::GoForward),
        "reload" => id().map(ControlIntent::Reload),
        "go-home" => id().map(ControlIntent::GoHome),
        "stop-loading" => id().map(ControlIntent::StopLoading),
        "show-settings" => Some(ControlIntent::ShowSettings),
        "load-settings" => Some(ControlIntent::LoadSettings),
        "save-settings" => msg.get("settings").cloned().map(ControlIntent::SaveSettings),
        "theme-changed" => {
            let theme = serde_json::from_value(msg.get("theme")?.clone()).ok()?;
            Some(ControlIntent::ThemeChanged(theme))
        }
        _ => None,
    }
}

fn handle_chrome_ipc(
    app: &mut App,
    chrome: &WebView,
    proxy: &EventLoopProxy<UserEvent>,
    body: &str,
) {
    let preview: String = body.chars().take(200).collect();
    eprintln!("[IPC] {}", preview);
    let msg: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return,
    };
    let cmd = match msg.get("cmd").and_then(|v| v.as_str()) {
        Some(c) => c,
        None => return,
    };

    match cmd {
        "get-settings" => {
            if let Ok(json) = serde_json::to_string(app.router.current_settings()) {
                let _ = chrome.evaluate_script(&format!("__nexa_applySettings({})", json));
            }
        }
        "check-updates" => {
            let checker = app.router.update_checker().clone();
            let proxy = proxy.clone();
            std::thread::spawn(move || {
                let result = checker.check_blocking();
                let _ = proxy.send_event(UserEvent::UpdateResult(result));
            });
        }
        _ => {
            if let Some(intent) = parse_intent(cmd, &msg) {
                app.dispatch(intent);
                let _ = chrome.evaluate_script(&tabs_update_script(app));
            }
        }
    }
}

fn tabs_update_script(app: &App) -> String {
    let tabs: Vec<serde_json::Value> = app
        .tab_manager
        .get_all_tabs()
        .iter()
        .map(|t| serde_json::json!({"id": t.id, "title": t.title, "url": t.url}))
        .collect();
    format!(
        "__nexa_updateTabs({})",
        serde_json::json!({"tabs": tabs, "activeId": app.tab_manager.active_tab_id()})
    )
}

fn apply_browser_event(app: &App, chrome: &WebView, event: &BrowserEvent) {
    match event {
        BrowserEvent::TabLoadingStart(id) => {
            let _ = chrome.evaluate_script(&format!("__nexa_loading({}, true)", id));
        }
        BrowserEvent::TabLoadingStop(id) => {
            let _ = chrome.evaluate_script(&format!("__nexa_loading({}, false)", id));
        }
        BrowserEvent::TabUrlChange { .. } | BrowserEvent::TabTitleChange { .. } => {
            let _ = chrome.evaluate_script(&tabs_update_script(app));
        }
        BrowserEvent::ApplyTheme(theme) => {
            if let Ok(json) = serde_json::to_string(theme) {
                let _ = chrome.evaluate_script(&format!("__nexa_applyTheme({})", json));
            }
        }
        BrowserEvent::SettingsLoaded(settings) => {
            if let Ok(json) = serde_json::to_string(settings) {
                let _ = chrome.evaluate_script(&format!("__nexa_applySettings({})", json));
            }
        }
        BrowserEvent::ShowSettings => {
            let _ = chrome.evaluate_script("__nexa_showSettings()");
        }
    }
}

// ─── Layout helpers ───

fn logical_size(window: &Window) -> (u32, u32) {
    let size = window.inner_size();
    let scale = window.scale_factor();
    (
        (size.width as f64 / scale) as u32,
        (size.height as f64 / scale) as u32,
    )
}

fn chrome_rect(width: u32) -> wry::Rect {
    wry::Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(width as f64, CHROME_HEIGHT as f64).into(),
    }
}

// ─── Main entry point ───

pub fn run() {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = Rc::new(
        WindowBuilder::new()
            .with_title("NexaBrowser")
            .with_inner_size(LogicalSize::new(1200.0, 800.0))
            .with_min_inner_size(LogicalSize::new(800.0, 600.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    );

    let (width, height) = logical_size(&window);

    let ipc_proxy = proxy.clone();
    let chrome = WebViewBuilder::new()
        .with_html(CHROME_HTML)
        .with_bounds(chrome_rect(width))
        .with_devtools(cfg!(debug_assertions))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = ipc_proxy.send_event(UserEvent::ChromeIpc(msg.body().clone()));
        })
        .build_as_child(window.as_ref())
        .expect("Failed to create chrome WebView");

    let events = EventBus::new();
    events.subscribe(Box::new(ProxySubscriber(proxy.clone())));

    let factory = Box::new(WryViewFactory {
        window: window.clone(),
        proxy: proxy.clone(),
    });
    let mut app = App::new(factory, events);
    app.router.resize(width, height);
    app.startup();
    let _ = chrome.evaluate_script(&tabs_update_script(&app));

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                let scale = window.scale_factor();
                let w = (size.width as f64 / scale) as u32;
                let h = (size.height as f64 / scale) as u32;
                let _ = chrome.set_bounds(chrome_rect(w));
                app.router.resize(w, h);
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::ChromeIpc(body) => {
                    handle_chrome_ipc(&mut app, &chrome, &proxy, &body);
                }
                UserEvent::Browser(browser_event) => {
                    app.handle_event(&browser_event);
                    apply_browser_event(&app, &chrome, &browser_event);
                }
                UserEvent::NavigateUrl { id, url } => {
                    app.dispatch(ControlIntent::NavigateTab { id, input: url });
                    let _ = chrome.evaluate_script(&tabs_update_script(&app));
                }
                UserEvent::UpdateResult(result) => {
                    if let Ok(json) = serde_json::to_string(&result) {
                        let _ = chrome.evaluate_script(&format!("__nexa_updateResult({})", json));
                    }
                }
            },

            _ => {}
        }
    });
}
