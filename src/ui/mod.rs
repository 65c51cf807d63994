//! NexaBrowser UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2 (Chromium-based)
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The chrome (tab strip + navigation bar + settings overlay) is one child
//! WebView pinned to the top of the window; each tab gets its own child
//! WebView below it. Communication between the chrome JS and the Rust shell
//! uses wry IPC.

pub mod webview_app;
