//! Update checker for NexaBrowser.
//!
//! Queries the GitHub Releases API for the latest published release and
//! compares its tag against the running version. The check never fails from
//! the caller's point of view: every problem is folded into the `error`
//! field of the result.

use crate::types::update::UpdateCheckResult;

const RELEASES_ENDPOINT: &str =
    "https://api.github.com/repos/Northy2410/NexaBrowser/releases/latest";
const USER_AGENT: &str = "NexaBrowser";

const NO_RELEASES_MSG: &str = "No releases found. Check your GitHub repository settings.";
const NETWORK_ERROR_MSG: &str = "Unable to check for updates. Please check your internet connection.";

/// Checks GitHub Releases for a newer build.
#[derive(Clone)]
pub struct UpdateChecker {
    endpoint: String,
    current_version: String,
}

impl UpdateChecker {
    pub fn new() -> Self {
        Self {
            endpoint: RELEASES_ENDPOINT.to_string(),
            current_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the endpoint, for tests against a local server.
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            current_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Perform the check. Network failures, bad status codes, and malformed
    /// bodies all come back as a result with `error` set.
    pub async fn check(&self) -> UpdateCheckResult {
        let client = match reqwest::Client::builder().user_agent(USER_AGENT).build() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[UPDATE] Client build failed: {}", e);
                return UpdateCheckResult::failure(&self.current_version, NETWORK_ERROR_MSG);
            }
        };

        let response = match client.get(&self.endpoint).send().await {
            Ok(r) => r,
            Err(e) => {
                eprintln!("[UPDATE] Request failed: {}", e);
                return UpdateCheckResult::failure(&self.current_version, NETWORK_ERROR_MSG);
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                eprintln!("[UPDATE] Body read failed: {}", e);
                return UpdateCheckResult::failure(&self.current_version, NETWORK_ERROR_MSG);
            }
        };

        self.interpret_response(status, &body)
    }

    /// Blocking variant for callers without a runtime. Builds a
    /// current-thread tokio runtime and drives `check` to completion.
    pub fn check_blocking(&self) -> UpdateCheckResult {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                eprintln!("[UPDATE] Runtime build failed: {}", e);
                return UpdateCheckResult::failure(&self.current_version, NETWORK_ERROR_MSG);
            }
        };
        runtime.block_on(self.check())
    }

    /// Turn an HTTP status and body into a result. Pure, so the contract is
    /// testable without a network.
    ///
    /// The comparison is plain string inequality on the stripped tag: any
    /// tag differing from the build version reads as an available update.
    pub fn interpret_response(&self, status: u16, body: &str) -> UpdateCheckResult {
        if status == 404 {
            return UpdateCheckResult::failure(&self.current_version, NO_RELEASES_MSG);
        }
        if status != 200 {
            return UpdateCheckResult::failure(&self.current_version, NETWORK_ERROR_MSG);
        }

        let release: serde_json::Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("[UPDATE] Malformed release JSON: {}", e);
                // The parse error's own message is the reported error
                return UpdateCheckResult::failure(&self.current_version, &e.to_string());
            }
        };

        let tag = match release.get("tag_name").and_then(|v| v.as_str()) {
            Some(t) => t,
            None => {
                return UpdateCheckResult::failure(&self.current_version, NETWORK_ERROR_MSG);
            }
        };
        let latest = tag.strip_prefix('v').unwrap_or(tag).to_string();
        let download_url = release
            .get("html_url")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        UpdateCheckResult {
            update_available: Some(latest != self.current_version),
            current_version: self.current_version.clone(),
            latest_version: Some(latest),
            download_url,
            error: None,
        }
    }
}

impl Default for UpdateChecker {
    fn default() -> Self {
        Self::new()
    }
}
