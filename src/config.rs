//! UI configuration baked in at build time.
//!
//! The page runs in the browser, so there is no process environment to read
//! at startup. Values come from `option_env!` during `trunk build` instead,
//! and every knob falls back to a default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_LOADING_DELAY_MS: u64 = 1500;
pub const DEFAULT_TAB_SWITCH_DELAY_MS: u64 = 1500;
pub const DEFAULT_BANNER_MS: u64 = 5000;

/// Timing and endpoint settings shared by the auth page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Origin prefix for API calls. Empty means same origin.
    pub api_base: String,
    /// Pause before each request so the loading quip is readable.
    pub loading_delay: Duration,
    /// Pause between a successful registration and the switch to login.
    pub tab_switch_delay: Duration,
    /// How long a banner message stays visible.
    pub banner_duration: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            loading_delay: Duration::from_millis(DEFAULT_LOADING_DELAY_MS),
            tab_switch_delay: Duration::from_millis(DEFAULT_TAB_SWITCH_DELAY_MS),
            banner_duration: Duration::from_millis(DEFAULT_BANNER_MS),
        }
    }
}

impl UiConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `CALICO_API_BASE`: origin prefix for `/api/*` calls (default: same origin)
    /// - `CALICO_LOADING_DELAY_MS`: default 1500
    /// - `CALICO_TAB_SWITCH_DELAY_MS`: default 1500
    /// - `CALICO_BANNER_MS`: default 5000
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CALICO_API_BASE"),
            option_env!("CALICO_LOADING_DELAY_MS"),
            option_env!("CALICO_TAB_SWITCH_DELAY_MS"),
            option_env!("CALICO_BANNER_MS"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        loading_delay_ms: Option<&str>,
        tab_switch_delay_ms: Option<&str>,
        banner_ms: Option<&str>,
    ) -> Self {
        Self {
            api_base: api_base.unwrap_or_default().trim().trim_end_matches('/').to_owned(),
            loading_delay: parse_millis(loading_delay_ms, DEFAULT_LOADING_DELAY_MS),
            tab_switch_delay: parse_millis(tab_switch_delay_ms, DEFAULT_TAB_SWITCH_DELAY_MS),
            banner_duration: parse_millis(banner_ms, DEFAULT_BANNER_MS),
        }
    }

    /// Join an absolute API path (`/api/...`) onto the configured base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn parse_millis(raw: Option<&str>, default: u64) -> Duration {
    let millis = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_millis(millis)
}
