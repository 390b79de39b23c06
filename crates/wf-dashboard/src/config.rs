//! Dashboard configuration.

use std::path::PathBuf;
use std::time::Duration;

use wf_sdk::AssistantConfig;

/// Runtime settings of the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Interval between animation / timer ticks.
    pub tick_rate: Duration,
    /// How long the splash screen stays up.
    pub splash: Duration,
    /// Where the TUI writes its log.
    pub log_file: PathBuf,
    pub assistant: AssistantConfig,
}

impl DashboardConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable        | Default            |
    /// |-----------------|--------------------|
    /// | `WF_TICK_MS`    | `100`              |
    /// | `WF_SPLASH_MS`  | `2500`             |
    /// | `WF_LOG_FILE`   | `wf-dashboard.log` |
    ///
    /// Assistant settings come from [`AssistantConfig::from_env`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let millis = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };
        Self {
            // A zero interval would make tokio's interval panic.
            tick_rate: Duration::from_millis(millis("WF_TICK_MS", 100).max(1)),
            splash: Duration::from_millis(millis("WF_SPLASH_MS", 2500)),
            log_file: lookup("WF_LOG_FILE")
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| PathBuf::from("wf-dashboard.log"), PathBuf::from),
            assistant: AssistantConfig::from_lookup(&lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = DashboardConfig::from_lookup(|_| None);
        assert_eq!(cfg.tick_rate, Duration::from_millis(100));
        assert_eq!(cfg.splash, Duration::from_millis(2500));
        assert_eq!(cfg.log_file, PathBuf::from("wf-dashboard.log"));
        assert_eq!(cfg.assistant, AssistantConfig::default());
    }

    #[test]
    fn overrides_and_bad_numbers() {
        let cfg = DashboardConfig::from_lookup(|key| match key {
            "WF_TICK_MS" => Some("0".into()),
            "WF_SPLASH_MS" => Some("soon".into()),
            "WF_LOG_FILE" => Some("/tmp/wf.log".into()),
            "GEMINI_API_KEY" => Some("k".into()),
            _ => None,
        });
        assert_eq!(cfg.tick_rate, Duration::from_millis(1));
        assert_eq!(cfg.splash, Duration::from_millis(2500));
        assert_eq!(cfg.log_file, PathBuf::from("/tmp/wf.log"));
        assert_eq!(cfg.assistant.api_key.as_deref(), Some("k"));
    }
}
