use std::env;
use std::path::PathBuf;

use crate::logging::LogDestination;

const DEFAULT_TARGET_URL: &str = "https://www.sixtones.jp/news/";
const DEFAULT_TITLE_SELECTOR: &str = "h3.p-news-list-item__title";
const DEFAULT_STATE_FILE: &str = "latest_article.json";

/// Immutable configuration, read from the environment once at startup and
/// passed explicitly to the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Endpoint for notifications. Absent means every delivery attempt
    /// fails with an explicit "not configured" error; the run still
    /// completes.
    pub webhook_url: Option<String>,
    pub target_url: String,
    pub title_selector: String,
    pub state_file: PathBuf,
    pub log_destination: LogDestination,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            webhook_url: non_empty("NEWSWATCH_WEBHOOK_URL"),
            target_url: non_empty("NEWSWATCH_TARGET_URL")
                .unwrap_or_else(|| DEFAULT_TARGET_URL.to_string()),
            title_selector: non_empty("NEWSWATCH_TITLE_SELECTOR")
                .unwrap_or_else(|| DEFAULT_TITLE_SELECTOR.to_string()),
            state_file: non_empty("NEWSWATCH_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE)),
            log_destination: non_empty("NEWSWATCH_LOG")
                .as_deref()
                .map(LogDestination::parse)
                .unwrap_or(LogDestination::Terminal),
        }
    }
}
