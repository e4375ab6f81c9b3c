use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.agify.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the agify client.
/// Values are sourced from environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            user_agent: default_user_agent(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment.
    ///
    /// Env vars:
    /// - AGIFY_API_URL (default: https://api.agify.io)
    /// - AGIFY_API_KEY (default: none; empty is treated as none)
    /// - AGIFY_HTTP_TIMEOUT_SECS (default: 30)
    /// - AGIFY_USER_AGENT (default: agify-rs/<version>)
    ///
    /// Nothing is validated here; a bad URL surfaces on the first request.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("AGIFY_API_URL").unwrap_or(defaults.base_url),
            api_key: lookup("AGIFY_API_KEY").filter(|k| !k.is_empty()),
            user_agent: lookup("AGIFY_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_secs: lookup("AGIFY_HTTP_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

fn default_user_agent() -> String {
    format!("agify-rs/{}", env!("CARGO_PKG_VERSION"))
}
