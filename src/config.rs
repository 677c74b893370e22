use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_WORDNIK_BASE_URL: &str = "https://api.wordnik.com/v4/";
pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.groq.com/openai/v1/";
pub const DEFAULT_COMPLETION_MODEL: &str = "openai/gpt-oss-20b";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub completion: CompletionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// `*` mirrors whatever origin the browser sends.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    pub api_key: String,
    /// Always ends with `/` so endpoint paths can be joined onto it.
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl DictionaryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CompletionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Build from the process environment. A `.env` file in the working
    /// directory is applied first; variables already set in the environment
    /// take precedence over the file.
    pub fn load() -> anyhow::Result<Self> {
        match dotenv::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment overrides from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => anyhow::bail!("Failed to read .env file: {e}"),
        }
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build from an arbitrary key lookup. Missing or unparsable values fall
    /// back to their defaults; missing API keys become empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: lookup("PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(8000),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|v| split_csv(&v))
                    .filter(|origins| !origins.is_empty())
                    .unwrap_or_else(|| vec!["*".to_string()]),
            },
            dictionary: DictionaryConfig {
                api_key: lookup("WORDNIK_API_KEY").unwrap_or_default(),
                base_url: with_trailing_slash(
                    lookup("WORDNIK_BASE_URL")
                        .unwrap_or_else(|| DEFAULT_WORDNIK_BASE_URL.to_string()),
                ),
                timeout_secs,
            },
            completion: CompletionConfig {
                api_key: lookup("GROQ_API_KEY").unwrap_or_default(),
                base_url: with_trailing_slash(
                    lookup("COMPLETION_BASE_URL")
                        .unwrap_or_else(|| DEFAULT_COMPLETION_BASE_URL.to_string()),
                ),
                model: lookup("COMPLETION_MODEL")
                    .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
                timeout_secs,
            },
        }
    }

    /// Warnings worth surfacing at startup. Nothing here is fatal: a rejected
    /// key shows up per request as an upstream failure.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.dictionary.api_key.is_empty() {
            warnings.push("WORDNIK_API_KEY is not set; dictionary lookups will be rejected upstream".to_string());
        }
        if self.completion.api_key.is_empty() {
            warnings.push("GROQ_API_KEY is not set; definition lookups will be rejected upstream".to_string());
        }
        warnings
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.allowed_origins, vec!["*"]);
        assert_eq!(config.dictionary.base_url, DEFAULT_WORDNIK_BASE_URL);
        assert_eq!(config.dictionary.api_key, "");
        assert_eq!(config.completion.model, DEFAULT_COMPLETION_MODEL);
        assert_eq!(config.completion.timeout_secs, 30);
        assert_eq!(config.warnings().len(), 2);
    }

    #[test]
    fn test_overrides_and_normalization() {
        let config = config_from(&[
            ("PORT", "9100"),
            ("WORDNIK_API_KEY", "abc"),
            ("WORDNIK_BASE_URL", "http://127.0.0.1:4000/v4"),
            ("GROQ_API_KEY", "xyz"),
            ("CORS_ALLOWED_ORIGINS", "chrome-extension://abc, https://example.org"),
        ]);
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.dictionary.base_url, "http://127.0.0.1:4000/v4/");
        assert_eq!(
            config.server.allowed_origins,
            vec!["chrome-extension://abc", "https://example.org"]
        );
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }
}
