use crate::error::{config_error, env_error, AdminResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use url::Url;

/// Default UI locale
pub const DEFAULT_LOCALE: &str = "fr";

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Optional override file, relative to the working directory
pub const CONFIG_FILE: &str = "config/dashboard.toml";

/// Which login endpoint the configured credentials belong to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[default]
    Salon,
    Member,
}

/// Main configuration structure for the dashboard client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST API
    pub api_url: String,
    /// Login e-mail
    pub email: Option<String>,
    /// Password, or access code for member accounts
    pub password: Option<String>,
    /// Account type of the credentials
    pub account: AccountKind,
    /// Locale for user-facing messages
    pub locale: String,
    /// HTTP request timeout
    pub request_timeout_secs: u64,
    /// Keep the session alive through the refresh cookie
    pub persist_session: bool,
}

/// Values from `config/dashboard.toml`; anything set here wins over the environment
#[derive(Debug, Clone, Default, Deserialize)]
struct FileOverrides {
    api_url: Option<String>,
    email: Option<String>,
    password: Option<String>,
    account: Option<AccountKind>,
    locale: Option<String>,
    request_timeout_secs: Option<u64>,
    persist_session: Option<bool>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AdminResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let file = fs::read_to_string(CONFIG_FILE).ok();
        Self::from_sources(|key| env::var(key).ok(), file.as_deref())
    }

    /// Build a configuration from an environment lookup and optional TOML file contents
    pub fn from_sources<F>(lookup: F, file: Option<&str>) -> AdminResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides: FileOverrides = match file {
            Some(content) => toml::from_str(content)?,
            None => FileOverrides::default(),
        };

        let api_url = overrides
            .api_url
            .or_else(|| lookup("SALON_API_URL"))
            .ok_or_else(|| env_error("SALON_API_URL"))?;

        let account = match overrides.account {
            Some(kind) => kind,
            None => match lookup("SALON_ACCOUNT").as_deref() {
                None | Some("salon") => AccountKind::Salon,
                Some("member") => AccountKind::Member,
                Some(other) => {
                    return Err(config_error(&format!(
                        "Invalid SALON_ACCOUNT {:?}, expected salon or member",
                        other
                    )))
                }
            },
        };

        let request_timeout_secs = match overrides.request_timeout_secs {
            Some(secs) => secs,
            None => match lookup("REQUEST_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .map_err(|_| env_error("Invalid REQUEST_TIMEOUT_SECS format"))?,
                None => DEFAULT_REQUEST_TIMEOUT_SECS,
            },
        };

        let persist_session = match overrides.persist_session {
            Some(persist) => persist,
            None => lookup("PERSIST_SESSION")
                .map(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        };

        let config = Config {
            api_url,
            email: overrides.email.or_else(|| lookup("SALON_EMAIL")),
            password: overrides.password.or_else(|| lookup("SALON_PASSWORD")),
            account,
            locale: overrides
                .locale
                .or_else(|| lookup("DASHBOARD_LOCALE"))
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            request_timeout_secs,
            persist_session,
        };

        // Fail early on an unusable URL
        config.base_url()?;
        Ok(config)
    }

    /// API base URL, normalised to end with a slash so relative joins keep any path prefix
    pub fn base_url(&self) -> AdminResult<Url> {
        let mut raw = self.api_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(config_error(&format!(
                "Unsupported API URL scheme: {}",
                url.scheme()
            )));
        }
        Ok(url)
    }

    /// Credentials, if both halves are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email, password))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_from_env() {
        let config = Config::from_sources(
            env_of(&[("SALON_API_URL", "https://api.example.com")]),
            None,
        )
        .unwrap();

        assert_eq!(config.account, AccountKind::Salon);
        assert_eq!(config.locale, "fr");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.persist_session);
        assert_eq!(config.credentials(), None);
        assert_eq!(config.base_url().unwrap().as_str(), "https://api.example.com/");
    }

    #[test]
    fn test_missing_api_url() {
        assert!(Config::from_sources(env_of(&[]), None).is_err());
    }

    #[test]
    fn test_file_overrides_env() {
        let file = r#"
            api_url = "http://localhost:3000/backend"
            account = "member"
            persist_session = true
            request_timeout_secs = 5
        "#;
        let config = Config::from_sources(
            env_of(&[
                ("SALON_API_URL", "https://api.example.com"),
                ("SALON_EMAIL", "ana@example.com"),
                ("SALON_PASSWORD", "123456"),
                ("PERSIST_SESSION", "false"),
            ]),
            Some(file),
        )
        .unwrap();

        assert_eq!(config.account, AccountKind::Member);
        assert!(config.persist_session);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.credentials(), Some(("ana@example.com", "123456")));
        assert_eq!(
            config.base_url().unwrap().join("api/salon").unwrap().as_str(),
            "http://localhost:3000/backend/api/salon"
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_sources(
            env_of(&[("SALON_API_URL", "https://a.b"), ("SALON_ACCOUNT", "owner")]),
            None
        )
        .is_err());
        assert!(Config::from_sources(
            env_of(&[("SALON_API_URL", "https://a.b"), ("REQUEST_TIMEOUT_SECS", "soon")]),
            None
        )
        .is_err());
        assert!(Config::from_sources(env_of(&[("SALON_API_URL", "ftp://a.b")]), None).is_err());
        assert!(Config::from_sources(env_of(&[("SALON_API_URL", "x")]), Some("api_url = 3")).is_err());
    }
}
