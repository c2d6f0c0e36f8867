use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

const ENV_PREFIX: &str = "EASYSEARCH_";

/// Connection settings for the hosted API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub protocol: String,
    pub host: String,
    pub base_path: String,
    pub api_key: String,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            host: "api.swiftype.com".to_string(),
            base_path: "/api/v1/".to_string(),
            api_key: String::new(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), ..Self::default() }
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}{}", self.protocol, self.host, self.base_path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidConfig("client.api_key is not set".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(Error::InvalidConfig("client.host is empty".to_string()));
        }
        match self.protocol.as_str() {
            "http" | "https" => Ok(()),
            other => Err(Error::InvalidConfig(format!("unsupported protocol '{other}'"))),
        }
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Self::defaults().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(Self { figment })
    }

    /// Loads a single TOML file (after `~`/`${VAR}` expansion) plus `EASYSEARCH_*` overrides.
    pub fn load_file<S: AsRef<str>>(path: S) -> Result<Self> {
        let path = expand_path(path);
        if !path.is_file() {
            return Err(Error::InvalidConfig(format!("config file {} not found", path.display())));
        }
        let figment = Self::defaults()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Ok(Self { figment })
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    /// The `[client]` section, validated.
    pub fn client(&self) -> Result<ClientConfig> {
        let client: ClientConfig = self.get("client")?;
        client.validate()?;
        Ok(client)
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::default("client", ClientConfig::default()))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
