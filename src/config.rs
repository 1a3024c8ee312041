use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    Dev,
    #[default]
    Production,
}

impl Environment {
    /// `DEV` (exact match) selects development mode; anything else is production.
    pub fn from_var(value: &str) -> Self {
        if value == "DEV" {
            Environment::Dev
        } else {
            Environment::Production
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Environment::Dev)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    NoCache,
    Public { max_age: u32 },
}

impl CachePolicy {
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Dev => CachePolicy::NoCache,
            Environment::Production => CachePolicy::Public { max_age: 86_400 },
        }
    }

    pub fn header_value(&self) -> String {
        match self {
            CachePolicy::NoCache => "no-cache".to_string(),
            CachePolicy::Public { max_age } => format!("public, max-age={max_age}"),
        }
    }
}

/// Process wide settings, read once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: Environment::Production,
        }
    }
}

impl ServerConfig {
    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy::for_environment(self.environment)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Applies `PORT` and `ENVIRONMENT` on top of the current values.
    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value {port:?}"))?;
        }
        if let Some(environment) = lookup("ENVIRONMENT") {
            self.environment = Environment::from_var(&environment);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    host: Option<String>,
    port: Option<u16>,
    environment: Option<String>,
}

/// Defaults, then the optional JSON file, then the process environment.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    let mut config = ServerConfig::default();

    if let Some(path) = path {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let parsed: ConfigFile = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        apply_file(&mut config, parsed);
    }

    config.apply_env(|key| std::env::var(key).ok())?;
    Ok(config)
}

fn apply_file(config: &mut ServerConfig, parsed: ConfigFile) {
    if let Some(v) = parsed.host {
        config.host = v;
    }
    if let Some(v) = parsed.port {
        config.port = v;
    }
    if let Some(v) = parsed.environment {
        config.environment = Environment::from_var(&v);
    }
}
