//! Listener configuration from the environment.

use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8090;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `STATICS_HOST` and `STATICS_PORT`, falling back to the defaults
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("STATICS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("STATICS_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("STATICS_PORT={:?} is not a port: {}", raw, e))?,
            None => DEFAULT_PORT,
        };
        Ok(ServerConfig { host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:8090");
    }

    #[test]
    fn test_overrides() {
        let config =
            ServerConfig::from_lookup(lookup(&[("STATICS_HOST", "127.0.0.1"), ("STATICS_PORT", "9000")]))
                .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_bad_port() {
        assert!(ServerConfig::from_lookup(lookup(&[("STATICS_PORT", "http")])).is_err());
    }
}
