//! Environment-variable configuration.

use std::env;

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// When true, the signup endpoints provision real tenant
    /// namespaces; otherwise the static dummy handlers answer.
    pub provision_enabled: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("WM_HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("WM_HTTP_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5000);
        let provision_enabled = env::var("WM_NS_PROVISION")
            .map(|value| value == "true")
            .unwrap_or(false);

        Self {
            host,
            port,
            provision_enabled,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the process environment is shared across threads.
    #[test]
    fn from_env_defaults_and_overrides() {
        for key in ["WM_HTTP_HOST", "WM_HTTP_PORT", "WM_NS_PROVISION"] {
            env::remove_var(key);
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(!config.provision_enabled);
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");

        env::set_var("WM_HTTP_HOST", "0.0.0.0");
        env::set_var("WM_HTTP_PORT", "8080");
        env::set_var("WM_NS_PROVISION", "true");

        let config = ServerConfig::from_env();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.provision_enabled);

        // Unparseable port falls back to the default.
        env::set_var("WM_HTTP_PORT", "not-a-port");
        assert_eq!(ServerConfig::from_env().port, 5000);

        for key in ["WM_HTTP_HOST", "WM_HTTP_PORT", "WM_NS_PROVISION"] {
            env::remove_var(key);
        }
    }
}
