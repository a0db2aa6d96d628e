use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Where the server listens.
///
/// Layering: built-in defaults, then `HOST`/`PORT` environment variables,
/// then explicit CLI overrides via the `with_*` builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `HOST` and `PORT` from the environment, falling back to the
    /// defaults. An unparsable `PORT` falls back rather than failing.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = env::var("HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Ok(port) = env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }
        config
    }

    pub fn with_host(mut self, host: Option<String>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        self
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Bind address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr() {
        assert_eq!(ServerConfig::default().addr(), "127.0.0.1:3000");
    }

    #[test]
    fn cli_overrides_win() {
        let config = ServerConfig::default()
            .with_host(Some("0.0.0.0".to_string()))
            .with_port(Some(8080));
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn none_overrides_keep_existing_values() {
        let config = ServerConfig::default().with_host(None).with_port(None);
        assert_eq!(config, ServerConfig::default());
    }
}
