use serde::{Deserialize, Serialize};
use std::env;

/// Runtime configuration, built once in main() and injected into the
/// router state. Nothing here is a global singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL for the dataset store, e.g. `sqlite:webgis.db`
    pub url: String,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn defaults() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "sqlite:webgis.db".to_string(),
                max_connections: 5,
            },
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("WEBGIS_HOST") {
            self.server.host = v;
        }
        // WEBGIS_PORT wins over the generic PORT used by some deployments
        if let Ok(v) = env::var("WEBGIS_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("WEBGIS_DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("WEBGIS_DB_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::defaults();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite:webgis.db");
        assert_eq!(config.database.max_connections, 5);
    }
}
