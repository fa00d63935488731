use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub cms: CmsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Behavior flags for the content services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Reject reorder calls that do not list every section of the page.
    /// Off by default: some callers rely on best-effort partial reorders.
    pub strict_reorder: bool,
    /// Validate section content against the template field schema on
    /// writes. Off by default: the editor historically accepts any shape.
    pub validate_content: bool,
    /// Build a demo homepage on startup when the database holds no pages
    pub seed_demo: bool,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            strict_reorder: false,
            validate_content: false,
            seed_demo: false,
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite:data/cms.db".to_string()),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            cms: CmsConfig {
                strict_reorder: env_flag("CMS_STRICT_REORDER"),
                validate_content: env_flag("CMS_VALIDATE_CONTENT"),
                seed_demo: env_flag("CMS_SEED_DEMO"),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
