use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Pricing catalogs
    pub pricing_catalog_dir: PathBuf,
    pub default_catalog_id: String,

    // Requests
    pub request_body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Pricing catalogs
        let pricing_catalog_dir = env::var("PRICING_CATALOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./catalogs"));
        let default_catalog_id =
            env::var("DEFAULT_CATALOG_ID").unwrap_or_else(|_| "default".to_string());

        // Requests
        let request_body_limit_bytes = match env::var("REQUEST_BODY_LIMIT_BYTES") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("REQUEST_BODY_LIMIT_BYTES is not a number: {raw}"))?,
            Err(_) => 1024 * 1024, // 1 MiB default
        };

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            pricing_catalog_dir,
            default_catalog_id,
            request_body_limit_bytes,
        })
    }

    /// Settings for running the app in-process, without touching the environment.
    pub fn local(pricing_catalog_dir: impl Into<PathBuf>) -> Self {
        Settings {
            env: Environment::Dev,
            server_addr: "127.0.0.1:0".to_string(),
            cors_allow_origins: vec!["http://localhost:3000".to_string()],
            pricing_catalog_dir: pricing_catalog_dir.into(),
            default_catalog_id: "default".to_string(),
            request_body_limit_bytes: 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str("PRODUCTION"), Environment::Prod);
        assert_eq!(Environment::from_str("prod"), Environment::Prod);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("anything-else"), Environment::Dev);
        assert!(Environment::Dev.is_dev());
        assert!(Environment::Prod.is_prod());
    }
}
