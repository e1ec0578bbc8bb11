use crate::error::AppError;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub ddragon_version: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bind = env::var("VSLOL_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind = parse_bind(&bind)?;

        let data_dir = env::var("VSLOL_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let static_dir = env::var("VSLOL_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let templates_dir =
            env::var("VSLOL_TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string());

        let ddragon_version = env::var("VSLOL_DDRAGON_VERSION")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Config {
            bind,
            data_dir: PathBuf::from(data_dir),
            static_dir: PathBuf::from(static_dir),
            templates_dir: PathBuf::from(templates_dir),
            ddragon_version,
        })
    }
}

pub fn parse_bind(value: &str) -> Result<SocketAddr, AppError> {
    value.parse().map_err(|_| {
        AppError::ConfigError(format!(
            "invalid bind address '{}' (expected HOST:PORT)",
            value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_and_port() {
        let addr = parse_bind("127.0.0.1:5000").unwrap();
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn rejects_missing_port() {
        let err = parse_bind("localhost").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
