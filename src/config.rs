use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Largest request text accepted by the HTTP surface, in characters.
    pub max_text_chars: usize,
    /// Largest keyword list accepted by the HTTP surface.
    pub max_keywords: usize,
}

const DEFAULT_MAX_TEXT_CHARS: usize = 100_000;
const DEFAULT_MAX_KEYWORDS: usize = 100;

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Server address with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let max_text_chars = parse_limit("MAX_TEXT_CHARS", DEFAULT_MAX_TEXT_CHARS)?;
        let max_keywords = parse_limit("MAX_KEYWORDS", DEFAULT_MAX_KEYWORDS)?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            max_text_chars,
            max_keywords,
        })
    }
}

fn parse_limit(var: &str, default: usize) -> Result<usize> {
    match env::var(var) {
        Ok(raw) => raw
            .parse::<usize>()
            .map_err(|e| AppError::ConfigError(format!("Invalid {}: {}", var, e))),
        Err(_) => Ok(default),
    }
}
