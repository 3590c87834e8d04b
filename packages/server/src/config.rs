use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL for login/register calls. `None` means the client default.
    pub auth_api_base_url: Option<String>,
    pub proxy_upstream_host: String,
    pub proxy_upstream_port: u16,
    pub postcodes_csv: PathBuf,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub listings_apply_filters: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            auth_api_base_url: env::var("AUTH_API_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            proxy_upstream_host: env::var("PROXY_UPSTREAM_HOST")
                .unwrap_or_else(|_| "203.0.113.10".to_string()),
            proxy_upstream_port: env::var("PROXY_UPSTREAM_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PROXY_UPSTREAM_PORT must be a valid number")?,
            postcodes_csv: env::var("POSTCODES_CSV")
                .unwrap_or_else(|_| "public/australian_postcodes.csv".to_string())
                .into(),
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            listings_apply_filters: env::var("LISTINGS_APPLY_FILTERS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }

    /// Base URL the auth proxy forwards to.
    pub fn proxy_upstream_url(&self) -> String {
        format!(
            "http://{}:{}",
            self.proxy_upstream_host, self.proxy_upstream_port
        )
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(String::from)
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_origin_means_any() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("").is_empty());
        assert_eq!(
            parse_origins("https://a.example, https://b.example"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" ON "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("nope"));
    }
}
