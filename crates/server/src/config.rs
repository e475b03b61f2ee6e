//! Server configuration

use std::path::PathBuf;

/// Server configuration loaded from environment variables
pub struct Config {
    pub bind_address: String,
    pub fixture_dir: PathBuf,
    pub public_dir: PathBuf,
    pub cors_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
    pub ehr_mode: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let bind_address = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| {
            let port = std::env::var("PORT").unwrap_or_else(|_| "8080".into());
            format!("0.0.0.0:{}", port)
        });

        Self {
            bind_address,
            fixture_dir: std::env::var("FIXTURE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("fhir-fixtures")),
            public_dir: std::env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| parse_list(&v))
                .unwrap_or_else(|_| vec!["*".to_string()]),
            rate_limit_per_minute: std::env::var("RATE_LIMIT_PER_MINUTE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            ehr_mode: std::env::var("EHR_MODE").unwrap_or_else(|_| "mock".into()),
        }
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
