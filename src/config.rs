use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_USDA_ENDPOINT: &str = "https://api.nal.usda.gov/fdc/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct UsdaConfig {
    pub api_key: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub usda: UsdaConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let usda = UsdaConfig {
            api_key: std::env::var("USDA_API_KEY").context("USDA_API_KEY is not set")?,
            endpoint: std::env::var("USDA_API_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USDA_ENDPOINT.into()),
        };
        Ok(Self { database_url, usda })
    }
}
