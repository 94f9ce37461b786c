use kingdom_catalog::{CatalogError, Catalogs};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON catalog file. A file carries its own currency.
    pub path: Option<String>,
    /// Currency of the built-in storefront
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckoutConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_checkout_url")]
    pub base_url: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_checkout_url(),
        }
    }
}

fn default_provider() -> String {
    "mock".to_string()
}

fn default_checkout_url() -> String {
    "https://checkout.invalid/pay".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layer `{dir}/default`, `{dir}/{RUN_MODE}`, `{dir}/local`, then `KINGDOM__*` env vars
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Never checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg. `KINGDOM__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("KINGDOM").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn catalogs(&self) -> Result<Catalogs, CatalogError> {
        match &self.catalog.path {
            Some(path) => Catalogs::from_json_file(path),
            None => Ok(Catalogs::storefront().with_currency(&self.catalog.currency)),
        }
    }
}
