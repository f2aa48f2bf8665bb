use std::time::Duration;

use anyhow::{Context, Result};
use lava_payments::{LavaConfig, DEFAULT_API_URL};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    #[serde(rename = "lava_secret_key")]
    secret_key: String,
    #[serde(rename = "lava_shop_id")]
    shop_id: String,
    #[serde(rename = "lava_api_url", default = "default_api_url")]
    api_url: String,
    #[serde(rename = "lava_timeout_secs")]
    timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    fn from_vars<I: IntoIterator<Item = (String, String)>>(vars: I) -> Result<Self> {
        envy::from_iter::<_, Config>(vars).context("LAVA_SECRET_KEY and LAVA_SHOP_ID must be set")
    }

    pub fn into_lava_config(self) -> LavaConfig {
        let config = LavaConfig::new(self.secret_key, self.shop_id).with_api_url(self.api_url);

        match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}
