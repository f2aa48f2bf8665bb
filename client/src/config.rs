use std::fmt::{Debug, Formatter};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.lava.ru/business";

/// Настройки проекта в Lava. Не меняются после создания клиента.
#[derive(Clone)]
pub struct LavaConfig {
    /**
    Секретный ключ проекта
     */
    secret_key: String,

    /**
    ID проекта
     */
    shop_id: String,

    api_url: String,

    timeout: Option<Duration>,
}

impl LavaConfig {
    pub fn new(secret_key: impl Into<String>, shop_id: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            shop_id: shop_id.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Limits the whole request, from connect to the end of the body.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Debug for LavaConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LavaConfig")
            .field("secret_key", &"***")
            .field("shop_id", &self.shop_id)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
