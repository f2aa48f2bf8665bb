use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use shared::Bill;
use tracing::debug;

use crate::config::LavaConfig;
use crate::error::Result;
use crate::invoice::{BillLookupPayload, CreateBill};
use crate::response::ApiResponse;
use crate::signature::SignedBody;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endpoint {
    CreateInvoice,
    InvoiceStatus,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::CreateInvoice => "invoice/create",
            Endpoint::InvoiceStatus => "invoice/status",
        }
    }

    pub fn url(self, api_url: &str) -> String {
        format!("{}/{}", api_url.trim_end_matches('/'), self.path())
    }
}

/// Асинхронный клиент Бизнес API Lava.ru.
///
/// Держит только неизменяемые настройки проекта, поэтому его можно
/// клонировать и вызывать из нескольких задач одновременно.
#[derive(Debug, Clone)]
pub struct LavaPayments {
    config: LavaConfig,
}

impl LavaPayments {
    pub fn new(secret_key: impl Into<String>, shop_id: impl Into<String>) -> Self {
        Self::with_config(LavaConfig::new(secret_key, shop_id))
    }

    pub fn with_config(config: LavaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LavaConfig {
        &self.config
    }

    /// Выставление счёта.
    ///
    /// Сумма и время жизни проверяются до отправки запроса.
    pub async fn create_bill(&self, params: CreateBill) -> Result<Bill> {
        let payload = params.into_payload(self.config.shop_id())?;

        debug!(
            order_id = %payload.order_id,
            sum = payload.sum,
            expire = payload.expire,
            "Creating Lava bill"
        );

        self.send(Endpoint::CreateInvoice, &payload)
            .await?
            .into_bill()
    }

    /// Получение счёта по ID счёта или по ID заказа.
    pub async fn get_bill(&self, invoice_id: Option<&str>, order_id: Option<&str>) -> Result<Bill> {
        let payload = BillLookupPayload::new(self.config.shop_id(), invoice_id, order_id)?;

        debug!(
            invoice_id = payload.invoice_id.as_deref(),
            order_id = payload.order_id.as_deref(),
            "Fetching Lava bill"
        );

        self.send(Endpoint::InvoiceStatus, &payload)
            .await?
            .into_bill()
    }

    /// Signs `payload` and posts it. One connection per call, closed afterwards.
    pub async fn send<T: Serialize>(&self, endpoint: Endpoint, payload: &T) -> Result<ApiResponse> {
        let signed = SignedBody::new(self.config.secret_key(), payload)?;
        let url = endpoint.url(self.config.api_url());

        debug!(%url, bytes = signed.body.len(), "Sending signed request");

        let response = self
            .http_client()?
            .post(&url)
            .header("Signature", &signed.signature)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(signed.body)
            .send()
            .await?;

        ApiResponse::from_response(response).await
    }

    fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(0);

        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}
