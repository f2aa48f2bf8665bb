use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{Date, Service};

/// Статус счёта. API отдаёт его то числом, то строкой.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum BillStatus {
    Code(i64),
    Text(String),
}

impl Display for BillStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BillStatus::Code(code) => write!(f, "{code}"),
            BillStatus::Text(text) => f.write_str(text),
        }
    }
}

impl PartialEq<&str> for BillStatus {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, BillStatus::Text(text) if text == other)
    }
}

impl PartialEq<i64> for BillStatus {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, BillStatus::Code(code) if code == other)
    }
}

/**
Счёт, как его возвращают `invoice/create` и `invoice/status` (поле `data`).

https://dev.lava.ru/business-invoice-create
 */
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Bill {
    /**
    ID счёта в системе Lava
     */
    id: String,

    /**
    Сумма счёта
     */
    amount: f64,

    /**
    Время, до которого счёт можно оплатить
     */
    expire: Date,

    status: BillStatus,

    /**
    ID проекта
     */
    shop_id: String,

    /**
    Ссылка на форму оплаты
     */
    url: Option<String>,

    comment: Option<String>,

    fail_url: Option<String>,

    success_url: Option<String>,

    hook_url: Option<String>,

    /**
    Строка, переданная при создании счёта
     */
    custom_fields: Option<String>,

    #[serde(rename = "merchantName")]
    merchant_name: Option<String>,

    /**
    Методы оплаты, доступные на странице счёта
     */
    include_service: Option<Vec<Service>>,

    /**
    Методы оплаты, недоступные на странице счёта
     */
    exclude_service: Option<Vec<Service>>,

    error_message: Option<String>,
}

impl Bill {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn expire(&self) -> &Date {
        &self.expire
    }

    pub fn status(&self) -> &BillStatus {
        &self.status
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn fail_url(&self) -> Option<&str> {
        self.fail_url.as_deref()
    }

    pub fn success_url(&self) -> Option<&str> {
        self.success_url.as_deref()
    }

    pub fn hook_url(&self) -> Option<&str> {
        self.hook_url.as_deref()
    }

    pub fn custom_fields(&self) -> Option<&str> {
        self.custom_fields.as_deref()
    }

    pub fn merchant_name(&self) -> Option<&str> {
        self.merchant_name.as_deref()
    }

    pub fn include_service(&self) -> Option<&[Service]> {
        self.include_service.as_deref()
    }

    pub fn exclude_service(&self) -> Option<&[Service]> {
        self.exclude_service.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_expired(&self) -> bool {
        self.expire.is_expired()
    }
}
