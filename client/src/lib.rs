//! Клиент Бизнес API [Lava.ru](https://lava.ru): выставление счетов и проверка их статуса.
//!
//! Каждый запрос подписывается HMAC-SHA256 от тела запроса секретным ключом проекта
//! и передаётся в заголовке `Signature`.
//!
//! ```no_run
//! use lava_payments::{CreateBill, LavaPayments};
//!
//! # #[tokio::main]
//! # async fn main() -> lava_payments::Result<()> {
//! let client = LavaPayments::new("secret-key", "shop-id");
//!
//! let bill = client.create_bill(CreateBill::new(100.0).comment("Пополнение")).await?;
//! println!("{}", bill.url().unwrap_or_default());
//!
//! let bill = client.get_bill(Some(bill.id()), None).await?;
//! println!("{} expired: {}", bill.status(), bill.is_expired());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod invoice;
mod response;
pub mod signature;

pub use client::{Endpoint, LavaPayments};
pub use config::{LavaConfig, DEFAULT_API_URL};
pub use error::{LavaError, Result};
pub use invoice::{
    BillLookupPayload, CreateBill, CreateBillPayload, DEFAULT_EXPIRE, MAX_EXPIRE, MIN_AMOUNT,
    MIN_EXPIRE,
};
pub use response::ApiResponse;

pub use shared::{Bill, BillStatus, Date, Service, ValidationError};
