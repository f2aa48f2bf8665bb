use serde::Serialize;
use serde_with::skip_serializing_none;
use shared::{Service, ValidationError};
use uuid::Uuid;

pub const MIN_AMOUNT: f64 = 1.0;
pub const MIN_EXPIRE: u32 = 1;
pub const MAX_EXPIRE: u32 = 43200;
pub const DEFAULT_EXPIRE: u32 = 300;

const ORDER_ID_PREFIX: &str = "LavaPayments";

/// Параметры выставления счёта.
///
/// ```
/// use lava_payments::{CreateBill, Service};
///
/// let params = CreateBill::new(150.0)
///     .comment("Пополнение баланса")
///     .expire(60)
///     .include_service(vec![Service::Card, Service::Sbp]);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBill {
    amount: f64,
    order_id: Option<String>,
    hook_url: Option<String>,
    fail_url: Option<String>,
    success_url: Option<String>,
    expire: u32,
    custom_fields: Option<String>,
    comment: Option<String>,
    include_service: Option<Vec<Service>>,
    exclude_service: Option<Vec<Service>>,
}

impl CreateBill {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            order_id: None,
            hook_url: None,
            fail_url: None,
            success_url: None,
            expire: DEFAULT_EXPIRE,
            custom_fields: None,
            comment: None,
            include_service: None,
            exclude_service: None,
        }
    }

    /// ID платежа в системе мерчанта: строка или число, в запрос уходит строкой.
    /// Без него генерируется `LavaPayments_<uuid>`.
    pub fn order_id(mut self, order_id: impl ToString) -> Self {
        self.order_id = Some(order_id.to_string());
        self
    }

    pub fn hook_url(mut self, hook_url: impl Into<String>) -> Self {
        self.hook_url = Some(hook_url.into());
        self
    }

    pub fn fail_url(mut self, fail_url: impl Into<String>) -> Self {
        self.fail_url = Some(fail_url.into());
        self
    }

    pub fn success_url(mut self, success_url: impl Into<String>) -> Self {
        self.success_url = Some(success_url.into());
        self
    }

    /// Время жизни счёта в минутах.
    pub fn expire(mut self, minutes: u32) -> Self {
        self.expire = minutes;
        self
    }

    pub fn custom_fields(mut self, custom_fields: impl Into<String>) -> Self {
        self.custom_fields = Some(custom_fields.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn include_service(mut self, services: Vec<Service>) -> Self {
        self.include_service = Some(services);
        self
    }

    pub fn exclude_service(mut self, services: Vec<Service>) -> Self {
        self.exclude_service = Some(services);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount.is_nan() || self.amount < MIN_AMOUNT {
            return Err(ValidationError::AmountTooSmall(self.amount));
        }

        if !(MIN_EXPIRE..=MAX_EXPIRE).contains(&self.expire) {
            return Err(ValidationError::ExpireOutOfRange(self.expire));
        }

        Ok(())
    }

    pub fn into_payload(self, shop_id: &str) -> Result<CreateBillPayload, ValidationError> {
        self.validate()?;

        let order_id = self
            .order_id
            .unwrap_or_else(|| format!("{ORDER_ID_PREFIX}_{}", Uuid::new_v4()));

        Ok(CreateBillPayload {
            sum: self.amount,
            order_id,
            shop_id: shop_id.to_string(),
            hook_url: self.hook_url,
            fail_url: self.fail_url,
            success_url: self.success_url,
            expire: self.expire,
            custom_fields: self.custom_fields,
            comment: self.comment,
            include_service: self.include_service,
            exclude_service: self.exclude_service,
        })
    }
}

/**
Тело запроса `invoice/create`.

Порядок полей задаёт порядок ключей в JSON, а значит и подпись.
Пустые поля передаются как `null`.
 */
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillPayload {
    pub sum: f64,
    pub order_id: String,
    pub shop_id: String,
    pub hook_url: Option<String>,
    pub fail_url: Option<String>,
    pub success_url: Option<String>,
    pub expire: u32,
    pub custom_fields: Option<String>,
    pub comment: Option<String>,
    pub include_service: Option<Vec<Service>>,
    pub exclude_service: Option<Vec<Service>>,
}

/**
Тело запроса `invoice/status`: ID проекта и ровно один из ключей поиска.
 */
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillLookupPayload {
    pub shop_id: String,
    pub invoice_id: Option<String>,
    pub order_id: Option<String>,
}

impl BillLookupPayload {
    /// Invoice id takes priority when both are given; empty strings count as missing.
    pub fn new(
        shop_id: &str,
        invoice_id: Option<&str>,
        order_id: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let shop_id = shop_id.to_string();

        if let Some(invoice_id) = invoice_id.filter(|id| !id.is_empty()) {
            return Ok(Self {
                shop_id,
                invoice_id: Some(invoice_id.to_string()),
                order_id: None,
            });
        }

        if let Some(order_id) = order_id.filter(|id| !id.is_empty()) {
            return Ok(Self {
                shop_id,
                invoice_id: None,
                order_id: Some(order_id.to_string()),
            });
        }

        Err(ValidationError::MissingBillId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_below_minimum_is_rejected() {
        for amount in [0.99, 0.5, 0.0, -1.0, -100.0, f64::NAN, f64::NEG_INFINITY] {
            let err = CreateBill::new(amount).into_payload("shop1").unwrap_err();

            assert!(matches!(err, ValidationError::AmountTooSmall(_)), "{amount}");
        }

        assert!(CreateBill::new(1.0).validate().is_ok());
        assert!(CreateBill::new(100_000.0).validate().is_ok());
    }

    #[test]
    fn test_expire_outside_range_is_rejected() {
        for expire in [0, MAX_EXPIRE + 1, 100_000, u32::MAX] {
            assert_eq!(
                CreateBill::new(100.0).expire(expire).validate(),
                Err(ValidationError::ExpireOutOfRange(expire))
            );
        }

        for expire in [MIN_EXPIRE, DEFAULT_EXPIRE, MAX_EXPIRE] {
            assert!(CreateBill::new(100.0).expire(expire).validate().is_ok());
        }
    }

    #[test]
    fn test_generated_order_id() {
        let payload = CreateBill::new(100.0).into_payload("shop1").unwrap();

        let suffix = payload.order_id.strip_prefix("LavaPayments_").unwrap();
        assert!(Uuid::parse_str(suffix).is_ok());

        let other = CreateBill::new(100.0).into_payload("shop1").unwrap();
        assert_ne!(payload.order_id, other.order_id);
    }

    #[test]
    fn test_numeric_order_id() {
        let payload = CreateBill::new(100.0)
            .order_id(1024_u64)
            .into_payload("shop1")
            .unwrap();

        assert_eq!(payload.order_id, "1024");
    }

    #[test]
    fn test_create_payload_key_order() {
        let payload = CreateBill::new(100.0)
            .order_id("order-1")
            .comment("test")
            .include_service(vec![Service::Card])
            .into_payload("shop1")
            .unwrap();

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"sum":100.0,"orderId":"order-1","shopId":"shop1","hookUrl":null,"failUrl":null,"successUrl":null,"expire":300,"customFields":null,"comment":"test","includeService":["card"],"excludeService":null}"#
        );
    }

    #[test]
    fn test_lookup_by_invoice_id() {
        let payload = BillLookupPayload::new("shop1", Some("inv-1"), None).unwrap();

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"shopId":"shop1","invoiceId":"inv-1"}"#
        );
    }

    #[test]
    fn test_lookup_by_order_id() {
        let payload = BillLookupPayload::new("shop1", None, Some("order-1")).unwrap();

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"shopId":"shop1","orderId":"order-1"}"#
        );
    }

    #[test]
    fn test_lookup_prefers_invoice_id() {
        let payload = BillLookupPayload::new("shop1", Some("inv-1"), Some("order-1")).unwrap();

        assert_eq!(payload.invoice_id.as_deref(), Some("inv-1"));
        assert_eq!(payload.order_id, None);

        let payload = BillLookupPayload::new("shop1", Some(""), Some("order-1")).unwrap();
        assert_eq!(payload.order_id.as_deref(), Some("order-1"));
    }

    #[test]
    fn test_lookup_requires_some_id() {
        assert_eq!(
            BillLookupPayload::new("shop1", None, None),
            Err(ValidationError::MissingBillId)
        );
        assert_eq!(
            BillLookupPayload::new("shop1", Some(""), Some("")),
            Err(ValidationError::MissingBillId)
        );
    }
}
