use thiserror::Error;

/// Ошибки проверки входных данных до обращения к API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Минимальная сумма счёта - 1 рубль, передано {0}")]
    AmountTooSmall(f64),

    #[error("Время жизни счёта должно быть от 1 до 43200 минут, передано {0}")]
    ExpireOutOfRange(u32),

    #[error("Чтобы получить счёт, нужно передать invoice_id или order_id")]
    MissingBillId,

    #[error("Не удалось конвертировать дату '{0}'")]
    InvalidDate(String),
}
