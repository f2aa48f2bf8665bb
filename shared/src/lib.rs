mod bill;
mod date;
mod error;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use bill::{Bill, BillStatus};
pub use date::Date;
pub use error::ValidationError;

/// Платёжные сервисы, доступные на странице счёта.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum Service {
    /**Банковская карта*/
    #[serde(rename = "card")]
    Card,
    /**СБП*/
    #[serde(rename = "sbp")]
    Sbp,
    /**QIWI*/
    #[serde(rename = "qiwi")]
    Qiwi,
    /**Значение, которое API вернуло, но клиент не знает*/
    #[serde(rename = "unknown")]
    #[serde(other)]
    Unknown,
}

impl Display for Service {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Service::Card => "card",
            Service::Sbp => "sbp",
            Service::Qiwi => "qiwi",
            Service::Unknown => "unknown",
        })
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(Service::Card),
            "sbp" => Ok(Service::Sbp),
            "qiwi" => Ok(Service::Qiwi),
            other => Err(format!("unknown payment service: {other}")),
        }
    }
}
