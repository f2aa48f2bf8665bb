use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/* 2023-09-21T15:33:04, 2023-09-21 15:33:04.123, 2023-09-21T15:33 */
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Момент времени из ответа API (например, время жизни счёта).
///
/// Хранит исходную строку: она же возвращается при выводе и сериализации.
/// Время без часового пояса считается локальным.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    raw: String,
    value: DateTime<FixedOffset>,
}

impl Date {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let Some(value) = parse_timestamp(raw.trim()) else {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        };

        Ok(Self {
            raw: raw.to_string(),
            value,
        })
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// The moment itself already counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.value.with_timezone(&Utc)
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(value) = DateTime::parse_from_rfc3339(s) {
        return Some(value);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    localize(&Local, &naive)
}

/// Wall-clock time in `tz`. A time skipped by a DST jump takes the offset in force at that instant.
fn localize<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    let offset = match tz.from_local_datetime(naive).earliest() {
        Some(local) => local.offset().fix(),
        None => tz.offset_from_utc_datetime(naive).fix(),
    };

    offset.from_local_datetime(naive).single()
}

impl FromStr for Date {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl TryFrom<String> for Date {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Date::parse(&value)
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.raw
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
