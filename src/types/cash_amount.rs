use crate::types::errors::CashAmountError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A cash value as rendered by the broker export.
///
/// Cash columns in the export carry thousands separators ("1,234.56"),
/// which a plain decimal parse rejects. Parsing strips the separators and
/// keeps the remaining digits exactly as written; no rounding is applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct CashAmount(Decimal);

impl CashAmount {
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Display for CashAmount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for CashAmount {
    type Err = CashAmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(CashAmountError::Empty);
        }

        let cleaned: String = value.chars().filter(|character| *character != ',').collect();
        let amount = Decimal::from_str(&cleaned)?;

        Ok(CashAmount(amount))
    }
}

impl<'de> Deserialize<'de> for CashAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        CashAmount::from_str(&value).map_err(de::Error::custom)
    }
}
