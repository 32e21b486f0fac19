//! Defines the core data models for transactions as exchanged with the backend.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ResourceId;

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// The backend is the source of truth, a `Transaction` is only a render copy of
/// one page fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID the backend assigned to the transaction.
    pub id: ResourceId,
    /// The amount of money spent or earned, in currency units.
    pub amount: f64,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: OffsetDateTime,
    /// The ID of the category. May not refer to a known category.
    pub category: ResourceId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether money was spent or earned.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// The fields for creating a transaction, the backend assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: OffsetDateTime,
    /// The ID of the category.
    pub category: ResourceId,
    /// What the transaction was for.
    pub description: String,
    /// Whether money was spent or earned.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// A partial update of a transaction.
///
/// Fields set to `None` are left out of the request body and keep their
/// current value on the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct TransactionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "iso_date::serialize_option"
    )]
    pub date: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
}

/// Whether a transaction spent or earned money.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money was spent.
    #[default]
    Expense,
    /// Money was earned.
    Income,
}

impl TransactionType {
    /// All types in the order they are offered to the user.
    pub const ALL: [TransactionType; 2] = [TransactionType::Expense, TransactionType::Income];

    /// The value used on the wire and in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }

    /// The capitalised name shown to users.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text was not `expense` or `income`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a transaction type, expected \"expense\" or \"income\"")]
pub struct InvalidTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = InvalidTransactionType;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_lowercase().as_str() {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            _ => Err(InvalidTransactionType(text.to_owned())),
        }
    }
}

/// (De)serializes dates as ISO-8601 strings.
///
/// Dates are written as RFC 3339 date-times. Both RFC 3339 date-times and
/// plain `YYYY-MM-DD` dates are read, the latter as midnight UTC, since older
/// clients of the backend saved date-only strings.
pub(crate) mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::{
        Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
    };

    pub fn serialize<S: Serializer>(date: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date.format(&Rfc3339).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn serialize_option<S: Serializer>(
        date: &Option<OffsetDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OffsetDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).ok_or_else(|| D::Error::custom(format!("invalid ISO-8601 date \"{text}\"")))
    }

    pub fn parse(text: &str) -> Option<OffsetDateTime> {
        if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
            return Some(date_time);
        }

        Date::parse(text, format_description!("[year]-[month]-[day]"))
            .ok()
            .map(|date| date.midnight().assume_utc())
    }
}
