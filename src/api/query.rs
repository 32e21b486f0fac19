//! Query parameters for listing transactions.

use serde::Serialize;

use crate::{ResourceId, transaction::TransactionType};

/// The parameters for one page of transactions.
///
/// Serializes to the json-server pagination and filter parameters, e.g.
/// `_page=2&_limit=10&category=3&type=expense`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionQuery {
    /// The 1-based page number.
    #[serde(rename = "_page")]
    pub page: u64,
    /// The maximum number of transactions per page.
    #[serde(rename = "_limit")]
    pub limit: u64,
    /// Only include transactions in this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ResourceId>,
    /// Only include transactions of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
}

impl TransactionQuery {
    /// Encode the query as a URL query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self)
            .inspect_err(|error| tracing::error!("could not encode {self:?}: {error}"))
            .unwrap_or_else(|_| format!("_page={}&_limit={}", self.page, self.limit))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ResourceId, transaction::TransactionType};

    use super::TransactionQuery;

    #[test]
    fn unfiltered_query_only_has_pagination() {
        let query = TransactionQuery {
            page: 1,
            limit: 10,
            category: None,
            kind: None,
        };

        assert_eq!(query.to_query_string(), "_page=1&_limit=10");
    }

    #[test]
    fn filters_are_appended() {
        let query = TransactionQuery {
            page: 3,
            limit: 25,
            category: Some(ResourceId::Number(2)),
            kind: Some(TransactionType::Income),
        };

        assert_eq!(
            query.to_query_string(),
            "_page=3&_limit=25&category=2&type=income"
        );
    }

    #[test]
    fn text_ids_are_url_encoded() {
        let query = TransactionQuery {
            page: 1,
            limit: 10,
            category: Some(ResourceId::from("eating out")),
            kind: None,
        };

        assert_eq!(
            query.to_query_string(),
            "_page=1&_limit=10&category=eating+out"
        );
    }
}
