//! The remote access layer: typed calls to the transactions REST backend.
//!
//! [TransactionsApi] is the seam the view controller depends on. [HttpApi]
//! talks to a json-server style backend over HTTP. Every call is a single
//! attempt: no retries, no timeouts, no backoff.

mod client;
mod query;

use std::future::Future;

pub use client::{DEFAULT_API_URL, HttpApi};
pub use query::TransactionQuery;

use crate::{
    Error, ResourceId,
    category::{Category, NewCategory},
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

/// One page of transactions and the total number of matching transactions
/// across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsPage {
    /// The transactions on the requested page.
    pub transactions: Vec<Transaction>,
    /// The total matching transactions, read from the `X-Total-Count` header.
    pub total_count: u64,
}

/// Handles the creation, retrieval, update and deletion of transactions and
/// categories on the backend.
pub trait TransactionsApi: Clone + Send + Sync + 'static {
    /// Get one page of transactions matching `query`.
    fn list_transactions(
        &self,
        query: &TransactionQuery,
    ) -> impl Future<Output = Result<TransactionsPage, Error>> + Send;

    /// Get the transactions matching an arbitrary query string, e.g.
    /// `description_like=coffee`.
    fn search_transactions(
        &self,
        raw_query: &str,
    ) -> impl Future<Output = Result<Vec<Transaction>, Error>> + Send;

    /// Get every transaction, unpaginated.
    fn all_transactions(&self) -> impl Future<Output = Result<Vec<Transaction>, Error>> + Send;

    /// Create a transaction and return it with its backend assigned ID.
    fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> impl Future<Output = Result<Transaction, Error>> + Send;

    /// Apply `patch` to the transaction `id` and return the updated transaction.
    fn update_transaction(
        &self,
        id: &ResourceId,
        patch: &TransactionPatch,
    ) -> impl Future<Output = Result<Transaction, Error>> + Send;

    /// Delete the transaction `id`.
    fn delete_transaction(&self, id: &ResourceId) -> impl Future<Output = Result<(), Error>> + Send;

    /// Get every category.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, Error>> + Send;

    /// Create a category and return it with its backend assigned ID.
    fn create_category(
        &self,
        category: &NewCategory,
    ) -> impl Future<Output = Result<Category, Error>> + Send;
}
