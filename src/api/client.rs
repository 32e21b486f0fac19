//! An HTTP implementation of [TransactionsApi] for json-server style backends.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    Error, ResourceId,
    category::{Category, NewCategory},
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

use super::{TransactionQuery, TransactionsApi, TransactionsPage};

/// The backend to use when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// The response header holding the total number of matching transactions.
const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

const TRANSACTIONS_PATH: &str = "/transactions";
const CATEGORIES_PATH: &str = "/categories";

/// Calls the transactions REST backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    /// Create a client for the backend at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: Client::new(),
        }
    }

    /// The base URL that relative paths are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path_or_url` against the base URL.
    ///
    /// Absolute `http(s)://` URLs are returned unchanged.
    pub fn url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_owned()
        } else {
            format!("{}{}", self.base_url, path_or_url)
        }
    }

    fn transaction_url(&self, id: &ResourceId) -> String {
        self.url(&format!("{TRANSACTIONS_PATH}/{id}"))
    }

    /// Send `request` and turn transport failures and non-success statuses into errors.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, Error> {
        let response = request
            .send()
            .await
            .inspect_err(|error| tracing::error!("request to {url} failed: {error}"))
            .map_err(|error| Error::Network {
                url: url.to_owned(),
                message: error.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("{url} responded with {status}");

        if !status.is_success() {
            tracing::error!("HTTP request to {url} failed with status {status}");
            return Err(Error::Request {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, Error> {
        let body = response.bytes().await.map_err(|error| Error::Network {
            url: url.to_owned(),
            message: error.to_string(),
        })?;

        serde_json::from_slice(&body)
            .inspect_err(|error| tracing::error!("could not decode response from {url}: {error}"))
            .map_err(|error| Error::InvalidResponse {
                url: url.to_owned(),
                message: error.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let response = self.send(self.client.get(url), url).await?;
        Self::read_json(response, url).await
    }
}

fn read_total_count(response: &Response) -> u64 {
    response
        .headers()
        .get(TOTAL_COUNT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or_else(|| {
            tracing::warn!("response is missing a valid {TOTAL_COUNT_HEADER} header, assuming 0");
            0
        })
}

impl TransactionsApi for HttpApi {
    async fn list_transactions(&self, query: &TransactionQuery) -> Result<TransactionsPage, Error> {
        let url = self.url(&format!("{TRANSACTIONS_PATH}?{}", query.to_query_string()));
        let response = self.send(self.client.get(&url), &url).await?;
        let total_count = read_total_count(&response);
        let transactions = Self::read_json(response, &url).await?;

        Ok(TransactionsPage {
            transactions,
            total_count,
        })
    }

    async fn search_transactions(&self, raw_query: &str) -> Result<Vec<Transaction>, Error> {
        let raw_query = raw_query.trim_start_matches('?');
        self.get_json(&self.url(&format!("{TRANSACTIONS_PATH}?{raw_query}")))
            .await
    }

    async fn all_transactions(&self) -> Result<Vec<Transaction>, Error> {
        self.get_json(&self.url(TRANSACTIONS_PATH)).await
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, Error> {
        let url = self.url(TRANSACTIONS_PATH);
        let response = self
            .send(self.client.post(&url).json(transaction), &url)
            .await?;

        Self::read_json(response, &url).await
    }

    async fn update_transaction(
        &self,
        id: &ResourceId,
        patch: &TransactionPatch,
    ) -> Result<Transaction, Error> {
        let url = self.transaction_url(id);
        let response = self.send(self.client.patch(&url).json(patch), &url).await?;

        Self::read_json(response, &url).await
    }

    async fn delete_transaction(&self, id: &ResourceId) -> Result<(), Error> {
        let url = self.transaction_url(id);
        self.send(self.client.delete(&url), &url).await?;

        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.get_json(&self.url(CATEGORIES_PATH)).await
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, Error> {
        let url = self.url(CATEGORIES_PATH);
        let response = self.send(self.client.post(&url).json(category), &url).await?;

        Self::read_json(response, &url).await
    }
}
