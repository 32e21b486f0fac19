//! An in-memory [TransactionsApi] that behaves like a json-server backend.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use time::macros::datetime;
use tokio::sync::oneshot;

use crate::{
    Error, ResourceId,
    api::{TransactionQuery, TransactionsApi, TransactionsPage},
    category::{Category, NewCategory},
    transaction::{NewTransaction, Transaction, TransactionPatch, TransactionType},
};

/// The API calls made against a [FakeApi], in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    List(TransactionQuery),
    Search(String),
    All,
    Create(NewTransaction),
    Update(ResourceId, TransactionPatch),
    Delete(ResourceId),
    ListCategories,
    CreateCategory(NewCategory),
}

/// Which call an injected failure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Operation {
    List,
    Create,
    Update,
    Delete,
    ListCategories,
    CreateCategory,
}

struct PausedList {
    entered: oneshot::Sender<()>,
    release: oneshot::Receiver<()>,
}

#[derive(Default)]
struct Backend {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    next_id: i64,
    calls: Vec<Call>,
    failures: HashMap<Operation, Error>,
    paused_list: Option<PausedList>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeApi {
    backend: Arc<Mutex<Backend>>,
}

impl FakeApi {
    /// A backend with `count` expense transactions, IDs 1 to `count`, and the
    /// categories "Food" (1) and "Rent" (2).
    pub(crate) fn with_transactions(count: i64) -> Self {
        let api = Self::default();
        {
            let mut backend = api.backend.lock().unwrap();
            backend.transactions = (1..=count).map(test_transaction).collect();
            backend.categories = vec![
                Category {
                    id: ResourceId::Number(1),
                    name: "Food".to_owned(),
                },
                Category {
                    id: ResourceId::Number(2),
                    name: "Rent".to_owned(),
                },
            ];
            backend.next_id = count + 1;
        }

        api
    }

    /// A backend like [FakeApi::with_transactions] whose transactions have
    /// the given `ids` instead.
    pub(crate) fn with_ids(ids: &[ResourceId]) -> Self {
        let api = Self::with_transactions(ids.len() as i64);
        {
            let mut backend = api.backend.lock().unwrap();
            for (transaction, id) in backend.transactions.iter_mut().zip(ids) {
                transaction.id = id.clone();
            }
        }

        api
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.backend.lock().unwrap().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.backend.lock().unwrap().calls.clear();
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.backend.lock().unwrap().transactions.clone()
    }

    /// Make the next `operation` call fail with `error`.
    pub(crate) fn fail_next(&self, operation: Operation, error: Error) {
        self.backend
            .lock()
            .unwrap()
            .failures
            .insert(operation, error);
    }

    /// Hold the next list call until the returned sender fires.
    ///
    /// The returned receiver fires once the list call has started.
    pub(crate) fn pause_next_list(&self) -> (oneshot::Receiver<()>, oneshot::Sender<()>) {
        let (entered_tx, entered_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        self.backend.lock().unwrap().paused_list = Some(PausedList {
            entered: entered_tx,
            release: release_rx,
        });

        (entered_rx, release_tx)
    }

    fn record(&self, call: Call, operation: Option<Operation>) -> Result<(), Error> {
        let mut backend = self.backend.lock().unwrap();
        backend.calls.push(call);

        match operation.and_then(|operation| backend.failures.remove(&operation)) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn url(path: &str) -> String {
        format!("http://fake.test{path}")
    }
}

fn test_transaction(id: i64) -> Transaction {
    Transaction {
        id: ResourceId::Number(id),
        amount: id as f64,
        date: datetime!(2025-01-01 12:00 UTC),
        category: ResourceId::Number(1),
        description: format!("Transaction {id}"),
        kind: TransactionType::Expense,
    }
}

impl TransactionsApi for FakeApi {
    async fn list_transactions(&self, query: &TransactionQuery) -> Result<TransactionsPage, Error> {
        let paused = self.backend.lock().unwrap().paused_list.take();
        if let Some(paused) = paused {
            let _ = paused.entered.send(());
            let _ = paused.release.await;
        }

        self.record(Call::List(query.clone()), Some(Operation::List))?;

        let backend = self.backend.lock().unwrap();
        let matching: Vec<&Transaction> = backend
            .transactions
            .iter()
            .filter(|transaction| {
                query
                    .category
                    .as_ref()
                    .is_none_or(|category| category.matches(&transaction.category))
            })
            .filter(|transaction| query.kind.is_none_or(|kind| kind == transaction.kind))
            .collect();
        let start = (query.page.saturating_sub(1) * query.limit) as usize;

        Ok(TransactionsPage {
            total_count: matching.len() as u64,
            transactions: matching
                .into_iter()
                .skip(start)
                .take(query.limit as usize)
                .cloned()
                .collect(),
        })
    }

    async fn search_transactions(&self, raw_query: &str) -> Result<Vec<Transaction>, Error> {
        self.record(Call::Search(raw_query.to_owned()), None)?;

        Ok(self.transactions())
    }

    async fn all_transactions(&self) -> Result<Vec<Transaction>, Error> {
        self.record(Call::All, None)?;

        Ok(self.transactions())
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, Error> {
        self.record(Call::Create(transaction.clone()), Some(Operation::Create))?;

        let mut backend = self.backend.lock().unwrap();
        let created = Transaction {
            id: ResourceId::Number(backend.next_id),
            amount: transaction.amount,
            date: transaction.date,
            category: transaction.category.clone(),
            description: transaction.description.clone(),
            kind: transaction.kind,
        };
        backend.next_id += 1;
        backend.transactions.push(created.clone());

        Ok(created)
    }

    async fn update_transaction(
        &self,
        id: &ResourceId,
        patch: &TransactionPatch,
    ) -> Result<Transaction, Error> {
        self.record(Call::Update(id.clone(), patch.clone()), Some(Operation::Update))?;

        let mut backend = self.backend.lock().unwrap();
        let transaction = backend
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id.matches(id))
            .ok_or_else(|| Error::Request {
                url: Self::url(&format!("/transactions/{id}")),
                status: 404,
            })?;

        if let Some(amount) = patch.amount {
            transaction.amount = amount;
        }
        if let Some(date) = patch.date {
            transaction.date = date;
        }
        if let Some(category) = &patch.category {
            transaction.category = category.clone();
        }
        if let Some(description) = &patch.description {
            transaction.description = description.clone();
        }
        if let Some(kind) = patch.kind {
            transaction.kind = kind;
        }

        Ok(transaction.clone())
    }

    async fn delete_transaction(&self, id: &ResourceId) -> Result<(), Error> {
        self.record(Call::Delete(id.clone()), Some(Operation::Delete))?;

        let mut backend = self.backend.lock().unwrap();
        let count_before = backend.transactions.len();
        backend
            .transactions
            .retain(|transaction| !transaction.id.matches(id));

        if backend.transactions.len() == count_before {
            return Err(Error::Request {
                url: Self::url(&format!("/transactions/{id}")),
                status: 404,
            });
        }

        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.record(Call::ListCategories, Some(Operation::ListCategories))?;

        Ok(self.backend.lock().unwrap().categories.clone())
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, Error> {
        self.record(
            Call::CreateCategory(category.clone()),
            Some(Operation::CreateCategory),
        )?;

        let mut backend = self.backend.lock().unwrap();
        let created = Category {
            id: ResourceId::Number(backend.categories.len() as i64 + 1),
            name: category.name.clone(),
        };
        backend.categories.push(created.clone());

        Ok(created)
    }
}
