//! Owns the transactions table state and turns user actions into backend
//! calls and rendered view-models.
//!
//! Every transition that fetches works on a candidate [PageState]. The
//! candidate is only committed when the fetch succeeds and no newer fetch
//! has been issued in the meantime, so a failed or stale fetch leaves the
//! state exactly as it was.

use std::sync::{Arc, Mutex, MutexGuard};

use time::OffsetDateTime;

use crate::{
    Error, ResourceId,
    api::{TransactionsApi, TransactionsPage},
    category::CategoryCache,
    pagination::PaginationConfig,
    transaction::{
        NewTransaction, Transaction, TransactionType,
        edit_session::{EditSession, EditTransactionForm},
        page_state::{FilterField, PageState, build_query},
        view_model::{TransactionsTableView, build_table_view},
    },
};

/// The description given to transactions created with the quick-add button.
pub const QUICK_ADD_DESCRIPTION: &str = "New transaction via button";

#[derive(Debug)]
struct ViewState {
    page: PageState,
    edit: Option<EditSession>,
    /// The transactions of the last successful fetch, in fetch order.
    rows: Vec<Transaction>,
    /// The ticket of the most recently issued fetch.
    latest_request: u64,
}

/// Drives the transactions table.
///
/// Cloning is cheap and clones share the same state.
#[derive(Debug, Clone)]
pub struct TransactionsController<A> {
    api: A,
    categories: CategoryCache,
    max_page_links: u64,
    state: Arc<Mutex<ViewState>>,
}

impl<A: TransactionsApi> TransactionsController<A> {
    /// Create a controller on page 1 with no filters and nothing fetched yet.
    pub fn new(api: A, categories: CategoryCache, pagination: &PaginationConfig) -> Self {
        Self {
            api,
            categories,
            max_page_links: pagination.max_page_links,
            state: Arc::new(Mutex::new(ViewState {
                page: PageState::new(pagination.page_size),
                edit: None,
                rows: Vec::new(),
                latest_request: 0,
            })),
        }
    }

    /// The backend the controller talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The categories used to name rows.
    pub fn categories(&self) -> &CategoryCache {
        &self.categories
    }

    /// Reload the category cache from the backend.
    pub async fn load_categories(&self) -> Result<(), Error> {
        let categories = self
            .api
            .list_categories()
            .await
            .inspect_err(|error| tracing::error!("could not load categories: {error}"))?;

        tracing::debug!("loaded {} categories", categories.len());
        self.categories.replace(categories);

        Ok(())
    }

    /// Fetch the current page again.
    pub async fn refresh(&self) -> Result<TransactionsTableView, Error> {
        let candidate = self.lock_state()?.page.clone();
        self.fetch(candidate).await
    }

    /// Set one filter and go back to page 1.
    pub async fn set_filter(
        &self,
        field: FilterField,
        value: &str,
    ) -> Result<TransactionsTableView, Error> {
        let candidate = self.lock_state()?.page.with_filter(field, value)?;
        self.fetch(candidate).await
    }

    /// Clear all filters and go back to page 1.
    pub async fn reset_filters(&self) -> Result<TransactionsTableView, Error> {
        let candidate = self.lock_state()?.page.without_filters();
        self.fetch(candidate).await
    }

    /// Go to the next page. On the last page nothing is fetched.
    pub async fn next_page(&self) -> Result<TransactionsTableView, Error> {
        let candidate = self.lock_state()?.page.next();

        match candidate {
            Some(candidate) => self.fetch(candidate).await,
            None => self.current_view(),
        }
    }

    /// Go to the previous page. On the first page nothing is fetched.
    pub async fn prev_page(&self) -> Result<TransactionsTableView, Error> {
        let candidate = self.lock_state()?.page.prev();

        match candidate {
            Some(candidate) => self.fetch(candidate).await,
            None => self.current_view(),
        }
    }

    /// Go to `page`, moved back onto the last page if it does not exist.
    pub async fn go_to_page(&self, page: u64) -> Result<TransactionsTableView, Error> {
        let candidate = self.lock_state()?.page.at_page(page);
        self.fetch(candidate).await
    }

    /// Make the row `id` editable, replacing any other edit session.
    pub fn begin_edit(&self, id: &ResourceId) -> Result<TransactionsTableView, Error> {
        let mut guard = self.lock_state()?;
        let state = &mut *guard;
        let transaction = state
            .rows
            .iter()
            .find(|transaction| transaction.id.matches(id))
            .ok_or_else(|| Error::NotOnPage(id.clone()))?;

        if let Some(previous) = &state.edit {
            tracing::debug!("cancelling edit of transaction {}", previous.id());
        }
        state.edit = Some(EditSession::new(transaction));

        Ok(self.view_of(state))
    }

    /// Save the edited row `id` and fetch the current page again.
    ///
    /// On failure the row stays editable with the submitted values.
    pub async fn save_edit(
        &self,
        id: &ResourceId,
        form: EditTransactionForm,
    ) -> Result<TransactionsTableView, Error> {
        let patch = {
            let mut state = self.lock_state()?;
            let session = state
                .edit
                .as_mut()
                .filter(|session| session.id().matches(id))
                .ok_or(Error::NoActiveEdit)?;
            session.begin_save(form)?
        };

        if let Err(error) = self.api.update_transaction(id, &patch).await {
            tracing::error!("could not update transaction {id}: {error}");
            let mut state = self.lock_state()?;
            if let Some(session) = state
                .edit
                .as_mut()
                .filter(|session| session.id().matches(id))
            {
                session.save_failed();
            }

            return Err(error);
        }

        self.lock_state()?.edit = None;
        self.refresh().await
    }

    /// End the edit session without saving and fetch the current page again.
    pub async fn cancel_edit(&self) -> Result<TransactionsTableView, Error> {
        if let Some(session) = self.lock_state()?.edit.take() {
            tracing::debug!("cancelled edit of transaction {}", session.id());
        }

        self.refresh().await
    }

    /// Delete the transaction `id` and fetch the current page again.
    pub async fn delete(&self, id: &ResourceId) -> Result<TransactionsTableView, Error> {
        self.api
            .delete_transaction(id)
            .await
            .inspect_err(|error| tracing::error!("could not delete transaction {id}: {error}"))?;

        self.refresh().await
    }

    /// Create a placeholder transaction and fetch the current page again.
    pub async fn quick_add(&self) -> Result<TransactionsTableView, Error> {
        let transaction = quick_add_transaction(OffsetDateTime::now_utc());

        let created = self
            .api
            .create_transaction(&transaction)
            .await
            .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;
        tracing::debug!("created transaction {}", created.id);

        self.refresh().await
    }

    /// The view of the committed state, without fetching.
    pub fn current_view(&self) -> Result<TransactionsTableView, Error> {
        let state = self.lock_state()?;
        Ok(self.view_of(&state))
    }

    async fn fetch(&self, candidate: PageState) -> Result<TransactionsTableView, Error> {
        let ticket = self.issue_ticket()?;
        let (candidate, page) = self.fetch_page(candidate).await?;

        let mut state = self.lock_state()?;
        if state.latest_request != ticket {
            tracing::debug!(
                "discarding response for request {ticket}, latest is {}",
                state.latest_request
            );
            return Err(Error::Superseded);
        }

        state.page = candidate;
        state.rows = page.transactions;
        state.edit = None;

        Ok(self.view_of(&state))
    }

    /// Fetch `candidate`, moving it back onto the last page if it no longer exists.
    async fn fetch_page(&self, candidate: PageState) -> Result<(PageState, TransactionsPage), Error> {
        let page = self.api.list_transactions(&build_query(&candidate)).await?;
        let candidate = candidate.with_total_count(page.total_count);

        match candidate.clamped() {
            Some(clamped) => {
                tracing::debug!(
                    "page {} no longer exists, fetching page {}",
                    candidate.page,
                    clamped.page
                );
                let page = self.api.list_transactions(&build_query(&clamped)).await?;
                let clamped = clamped.with_total_count(page.total_count);
                Ok((clamped, page))
            }
            None => Ok((candidate, page)),
        }
    }

    fn issue_ticket(&self) -> Result<u64, Error> {
        let mut state = self.lock_state()?;
        state.latest_request += 1;
        Ok(state.latest_request)
    }

    fn view_of(&self, state: &ViewState) -> TransactionsTableView {
        build_table_view(
            &state.page,
            &state.rows,
            state.edit.as_ref(),
            &self.categories.snapshot(),
            self.max_page_links,
        )
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, ViewState>, Error> {
        self.state.lock().map_err(|error| {
            tracing::error!("could not acquire view state lock: {error}");
            Error::StateLockError
        })
    }
}

/// The transaction created by the quick-add button at `now`.
///
/// The category alternates between 1 and 2 depending on the sub-second part
/// of `now`.
pub fn quick_add_transaction(now: OffsetDateTime) -> NewTransaction {
    let category = if now.nanosecond() % 2 == 0 { 1 } else { 2 };

    NewTransaction {
        amount: 0.0,
        date: now,
        category: ResourceId::Number(category),
        description: QUICK_ADD_DESCRIPTION.to_owned(),
        kind: TransactionType::Expense,
    }
}
