//! The data the transactions table is rendered from.

use crate::{
    ResourceId,
    category::{Category, category_name_by_id},
    pagination::{PageLink, create_page_links},
    transaction::{
        Transaction, TransactionType,
        edit_session::{EditDraft, EditPhase, EditSession, KeyBinding, format_date_input},
        page_state::{PageIndicator, PageState},
    },
};

/// An option in a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A transaction as shown in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: ResourceId,
    pub amount: f64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub kind: TransactionType,
}

/// The row that is being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct EditRow {
    pub id: ResourceId,
    pub draft: EditDraft,
    pub categories: Vec<SelectOption>,
    pub kinds: Vec<SelectOption>,
    /// Whether a save is in flight.
    pub saving: bool,
    pub key_bindings: &'static [KeyBinding],
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowView {
    Display(TransactionRow),
    Editing(EditRow),
}

/// The filter bar selects.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterView {
    pub categories: Vec<SelectOption>,
    pub kinds: Vec<SelectOption>,
}

/// Everything needed to render the transactions panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsTableView {
    pub rows: Vec<RowView>,
    pub indicator: PageIndicator,
    pub page_links: Vec<PageLink>,
    pub filters: FilterView,
    /// Whether the background overlay is shown, i.e. a row is being edited.
    pub overlay_visible: bool,
}

/// Build the view for the rows of the current page.
///
/// Rows are shown newest fetch position first, i.e. in reverse fetch order.
pub fn build_table_view(
    state: &PageState,
    transactions: &[Transaction],
    edit: Option<&EditSession>,
    categories: &[Category],
    max_page_links: u64,
) -> TransactionsTableView {
    let rows = transactions
        .iter()
        .rev()
        .map(|transaction| match edit {
            Some(session) if session.id().matches(&transaction.id) => {
                RowView::Editing(edit_row(transaction, session, categories))
            }
            _ => RowView::Display(display_row(transaction, categories)),
        })
        .collect();

    TransactionsTableView {
        rows,
        indicator: state.indicator(),
        page_links: create_page_links(state.page, state.total_pages, max_page_links),
        filters: FilterView {
            categories: category_filter_options(categories, state.filters.category.as_ref()),
            kinds: kind_filter_options(state.filters.kind),
        },
        overlay_visible: edit.is_some(),
    }
}

fn display_row(transaction: &Transaction, categories: &[Category]) -> TransactionRow {
    TransactionRow {
        id: transaction.id.clone(),
        amount: transaction.amount,
        date: format_date_input(transaction.date),
        category: category_name_by_id(categories, &transaction.category),
        description: transaction.description.clone(),
        kind: transaction.kind,
    }
}

fn edit_row(transaction: &Transaction, session: &EditSession, categories: &[Category]) -> EditRow {
    let draft = session.draft().clone();

    EditRow {
        id: transaction.id.clone(),
        categories: category_edit_options(categories, &draft.category),
        kinds: TransactionType::ALL
            .iter()
            .map(|kind| SelectOption {
                value: kind.as_str().to_owned(),
                label: kind.label().to_owned(),
                selected: draft.kind.eq_ignore_ascii_case(kind.as_str()),
            })
            .collect(),
        draft,
        saving: session.phase() == EditPhase::Saving,
        key_bindings: session.key_bindings(),
    }
}

/// The category choices for an edited row, keyed by category ID.
///
/// A category ID that does not match a known category is kept as its own
/// option so saving does not silently change it.
fn category_edit_options(categories: &[Category], selected: &str) -> Vec<SelectOption> {
    let Ok(selected_id) = selected.parse::<ResourceId>();
    let mut options: Vec<SelectOption> = categories
        .iter()
        .map(|category| SelectOption {
            value: category.id.to_string(),
            label: category.name.clone(),
            selected: category.id.matches(&selected_id),
        })
        .collect();

    if !selected.is_empty() && !options.iter().any(|option| option.selected) {
        options.insert(
            0,
            SelectOption {
                value: selected.to_owned(),
                label: selected.to_owned(),
                selected: true,
            },
        );
    }

    options
}

fn category_filter_options(
    categories: &[Category],
    selected: Option<&ResourceId>,
) -> Vec<SelectOption> {
    let all = SelectOption {
        value: String::new(),
        label: "All categories".to_owned(),
        selected: selected.is_none(),
    };

    std::iter::once(all)
        .chain(categories.iter().map(|category| SelectOption {
            value: category.id.to_string(),
            label: category.name.clone(),
            selected: selected.is_some_and(|id| id.matches(&category.id)),
        }))
        .collect()
}

fn kind_filter_options(selected: Option<TransactionType>) -> Vec<SelectOption> {
    let all = SelectOption {
        value: String::new(),
        label: "All types".to_owned(),
        selected: selected.is_none(),
    };

    std::iter::once(all)
        .chain(TransactionType::ALL.iter().map(|kind| SelectOption {
            value: kind.as_str().to_owned(),
            label: kind.label().to_owned(),
            selected: selected == Some(*kind),
        }))
        .collect()
}
