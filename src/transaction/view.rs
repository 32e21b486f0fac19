//! HTML rendering for the transactions page.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency, loading_spinner,
    },
    navigation::NavBar,
    pagination::PageLink,
    theme::Theme,
    transaction::{
        edit_session::{EditAction, KeyBinding},
        page_state::{FilterField, PageIndicator},
        view_model::{
            EditRow, FilterView, RowView, SelectOption, TransactionRow, TransactionsTableView,
        },
    },
};

/// The ID of the element that every table action replaces.
pub const PANEL_ID: &str = "transactions-panel";

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this transaction?";

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

/// The full transactions page.
pub(crate) fn transactions_page_view(view: &TransactionsTableView, theme: Theme) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW, theme).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-screen-xl"
            {
                div class="flex justify-between flex-wrap items-end gap-4 mb-4"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    button
                        type="button"
                        id="quick-add"
                        hx-post=(endpoints::QUICK_ADD)
                        hx-target={ "#" (PANEL_ID) }
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        hx-disabled-elt="this"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Quick add"
                    }
                }

                (transactions_panel(view))
            }
        }
    );

    base("Transactions", theme, &content)
}

/// The filters, table and pagination controls.
///
/// Every action inside the panel replaces the whole panel, errors go to the
/// alert container.
pub(crate) fn transactions_panel(view: &TransactionsTableView) -> Markup {
    let overlay_style = if view.overlay_visible {
        "fixed inset-0 z-10 bg-gray-900/40 backdrop-blur-sm"
    } else {
        "hidden"
    };

    html!(
        div
            id=(PANEL_ID)
            hx-target={ "#" (PANEL_ID) }
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="flex flex-col gap-4"
        {
            div id="bg-blur-overlay" class=(overlay_style) {}

            (filter_bar(&view.filters))

            section class="dark:bg-gray-800 relative shadow-md rounded-lg overflow-x-auto"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for row in &view.rows {
                            @match row {
                                RowView::Display(row) => (display_row(row)),
                                RowView::Editing(row) => (edit_row(row)),
                            }
                        }

                        @if view.rows.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="6" class={ (TABLE_CELL_STYLE) " text-center" }
                                {
                                    "No transactions found."
                                }
                            }
                        }
                    }
                }
            }

            (pagination(&view.indicator, &view.page_links))
        }
    )
}

fn filter_bar(filters: &FilterView) -> Markup {
    html!(
        div id="filters" class="flex flex-wrap items-end gap-4"
        {
            (filter_select("filter-category", "Category", FilterField::Category, &filters.categories))
            (filter_select("filter-type", "Type", FilterField::Type, &filters.kinds))

            button
                type="button"
                id="reset-filters"
                hx-post=(endpoints::RESET_FILTERS)
                class=(BUTTON_SECONDARY_STYLE)
            {
                "Reset filters"
            }
        }
    )
}

fn filter_select(id: &str, label: &str, field: FilterField, options: &[SelectOption]) -> Markup {
    html!(
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { (label) }

            select
                id=(id)
                name="value"
                hx-post=(endpoints::TRANSACTION_FILTERS)
                hx-trigger="change"
                hx-vals={ r#"{"field": ""# (field.as_str()) r#""}"# }
                class=(FORM_TEXT_INPUT_STYLE)
            {
                (select_options(options))
            }
        }
    )
}

fn select_options(options: &[SelectOption]) -> Markup {
    html!(
        @for option in options {
            option value=(option.value) selected[option.selected] { (option.label) }
        }
    )
}

fn display_row(row: &TransactionRow) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION, &row.id);
    let delete_url = format_endpoint(endpoints::TRANSACTION, &row.id);

    html!(
        tr id={ "transaction-" (row.id) } class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (row.date) }
            td class=(TABLE_CELL_STYLE) { (row.description) }
            td class=(TABLE_CELL_STYLE) { (row.category) }
            td class=(TABLE_CELL_STYLE) { (row.kind.label()) }
            td class={ (TABLE_CELL_STYLE) " text-right " (amount_class(row.amount)) }
            {
                (format_currency(row.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        type="button"
                        hx-post=(edit_url)
                        class=(LINK_STYLE)
                    {
                        "Edit"
                    }

                    button
                        type="button"
                        hx-delete=(delete_url)
                        hx-confirm=(DELETE_CONFIRMATION)
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    )
}

/// The `hx-trigger` for a button that also fires on its bound keys.
///
/// Key events are listened for on the body so they work wherever focus is,
/// and the listeners go away with the row. Only key presses count, so the
/// release of the Enter key that opened the row does not save it.
fn trigger_with_keys(bindings: &[KeyBinding], action: EditAction) -> String {
    let mut triggers = vec!["click".to_owned()];
    triggers.extend(
        bindings
            .iter()
            .filter(|binding| binding.action == action)
            .map(|binding| format!("keydown[key=='{}'] from:body", binding.key)),
    );

    triggers.join(", ")
}

fn edit_row(row: &EditRow) -> Markup {
    let save_url = format_endpoint(endpoints::TRANSACTION, &row.id);
    let draft = &row.draft;

    html!(
        tr
            id={ "transaction-" (row.id) }
            class="relative z-20 bg-white border-b dark:bg-gray-800 dark:border-gray-700 ring-2 ring-blue-500"
        {
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="date"
                    name="date"
                    aria-label="Date"
                    value=(draft.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="text"
                    name="description"
                    aria-label="Description"
                    value=(draft.description)
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }
            td class=(TABLE_CELL_STYLE)
            {
                select name="category" aria-label="Category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    (select_options(&row.categories))
                }
            }
            td class=(TABLE_CELL_STYLE)
            {
                select name="type" aria-label="Type" class=(FORM_TEXT_INPUT_STYLE)
                {
                    (select_options(&row.kinds))
                }
            }
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="number"
                    name="amount"
                    aria-label="Amount"
                    step="0.01"
                    value=(draft.amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-2"
                {
                    button
                        type="button"
                        id="save-edit"
                        hx-put=(save_url)
                        hx-include="closest tr"
                        hx-trigger=(trigger_with_keys(row.key_bindings, EditAction::Save))
                        hx-disabled-elt="this"
                        disabled[row.saving]
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        @if row.saving {
                            (loading_spinner())
                            "Saving"
                        } @else {
                            "Save"
                        }
                    }

                    button
                        type="button"
                        id="cancel-edit"
                        hx-post=(endpoints::CANCEL_EDIT)
                        hx-trigger=(trigger_with_keys(row.key_bindings, EditAction::Cancel))
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Cancel"
                    }
                }
            }
        }
    )
}

fn pagination(indicator: &PageIndicator, page_links: &[PageLink]) -> Markup {
    let link_style = "block px-3 py-2 rounded text-blue-600 hover:bg-gray-100 \
        dark:text-blue-500 dark:hover:bg-gray-700";

    html!(
        nav aria-label="Pagination" class="flex flex-wrap items-center justify-between gap-4"
        {
            span id="page-indicator" class="text-sm" { (indicator.text()) }

            ul class="flex items-center gap-2"
            {
                li
                {
                    button
                        type="button"
                        id="prev-page"
                        hx-post=(endpoints::PREV_PAGE)
                        disabled[indicator.prev_disabled]
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Previous"
                    }
                }

                @for link in page_links {
                    li
                    {
                        @match link {
                            PageLink::Page(page) => {
                                button
                                    type="button"
                                    hx-post=(format_endpoint(endpoints::GO_TO_PAGE, page))
                                    class=(link_style)
                                {
                                    (page)
                                }
                            }
                            PageLink::Current(page) => {
                                span
                                    aria-current="page"
                                    class="block px-3 py-2 rounded bg-blue-50 font-semibold
                                    text-blue-700 dark:bg-blue-900/30 dark:text-blue-200"
                                {
                                    (page)
                                }
                            }
                            PageLink::Ellipsis => {
                                span class="px-2" { "..." }
                            }
                        }
                    }
                }

                li
                {
                    button
                        type="button"
                        id="next-page"
                        hx-post=(endpoints::NEXT_PAGE)
                        disabled[indicator.next_disabled]
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Next"
                    }
                }
            }
        }
    )
}
