//! Transaction management.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the request bodies for creating and updating transactions
//! - The pagination/filter state and the inline edit session
//! - The controller that drives the table and the route handlers that call it

mod controller;
mod core;
mod delete_endpoint;
mod edit_endpoint;
mod edit_session;
mod filter_endpoint;
mod page_endpoint;
mod page_state;
mod quick_add_endpoint;
mod transactions_page;
mod view;
mod view_model;

pub use controller::TransactionsController;
pub use core::{NewTransaction, Transaction, TransactionPatch, TransactionType};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::{begin_edit_endpoint, cancel_edit_endpoint, save_edit_endpoint};
pub use filter_endpoint::{reset_filters_endpoint, set_filter_endpoint};
pub use page_endpoint::{go_to_page_endpoint, next_page_endpoint, prev_page_endpoint};
pub use quick_add_endpoint::quick_add_endpoint;
pub use transactions_page::{get_transactions_page, get_transactions_table};
