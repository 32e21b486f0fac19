//! Categories: the model, the session-wide cache and the categories page.

mod categories_page;
mod core;

pub use categories_page::{CategoryForm, create_category_endpoint, get_categories_page};
pub use core::{Category, CategoryCache, NewCategory, category_name_by_id};
