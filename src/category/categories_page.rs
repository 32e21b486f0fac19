//! The page for listing and creating categories.

use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    api::TransactionsApi,
    category::{Category, NewCategory},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
    theme::Theme,
    transaction::TransactionsController,
};

/// The form for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryForm {
    pub name: String,
}

/// Render the categories page.
///
/// The categories are read from the backend again, which also refreshes the
/// category cache used by the transactions table.
pub async fn get_categories_page<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
    jar: CookieJar,
) -> Response {
    if let Err(error) = controller.load_categories().await {
        return error.into_response();
    }

    let categories = controller.categories().snapshot();

    Html(categories_view(&categories, Theme::from_jar(&jar)).into_string()).into_response()
}

/// Handle the category creation form.
///
/// Responds with the categories section, re-read from the backend so the
/// new category is listed.
pub async fn create_category_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
    Form(form): Form<CategoryForm>,
) -> Response {
    let name = form.name.trim();
    if name.is_empty() {
        let categories = controller.categories().snapshot();
        return Html(
            categories_section(&categories, "Error: Category name cannot be empty").into_string(),
        )
        .into_response();
    }

    let category = NewCategory {
        name: name.to_owned(),
    };

    let created = match controller.api().create_category(&category).await {
        Ok(created) => created,
        Err(error) => {
            tracing::error!("could not create category {name:?}: {error}");
            return error.into_alert_response();
        }
    };
    tracing::debug!("created category {} ({})", created.name, created.id);

    if let Err(error) = controller.load_categories().await {
        return error.into_alert_response();
    }

    let categories = controller.categories().snapshot();
    Html(categories_section(&categories, "").into_string()).into_response()
}

fn categories_view(categories: &[Category], theme: Theme) -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW, theme).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md flex flex-col gap-6"
            {
                h1 class="text-xl font-bold" { "Categories" }

                (categories_section(categories, ""))
            }
        }
    );

    base("Categories", theme, &content)
}

/// The category list and the form for adding one, replaced as a whole when
/// the form is submitted.
fn categories_section(categories: &[Category], error_message: &str) -> Markup {
    html! {
        section id="categories" class="flex flex-col gap-6"
        {
            div class="dark:bg-gray-800 shadow-md rounded-lg overflow-x-auto"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                        }
                    }

                    tbody
                    {
                        @for category in categories {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (category.id) }
                                td class=(TABLE_CELL_STYLE) { (category.name) }
                            }
                        }

                        @if categories.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="2" class={ (TABLE_CELL_STYLE) " text-center" }
                                {
                                    "No categories yet."
                                }
                            }
                        }
                    }
                }
            }

            form
                hx-post=(endpoints::CATEGORIES_VIEW)
                hx-target="#categories"
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="w-full space-y-4"
            {
                div
                {
                    label
                        for="name"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Category Name"
                    }

                    input
                        id="name"
                        type="text"
                        name="name"
                        placeholder="Category Name"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                @if !error_message.is_empty() {
                    p class="text-red-600 dark:text-red-400"
                    {
                        (error_message)
                    }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Category" }
            }
        }
    }
}


#[cfg(test)]
mod create_category_endpoint_tests {
    use axum::{Form, extract::State, http::StatusCode};
    use scraper::Selector;

    use crate::{
        Error,
        category::{CategoryCache, NewCategory},
        pagination::PaginationConfig,
        test_utils::{
            Call, FakeApi, Operation, assert_form_error_message, assert_status_ok,
            assert_valid_html, must_get_form, parse_html_fragment,
        },
        transaction::TransactionsController,
    };

    use super::{CategoryForm, create_category_endpoint};

    fn controller(api: FakeApi) -> TransactionsController<FakeApi> {
        TransactionsController::new(api, CategoryCache::default(), &PaginationConfig::default())
    }

    #[tokio::test]
    async fn can_create_category() {
        let api = FakeApi::with_transactions(0);
        let controller = controller(api.clone());
        let form = CategoryForm {
            name: " Travel ".to_owned(),
        };

        let response = create_category_endpoint(State(controller.clone()), Form(form)).await;

        assert_status_ok(&response);
        assert_eq!(
            api.calls(),
            [
                Call::CreateCategory(NewCategory {
                    name: "Travel".to_owned()
                }),
                Call::ListCategories,
            ]
        );
        assert_eq!(controller.categories().snapshot().len(), 3);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let names = html
            .select(&Selector::parse("#categories tbody tr td:nth-child(2)").unwrap())
            .map(|cell| cell.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Food", "Rent", "Travel"]);
    }

    #[tokio::test]
    async fn empty_name_shows_form_error() {
        let api = FakeApi::with_transactions(0);
        let form = CategoryForm {
            name: "  ".to_owned(),
        };

        let response = create_category_endpoint(State(controller(api.clone())), Form(form)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_error_message(&form, "Error: Category name cannot be empty");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn backend_error_is_alert() {
        let api = FakeApi::with_transactions(0);
        api.fail_next(
            Operation::CreateCategory,
            Error::Request {
                url: "http://fake.test/categories".to_owned(),
                status: 500,
            },
        );
        let form = CategoryForm {
            name: "Travel".to_owned(),
        };

        let response = create_category_endpoint(State(controller(api)), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
