//! The pagination and filter state for the transactions table.
//!
//! Transitions never mutate a [PageState] in place. They return a candidate
//! state that the controller only commits once the fetch for it succeeds.

use std::str::FromStr;

use crate::{Error, ResourceId, api::TransactionQuery, transaction::TransactionType};

/// The filter fields the user can set from the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Type,
}

impl FilterField {
    /// The form field name, also used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterField::Category => "category",
            FilterField::Type => "type",
        }
    }
}

impl FromStr for FilterField {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "category" => Ok(FilterField::Category),
            "type" => Ok(FilterField::Type),
            _ => Err(Error::InvalidField {
                field: "filter",
                value: text.to_owned(),
            }),
        }
    }
}

/// The active filters. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub category: Option<ResourceId>,
    pub kind: Option<TransactionType>,
}

impl Filters {
    /// Set `field` from the submitted `value`, an empty value clears the field.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), Error> {
        let value = value.trim();

        match field {
            FilterField::Category if value.is_empty() => self.category = None,
            FilterField::Category => {
                let Ok(id) = value.parse::<ResourceId>();
                self.category = Some(id);
            }
            FilterField::Type if value.is_empty() => self.kind = None,
            FilterField::Type => {
                let kind = value.parse().map_err(|_| Error::InvalidField {
                    field: "transaction type",
                    value: value.to_owned(),
                })?;
                self.kind = Some(kind);
            }
        }

        Ok(())
    }
}

/// Which page of transactions is shown and how it is filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    /// The current page, starting at 1.
    pub page: u64,
    /// The number of transactions per page, fixed for the lifetime of the app.
    pub page_size: u64,
    /// The number of pages as of the last fetch, 0 before the first fetch or
    /// when nothing matches.
    pub total_pages: u64,
    pub filters: Filters,
}

impl PageState {
    /// The state before the first fetch: page 1, unfiltered.
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_pages: 0,
            filters: Filters::default(),
        }
    }

    /// The candidate for changing one filter, which always starts back on page 1.
    pub fn with_filter(&self, field: FilterField, value: &str) -> Result<Self, Error> {
        let mut filters = self.filters.clone();
        filters.set(field, value)?;

        Ok(Self {
            page: 1,
            filters,
            ..self.clone()
        })
    }

    /// The candidate with no filters on page 1.
    pub fn without_filters(&self) -> Self {
        Self {
            page: 1,
            filters: Filters::default(),
            ..self.clone()
        }
    }

    /// The candidate for the next page, `None` when already on the last page.
    pub fn next(&self) -> Option<Self> {
        (self.page < self.total_pages).then(|| Self {
            page: self.page + 1,
            ..self.clone()
        })
    }

    /// The candidate for the previous page, `None` when already on the first page.
    pub fn prev(&self) -> Option<Self> {
        (self.page > 1).then(|| Self {
            page: self.page - 1,
            ..self.clone()
        })
    }

    /// The candidate for `page`, never before the first page.
    ///
    /// The upper bound is checked against the total the fetch reports, since
    /// the last known total may be stale.
    pub fn at_page(&self, page: u64) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// The state after a fetch reported `total_count` matching transactions.
    pub fn with_total_count(&self, total_count: u64) -> Self {
        Self {
            total_pages: total_pages(total_count, self.page_size),
            ..self.clone()
        }
    }

    /// The candidate moved back onto the last page, `None` if the current page
    /// still exists.
    pub fn clamped(&self) -> Option<Self> {
        (self.page > self.last_page()).then(|| Self {
            page: self.last_page(),
            ..self.clone()
        })
    }

    /// The prev/next controls and the "Page x of y" text.
    pub fn indicator(&self) -> PageIndicator {
        PageIndicator {
            page: self.page,
            total_pages: self.total_pages,
            prev_disabled: self.page <= 1,
            next_disabled: self.page >= self.total_pages,
        }
    }

    fn last_page(&self) -> u64 {
        self.total_pages.max(1)
    }
}

/// The number of pages needed to show `total_count` items `page_size` at a time.
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size.max(1))
}

/// The backend query for the page and filters in `state`.
pub fn build_query(state: &PageState) -> TransactionQuery {
    TransactionQuery {
        page: state.page,
        limit: state.page_size,
        category: state.filters.category.clone(),
        kind: state.filters.kind,
    }
}

/// What the pagination controls show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIndicator {
    pub page: u64,
    pub total_pages: u64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PageIndicator {
    pub fn text(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error, ResourceId,
        api::TransactionQuery,
        transaction::TransactionType,
    };

    use super::{FilterField, PageIndicator, PageState, build_query, total_pages};

    #[test]
    fn counts_partial_last_page() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn steps_through_pages_and_stops_at_last() {
        let state = PageState::new(10).with_total_count(25);
        assert_eq!(state.total_pages, 3);
        assert_eq!(build_query(&state).page, 1);

        let state = state.next().expect("page 2 should exist");
        let state = state.next().expect("page 3 should exist");

        assert_eq!(state.page, 3);
        assert_eq!(state.next(), None);
        assert_eq!(
            state.indicator(),
            PageIndicator {
                page: 3,
                total_pages: 3,
                prev_disabled: false,
                next_disabled: true,
            }
        );
        assert_eq!(state.indicator().text(), "Page 3 of 3");
    }

    #[test]
    fn prev_is_noop_on_first_page() {
        let state = PageState::new(10).with_total_count(25);

        assert_eq!(state.prev(), None);
        assert!(state.indicator().prev_disabled);
    }

    #[test]
    fn next_is_noop_before_first_fetch() {
        let state = PageState::new(10);

        assert_eq!(state.next(), None);
        assert_eq!(state.indicator().text(), "Page 1 of 0");
        assert!(state.indicator().next_disabled);
    }

    #[test]
    fn changing_filter_resets_page_and_keeps_other_filter() {
        let state = PageState::new(10)
            .with_total_count(50)
            .with_filter(FilterField::Type, "income")
            .unwrap()
            .at_page(4);

        let state = state.with_filter(FilterField::Category, "2").unwrap();

        assert_eq!(state.page, 1);
        assert_eq!(state.filters.category, Some(ResourceId::Number(2)));
        assert_eq!(state.filters.kind, Some(TransactionType::Income));
    }

    #[test]
    fn empty_value_clears_filter() {
        let state = PageState::new(10)
            .with_filter(FilterField::Category, "2")
            .unwrap()
            .with_filter(FilterField::Category, "")
            .unwrap();

        assert_eq!(state.filters.category, None);
    }

    #[test]
    fn invalid_type_filter_is_rejected() {
        let result = PageState::new(10).with_filter(FilterField::Type, "refund");

        assert_eq!(
            result,
            Err(Error::InvalidField {
                field: "transaction type",
                value: "refund".to_owned(),
            })
        );
    }

    #[test]
    fn reset_gives_unfiltered_first_page() {
        let state = PageState::new(10)
            .with_total_count(50)
            .with_filter(FilterField::Category, "3")
            .unwrap()
            .at_page(5)
            .without_filters();

        assert_eq!(
            build_query(&state),
            TransactionQuery {
                page: 1,
                limit: 10,
                category: None,
                kind: None,
            }
        );
    }

    #[test]
    fn go_to_page_keeps_pages_past_the_known_total() {
        let state = PageState::new(10).with_total_count(25);

        assert_eq!(state.at_page(0).page, 1);
        assert_eq!(state.at_page(2).page, 2);
        assert_eq!(state.at_page(9).page, 9);
        assert_eq!(PageState::new(10).at_page(3).page, 3);
    }

    #[test]
    fn clamps_after_last_page_disappears() {
        let state = PageState::new(10).with_total_count(21).at_page(3);

        let shrunk = state.with_total_count(20);

        assert_eq!(shrunk.clamped().map(|state| state.page), Some(2));
        assert_eq!(state.clamped(), None);
        assert_eq!(
            PageState::new(10).with_total_count(0).clamped(),
            None,
            "page 1 is kept when nothing matches"
        );
    }

    #[test]
    fn query_includes_filters() {
        let state = PageState::new(25)
            .with_filter(FilterField::Category, "food")
            .unwrap()
            .with_filter(FilterField::Type, "Expense")
            .unwrap();

        assert_eq!(
            build_query(&state),
            TransactionQuery {
                page: 1,
                limit: 25,
                category: Some(ResourceId::from("food")),
                kind: Some(TransactionType::Expense),
            }
        );
    }
}
