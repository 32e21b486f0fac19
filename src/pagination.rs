//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// The number of transactions to display per page.
    pub page_size: u64,
    /// The maximum number of numbered page links to show around the current page.
    pub max_page_links: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_page_links: 5,
        }
    }
}

/// One entry in the numbered page links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLink {
    Page(u64),
    Current(u64),
    Ellipsis,
}

/// Create the numbered links for `page_count` pages, showing at most
/// `max_links` consecutive pages around `curr_page` plus the first and last page.
pub fn create_page_links(curr_page: u64, page_count: u64, max_links: u64) -> Vec<PageLink> {
    let max_links = max_links.max(1);
    let half = max_links / 2;
    let map_page = |page| {
        if page == curr_page {
            PageLink::Current(page)
        } else {
            PageLink::Page(page)
        }
    };

    let window = if page_count <= max_links {
        1..=page_count
    } else if curr_page <= half {
        1..=max_links
    } else if curr_page > page_count - half {
        (page_count - max_links + 1)..=page_count
    } else {
        (curr_page - half)..=(curr_page + half).min(page_count)
    };

    let first_in_window = *window.start();
    let last_in_window = *window.end();
    let mut links: Vec<PageLink> = window.map(map_page).collect();

    if page_count > max_links {
        if first_in_window > 1 {
            links.insert(0, PageLink::Page(1));
            if first_in_window > 2 {
                links.insert(1, PageLink::Ellipsis);
            }
        }

        if last_in_window < page_count {
            if last_in_window + 1 < page_count {
                links.push(PageLink::Ellipsis);
            }
            links.push(PageLink::Page(page_count));
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use crate::pagination::{PageLink, create_page_links};

    #[test]
    fn shows_all_pages() {
        let want = [
            PageLink::Current(1),
            PageLink::Page(2),
            PageLink::Page(3),
        ];

        let got = create_page_links(1, 3, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn no_pages_no_links() {
        assert!(create_page_links(1, 0, 5).is_empty());
    }

    #[test]
    fn shows_page_subset_on_left() {
        let want = [
            PageLink::Current(1),
            PageLink::Page(2),
            PageLink::Page(3),
            PageLink::Page(4),
            PageLink::Page(5),
            PageLink::Ellipsis,
            PageLink::Page(10),
        ];

        let got = create_page_links(1, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_on_right() {
        let want = [
            PageLink::Page(1),
            PageLink::Ellipsis,
            PageLink::Page(6),
            PageLink::Page(7),
            PageLink::Page(8),
            PageLink::Page(9),
            PageLink::Current(10),
        ];

        let got = create_page_links(10, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_in_center() {
        let want = [
            PageLink::Page(1),
            PageLink::Ellipsis,
            PageLink::Page(3),
            PageLink::Page(4),
            PageLink::Current(5),
            PageLink::Page(6),
            PageLink::Page(7),
            PageLink::Ellipsis,
            PageLink::Page(10),
        ];

        let got = create_page_links(5, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn skips_ellipsis_next_to_first_page() {
        let want = [
            PageLink::Page(1),
            PageLink::Page(2),
            PageLink::Page(3),
            PageLink::Current(4),
            PageLink::Page(5),
            PageLink::Page(6),
            PageLink::Ellipsis,
            PageLink::Page(10),
        ];

        let got = create_page_links(4, 10, 5);

        assert_eq!(want, got.as_slice());
    }
}
