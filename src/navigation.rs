//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::{endpoints, theme::Theme};

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_desktop_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm lg:bg-transparent
        lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
        lg:hover:bg-transparent lg:border-0 lg:hover:text-blue-700 lg:p-0
        dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700
        dark:hover:text-white lg:dark:hover:bg-transparent"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }

    fn into_mobile_html(self) -> Markup {
        let style = if self.is_current {
            "block rounded-lg bg-blue-50 px-3 py-2 text-blue-700 \
            dark:bg-blue-900/30 dark:text-blue-200"
        } else {
            "block rounded-lg px-3 py-2 text-gray-700 hover:bg-gray-100 \
            hover:text-blue-700 dark:text-gray-200 dark:hover:bg-gray-800/80 \
            dark:hover:text-blue-200"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
    theme: Theme,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str, theme: Theme) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::TRANSACTIONS_VIEW,
                title: "Transactions",
                is_current: active_endpoint == endpoints::TRANSACTIONS_VIEW,
            },
            Link {
                url: endpoints::CATEGORIES_VIEW,
                title: "Categories",
                is_current: active_endpoint == endpoints::CATEGORIES_VIEW,
            },
        ];

        NavBar { links, theme }
    }

    pub fn into_html(self) -> Markup {
        let theme_toggle = theme_toggle_button(self.theme);

        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::ROOT)
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                    {
                        span
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            "Cashbook"
                        }
                    }

                    div class="hidden lg:flex lg:items-center lg:gap-8"
                    {
                        ul
                            class="font-medium flex flex-row space-x-8 rtl:space-x-reverse"
                        {
                            @for link in self.links.clone() {
                                li { (link.into_desktop_html()) }
                            }
                        }

                        (theme_toggle)
                    }

                    details id="mobile-menu" class="group relative lg:hidden"
                    {
                        summary
                            class="list-none [&::-webkit-details-marker]:hidden cursor-pointer
                            inline-flex items-center justify-center p-2 w-10 h-10 rounded-lg
                            text-gray-500 hover:bg-gray-100 dark:text-gray-400
                            dark:hover:bg-gray-700"
                            aria-label="Open main menu"
                        {
                            span class="group-open:hidden" { "☰" }
                            span class="hidden group-open:inline" { "✕" }
                        }

                        div
                            class="absolute right-0 z-40 mt-2 w-48 rounded-xl border
                            border-gray-200 bg-white/95 p-2 shadow-xl backdrop-blur
                            dark:border-gray-700 dark:bg-gray-900/95"
                        {
                            ul class="flex flex-col gap-1 text-sm font-medium"
                            {
                                @for link in self.links {
                                    li { (link.into_mobile_html()) }
                                }

                                li class="px-3 py-2" { (theme_toggle) }
                            }
                        }
                    }
                }
            }
        )
    }
}

fn theme_toggle_button(theme: Theme) -> Markup {
    html!(
        button
            type="button"
            hx-post=(endpoints::THEME)
            hx-target-error="#alert-container"
            class="text-sm font-medium text-gray-700 hover:text-blue-700
            dark:text-gray-300 dark:hover:text-blue-400"
        {
            (theme.toggle_label())
        }
    )
}
