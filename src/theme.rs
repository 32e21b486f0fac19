//! Dark mode, stored in a cookie so every page renders in the chosen theme.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use axum_htmx::HxRefresh;

/// The name of the cookie holding the theme.
pub const THEME_COOKIE: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read the theme from the request cookies, defaulting to light.
    pub fn from_jar(jar: &CookieJar) -> Self {
        match jar.get(THEME_COOKIE).map(Cookie::value) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The class for the `<html>` element.
    pub fn html_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }

    /// The label of the button that switches to the other theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

/// A route handler that switches between light and dark mode and tells HTMX
/// to reload the page.
pub async fn toggle_theme(jar: CookieJar) -> Response {
    let theme = Theme::from_jar(&jar).toggled();
    tracing::debug!("switching to {} mode", theme.as_str());

    let cookie = Cookie::build((THEME_COOKIE, theme.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent();

    (jar.add(cookie), HxRefresh(true), StatusCode::OK).into_response()
}
