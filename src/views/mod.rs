//! Server-rendered markup.
//!
//! Every view is a plain function returning [`Markup`]. Views receive
//! the locale and strings they need as arguments; nothing is looked up
//! from ambient state.

mod hero;
mod switcher;

pub use hero::hero;
pub use switcher::{change_language_button, change_locale};

use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::i18n::Locale;

/// Route the switcher forms post to.
pub const SWITCH_ROUTE: &str = "/locale";

/// Document shell shared by every page.
pub fn page(locale: Locale, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale.code()) dir=(locale.dir()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                (content)
            }
        }
    }
}

/// The short page of nested routes: title plus the two-button switcher.
pub fn simple(title: &str, path: &str) -> Markup {
    html! {
        div {
            p { (title) }
            (change_locale(path))
        }
    }
}

/// Minimal page for error responses.
///
/// The status text is English; `locale` only sets the document language
/// and direction so the shell matches the page that failed.
pub fn error_page(locale: Locale, status: StatusCode) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    page(
        locale,
        reason,
        html! {
            main {
                h1 { (status.as_u16()) " " (reason) }
            }
        },
    )
}
