//! Page handlers.
//!
//! Each page handler takes the locale from the first path segment,
//! loads its dictionary and renders the matching layout.

use axum::extract::{Form, Path, State};
use axum::http::header::REFERER;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use super::{AppError, AppState};
use crate::i18n::{Dictionary, DictionarySource, Locale};
use crate::navigation::{LocaleSwitcher, RedirectNavigator};
use crate::views;

fn parse_locale(lang: &str) -> Result<Locale, AppError> {
    lang.parse()
        .map_err(|_| AppError::UnsupportedLocale(lang.to_string()))
}

async fn load_dictionary(state: &AppState, locale: Locale) -> Result<Dictionary, AppError> {
    tokio::time::timeout(state.dictionary_timeout, state.dictionaries.load(locale))
        .await
        .map_err(|_| AppError::DictionaryTimeout(locale))?
        .map_err(AppError::from)
}

/// `GET /` - send the visitor to the default locale.
pub async fn root(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&format!("/{}", state.default_locale.code()))
}

/// `GET /{lang}` - landing page with the hero and language toggle.
pub async fn home(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let locale = parse_locale(&lang)?;
    let dictionary = load_dictionary(&state, locale).await?;

    let markup = views::page(
        locale,
        &dictionary.home.title,
        views::hero(locale, &dictionary, uri.path()),
    );
    Ok(Html(markup.into_string()))
}

/// `GET /{lang}/{*rest}` - simple page with the two-button switcher.
pub async fn nested(
    State(state): State<AppState>,
    Path((lang, _rest)): Path<(String, String)>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let locale = parse_locale(&lang)?;
    let dictionary = load_dictionary(&state, locale).await?;

    let markup = views::page(
        locale,
        &dictionary.home.title,
        views::simple(&dictionary.home.title, uri.path()),
    );
    Ok(Html(markup.into_string()))
}

/// Body of a switcher form.
#[derive(Debug, Deserialize)]
pub struct SwitchForm {
    /// Requested locale code.
    pub locale: String,
    /// Path the form was rendered on.
    #[serde(default)]
    pub from: Option<String>,
}

/// `POST /locale` - rewrite the current path and redirect to it.
///
/// Answers `204 No Content` when no current path is known.
pub async fn switch_locale(
    headers: HeaderMap,
    Form(form): Form<SwitchForm>,
) -> Result<Response, AppError> {
    let locale: Locale = form
        .locale
        .parse()
        .map_err(|_| AppError::InvalidSwitchTarget(form.locale.clone()))?;

    let referer = headers.get(REFERER).and_then(|v| v.to_str().ok());
    let mut switcher = LocaleSwitcher::new(RedirectNavigator::from_request(form.from, referer));
    switcher.set_locale(locale);

    let response = match switcher.into_inner().into_target() {
        Some(target) => Redirect::to(&target).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

/// Anything no route matched.
///
/// `/{lang}/` slips past both page routes (the catch-all needs a
/// non-empty rest), so it is redirected to `/{lang}` here.
pub async fn fallback(uri: Uri) -> Response {
    let locale = uri
        .path()
        .strip_prefix('/')
        .and_then(|p| p.strip_suffix('/'))
        .and_then(|lang| lang.parse::<Locale>().ok());

    if let Some(locale) = locale {
        return Redirect::permanent(&format!("/{}", locale.code())).into_response();
    }

    let status = StatusCode::NOT_FOUND;
    (status, Html(views::error_page(Locale::default(), status).into_string())).into_response()
}
