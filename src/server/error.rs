//! Request errors and their HTTP responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, error, warn};

use crate::i18n::{DictionaryError, Locale};
use crate::views;

/// Errors a page or switch request can end in.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unsupported locale in path: {0:?}")]
    UnsupportedLocale(String),

    #[error("unsupported switch target: {0:?}")]
    InvalidSwitchTarget(String),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("timed out loading dictionary for locale {0}")]
    DictionaryTimeout(Locale),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedLocale(_) => StatusCode::NOT_FOUND,
            Self::InvalidSwitchTarget(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Dictionary(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::DictionaryTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Locale of the failed page, when the request got far enough to know it.
    pub fn locale(&self) -> Option<Locale> {
        match self {
            Self::UnsupportedLocale(_) | Self::InvalidSwitchTarget(_) => None,
            Self::Dictionary(e) => Some(e.locale()),
            Self::DictionaryTimeout(locale) => Some(*locale),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::UnsupportedLocale(_) | Self::InvalidSwitchTarget(_) => debug!("{}", self),
            Self::Dictionary(e) => error!(error = ?e, "{}", self),
            Self::DictionaryTimeout(_) => warn!("{}", self),
        }

        let status = self.status();
        let locale = self.locale().unwrap_or_default();
        (status, Html(views::error_page(locale, status).into_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::UnsupportedLocale("fr".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidSwitchTarget("fr".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(DictionaryError::Missing { locale: Locale::Ar }).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::DictionaryTimeout(Locale::En).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_locale_known_only_after_parsing() {
        assert_eq!(AppError::UnsupportedLocale("fr".into()).locale(), None);
        assert_eq!(
            AppError::from(DictionaryError::Missing { locale: Locale::Ar }).locale(),
            Some(Locale::Ar)
        );
        assert_eq!(AppError::DictionaryTimeout(Locale::Ar).locale(), Some(Locale::Ar));
    }

    #[test]
    fn test_response_uses_status() {
        let response = AppError::UnsupportedLocale("fr".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
