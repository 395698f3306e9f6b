//! HTTP redirect navigator.
//!
//! On the server, "navigating" means answering the switch request with a
//! redirect. The current path comes from the submitted form, or from the
//! `Referer` header when the form did not carry one.

use url::Url;

use super::Navigator;

/// A [`Navigator`] that records where the client should be redirected.
#[derive(Debug, Default, Clone)]
pub struct RedirectNavigator {
    current: Option<String>,
    target: Option<String>,
}

impl RedirectNavigator {
    /// Build from the posted `from` field and the raw `Referer` header.
    ///
    /// Only absolute paths (starting with `/`) are accepted as the
    /// current path, so the rewritten target always stays on this site.
    /// Paths with control characters cannot go into a `Location` header
    /// and count as no path at all.
    pub fn from_request(from: Option<String>, referer: Option<&str>) -> Self {
        let current = from
            .filter(|p| !p.is_empty())
            .or_else(|| referer.and_then(referer_path))
            .filter(|p| p.starts_with('/') && !p.chars().any(char::is_control));

        Self {
            current,
            target: None,
        }
    }

    /// The path navigation was requested to, if any.
    pub fn into_target(self) -> Option<String> {
        self.target
    }
}

fn referer_path(referer: &str) -> Option<String> {
    Url::parse(referer).ok().map(|url| url.path().to_string())
}

impl Navigator for RedirectNavigator {
    fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn push(&mut self, path: String) {
        self.target = Some(path);
    }
}
