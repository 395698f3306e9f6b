//! Locale switching.
//!
//! The current locale lives in the first segment of the URL path, so
//! switching locale means rewriting that segment and navigating to the
//! result. The routing layer is injected through [`Navigator`].
//!
//! ## Bindings
//!
//! - [`LocaleChoice::Toggle`] - flip to the other locale (hero button)
//! - [`LocaleChoice::Select`] - go to one specific locale (two-button switcher)

mod redirect;

pub use redirect::RedirectNavigator;

use tracing::debug;

use crate::i18n::Locale;

/// Access to the routing layer: read the current path, request navigation.
pub trait Navigator {
    /// The current path, if one is available.
    fn current_path(&self) -> Option<&str>;

    /// Request navigation to `path`.
    fn push(&mut self, path: String);
}

/// How a switcher button picks its target locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleChoice {
    /// Switch to whichever locale is not `current`.
    Toggle { current: Locale },
    /// Switch to exactly this locale.
    Select(Locale),
}

impl LocaleChoice {
    /// The locale this choice navigates to.
    pub fn target(self) -> Locale {
        match self {
            Self::Toggle { current } => current.other(),
            Self::Select(locale) => locale,
        }
    }
}

/// Replace the locale segment (index 1) of `path` with `locale`.
///
/// Every other segment is kept verbatim. A path without a second
/// segment gets the locale appended as one.
pub fn rewrite_locale(path: &str, locale: Locale) -> String {
    let mut segments: Vec<&str> = path.split('/').collect();

    if segments.len() > 1 {
        segments[1] = locale.code();
    } else {
        segments.push(locale.code());
    }

    segments.join("/")
}

/// Rewrites the current path and hands the result to a [`Navigator`].
pub struct LocaleSwitcher<N> {
    navigator: N,
}

impl<N: Navigator> LocaleSwitcher<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Navigate to the current path with its locale segment set to `locale`.
    ///
    /// Does nothing when there is no current path.
    pub fn set_locale(&mut self, locale: Locale) {
        let Some(current) = self.navigator.current_path().filter(|p| !p.is_empty()) else {
            debug!("No current path, ignoring switch to {}", locale);
            return;
        };

        let target = rewrite_locale(current, locale);
        debug!("Switching locale: {} -> {}", current, target);
        self.navigator.push(target);
    }

    pub fn into_inner(self) -> N {
        self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        path: Option<String>,
        pushed: Vec<String>,
    }

    impl Recorder {
        fn at(path: &str) -> Self {
            Self {
                path: Some(path.to_string()),
                pushed: vec![],
            }
        }
    }

    impl Navigator for Recorder {
        fn current_path(&self) -> Option<&str> {
            self.path.as_deref()
        }

        fn push(&mut self, path: String) {
            self.path = Some(path.clone());
            self.pushed.push(path);
        }
    }

    #[test]
    fn test_rewrite_replaces_only_locale_segment() {
        assert_eq!(rewrite_locale("/en/foo/bar", Locale::Ar), "/ar/foo/bar");
        assert_eq!(rewrite_locale("/ar/foo/bar", Locale::En), "/en/foo/bar");
    }

    #[test]
    fn test_rewrite_keeps_odd_segments_verbatim() {
        assert_eq!(rewrite_locale("/en", Locale::Ar), "/ar");
        assert_eq!(rewrite_locale("/", Locale::Ar), "/ar");
        assert_eq!(rewrite_locale("/en/a//b/", Locale::Ar), "/ar/a//b/");
        assert_eq!(rewrite_locale("en", Locale::Ar), "en/ar");
    }

    #[test]
    fn test_set_locale_pushes_rewritten_path() {
        let mut switcher = LocaleSwitcher::new(Recorder::at("/en/foo/bar"));
        switcher.set_locale(Locale::Ar);

        assert_eq!(switcher.into_inner().pushed, vec!["/ar/foo/bar"]);
    }

    #[test]
    fn test_set_locale_without_path_is_noop() {
        let mut switcher = LocaleSwitcher::new(Recorder::default());
        switcher.set_locale(Locale::Ar);
        assert!(switcher.into_inner().pushed.is_empty());

        let mut switcher = LocaleSwitcher::new(Recorder::at(""));
        switcher.set_locale(Locale::En);
        assert!(switcher.into_inner().pushed.is_empty());
    }

    #[test]
    fn test_round_trip_restores_path() {
        let mut switcher = LocaleSwitcher::new(Recorder::at("/en/docs/getting-started"));
        switcher.set_locale(Locale::Ar);
        switcher.set_locale(Locale::En);

        let recorder = switcher.into_inner();
        assert_eq!(
            recorder.pushed,
            vec!["/ar/docs/getting-started", "/en/docs/getting-started"]
        );
        assert_eq!(recorder.path.as_deref(), Some("/en/docs/getting-started"));
    }

    #[test]
    fn test_toggle_targets_other_locale() {
        assert_eq!(LocaleChoice::Toggle { current: Locale::En }.target(), Locale::Ar);
        assert_eq!(LocaleChoice::Toggle { current: Locale::Ar }.target(), Locale::En);

        let mut switcher = LocaleSwitcher::new(Recorder::at("/ar/x"));
        switcher.set_locale(LocaleChoice::Toggle { current: Locale::Ar }.target());
        assert_eq!(switcher.into_inner().pushed, vec!["/en/x"]);
    }

    #[test]
    fn test_select_targets_literal_locale() {
        for current in Locale::ALL {
            for wanted in Locale::ALL {
                let path = format!("/{}/page", current.code());
                let mut switcher = LocaleSwitcher::new(Recorder::at(&path));
                switcher.set_locale(LocaleChoice::Select(wanted).target());

                assert_eq!(
                    switcher.into_inner().pushed,
                    vec![format!("/{}/page", wanted.code())]
                );
            }
        }
    }
}
