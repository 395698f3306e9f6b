//! Locale switcher buttons.
//!
//! Both variants render the same form and differ only in the
//! [`LocaleChoice`] they bind to.

use maud::{Markup, html};

use super::SWITCH_ROUTE;
use crate::i18n::Locale;
use crate::navigation::LocaleChoice;

fn switch_form(choice: LocaleChoice, path: &str, label: &str) -> Markup {
    html! {
        form method="post" action=(SWITCH_ROUTE) {
            input type="hidden" name="from" value=(path);
            input type="hidden" name="locale" value=(choice.target().code());
            button type="submit" { (label) }
        }
    }
}

/// Single toggle button: switches from `current` to the other locale.
pub fn change_language_button(label: &str, current: Locale, path: &str) -> Markup {
    switch_form(LocaleChoice::Toggle { current }, path, label)
}

/// One fixed button per locale, each selecting that locale.
pub fn change_locale(path: &str) -> Markup {
    html! {
        @for locale in Locale::ALL {
            (switch_form(LocaleChoice::Select(locale), path, locale.switch_label()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_button_posts_other_locale() {
        let html = change_language_button("Go", Locale::En, "/en/a").into_string();

        assert!(html.contains(r#"action="/locale""#));
        assert!(html.contains(r#"name="from" value="/en/a""#));
        assert!(html.contains(r#"name="locale" value="ar""#));
        assert!(!html.contains(r#"name="locale" value="en""#));
    }

    #[test]
    fn test_change_locale_has_one_button_per_locale() {
        let html = change_locale("/ar/a").into_string();

        assert_eq!(html.matches("<button").count(), 2);
        assert!(html.contains(r#"name="locale" value="en""#));
        assert!(html.contains(r#"name="locale" value="ar""#));
        assert!(html.contains("Change to english"));
        assert!(html.contains("Change to arabic"));
    }

    #[test]
    fn test_change_locale_labels_match_targets() {
        let html = change_locale("/en").into_string();
        let en = html.find(r#"value="en""#).unwrap();
        let en_label = html.find("Change to english").unwrap();
        let ar = html.find(r#"value="ar""#).unwrap();
        let ar_label = html.find("Change to arabic").unwrap();

        assert!(en < en_label && en_label < ar && ar < ar_label);
    }
}
