//! Landing hero.

use maud::{Markup, html};

use super::change_language_button;
use crate::i18n::{Dictionary, HomeText, Locale};

/// Title, description and the language toggle for `locale`.
///
/// `path` is the path being rendered; the toggle rewrites it.
pub fn hero(locale: Locale, dictionary: &Dictionary, path: &str) -> Markup {
    let home: &HomeText = &dictionary.home;

    html! {
        main class="hero" {
            section class="hero-card" {
                h1 { (home.title) }
                p { (home.description) }
                (change_language_button(&home.button, locale, path))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary {
            home: HomeText {
                title: "Hello".to_string(),
                description: "A page & more".to_string(),
                button: "Flip".to_string(),
            },
        }
    }

    #[test]
    fn test_hero_renders_every_string() {
        let html = hero(Locale::En, &dictionary(), "/en").into_string();

        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("A page &amp; more"));
        assert!(html.contains(">Flip</button>"));
    }

    #[test]
    fn test_hero_button_toggles() {
        let html = hero(Locale::En, &dictionary(), "/en").into_string();
        assert!(html.contains(r#"name="locale" value="ar""#));

        let html = hero(Locale::Ar, &dictionary(), "/ar").into_string();
        assert!(html.contains(r#"name="locale" value="en""#));
    }
}
