use gloo_console::warn;
use web_sys::{Element, HtmlElement, Storage};

use crate::{
    config::Config,
    dom::{ClassTarget, GlyphTarget},
    error::{Error, Result},
    events::listen,
};

const DARK: &str = "dark";
const LIGHT: &str = "light";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything but an explicit "dark" means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DARK) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn glyph(self, config: &Config) -> &str {
        match self {
            Theme::Light => &config.light_glyph,
            Theme::Dark => &config.dark_glyph,
        }
    }

    /// Theme currently shown on `body`.
    pub fn of(body: &impl ClassTarget) -> Self {
        if body.has_class(DARK) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Key-value storage for the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl PreferenceStore for Storage {
    fn load(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.set_item(key, value)?)
    }
}

/// Used when the browser refuses access to local storage, nothing is kept.
impl PreferenceStore for Option<Storage> {
    fn load(&self, key: &str) -> Option<String> {
        self.as_ref().and_then(|s| s.load(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Some(storage) => storage.save(key, value),
            None => Err(Error::Js("local storage unavailable".to_owned())),
        }
    }
}

pub fn load_theme(store: &impl PreferenceStore, config: &Config) -> Theme {
    Theme::from_stored(store.load(&config.storage_key).as_deref())
}

/// Show `theme` on the page and remember it.
///
/// The page switches even when the preference can't be written, the write
/// error is returned afterwards.
pub fn apply_theme(
    theme: Theme,
    body: &impl ClassTarget,
    toggle: &impl GlyphTarget,
    store: &impl PreferenceStore,
    config: &Config,
) -> Result<()> {
    body.set_class(DARK, theme == Theme::Dark)?;
    toggle.set_glyph(theme.glyph(config));

    store.save(&config.storage_key, theme.as_str())
}

/// Flip the theme shown on `body`, returns the new theme.
pub fn toggle_theme(
    body: &impl ClassTarget,
    toggle: &impl GlyphTarget,
    store: &impl PreferenceStore,
    config: &Config,
) -> Result<Theme> {
    let theme = Theme::of(body).toggled();
    apply_theme(theme, body, toggle, store, config)?;

    Ok(theme)
}

pub fn init_theme(
    body: HtmlElement,
    toggle: Element,
    store: Option<Storage>,
    config: Config,
) -> Result<()> {
    let body: Element = body.into();
    let theme = load_theme(&store, &config);
    if let Err(e) = apply_theme(theme, &body, &toggle, &store, &config) {
        warn!(format!("Could not apply theme {}: {e}", theme.as_str()));
    }

    let target = toggle.clone();
    listen(&target, "click", move |_| {
        if let Err(e) = toggle_theme(&body, &toggle, &store, &config) {
            warn!(format!("Could not toggle theme: {e}"));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{FakeElement, MemoryStore};

    #[test]
    fn unknown_or_missing_value_is_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn glyph_follows_theme() {
        let config = Config::default();
        let body = FakeElement::default();
        let toggle = FakeElement::default();
        let store = MemoryStore::default();

        apply_theme(Theme::Dark, &body, &toggle, &store, &config).unwrap();
        assert!(body.has_class("dark"));
        assert_eq!(toggle.glyph(), "☀️");

        apply_theme(Theme::Light, &body, &toggle, &store, &config).unwrap();
        assert!(!body.has_class("dark"));
        assert_eq!(toggle.glyph(), "🌙");
    }

    #[test]
    fn toggling_twice_restores_state() {
        let config = Config::default();
        let body = FakeElement::default();
        let toggle = FakeElement::default();
        let store = MemoryStore::default();

        for start in [Theme::Light, Theme::Dark] {
            apply_theme(start, &body, &toggle, &store, &config).unwrap();
            let glyph = toggle.glyph();

            assert_eq!(
                toggle_theme(&body, &toggle, &store, &config).unwrap(),
                start.toggled()
            );
            assert_eq!(toggle_theme(&body, &toggle, &store, &config).unwrap(), start);

            assert_eq!(Theme::of(&body), start);
            assert_eq!(toggle.glyph(), glyph);
            assert_eq!(store.load("theme").as_deref(), Some(start.as_str()));
        }
    }

    #[test]
    fn stored_theme_reads_back() {
        let config = Config::default();
        let store = MemoryStore::default();

        for theme in [Theme::Dark, Theme::Light] {
            apply_theme(theme, &FakeElement::default(), &FakeElement::default(), &store, &config)
                .unwrap();
            assert_eq!(load_theme(&store, &config), theme);
        }
    }

    #[test]
    fn failed_write_still_applies() {
        let config = Config::default();
        let body = FakeElement::default();
        let toggle = FakeElement::default();
        let store: Option<Storage> = None;

        assert!(apply_theme(Theme::Dark, &body, &toggle, &store, &config).is_err());

        assert!(body.has_class("dark"));
        assert_eq!(toggle.glyph(), "☀️");
        assert_eq!(load_theme(&store, &config), Theme::Light);
    }

    #[test]
    fn custom_storage_key() {
        let config = Config {
            storage_key: "portfolio-theme".to_owned(),
            ..Config::default()
        };
        let store = MemoryStore::default();

        apply_theme(Theme::Dark, &FakeElement::default(), &FakeElement::default(), &store, &config)
            .unwrap();

        assert_eq!(store.load("portfolio-theme").as_deref(), Some("dark"));
        assert_eq!(store.load("theme"), None);
    }
}
