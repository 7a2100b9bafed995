//! Interactivity for the portfolio page: active navigation link, theme
//! toggle, mobile menu and reveal-on-scroll.

use gloo_console::log;

mod config;
mod debounce;
mod dom;
mod error;
mod events;
mod menu;
mod nav;
mod reveal;
mod theme;


pub use config::Config;
pub use error::{Error, Result};
pub use nav::{active_section, SectionBounds};
pub use theme::{PreferenceStore, Theme};

const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Attach all page behaviour, configured from the page itself.
pub fn start() -> Result<()> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    start_with(Config::from_page(&document))
}

/// Attach all page behaviour.
///
/// Components are wired one after the other, a missing theme toggle stops
/// the wiring but keeps the navigation highlight that is already attached.
pub fn start_with(config: Config) -> Result<()> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;
    let body = document.body().ok_or(Error::NoBody)?;

    let links = dom::query_all(&document, nav::NAV_LINK_SELECTOR)?;
    nav::init_nav_highlight(window.clone(), document.clone(), links.clone(), &config)?;

    let toggle = dom::required_by_id(&document, THEME_TOGGLE_ID)?;
    let storage = window.local_storage().ok().flatten();
    theme::init_theme(body, toggle, storage, config.clone())?;

    menu::init_auto_close(&links)?;

    let selector = format!(".{}", reveal::HIDDEN);
    let revealable = dom::query_all(&document, &selector)?;
    reveal::init_reveal(window, revealable, &config)?;

    let mobile_toggle = menu::init_mobile_toggle()?;

    log!(format!(
        "Portfolio ready: {} nav links, mobile toggle {}",
        links.len(),
        if mobile_toggle { "attached" } else { "absent" }
    ));

    Ok(())
}
