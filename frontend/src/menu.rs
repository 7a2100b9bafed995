use gloo_console::warn;
use web_sys::Element;

use crate::{
    dom::{by_id, ClassTarget},
    error::Result,
    events::listen,
};

const MENU_SELECTOR: &str = ".nav";
const MOBILE_TOGGLE_ID: &str = "mobile-toggle";
const OPEN: &str = "open";

pub fn close_menu(menu: &impl ClassTarget) -> Result<()> {
    if menu.has_class(OPEN) {
        menu.set_class(OPEN, false)?;
    }

    Ok(())
}

pub fn toggle_menu(menu: &impl ClassTarget) -> Result<()> {
    menu.set_class(OPEN, !menu.has_class(OPEN))
}

fn find_menu() -> Option<Element> {
    gloo_utils::document()
        .query_selector(MENU_SELECTOR)
        .ok()
        .flatten()
}

fn with_menu(action: fn(&Element) -> Result<()>) {
    let Some(menu) = find_menu() else {
        return;
    };

    if let Err(e) = action(&menu) {
        warn!(format!("Could not update navigation menu: {e}"));
    }
}

/// Close the mobile menu whenever one of `links` is followed.
pub fn init_auto_close(links: &[Element]) -> Result<()> {
    for link in links {
        listen(link, "click", |_| with_menu(close_menu))?;
    }

    Ok(())
}

/// Wire the hamburger button, if the page has one.
pub fn init_mobile_toggle() -> Result<bool> {
    let Some(toggle) = by_id(&gloo_utils::document(), MOBILE_TOGGLE_ID) else {
        return Ok(false);
    };

    listen(&toggle, "click", |_| with_menu(toggle_menu))?;

    Ok(true)
}
