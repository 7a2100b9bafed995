use std::rc::Rc;

use gloo_console::warn;
use web_sys::{Element, Window};

use crate::{
    config::Config,
    dom::{ClassTarget, Revealable},
    error::Result,
    events::listen,
};

pub const HIDDEN: &str = "hidden";
const SHOW: &str = "show";

pub fn is_in_view(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

/// Show every element that scrolled into view, returns how many are shown.
///
/// Elements are never hidden again once shown.
pub fn reveal_pass<E: Revealable>(
    elements: &[E],
    viewport_height: f64,
    margin: f64,
) -> Result<usize> {
    let mut shown = 0;

    for element in elements {
        if element.has_class(SHOW) || is_in_view(element.top(), viewport_height, margin) {
            element.set_class(SHOW, true)?;
            element.set_class(HIDDEN, false)?;
            shown += 1;
        }
    }

    Ok(shown)
}

fn reveal_page(window: &Window, elements: &[Element], margin: f64) -> Result<()> {
    let viewport_height = window.inner_height()?.as_f64().unwrap_or_default();
    reveal_pass(elements, viewport_height, margin)?;

    Ok(())
}

/// Reveal `elements` on load and while scrolling.
pub fn init_reveal(window: Window, elements: Vec<Element>, config: &Config) -> Result<()> {
    let margin = f64::from(config.reveal_margin);
    let elements = Rc::new(elements);

    for event_type in ["scroll", "load"] {
        let handler_window = window.clone();
        let elements = elements.clone();

        listen(&window, event_type, move |_| {
            if let Err(e) = reveal_page(&handler_window, &elements, margin) {
                warn!(format!("Could not reveal elements: {e}"));
            }
        })?;
    }

    Ok(())
}
