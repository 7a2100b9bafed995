use std::rc::Rc;

use gloo_console::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::{
    config::Config,
    debounce::Debouncer,
    dom::{query_all, ClassTarget, NavLink},
    error::Result,
    events::listen,
};

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
const SECTION_SELECTOR: &str = "section[id]";
const ACTIVE: &str = "active";

/// Layout of a page section at the time of measuring.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let top = self.top - offset;
        scroll_y >= top && scroll_y < top + self.height
    }
}

/// Section the page is scrolled into. Overlapping ranges resolve to the last
/// match in document order.
pub fn active_section(
    scroll_y: f64,
    offset: f64,
    sections: &[SectionBounds],
) -> Option<&SectionBounds> {
    sections.iter().rev().find(|s| s.contains(scroll_y, offset))
}

/// Index of the first link whose href mentions `section_id`.
pub fn link_for<L: NavLink>(links: &[L], section_id: &str) -> Option<usize> {
    links
        .iter()
        .position(|l| l.href().is_some_and(|href| href.contains(section_id)))
}

/// Move the active marker to the link of the section at `scroll_y`.
///
/// When no section matches the links are left untouched.
pub fn highlight<L: NavLink>(
    scroll_y: f64,
    offset: f64,
    sections: &[SectionBounds],
    links: &[L],
) -> Result<Option<String>> {
    let Some(section) = active_section(scroll_y, offset, sections) else {
        return Ok(None);
    };

    for link in links {
        link.set_class(ACTIVE, false)?;
    }

    if let Some(index) = link_for(links, &section.id) {
        links[index].set_class(ACTIVE, true)?;
    }

    Ok(Some(section.id.clone()))
}

fn measure_sections(document: &Document) -> Result<Vec<SectionBounds>> {
    Ok(query_all(document, SECTION_SELECTOR)?
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
        .map(|e| SectionBounds {
            id: e.id(),
            top: f64::from(e.offset_top()),
            height: f64::from(e.offset_height()),
        })
        .collect())
}

fn highlight_page(
    window: &Window,
    document: &Document,
    links: &[Element],
    offset: f64,
) -> Result<()> {
    let scroll_y = window.page_y_offset()?;
    let sections = measure_sections(document)?;
    highlight(scroll_y, offset, &sections, links)?;

    Ok(())
}

/// Recompute the active link a short while after scrolling stops.
pub fn init_nav_highlight(
    window: Window,
    document: Document,
    links: Vec<Element>,
    config: &Config,
) -> Result<()> {
    let debouncer = Debouncer::new(config.debounce_ms);
    let offset = f64::from(config.section_offset);
    let target = window.clone();
    let links = Rc::new(links);

    listen(&target, "scroll", move |_| {
        let window = window.clone();
        let document = document.clone();
        let links = links.clone();

        debouncer.call(move || {
            if let Err(e) = highlight_page(&window, &document, &links, offset) {
                warn!(format!("Could not highlight navigation: {e}"));
            }
        });
    })
}
