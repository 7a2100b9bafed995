use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::{Error, Result};

/// Something carrying a CSS class list.
pub trait ClassTarget {
    fn has_class(&self, class: &str) -> bool;
    fn set_class(&self, class: &str, on: bool) -> Result<()>;
}

pub trait NavLink: ClassTarget {
    fn href(&self) -> Option<String>;
}

pub trait Revealable: ClassTarget {
    /// Distance from the top of the viewport to the top of the element.
    fn top(&self) -> f64;
}

pub trait GlyphTarget {
    fn set_glyph(&self, glyph: &str);
}

impl ClassTarget for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) -> Result<()> {
        if on {
            self.class_list().add_1(class)?;
        } else {
            self.class_list().remove_1(class)?;
        }

        Ok(())
    }
}

impl NavLink for Element {
    fn href(&self) -> Option<String> {
        self.get_attribute("href")
    }
}

impl Revealable for Element {
    fn top(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }
}

impl GlyphTarget for Element {
    fn set_glyph(&self, glyph: &str) {
        self.set_inner_html(glyph);
    }
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn required_by_id(document: &Document, id: &str) -> Result<Element> {
    by_id(document, id).ok_or_else(|| Error::MissingElement(format!("#{id}")))
}

/// Static snapshot of all elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
