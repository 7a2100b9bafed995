use gloo_console::warn;
use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Browser storage key holding the theme preference.
    pub storage_key: String,
    /// Quiet interval before the active nav link is recomputed.
    pub debounce_ms: u32,
    /// Pixels subtracted from a section's top before matching the scroll offset,
    /// leaves room for the sticky header.
    pub section_offset: u32,
    /// An element is revealed once its top is this far above the viewport bottom.
    pub reveal_margin: u32,
    /// Toggle glyph shown while the dark theme is active.
    pub dark_glyph: String,
    pub light_glyph: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            debounce_ms: 50,
            section_offset: 80,
            reveal_margin: 100,
            dark_glyph: "\u{2600}\u{fe0f}".to_owned(),
            light_glyph: "\u{1f319}".to_owned(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json_wasm::from_str(json)?)
    }

    /// Read overrides from the page, falling back to the defaults when the
    /// block is absent or can't be parsed.
    pub fn from_page(document: &Document) -> Self {
        let json = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|e| e.text_content());

        match json.as_deref().map(str::trim) {
            None | Some("") => Config::default(),
            Some(json) => Config::from_json(json).unwrap_or_else(|e| {
                warn!(format!("Ignoring page configuration: {e}"));
                Config::default()
            }),
        }
    }
}
