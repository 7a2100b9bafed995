use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("required element {0} not found")]
    MissingElement(String),
    #[error("javascript error {0}")]
    Js(String),
    #[error("invalid configuration {0}")]
    Config(#[from] serde_json_wasm::de::Error),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
