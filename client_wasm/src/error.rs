use game_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("failed to detect display size: {0}")]
    Display(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create surface: {0}")]
    Surface(String),
    #[error("failed to find a suitable adapter")]
    Adapter,
    #[error("failed to create device: {0}")]
    Device(String),
    #[error("failed to acquire frame: {0}")]
    Frame(String),
}

impl ClientError {
    pub fn dom(err: JsValue) -> Self {
        Self::Dom(format!("{err:?}"))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
