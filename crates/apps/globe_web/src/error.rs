use std::fmt;

/// Why a widget could not be set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The page (window, document, container) rejected an operation.
    Dom(String),
    /// A renderer surface could not be created.
    Renderer(String),
    /// The globe layer rejected its configuration or data.
    Globe(String),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::Dom(msg) => write!(f, "DOM error: {msg}"),
            WidgetError::Renderer(msg) => write!(f, "renderer error: {msg}"),
            WidgetError::Globe(msg) => write!(f, "globe layer error: {msg}"),
        }
    }
}

impl std::error::Error for WidgetError {}
