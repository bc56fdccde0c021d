use wasm_bindgen::JsValue;

/// The decoder could not extract a value from the event.
///
/// Never escapes a drag-start handler; see [`crate::on_drag_start_with_failure`]
/// for observing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    reason: String,
}

impl DecodeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Human-readable reason, e.g. "missing field `id`".
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "decode failed: {}", self.reason)
    }
}

impl std::error::Error for DecodeError {}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// `addEventListener` rejected the listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachError {
    event_name: &'static str,
    message: String,
}

impl AttachError {
    pub(crate) fn from_js(event_name: &'static str, error: JsValue) -> Self {
        Self {
            event_name,
            message: error.as_string().unwrap_or_else(|| format!("{:?}", error)),
        }
    }

    pub(crate) fn detach_message(&self) -> String {
        format!("failed to detach '{}' listener: {}", self.event_name, self.message)
    }
}

impl std::fmt::Display for AttachError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to attach '{}' listener: {}", self.event_name, self.message)
    }
}

impl std::error::Error for AttachError {}
