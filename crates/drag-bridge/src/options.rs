//! Per-binding suppression flags.

use serde::{Deserialize, Serialize};

/// Which native suppression actions run when the decoder succeeds.
///
/// Both are off by default. They are never applied when decoding fails.
///
/// Deserializes from `{"stopPropagation": bool, "preventDefault": bool}`,
/// missing keys default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventOptions {
    pub stop_propagation: bool,
    pub prevent_default: bool,
}

impl EventOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop propagation of events the decoder accepts.
    pub fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    /// Prevent the default action of events the decoder accepts.
    pub fn prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suppresses_nothing() {
        let options = EventOptions::new();
        assert!(!options.stop_propagation);
        assert!(!options.prevent_default);
    }

    #[test]
    fn test_builder_flags_are_independent() {
        let options = EventOptions::new().prevent_default();
        assert!(!options.stop_propagation);
        assert!(options.prevent_default);

        let options = EventOptions::new().stop_propagation();
        assert!(options.stop_propagation);
        assert!(!options.prevent_default);
    }

    #[test]
    fn test_deserialize_from_json() {
        let options: EventOptions =
            serde_json::from_str(r#"{"stopPropagation": true, "preventDefault": false}"#).unwrap();
        assert_eq!(options, EventOptions::new().stop_propagation());

        let options: EventOptions = serde_json::from_str(r#"{"preventDefault": true}"#).unwrap();
        assert_eq!(options, EventOptions::new().prevent_default());

        let options: EventOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EventOptions::default());
    }
}
