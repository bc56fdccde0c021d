//! Decoders: `&E -> Result<T, DecodeError>`, composable.
//!
//! A decoder must report malformed input through `Err`, never by panicking.

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::event::DragStartEvent;

/// Cloneable, stateless extraction of a `T` from an event `E`.
pub struct Decoder<E, T> {
    run: Rc<dyn Fn(&E) -> Result<T, DecodeError>>,
}

impl<E, T> Clone for Decoder<E, T> {
    fn clone(&self) -> Self {
        Self {
            run: self.run.clone(),
        }
    }
}

impl<E: 'static, T: 'static> Decoder<E, T> {
    pub fn new(run: impl Fn(&E) -> Result<T, DecodeError> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Always fails with `reason`.
    pub fn fail(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::new(move |_| Err(DecodeError::new(reason.clone())))
    }

    pub fn decode(&self, event: &E) -> Result<T, DecodeError> {
        (self.run)(event)
    }

    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Decoder<E, U> {
        Decoder::new(move |event| self.decode(event).map(&f))
    }

    /// Validate or convert a decoded value; `Err` turns the whole decode into a failure.
    pub fn and_then<U: 'static>(
        self,
        f: impl Fn(T) -> Result<U, DecodeError> + 'static,
    ) -> Decoder<E, U> {
        Decoder::new(move |event| self.decode(event).and_then(&f))
    }

    /// Try `self`, then `other`. Reports `other`'s failure when both fail.
    pub fn or(self, other: Decoder<E, T>) -> Self {
        Decoder::new(move |event| self.decode(event).or_else(|_| other.decode(event)))
    }
}

impl<E: 'static, T: Clone + 'static> Decoder<E, T> {
    /// Always succeeds with `value`, ignoring the event.
    pub fn succeed(value: T) -> Self {
        Self::new(move |_| Ok(value.clone()))
    }
}

impl<E, T> std::fmt::Debug for Decoder<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder").finish_non_exhaustive()
    }
}

/// One `data-*` attribute of the event target, by dataset key (`"cardId"` for `data-card-id`).
pub fn data_attribute<E: DragStartEvent + 'static>(key: impl Into<String>) -> Decoder<E, String> {
    let key = key.into();
    Decoder::new(move |event: &E| {
        event
            .target_data()
            .remove(&key)
            .ok_or_else(|| DecodeError::new(format!("missing data attribute {}", key)))
    })
}

/// All `data-*` attributes of the event target deserialized into `T`.
///
/// Attribute values are strings, so `T`'s fields should be `String`s
/// (or deserialize from strings).
pub fn dataset<E: DragStartEvent + 'static, T: DeserializeOwned + 'static>() -> Decoder<E, T> {
    Decoder::new(|event: &E| {
        let object = event
            .target_data()
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::String(value)))
            .collect::<serde_json::Map<_, _>>();
        Ok(serde_json::from_value(serde_json::Value::Object(object))?)
    })
}
