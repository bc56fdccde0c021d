use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::event::DragStartEvent;
use crate::sink::MessageSink;

/// Everything the bridge (or a decoder) did to a [`MockDragEvent`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    DragImage { x: i32, y: i32 },
    EffectAllowed(String),
    StopPropagation,
    PreventDefault,
    /// Pushed by test decoders via [`MockDragEvent::record_decode`].
    Decode,
}

#[derive(Debug, Default)]
pub struct MockDragEvent {
    data: BTreeMap<String, String>,
    calls: RefCell<Vec<Call>>,
}

impl MockDragEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data<const N: usize>(data: [(&str, &str); N]) -> Self {
        Self {
            data: data
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn record_decode(&self) {
        self.calls.borrow_mut().push(Call::Decode);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }
}

impl DragStartEvent for MockDragEvent {
    fn use_target_as_drag_image(&self, x: i32, y: i32) {
        self.calls.borrow_mut().push(Call::DragImage { x, y });
    }

    fn set_effect_allowed(&self, effect: &str) {
        self.calls.borrow_mut().push(Call::EffectAllowed(effect.to_string()));
    }

    fn stop_propagation(&self) {
        self.calls.borrow_mut().push(Call::StopPropagation);
    }

    fn prevent_default(&self) {
        self.calls.borrow_mut().push(Call::PreventDefault);
    }

    fn target_data(&self) -> BTreeMap<String, String> {
        self.data.clone()
    }
}

/// Sink collecting every delivered message.
#[derive(Clone)]
pub struct RecordingSink<M> {
    messages: Rc<RefCell<Vec<M>>>,
}

impl<M: Clone> RecordingSink<M> {
    pub fn new() -> Self {
        Self {
            messages: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn messages(&self) -> Vec<M> {
        self.messages.borrow().clone()
    }
}

impl<M> MessageSink<M> for RecordingSink<M> {
    fn send_message(&self, message: M) {
        self.messages.borrow_mut().push(message);
    }
}
