//! Where decoded drag starts are delivered.
//!
//! The handler runs synchronously inside native event dispatch, so every sink
//! here is non-blocking: full or closed channels drop the message (and log it
//! with `debug-events`).

use std::cell::RefCell;
use std::rc::Rc;

use futures_channel::mpsc;
use zoon::Mutable;

/// Accepts application messages produced by a drag-start binding.
pub trait MessageSink<M> {
    fn send_message(&self, message: M);
}

/// Named bounded channel for application messages.
///
/// The name only identifies the channel in dropped-message logs.
/// Holds one sender handle per clone, so up to `capacity + 1` messages
/// queue per handle before `send_or_drop` starts dropping.
///
/// ```ignore
/// let (channel, mut messages) = MessageChannel::new("board.messages", 16);
/// Task::start(async move {
///     while let Some(message) = messages.next().await {
///         board.update(message);
///     }
/// });
/// ```
pub struct MessageChannel<M> {
    inner: RefCell<mpsc::Sender<M>>,
    name: &'static str,
    capacity: usize,
}

impl<M> Clone for MessageChannel<M> {
    fn clone(&self) -> Self {
        Self {
            inner: RefCell::new(self.inner.borrow().clone()),
            name: self.name,
            capacity: self.capacity,
        }
    }
}

impl<M> MessageChannel<M> {
    /// Create a named bounded channel with the specified capacity.
    ///
    /// Returns (sender, receiver).
    pub fn new(name: &'static str, capacity: usize) -> (Self, mpsc::Receiver<M>) {
        let (tx, rx) = mpsc::channel(capacity);
        (
            Self {
                inner: RefCell::new(tx),
                name,
                capacity,
            },
            rx,
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fire-and-forget send, logs if dropped.
    pub fn send_or_drop(&self, message: M) {
        if let Err(error) = self.try_send(message) {
            if error.is_full() {
                drag_log!(
                    "[DRAG] '{}' dropped message (full, capacity: {})",
                    self.name,
                    self.capacity
                );
            } else {
                drag_log!("[DRAG] '{}' dropped message (receiver dropped)", self.name);
            }
        }
    }

    /// Try send with explicit result.
    pub fn try_send(&self, message: M) -> Result<(), mpsc::TrySendError<M>> {
        self.inner.borrow_mut().try_send(message)
    }

    /// Receiver dropped.
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().is_closed()
    }
}

impl<M> MessageSink<M> for MessageChannel<M> {
    fn send_message(&self, message: M) {
        self.send_or_drop(message);
    }
}

impl<M> MessageSink<M> for mpsc::UnboundedSender<M> {
    fn send_message(&self, message: M) {
        if self.unbounded_send(message).is_err() {
            drag_log!("[DRAG] unbounded channel closed, message dropped");
        }
    }
}

/// Holds the latest message; observers follow it through `signal_cloned()`.
impl<M> MessageSink<M> for Mutable<Option<M>> {
    fn send_message(&self, message: M) {
        self.set(Some(message));
    }
}

/// Callback sink; accepts both `Rc::new(closure)` and `Rc<dyn Fn(M)>`.
impl<M, F: Fn(M) + ?Sized> MessageSink<M> for Rc<F> {
    fn send_message(&self, message: M) {
        (**self)(message);
    }
}
