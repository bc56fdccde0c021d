//! Native `dragstart` events → typed application messages.
//!
//! A binding produced by [`on_drag_start`] does, per fired event:
//! 1. use the event target as the drag image (offset 0,0) with `effectAllowed = "move"`
//! 2. run the [`Decoder`] against the event
//! 3. on success: optional stopPropagation / preventDefault, then send `to_message(value)`
//! 4. on failure: nothing (the drag continues natively)
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct Card { id: String }
//!
//! let (channel, messages) = MessageChannel::new("board.messages", 16);
//! let binding = on_drag_start(
//!     EventOptions::new().stop_propagation(),
//!     decode::dataset::<web_sys::DragEvent, Card>(),
//!     |card: Card| Msg::DragStarted(card.id),
//!     channel,
//! );
//! El::new().update_raw_el(move |raw_el| raw_el.on_drag_start_binding(binding))
//! ```

#[macro_use]
mod log;

pub mod binding;
pub mod bridge;
pub mod decode;
pub mod dom;
pub mod error;
pub mod event;
pub mod options;
pub mod sink;

#[cfg(test)]
pub(crate) mod test_support;

pub use binding::ListenerBinding;
pub use bridge::{DRAG_START, EFFECT_ALLOWED, on_drag_start, on_drag_start_with_failure};
pub use decode::Decoder;
pub use dom::{AttachedListener, RawElDragExt};
pub use error::{AttachError, DecodeError};
pub use event::DragStartEvent;
pub use options::EventOptions;
pub use sink::{MessageChannel, MessageSink};
