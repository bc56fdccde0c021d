//! The drag-start handler: drag image → decode → suppression → message.

use crate::binding::ListenerBinding;
use crate::decode::Decoder;
use crate::error::DecodeError;
use crate::event::DragStartEvent;
use crate::options::EventOptions;
use crate::sink::MessageSink;

pub const DRAG_START: &str = "dragstart";

/// `dataTransfer.effectAllowed` set on every drag start.
pub const EFFECT_ALLOWED: &str = "move";

/// Bind `dragstart` to `sink`.
///
/// On every event the target becomes the drag image (offset 0,0, effect "move"),
/// whatever the decoder says. Then, only if `decoder` succeeds, the selected
/// suppression actions run and `to_message(value)` is sent.
/// A failed decode is ignored: the drag continues natively.
pub fn on_drag_start<E, T, M>(
    options: EventOptions,
    decoder: Decoder<E, T>,
    to_message: impl Fn(T) -> M + 'static,
    sink: impl MessageSink<M> + 'static,
) -> ListenerBinding<E>
where
    E: DragStartEvent + 'static,
    T: 'static,
    M: 'static,
{
    on_drag_start_with_failure(options, decoder, to_message, sink, |_| {})
}

/// [`on_drag_start`] with a hook observing decode failures.
///
/// The hook sees the error only; failures still suppress nothing and send nothing.
pub fn on_drag_start_with_failure<E, T, M>(
    options: EventOptions,
    decoder: Decoder<E, T>,
    to_message: impl Fn(T) -> M + 'static,
    sink: impl MessageSink<M> + 'static,
    on_failure: impl Fn(&DecodeError) + 'static,
) -> ListenerBinding<E>
where
    E: DragStartEvent + 'static,
    T: 'static,
    M: 'static,
{
    ListenerBinding::new(DRAG_START, move |event: &E| {
        event.use_target_as_drag_image(0, 0);
        event.set_effect_allowed(EFFECT_ALLOWED);

        match decoder.decode(event) {
            Ok(value) => {
                // Suppression must be visible to the platform before anything else reacts.
                if options.stop_propagation {
                    event.stop_propagation();
                }
                if options.prevent_default {
                    event.prevent_default();
                }
                sink.send_message(to_message(value));
            }
            Err(error) => {
                drag_log!("[DRAG] dragstart ignored: {}", error);
                on_failure(&error);
            }
        }
    })
}
