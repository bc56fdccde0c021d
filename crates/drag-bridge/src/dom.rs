//! Attaching a drag-start binding to real DOM elements.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::RawEl;

use crate::binding::ListenerBinding;
use crate::error::AttachError;

/// Registered DOM listener. Dropping it removes the listener.
pub struct AttachedListener {
    target: web_sys::EventTarget,
    event_name: &'static str,
    closure: Closure<dyn FnMut(web_sys::DragEvent)>,
}

impl AttachedListener {
    pub fn event_name(&self) -> &'static str {
        self.event_name
    }
}

impl Drop for AttachedListener {
    fn drop(&mut self) {
        if let Err(error) = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.closure.as_ref().unchecked_ref(),
        ) {
            drag_log!(
                "[DRAG] {}",
                AttachError::from_js(self.event_name, error).detach_message()
            );
        }
    }
}

impl ListenerBinding<web_sys::DragEvent> {
    /// `target.addEventListener(event_name, handler)`.
    pub fn attach(self, target: &web_sys::EventTarget) -> Result<AttachedListener, AttachError> {
        let event_name = self.event_name();
        let handler = self.handler();
        let closure = Closure::wrap(
            Box::new(move |event: web_sys::DragEvent| handler(&event)) as Box<dyn FnMut(_)>
        );
        target
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
            .map_err(|error| AttachError::from_js(event_name, error))?;
        Ok(AttachedListener {
            target: target.clone(),
            event_name,
            closure,
        })
    }
}

/// Drag-start bindings on zoon raw elements.
pub trait RawElDragExt: RawEl + Sized {
    /// Mark the element `draggable` and listen with `binding` until the element is removed.
    ///
    /// A rejected listener is reported on the console and the element is returned unchanged;
    /// use [`RawElDragExt::try_on_drag_start_binding`] to handle it instead.
    fn on_drag_start_binding(self, binding: ListenerBinding<web_sys::DragEvent>) -> Self {
        let dom_element = self.dom_element();
        match attach_to_dom_element(&dom_element, binding) {
            Ok(listener) => with_listener(self, listener),
            Err(error) => {
                #[cfg(target_arch = "wasm32")]
                zoon::eprintln!("[DRAG] {}", error);
                #[cfg(not(target_arch = "wasm32"))]
                std::eprintln!("[DRAG] {}", error);
                self
            }
        }
    }

    /// [`RawElDragExt::on_drag_start_binding`], returning the attach error to the caller.
    fn try_on_drag_start_binding(
        self,
        binding: ListenerBinding<web_sys::DragEvent>,
    ) -> Result<Self, AttachError> {
        let dom_element = self.dom_element();
        let listener = attach_to_dom_element(&dom_element, binding)?;
        Ok(with_listener(self, listener))
    }
}

impl<T: RawEl> RawElDragExt for T {}

fn attach_to_dom_element<D: JsCast>(
    dom_element: &D,
    binding: ListenerBinding<web_sys::DragEvent>,
) -> Result<AttachedListener, AttachError> {
    binding.attach(dom_element.unchecked_ref::<web_sys::EventTarget>())
}

fn with_listener<R: RawEl>(raw_el: R, listener: AttachedListener) -> R {
    raw_el
        .attr("draggable", "true")
        .after_remove(move |_| drop(listener))
}
