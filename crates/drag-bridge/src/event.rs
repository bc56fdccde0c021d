//! The slice of a native drag-start event the bridge touches.

use std::collections::BTreeMap;

use wasm_bindgen::JsCast;

/// Native drag-start event as seen by the bridge and by decoders.
///
/// Implemented for [`web_sys::DragEvent`]. Tests implement it with a recording mock.
pub trait DragStartEvent {
    /// `dataTransfer.setDragImage(event.target, x, y)`
    fn use_target_as_drag_image(&self, x: i32, y: i32);

    /// `dataTransfer.effectAllowed = effect`
    fn set_effect_allowed(&self, effect: &str);

    fn stop_propagation(&self);

    fn prevent_default(&self);

    /// `data-*` attributes of the event target, keyed like `HTMLElement.dataset`
    /// (`data-card-id` → `cardId`). Empty when the target is not an element.
    fn target_data(&self) -> BTreeMap<String, String>;
}

impl DragStartEvent for web_sys::DragEvent {
    fn use_target_as_drag_image(&self, x: i32, y: i32) {
        let Some(data_transfer) = self.data_transfer() else {
            drag_log!("[DRAG] dragstart without dataTransfer, drag image not set");
            return;
        };
        if let Some(target) = target_element(self) {
            data_transfer.set_drag_image(&target, x, y);
        }
    }

    fn set_effect_allowed(&self, effect: &str) {
        if let Some(data_transfer) = self.data_transfer() {
            data_transfer.set_effect_allowed(effect);
        }
    }

    // Called through `Event` explicitly; `self.stop_propagation()` would resolve to this trait method.
    fn stop_propagation(&self) {
        web_sys::Event::stop_propagation(self);
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn target_data(&self) -> BTreeMap<String, String> {
        let Some(target) = target_element(self) else {
            return BTreeMap::new();
        };
        target
            .get_attribute_names()
            .iter()
            .filter_map(|name| name.as_string())
            .filter_map(|name| {
                let key = dataset_key(&name)?;
                let value = target.get_attribute(&name)?;
                Some((key, value))
            })
            .collect()
    }
}

fn target_element(event: &web_sys::DragEvent) -> Option<web_sys::Element> {
    event.target()?.dyn_into::<web_sys::Element>().ok()
}

/// `data-card-id` → `Some("cardId")`, non-`data-` attributes → `None`.
pub(crate) fn dataset_key(attribute_name: &str) -> Option<String> {
    let rest = attribute_name.strip_prefix("data-")?;
    let mut key = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('-', Some(next)) if next.is_ascii_lowercase() => {
                key.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => key.push(c),
        }
    }
    Some(key)
}
