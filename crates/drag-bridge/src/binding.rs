use std::rc::Rc;

/// `(event name, handler)` pair ready to be attached to an element.
///
/// Attach it with [`ListenerBinding::attach`] / [`crate::RawElDragExt`], or hand
/// [`ListenerBinding::into_property`] to another rendering layer.
pub struct ListenerBinding<E> {
    event_name: &'static str,
    handler: Rc<dyn Fn(&E)>,
}

impl<E> Clone for ListenerBinding<E> {
    fn clone(&self) -> Self {
        Self {
            event_name: self.event_name,
            handler: self.handler.clone(),
        }
    }
}

impl<E> ListenerBinding<E> {
    pub(crate) fn new(event_name: &'static str, handler: impl Fn(&E) + 'static) -> Self {
        Self {
            event_name,
            handler: Rc::new(handler),
        }
    }

    pub fn event_name(&self) -> &'static str {
        self.event_name
    }

    /// Element property key: `"on" + event_name`.
    pub fn property_key(&self) -> String {
        format!("on{}", self.event_name)
    }

    /// Run the handler as if the platform dispatched `event`.
    pub fn handle(&self, event: &E) {
        (self.handler)(event)
    }

    pub fn handler(&self) -> Rc<dyn Fn(&E)> {
        self.handler.clone()
    }

    pub fn into_property(self) -> (String, Rc<dyn Fn(&E)>) {
        (self.property_key(), self.handler)
    }
}

impl<E> std::fmt::Debug for ListenerBinding<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerBinding")
            .field("event_name", &self.event_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_property_key() {
        let binding = ListenerBinding::<()>::new("dragstart", |_| {});
        assert_eq!(binding.event_name(), "dragstart");
        assert_eq!(binding.property_key(), "ondragstart");
    }

    #[test]
    fn test_into_property_keeps_handler() {
        let calls = Rc::new(Cell::new(0));
        let binding = ListenerBinding::<u8>::new("dragstart", {
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });

        binding.handle(&0);
        let (key, handler) = binding.clone().into_property();
        handler(&1);

        assert_eq!(key, "ondragstart");
        assert_eq!(calls.get(), 2);
    }
}
