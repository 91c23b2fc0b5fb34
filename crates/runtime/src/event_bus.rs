/// Ordered queue of events raised by one producer and drained by its owner.
///
/// Producers never call back into their consumers; the owner drains after
/// each operation that may have emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct EventQueue<E> {
    events: Vec<E>,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: E) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }
}
