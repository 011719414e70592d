//! Observer list for playfield changes
//!
//! Callbacks run synchronously, in registration order, after each committed
//! mutation of the field.

use std::fmt;

use crate::playfield::Playfield;

/// A boxed observer callback
pub type Observer = Box<dyn FnMut(&Playfield)>;

#[derive(Default)]
pub struct Observers {
    list: Vec<Observer>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, observer: Observer) {
        self.list.push(observer);
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Call every observer with `field`, in order
    pub fn notify(&mut self, field: &Playfield) {
        for observer in &mut self.list {
            observer(field);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.list.len())
            .finish()
    }
}
