//! Forwarding of cell clicks to a single registered listener.
//!
//! One listener at a time; registering a new one replaces the old. With no
//! listener set, clicks are dropped. Callers that need to react elsewhere can
//! register a channel sender as the listener.

use crate::Point;

/// Callback invoked with the model point of a clicked cell.
pub type FieldListener = Box<dyn FnMut(Point) + Send>;

/// Single-slot click dispatch.
#[derive(Default)]
pub struct ClickRouter {
    listener: Option<FieldListener>,
}

impl ClickRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: FieldListener) {
        self.listener = Some(listener);
    }

    /// Remove the listener, dropping subsequent clicks.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Forward a clicked point to the listener, if any.
    pub fn field_clicked(&mut self, p: Point) {
        if let Some(listener) = &mut self.listener {
            listener(p);
        }
    }
}
