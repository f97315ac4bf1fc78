//! Touch input events

/// One finger's contact with the screen, as delivered by the host
///
/// Coordinates are logical pixels in window space. Every event of one
/// contact carries the same `id`.
#[derive(Clone, Debug, PartialEq)]
pub enum TouchEvent {
    /// Finger down
    Started { id: u64, x: f32, y: f32, pressure: f32 },
    /// Finger moved while down
    Moved { id: u64, x: f32, y: f32, pressure: f32 },
    /// Finger lifted at (`x`, `y`)
    Ended { id: u64, x: f32, y: f32 },
    /// The host took the contact away (system gesture, incoming call)
    Cancelled { id: u64 },
}

impl TouchEvent {
    /// Contact this event belongs to
    pub fn id(&self) -> u64 {
        match *self {
            TouchEvent::Started { id, .. }
            | TouchEvent::Moved { id, .. }
            | TouchEvent::Ended { id, .. }
            | TouchEvent::Cancelled { id } => id,
        }
    }

    /// Where the finger is, `None` once the host cancelled the contact
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            TouchEvent::Started { x, y, .. }
            | TouchEvent::Moved { x, y, .. }
            | TouchEvent::Ended { x, y, .. } => Some((x, y)),
            TouchEvent::Cancelled { .. } => None,
        }
    }

    /// Whether the contact is over after this event
    pub fn is_release(&self) -> bool {
        matches!(self, TouchEvent::Ended { .. } | TouchEvent::Cancelled { .. })
    }
}
