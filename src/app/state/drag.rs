/// Zustand des Kontrollpunkt-Drags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    /// Index des gegriffenen Kontrollpunkts (None = nichts gegriffen)
    pub grabbed: Option<usize>,
}

impl DragState {
    /// Erstellt einen leeren Drag-Zustand.
    pub fn new() -> Self {
        Self { grabbed: None }
    }

    /// Gibt zurück, ob gerade ein Punkt gezogen wird.
    pub fn is_active(&self) -> bool {
        self.grabbed.is_some()
    }
}
