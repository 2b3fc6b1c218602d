use crate::core::Viewport;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Zeichenfläche (Pixelgröße, Screen ↔ NDC)
    pub viewport: Viewport,
}

impl ViewState {
    /// Erstellt den View-Zustand für eine Start-Größe in Pixeln.
    pub fn new(size: [f32; 2]) -> Self {
        Self {
            viewport: Viewport::new(glam::Vec2::from(size)),
        }
    }
}
