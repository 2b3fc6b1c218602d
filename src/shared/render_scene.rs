//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::DemoOptions;
use crate::core::{CONTROL_POINT_COUNT, CURVE_SAMPLE_COUNT};
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in NDC
    pub control_points: [Vec2; CONTROL_POINT_COUNT],
    /// Abgetastete Kurve in NDC
    pub curve_points: [Vec2; CURVE_SAMPLE_COUNT],
    /// Index des gerade gezogenen Kontrollpunkts
    pub grabbed_point: Option<usize>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: DemoOptions,
}

impl RenderScene {
    /// Gibt zurück, ob der Viewport eine zeichenbare Fläche hat.
    pub fn has_area(&self) -> bool {
        let [width, height] = self.viewport_size;
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }
}
