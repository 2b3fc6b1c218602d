//! Viewport-Abbildung zwischen Screen-Pixeln und NDC.

use glam::Vec2;

/// Pixelgröße der Zeichenfläche mit Umrechnung Screen ↔ NDC.
///
/// Screen-Koordinaten haben ihren Ursprung oben links (y wächst nach unten),
/// NDC liegen in `[-1, 1]` pro Achse mit y nach oben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    size: Vec2,
}

impl Viewport {
    /// Erstellt einen Viewport mit gegebener Pixelgröße.
    ///
    /// Nicht-endliche oder nicht-positive Achsen werden auf 1 px gesetzt,
    /// damit die Abbildung nie durch 0 teilt.
    pub fn new(size: Vec2) -> Self {
        Self {
            size: Vec2::new(sanitize_extent(size.x), sanitize_extent(size.y)),
        }
    }

    /// Pixelgröße [Breite, Höhe].
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Halbe Pixelgröße pro Achse.
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Konvertiert Screen-Koordinaten (Pixel) zu NDC.
    ///
    /// `ndc = (px - size/2) / (size/2)`, y wird gespiegelt.
    pub fn screen_to_ndc(&self, screen_pos: Vec2) -> Vec2 {
        let half = self.half_size();
        Vec2::new(
            (screen_pos.x - half.x) / half.x,
            ((self.size.y - screen_pos.y) - half.y) / half.y,
        )
    }

    /// Konvertiert NDC zu Screen-Koordinaten (Umkehrung von `screen_to_ndc`).
    pub fn ndc_to_screen(&self, ndc: Vec2) -> Vec2 {
        let half = self.half_size();
        Vec2::new(ndc.x * half.x + half.x, -ndc.y * half.y + half.y)
    }

    /// Rechnet eine Pixel-Länge in eine NDC-Ausdehnung pro Achse um.
    pub fn pixels_to_ndc_extent(&self, pixels: f32) -> Vec2 {
        Vec2::splat(pixels) / self.half_size()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Vec2::new(720.0, 640.0))
    }
}

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}
