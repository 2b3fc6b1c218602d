//! Die drei Kontrollpunkte der Kurve und der Screen-Space-Hit-Test.

use super::viewport::Viewport;
use glam::Vec2;

/// Anzahl der Kontrollpunkte einer quadratischen Bézier-Kurve.
pub const CONTROL_POINT_COUNT: usize = 3;

/// Standard-Positionen der Kontrollpunkte (NDC).
pub const DEFAULT_CONTROL_POINTS: [[f32; 2]; CONTROL_POINT_COUNT] =
    [[-0.75, -0.75], [0.0, 0.75], [0.75, -0.75]];

/// Genau drei Kontrollpunkte in NDC, Index 0–2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    points: [Vec2; CONTROL_POINT_COUNT],
}

impl ControlPoints {
    /// Erstellt ein Kontrollpunkt-Set aus drei Positionen.
    pub fn new(points: [Vec2; CONTROL_POINT_COUNT]) -> Self {
        Self { points }
    }

    /// Erstellt ein Kontrollpunkt-Set aus serialisierbaren Arrays (Optionen).
    pub fn from_arrays(points: [[f32; 2]; CONTROL_POINT_COUNT]) -> Self {
        Self::new(points.map(Vec2::from))
    }

    /// Position des Punkts `index`, `None` außerhalb von 0–2.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Setzt den Punkt `index`. Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn set(&mut self, index: usize, position: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = position;
                true
            }
            None => false,
        }
    }

    /// Iteriert über alle Punkte in Index-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Alle Punkte als Array.
    pub fn as_array(&self) -> &[Vec2; CONTROL_POINT_COUNT] {
        &self.points
    }

    /// Sucht den Kontrollpunkt, dessen Hitbox `screen_pos` enthält.
    ///
    /// Die Hitbox ist ein achsparalleles Quadrat mit Kantenlänge `box_size_px`
    /// um die Screen-Projektion des Punkts; Ränder zählen als Treffer.
    /// Bei Überlappung gewinnt der kleinste Index.
    pub fn hit_test(&self, screen_pos: Vec2, viewport: &Viewport, box_size_px: f32) -> Option<usize> {
        let half = box_size_px.max(0.0) * 0.5;
        self.points.iter().position(|&point| {
            let center = viewport.ndc_to_screen(point);
            let lower = center - Vec2::splat(half);
            let upper = center + Vec2::splat(half);
            lower.cmple(screen_pos).all() && upper.cmpge(screen_pos).all()
        })
    }
}

impl Default for ControlPoints {
    fn default() -> Self {
        Self::from_arrays(DEFAULT_CONTROL_POINTS)
    }
}
