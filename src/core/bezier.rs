//! Quadratische Bézier-Auswertung und Abtastung der Kurve.

use super::control_points::ControlPoints;
use glam::Vec2;

/// Anzahl der Abtastpunkte pro Kurve (`t = i / 100`, `i ∈ [0, 100)`).
pub const CURVE_SAMPLE_COUNT: usize = 100;

/// Lineare Interpolation zwischen `a` und `b`.
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// B(t) = lerp(lerp(P0, P1, t), lerp(P1, P2, t), t)
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    lerp(lerp(p0, p1, t), lerp(p1, p2, t), t)
}

/// Abgetastete Kurve mit fester Länge.
///
/// Wird bei jeder Änderung der Kontrollpunkte komplett überschrieben.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    points: [Vec2; CURVE_SAMPLE_COUNT],
}

impl SampledCurve {
    /// Tastet die Kurve der gegebenen Kontrollpunkte ab.
    pub fn from_control_points(control_points: &ControlPoints) -> Self {
        let mut curve = Self {
            points: [Vec2::ZERO; CURVE_SAMPLE_COUNT],
        };
        curve.resample(control_points);
        curve
    }

    /// Überschreibt alle Abtastpunkte aus den aktuellen Kontrollpunkten.
    pub fn resample(&mut self, control_points: &ControlPoints) {
        let [p0, p1, p2] = *control_points.as_array();
        for (i, point) in self.points.iter_mut().enumerate() {
            let t = i as f32 / CURVE_SAMPLE_COUNT as f32;
            *point = quadratic_bezier(p0, p1, p2, t);
        }
    }

    /// Alle Abtastpunkte in Parameter-Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Alle Abtastpunkte als Array fester Länge.
    pub fn as_array(&self) -> &[Vec2; CURVE_SAMPLE_COUNT] {
        &self.points
    }

    /// Anzahl der Abtastpunkte (immer `CURVE_SAMPLE_COUNT`).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`, eine abgetastete Kurve hat stets Punkte.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
