use crate::core::{ControlPoints, SampledCurve};
use glam::Vec2;

/// Kontrollpunkte und die daraus abgetastete Kurve.
///
/// Jede Mutation der Kontrollpunkte tastet die Kurve sofort neu ab,
/// die beiden Felder können dadurch nicht auseinanderlaufen.
#[derive(Debug, Clone)]
pub struct CurveState {
    control_points: ControlPoints,
    sampled: SampledCurve,
}

impl CurveState {
    /// Erstellt den Kurvenzustand aus gegebenen Kontrollpunkten.
    pub fn new(control_points: ControlPoints) -> Self {
        Self {
            sampled: SampledCurve::from_control_points(&control_points),
            control_points,
        }
    }

    /// Aktuelle Kontrollpunkte.
    pub fn control_points(&self) -> &ControlPoints {
        &self.control_points
    }

    /// Abgetastete Kurve der aktuellen Kontrollpunkte.
    pub fn sampled(&self) -> &SampledCurve {
        &self.sampled
    }

    /// Verschiebt einen Kontrollpunkt und tastet neu ab.
    /// Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn set_point(&mut self, index: usize, position: Vec2) -> bool {
        if !self.control_points.set(index, position) {
            return false;
        }
        self.sampled.resample(&self.control_points);
        true
    }

    /// Ersetzt alle Kontrollpunkte und tastet neu ab.
    pub fn reset(&mut self, control_points: ControlPoints) {
        self.control_points = control_points;
        self.sampled.resample(&self.control_points);
    }
}

impl Default for CurveState {
    fn default() -> Self {
        Self::new(ControlPoints::default())
    }
}
