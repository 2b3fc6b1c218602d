//! Handler für den Kontrollpunkt-Drag.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet einen Drag an der Screen-Position (Hit-Test).
pub fn begin(state: &mut AppState, screen_pos: glam::Vec2) {
    use_cases::drag::begin_drag(state, screen_pos);
}

/// Zieht den gegriffenen Punkt zur Screen-Position.
pub fn update(state: &mut AppState, screen_pos: glam::Vec2) {
    use_cases::drag::update_drag(state, screen_pos);
}

/// Lässt den gegriffenen Punkt los.
pub fn end(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}

/// Setzt alle Kontrollpunkte auf die konfigurierten Startpositionen.
pub fn reset_control_points(state: &mut AppState) {
    use_cases::curve::reset_control_points(state);
}
