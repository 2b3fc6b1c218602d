//! Use-Case-Funktionen für die Kurve als Ganzes.

use crate::app::AppState;
use crate::core::ControlPoints;

/// Setzt die Kontrollpunkte auf die konfigurierten Startpositionen
/// und lässt einen eventuell gegriffenen Punkt los.
pub fn reset_control_points(state: &mut AppState) {
    state.drag.grabbed = None;
    state
        .curve
        .reset(ControlPoints::from_arrays(state.options.initial_control_points));
    log::info!("Kontrollpunkte zurückgesetzt");
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn reset_restores_initial_points_and_releases_drag() {
        let mut state = AppState::new();
        state.curve.set_point(0, Vec2::new(0.3, 0.3));
        state.drag.grabbed = Some(0);

        reset_control_points(&mut state);

        assert_eq!(state.curve.control_points(), &ControlPoints::default());
        assert_eq!(state.drag.grabbed, None);
    }

    #[test]
    fn reset_uses_configured_initial_points() {
        let mut state = AppState::new();
        state.options.initial_control_points = [[0.0, 0.0], [0.5, 0.5], [1.0, 0.0]];

        reset_control_points(&mut state);

        assert_eq!(state.curve.control_points().get(1), Some(Vec2::new(0.5, 0.5)));
    }
}
