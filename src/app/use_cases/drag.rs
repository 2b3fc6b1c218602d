//! Use-Case-Funktionen für das Ziehen von Kontrollpunkten.
//!
//! Lifecycle: `begin_drag` (Hit-Test beim Drücken) → `update_drag`
//! (Punkt folgt dem Zeiger) → `end_drag` (Loslassen).

use crate::app::AppState;
use glam::Vec2;

/// Hit-Test an der Druckposition.
///
/// Bei Treffer wird der Punkt gegriffen und sofort auf die Zeigerposition
/// gesetzt; ohne Treffer ist danach kein Punkt gegriffen.
pub fn begin_drag(state: &mut AppState, screen_pos: Vec2) {
    let hit = state.curve.control_points().hit_test(
        screen_pos,
        &state.view.viewport,
        state.options.hit_box_size_px,
    );
    state.drag.grabbed = hit;

    match hit {
        Some(index) => {
            log::debug!(
                "Kontrollpunkt {} gegriffen bei ({:.1}, {:.1})",
                index,
                screen_pos.x,
                screen_pos.y
            );
            move_grabbed_to(state, screen_pos);
        }
        None => log::debug!("Kein Kontrollpunkt bei ({:.1}, {:.1})", screen_pos.x, screen_pos.y),
    }
}

/// Setzt den gegriffenen Punkt auf die Zeigerposition. Ohne Drag: No-op.
pub fn update_drag(state: &mut AppState, screen_pos: Vec2) {
    move_grabbed_to(state, screen_pos);
}

/// Lässt den gegriffenen Punkt los.
pub fn end_drag(state: &mut AppState) {
    if let Some(index) = state.drag.grabbed.take() {
        log::debug!("Kontrollpunkt {} losgelassen", index);
    }
}

/// Setzt den gegriffenen Punkt, begrenzt auf den NDC-Bereich `[-1, 1]`.
fn move_grabbed_to(state: &mut AppState, screen_pos: Vec2) {
    let Some(index) = state.drag.grabbed else {
        return;
    };
    let ndc = state
        .view
        .viewport
        .screen_to_ndc(screen_pos)
        .clamp(Vec2::NEG_ONE, Vec2::ONE);
    if !state.curve.set_point(index, ndc) {
        log::warn!("Ungültiger Kontrollpunkt-Index {} im Drag-State", index);
        state.drag.grabbed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlPoints, SampledCurve};
    use approx::assert_relative_eq;

    fn screen_of(state: &AppState, index: usize) -> Vec2 {
        let point = state.curve.control_points().as_array()[index];
        state.view.viewport.ndc_to_screen(point)
    }

    #[test]
    fn begin_drag_on_point_grabs_it() {
        let mut state = AppState::new();
        let target = screen_of(&state, 1);

        begin_drag(&mut state, target + Vec2::new(2.0, -2.0));

        assert_eq!(state.drag.grabbed, Some(1));
    }

    #[test]
    fn begin_drag_moves_point_to_pointer() {
        let mut state = AppState::new();
        let pointer = screen_of(&state, 0) + Vec2::new(3.0, 3.0);

        begin_drag(&mut state, pointer);

        let expected = state.view.viewport.screen_to_ndc(pointer);
        let moved = state.curve.control_points().as_array()[0];
        assert_relative_eq!(moved.x, expected.x);
        assert_relative_eq!(moved.y, expected.y);
    }

    #[test]
    fn begin_drag_on_empty_area_clears_grab() {
        let mut state = AppState::new();
        state.drag.grabbed = Some(2);

        begin_drag(&mut state, Vec2::new(360.0, 320.0));

        assert_eq!(state.drag.grabbed, None);
        assert_eq!(state.curve.control_points(), &ControlPoints::default());
    }

    #[test]
    fn update_drag_moves_grabbed_point_and_resamples() {
        let mut state = AppState::new();
        let pos = screen_of(&state, 2);
        begin_drag(&mut state, pos);

        update_drag(&mut state, Vec2::new(540.0, 160.0));

        let moved = state.curve.control_points().as_array()[2];
        assert_relative_eq!(moved.x, 0.5);
        assert_relative_eq!(moved.y, 0.5);
        assert_eq!(
            state.curve.sampled(),
            &SampledCurve::from_control_points(state.curve.control_points())
        );
    }

    #[test]
    fn update_drag_without_grab_is_noop() {
        let mut state = AppState::new();

        update_drag(&mut state, Vec2::new(10.0, 10.0));

        assert_eq!(state.curve.control_points(), &ControlPoints::default());
    }

    #[test]
    fn update_drag_clamps_to_visible_range() {
        let mut state = AppState::new();
        let pos = screen_of(&state, 1);
        begin_drag(&mut state, pos);

        update_drag(&mut state, Vec2::new(-500.0, 5000.0));

        let moved = state.curve.control_points().as_array()[1];
        assert_eq!(moved, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn end_drag_releases_point() {
        let mut state = AppState::new();
        let pos = screen_of(&state, 0);
        begin_drag(&mut state, pos);

        end_drag(&mut state);
        update_drag(&mut state, Vec2::new(360.0, 320.0));

        assert_eq!(state.drag.grabbed, None);
        assert_ne!(state.curve.control_points().as_array()[0], Vec2::ZERO);
    }
}
