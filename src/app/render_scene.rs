//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        control_points: *state.curve.control_points().as_array(),
        curve_points: *state.curve.sampled().as_array(),
        grabbed_point: state.drag.grabbed,
        viewport_size,
        options: state.options.clone(),
    }
}
