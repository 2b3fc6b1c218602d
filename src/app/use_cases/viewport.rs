//! Use-Case-Funktionen für den Viewport.

use crate::app::AppState;
use crate::core::Viewport;

/// Übernimmt eine neue Viewport-Größe.
///
/// Nicht-endliche oder nicht-positive Größen (z.B. minimiertes Fenster)
/// werden ignoriert, der letzte gültige Viewport bleibt bestehen.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    let [width, height] = size;
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return;
    }
    let size = glam::Vec2::new(width, height);
    if state.view.viewport.size() != size {
        state.view.viewport = Viewport::new(size);
        log::debug!("Viewport resized to {:.0}x{:.0}", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport() {
        let mut state = AppState::new();

        resize(&mut state, [1024.0, 768.0]);

        assert_eq!(state.view.viewport.size(), glam::Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn resize_ignores_degenerate_sizes() {
        let mut state = AppState::new();
        let before = state.view.viewport;

        resize(&mut state, [0.0, 768.0]);
        resize(&mut state, [f32::NAN, 100.0]);
        resize(&mut state, [100.0, -1.0]);

        assert_eq!(state.view.viewport, before);
    }
}
