//! Vertex-Generierung für die Kurve als dicke Linie.

use crate::render::types::CurveVertex;
use crate::core::Viewport;
use glam::Vec2;

/// Erzeugt ein Quad (2 Dreiecke) je Segment der Polylinie.
///
/// Die Breite wird in Screen-Pixeln gerechnet, damit die Linie bei
/// nicht-quadratischem Viewport in beiden Achsen gleich dick ist.
/// Segmente der Länge 0 werden übersprungen.
pub(super) fn build_curve_mesh(
    vertices: &mut Vec<CurveVertex>,
    points_ndc: &[Vec2],
    viewport: &Viewport,
    width_px: f32,
) {
    vertices.clear();
    for pair in points_ndc.windows(2) {
        let start = viewport.ndc_to_screen(pair[0]);
        let end = viewport.ndc_to_screen(pair[1]);
        push_line_quad(vertices, viewport, start, end, width_px);
    }
}

fn push_line_quad(
    vertices: &mut Vec<CurveVertex>,
    viewport: &Viewport,
    start: Vec2,
    end: Vec2,
    width_px: f32,
) {
    let dir = (end - start).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width_px * 0.5);

    let corners = [start + perp, start - perp, end + perp, end - perp];
    let [v0, v1, v2, v3] = corners.map(|screen| {
        let ndc = viewport.screen_to_ndc(screen);
        CurveVertex::new([ndc.x, ndc.y])
    });

    vertices.extend_from_slice(&[v0, v1, v2, v2, v1, v3]);
}
