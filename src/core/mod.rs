//! Core-Domänentypen: Viewport-Abbildung, Kontrollpunkte, Bézier-Abtastung.

pub mod bezier;
pub mod control_points;
pub mod viewport;

pub use bezier::{lerp, quadratic_bezier, SampledCurve, CURVE_SAMPLE_COUNT};
pub use control_points::{ControlPoints, CONTROL_POINT_COUNT, DEFAULT_CONTROL_POINTS};
pub use viewport::Viewport;
