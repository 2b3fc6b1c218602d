//! Bézier Drag Demo Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CurveState, DragState, ViewState};
pub use core::{quadratic_bezier, ControlPoints, SampledCurve, Viewport, CURVE_SAMPLE_COUNT};
pub use shared::{DemoOptions, RenderScene};
