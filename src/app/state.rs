//! Application State — zentrale Datenhaltung.

mod app_state;
mod curve;
mod drag;
mod view;

pub use app_state::{AppState, StatusMessage};
pub use curve::CurveState;
pub use drag::DragState;
pub use view::ViewState;
