//! Use-Cases: zustandsverändernde Anwendungslogik ohne UI-Abhängigkeit.

pub mod curve;
pub mod drag;
pub mod viewport;
