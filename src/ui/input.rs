//! Viewport-Input-Handling: Maus-Events → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Zeiger-Zustand eines Frames, relativ zur Viewport-Ecke oben links.
#[derive(Debug, Clone, Copy, Default)]
struct PointerSample {
    /// Primäre Taste in diesem Frame gedrückt
    pressed: bool,
    /// Primäre Taste in diesem Frame losgelassen
    released: bool,
    /// Zeiger hat sich in diesem Frame bewegt
    moved: bool,
    /// Zeigerposition relativ zum Viewport (falls bekannt)
    local_pos: Option<Vec2>,
    /// Ob die Position innerhalb des Viewports liegt
    inside: bool,
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Debug, Default)]
pub struct InputState {
    /// Primäre Taste wurde im Viewport gedrückt und ist noch unten
    press_in_viewport: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            press_in_viewport: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zu `response.rect` gemeldet, also in
    /// denselben Einheiten wie `viewport_size`.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui));

        let rect = response.rect;
        let sample = ui.input(|i| {
            let pos = i.pointer.interact_pos();
            PointerSample {
                pressed: i.pointer.primary_pressed(),
                released: i.pointer.primary_released(),
                moved: i.pointer.delta() != egui::Vec2::ZERO,
                local_pos: pos.map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y)),
                inside: pos.is_some_and(|p| rect.contains(p)) && response.hovered(),
            }
        });

        self.handle_pointer(sample, &mut events);
        events
    }

    fn handle_pointer(&mut self, sample: PointerSample, events: &mut Vec<AppIntent>) {
        if sample.pressed && sample.inside {
            if let Some(screen_pos) = sample.local_pos {
                self.press_in_viewport = true;
                events.push(AppIntent::PointerPressed { screen_pos });
            }
        }

        if self.press_in_viewport && sample.moved && !sample.pressed {
            if let Some(screen_pos) = sample.local_pos {
                events.push(AppIntent::PointerMoved { screen_pos });
            }
        }

        if sample.released && self.press_in_viewport {
            self.press_in_viewport = false;
            events.push(AppIntent::PointerReleased);
        }
    }
}
