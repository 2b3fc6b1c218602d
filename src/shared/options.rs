//! Zentrale Konfiguration der Bézier-Demo.
//!
//! `DemoOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CONTROL_POINT_COUNT, DEFAULT_CONTROL_POINTS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße in Pixeln [Breite, Höhe].
pub const WINDOW_SIZE: [f32; 2] = [720.0, 640.0];
/// Hintergrundfarbe der Zeichenfläche (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Kurve ───────────────────────────────────────────────────────────

/// Farbe der Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_WIDTH_PX: f32 = 5.0;

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Farbe der Kontrollpunkte (RGBA: Rot).
pub const POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe des gerade gezogenen Kontrollpunkts (RGBA: Gelb).
pub const POINT_COLOR_GRABBED: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Kantenlänge der gezeichneten Kontrollpunkte in Pixeln.
pub const POINT_SIZE_PX: f32 = 10.0;
/// Kantenlänge der quadratischen Hitbox in Pixeln.
pub const HIT_BOX_SIZE_PX: f32 = 10.0;

/// Alle zur Laufzeit änderbaren Demo-Optionen.
/// Wird als `bezier_drag_demo.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoOptions {
    /// Fenstergröße beim Start [Breite, Höhe]
    pub window_size: [f32; 2],
    /// Hintergrundfarbe der Zeichenfläche
    pub background_color: [f32; 4],

    /// Startpositionen der Kontrollpunkte (NDC), auch Ziel von "Reset"
    pub initial_control_points: [[f32; 2]; CONTROL_POINT_COUNT],

    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Linienstärke der Kurve in Pixeln
    pub curve_width_px: f32,

    /// Farbe der Kontrollpunkte
    pub point_color: [f32; 4],
    /// Farbe des gegriffenen Kontrollpunkts
    pub point_color_grabbed: [f32; 4],
    /// Kantenlänge der Kontrollpunkte in Pixeln
    pub point_size_px: f32,
    /// Kantenlänge der Hitbox in Pixeln
    pub hit_box_size_px: f32,

    /// Optionale WGSL-Datei statt des eingebauten Shaders
    pub shader_path: Option<PathBuf>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            background_color: BACKGROUND_COLOR,
            initial_control_points: DEFAULT_CONTROL_POINTS,
            curve_color: CURVE_COLOR,
            curve_width_px: CURVE_WIDTH_PX,
            point_color: POINT_COLOR,
            point_color_grabbed: POINT_COLOR_GRABBED,
            point_size_px: POINT_SIZE_PX,
            hit_box_size_px: HIT_BOX_SIZE_PX,
            shader_path: None,
        }
    }
}

impl DemoOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("bezier_drag_demo"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("bezier_drag_demo.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip_keeps_values() {
        let mut options = DemoOptions::default();
        options.curve_width_px = 3.0;
        options.initial_control_points[1] = [0.25, -0.5];
        options.shader_path = Some(PathBuf::from("shaders/custom.wgsl"));

        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: DemoOptions = toml::from_str(&text).expect("parsebar");

        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let parsed: DemoOptions = toml::from_str("point_size_px = 14.0\n").expect("parsebar");

        assert_eq!(parsed.point_size_px, 14.0);
        assert_eq!(parsed.hit_box_size_px, HIT_BOX_SIZE_PX);
        assert_eq!(parsed.initial_control_points, DEFAULT_CONTROL_POINTS);
        assert_eq!(parsed.shader_path, None);
    }

    #[test]
    fn test_load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("bezier_drag_demo_missing_options.toml");
        let _ = std::fs::remove_file(&path);

        assert_eq!(DemoOptions::load_from_file(&path), DemoOptions::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "bezier_drag_demo_options_{}.toml",
            std::process::id()
        ));
        let mut options = DemoOptions::default();
        options.point_color = [0.0, 1.0, 0.0, 1.0];

        options.save_to_file(&path).expect("speicherbar");
        let loaded = DemoOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "bezier_drag_demo_broken_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "curve_width_px = \"breit\"").expect("schreibbar");
        let loaded = DemoOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, DemoOptions::default());
    }
}
