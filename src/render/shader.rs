//! Laden des WGSL-Shader-Quelltexts.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Eingebauter Shader (Kurve + Kontrollpunkte).
pub const BUILTIN_SHADER: &str = include_str!("shaders.wgsl");

/// Fehler beim Aufbau des Renderers.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Shader-Datei existiert nicht oder ist nicht lesbar
    #[error("Shader-Datei konnte nicht gelesen werden: {}", .path.display())]
    ShaderLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Shader-Datei ist leer
    #[error("Shader-Datei ist leer: {}", .path.display())]
    EmptyShader { path: PathBuf },
}

/// Liefert den WGSL-Quelltext: aus `path`, falls gesetzt, sonst den eingebauten.
pub fn load_shader_source(path: Option<&Path>) -> Result<Cow<'static, str>, RenderError> {
    let Some(path) = path else {
        log::info!("Verwende eingebauten Shader");
        return Ok(Cow::Borrowed(BUILTIN_SHADER));
    };

    let source = std::fs::read_to_string(path).map_err(|source| RenderError::ShaderLoad {
        path: path.to_path_buf(),
        source,
    })?;
    if source.trim().is_empty() {
        return Err(RenderError::EmptyShader {
            path: path.to_path_buf(),
        });
    }

    log::info!("Shader geladen aus: {}", path.display());
    Ok(Cow::Owned(source))
}
