use std::path::PathBuf;
use thiserror::Error;

use crate::models::OutputKind;

/// Errores de la superficie de dibujo. Es la única condición que el motor
/// no recupera localmente.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No se pudo crear la superficie de dibujo: {0}")]
    SurfaceError(String),

    #[error("Error de PDF: {0}")]
    PdfError(#[from] lopdf::Error),

    #[error("Error de codificación de imagen: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Error de E/S: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No se pudo leer la fuente {}: {source}", .path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Fuente no válida {}: {source}", .path.display())]
    FontParse {
        path: PathBuf,
        #[source]
        source: ttf_parser::FaceParsingError,
    },
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Campo requerido faltante: {0}")]
    MissingField(&'static str),

    #[error("No hay renderizador registrado para {0}")]
    UnknownRenderer(OutputKind),

    #[error("Error de generación: {0}")]
    GenerationError(#[from] RenderError),

    #[error("Error de configuración: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for DocumentError {
    fn from(error: config::ConfigError) -> Self {
        DocumentError::ConfigError(error.to_string())
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
pub type DocumentResult<T> = Result<T, DocumentError>;
