use std::collections::HashMap;
use std::sync::Arc;

use super::raster::fonts::{FontCandidates, FontResolver};
use super::raster::RasterRenderer;
use super::vector::VectorRenderer;
use crate::core::RenderResult;
use crate::models::{OutputKind, RenderModel};

/// Trait base para los renderizadores de documentos
pub trait DocumentRenderer: Send + Sync {
    /// Genera los bytes del documento a partir del modelo normalizado
    fn render(&self, model: &RenderModel) -> RenderResult<Vec<u8>>;

    /// Formato de salida que produce
    fn output_kind(&self) -> OutputKind;

    /// Retorna una descripción del renderizador
    fn description(&self) -> &str {
        "Renderizador de documentos"
    }
}

/// Registry central de los renderizadores disponibles, uno por formato
pub struct RendererRegistry {
    renderers: HashMap<OutputKind, Arc<dyn DocumentRenderer>>,
}

impl RendererRegistry {
    pub fn new(fonts: FontCandidates) -> Self {
        let mut registry = Self::empty();

        registry.register(Arc::new(VectorRenderer::new()));

        let resolver = Arc::new(FontResolver::new(fonts));
        registry.register(Arc::new(RasterRenderer::new(resolver)));

        registry
    }

    pub fn empty() -> Self {
        RendererRegistry { renderers: HashMap::new() }
    }

    /// Registra un renderizador, reemplazando el anterior del mismo formato
    pub fn register(&mut self, renderer: Arc<dyn DocumentRenderer>) {
        self.renderers.insert(renderer.output_kind(), renderer);
    }

    /// Obtiene el renderizador de un formato
    pub fn get(&self, kind: OutputKind) -> Option<Arc<dyn DocumentRenderer>> {
        self.renderers.get(&kind).cloned()
    }

    /// Lista los formatos registrados con su descripción
    pub fn list(&self) -> Vec<(OutputKind, String)> {
        let mut entries: Vec<_> = self
            .renderers
            .iter()
            .map(|(kind, renderer)| (*kind, renderer.description().to_string()))
            .collect();
        entries.sort_by_key(|(kind, _)| kind.extension());
        entries
    }

    pub fn exists(&self, kind: OutputKind) -> bool {
        self.renderers.contains_key(&kind)
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new(FontCandidates::platform_default())
    }
}
