use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::{FontConfig, RenderError, RenderResult};
use crate::layout::FontRole;

/// Rutas habituales de fuentes sans-serif en macOS, Linux y Windows.
const COMMON_SANS: [&str; 7] = [
    "/Library/Fonts/Arial.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "C:/Windows/Fonts/arial.ttf",
    "C:/Windows/Fonts/arialbd.ttf",
];

/// Listas ordenadas de rutas candidatas por rol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontCandidates {
    pub regular: Vec<PathBuf>,
    pub bold: Vec<PathBuf>,
}

impl FontCandidates {
    pub fn new(regular: Vec<PathBuf>, bold: Vec<PathBuf>) -> Self {
        FontCandidates { regular, bold }
    }

    pub fn platform_default() -> Self {
        Self::from_search_paths(COMMON_SANS)
    }

    /// Divide una lista plana en roles según el nombre del archivo.
    pub fn from_search_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let (bold, regular) = paths
            .into_iter()
            .map(Into::into)
            .partition(|path: &PathBuf| is_bold_path(path));
        FontCandidates { regular, bold }
    }

    /// Listas explícitas primero, después la lista plana. Sin nada
    /// configurado se usan las rutas por defecto.
    pub fn from_config(config: &FontConfig) -> Self {
        if config.regular.is_empty() && config.bold.is_empty() && config.search_paths.is_empty() {
            return Self::platform_default();
        }

        let flat = Self::from_search_paths(config.search_paths.iter().map(PathBuf::from));
        let mut regular: Vec<PathBuf> = config.regular.iter().map(PathBuf::from).collect();
        let mut bold: Vec<PathBuf> = config.bold.iter().map(PathBuf::from).collect();
        regular.extend(flat.regular);
        bold.extend(flat.bold);
        FontCandidates { regular, bold }
    }

    pub fn for_role(&self, role: FontRole) -> &[PathBuf] {
        match role {
            FontRole::Regular => &self.regular,
            FontRole::Bold => &self.bold,
        }
    }
}

pub fn is_bold_path(path: &Path) -> bool {
    let name = path.to_string_lossy();
    name.contains("Bold") || name.to_lowercase().ends_with("bd.ttf")
}

/// Fuente TrueType/OpenType leída y validada.
pub struct LoadedFont {
    pub path: PathBuf,
    data: Vec<u8>,
    pub units_per_em: f32,
    pub ascender: f32,
}

impl LoadedFont {
    pub fn load(path: &Path) -> RenderResult<Self> {
        let data = std::fs::read(path).map_err(|source| RenderError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let face = ttf_parser::Face::parse(&data, 0).map_err(|source| RenderError::FontParse {
            path: path.to_path_buf(),
            source,
        })?;
        let units_per_em = f32::from(face.units_per_em());
        let ascender = f32::from(face.ascender());
        Ok(LoadedFont {
            path: path.to_path_buf(),
            data,
            units_per_em,
            ascender,
        })
    }

    /// `Face` toma prestados los bytes, así que no se guarda junto a ellos.
    /// Volver a crearlo solo lee el directorio de tablas; los glifos se
    /// decodifican bajo demanda, por lo que el coste por texto es mínimo.
    pub fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, 0).ok()
    }
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("path", &self.path)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum FontFace {
    Outline(Arc<LoadedFont>),
    Bitmap,
}

/// Caché de fuentes: cada rol se carga como máximo una vez.
pub struct FontResolver {
    candidates: FontCandidates,
    regular: OnceCell<Option<Arc<LoadedFont>>>,
    bold: OnceCell<Option<Arc<LoadedFont>>>,
}

impl FontResolver {
    pub fn new(candidates: FontCandidates) -> Self {
        FontResolver {
            candidates,
            regular: OnceCell::new(),
            bold: OnceCell::new(),
        }
    }

    pub fn resolve(&self, role: FontRole) -> FontFace {
        let cell = match role {
            FontRole::Regular => &self.regular,
            FontRole::Bold => &self.bold,
        };
        cell.get_or_init(|| load_first(self.candidates.for_role(role), role))
            .clone()
            .map(FontFace::Outline)
            .unwrap_or(FontFace::Bitmap)
    }
}

fn load_first(paths: &[PathBuf], role: FontRole) -> Option<Arc<LoadedFont>> {
    for path in paths {
        match LoadedFont::load(path) {
            Ok(font) => {
                tracing::info!(?role, path = %path.display(), "Fuente cargada");
                return Some(Arc::new(font));
            }
            Err(e) => {
                tracing::debug!(?role, path = %path.display(), error = %e, "Fuente candidata descartada");
            }
        }
    }
    tracing::warn!(?role, "Ninguna fuente candidata disponible, usando fuente de mapa de bits");
    None
}
