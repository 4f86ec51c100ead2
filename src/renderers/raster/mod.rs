pub mod bitmap_font;
pub mod canvas;
pub mod fonts;
pub mod glyphs;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use std::sync::Arc;
use tiny_skia::Pixmap;

use self::canvas::RasterSurface;
use self::fonts::FontResolver;
use super::DocumentRenderer;
use crate::core::RenderResult;
use crate::layout::{compose, DocumentPlan, LayoutSpec};
use crate::models::{OutputKind, RenderModel};

/// PNG de 1600×1000 px.
pub struct RasterRenderer {
    layout: LayoutSpec,
    fonts: Arc<FontResolver>,
}

impl RasterRenderer {
    pub fn new(fonts: Arc<FontResolver>) -> Self {
        RasterRenderer {
            layout: LayoutSpec::raster(),
            fonts,
        }
    }
}

/// El lienzo es opaco, así que los valores premultiplicados coinciden con
/// los directos y basta con descartar el canal alfa.
fn encode_png(pixmap: &Pixmap) -> RenderResult<Vec<u8>> {
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer).write_image(
        &rgb,
        pixmap.width(),
        pixmap.height(),
        ColorType::Rgb8,
    )?;
    Ok(buffer)
}

impl DocumentRenderer for RasterRenderer {
    fn output_kind(&self) -> OutputKind {
        OutputKind::Raster
    }

    fn description(&self) -> &str {
        "Imagen PNG de 1600x1000"
    }

    fn render(&self, model: &RenderModel) -> RenderResult<Vec<u8>> {
        let plan = DocumentPlan::build(model, &self.layout.limits);
        let mut surface = RasterSurface::new(
            self.layout.width as u32,
            self.layout.height as u32,
            &self.fonts,
        )?;
        compose(&plan, &self.layout, &mut surface)?;
        encode_png(&surface.into_pixmap())
    }
}
