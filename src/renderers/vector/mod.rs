pub mod canvas;
pub mod metrics;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Document, Object, Stream};
use std::io::Write;

use self::canvas::{font_resource, PdfSurface};
use super::DocumentRenderer;
use crate::core::RenderResult;
use crate::layout::{compose, DocumentPlan, FontRole, LayoutSpec};
use crate::models::{OutputKind, RenderModel};

/// PDF de una página A4 con Helvetica/Helvetica-Bold base-14.
pub struct VectorRenderer {
    layout: LayoutSpec,
}

impl VectorRenderer {
    pub fn new() -> Self {
        VectorRenderer { layout: LayoutSpec::vector() }
    }

    fn build_document(&self, content: Vec<u8>) -> RenderResult<Vec<u8>> {
        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let font_dict = |base: &str| {
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base,
                "Encoding" => "WinAnsiEncoding",
            }
        };
        let regular_id = doc.add_object(font_dict("Helvetica"));
        let bold_id = doc.add_object(font_dict("Helvetica-Bold"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                font_resource(FontRole::Regular) => regular_id,
                font_resource(FontRole::Bold) => bold_id,
            },
        });

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content)?;
        let compressed = encoder.finish()?;
        let content_id = doc.add_object(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            compressed,
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.layout.width.into(),
                self.layout.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

impl Default for VectorRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for VectorRenderer {
    fn output_kind(&self) -> OutputKind {
        OutputKind::Vector
    }

    fn description(&self) -> &str {
        "PDF A4 de una página"
    }

    fn render(&self, model: &RenderModel) -> RenderResult<Vec<u8>> {
        let plan = DocumentPlan::build(model, &self.layout.limits);
        let mut surface = PdfSurface::new(self.layout.height);
        compose(&plan, &self.layout, &mut surface)?;

        let content = surface.into_content().encode()?;
        tracing::debug!(bytes = content.len(), "Contenido PDF generado");
        self.build_document(content)
    }
}
