mod common;

use std::sync::Arc;

use invoice_generator::renderers::{FontCandidates, FontResolver};
use invoice_generator::{DocumentAssembler, DocumentRenderer, OutputKind, RasterRenderer, RendererRegistry};

fn renderer_without_fonts() -> RasterRenderer {
    let candidates = FontCandidates::new(
        vec!["/nonexistent/regular.ttf".into()],
        vec!["/nonexistent/bold.ttf".into()],
    );
    RasterRenderer::new(Arc::new(FontResolver::new(candidates)))
}

#[test]
fn falls_back_to_bitmap_font_when_no_candidate_exists() {
    let png = renderer_without_fonts().render(&common::invoice_model()).unwrap();

    let image = image::load_from_memory(&png).unwrap();
    assert_eq!((image.width(), image.height()), (1600, 1000));

    // Hay texto dibujado: no todo el lienzo es blanco
    let rgb = image.to_rgb8();
    assert!(rgb.pixels().any(|px| px.0 != [255, 255, 255]));
}

#[test]
fn paid_stamp_changes_the_image() {
    let renderer = renderer_without_fonts();
    let unpaid = common::invoice_model();
    let mut paid = unpaid.clone();
    paid.paid = true;

    assert_ne!(renderer.render(&unpaid).unwrap(), renderer.render(&paid).unwrap());
}

#[test]
fn output_is_deterministic() {
    let renderer = renderer_without_fonts();
    let model = common::invoice_model();
    assert_eq!(renderer.render(&model).unwrap(), renderer.render(&model).unwrap());
}

#[test]
fn assembler_pairs_png_with_media_type() {
    let candidates = FontCandidates::new(vec!["/nonexistent.ttf".into()], vec![]);
    let assembler = DocumentAssembler::new(Arc::new(RendererRegistry::new(candidates)));

    let document = assembler
        .assemble_receipt(&common::receipt_fields(), OutputKind::Raster)
        .unwrap();
    assert_eq!(document.media_type(), "image/png");
    assert_eq!(document.extension(), "png");
    assert!(image::load_from_memory(&document.bytes).is_ok());
}
