mod common;

use invoice_generator::{DocumentAssembler, DocumentRenderer, OutputKind, VectorRenderer};
use lopdf::content::Content;
use lopdf::Document;

/// Textos mostrados con `Tj` en la primera página, en orden de dibujo.
fn page_texts(pdf: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(pdf).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let page_id = *pages.get(&1).unwrap();
    let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .collect()
}

#[test]
fn reference_invoice_shows_expected_totals() {
    let pdf = VectorRenderer::new().render(&common::invoice_model()).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));

    let texts = page_texts(&pdf);
    for expected in [
        "INVOICE",
        "# 2025-55577",
        "Date: 15 March 2025",
        "Due Date: 14 April 2025",
        "Subtotal:",
        "USD 200.00",
        "Discount (5.0%):",
        "-USD 10.00",
        "Tax (10.0%):",
        "USD 19.00",
        "Total:",
        "USD 209.00",
        "NOTES:",
        "Thank you for your business!",
    ] {
        assert!(texts.iter().any(|t| t == expected), "missing {expected:?} in {texts:?}");
    }
    assert!(!texts.iter().any(|t| t == "PAID"));
}

#[test]
fn conditional_sections_follow_the_model() {
    let mut fields = common::paid_invoice_fields();
    fields.discount = "0".into();
    fields.tax_rate = "0".into();
    fields.notes = String::new();
    let model = DocumentAssembler::build_invoice_model(&fields).unwrap();

    let texts = page_texts(&VectorRenderer::new().render(&model).unwrap());
    assert!(texts.iter().any(|t| t == "PAID"));
    assert!(!texts.iter().any(|t| t.starts_with("Discount")));
    assert!(!texts.iter().any(|t| t.starts_with("Tax (")));
    assert!(!texts.iter().any(|t| t == "NOTES:"));
}

#[test]
fn long_description_is_truncated_not_rejected() {
    let mut model = common::invoice_model();
    model.description = "l1\nl2\nl3\nl4\nl5\nl6\nl7".to_string();

    let texts = page_texts(&VectorRenderer::new().render(&model).unwrap());
    assert!(texts.iter().any(|t| t == "l5"));
    assert!(!texts.iter().any(|t| t == "l6"));
}

#[test]
fn output_is_deterministic() {
    let renderer = VectorRenderer::new();
    let model = common::invoice_model();
    assert_eq!(renderer.render(&model).unwrap(), renderer.render(&model).unwrap());
}

#[test]
fn receipt_renders_through_the_assembler() {
    let assembler = DocumentAssembler::new(Default::default());
    let document = assembler
        .assemble_receipt(&common::receipt_fields(), OutputKind::Vector)
        .unwrap();

    let texts = page_texts(&document.bytes);
    assert!(texts.iter().any(|t| t == "RECEIPT"));
    assert!(texts.iter().any(|t| t == "RECEIVED FROM:"));
    assert!(texts.iter().any(|t| t == "EUR 49.90"));
    assert!(texts.iter().any(|t| t == "PAID"));
}

#[test]
fn receipt_with_unreadable_amount_still_shows_one_unit() {
    let mut fields = common::receipt_fields();
    fields.total_amount = Some("forty".into());

    let document = DocumentAssembler::new(Default::default())
        .assemble_receipt(&fields, OutputKind::Vector)
        .unwrap();

    let texts = page_texts(&document.bytes);
    let quantity_at = texts.iter().position(|t| t == "Quantity").unwrap();
    assert!(texts[quantity_at..].iter().any(|t| t == "1"));
    assert!(texts.iter().any(|t| t == "EUR 0.00"));
}
