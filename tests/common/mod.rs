#![allow(dead_code)]

use invoice_generator::{DocumentAssembler, InvoiceFields, ReceiptFields, RenderModel};
use invoice_generator::models::Flag;

pub fn invoice_fields() -> InvoiceFields {
    InvoiceFields {
        invoice_no: Some("2025-55577".to_string()),
        invoice_date: Some("2025-03-15".to_string()),
        due_date: Some("2025-04-14".to_string()),
        company_name: Some("Your Company Ltd.".to_string()),
        company_address: Some("123 Business Street\nNew York, NY 10001\nUnited States".to_string()),
        company_tax_id: "US123456789".to_string(),
        company_email: "billing@yourcompany.com".to_string(),
        client_name: Some("Client Company Inc.".to_string()),
        client_address: Some("456 Client Avenue\nLos Angeles, CA 90001".to_string()),
        currency: Some("USD".to_string()),
        item_description: Some("Professional consulting services".to_string()),
        quantity: "2".into(),
        unit_price: Some("100.00".into()),
        tax_rate: "10".into(),
        discount: "5".into(),
        notes: "Thank you for your business!".to_string(),
        ..InvoiceFields::default()
    }
}

pub fn paid_invoice_fields() -> InvoiceFields {
    InvoiceFields {
        mark_paid: Flag::Text("yes".to_string()),
        ..invoice_fields()
    }
}

pub fn receipt_fields() -> ReceiptFields {
    ReceiptFields {
        company_name: Some("Your Company Ltd.".to_string()),
        receipt_no: Some("R-2025-001".to_string()),
        received_from: Some("Jane Doe".to_string()),
        receipt_date: Some("15 March 2025".to_string()),
        currency: Some("EUR".to_string()),
        total_amount: Some("49.90".into()),
        description: Some("Workshop ticket".to_string()),
        ..ReceiptFields::default()
    }
}

pub fn invoice_model() -> RenderModel {
    DocumentAssembler::build_invoice_model(&invoice_fields()).unwrap()
}
