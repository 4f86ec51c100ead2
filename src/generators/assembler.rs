use std::sync::Arc;
use std::time::Instant;

use crate::core::{calculate_totals, format_date, DocumentError, DocumentResult, NumericInput};
use crate::models::{
    DocumentKind, InvoiceFields, OutputKind, Party, ReceiptFields, RenderModel, RenderedDocument,
};
use crate::renderers::RendererRegistry;

const RECEIPT_PAYMENT_METHOD: &str = "Bank transfer";

fn required(value: &Option<String>, field: &'static str) -> DocumentResult<String> {
    value.clone().ok_or(DocumentError::MissingField(field))
}

fn required_number(value: &Option<NumericInput>, field: &'static str) -> DocumentResult<NumericInput> {
    value.clone().ok_or(DocumentError::MissingField(field))
}

/// Convierte campos crudos en un `RenderModel` y lo pasa al renderizador
/// registrado para el formato pedido.
pub struct DocumentAssembler {
    registry: Arc<RendererRegistry>,
}

impl DocumentAssembler {
    pub fn new(registry: Arc<RendererRegistry>) -> Self {
        DocumentAssembler { registry }
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn build_invoice_model(fields: &InvoiceFields) -> DocumentResult<RenderModel> {
        let number = required(&fields.invoice_no, "invoice_no")?;
        let invoice_date = required(&fields.invoice_date, "invoice_date")?;
        let due_date = required(&fields.due_date, "due_date")?;
        let company_name = required(&fields.company_name, "company_name")?;
        let company_address = required(&fields.company_address, "company_address")?;
        let client_name = required(&fields.client_name, "client_name")?;
        let client_address = required(&fields.client_address, "client_address")?;
        let currency = required(&fields.currency, "currency")?;
        let description = required(&fields.item_description, "item_description")?;
        let unit_price = required_number(&fields.unit_price, "unit_price")?;

        let totals = calculate_totals(&fields.quantity, &unit_price, &fields.tax_rate, &fields.discount);

        Ok(RenderModel {
            kind: DocumentKind::Invoice,
            number,
            issue_date: format_date(&invoice_date),
            due_date: format_date(&due_date),
            payment_terms: fields.payment_terms.clone(),
            payment_method: fields.payment_method.clone(),
            company: Party {
                name: company_name,
                address: company_address,
                tax_id: fields.company_tax_id.clone(),
                email: fields.company_email.clone(),
                phone: fields.company_phone.clone(),
            },
            client: Party {
                name: client_name,
                address: client_address,
                tax_id: String::new(),
                email: fields.client_email.clone(),
                phone: fields.client_phone.clone(),
            },
            currency,
            description,
            notes: fields.notes.clone(),
            totals,
            paid: fields.mark_paid.is_set(),
        })
    }

    /// Recibo: cantidad 1, precio igual al importe total, sin impuesto ni
    /// descuento, fecha tal como llega y siempre pagado.
    pub fn build_receipt_model(fields: &ReceiptFields) -> DocumentResult<RenderModel> {
        let company_name = required(&fields.company_name, "company_name")?;
        let number = required(&fields.receipt_no, "receipt_no")?;
        let received_from = required(&fields.received_from, "received_from")?;
        let receipt_date = required(&fields.receipt_date, "receipt_date")?;
        let currency = required(&fields.currency, "currency")?;
        let amount = required_number(&fields.total_amount, "total_amount")?;
        let description = required(&fields.description, "description")?;

        let zero = NumericInput::Number(0.0);
        let mut totals = calculate_totals(&NumericInput::Number(1.0), &amount, &zero, &zero);
        // Un importe ilegible deja el registro en cero, pero la línea sigue siendo una
        totals.quantity = 1.0;

        Ok(RenderModel {
            kind: DocumentKind::Receipt,
            number,
            issue_date: receipt_date,
            due_date: String::new(),
            payment_terms: String::new(),
            payment_method: RECEIPT_PAYMENT_METHOD.to_string(),
            company: Party { name: company_name, ..Party::default() },
            client: Party { name: received_from, ..Party::default() },
            currency,
            description,
            notes: String::new(),
            totals,
            paid: true,
        })
    }

    /// Renderiza un modelo ya construido con el backend del formato pedido.
    pub fn render(&self, model: &RenderModel, output: OutputKind) -> DocumentResult<RenderedDocument> {
        let span = tracing::info_span!(
            "render_document",
            kind = %model.kind,
            number = %model.number,
            output = %output,
        );
        let _guard = span.enter();

        let renderer = self
            .registry
            .get(output)
            .ok_or(DocumentError::UnknownRenderer(output))?;

        let started = Instant::now();
        let bytes = renderer.render(model).map_err(|e| {
            tracing::error!(error = %e, "Error al renderizar el documento");
            DocumentError::from(e)
        })?;

        tracing::info!(
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Documento generado"
        );

        Ok(RenderedDocument {
            kind: model.kind,
            output,
            number: model.number.clone(),
            bytes,
        })
    }

    pub fn assemble_invoice(&self, fields: &InvoiceFields, output: OutputKind) -> DocumentResult<RenderedDocument> {
        let model = Self::build_invoice_model(fields)?;
        self.render(&model, output)
    }

    pub fn assemble_receipt(&self, fields: &ReceiptFields, output: OutputKind) -> DocumentResult<RenderedDocument> {
        let model = Self::build_receipt_model(fields)?;
        self.render(&model, output)
    }
}
