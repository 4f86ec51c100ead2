use super::format::{deduction, money, quantity, rate};
use super::spec::TextLimits;
use super::text::{clip, clip_lines};
use crate::models::{DocumentKind, Party, RenderModel};

pub const STAMP_LABEL: &str = "PAID";
pub const TABLE_HEADERS: [&str; 4] = ["Description", "Quantity", "Unit Price", "Amount"];

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        LabeledValue { label: label.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub description: Vec<String>,
    pub quantity: String,
    pub unit_price: String,
    pub amount: String,
}

/// Contenido del documento con todas las reglas condicionales ya aplicadas.
/// Es independiente del backend salvo por los límites de texto.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPlan {
    pub company_name: String,
    pub company_lines: Vec<String>,
    pub title: &'static str,
    pub number: String,
    pub date_lines: Vec<String>,
    pub stamp: Option<&'static str>,
    pub bill_to_heading: &'static str,
    pub client_name: String,
    pub client_lines: Vec<String>,
    pub payment_rows: Vec<LabeledValue>,
    pub table_headers: [&'static str; 4],
    pub row: TableRow,
    pub totals: Vec<LabeledValue>,
    pub grand_total: LabeledValue,
    pub notes: Option<Vec<String>>,
    pub footer: String,
}

impl DocumentPlan {
    pub fn build(model: &RenderModel, limits: &TextLimits) -> Self {
        let totals = &model.totals;
        let currency = model.currency.as_str();

        let (title, bill_to_heading, footer_prefix) = match model.kind {
            DocumentKind::Invoice => ("INVOICE", "BILL TO:", "Invoice"),
            DocumentKind::Receipt => ("RECEIPT", "RECEIVED FROM:", "Receipt"),
        };

        let mut date_lines = vec![format!("Date: {}", model.issue_date)];
        if model.kind == DocumentKind::Invoice {
            date_lines.push(format!("Due Date: {}", model.due_date));
        }

        let payment_value = |value: &str| clip(value, limits.payment_value);
        let payment_rows = match model.kind {
            DocumentKind::Invoice => vec![
                LabeledValue::new("Payment Terms:", payment_value(&model.payment_terms)),
                LabeledValue::new("Payment Method:", payment_value(&model.payment_method)),
                LabeledValue::new("Currency:", payment_value(currency)),
            ],
            DocumentKind::Receipt => vec![
                LabeledValue::new("Payment Method:", payment_value(&model.payment_method)),
                LabeledValue::new("Payment Account:", "Main account"),
                LabeledValue::new("Currency:", payment_value(currency)),
            ],
        };

        let mut summary = vec![LabeledValue::new("Subtotal:", money(currency, totals.subtotal))];
        if totals.discount_amount > 0.0 {
            summary.push(LabeledValue::new(
                format!("Discount ({}%):", rate(totals.discount_rate)),
                deduction(currency, totals.discount_amount),
            ));
        }
        if totals.tax_amount > 0.0 {
            summary.push(LabeledValue::new(
                format!("Tax ({}%):", rate(totals.tax_rate)),
                money(currency, totals.tax_amount),
            ));
        }

        let notes = if model.notes.is_empty() {
            None
        } else {
            Some(clip_lines(&model.notes, limits.notes))
        };

        DocumentPlan {
            company_name: clip(&model.company.name, limits.company_name),
            company_lines: company_lines(&model.company, limits),
            title,
            number: format!("# {}", model.number),
            date_lines,
            stamp: model.paid.then_some(STAMP_LABEL),
            bill_to_heading,
            client_name: clip(&model.client.name, limits.client_name),
            client_lines: client_lines(&model.client, limits),
            payment_rows,
            table_headers: TABLE_HEADERS,
            row: TableRow {
                description: clip_lines(&model.description, limits.description),
                quantity: quantity(totals.quantity),
                unit_price: money(currency, totals.unit_price),
                amount: money(currency, totals.subtotal),
            },
            totals: summary,
            grand_total: LabeledValue::new("Total:", money(currency, totals.total)),
            notes,
            footer: format!("{} {} - Page 1", footer_prefix, model.number),
        }
    }

    /// Textos en orden de dibujo; útil para comparar backends.
    pub fn texts(&self) -> Vec<String> {
        let mut out = vec![self.company_name.clone()];
        out.extend(self.company_lines.iter().cloned());
        out.push(self.title.to_string());
        out.push(self.number.clone());
        out.extend(self.date_lines.iter().cloned());
        if let Some(stamp) = self.stamp {
            out.push(stamp.to_string());
        }
        out.push(self.bill_to_heading.to_string());
        out.push(self.client_name.clone());
        out.extend(self.client_lines.iter().cloned());
        for row in &self.payment_rows {
            out.push(row.label.clone());
            out.push(row.value.clone());
        }
        out.extend(self.table_headers.iter().map(|h| h.to_string()));
        out.extend(self.row.description.iter().cloned());
        out.push(self.row.quantity.clone());
        out.push(self.row.unit_price.clone());
        out.push(self.row.amount.clone());
        for line in self.totals.iter().chain(std::iter::once(&self.grand_total)) {
            out.push(line.label.clone());
            out.push(line.value.clone());
        }
        if let Some(notes) = &self.notes {
            out.push("NOTES:".to_string());
            out.extend(notes.iter().cloned());
        }
        out.push(self.footer.clone());
        out
    }
}

fn company_lines(company: &Party, limits: &TextLimits) -> Vec<String> {
    let mut lines = clip_lines(&company.address, limits.address);
    for (prefix, value) in [
        ("Email: ", &company.email),
        ("Phone: ", &company.phone),
        ("Tax ID: ", &company.tax_id),
    ] {
        if !value.is_empty() {
            lines.push(clip(&format!("{}{}", prefix, value), limits.contact));
        }
    }
    lines.truncate(limits.block_lines);
    lines
}

fn client_lines(client: &Party, limits: &TextLimits) -> Vec<String> {
    let mut lines = clip_lines(&client.address, limits.address);
    for value in [&client.email, &client.phone] {
        if !value.is_empty() {
            lines.push(clip(value, limits.contact));
        }
    }
    lines.truncate(limits.block_lines);
    lines
}
