use serde::{Deserialize, Serialize};

use super::OutputKind;
use crate::core::NumericInput;

/// Recibo de un solo concepto. Siempre cantidad 1 y siempre pagado.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptFields {
    #[serde(default, alias = "companyName")]
    pub company_name: Option<String>,
    #[serde(default, alias = "receiptNo")]
    pub receipt_no: Option<String>,
    #[serde(default, alias = "receivedFrom", alias = "payer_name", alias = "payerName")]
    pub received_from: Option<String>,
    /// Fecha ya lista para mostrar; no se reformatea.
    #[serde(default, alias = "receiptDate", alias = "date")]
    pub receipt_date: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, alias = "totalsum", alias = "totalAmount", alias = "amount")]
    pub total_amount: Option<NumericInput>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub format: OutputKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_field_names() {
        let fields: ReceiptFields = serde_json::from_value(serde_json::json!({
            "company_name": "Acme",
            "receipt_no": "R-1",
            "received_from": "Jane",
            "receipt_date": "15 March 2025",
            "currency": "EUR",
            "totalsum": "49.90",
            "description": "Consulting"
        }))
        .unwrap();

        assert_eq!(fields.received_from.as_deref(), Some("Jane"));
        assert_eq!(fields.total_amount.and_then(|a| a.parse()), Some(49.9));
        assert_eq!(fields.format, OutputKind::Vector);
    }
}
