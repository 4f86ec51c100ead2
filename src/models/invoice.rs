use serde::{Deserialize, Serialize};

use super::OutputKind;
use crate::core::NumericInput;

/// Campos de factura tal como llegan por JSON o por formulario.
///
/// Los campos requeridos son `Option` para que el ensamblador los rechace
/// con un error explícito en lugar de un fallo de deserialización.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceFields {
    #[serde(default, alias = "invoiceNo")]
    pub invoice_no: Option<String>,
    #[serde(default, alias = "invoiceDate")]
    pub invoice_date: Option<String>,
    #[serde(default, alias = "dueDate")]
    pub due_date: Option<String>,
    #[serde(default = "default_payment_terms", alias = "paymentTerms")]
    pub payment_terms: String,

    #[serde(default, alias = "companyName")]
    pub company_name: Option<String>,
    #[serde(default, alias = "companyAddress")]
    pub company_address: Option<String>,
    #[serde(default, alias = "companyTaxId")]
    pub company_tax_id: String,
    #[serde(default, alias = "companyEmail")]
    pub company_email: String,
    #[serde(default, alias = "companyPhone")]
    pub company_phone: String,

    #[serde(default, alias = "clientName")]
    pub client_name: Option<String>,
    #[serde(default, alias = "clientAddress")]
    pub client_address: Option<String>,
    #[serde(default, alias = "clientEmail")]
    pub client_email: String,
    #[serde(default, alias = "clientPhone")]
    pub client_phone: String,

    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default = "default_payment_method", alias = "paymentMethod")]
    pub payment_method: String,

    #[serde(default, alias = "itemDescription")]
    pub item_description: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: NumericInput,
    #[serde(default, alias = "unitPrice")]
    pub unit_price: Option<NumericInput>,
    #[serde(default = "default_rate", alias = "taxRate")]
    pub tax_rate: NumericInput,
    #[serde(default = "default_rate")]
    pub discount: NumericInput,

    #[serde(default)]
    pub notes: String,
    #[serde(default, alias = "markPaid")]
    pub mark_paid: Flag,
    #[serde(default)]
    pub format: OutputKind,
}

/// Indicador de pagado: booleano en JSON, texto en formularios
/// (`mark_paid=yes`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Bool(value) => *value,
            Flag::Text(text) => {
                let text = text.trim();
                ["yes", "true", "on"]
                    .iter()
                    .any(|accepted| text.eq_ignore_ascii_case(accepted))
            }
        }
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::Bool(false)
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag::Bool(value)
    }
}

fn default_payment_terms() -> String {
    "Net 30".to_string()
}

fn default_payment_method() -> String {
    "Bank Transfer".to_string()
}

fn default_quantity() -> NumericInput {
    NumericInput::Text("1".to_string())
}

fn default_rate() -> NumericInput {
    NumericInput::Text("0".to_string())
}

impl Default for InvoiceFields {
    fn default() -> Self {
        InvoiceFields {
            invoice_no: None,
            invoice_date: None,
            due_date: None,
            payment_terms: default_payment_terms(),
            company_name: None,
            company_address: None,
            company_tax_id: String::new(),
            company_email: String::new(),
            company_phone: String::new(),
            client_name: None,
            client_address: None,
            client_email: String::new(),
            client_phone: String::new(),
            currency: None,
            payment_method: default_payment_method(),
            item_description: None,
            quantity: default_quantity(),
            unit_price: None,
            tax_rate: default_rate(),
            discount: default_rate(),
            notes: String::new(),
            mark_paid: Flag::default(),
            format: OutputKind::default(),
        }
    }
}
