use serde::{Deserialize, Serialize};
use std::fmt;

/// Valor numérico tal como llega del cliente: un número JSON o un literal
/// decimal en texto (`"2"`, `" 19.5 "`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    pub fn parse(&self) -> Option<f64> {
        match self {
            NumericInput::Number(value) => Some(*value),
            NumericInput::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Number(value) => write!(f, "{}", value),
            NumericInput::Text(text) => write!(f, "{:?}", text),
        }
    }
}

impl From<&str> for NumericInput {
    fn from(text: &str) -> Self {
        NumericInput::Text(text.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(text: String) -> Self {
        NumericInput::Text(text)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

/// Totales de una línea de factura. Sin redondeo: el redondeo a dos
/// decimales ocurre solo al mostrar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TotalsRecord {
    pub quantity: f64,
    pub unit_price: f64,
    pub subtotal: f64,
    pub discount_rate: f64,
    pub discount_amount: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl TotalsRecord {
    pub fn zeroed() -> Self {
        TotalsRecord::default()
    }

    pub fn is_zeroed(&self) -> bool {
        *self == TotalsRecord::zeroed()
    }
}

/// Calcula los totales de la línea.
///
/// Si cualquiera de las cuatro entradas no es numérica el registro completo
/// queda en cero y no se devuelve error: un documento nunca se rechaza por
/// datos financieros mal formados.
pub fn calculate_totals(
    quantity: &NumericInput,
    unit_price: &NumericInput,
    tax_rate: &NumericInput,
    discount: &NumericInput,
) -> TotalsRecord {
    let parsed = (
        quantity.parse(),
        unit_price.parse(),
        tax_rate.parse(),
        discount.parse(),
    );

    let (Some(qty), Some(price), Some(tax), Some(disc)) = parsed else {
        tracing::warn!(
            %quantity, %unit_price, %tax_rate, %discount,
            "Entrada financiera no numérica, totales en cero"
        );
        return TotalsRecord::zeroed();
    };

    let subtotal = qty * price;
    let discount_amount = subtotal * (disc / 100.0);
    let subtotal_after_discount = subtotal - discount_amount;
    let tax_amount = subtotal_after_discount * (tax / 100.0);
    let total = subtotal_after_discount + tax_amount;

    TotalsRecord {
        quantity: qty,
        unit_price: price,
        subtotal,
        discount_rate: disc,
        discount_amount,
        tax_rate: tax,
        tax_amount,
        total,
    }
}
