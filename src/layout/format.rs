/// `USD 209.00`
pub fn money(currency: &str, value: f64) -> String {
    format!("{} {:.2}", currency, value)
}

/// `-USD 10.00`, usado en la línea de descuento.
pub fn deduction(currency: &str, value: f64) -> String {
    format!("-{}", money(currency, value))
}

pub fn rate(value: f64) -> String {
    format!("{:.1}", value)
}

/// Parte entera de la cantidad.
pub fn quantity(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}
