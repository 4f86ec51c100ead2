use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d %B %Y";

/// Convierte `YYYY-MM-DD` en `DD MonthName YYYY`.
///
/// Cualquier entrada que no tenga esa forma exacta, o que no sea una fecha
/// real, se devuelve sin cambios.
pub fn format_date(raw: &str) -> String {
    if !has_iso_shape(raw) {
        return raw.to_string();
    }

    match NaiveDate::parse_from_str(raw, INPUT_FORMAT) {
        Ok(date) => date.format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

fn has_iso_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
