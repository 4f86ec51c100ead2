use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::core::TotalsRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    Receipt,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Receipt => "receipt",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formato físico de salida. En la entrada se acepta `pdf`/`vector` para el
/// PDF; cualquier otro valor selecciona el PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputKind {
    #[default]
    Vector,
    Raster,
}

impl OutputKind {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("pdf") || label.eq_ignore_ascii_case("vector") {
            OutputKind::Vector
        } else {
            OutputKind::Raster
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            OutputKind::Vector => "application/pdf",
            OutputKind::Raster => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputKind::Vector => "pdf",
            OutputKind::Raster => "png",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl Serialize for OutputKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.extension())
    }
}

impl<'de> Deserialize<'de> for OutputKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(OutputKind::from_label(&label))
    }
}

/// Emisor o destinatario. Los campos opcionales vacíos no se dibujan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Party {
    pub name: String,
    pub address: String,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
}

/// Datos ya normalizados que consumen ambos renderizadores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub kind: DocumentKind,
    pub number: String,
    /// Fechas ya formateadas para mostrar.
    pub issue_date: String,
    pub due_date: String,
    pub payment_terms: String,
    pub payment_method: String,
    pub company: Party,
    pub client: Party,
    pub currency: String,
    pub description: String,
    pub notes: String,
    pub totals: TotalsRecord,
    pub paid: bool,
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub output: OutputKind,
    pub number: String,
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    pub fn media_type(&self) -> &'static str {
        self.output.media_type()
    }

    pub fn extension(&self) -> &'static str {
        self.output.extension()
    }

    /// `invoice_<número>_<YYYY-MM-DD_HH-MM-SS>.<ext>`
    pub fn suggested_filename(&self, timestamp: NaiveDateTime) -> String {
        format!(
            "{}_{}_{}.{}",
            self.kind,
            sanitize_filename_part(&self.number),
            timestamp.format("%Y-%m-%d_%H-%M-%S"),
            self.extension()
        )
    }
}

fn sanitize_filename_part(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '"' | '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
