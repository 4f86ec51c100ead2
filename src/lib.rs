pub mod api;
pub mod core;
pub mod generators;
pub mod layout;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use crate::core::{calculate_totals, format_date, AppConfig, DocumentError, NumericInput, RenderError, TotalsRecord};
pub use generators::DocumentAssembler;
pub use models::{
    DocumentKind, InvoiceFields, OutputKind, Party, ReceiptFields,
    RenderModel, RenderedDocument,
};
pub use renderers::{DocumentRenderer, RasterRenderer, RendererRegistry, VectorRenderer};
