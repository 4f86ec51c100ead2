pub mod document;
pub mod invoice;
pub mod receipt;

pub use document::*;
pub use invoice::*;
pub use receipt::*;
