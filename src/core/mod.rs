pub mod config;
pub mod dates;
pub mod error;
pub mod finance;

pub use config::*;
pub use dates::format_date;
pub use error::*;
pub use finance::{calculate_totals, NumericInput, TotalsRecord};
