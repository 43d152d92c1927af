//! Category domain.
//!
//! - [`filter::CategoryFilter`] — `All` or one specific category
//! - [`options::category_options`] — selectable filters for a collection

pub mod filter;
pub mod options;
