//! Quote view implementations

pub mod console_view;
