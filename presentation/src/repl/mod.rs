//! Interactive mode

pub mod interactive;
