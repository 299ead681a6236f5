//! Receipt export

pub mod receipt;

pub use receipt::{export_receipt_html, render_receipt_html, render_receipt_text};
