// Interpreters of the layout engine's instruction sequence: a single-page
// PDF writer and a plain-text preview projection.

pub mod pdf;
pub mod preview;

pub use pdf::{export_file_name, write_pdf};
pub use preview::render_text;
