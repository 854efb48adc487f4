pub mod resume;
pub mod style;
