// Layout/flow engine: wraps paragraphs to the content column, tracks one
// vertical cursor, and emits position-tagged text runs. Preview and export
// are two interpreters of the same instruction sequence.

pub mod engine;
pub mod geometry;
pub mod instruction;
pub mod measure;

// Re-export the public API consumed by the exporters and the runner.
pub use engine::{layout, Layout, LayoutMetrics};
pub use geometry::PageGeometry;
pub use instruction::DrawInstruction;
pub use measure::{HelveticaMeasurer, MeasureError, TextMeasurer};
