//! Draw instructions — the engine's sole output unit.
//!
//! An instruction is a text run with an absolute position (mm from the
//! top-left corner), a font size in points, and a color. Interpreters must
//! consume the sequence in emission order; positions are final and are never
//! recomputed downstream.

use serde::{Deserialize, Serialize};

use crate::models::style::Rgb;

/// Near-black used for names, headings on entries, and body text.
pub const INK: Rgb = Rgb::new(0x0F, 0x17, 0x2A);
/// Gray used for contact details, durations, years, and tech lines.
pub const MUTED: Rgb = Rgb::new(0x66, 0x66, 0x66);

// Font sizes in points, one per typographic role.
pub const SIZE_NAME: f32 = 24.0;
pub const SIZE_TITLE: f32 = 16.0;
pub const SIZE_SECTION: f32 = 14.0;
pub const SIZE_ENTRY: f32 = 12.0;
pub const SIZE_BODY: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_size: f32,
    pub color: Rgb,
}

impl DrawInstruction {
    pub fn new(x: f32, y: f32, text: impl Into<String>, font_size: f32, color: Rgb) -> Self {
        DrawInstruction {
            x,
            y,
            text: text.into(),
            font_size,
            color,
        }
    }
}
