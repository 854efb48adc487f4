//! Text measurement — the one external capability the layout engine needs.
//!
//! The engine only depends on the contract: wrapping is deterministic for a
//! given text, column width, and font size. The bundled implementation uses
//! a static character-width table for Helvetica, the face the PDF writer
//! embeds, so preview and export measure identically. Character widths are
//! in em units (relative to font size); the table covers ASCII 0x20..=0x7E
//! with an average-width fallback for everything else. Static tables are an
//! intentional approximation; exact glyph shaping is not needed to place
//! résumé text in a 170mm column.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("measurement failed: {0}")]
    Failed(String),
}

/// Wraps text to at most `max_width` page units per line at the given font
/// size. Blank input wraps to zero lines. Implementations must be
/// deterministic; the engine propagates any failure and aborts the pass.
pub trait TextMeasurer {
    fn wrap_to_lines(
        &self,
        text: &str,
        max_width: f32,
        font_size: f32,
    ) -> Result<Vec<String>, MeasureError>;
}

/// Millimeters per point.
const PT_TO_MM: f32 = 25.4 / 72.0;

/// Static character-width table for one font face.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units, covering
/// 0x20 (space) through 0x7E (~).
struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback for codepoints outside the table.
    average_char_width: f32,
    space_width: f32,
}

impl FontMetricTable {
    fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Rendered width of a string in em units.
    fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }
}

/// Helvetica — widths from the Adobe core-14 AFM, scaled to em units.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.55,
    space_width: 0.278,
};

/// `TextMeasurer` backed by the Helvetica metric table, producing greedy
/// word-wrapped lines. A single word wider than the column gets a line of
/// its own rather than being split.
pub struct HelveticaMeasurer;

impl TextMeasurer for HelveticaMeasurer {
    fn wrap_to_lines(
        &self,
        text: &str,
        max_width: f32,
        font_size: f32,
    ) -> Result<Vec<String>, MeasureError> {
        if max_width <= 0.0 || font_size <= 0.0 {
            return Err(MeasureError::Failed(format!(
                "non-positive wrap parameters: max_width={max_width}, font_size={font_size}"
            )));
        }

        // mm per em at this font size
        let scale = font_size * PT_TO_MM;
        let space_w = HELVETICA_TABLE.space_width * scale;

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_w = 0.0_f32;

        for word in text.split_whitespace() {
            let word_w = HELVETICA_TABLE.measure_str(word) * scale;
            if current.is_empty() {
                current.push_str(word);
                current_w = word_w;
            } else if current_w + space_w + word_w > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_w = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_w += space_w + word_w;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        Ok(lines)
    }
}
