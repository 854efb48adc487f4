//! Plain-text preview: the on-screen interpreter of the instruction
//! sequence. Runs are consumed strictly in emission order; runs that share a
//! vertical position (a role's company and its right-column duration) are
//! joined on one output row.

use crate::layout::instruction::DrawInstruction;

const ROW_TOLERANCE: f32 = 0.01;

pub fn render_text(instructions: &[DrawInstruction]) -> String {
    let mut out = String::new();
    let mut current_y: Option<f32> = None;

    for run in instructions {
        if run.text.is_empty() {
            continue;
        }
        match current_y {
            Some(y) if (run.y - y).abs() < ROW_TOLERANCE => out.push_str("  "),
            Some(_) => {
                out.push('\n');
                current_y = Some(run.y);
            }
            None => current_y = Some(run.y),
        }
        out.push_str(&run.text);
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
