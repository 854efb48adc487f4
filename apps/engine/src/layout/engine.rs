//! The layout/flow engine.
//!
//! One pass walks the fixed section sequence (Header, Summary, Experience,
//! Education, Skills, Projects), carrying a single vertical cursor from the
//! top margin downward and emitting one `DrawInstruction` per text run. The
//! cursor advance after each section must exactly match the instructions
//! emitted for it, or later sections collide with earlier ones; every
//! advance below is paired with the runs it accounts for.
//!
//! The engine renders whatever record it is given (validation is a separate,
//! advisory concern) and fails only when the measurement capability fails.
//! Identical inputs produce an identical instruction sequence, so the
//! preview surface and the export writer can both interpret one layout
//! without drift.

use serde::{Deserialize, Serialize};

use crate::layout::geometry::PageGeometry;
use crate::layout::instruction::{
    DrawInstruction, INK, MUTED, SIZE_BODY, SIZE_ENTRY, SIZE_NAME, SIZE_SECTION, SIZE_TITLE,
};
use crate::layout::measure::{MeasureError, TextMeasurer};
use crate::models::resume::{PersonalInfo, ResumeDocument};
use crate::models::style::{Rgb, Style};

// ────────────────────────────────────────────────────────────────────────────
// Vertical rhythm (mm)
// ────────────────────────────────────────────────────────────────────────────

const NAME_ADVANCE: f32 = 10.0;
const TITLE_ADVANCE: f32 = 10.0;
const CONTACT_ADVANCE: f32 = 15.0;
const SECTION_HEADER_ADVANCE: f32 = 8.0;
/// Line height for summary and skills body text.
const BODY_LINE_HEIGHT: f32 = 5.0;
/// Gap after the summary and skills bodies.
const SECTION_GAP: f32 = 10.0;
/// Advance past an experience role/company/duration row.
const ENTRY_ROW_ADVANCE: f32 = 12.0;
/// Offset of the company/school line under its role/degree line.
const SUB_ROW_OFFSET: f32 = 5.0;
/// Line height for experience and project description text.
const DESC_LINE_HEIGHT: f32 = 4.0;
/// Gap after a description block.
const DESC_GAP: f32 = 8.0;
const EDUCATION_ROW_ADVANCE: f32 = 15.0;
const PROJECT_NAME_ADVANCE: f32 = 5.0;
const TECH_ADVANCE: f32 = 6.0;

const SUMMARY_TITLE: &str = "Professional Summary";
const EXPERIENCE_TITLE: &str = "Experience";
const EDUCATION_TITLE: &str = "Education";
const SKILLS_TITLE: &str = "Skills";
const PROJECTS_TITLE: &str = "Projects";

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Wrapped body-line counts per flowing section, plus where the cursor
/// stopped. `end_cursor` past `page_height - margin` means the record is too
/// long for one page; the engine reports it and leaves the decision to the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub summary_lines: usize,
    pub experience_lines: usize,
    pub skills_lines: usize,
    pub project_lines: usize,
    pub end_cursor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub instructions: Vec<DrawInstruction>,
    pub metrics: LayoutMetrics,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays out one résumé record as a sequence of positioned text runs.
///
/// Sections with no filled entries are skipped entirely (no header, no
/// cursor movement), with two exceptions: the header block always renders,
/// and the skills section always renders its heading (an empty skill list is
/// the validator's business, not a layout concern).
pub fn layout(
    doc: &ResumeDocument,
    style: &Style,
    measurer: &dyn TextMeasurer,
    geometry: &PageGeometry,
) -> Result<Layout, MeasureError> {
    let mut pass = Pass {
        out: Vec::new(),
        metrics: LayoutMetrics::default(),
        cursor: geometry.margin,
        accent: style.accent,
        geometry,
        measurer,
    };

    pass.header(&doc.personal);
    pass.summary(&doc.personal.summary)?;
    pass.experience(doc)?;
    pass.education(doc);
    pass.skills(doc)?;
    pass.projects(doc)?;

    pass.metrics.end_cursor = pass.cursor;
    Ok(Layout {
        instructions: pass.out,
        metrics: pass.metrics,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// One layout pass
// ────────────────────────────────────────────────────────────────────────────

struct Pass<'a> {
    out: Vec<DrawInstruction>,
    metrics: LayoutMetrics,
    cursor: f32,
    accent: Rgb,
    geometry: &'a PageGeometry,
    measurer: &'a dyn TextMeasurer,
}

impl Pass<'_> {
    fn push(&mut self, x: f32, y: f32, text: impl Into<String>, font_size: f32, color: Rgb) {
        self.out.push(DrawInstruction::new(x, y, text, font_size, color));
    }

    fn section_header(&mut self, title: &str) {
        self.push(self.geometry.margin, self.cursor, title, SIZE_SECTION, self.accent);
        self.cursor += SECTION_HEADER_ADVANCE;
    }

    /// Wraps `text` to the content column and emits one run per line at
    /// `line_height` spacing. Returns the line count; the caller owns the
    /// cursor advance so the gap stays next to the math it belongs to.
    fn flow_body(
        &mut self,
        text: &str,
        line_height: f32,
        color: Rgb,
    ) -> Result<usize, MeasureError> {
        let lines = self
            .measurer
            .wrap_to_lines(text, self.geometry.content_width, SIZE_BODY)?;
        for (i, line) in lines.iter().enumerate() {
            self.push(
                self.geometry.margin,
                self.cursor + i as f32 * line_height,
                line.clone(),
                SIZE_BODY,
                color,
            );
        }
        Ok(lines.len())
    }

    fn header(&mut self, personal: &PersonalInfo) {
        let margin = self.geometry.margin;
        self.push(margin, self.cursor, personal.name.clone(), SIZE_NAME, INK);
        self.cursor += NAME_ADVANCE;

        self.push(margin, self.cursor, personal.title.clone(), SIZE_TITLE, self.accent);
        self.cursor += TITLE_ADVANCE;

        self.push(margin, self.cursor, contact_line(personal), SIZE_BODY, MUTED);
        self.cursor += CONTACT_ADVANCE;
    }

    fn summary(&mut self, summary: &str) -> Result<(), MeasureError> {
        if summary.trim().is_empty() {
            return Ok(());
        }
        self.section_header(SUMMARY_TITLE);
        let lines = self.flow_body(summary, BODY_LINE_HEIGHT, INK)?;
        self.metrics.summary_lines = lines;
        self.cursor += lines as f32 * BODY_LINE_HEIGHT + SECTION_GAP;
        Ok(())
    }

    fn experience(&mut self, doc: &ResumeDocument) -> Result<(), MeasureError> {
        let entries: Vec<_> = doc.experience.iter().filter(|e| e.is_filled()).collect();
        if entries.is_empty() {
            return Ok(());
        }
        self.section_header(EXPERIENCE_TITLE);

        let margin = self.geometry.margin;
        for entry in entries {
            self.push(margin, self.cursor, entry.role.clone(), SIZE_ENTRY, INK);
            self.push(
                margin,
                self.cursor + SUB_ROW_OFFSET,
                entry.company.clone(),
                SIZE_BODY,
                self.accent,
            );
            self.push(
                self.geometry.right_column_x,
                self.cursor + SUB_ROW_OFFSET,
                entry.duration.clone(),
                SIZE_BODY,
                MUTED,
            );
            self.cursor += ENTRY_ROW_ADVANCE;

            // The row advance already separates entries; only a description
            // block moves the cursor further.
            if !entry.description.trim().is_empty() {
                let lines = self.flow_body(&entry.description, DESC_LINE_HEIGHT, INK)?;
                self.metrics.experience_lines += lines;
                self.cursor += lines as f32 * DESC_LINE_HEIGHT + DESC_GAP;
            }
        }
        Ok(())
    }

    fn education(&mut self, doc: &ResumeDocument) {
        let entries: Vec<_> = doc.education.iter().filter(|e| e.is_filled()).collect();
        if entries.is_empty() {
            return;
        }
        self.section_header(EDUCATION_TITLE);

        let margin = self.geometry.margin;
        for entry in entries {
            // Degrees and years are assumed short; no wrapping here.
            self.push(margin, self.cursor, entry.degree.clone(), SIZE_ENTRY, INK);
            self.push(
                margin,
                self.cursor + SUB_ROW_OFFSET,
                entry.school.clone(),
                SIZE_BODY,
                self.accent,
            );
            self.push(
                self.geometry.right_column_x,
                self.cursor + SUB_ROW_OFFSET,
                entry.year.clone(),
                SIZE_BODY,
                MUTED,
            );
            self.cursor += EDUCATION_ROW_ADVANCE;
        }
    }

    fn skills(&mut self, doc: &ResumeDocument) -> Result<(), MeasureError> {
        self.section_header(SKILLS_TITLE);
        let joined = crate::models::resume::skills_field(&doc.skills);
        let lines = self.flow_body(&joined, BODY_LINE_HEIGHT, INK)?;
        self.metrics.skills_lines = lines;
        self.cursor += lines as f32 * BODY_LINE_HEIGHT + SECTION_GAP;
        Ok(())
    }

    fn projects(&mut self, doc: &ResumeDocument) -> Result<(), MeasureError> {
        let entries: Vec<_> = doc.projects.iter().filter(|p| p.is_filled()).collect();
        if entries.is_empty() {
            return Ok(());
        }
        self.section_header(PROJECTS_TITLE);

        let margin = self.geometry.margin;
        for entry in entries {
            self.push(margin, self.cursor, entry.name.clone(), SIZE_ENTRY, INK);
            self.cursor += PROJECT_NAME_ADVANCE;

            if !entry.description.trim().is_empty() {
                let lines = self.flow_body(&entry.description, DESC_LINE_HEIGHT, INK)?;
                self.metrics.project_lines += lines;
                self.cursor += lines as f32 * DESC_LINE_HEIGHT + DESC_GAP;
            }
            if !entry.tech.trim().is_empty() {
                self.push(
                    margin,
                    self.cursor,
                    format!("Technologies: {}", entry.tech.trim()),
                    SIZE_BODY,
                    MUTED,
                );
                self.cursor += TECH_ADVANCE;
            }
        }
        Ok(())
    }
}

/// Email, phone, and location joined with `" | "`; linkedin appended only
/// when non-empty.
fn contact_line(personal: &PersonalInfo) -> String {
    let mut line = format!(
        "{} | {} | {}",
        personal.email, personal.phone, personal.location
    );
    if !personal.linkedin.is_empty() {
        line.push_str(" | ");
        line.push_str(&personal.linkedin);
    }
    line
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
