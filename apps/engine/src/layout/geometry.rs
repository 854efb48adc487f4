//! Fixed page geometry shared by the engine and both rendering surfaces.
//!
//! All lengths are millimeters measured from the top-left page corner.
//! `page_height` is advisory: the engine lays out a single page and does not
//! paginate, so content past the bottom margin is the caller's concern.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    /// Top and left margin; the cursor starts here.
    pub margin: f32,
    /// Usable column width for wrapped body text.
    pub content_width: f32,
    /// X position of the right column (durations, years).
    pub right_column_x: f32,
}

impl PageGeometry {
    /// A4 portrait with the builder's margins: 20mm margin, 170mm column,
    /// right column at 150mm.
    pub fn a4() -> Self {
        PageGeometry {
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            content_width: 170.0,
            right_column_x: 150.0,
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_geometry_sanity() {
        let geometry = PageGeometry::a4();
        assert_eq!(geometry.page_width, 210.0);
        assert_eq!(geometry.page_height, 297.0);
        // Column plus both margins spans the page exactly.
        assert_eq!(geometry.margin * 2.0 + geometry.content_width, geometry.page_width);
        assert!(geometry.right_column_x < geometry.margin + geometry.content_width);
    }
}
