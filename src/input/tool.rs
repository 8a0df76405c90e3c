//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The toolbox offers one button per variant. The selected tool decides which
/// operation the session runs; the per-kind table below carries the static
/// behaviour the host needs (labels, icons, status-bar text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Rectangle outline - from corner to corner
    RectOutline,
    /// Ellipse outline inscribed in the dragged box
    EllipseOutline,
    /// Filled rectangle
    RectFill,
    /// Filled ellipse
    EllipseFill,
    /// Freehand stroke following the pointer
    Freehand,
    /// Click-to-place polyline, right-click finishes
    Polyline,
    /// Confirm-then-clear of the whole canvas
    Clear,
}

impl ToolKind {
    /// Toolbox order.
    pub const ALL: [ToolKind; 7] = [
        ToolKind::RectOutline,
        ToolKind::RectFill,
        ToolKind::EllipseOutline,
        ToolKind::EllipseFill,
        ToolKind::Freehand,
        ToolKind::Polyline,
        ToolKind::Clear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::RectOutline => "rectangle(line)",
            ToolKind::EllipseOutline => "ellipse(line)",
            ToolKind::RectFill => "rectangle(fill)",
            ToolKind::EllipseFill => "ellipse(fill)",
            ToolKind::Freehand => "freehand",
            ToolKind::Polyline => "polyline",
            ToolKind::Clear => "clear",
        }
    }

    /// Material Design icon name for the toolbox button.
    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::RectOutline => "rectangle-outline",
            ToolKind::EllipseOutline => "ellipse-outline",
            ToolKind::RectFill => "rectangle",
            ToolKind::EllipseFill => "ellipse",
            ToolKind::Freehand => "signature-freehand",
            ToolKind::Polyline => "vector-polyline",
            ToolKind::Clear => "delete-alert",
        }
    }

    /// Status-bar hint shown while the tool is selected.
    pub fn helper_text(self) -> &'static str {
        match self {
            ToolKind::RectOutline
            | ToolKind::EllipseOutline
            | ToolKind::RectFill
            | ToolKind::EllipseFill
            | ToolKind::Freehand => "left-button to draw",
            ToolKind::Polyline => "left-button to extend. right-button to finish.",
            ToolKind::Clear => "",
        }
    }

    /// Whether the operation returns to waiting for a new gesture after finishing.
    pub fn loops(self) -> bool {
        !matches!(self, ToolKind::Polyline | ToolKind::Clear)
    }

    /// Whether finishing the operation releases the toolbox selection.
    pub fn resets_selection_on_exit(self) -> bool {
        matches!(self, ToolKind::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_drag_tools_loop() {
        let looping: Vec<_> = ToolKind::ALL.into_iter().filter(|t| t.loops()).collect();
        assert_eq!(
            looping,
            vec![
                ToolKind::RectOutline,
                ToolKind::RectFill,
                ToolKind::EllipseOutline,
                ToolKind::EllipseFill,
                ToolKind::Freehand,
            ]
        );
    }

    #[test]
    fn clear_has_no_helper_text() {
        assert_eq!(ToolKind::Clear.helper_text(), "");
        assert!(ToolKind::Clear.resets_selection_on_exit());
        assert!(ToolKind::Polyline.helper_text().contains("right-button"));
    }
}
