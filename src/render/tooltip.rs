//! Tooltip control injected into the renderer.

use super::marks::{hit_test, Mark, Point};

/// Surface able to show one tooltip at a time
pub trait TooltipController {
    /// Show `text` next to `position`
    fn show(&mut self, text: &str, position: Point);

    /// Hide the tooltip if visible
    fn hide(&mut self);
}

/// In-memory tooltip, for headless use
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    visible: Option<(String, Point)>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.visible.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn position(&self) -> Option<Point> {
        self.visible.as_ref().map(|(_, position)| *position)
    }

    pub fn is_visible(&self) -> bool {
        self.visible.is_some()
    }
}

impl TooltipController for TooltipState {
    fn show(&mut self, text: &str, position: Point) {
        self.visible = Some((text.to_string(), position));
    }

    fn hide(&mut self) {
        self.visible = None;
    }
}

/// Pixel offset of the tooltip from the pointer
const TOOLTIP_OFFSET: (f64, f64) = (10.0, -10.0);

/// Pointer moved over the plot: show the hovered mark's description
/// or hide the tooltip when nothing is under the pointer
///
/// Returns the hovered mark.
pub fn hover<'m, 'a>(
    marks: &'m [Mark<'a>],
    pointer: Point,
    tooltip: &mut dyn TooltipController,
) -> Option<&'m Mark<'a>> {
    match hit_test(marks, pointer) {
        Some(mark) => {
            let at = Point::new(pointer.x + TOOLTIP_OFFSET.0, pointer.y + TOOLTIP_OFFSET.1);
            tooltip.show(mark.description(), at);
            Some(mark)
        }
        None => {
            tooltip.hide();
            None
        }
    }
}

/// Pointer left the plot
pub fn leave(tooltip: &mut dyn TooltipController) {
    tooltip.hide();
}
