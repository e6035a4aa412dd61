//! Drawing the timeline from the model, its layout and the zoom state.
//!
//! This module handles:
//! - Positioning marks under the current transform
//! - Hover hit-testing driving an injected tooltip controller
//! - SVG snapshot generation

pub mod marks;
pub mod svg;
pub mod tooltip;

// Re-export main types
pub use marks::{build_marks, hit_test, Mark, Point};
pub use svg::{generate_timeline_svg, TimelineSvgConfig};
pub use tooltip::{hover, leave, TooltipController, TooltipState};
