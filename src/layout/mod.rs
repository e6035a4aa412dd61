//! Mapping a trace model onto a 2D timeline.
//!
//! This module computes:
//! - Row assignment per cluster/engine lane
//! - The time axis domain and its linear scale
//! - Point scales spreading lanes over the plot height

pub mod scales;
pub mod timeline;

// Re-export main types and functions
pub use scales::{LinearScale, PointScale};
pub use timeline::{compute_layout, compute_layout_with, Extent, LayoutConfig, RowKey, ViewScales};
