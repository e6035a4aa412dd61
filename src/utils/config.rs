//! Configuration and constants for the CLI and library.

/// Current model JSON schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default canvas size in pixels, margins included
pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Margins around the plot area, leaving room for the axes
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 40.0;
pub const MARGIN_LEFT: f64 = 120.0;

/// Plot area the margins leave of the default canvas
pub const DEFAULT_PLOT_WIDTH: f64 = DEFAULT_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
pub const DEFAULT_PLOT_HEIGHT: f64 = DEFAULT_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

/// Zoom level limits
pub const MIN_ZOOM_SCALE: f64 = 1.0;
pub const MAX_ZOOM_SCALE: f64 = 100.0;

/// Wheel delta (pixel mode) to log2 zoom factor
pub const WHEEL_SENSITIVITY: f64 = 0.002;

/// Time domain used when a trace has no timestamps at all
pub const EMPTY_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Approximate number of ticks on the time axis
pub const AXIS_TICK_COUNT: usize = 10;

/// Row key of the control register lane
pub const GLOBAL_ROW_KEY: &str = "global";

/// Label drawn next to the control register lane
pub const GLOBAL_ROW_LABEL: &str = "Global Barrier";

/// Marker substring of control register paths
pub const CTRL_REGISTERS_MARKER: &str = "ctrl_registers";

/// Marker substring of completed engine operations
pub const FINISHED_MARKER: &str = "Finished";

// Mark geometry
pub const EVENT_RADIUS: f64 = 5.0;
pub const BAR_HEIGHT: f64 = 20.0;
pub const BAR_OPACITY: f64 = 0.7;
pub const EVENT_COLOR: &str = "blue";
