use crate::layout::LayoutConfig;
use crate::parser::{Engine, TraceFilter};
use crate::session::SessionConfig;
use crate::utils::config::{MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP};
use crate::zoom::Gesture;
use anyhow::Result;
use std::path::PathBuf;

/// Canvas, engine selection, filter and zoom shared by view commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    /// Canvas width in pixels, margins included
    pub width: f64,

    /// Canvas height in pixels, margins included
    pub height: f64,

    /// Engines to draw; empty draws every engine
    pub engines: Vec<Engine>,

    pub filter: TraceFilter,

    /// Zoom factor applied before rendering
    pub zoom: Option<f64>,

    /// Plot x pixel the zoom is anchored at; defaults to the plot center
    pub anchor: Option<f64>,

    /// Horizontal pan in pixels applied after zooming
    pub pan: Option<f64>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        let defaults = SessionConfig::default();
        Self {
            width: defaults.extent.width + MARGIN_LEFT + MARGIN_RIGHT,
            height: defaults.extent.height + MARGIN_TOP + MARGIN_BOTTOM,
            engines: Vec::new(),
            filter: TraceFilter::default(),
            zoom: None,
            anchor: None,
            pan: None,
        }
    }
}

impl ViewOptions {
    /// Session configuration for these options
    pub fn session_config(&self) -> SessionConfig {
        let layout = if self.engines.is_empty() {
            LayoutConfig::default()
        } else {
            LayoutConfig::new().with_engines(self.engines.iter().copied())
        };

        SessionConfig::for_canvas(self.width, self.height)
            .with_layout(layout)
            .with_filter(self.filter.clone())
    }

    /// Gestures replaying the requested zoom and pan
    pub fn gestures(&self, plot_width: f64) -> Vec<Gesture> {
        let mut gestures = Vec::new();
        if let Some(factor) = self.zoom {
            gestures.push(Gesture::Scale {
                factor,
                anchor_x: self.anchor.unwrap_or(plot_width / 2.0),
            });
        }
        if let Some(dx) = self.pan {
            gestures.push(Gesture::Drag { dx });
        }
        gestures
    }

    /// Validate canvas, zoom and window options
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= MARGIN_LEFT + MARGIN_RIGHT {
            anyhow::bail!(
                "Width must be larger than the horizontal margins ({} px)",
                MARGIN_LEFT + MARGIN_RIGHT
            );
        }

        if !self.height.is_finite() || self.height <= MARGIN_TOP + MARGIN_BOTTOM {
            anyhow::bail!(
                "Height must be larger than the vertical margins ({} px)",
                MARGIN_TOP + MARGIN_BOTTOM
            );
        }

        if let Some(zoom) = self.zoom {
            if !zoom.is_finite() || zoom <= 0.0 {
                anyhow::bail!("Zoom factor must be a positive number");
            }
        }

        if self.anchor.is_some() && self.zoom.is_none() {
            anyhow::bail!("--anchor requires --zoom");
        }

        if let Some(anchor) = self.anchor {
            if !anchor.is_finite() {
                anyhow::bail!("Zoom anchor must be a finite number");
            }
        }

        if let Some(pan) = self.pan {
            if !pan.is_finite() {
                anyhow::bail!("Pan must be a finite number");
            }
        }

        validate_filter(&self.filter)
    }
}

/// Validate a cluster/time filter
pub fn validate_filter(filter: &TraceFilter) -> Result<()> {
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from > to {
            anyhow::bail!("--from ({}) must not be after --to ({})", from, to);
        }
    }

    if let Some(bad) = filter.clusters.iter().find(|c| !is_cluster_id(c)) {
        anyhow::bail!("Invalid cluster identifier '{}', expected cluster_<N>", bad);
    }

    Ok(())
}

fn is_cluster_id(id: &str) -> bool {
    id.strip_prefix("cluster_")
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// Arguments for the render command
#[derive(Debug, Clone, PartialEq)]
pub struct RenderArgs {
    /// Trace file to read
    pub input: PathBuf,

    /// Output path for the SVG timeline
    pub output: PathBuf,

    pub view: ViewOptions,

    /// Title drawn above the timeline
    pub title: Option<String>,

    /// Print the engine summary to stdout
    pub print_summary: bool,
}

/// Export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Versioned JSON document with the full model
    Model,

    /// Per-cluster ROI tracks
    Roi,
}

/// Arguments for the export command
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: ExportFormat,
    pub filter: TraceFilter,
}

/// Arguments for the summary command
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryArgs {
    pub input: PathBuf,
    pub filter: TraceFilter,

    /// Print JSON instead of a table
    pub json: bool,
}

/// Arguments for the probe command
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeArgs {
    pub input: PathBuf,
    pub view: ViewOptions,

    /// Pointer x in plot pixels
    pub x: f64,

    /// Pointer y in plot pixels
    pub y: f64,
}
