//! State of one open timeline.
//!
//! A session holds at most one loaded trace together with its layout and
//! zoom transform. Loading builds the whole new state before touching the
//! current one, so a failed load keeps the previous trace on screen.

use crate::layout::{compute_layout_with, Extent, LayoutConfig, ViewScales};
use crate::parser::{load_trace_file, parse_trace_str, ParseReport, ParsedTrace, TraceFilter, TraceModel};
use crate::render::{build_marks, generate_timeline_svg, hover, Mark, Point, TimelineSvgConfig, TooltipController};
use crate::utils::config::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, MAX_ZOOM_SCALE,
    MIN_ZOOM_SCALE,
};
use crate::utils::error::LoadError;
use crate::zoom::{Gesture, ZoomConfig, ZoomTransform};
use log::info;
use std::path::Path;

/// Options applied to every trace loaded into a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Plot area, margins excluded
    pub extent: Extent,
    pub layout: LayoutConfig,
    pub filter: TraceFilter,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::for_canvas(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl SessionConfig {
    /// Config for a full canvas; the plot area is what the margins leave
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            extent: Extent::new(width - MARGIN_LEFT - MARGIN_RIGHT, height - MARGIN_TOP - MARGIN_BOTTOM),
            layout: LayoutConfig::default(),
            filter: TraceFilter::default(),
            min_zoom: MIN_ZOOM_SCALE,
            max_zoom: MAX_ZOOM_SCALE,
        }
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_filter(mut self, filter: TraceFilter) -> Self {
        self.filter = filter;
        self
    }

    fn zoom_config(&self) -> ZoomConfig {
        ZoomConfig::new(self.extent.width).with_scale_bounds(self.min_zoom, self.max_zoom)
    }
}

/// A trace that is currently displayed
#[derive(Debug, Clone)]
pub struct LoadedTrace {
    /// Where the trace came from, usually a file path
    pub source: String,
    pub model: TraceModel,
    pub report: ParseReport,
    pub scales: ViewScales,
    pub transform: ZoomTransform,
}

/// Single-trace timeline session
#[derive(Debug, Clone, Default)]
pub struct TimelineSession {
    config: SessionConfig,
    current: Option<LoadedTrace>,
}

impl TimelineSession {
    pub fn new(config: SessionConfig) -> Self {
        Self { config, current: None }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The loaded trace, if any
    pub fn current(&self) -> Option<&LoadedTrace> {
        self.current.as_ref()
    }

    /// Load a trace file, replacing the current trace
    ///
    /// **Public** - main entry point for opening a trace
    ///
    /// # Errors
    /// * `LoadError::Io` - the file cannot be read
    /// * `LoadError::NotText` - the file is binary
    ///
    /// On error the previously loaded trace is kept.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&LoadedTrace, LoadError> {
        let path = path.as_ref();
        let parsed = load_trace_file(path)?;
        Ok(self.install(path.display().to_string(), parsed))
    }

    /// Load trace text that is already in memory
    pub fn load_text(&mut self, source: impl Into<String>, text: &str) -> &LoadedTrace {
        let parsed = parse_trace_str(text);
        self.install(source.into(), parsed)
    }

    fn install(&mut self, source: String, parsed: ParsedTrace) -> &LoadedTrace {
        let model = if self.config.filter.is_noop() {
            parsed.model
        } else {
            self.config.filter.apply(&parsed.model)
        };
        let scales = compute_layout_with(&model, self.config.extent, &self.config.layout);
        let transform = ZoomTransform::new(self.config.zoom_config());

        info!(
            "Loaded {}: {} control events, {} intervals in {} clusters",
            source,
            model.control_events.len(),
            model.interval_count(),
            model.clusters.len()
        );

        self.current.insert(LoadedTrace {
            source,
            model,
            report: parsed.report,
            scales,
            transform,
        })
    }

    /// Drop the loaded trace
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Apply a zoom or pan gesture; returns whether the view changed
    pub fn apply_gesture(&mut self, gesture: Gesture) -> bool {
        match self.current.as_mut() {
            Some(loaded) => loaded.transform.update(gesture),
            None => false,
        }
    }

    /// Marks of the loaded trace under the current transform
    pub fn marks(&self) -> Vec<Mark<'_>> {
        match &self.current {
            Some(loaded) => build_marks(&loaded.model, &loaded.scales, &loaded.transform),
            None => Vec::new(),
        }
    }

    /// Hover the plot at `pointer`; returns the description under it
    pub fn hover(&self, pointer: Point, tooltip: &mut dyn TooltipController) -> Option<String> {
        let marks = self.marks();
        hover(&marks, pointer, tooltip).map(|mark| mark.description().to_string())
    }

    /// SVG snapshot of the current view
    pub fn render_svg(&self, config: &TimelineSvgConfig) -> Option<String> {
        self.current
            .as_ref()
            .map(|loaded| generate_timeline_svg(&loaded.model, &loaded.scales, &loaded.transform, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Engine;
    use crate::render::TooltipState;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TRACE: &str = "0: 0: [ctrl_registers] start\n\
                         100: 100: [/chip/cluster_0/redmule/trace] Finished : 0 ns ---> 100 ns\n";

    #[test]
    fn test_load_text_builds_view() {
        let mut session = TimelineSession::default();
        let loaded = session.load_text("inline", TRACE);

        assert_eq!(loaded.model.interval_count(), 1);
        assert_eq!(loaded.scales.rows.len(), 2);
        assert!(loaded.transform.is_identity());
        assert_eq!(loaded.scales.time.range(), (0.0, 660.0));
    }

    #[test]
    fn test_failed_load_keeps_previous_trace() {
        let mut session = TimelineSession::default();
        session.load_text("inline", TRACE);

        let mut binary = NamedTempFile::new().unwrap();
        binary.write_all(&[0x00, 0xff, 0x10]).unwrap();

        assert!(matches!(session.load_file(binary.path()), Err(LoadError::NotText(_))));
        assert_eq!(session.current().unwrap().source, "inline");
    }

    #[test]
    fn test_reload_resets_transform() {
        let mut session = TimelineSession::default();
        session.load_text("first", TRACE);
        assert!(session.apply_gesture(Gesture::Scale {
            factor: 4.0,
            anchor_x: 100.0
        }));
        assert!(!session.current().unwrap().transform.is_identity());

        session.load_text("second", TRACE);
        assert!(session.current().unwrap().transform.is_identity());
    }

    #[test]
    fn test_gesture_without_trace() {
        let mut session = TimelineSession::default();
        assert!(!session.apply_gesture(Gesture::Drag { dx: 10.0 }));
        assert!(session.marks().is_empty());
        assert!(session.render_svg(&TimelineSvgConfig::new()).is_none());
    }

    #[test]
    fn test_hover_bar() {
        let mut session = TimelineSession::default();
        let loaded = session.load_text("inline", TRACE);
        let y = loaded
            .scales
            .row(&crate::layout::RowKey::engine("cluster_0", Engine::Redmule))
            .unwrap();

        let mut tooltip = TooltipState::new();
        let text = session.hover(Point::new(330.0, y), &mut tooltip);
        assert_eq!(text.as_deref(), Some("Finished : 0 ns ---> 100 ns"));
        assert!(tooltip.is_visible());
    }

    #[test]
    fn test_filter_and_engine_selection() {
        let config = SessionConfig::default()
            .with_layout(LayoutConfig::new().with_engines([Engine::Idma]))
            .with_filter(TraceFilter::new().with_clusters(["cluster_0"]));
        let mut session = TimelineSession::new(config);
        let loaded = session.load_text("inline", TRACE);

        assert_eq!(loaded.model.clusters.len(), 1);
        assert_eq!(loaded.scales.rows.len(), 1);
    }

    #[test]
    fn test_close() {
        let mut session = TimelineSession::default();
        session.load_text("inline", TRACE);
        session.close();
        assert!(session.current().is_none());
    }
}
