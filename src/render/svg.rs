//! SVG timeline generation.
//!
//! Produces a static snapshot of the timeline under the current zoom
//! transform: axes, lane labels, one circle per control event and one
//! bar per engine interval. Every mark carries its description as a
//! native `<title>` tooltip.

use super::marks::{build_marks, Mark};
use crate::layout::{LinearScale, ViewScales};
use crate::parser::TraceModel;
use crate::utils::config::{
    AXIS_TICK_COUNT, BAR_OPACITY, EVENT_COLOR, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP,
};
use crate::zoom::ZoomTransform;
use log::info;

/// Timeline SVG configuration
#[derive(Debug, Clone)]
pub struct TimelineSvgConfig {
    pub title: Option<String>,

    /// Text shown instead of marks when the trace has no events
    pub empty_message: String,
}

impl Default for TimelineSvgConfig {
    fn default() -> Self {
        Self {
            title: None,
            empty_message: "No events found".to_string(),
        }
    }
}

impl TimelineSvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Generate the SVG document of a timeline view
pub fn generate_timeline_svg(
    model: &TraceModel,
    scales: &ViewScales,
    transform: &ZoomTransform,
    config: &TimelineSvgConfig,
) -> String {
    let (_, width) = scales.time.range();
    let height = scales.rows.step() * scales.rows.len() as f64;
    let total_width = width + MARGIN_LEFT + MARGIN_RIGHT;
    let total_height = height + MARGIN_TOP + MARGIN_BOTTOM;

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        fmt_px(total_width),
        fmt_px(total_height),
        fmt_px(total_width),
        fmt_px(total_height)
    ));
    svg.push_str(
        r#"<style>text { font: 10px sans-serif; } .title { font-size: 14px; font-weight: bold; } .event-circle:hover, .process-rect:hover { stroke: black; stroke-width: 1; cursor: pointer; }</style>"#,
    );
    svg.push_str(&format!(
        r#"<defs><clipPath id="plot-clip"><rect x="0" y="0" width="{}" height="{}"/></clipPath></defs>"#,
        fmt_px(width),
        fmt_px(height)
    ));

    if let Some(title) = &config.title {
        svg.push_str(&format!(
            r#"<text class="title" x="{}" y="14" text-anchor="middle">{}</text>"#,
            fmt_px(total_width / 2.0),
            escape_xml(title)
        ));
    }

    svg.push_str(&format!(
        r#"<g transform="translate({},{})">"#,
        fmt_px(MARGIN_LEFT),
        fmt_px(MARGIN_TOP)
    ));

    let time = transform.rescale(&scales.time);
    render_time_axis(&mut svg, &time, transform.visible_domain(&scales.time), width, height);
    render_row_axis(&mut svg, scales, height);

    if scales.empty {
        svg.push_str(&format!(
            r#"<text class="empty-state" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            fmt_px(width / 2.0),
            fmt_px(height / 2.0),
            escape_xml(&config.empty_message)
        ));
    } else {
        let marks = build_marks(model, scales, transform);
        svg.push_str(r#"<g clip-path="url(#plot-clip)">"#);
        for mark in &marks {
            render_mark(&mut svg, mark);
        }
        svg.push_str("</g>");
    }

    svg.push_str("</g></svg>");

    info!("Timeline SVG generated ({} bytes)", svg.len());
    svg
}

/// Bottom axis with ticks over the visible time range
fn render_time_axis(svg: &mut String, time: &LinearScale, visible: (f64, f64), width: f64, height: f64) {
    svg.push_str(&format!(
        r#"<g class="x-axis" transform="translate(0,{})">"#,
        fmt_px(height)
    ));
    svg.push_str(&format!(
        r#"<line x1="0" y1="0" x2="{}" y2="0" stroke="black"/>"#,
        fmt_px(width)
    ));

    let ticks = LinearScale::new(visible, (0.0, width)).ticks(AXIS_TICK_COUNT);
    for tick in ticks {
        let x = time.apply(tick);
        svg.push_str(&format!(
            r#"<line x1="{x}" y1="0" x2="{x}" y2="6" stroke="black"/><text x="{x}" y="18" text-anchor="middle">{} ns</text>"#,
            tick.round(),
            x = fmt_px(x)
        ));
    }
    svg.push_str("</g>");
}

/// Left axis with one label per lane
fn render_row_axis(svg: &mut String, scales: &ViewScales, height: f64) {
    svg.push_str(r#"<g class="y-axis">"#);
    svg.push_str(&format!(
        r#"<line x1="0" y1="0" x2="0" y2="{}" stroke="black"/>"#,
        fmt_px(height)
    ));
    for (key, y) in scales.rows.iter() {
        svg.push_str(&format!(
            r#"<line x1="-6" y1="{y}" x2="0" y2="{y}" stroke="black"/><text x="-9" y="{y}" dy="0.32em" text-anchor="end">{}</text>"#,
            escape_xml(&key.label()),
            y = fmt_px(y)
        ));
    }
    svg.push_str("</g>");
}

fn render_mark(svg: &mut String, mark: &Mark<'_>) {
    match *mark {
        Mark::Event {
            cx,
            cy,
            r,
            description,
        } => svg.push_str(&format!(
            r#"<circle class="event-circle" cx="{}" cy="{}" r="{}" fill="{}"><title>{}</title></circle>"#,
            fmt_px(cx),
            fmt_px(cy),
            fmt_px(r),
            EVENT_COLOR,
            escape_xml(description)
        )),
        Mark::Interval {
            x,
            y,
            width,
            height,
            engine,
            description,
        } => svg.push_str(&format!(
            r#"<rect class="process-rect" x="{}" y="{}" width="{}" height="{}" fill="{}" opacity="{}"><title>{}</title></rect>"#,
            fmt_px(x),
            fmt_px(y),
            fmt_px(width),
            fmt_px(height),
            engine.color(),
            BAR_OPACITY,
            escape_xml(description)
        )),
    }
}

/// Pixel values with two decimals, trailing zeros dropped
fn fmt_px(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
