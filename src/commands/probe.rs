//! Probe command implementation.
//!
//! Replays a zoom on a trace and reports what a pointer at a given plot
//! position would show in its tooltip.

use super::models::ProbeArgs;
use crate::render::{Point, TooltipState};
use crate::session::TimelineSession;
use anyhow::{Context, Result};

/// Execute the probe command
///
/// **Public** - main entry point called from main.rs
pub fn execute_probe(args: ProbeArgs) -> Result<()> {
    println!("{}", probe_text(&args)?);
    Ok(())
}

/// Build the report printed by the probe command
pub fn probe_text(args: &ProbeArgs) -> Result<String> {
    let mut session = TimelineSession::new(args.view.session_config());
    session
        .load_file(&args.input)
        .with_context(|| format!("Failed to load trace {}", args.input.display()))?;

    for gesture in args.view.gestures(session.config().extent.width) {
        session.apply_gesture(gesture);
    }

    let loaded = session.current().context("No trace loaded")?;
    let (from, to) = loaded.transform.visible_domain(&loaded.scales.time);

    let mut out = String::new();
    out.push_str(&format!(
        "Zoom: k={:.3} x={:.1}\n",
        loaded.transform.scale_factor(),
        loaded.transform.translate_x()
    ));
    out.push_str(&format!("Visible: {:.1} ns ---> {:.1} ns\n", from, to));

    let mut tooltip = TooltipState::new();
    match session.hover(Point::new(args.x, args.y), &mut tooltip) {
        Some(text) => out.push_str(&format!("Tooltip: {}", text)),
        None => out.push_str("Tooltip: nothing under pointer"),
    }

    Ok(out)
}
