//! Render command implementation.
//!
//! The render command:
//! 1. Loads and parses the trace file
//! 2. Lays out the timeline
//! 3. Replays the requested zoom and pan
//! 4. Writes the SVG snapshot

use super::models::RenderArgs;
use crate::aggregator::generate_text_summary;
use crate::output::write_svg;
use crate::render::TimelineSvgConfig;
use crate::session::TimelineSession;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or binary trace file
/// * SVG write errors
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering timeline for: {}", args.input.display());

    // Step 1: Load trace
    info!("Step 1/4: Loading trace...");
    let mut session = TimelineSession::new(args.view.session_config());
    let loaded = session
        .load_file(&args.input)
        .with_context(|| format!("Failed to load trace {}", args.input.display()))?;

    if !loaded.report.issues.is_empty() {
        warn!("{} malformed lines were skipped", loaded.report.issues.len());
    }

    // Step 2: Layout
    info!("Step 2/4: Computing layout...");
    debug!(
        "{} rows, time domain {:?}",
        loaded.scales.rows.len(),
        loaded.scales.time.domain()
    );
    let plot_width = session.config().extent.width;

    // Step 3: Zoom
    let gestures = args.view.gestures(plot_width);
    if gestures.is_empty() {
        info!("Step 3/4: No zoom requested");
    } else {
        info!("Step 3/4: Applying {} gestures...", gestures.len());
        for gesture in gestures {
            session.apply_gesture(gesture);
        }
    }

    // Step 4: Write SVG
    info!("Step 4/4: Writing SVG...");
    let mut svg_config = TimelineSvgConfig::new();
    if let Some(title) = &args.title {
        svg_config = svg_config.with_title(title.as_str());
    }
    let svg = session
        .render_svg(&svg_config)
        .context("No trace loaded")?;
    write_svg(&svg, &args.output).context("Failed to write timeline SVG")?;

    info!("✓ Timeline written to: {}", args.output.display());

    if args.print_summary {
        if let Some(loaded) = session.current() {
            println!("\n{}", generate_text_summary(&loaded.model));
        }
    }

    info!("Render completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_render_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input trace path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    args.view.validate()
}
