//! SoftHier Trace Visual CLI
//!
//! A timeline viewer for SoftHier/GVSoC simulator traces.
//! Renders SVG timelines, exports models and summarizes engine activity.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use softhier_trace_visual::commands::{
    display_schema, display_version, execute_export, execute_probe, execute_render, execute_summary,
    validate_document_file, validate_export_args, validate_filter, validate_render_args, ExportArgs, ExportFormat, ProbeArgs,
    RenderArgs, SummaryArgs, ViewOptions,
};
use softhier_trace_visual::parser::{Engine, TraceFilter};
use softhier_trace_visual::utils::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// SoftHier Trace Visual - timelines for SoftHier simulator traces
#[derive(Parser, Debug)]
#[command(name = "trace-visual")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Cluster and time window selection
#[derive(Args, Debug)]
struct FilterOpts {
    /// Keep only these clusters (repeatable, e.g. cluster_0)
    #[arg(long = "cluster")]
    clusters: Vec<String>,

    /// Start of the time window in ns
    #[arg(long)]
    from: Option<u64>,

    /// End of the time window in ns
    #[arg(long)]
    to: Option<u64>,
}

impl FilterOpts {
    fn into_filter(self) -> TraceFilter {
        TraceFilter::new()
            .with_clusters(self.clusters)
            .with_window(self.from, self.to)
    }
}

/// Canvas, engines and zoom of a rendered view
#[derive(Args, Debug)]
struct ViewOpts {
    /// Canvas width in pixels
    #[arg(long, env = "TRACE_VISUAL_WIDTH", default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, env = "TRACE_VISUAL_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// Engines to draw (defaults to all)
    #[arg(long, value_enum, value_delimiter = ',')]
    engines: Vec<Engine>,

    /// Zoom factor (1-100)
    #[arg(long)]
    zoom: Option<f64>,

    /// Plot x pixel to zoom around (defaults to the center)
    #[arg(long)]
    anchor: Option<f64>,

    /// Horizontal pan in pixels after zooming
    #[arg(long, allow_hyphen_values = true)]
    pan: Option<f64>,

    #[command(flatten)]
    filter: FilterOpts,
}

impl ViewOpts {
    fn into_view(self) -> ViewOptions {
        ViewOptions {
            width: self.width,
            height: self.height,
            engines: self.engines,
            filter: self.filter.into_filter(),
            zoom: self.zoom,
            anchor: self.anchor,
            pan: self.pan,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a trace to an SVG timeline
    Render {
        /// Trace file to read
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the SVG timeline
        #[arg(short, long, default_value = "timeline.svg")]
        output: PathBuf,

        /// Timeline title
        #[arg(long)]
        title: Option<String>,

        /// Print engine summary to stdout
        #[arg(long)]
        summary: bool,

        #[command(flatten)]
        view: ViewOpts,
    },

    /// Export the parsed trace as JSON
    Export {
        /// Trace file to read
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON file
        #[arg(short, long, default_value = "trace.json")]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Model)]
        format: ExportFormat,

        #[command(flatten)]
        filter: FilterOpts,
    },

    /// Summarize engine activity
    Summary {
        /// Trace file to read
        #[arg(short, long)]
        input: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        filter: FilterOpts,
    },

    /// Report what the tooltip shows at a plot position
    Probe {
        /// Trace file to read
        #[arg(short, long)]
        input: PathBuf,

        /// Pointer x in plot pixels
        #[arg(long)]
        x: f64,

        /// Pointer y in plot pixels
        #[arg(long)]
        y: f64,

        #[command(flatten)]
        view: ViewOpts,
    },

    /// Validate an exported trace model JSON file
    Validate {
        /// Path to trace model JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            input,
            output,
            title,
            summary,
            view,
        } => {
            let args = RenderArgs {
                input,
                output,
                view: view.into_view(),
                title,
                print_summary: summary,
            };

            validate_render_args(&args)?;
            execute_render(args)?;
        }

        Commands::Export {
            input,
            output,
            format,
            filter,
        } => {
            let args = ExportArgs {
                input,
                output,
                format,
                filter: filter.into_filter(),
            };

            validate_export_args(&args)?;
            execute_export(args)?;
        }

        Commands::Summary { input, json, filter } => {
            let filter = filter.into_filter();
            validate_filter(&filter)?;
            execute_summary(SummaryArgs { input, filter, json })?;
        }

        Commands::Probe { input, x, y, view } => {
            let view = view.into_view();
            view.validate()?;
            execute_probe(ProbeArgs { input, view, x, y })?;
        }

        Commands::Validate { file } => {
            validate_document_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
