//! Summary command implementation.

use super::models::SummaryArgs;
use crate::aggregator::{calculate_engine_usage, generate_text_summary};
use crate::parser::load_trace_file;
use anyhow::{Context, Result};

/// Execute the summary command
///
/// **Public** - prints engine activity to stdout
pub fn execute_summary(args: SummaryArgs) -> Result<()> {
    println!("{}", summary_text(&args)?);
    Ok(())
}

/// Build the text printed by the summary command
pub fn summary_text(args: &SummaryArgs) -> Result<String> {
    let parsed = load_trace_file(&args.input)
        .with_context(|| format!("Failed to load trace {}", args.input.display()))?;
    let model = args.filter.apply(&parsed.model);

    if args.json {
        let usage = calculate_engine_usage(&model);
        return serde_json::to_string_pretty(&usage).context("Failed to serialize engine usage");
    }

    let mut out = String::new();
    out.push_str(&format!("Trace: {}\n", args.input.display()));
    out.push_str(&format!(
        "Lines: {} total, {} used, {} skipped\n\n",
        parsed.report.lines_total,
        parsed.report.lines_used,
        parsed.report.issues.len()
    ));
    out.push_str(&generate_text_summary(&model));
    Ok(out)
}
