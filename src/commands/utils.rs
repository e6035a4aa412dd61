use crate::output::read_document;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate an exported trace model JSON file
pub fn validate_document_file(file_path: &Path) -> Result<()> {
    println!("Validating trace model: {}", file_path.display());

    let document = read_document(file_path)
        .with_context(|| format!("Invalid trace model {}", file_path.display()))?;

    if document.version != SCHEMA_VERSION {
        println!(
            "! Schema version {} differs from current {}",
            document.version, SCHEMA_VERSION
        );
    }

    println!("✓ Valid trace model JSON");
    println!("  Version: {}", document.version);
    println!("  Source: {}", document.source);
    println!("  Generated: {}", document.generated_at);
    println!("  Control Events: {}", document.model.control_events.len());
    println!("  Clusters: {}", document.model.clusters.len());
    println!("  Intervals: {}", document.model.interval_count());
    println!("  Skipped Lines: {}", document.skipped_lines);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("SoftHier Trace Model Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  source: string             - Trace file the model was parsed from");
        println!("  generated_at: string       - ISO 8601 timestamp");
        println!("  skipped_lines: number      - Malformed lines left out");
        println!("  model: object");
        println!("    control_events: array    - Global control events");
        println!("      timestamp: number      - Time in ns");
        println!("      description: string    - Trace message");
        println!("    clusters: object         - cluster_<N> in first-seen order");
        println!("      idma: array            - Intervals of the iDMA frontend");
        println!("      redmule: array         - Intervals of the RedMulE engine");
        println!("      vecteng: array         - Intervals of the vector engine");
        println!("        start: number        - Start time in ns");
        println!("        end: number          - End time in ns");
        println!("        description: string  - Trace message");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("SoftHier Trace Visual v{}", env!("CARGO_PKG_VERSION"));
    println!("Trace Model Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Timeline viewer for SoftHier/GVSoC simulator traces.");
}
