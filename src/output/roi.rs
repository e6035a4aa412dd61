//! Region-of-interest export.
//!
//! Writes engine intervals as per-cluster ROI tracks, the JSON layout
//! consumed by trace-event converters for Perfetto:
//! `{"cluster_0": [{"label": "idma", "tstart": 5, "tend": 20, "attrs": {...}}]}`.

use super::{create_parent_dirs, validate_path};
use crate::parser::TraceModel;
use crate::utils::error::OutputError;
use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Extra information attached to a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiAttrs {
    /// Original trace description
    pub info: String,
}

/// One timed region on a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiEntry {
    /// Engine name
    pub label: String,
    pub tstart: u64,
    pub tend: u64,
    pub attrs: RoiAttrs,
}

/// Track name to regions, in cluster first-seen order
pub type RoiTracks = IndexMap<String, Vec<RoiEntry>>;

/// Convert the model's intervals into ROI tracks
///
/// Regions of one track are ordered by start time. Control events have
/// no duration and are not exported.
pub fn to_roi_tracks(model: &TraceModel) -> RoiTracks {
    model
        .clusters
        .iter()
        .map(|(cluster, slots)| {
            let mut entries: Vec<RoiEntry> = slots
                .intervals()
                .map(|(engine, interval)| RoiEntry {
                    label: engine.name().to_string(),
                    tstart: interval.start,
                    tend: interval.end,
                    attrs: RoiAttrs {
                        info: interval.description.clone(),
                    },
                })
                .collect();
            entries.sort_by_key(|entry| (entry.tstart, entry.tend));
            (cluster.clone(), entries)
        })
        .collect()
}

/// Write ROI tracks to a JSON file
pub fn write_roi(tracks: &RoiTracks, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} ROI tracks to: {}", tracks.len(), output_path.display());

    validate_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    serde_json::to_writer_pretty(BufWriter::new(file), tracks).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_trace;

    #[test]
    fn test_tracks_sorted_by_start() {
        let model = parse_trace([
            "1: 1: [ctrl_registers] ignored",
            "90: 90: [/chip/cluster_0/redmule/trace] Finished : 10 ns ---> 90 ns",
            "30: 30: [/chip/cluster_0/idma/fe/trace] Finished : 20 ns ---> 30 ns",
            "9: 9: [/chip/cluster_0/idma/fe/trace] Finished : 0 ns ---> 9 ns",
        ]);
        let tracks = to_roi_tracks(&model);

        let track = &tracks["cluster_0"];
        let labels: Vec<(&str, u64)> = track.iter().map(|e| (e.label.as_str(), e.tstart)).collect();
        assert_eq!(labels, vec![("idma", 0), ("redmule", 10), ("idma", 20)]);
        assert_eq!(track[1].attrs.info, "Finished : 10 ns ---> 90 ns");
    }

    #[test]
    fn test_empty_model() {
        assert!(to_roi_tracks(&TraceModel::new()).is_empty());
    }
}
