use pretty_assertions::assert_eq;
use softhier_trace_visual::parser::{
    load_trace_file, parse_trace, parse_trace_str, parse_trace_with_report, Engine, EngineInterval,
    TraceEvent, TraceFilter, TraceModel,
};
use softhier_trace_visual::utils::error::{LoadError, ParseIssue};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn test_control_event_line() {
    let model = parse_trace(["100: 100: [ctrl_registers] reg_write addr=0x10"]);

    assert_eq!(
        model.control_events,
        vec![TraceEvent {
            timestamp: 100,
            description: "reg_write addr=0x10".to_string(),
        }]
    );
    assert_eq!(model.interval_count(), 0);
}

#[test]
fn test_idma_finished_line() {
    let model = parse_trace(["200: 200: [/chip/cluster_0/idma/fe/trace] Finished task 50 ns ---> 150 ns"]);

    assert_eq!(
        model.clusters["cluster_0"].idma,
        vec![EngineInterval {
            start: 50,
            end: 150,
            description: "Finished task 50 ns ---> 150 ns".to_string(),
        }]
    );
    assert!(model.control_events.is_empty());
}

#[test]
fn test_vecteng_recognized() {
    let model = parse_trace(["9: 9: [/chip/cluster_1/vecteng/trace] Finished op 3 ns ---> 9 ns"]);

    let intervals = model.clusters["cluster_1"].slot(Engine::Vecteng);
    assert_eq!(intervals.len(), 1);
    assert_eq!((intervals[0].start, intervals[0].end), (3, 9));
}

#[test]
fn test_empty_input() {
    let no_lines: [&str; 0] = [];
    assert_eq!(parse_trace(no_lines), TraceModel::new());
    assert_eq!(parse_trace(["", "garbage", "12: [x] missing field"]), TraceModel::new());
}

#[test]
fn test_malformed_finished_does_not_abort() {
    let parsed = parse_trace_with_report([
        "5: 5: [/chip/cluster_0/redmule/trace] Finished but no span",
        "8: 8: [/chip/cluster_0/redmule/trace] Finished : 1 ns ---> 8 ns",
        "9: 9: [ctrl_registers] after",
    ]);

    assert_eq!(parsed.model.clusters["cluster_0"].redmule.len(), 1);
    assert_eq!(parsed.model.clusters["cluster_0"].redmule[0].end, 8);
    assert_eq!(parsed.model.control_events.len(), 1);
    assert_eq!(
        parsed.report.issues,
        vec![ParseIssue::MalformedSpan {
            line: 1,
            description: "Finished but no span".to_string(),
        }]
    );
}

#[test]
fn test_parse_is_pure() {
    let text = std::fs::read_to_string(fixture("sample_trace.log")).unwrap();
    let first = parse_trace_str(&text);
    let second = parse_trace_str(&text);

    assert_eq!(first.model, second.model);
    assert_eq!(first.report, second.report);
}

#[test]
fn test_each_line_contributes_at_most_once() {
    let lines = [
        "1: 1: [ctrl_registers] a",
        "2: 2: [/chip/cluster_0/idma/fe/trace] Finished 1 ns ---> 2 ns",
        "3: 3: [/chip/cluster_0/ctrl_registers/trace] Finished 1 ns ---> 3 ns",
        "4: 4: [/chip/cluster_0/unknown/trace] Finished 1 ns ---> 4 ns",
        "5: 5: [/chip/cluster_0/redmule/trace] Start 5 ns",
        "not a trace line",
    ];

    let mut total = 0;
    for line in lines {
        let model = parse_trace([line]);
        let items = model.control_events.len() + model.interval_count();
        assert!(items <= 1, "line produced {} items: {}", items, line);
        total += items;
    }

    // ctrl_registers wins over the cluster path
    assert_eq!(total, 3);
    assert_eq!(parse_trace(lines).control_events.len() + parse_trace(lines).interval_count(), total);
}

#[test]
fn test_fixture_model_invariants() {
    let parsed = load_trace_file(fixture("sample_trace.log")).unwrap();
    let model = &parsed.model;

    assert_eq!(model.control_events.len(), 2);
    let order: Vec<&str> = model.clusters.keys().map(String::as_str).collect();
    assert_eq!(order, vec!["cluster_0", "cluster_1"]);

    for (cluster, slots) in &model.clusters {
        let digits = cluster.strip_prefix("cluster_").unwrap();
        assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));

        for (_, interval) in slots.intervals() {
            assert!(interval.start <= interval.end);
            assert!(interval.description.contains("Finished"));
        }
    }

    // idma/be and spatz are not recognized components
    assert_eq!(model.clusters["cluster_0"].idma.len(), 1);
    assert_eq!(model.interval_count(), 4);
    assert_eq!(parsed.report.issues.len(), 1);
    assert_eq!(parsed.report.issues[0].line(), 7);
}

#[test]
fn test_load_missing_file() {
    let result = load_trace_file(fixture("does_not_exist.log"));
    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[test]
fn test_load_invalid_utf8() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("trace.bin");
    std::fs::write(&path, [0xc3, 0x28, b'\n']).unwrap();

    assert!(matches!(load_trace_file(&path), Err(LoadError::NotText(_))));
}

#[test]
fn test_filter_fixture_window() {
    let model = load_trace_file(fixture("sample_trace.log")).unwrap().model;
    let cut = TraceFilter::new().with_window(Some(50), Some(100)).apply(&model);

    assert_eq!(cut.control_events.len(), 1);
    assert_eq!(cut.control_events[0].description, "global barrier end");
    assert_eq!(cut.clusters["cluster_0"].redmule.len(), 1);
    assert!(cut.clusters["cluster_0"].idma.is_empty());
    assert_eq!(cut.clusters["cluster_1"].vecteng.len(), 1);
    assert!(cut.clusters["cluster_1"].redmule.is_empty());
}
