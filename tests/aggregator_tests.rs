use softhier_trace_visual::aggregator::metrics::{
    calculate_engine_usage, calculate_trace_stats, generate_text_summary,
};
use softhier_trace_visual::parser::{parse_trace, Engine, TraceModel};

fn busy_model() -> TraceModel {
    parse_trace([
        "0: 0: [ctrl_registers] start",
        "50: 50: [/chip/cluster_0/idma/fe/trace] Finished : 0 ns ---> 50 ns",
        "80: 80: [/chip/cluster_0/idma/fe/trace] Finished : 60 ns ---> 80 ns",
        "100: 100: [/chip/cluster_0/redmule/trace] Finished : 25 ns ---> 100 ns",
        "200: 200: [ctrl_registers] end",
    ])
}

#[test]
fn test_calculate_engine_usage() {
    let usage = calculate_engine_usage(&busy_model());

    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0].engine, Engine::Idma);
    assert_eq!(usage[0].operations, 2);
    assert_eq!(usage[0].busy_ns, 70);
    assert!((usage[0].utilization - 35.0).abs() < 1e-9);
    assert_eq!(usage[1].engine, Engine::Redmule);
    assert_eq!(usage[1].first_start, 25);
}

#[test]
fn test_stats_span_includes_starts() {
    let model = parse_trace(["9: 9: [/chip/cluster_5/vecteng/trace] Finished 3 ns ---> 9 ns"]);
    let stats = calculate_trace_stats(&model);

    assert_eq!(stats.span, Some((3, 9)));
    assert_eq!(stats.clusters, 1);
}

#[test]
fn test_usage_empty() {
    let usage = calculate_engine_usage(&TraceModel::new());
    assert!(usage.is_empty());
    assert_eq!(calculate_trace_stats(&TraceModel::new()).span_ns(), 0);
}

#[test]
fn test_text_summary_lists_engines() {
    let summary = generate_text_summary(&busy_model());

    assert!(summary.contains("Control events: 2"));
    assert!(summary.contains("idma"));
    assert!(summary.contains("redmule"));
    assert!(summary.contains("35.0"));
}
