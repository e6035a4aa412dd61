use pretty_assertions::assert_eq;
use softhier_trace_visual::layout::{compute_layout, compute_layout_with, Extent, LayoutConfig, RowKey};
use softhier_trace_visual::parser::{load_trace_file, parse_trace, Engine, TraceModel};
use std::collections::HashSet;
use std::path::PathBuf;

fn sample_model() -> TraceModel {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_trace.log");
    load_trace_file(path).unwrap().model
}

#[test]
fn test_row_order() {
    let scales = compute_layout(&sample_model(), 660.0, 540.0);

    assert_eq!(
        scales.rows.keys(),
        &[
            RowKey::Global,
            RowKey::engine("cluster_0", Engine::Idma),
            RowKey::engine("cluster_0", Engine::Redmule),
            RowKey::engine("cluster_1", Engine::Redmule),
            RowKey::engine("cluster_1", Engine::Vecteng),
        ]
    );
}

#[test]
fn test_rows_injective_and_sized() {
    let model = sample_model();
    let scales = compute_layout(&model, 660.0, 540.0);

    let expected = 1 + model.clusters.values().map(|slots| slots.used_engines().count()).sum::<usize>();
    assert_eq!(scales.rows.len(), expected);

    let positions: HashSet<u64> = scales.rows.iter().map(|(_, y)| y.to_bits()).collect();
    assert_eq!(positions.len(), expected);
}

#[test]
fn test_rows_evenly_spaced() {
    let scales = compute_layout(&sample_model(), 660.0, 500.0);
    let ys: Vec<f64> = scales.rows.iter().map(|(_, y)| y).collect();

    assert_eq!(ys, vec![50.0, 150.0, 250.0, 350.0, 450.0]);
}

#[test]
fn test_time_domain_uses_ends() {
    let model = parse_trace([
        "0: 0: [/chip/cluster_0/redmule/trace] Finished 5 ns ---> 30 ns",
        "0: 0: [/chip/cluster_0/redmule/trace] Finished 2 ns ---> 90 ns",
    ]);
    let scales = compute_layout(&model, 600.0, 400.0);

    assert_eq!(scales.time.domain(), (30.0, 90.0));
    assert_eq!(scales.time_x(30), 0.0);
    assert_eq!(scales.time_x(90), 600.0);
    assert_eq!(scales.time_x(60), 300.0);
}

#[test]
fn test_empty_model_default_domain() {
    let scales = compute_layout(&TraceModel::new(), 660.0, 540.0);

    assert!(scales.empty);
    assert_eq!(scales.time.domain(), (0.0, 1.0));
    assert_eq!(scales.rows.keys(), &[RowKey::Global]);
    assert!(scales.time_x(0).is_finite());
    assert!(scales.time.invert(100.0).is_finite());
}

#[test]
fn test_layout_is_pure() {
    let model = sample_model();
    let before = model.clone();
    let a = compute_layout(&model, 660.0, 540.0);
    let b = compute_layout(&model, 660.0, 540.0);

    assert_eq!(a, b);
    assert_eq!(model, before);
}

#[test]
fn test_engine_selection() {
    let config = LayoutConfig::new().with_engines([Engine::Vecteng]);
    let scales = compute_layout_with(&sample_model(), Extent::new(660.0, 540.0), &config);

    assert_eq!(
        scales.rows.keys(),
        &[RowKey::Global, RowKey::engine("cluster_1", Engine::Vecteng)]
    );
    assert_eq!(scales.engines, vec![Engine::Vecteng]);
}

#[test]
fn test_rows_follow_first_cluster_reference() {
    let model = parse_trace([
        "1: 1: [/chip/cluster_1/redmule/trace] Start : 1 ns",
        "2: 2: [/chip/cluster_0/idma/fe/trace] Start : 2 ns",
        "5: 5: [/chip/cluster_0/idma/fe/trace] Finished 2 ns ---> 5 ns",
        "9: 9: [/chip/cluster_1/redmule/trace] Finished 1 ns ---> 9 ns",
    ]);
    let scales = compute_layout(&model, 660.0, 540.0);

    assert_eq!(
        scales.rows.keys(),
        &[
            RowKey::Global,
            RowKey::engine("cluster_1", Engine::Redmule),
            RowKey::engine("cluster_0", Engine::Idma),
        ]
    );
}
