use std::path::PathBuf;

use iris_charts::ChartError;
use iris_charts::api::{load_records, load_records_from_reader};
use iris_charts::core::{QuartileSummary, group_petal_lengths};

fn manifest_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn loads_fixture_ignoring_unused_columns() {
    let records = load_records(manifest_path("tests/fixtures/small_iris.csv")).expect("load");

    assert_eq!(records.len(), 7);
    assert_eq!(records[0].species, "setosa");
    assert_eq!(records[0].petal_length, 1.4);
    assert_eq!(records[0].petal_width, Some(0.2));
    assert_eq!(records[3].species, "virginica");
}

#[test]
fn full_iris_dataset_has_expected_shape() {
    let records = load_records(manifest_path("data/iris.csv")).expect("load iris");
    assert_eq!(records.len(), 150);

    let groups = group_petal_lengths(&records);
    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["setosa", "versicolor", "virginica"]);
    assert!(groups.values().all(|values| values.len() == 50));

    let medians: Vec<f64> = groups
        .values()
        .map(|values| QuartileSummary::from_values(values).expect("summary").median)
        .collect();
    assert!((medians[0] - 1.5).abs() <= 1e-9);
    assert!((medians[1] - 4.35).abs() <= 1e-9);
    assert!((medians[2] - 5.55).abs() <= 1e-9);
}

#[test]
fn malformed_number_is_rejected_with_location() {
    let err = load_records(manifest_path("tests/fixtures/malformed_iris.csv"))
        .expect_err("malformed value must fail");

    match err {
        ChartError::Parse {
            line,
            column,
            value,
        } => {
            assert_eq!(line, 3);
            assert_eq!(column, "PetalLength");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_finite_number_is_rejected() {
    let input = "Species,PetalLength\nsetosa,NaN\n";
    let err = load_records_from_reader(input.as_bytes()).expect_err("nan must fail");
    assert!(matches!(err, ChartError::Parse { line: 2, .. }));

    let input = "Species,PetalLength\nsetosa,inf\n";
    let err = load_records_from_reader(input.as_bytes()).expect_err("inf must fail");
    assert!(matches!(err, ChartError::Parse { .. }));
}

#[test]
fn missing_required_column_is_reported() {
    let input = "Species,PetalWidth\nsetosa,0.2\n";
    let err = load_records_from_reader(input.as_bytes()).expect_err("missing column");
    assert!(matches!(err, ChartError::MissingColumn(ref name) if name == "PetalLength"));
}

#[test]
fn petal_width_is_optional() {
    let input = "Species,PetalLength\nsetosa,1.4\nvirginica,5.1\n";
    let records = load_records_from_reader(input.as_bytes()).expect("load");
    assert!(records.iter().all(|record| record.petal_width.is_none()));

    let input = "Species,PetalLength,PetalWidth\nsetosa,1.4,\n";
    let records = load_records_from_reader(input.as_bytes()).expect("load");
    assert_eq!(records[0].petal_width, None);
}

#[test]
fn empty_cells_in_required_columns_are_reported() {
    let input = "Species,PetalLength\nsetosa,\n";
    let err = load_records_from_reader(input.as_bytes()).expect_err("empty length");
    assert!(matches!(err, ChartError::MissingField { line: 2, ref field } if field == "PetalLength"));

    let input = "Species,PetalLength\n,1.4\n";
    let err = load_records_from_reader(input.as_bytes()).expect_err("empty species");
    assert!(matches!(err, ChartError::MissingField { ref field, .. } if field == "Species"));
}

#[test]
fn cells_are_trimmed_before_parsing() {
    let input = "Species , PetalLength , PetalWidth\n setosa , 1.4 , 0.2 \n";
    let records = load_records_from_reader(input.as_bytes()).expect("load");

    assert_eq!(records[0].species, "setosa");
    assert_eq!(records[0].petal_length, 1.4);
    assert_eq!(records[0].petal_width, Some(0.2));
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = load_records(manifest_path("tests/fixtures/does_not_exist.csv"))
        .expect_err("missing file must fail");
    assert!(matches!(err, ChartError::Io(_)));
}
