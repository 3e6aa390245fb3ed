use iris_charts::ChartError;
use iris_charts::api::{
    ChartConfig, SCATTER_PLOT_X_TITLE, SCATTER_PLOT_Y_TITLE, ScatterPlotLayout,
    render_scatter_plot,
};
use iris_charts::core::IrisRecord;
use iris_charts::render::palette::CATEGORY10;
use iris_charts::render::{NullRenderer, TextHAlign};

fn record(species: &str, petal_length: f64, petal_width: f64) -> IrisRecord {
    IrisRecord::new(species, petal_length, Some(petal_width)).expect("valid record")
}

fn sample_records() -> Vec<IrisRecord> {
    vec![
        record("setosa", 1.0, 0.1),
        record("versicolor", 4.5, 1.5),
        record("setosa", 1.9, 0.6),
        record("virginica", 6.9, 2.5),
        record("versicolor", 3.0, 1.0),
    ]
}

#[test]
fn domains_pad_petal_length_and_width() {
    let layout =
        ScatterPlotLayout::build(&sample_records(), &ChartConfig::default()).expect("layout");

    let x_domain = layout.x_scale().domain();
    assert_eq!(x_domain.low(), 0.0);
    assert!((x_domain.high() - 7.9).abs() <= 1e-12);

    let y_domain = layout.y_scale().domain();
    assert!((y_domain.low() + 0.9).abs() <= 1e-12);
    assert!((y_domain.high() - 3.5).abs() <= 1e-12);
}

#[test]
fn points_are_projected_in_record_order() {
    let records = sample_records();
    let layout = ScatterPlotLayout::build(&records, &ChartConfig::default()).expect("layout");

    assert_eq!(layout.points().len(), records.len());
    let first = &layout.points()[0];
    assert_eq!(first.species, "setosa");
    assert_eq!(first.x, layout.x_scale().map(1.0).expect("x"));
    assert_eq!(first.y, layout.y_scale().map(0.1).expect("y"));

    let widest = &layout.points()[3];
    assert!(widest.y < first.y, "larger widths sit higher on screen");
    assert!(widest.x > first.x);
}

#[test]
fn species_colors_follow_first_appearance() {
    let layout =
        ScatterPlotLayout::build(&sample_records(), &ChartConfig::default()).expect("layout");

    assert_eq!(layout.colors().get("setosa"), Some(CATEGORY10[0]));
    assert_eq!(layout.colors().get("versicolor"), Some(CATEGORY10[1]));
    assert_eq!(layout.colors().get("virginica"), Some(CATEGORY10[2]));
    assert!(
        layout
            .points()
            .iter()
            .all(|point| Some(point.color) == layout.colors().get(&point.species))
    );
}

#[test]
fn legend_rows_step_down_from_anchor() {
    let config = ChartConfig::default();
    let layout = ScatterPlotLayout::build(&sample_records(), &config).expect("layout");
    let entries = layout.legend_entries();

    let species: Vec<&str> = entries.iter().map(|entry| entry.species.as_str()).collect();
    assert_eq!(species, vec!["setosa", "versicolor", "virginica"]);
    assert_eq!(entries[0].y, 55.0);
    assert_eq!(entries[1].y, 75.0);
    assert_eq!(entries[2].y, 95.0);
    assert!(entries.iter().all(|entry| entry.swatch_x == 70.0));
}

#[test]
fn frame_has_one_circle_per_record_plus_legend_swatches() {
    let config = ChartConfig::default();
    let records = sample_records();
    let layout = ScatterPlotLayout::build(&records, &config).expect("layout");
    let frame = layout.to_frame().expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.circles.len(), records.len() + 3);
    assert!(frame.rects.is_empty());

    let point_radius_count = frame
        .circles
        .iter()
        .filter(|circle| circle.radius == config.point_radius)
        .count();
    assert_eq!(point_radius_count, records.len());

    let legend_label = frame
        .texts
        .iter()
        .find(|text| text.text == "virginica")
        .expect("legend label");
    assert_eq!(legend_label.x, 80.0);
    assert_eq!(legend_label.h_align, TextHAlign::Left);
    assert_eq!(legend_label.font_size_px, 12.0);

    let titles: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(titles.contains(&SCATTER_PLOT_X_TITLE));
    assert!(titles.contains(&SCATTER_PLOT_Y_TITLE));
}

#[test]
fn record_without_width_is_rejected() {
    let mut records = sample_records();
    records.push(IrisRecord::new("setosa", 1.2, None).expect("valid record"));

    let err = ScatterPlotLayout::build(&records, &ChartConfig::default())
        .expect_err("missing width must fail");
    assert!(matches!(
        err,
        ChartError::MissingMeasurement {
            index: 5,
            field: "PetalWidth"
        }
    ));
}

#[test]
fn render_scatter_plot_hands_frame_to_renderer() {
    let mut renderer = NullRenderer::default();
    render_scatter_plot(&sample_records(), &ChartConfig::default(), &mut renderer)
        .expect("render");

    assert_eq!(renderer.last_circle_count, 5 + 3);
    assert_eq!(renderer.last_rect_count, 0);
}
