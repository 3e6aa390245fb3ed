use iris_charts::ChartError;
use iris_charts::api::axis::linear_ticks;
use iris_charts::api::{
    BOX_PLOT_X_TITLE, BOX_PLOT_Y_TITLE, BoxPlotLayout, ChartConfig, render_box_plot,
};
use iris_charts::core::IrisRecord;
use iris_charts::render::{Color, NullRenderer};

fn records_from(groups: &[(&str, Vec<f64>)]) -> Vec<IrisRecord> {
    let longest = groups.iter().map(|(_, values)| values.len()).max().unwrap_or(0);
    let mut records = Vec::new();
    // interleave so grouping has to gather values back together
    for index in 0..longest {
        for (species, values) in groups {
            if let Some(&value) = values.get(index) {
                records.push(IrisRecord::new(*species, value, None).expect("valid record"));
            }
        }
    }
    records
}

fn three_species() -> Vec<IrisRecord> {
    records_from(&[
        ("setosa", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]),
        ("versicolor", vec![1.0, 2.0, 3.0, 4.0]),
        ("virginica", vec![5.0]),
    ])
}

#[test]
fn layout_summarizes_each_species_in_first_appearance_order() {
    let layout = BoxPlotLayout::build(&three_species(), &ChartConfig::default()).expect("layout");

    let species: Vec<&str> = layout.summaries().keys().map(String::as_str).collect();
    assert_eq!(species, vec!["setosa", "versicolor", "virginica"]);

    let setosa = layout.summaries()["setosa"];
    assert_eq!((setosa.q1, setosa.median, setosa.q3), (3.0, 5.0, 7.0));
    let virginica = layout.summaries()["virginica"];
    assert_eq!(virginica.min, 5.0);
    assert_eq!(virginica.max, 5.0);
}

#[test]
fn y_domain_pads_observed_petal_lengths() {
    let layout = BoxPlotLayout::build(&three_species(), &ChartConfig::default()).expect("layout");

    let domain = layout.y_scale().domain();
    assert_eq!(domain.low(), 0.0);
    assert_eq!(domain.high(), 10.0);
    assert_eq!(layout.y_scale().range(), (370.0, 30.0));
}

#[test]
fn box_geometry_follows_quartiles() {
    let layout = BoxPlotLayout::build(&three_species(), &ChartConfig::default()).expect("layout");
    let y = layout.y_scale();
    let geometry = layout.box_geometry().expect("geometry");

    let setosa = &geometry[0];
    assert_eq!(setosa.species, "setosa");
    assert_eq!(setosa.box_top, y.map(7.0).expect("q3"));
    assert_eq!(setosa.median_y, y.map(5.0).expect("median"));
    assert_eq!(setosa.box_bottom, y.map(3.0).expect("q1"));
    assert_eq!(setosa.whisker_top, y.map(13.0).expect("max fence"));
    assert_eq!(setosa.whisker_bottom, y.map(-3.0).expect("min fence"));
    assert!(setosa.whisker_top < setosa.box_top);
    assert!(setosa.box_bottom < setosa.whisker_bottom);
    assert_eq!(setosa.center_x, setosa.x + setosa.bandwidth / 2.0);
    assert_eq!(setosa.x, layout.x_scale().position("setosa").expect("band"));
}

#[test]
fn frame_contains_one_box_and_whisker_per_species() {
    let layout = BoxPlotLayout::build(&three_species(), &ChartConfig::default()).expect("layout");
    let frame = layout.to_frame().expect("frame");
    frame.validate().expect("valid frame");

    let y_ticks = linear_ticks(layout.y_scale(), 10).expect("ticks");
    let bottom_axis_lines = 3 + 3;
    let left_axis_lines = 3 + y_ticks.len();
    let mark_lines = 3 * 3;
    assert_eq!(frame.rects.len(), 3);
    assert_eq!(
        frame.lines.len(),
        bottom_axis_lines + left_axis_lines + mark_lines
    );
    assert!(frame.circles.is_empty());
    assert!(
        frame
            .rects
            .iter()
            .all(|rect| rect.fill_color == Color::WHITE && rect.border_color == Color::BLACK)
    );

    let titles: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(titles.contains(&BOX_PLOT_X_TITLE));
    assert!(titles.contains(&BOX_PLOT_Y_TITLE));
    assert!(titles.contains(&"versicolor"));
}

#[test]
fn frame_uses_configured_background() {
    let config = ChartConfig::default();
    let layout = BoxPlotLayout::build(&three_species(), &config).expect("layout");
    let frame = layout.to_frame().expect("frame");

    assert_eq!(frame.background, config.background);
    assert_eq!(frame.viewport, config.viewport);
}

#[test]
fn render_box_plot_hands_frame_to_renderer() {
    let mut renderer = NullRenderer::default();
    let layout = render_box_plot(&three_species(), &ChartConfig::default(), &mut renderer)
        .expect("render");

    assert_eq!(renderer.last_rect_count, 3);
    assert_eq!(layout.summaries().len(), 3);
    assert!(renderer.last_text_count > 3);
}

#[test]
fn empty_records_are_rejected() {
    let err = BoxPlotLayout::build(&[], &ChartConfig::default()).expect_err("empty must fail");
    assert!(matches!(err, ChartError::EmptyGroup));
}

#[test]
fn invalid_config_is_rejected_before_layout() {
    let config = ChartConfig::default().with_band_padding(2.0);
    let err = BoxPlotLayout::build(&three_species(), &config).expect_err("bad padding");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
