#![cfg(feature = "cairo-backend")]

use iris_charts::ChartError;
use iris_charts::api::{ChartConfig, render_box_plot, render_scatter_plot};
use iris_charts::core::IrisRecord;
use iris_charts::render::CairoRenderer;

fn records() -> Vec<IrisRecord> {
    vec![
        IrisRecord::new("setosa", 1.4, Some(0.2)).expect("record"),
        IrisRecord::new("setosa", 1.5, Some(0.3)).expect("record"),
        IrisRecord::new("versicolor", 4.7, Some(1.4)).expect("record"),
        IrisRecord::new("virginica", 6.0, Some(2.5)).expect("record"),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_box_plot_marks() {
    let mut renderer = CairoRenderer::new(600, 400).expect("renderer");
    render_box_plot(&records(), &ChartConfig::default(), &mut renderer).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 3);
    assert!(stats.lines_drawn >= 9);
    assert!(stats.texts_drawn > 0);
}

#[test]
fn cairo_renderer_writes_scatter_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scatterplot.png");

    let mut renderer = CairoRenderer::new(600, 400).expect("renderer");
    render_scatter_plot(&records(), &ChartConfig::default(), &mut renderer).expect("render");
    assert_eq!(renderer.last_stats().circles_drawn, 4 + 3);

    renderer.write_png(&path).expect("write png");
    let bytes = std::fs::read(&path).expect("read png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
