use crate::api::{AxisStyle, ChartConfig};
use crate::core::{BandScale, LinearScale, format_tick, nice_ticks, tick_step};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RenderFrame, TextBaseline, TextHAlign, TextPrimitive};

const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Screen edge an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One labelled tick position along an axis, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Ticks for a continuous axis, labelled with the precision of their step.
pub fn linear_ticks(scale: LinearScale, count: usize) -> ChartResult<Vec<AxisTick>> {
    let domain = scale.domain();
    let step = tick_step(domain.low(), domain.high(), count);
    nice_ticks(domain.low(), domain.high(), count)
        .into_iter()
        .map(|value| {
            Ok(AxisTick {
                position: scale.map(value)?,
                label: format_tick(value, step),
            })
        })
        .collect()
}

/// One tick per category, centered in its band.
#[must_use]
pub fn band_ticks(scale: &BandScale) -> Vec<AxisTick> {
    scale
        .categories()
        .filter_map(|category| {
            scale.center(category).map(|position| AxisTick {
                position,
                label: category.to_owned(),
            })
        })
        .collect()
}

/// Appends the domain line, outer ticks, tick marks and tick labels of one
/// axis. `offset` is the fixed cross-axis coordinate of the domain line.
pub fn append_axis(
    frame: &mut RenderFrame,
    orientation: AxisOrientation,
    offset: f64,
    range: (f64, f64),
    ticks: &[AxisTick],
    style: &AxisStyle,
) {
    let size = style.tick_size_px;
    let color = style.color;

    match orientation {
        AxisOrientation::Bottom => {
            frame.lines.push(LinePrimitive::new(
                range.0, offset, range.1, offset, AXIS_STROKE_WIDTH, color,
            ));
            for edge in [range.0, range.1] {
                frame.lines.push(LinePrimitive::new(
                    edge,
                    offset,
                    edge,
                    offset + size,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
            }
            for tick in ticks {
                frame.lines.push(LinePrimitive::new(
                    tick.position,
                    offset,
                    tick.position,
                    offset + size,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
                frame.texts.push(
                    TextPrimitive::new(
                        tick.label.clone(),
                        tick.position,
                        offset + size + style.tick_padding_px,
                        style.tick_font_size_px,
                        color,
                        TextHAlign::Center,
                    )
                    .with_baseline(TextBaseline::Hanging),
                );
            }
        }
        AxisOrientation::Left => {
            frame.lines.push(LinePrimitive::new(
                offset, range.0, offset, range.1, AXIS_STROKE_WIDTH, color,
            ));
            for edge in [range.0, range.1] {
                frame.lines.push(LinePrimitive::new(
                    offset - size,
                    edge,
                    offset,
                    edge,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
            }
            for tick in ticks {
                frame.lines.push(LinePrimitive::new(
                    offset - size,
                    tick.position,
                    offset,
                    tick.position,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
                frame.texts.push(
                    TextPrimitive::new(
                        tick.label.clone(),
                        offset - size - style.tick_padding_px,
                        tick.position,
                        style.tick_font_size_px,
                        color,
                        TextHAlign::Right,
                    )
                    .with_baseline(TextBaseline::Middle),
                );
            }
        }
    }
}

/// Appends the single title of each axis.
///
/// The x title sits just above the right end of the bottom axis; the y title
/// sits near the top of the left axis.
pub fn append_axis_titles(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    x_title: &str,
    y_title: &str,
) {
    let style = &config.axis;
    let bottom = f64::from(config.viewport.height) - config.margins.bottom;

    frame.texts.push(TextPrimitive::new(
        x_title,
        f64::from(config.viewport.width) - config.margins.left - 5.0,
        bottom - 10.0,
        style.title_font_size_px,
        style.color,
        TextHAlign::Center,
    ));
    frame.texts.push(TextPrimitive::new(
        y_title,
        config.margins.left + 28.0,
        20.0,
        style.title_font_size_px,
        style.color,
        TextHAlign::Right,
    ));
}
