use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextBaseline, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames into a standalone SVG document held in memory.
///
/// Each `render` call replaces the previous document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the last successful render, empty before that.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        if self.document.is_empty() {
            return Err(ChartError::InvalidData(
                "no svg document has been rendered".to_owned(),
            ));
        }
        std::fs::write(path, &self.document)?;
        Ok(())
    }

    fn write_document(out: &mut String, frame: &RenderFrame) -> std::fmt::Result {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(
            out,
            r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{}"{}/>"#,
            frame.background.to_hex(),
            opacity_attr("fill-opacity", frame.background)
        )?;

        for rect in &frame.rects {
            write!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}"#,
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height),
                rect.fill_color.to_hex(),
                opacity_attr("fill-opacity", rect.fill_color)
            )?;
            if rect.border_width > 0.0 {
                write!(
                    out,
                    r#" stroke="{}" stroke-width="{}"{}"#,
                    rect.border_color.to_hex(),
                    num(rect.border_width),
                    opacity_attr("stroke-opacity", rect.border_color)
                )?;
            }
            writeln!(out, "/>")?;
        }

        for line in &frame.lines {
            writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
                num(line.x1),
                num(line.y1),
                num(line.x2),
                num(line.y2),
                line.color.to_hex(),
                num(line.stroke_width),
                opacity_attr("stroke-opacity", line.color)
            )?;
        }

        for circle in &frame.circles {
            writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
                num(circle.cx),
                num(circle.cy),
                num(circle.radius),
                circle.fill_color.to_hex(),
                opacity_attr("fill-opacity", circle.fill_color)
            )?;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let baseline = match text.baseline {
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Middle => "middle",
                TextBaseline::Hanging => "hanging",
            };
            writeln!(
                out,
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="{}" fill="{}" text-anchor="{anchor}" dominant-baseline="{baseline}">{}</text>"#,
                num(text.x),
                num(text.y),
                num(text.font_size_px),
                text.color.to_hex(),
                escape_xml(&text.text)
            )?;
        }

        writeln!(out, "</svg>")
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut document = String::with_capacity(256 + 96 * frame.circles.len());
        Self::write_document(&mut document, frame)
            .map_err(|err| ChartError::Serialization(format!("failed to write svg: {err}")))?;

        self.document = document;
        self.last_stats = SvgRenderStats {
            lines_drawn: frame.lines.len(),
            rects_drawn: frame.rects.len(),
            circles_drawn: frame.circles.len(),
            texts_drawn: frame.texts.len(),
        };
        Ok(())
    }
}

/// Shortest decimal form with at most three fractional digits.
fn num(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(color.alpha))
    }
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(num(30.0), "30");
        assert_eq!(num(107.142_857), "107.143");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
