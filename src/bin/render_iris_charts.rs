use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use iris_charts::api::{ChartConfig, ChartKind, load_records, render_chart};
use iris_charts::core::IrisRecord;
use iris_charts::render::{Color, Renderer, SvgRenderer};
use iris_charts::telemetry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChartSelection {
    Box,
    Scatter,
    Both,
}

impl ChartSelection {
    fn kinds(self) -> &'static [ChartKind] {
        match self {
            Self::Box => &[ChartKind::BoxPlot],
            Self::Scatter => &[ChartKind::ScatterPlot],
            Self::Both => &ChartKind::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Png,
}

/// Render the Iris box plot and scatter plot from a CSV file.
#[derive(Debug, Parser)]
#[command(name = "render_iris_charts", version)]
struct CliArgs {
    /// CSV file with `Species`, `PetalLength` and `PetalWidth` columns.
    #[arg(long, default_value = "data/iris.csv")]
    input: PathBuf,

    /// Directory receiving `boxplot.*` and `scatterplot.*`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = ChartSelection::Both)]
    chart: ChartSelection,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// JSON chart configuration; omitted fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background color as `#rrggbb`, applied on top of `--config`.
    #[arg(long)]
    background: Option<String>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run(CliArgs::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|err| {
                format!("failed to read config `{}`: {err}", path.display())
            })?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };
    let config = match &args.background {
        Some(hex) => {
            let background = Color::from_hex(hex).map_err(|err| err.to_string())?;
            config.with_background(background)
        }
        None => config,
    };

    let records = load_records(&args.input)
        .map_err(|err| format!("failed to load `{}`: {err}", args.input.display()))?;

    fs::create_dir_all(&args.out_dir).map_err(|err| {
        format!(
            "failed to create output directory `{}`: {err}",
            args.out_dir.display()
        )
    })?;

    for &kind in args.chart.kinds() {
        let output_path = match args.format {
            OutputFormat::Svg => write_svg(kind, &records, &config, &args.out_dir)?,
            OutputFormat::Png => write_png(kind, &records, &config, &args.out_dir)?,
        };
        println!("wrote {}", output_path.display());
    }
    Ok(())
}

fn write_svg(
    kind: ChartKind,
    records: &[IrisRecord],
    config: &ChartConfig,
    out_dir: &Path,
) -> Result<PathBuf, String> {
    let mut renderer = SvgRenderer::new();
    render_into(kind, records, config, &mut renderer)?;

    let output_path = out_dir.join(format!("{}.svg", kind.file_stem()));
    renderer
        .write_to_path(&output_path)
        .map_err(|err| format!("failed to write `{}`: {err}", output_path.display()))?;
    Ok(output_path)
}

#[cfg(feature = "cairo-backend")]
fn write_png(
    kind: ChartKind,
    records: &[IrisRecord],
    config: &ChartConfig,
    out_dir: &Path,
) -> Result<PathBuf, String> {
    use iris_charts::render::CairoRenderer;

    let width = i32::try_from(config.viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(config.viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    render_into(kind, records, config, &mut renderer)?;

    let output_path = out_dir.join(format!("{}.png", kind.file_stem()));
    renderer
        .write_png(&output_path)
        .map_err(|err| format!("failed to write `{}`: {err}", output_path.display()))?;
    Ok(output_path)
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(
    _kind: ChartKind,
    _records: &[IrisRecord],
    _config: &ChartConfig,
    _out_dir: &Path,
) -> Result<PathBuf, String> {
    Err("png output requires feature `cairo-backend`".to_owned())
}

fn render_into<R: Renderer>(
    kind: ChartKind,
    records: &[IrisRecord],
    config: &ChartConfig,
    renderer: &mut R,
) -> Result<(), String> {
    render_chart(kind, records, config, renderer)
        .map_err(|err| format!("{} render failed: {err}", kind.file_stem()))
}
