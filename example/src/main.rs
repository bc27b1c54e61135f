use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "palettize_demo")]
#[command(about = "Converts a PNG to an 8-bit palette PNG")]
struct Cli {
    /// Speed/quality trade-off, 1 (slowest) to 11 (fastest)
    #[arg(short, long, default_value_t = 4)]
    speed: i32,

    /// Fail instead of writing anything below this quality
    #[arg(long, default_value_t = 0)]
    min_quality: i32,

    /// Stop searching once this quality is reached
    #[arg(long, default_value_t = 100)]
    target_quality: i32,

    /// Maximum number of palette colors
    #[arg(short, long, default_value_t = 256)]
    colors: i32,

    /// Floyd-Steinberg dithering level, 0.0 to 1.0
    #[arg(short, long, default_value_t = 0.0)]
    dither: f32,

    /// Cap on palette refinement passes, overriding the speed default
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Source PNG
    input: PathBuf,

    /// Destination PNG
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palettize=info,palettize_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let mut options = palettize::Options::default();
    options.set_speed(cli.speed)?;
    options.set_quality(cli.min_quality, cli.target_quality)?;
    options.set_max_colors(cli.colors)?;
    options.set_dithering_level(cli.dither)?;
    if let Some(iterations) = cli.max_iterations {
        options.set_max_iterations(iterations)?;
    }

    let data = std::fs::read(&cli.input).with_context(|| format!("reading {}", cli.input.display()))?;
    let compressed = palettize::compress_bytes(&data, &options)
        .with_context(|| format!("quantizing {}", cli.input.display()))?;
    std::fs::write(&cli.output, &compressed).with_context(|| format!("writing {}", cli.output.display()))?;

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        before = data.len(),
        after = compressed.len(),
        "done"
    );

    Ok(())
}
