use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use stackblur::{stack_blur_image, stack_blur_image_downscaled, ThreadingPolicy};

#[derive(Parser, Debug)]
#[command(name = "stackblur-app", version)]
struct Cli {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image, format is picked by extension.
    #[arg(long)]
    out: PathBuf,

    /// Blur radius in pixels, 1..=254.
    #[arg(long, default_value_t = 12)]
    radius: u32,

    /// Blur a downsampled copy, e.g. 0.25, radius is given in original pixels.
    #[arg(long)]
    downscale: Option<f32>,

    /// Worker threads, adaptive when omitted.
    #[arg(long)]
    threads: Option<NonZeroUsize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let img = image::open(&cli.in_path)
        .with_context(|| format!("decode {}", cli.in_path.display()))?;
    tracing::info!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "loaded image"
    );

    let policy = match cli.threads {
        Some(threads) => ThreadingPolicy::Fixed(threads),
        None => ThreadingPolicy::Adaptive,
    };

    let start_time = Instant::now();
    let blurred = match cli.downscale {
        Some(scale) => stack_blur_image_downscaled(img, cli.radius, scale, policy),
        None => stack_blur_image(img, cli.radius, policy),
    }
    .context("stack blur")?;
    tracing::info!(elapsed = ?start_time.elapsed(), "blurred");

    blurred
        .save(&cli.out)
        .with_context(|| format!("write {}", cli.out.display()))?;
    Ok(())
}
