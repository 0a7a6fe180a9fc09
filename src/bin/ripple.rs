use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ripple", version)]
struct Cli {
    /// Log pass details to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply the ripple to an image and write a PNG.
    Apply(ApplyArgs),
    /// Print the default ripple config as JSON.
    Preset,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Ripple config JSON. Flags below override individual fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Move the ripple origin to the middle of the input image.
    #[arg(long, default_value_t = false)]
    centered: bool,

    /// Ripple origin x, in pixels.
    #[arg(long, allow_negative_numbers = true)]
    center_x: Option<f32>,

    /// Ripple origin y, in pixels.
    #[arg(long, allow_negative_numbers = true)]
    center_y: Option<f32>,

    /// Radius of the untouched disk around the origin.
    #[arg(long)]
    min_radius: Option<f32>,

    /// Peak brightness deviation.
    #[arg(long, allow_negative_numbers = true)]
    scalar: Option<f32>,

    /// Decay rate with distance.
    #[arg(long, allow_negative_numbers = true)]
    damper: Option<f32>,

    /// Spatial frequency (radians per pixel).
    #[arg(long, allow_negative_numbers = true)]
    frequency: Option<f32>,

    /// Shade row chunks in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Rows per scheduled chunk.
    #[arg(long, default_value_t = 16)]
    rows_per_chunk: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Preset => cmd_preset(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let input = image::open(&args.in_path)
        .with_context(|| format!("open image '{}'", args.in_path.display()))?
        .to_rgba8();
    let size = ripple_fx::ImageSize::new(input.width(), input.height());

    let mut config = match &args.config {
        Some(path) => ripple_fx::RippleConfig::from_path(path)?,
        None => ripple_fx::RippleConfig::default(),
    };
    if args.centered {
        config = config.centered_on(size);
    }
    apply_overrides(&mut config, &args);
    tracing::debug!(?config, width = size.width, height = size.height, "applying ripple");

    let opts = ripple_fx::PassOpts {
        parallel: args.parallel,
        threads: args.threads,
        rows_per_chunk: args.rows_per_chunk,
    };
    let output = ripple_fx::ripple_image(&input, &config, &opts)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        output.as_raw(),
        output.width(),
        output.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn apply_overrides(config: &mut ripple_fx::RippleConfig, args: &ApplyArgs) {
    let fields = [
        (args.center_x, &mut config.center_x),
        (args.center_y, &mut config.center_y),
        (args.min_radius, &mut config.min_radius),
        (args.scalar, &mut config.scalar),
        (args.damper, &mut config.damper),
        (args.frequency, &mut config.frequency),
    ];
    for (value, slot) in fields {
        if let Some(v) = value {
            *slot = v;
        }
    }
}

fn cmd_preset() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&ripple_fx::RippleConfig::default())
        .context("serialize default ripple config")?;
    println!("{json}");
    Ok(())
}
