use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "fontreel", version, about = "Render a font showcase reel")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the reel as an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Render the still for one font as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct ReelArgs {
    /// JSON config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text shown in every frame.
    #[arg(long)]
    text: Option<String>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Integral frames per second.
    #[arg(long)]
    fps: Option<u32>,

    #[arg(long)]
    seconds_per_font: Option<f64>,

    /// Font as FAMILY=PATH; repeat to add more, in display order.
    #[arg(long = "font", value_parser = fontreel::FontResource::parse_pair)]
    fonts: Vec<fontreel::FontResource>,

    /// Directory scanned for .ttf/.otf/.ttc files.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Print family, path and SHA-256 of every resolved font.
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    reel: ReelArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Synthesize fonts in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count for --parallel.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    reel: ReelArgs,

    /// 0-based index into the resolved font list.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &ReelArgs) -> anyhow::Result<fontreel::ReelConfig> {
    let mut cfg = match &args.config {
        Some(path) => fontreel::ReelConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => fontreel::ReelConfig::default(),
    };
    if let Some(text) = &args.text {
        cfg.text = text.clone();
    }
    if let Some(w) = args.width {
        cfg.width = w;
    }
    if let Some(h) = args.height {
        cfg.height = h;
    }
    if let Some(fps) = args.fps {
        cfg.fps = fps;
    }
    if let Some(secs) = args.seconds_per_font {
        cfg.seconds_per_font = secs;
    }
    if !args.fonts.is_empty() {
        cfg.fonts = args.fonts.clone();
    }
    if let Some(dir) = &args.fonts_dir {
        cfg.fonts_dir = Some(dir.clone());
    }
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.reel)?;
    if let Some(out) = &args.out {
        cfg.output = out.clone();
    }
    cfg.validate()?;

    if args.reel.dump_fonts {
        dump_font_diagnostics(&fontreel::resolve_fonts(&cfg)?)?;
    }

    let opts = fontreel::RenderOpts {
        parallel: args.parallel,
        threads: args.threads,
    };
    let out = fontreel::render_reel(&cfg, &opts)?;

    eprintln!(
        "wrote {} ({}x{}, {} frames, {:.2}s)",
        cfg.output.display(),
        out.width,
        out.height,
        out.frames,
        out.duration_secs
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.reel)?;
    cfg.validate()?;

    if args.reel.dump_fonts {
        dump_font_diagnostics(&fontreel::resolve_fonts(&cfg)?)?;
    }

    let preview = fontreel::render_preview(&cfg, args.index)?;
    preview.pixels.save_png(&args.out)?;

    eprintln!(
        "wrote {} ({} at {}px)",
        args.out.display(),
        preview.fitted.family,
        preview.fitted.size_px
    );
    Ok(())
}

fn dump_font_diagnostics(fonts: &[fontreel::FontResource]) -> anyhow::Result<()> {
    eprintln!("font diagnostics:");
    for font in fonts {
        let bytes = std::fs::read(&font.path)
            .with_context(|| format!("read font '{}'", font.path.display()))?;
        eprintln!("  {}:", font.family);
        eprintln!("    path:   {}", font.path.display());
        eprintln!("    sha256: {}", sha256_hex(&bytes));
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
