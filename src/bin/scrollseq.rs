use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollseq", version)]
struct Cli {
    /// Log loader and renderer activity to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the asset path of a frame.
    Path(PathArgs),
    /// Load a sequence and render the frame for one scroll progress value as a PNG.
    Frame(FrameArgs),
    /// Render evenly spaced scroll progress values as numbered PNGs.
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
struct PathArgs {
    /// Frame index (1-based).
    #[arg(long)]
    index: u32,

    /// Asset directory prefix.
    #[arg(long, default_value = "assets")]
    dir: String,

    /// Zero-padding width.
    #[arg(long, default_value_t = scrollseq::DEFAULT_PAD_WIDTH)]
    pad: usize,

    /// File extension.
    #[arg(long, default_value = "png")]
    ext: String,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    /// Directory holding the numbered frames.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames in the sequence.
    #[arg(long)]
    frames: Option<u32>,

    /// Frames required before boot.
    #[arg(long)]
    threshold: Option<u32>,

    /// Fallback boot delay in milliseconds.
    #[arg(long)]
    fallback_ms: Option<u64>,

    /// Surface width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Fetch worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Longest time to wait for outstanding fetches after boot, in milliseconds.
    #[arg(long, default_value_t = 30_000)]
    wait_ms: u64,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    seq: SequenceArgs,

    /// Scroll progress through the hero region, 0..=1.
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    seq: SequenceArgs,

    /// Number of progress samples, including both ends.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Output directory for `frame_0000.png`, `frame_0001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(serde::Serialize, Debug)]
struct LoadReport {
    boot_trigger: scrollseq::BootTrigger,
    loaded: u32,
    frame_count: u32,
    all_settled: bool,
}

#[derive(serde::Serialize, Debug)]
struct FrameReport {
    progress: f64,
    frame: u32,
    label: String,
    painted: bool,
    out: PathBuf,
}

#[derive(serde::Serialize, Debug)]
struct RunReport {
    load: LoadReport,
    frames: Vec<FrameReport>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    println!(
        "{}",
        scrollseq::frame_rel_path(&args.dir, args.index, args.pad, &args.ext)
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut player, load) = load_sequence(&args.seq)?;
    let frame = render_progress(&mut player, args.progress, &args.out)?;
    print_report(&RunReport {
        load,
        frames: vec![frame],
    })
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be >= 1");
    }
    let (mut player, load) = load_sequence(&args.seq)?;
    let mut frames = Vec::with_capacity(args.steps as usize);
    for step in 0..args.steps {
        let progress = if args.steps == 1 {
            0.0
        } else {
            f64::from(step) / f64::from(args.steps - 1)
        };
        let out = args.out_dir.join(format!("frame_{step:04}.png"));
        frames.push(render_progress(&mut player, progress, &out)?);
    }
    print_report(&RunReport { load, frames })
}

fn build_config(args: &SequenceArgs) -> anyhow::Result<scrollseq::SequenceConfig> {
    let mut cfg = match &args.config {
        Some(path) => scrollseq::SequenceConfig::from_json_file(path)?,
        None => scrollseq::SequenceConfig::default(),
    }
    .with_env_overrides();

    if let Some(dir) = &args.assets {
        cfg.asset_dir = dir.clone();
    }
    if let Some(n) = args.frames {
        cfg.frame_count = n;
        cfg.boot_threshold = cfg.boot_threshold.min(n);
    }
    if let Some(n) = args.threshold {
        cfg.boot_threshold = n;
    }
    if let Some(ms) = args.fallback_ms {
        cfg.fallback_delay = Duration::from_millis(ms);
    }
    if let Some(w) = args.width {
        cfg.viewport.width = w;
    }
    if let Some(h) = args.height {
        cfg.viewport.height = h;
    }
    if args.threads.is_some() {
        cfg.threads = args.threads;
    }
    cfg.validate().context("invalid sequence configuration")?;
    Ok(cfg)
}

fn load_sequence(
    args: &SequenceArgs,
) -> anyhow::Result<(scrollseq::FramePlayer, LoadReport)> {
    let cfg = build_config(args)?;
    if !cfg.asset_dir.is_dir() {
        anyhow::bail!("asset dir '{}' does not exist", cfg.asset_dir.display());
    }
    let source = Arc::new(scrollseq::DirSource::from_config(&cfg));
    let mut player = scrollseq::FramePlayer::new(cfg, Box::new(scrollseq::TracingSink))?;
    player.start(source)?;

    let boot_trigger = player.wait_for_boot()?;
    let all_settled = player.wait_for_all(Duration::from_millis(args.wait_ms))?;
    let load = LoadReport {
        boot_trigger,
        loaded: player.state().loaded_count(),
        frame_count: player.config().frame_count,
        all_settled,
    };
    Ok((player, load))
}

fn render_progress(
    player: &mut scrollseq::FramePlayer,
    progress: f64,
    out: &Path,
) -> anyhow::Result<FrameReport> {
    let update = player
        .on_scroll_progress(progress)
        .context("scrub driver inactive after boot")?;
    player.surface().write_png(out)?;
    Ok(FrameReport {
        progress,
        frame: update.whole_frame,
        label: update.frame_label,
        painted: update.render.painted(),
        out: out.to_path_buf(),
    })
}

fn print_report(report: &RunReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    println!("{json}");
    Ok(())
}
