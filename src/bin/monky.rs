use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use monky_odyssey::{ContentStore, Player, PlayerConfig, SimulatedScheduler, TickOutcome};

#[derive(Parser, Debug)]
#[command(name = "monky", version)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the page as plain text.
    Page(ContentArgs),
    /// Dump the content store as pretty JSON.
    Content(ContentArgs),
    /// Simulate playback headlessly until the story ends.
    Play(PlayArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct ContentArgs {
    /// Content store JSON. Defaults to the built-in story.
    #[arg(long)]
    content: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    refresh_hz: f64,

    /// Player config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content store JSON. Defaults to the built-in story.
    #[arg(long)]
    content: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Normalized story position in `[0, 1]`.
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Container width in logical pixels. Defaults to the config value.
    #[arg(long)]
    width: Option<f64>,

    /// Device pixel ratio. Defaults to the config value.
    #[arg(long)]
    dpr: Option<f64>,

    /// Player config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Page(args) => cmd_page(args),
        Command::Content(args) => cmd_content(args),
        Command::Play(args) => cmd_play(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_content(path: Option<&Path>) -> anyhow::Result<ContentStore> {
    match path {
        Some(p) => ContentStore::from_json_file(p)
            .with_context(|| format!("load content '{}'", p.display())),
        None => Ok(ContentStore::builtin()),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PlayerConfig> {
    match path {
        Some(p) => {
            PlayerConfig::from_json_file(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(PlayerConfig::default()),
    }
}

fn cmd_page(args: ContentArgs) -> anyhow::Result<()> {
    let store = load_content(args.content.as_deref())?;
    print!("{}", monky_odyssey::render_page(&store));
    Ok(())
}

fn cmd_content(args: ContentArgs) -> anyhow::Result<()> {
    let store = load_content(args.content.as_deref())?;
    println!("{}", store.to_json_pretty()?);
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let store = load_content(args.content.as_deref())?;
    let config = load_config(args.config.as_deref())?;
    config
        .validate_for(&store)
        .context("config does not fit the content")?;

    let mut player = Player::new(&store, &config, SimulatedScheduler::new(args.refresh_hz));
    let mut frames = 0u64;
    let mut beat = usize::MAX;
    while let Some((id, ts)) = player.scheduler_mut().fire() {
        let outcome = player.on_frame(id, ts);
        frames += 1;

        let controls = player.controls();
        if controls.active_beat != beat {
            beat = controls.active_beat;
            if let Some(b) = store.beats.get(beat) {
                println!("[{}] {}", controls.elapsed_label, b.label);
            }
        }
        if outcome == TickOutcome::Finished {
            break;
        }
    }

    let controls = player.controls();
    println!("frames: {frames}");
    println!("time: {}", controls.timestamp_label());
    println!("control: {}", controls.toggle_label);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    config
        .validate_for(&ContentStore::builtin())
        .context("config does not fit the content")?;
    let width = args.width.unwrap_or(config.container_width);
    let dpr = args.dpr.unwrap_or(config.device_pixel_ratio);
    let size = config.sizing().resolve(width, dpr);

    let frame = monky_odyssey::render_frame(args.progress, size, config.clear());

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.unpremultiplied_data(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
