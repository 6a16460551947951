use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::Rng;

use carousel::constants::*;
use carousel::{Carousel, CarouselConfig};

/// Rotates through a list of text items, one at a time.
#[derive(Debug, Parser)]
#[command(name = "carousel", version)]
struct Args {
    /// Items to rotate through
    items: Vec<String>,

    /// Read items from a file, one per line
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Placeholder shown while there are no items
    #[arg(long)]
    default_item: Option<String>,

    /// Milliseconds each item stays on screen
    #[arg(long, default_value_t = DEFAULT_DWELL.as_millis() as u64)]
    dwell_ms: u64,

    /// Milliseconds of one slide transition
    #[arg(long, default_value_t = DEFAULT_ANIMATION_DURATION.as_millis() as u64)]
    animation_ms: u64,

    /// Show the first item and never advance
    #[arg(long)]
    no_animation: bool,

    /// Index of the first item shown (wraps, may be negative)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    start_offset: i64,

    /// Start at a random item
    #[arg(long, conflicts_with = "start_offset")]
    random_start: bool,

    /// Height of one item slot in pixels
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    viewport_height: f32,

    /// Length of the headless run in seconds
    #[arg(long, default_value_t = 15.0)]
    run_secs: f32,

    /// Pace the headless run in real time
    #[arg(long)]
    realtime: bool,

    /// Open a window instead of running headless
    #[cfg(feature = "windowed")]
    #[arg(long)]
    window: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut items = args.items.clone();
    if let Some(path) = &args.file {
        items.extend(load_items(path)?);
    }
    if items.is_empty() && args.default_item.is_none() {
        bail!("nothing to show: pass items, --file or --default-item");
    }

    let start_offset = if args.random_start && !items.is_empty() {
        rand::rng().random_range(0..items.len()) as i64
    } else {
        args.start_offset
    };

    let config = CarouselConfig::default()
        .with_viewport_height(args.viewport_height)
        .with_dwell(Duration::from_millis(args.dwell_ms))
        .with_animation_duration(Duration::from_millis(args.animation_ms))
        .with_animation_enabled(!args.no_animation)
        .with_start_offset(start_offset);

    let mut builder = Carousel::builder(|item: &String| item.clone())
        .config(config)
        .items(items)
        .observer(|item, counter| println!("[{counter:>3}] {item}"));
    if let Some(default_item) = args.default_item.clone() {
        builder = builder.default_item(default_item);
    }
    #[cfg(feature = "windowed")]
    if args.window {
        builder = builder.animator(carousel::window::EaseAnimator::new());
    }
    let mut carousel = builder.build().context("invalid carousel options")?;

    #[cfg(feature = "windowed")]
    if args.window {
        carousel::window::run(&mut carousel);
        return Ok(());
    }

    run_headless(&mut carousel, args.run_secs, args.realtime);
    Ok(())
}

/// Fixed-timestep loop, one `FRAME_TIME` per frame.
fn run_headless(carousel: &mut Carousel<String, String>, run_secs: f32, realtime: bool) {
    let dt = Duration::from_secs_f32(FRAME_TIME);
    let frames = (run_secs.max(0.0) / FRAME_TIME).ceil() as u64;
    tracing::info!(frames, fps = FPS, "running headless");

    for _ in 0..frames {
        carousel.update(dt);
        if realtime {
            std::thread::sleep(dt);
        }
    }

    carousel.clear();
    tracing::info!(counter = carousel.counter(), "done");
}

fn load_items(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read items from {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
