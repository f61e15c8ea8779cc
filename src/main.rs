use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod carousel;
mod config;
mod constants;
mod header;
mod slide;
mod state;
mod texture_loader;
mod widget;

use crate::carousel::ImageCarousel;
use crate::config::{CarouselOptions, IndicatorStyle};
use crate::constants::*;
use crate::header::HeaderNav;
use crate::widget::{FrameInput, Widget};

/// Image carousel gallery viewer.
#[derive(Parser, Debug)]
#[command(name = "carousel", version, about)]
struct Args {
    /// Directory to scan for images (png/jpg/jpeg/bmp/gif), sorted by name
    directory: Option<PathBuf>,

    /// Comma-separated list of image paths
    #[arg(long)]
    images: Option<String>,

    /// Comma-separated alt texts, matched to --images by position
    #[arg(long)]
    alts: Option<String>,

    /// Auto-advance interval in seconds (default depends on indicator style)
    #[arg(long)]
    interval: Option<f32>,

    /// Slide-position indicator style
    #[arg(long, value_enum, default_value_t = IndicatorStyle::Counter)]
    indicator: IndicatorStyle,

    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: i32,

    /// Window title
    #[arg(long, default_value = "Gallery")]
    title: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let options = CarouselOptions::resolve(
        args.images.as_deref(),
        args.alts.as_deref(),
        args.directory.as_deref(),
        args.interval,
        args.indicator,
    )
    .context("invalid carousel configuration")?;

    info!(
        slides = options.slides.len(),
        interval = options.interval,
        "starting gallery"
    );

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&args.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut header = HeaderNav::with_default_links();
    let mut carousel = ImageCarousel::new(options);

    header.mount(&mut rl, &thread)?;
    carousel
        .mount(&mut rl, &thread)
        .context("failed to mount carousel")?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let input = FrameInput::gather(&rl);

        carousel.handle_input(&input);
        carousel.update(dt);
        header.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        header.draw(&mut d);
        carousel.draw(&mut d);
    }

    carousel.unmount();
    header.unmount();
    Ok(())
}
