use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rand::seq::SliceRandom;
use raylib::prelude::*;

mod config;
mod constants;
mod keyed;
mod playback;
mod progress;
mod sequencer;
mod story;
mod texture_loader;
mod timer;
mod viewer;

use crate::config::Config;
use crate::playback::Playback;
use crate::story::StoryList;
use crate::texture_loader::load_sorted_image_paths;
use crate::viewer::StoryViewer;

fn setup_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn build_story_list(config: &Config) -> Result<StoryList> {
    let Some(dir) = &config.image_dir else {
        info!("No image directory given, using built-in stories from {}", config.assets.display());
        return Ok(StoryList::builtin(&config.assets));
    };

    let mut paths = load_sorted_image_paths(dir)?;
    if config.shuffle {
        paths.shuffle(&mut rand::rng());
    }
    info!("Found {} images in {}", paths.len(), dir.display());

    StoryList::from_paths(paths, config.duration_ms)
        .with_context(|| format!("Failed to build stories from {}", dir.display()))
}

fn main() -> Result<()> {
    let config = Config::parse();
    setup_logging(config.log_level());

    let stories = build_story_list(&config)?;

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Stories")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let playback = Playback::new(stories, config.start);
    let mut viewer = StoryViewer::load(&mut rl, &thread, playback);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = config
            .frame_step()
            .unwrap_or_else(|| Duration::try_from_secs_f32(rl.get_frame_time()).unwrap_or_default());

        viewer.update(dt);

        let mut d = rl.begin_drawing(&thread);
        viewer.draw(&mut d);
    }

    Ok(())
}
