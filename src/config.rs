use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use log::LevelFilter;
use crate::constants::*;

#[derive(Debug, Parser)]
#[command(name = "storyview", version, about = "Auto-advancing story viewer with a segmented progress bar")]
pub struct Config {
    /// Directory of images to show as stories (sorted by file name)
    pub image_dir: Option<PathBuf>,

    /// Where the built-in stories' images live, used without IMAGE_DIR
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// How long each story from IMAGE_DIR stays on screen
    #[arg(long, default_value_t = DEFAULT_STORY_DURATION_MS, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration_ms: u32,

    /// Index of the first story; past the end starts at 0
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Shuffle IMAGE_DIR stories
    #[arg(long)]
    pub shuffle: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Advance time by exactly 1/fps per frame instead of the measured frame time
    #[arg(long)]
    pub fixed_step: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn frame_step(&self) -> Option<Duration> {
        self.fixed_step.then(|| Duration::from_secs(1) / self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["storyview"]).unwrap();
        assert_eq!(config.image_dir, None);
        assert_eq!(config.assets, PathBuf::from("assets"));
        assert_eq!(config.duration_ms, 3000);
        assert_eq!(config.start, 0);
        assert_eq!((config.width, config.height, config.fps), (540, 960, 60));
        assert_eq!(config.frame_step(), None);
        assert_eq!(config.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn parses_options() {
        let config = Config::try_parse_from([
            "storyview", "photos", "--duration-ms", "1500", "--start", "2", "--shuffle", "--fixed-step",
            "--fps", "50", "-vv",
        ])
        .unwrap();
        assert_eq!(config.image_dir, Some(PathBuf::from("photos")));
        assert_eq!(config.duration_ms, 1500);
        assert_eq!(config.start, 2);
        assert!(config.shuffle);
        assert_eq!(config.frame_step(), Some(Duration::from_millis(20)));
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn rejects_zero_duration_and_fps() {
        assert!(Config::try_parse_from(["storyview", "--duration-ms", "0"]).is_err());
        assert!(Config::try_parse_from(["storyview", "--fps", "0"]).is_err());
    }
}
