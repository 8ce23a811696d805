pub const WINDOW_WIDTH: i32 = 540;             // Portrait "phone" surface
pub const WINDOW_HEIGHT: i32 = 960;
pub const FPS: u32 = 60;                       // Frames per second

pub const DEFAULT_STORY_DURATION_MS: u32 = 3000; // Time each story stays on screen (milliseconds)

pub const TRACK_PADDING: f32 = 8.0;            // Padding around the whole progress track
pub const SEGMENT_GAP: f32 = 2.0;              // Space between adjacent segment bars
pub const SEGMENT_HEIGHT: f32 = 4.0;           // Height of a segment bar
pub const SEGMENT_CORNER_RADIUS: f32 = 2.0;

pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
