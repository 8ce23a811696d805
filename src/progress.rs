use std::time::Duration;
use raylib::prelude::*;
use crate::constants::*;
use crate::keyed::KeyedTask;
use crate::story::StoryId;
use crate::timer::Countdown;

/// Restart key of the active segment's fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveKey {
    pub id: StoryId,
    pub activation: u64,
}

/// Linear 0.0 -> 1.0 fill over a fixed duration.
#[derive(Debug, Clone)]
pub struct SegmentFill {
    countdown: Countdown,
}

impl SegmentFill {
    pub fn new(duration: Duration) -> Self {
        Self {
            countdown: Countdown::new(duration),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.countdown.tick(dt);
    }

    pub fn value(&self) -> f32 {
        raylib::core::math::lerp(0.0, 1.0, self.countdown.progress())
    }
}

#[derive(Default)]
pub struct ProgressTrack {
    fill: KeyedTask<ActiveKey, SegmentFill>,
}

impl ProgressTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts the fill from empty when `key` differs from the running one.
    pub fn sync(&mut self, key: ActiveKey, duration: Duration) -> bool {
        self.fill.launch(key, || SegmentFill::new(duration))
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some(fill) = self.fill.task_mut() {
            fill.tick(dt);
        }
    }

    pub fn active_fill(&self) -> f32 {
        self.fill.task().map_or(0.0, SegmentFill::value)
    }

    pub fn segment_fill(&self, position: usize, active: usize) -> f32 {
        if position < active {
            1.0
        } else if position > active {
            0.0
        } else {
            self.active_fill()
        }
    }

    pub fn fills(&self, count: usize, active: usize) -> Vec<f32> {
        (0..count).map(|p| self.segment_fill(p, active)).collect()
    }
}

/// Bars of a track spanning `width`: equal widths, `SEGMENT_GAP` apart, inside `TRACK_PADDING`.
pub fn segment_rects(width: f32, count: usize) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }
    let gaps = SEGMENT_GAP * (count - 1) as f32;
    let inner = (width - 2.0 * TRACK_PADDING - gaps).max(0.0);
    let bar_width = inner / count as f32;

    (0..count)
        .map(|i| {
            Rectangle::new(
                TRACK_PADDING + i as f32 * (bar_width + SEGMENT_GAP),
                TRACK_PADDING,
                bar_width,
                SEGMENT_HEIGHT,
            )
        })
        .collect()
}

/// Left-anchored part of `bar` covered by `fill`.
pub fn filled_rect(bar: Rectangle, fill: f32) -> Rectangle {
    Rectangle::new(bar.x, bar.y, bar.width * fill.clamp(0.0, 1.0), bar.height)
}

pub fn draw_track(d: &mut RaylibDrawHandle, width: f32, fills: &[f32]) {
    let background = Color::new(200, 200, 200, 128); // light grey, half transparent
    for (bar, &fill) in segment_rects(width, fills.len()).into_iter().zip(fills) {
        d.draw_rectangle_rounded(bar, roundness(bar), 4, background);
        if fill > 0.0 {
            let filled = filled_rect(bar, fill);
            d.draw_rectangle_rounded(filled, roundness(filled), 4, Color::WHITE);
        }
    }
}

// raylib expresses corner radius relative to the shorter side
fn roundness(rec: Rectangle) -> f32 {
    let short = rec.width.min(rec.height);
    if short <= 0.0 {
        return 0.0;
    }
    (2.0 * SEGMENT_CORNER_RADIUS / short).min(1.0)
}
