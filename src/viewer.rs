use std::time::Duration;
use log::{info, warn};
use rand::Rng;
use raylib::prelude::*;
use crate::playback::Playback;
use crate::progress::draw_track;
use crate::texture_loader::load_texture_with_exif_rotation;

enum StoryImage {
    Texture(Texture2D),
    Placeholder(Color),
}

/// Full-window story viewer: the active image scaled to cover, progress track on top.
pub struct StoryViewer {
    playback: Playback,
    images: Vec<StoryImage>,
}

impl StoryViewer {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, playback: Playback) -> Self {
        let mut rng = rand::rng();
        let images = playback
            .stories()
            .iter()
            .map(|story| match load_texture_with_exif_rotation(rl, thread, &story.image) {
                Ok(texture) => StoryImage::Texture(texture),
                Err(e) => {
                    warn!("Story {}: {:#}, showing a placeholder", story.id, e);
                    StoryImage::Placeholder(Color::new(
                        rng.random_range(40..200),
                        rng.random_range(40..200),
                        rng.random_range(40..200),
                        255,
                    ))
                }
            })
            .collect();

        info!("Loaded {} stories", playback.stories().len());
        Self { playback, images }
    }

    pub fn update(&mut self, dt: Duration) {
        self.playback.update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);

        match &self.images[self.playback.index()] {
            StoryImage::Texture(texture) => {
                let source = cover_source_rect(
                    texture.width() as f32,
                    texture.height() as f32,
                    screen_width,
                    screen_height,
                );
                d.draw_texture_pro(
                    texture,
                    source,
                    Rectangle::new(0.0, 0.0, screen_width, screen_height),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            StoryImage::Placeholder(color) => {
                d.draw_rectangle(0, 0, screen_width as i32, screen_height as i32, *color);
            }
        }

        draw_track(d, screen_width, &self.playback.fills());
    }
}

/// Centered region of a `tex_width` x `tex_height` texture with the aspect ratio of the
/// destination, so drawing it stretched to the destination crops instead of distorting.
pub fn cover_source_rect(tex_width: f32, tex_height: f32, dst_width: f32, dst_height: f32) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 || dst_width <= 0.0 || dst_height <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_width.max(0.0), tex_height.max(0.0));
    }

    let scale = (dst_width / tex_width).max(dst_height / tex_height);
    let width = (dst_width / scale).min(tex_width);
    let height = (dst_height / scale).min(tex_height);

    Rectangle::new((tex_width - width) * 0.5, (tex_height - height) * 0.5, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn landscape_image_is_cropped_at_the_sides() {
        let r = cover_source_rect(1920.0, 1080.0, 540.0, 960.0);
        assert!(close(r.height, 1080.0));
        assert!(close(r.width, 1080.0 * 540.0 / 960.0));
        assert!(close(r.y, 0.0));
        assert!(close(r.x, (1920.0 - r.width) / 2.0));
    }

    #[test]
    fn tall_image_is_cropped_top_and_bottom() {
        let r = cover_source_rect(1000.0, 4000.0, 540.0, 960.0);
        assert!(close(r.width, 1000.0));
        assert!(close(r.height, 1000.0 * 960.0 / 540.0));
        assert!(close(r.x, 0.0));
        assert!(r.y > 0.0 && r.y + r.height <= 4000.0 + 1e-3);
    }

    #[test]
    fn matching_aspect_uses_whole_texture() {
        let r = cover_source_rect(1080.0, 1920.0, 540.0, 960.0);
        assert!(close(r.x, 0.0) && close(r.y, 0.0));
        assert!(close(r.width, 1080.0) && close(r.height, 1920.0));
    }

    #[test]
    fn degenerate_sizes_fall_back_to_full_texture() {
        let r = cover_source_rect(100.0, 50.0, 0.0, 960.0);
        assert_eq!((r.x, r.y, r.width, r.height), (0.0, 0.0, 100.0, 50.0));
    }
}
