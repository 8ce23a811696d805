use std::time::Duration;
use log::debug;
use crate::progress::{ActiveKey, ProgressTrack};
use crate::sequencer::Sequencer;
use crate::story::{Story, StoryList};

/// Story loop state: the sequencer and the progress track it drives.
pub struct Playback {
    stories: StoryList,
    sequencer: Sequencer,
    track: ProgressTrack,
}

impl Playback {
    pub fn new(stories: StoryList, start_index: usize) -> Self {
        let sequencer = Sequencer::starting_at(&stories, start_index);
        let mut playback = Self {
            stories,
            sequencer,
            track: ProgressTrack::new(),
        };
        playback.sync_track();
        playback
    }

    /// Advances both timers by one frame. Returns `true` when another story became active.
    pub fn update(&mut self, dt: Duration) -> bool {
        // Fill first: the finished segment reads 1.0 on the frame the index moves
        self.track.tick(dt);
        let advanced = self.sequencer.update(dt);
        if advanced {
            let story = self.active_story();
            debug!("Showing story {} ({} ms)", story.id, story.duration_ms);
        }
        self.sync_track();
        advanced
    }

    pub fn index(&self) -> usize {
        self.sequencer.index()
    }

    pub fn stories(&self) -> &StoryList {
        &self.stories
    }

    pub fn active_story(&self) -> &Story {
        &self.stories[self.sequencer.index()]
    }

    pub fn fills(&self) -> Vec<f32> {
        self.track.fills(self.stories.len(), self.index())
    }

    fn sync_track(&mut self) {
        let activation = self.sequencer.activation();
        let story = &self.stories[activation.index];
        let key = ActiveKey {
            id: story.id,
            activation: activation.count,
        };
        self.track.sync(key, story.duration());
    }
}
