use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoryId(pub u32);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One unit of content: an image shown for `duration_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub id: StoryId,
    pub duration_ms: u32,
    pub image: PathBuf,
}

impl Story {
    pub fn new(id: u32, duration_ms: u32, image: impl Into<PathBuf>) -> Self {
        Self {
            id: StoryId(id),
            duration_ms,
            image: image.into(),
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms as u64)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StoryError {
    #[error("Story list is empty")]
    Empty,

    #[error("Story {0} has a zero duration")]
    ZeroDuration(StoryId),

    #[error("Story id {0} is used more than once")]
    DuplicateId(StoryId),
}

/// Ordered, non-empty and immutable list of stories for one viewing session.
#[derive(Debug, Clone)]
pub struct StoryList {
    stories: Vec<Story>,
}

impl StoryList {
    pub fn new(stories: Vec<Story>) -> Result<Self, StoryError> {
        if stories.is_empty() {
            return Err(StoryError::Empty);
        }

        let mut seen = HashSet::new();
        for story in &stories {
            if story.duration_ms == 0 {
                return Err(StoryError::ZeroDuration(story.id));
            }
            if !seen.insert(story.id) {
                return Err(StoryError::DuplicateId(story.id));
            }
        }

        Ok(Self { stories })
    }

    /// The three stories shown when no image directory is given.
    pub fn builtin(assets_dir: &Path) -> Self {
        let stories = [(1, "balcony.jpg"), (2, "bird.jpg"), (3, "poppies.jpg")]
            .into_iter()
            .map(|(id, file)| Story::new(id, crate::constants::DEFAULT_STORY_DURATION_MS, assets_dir.join(file)))
            .collect();
        Self { stories }
    }

    /// One story per image path, ids assigned from 1 in the given order.
    pub fn from_paths(paths: Vec<PathBuf>, duration_ms: u32) -> Result<Self, StoryError> {
        let stories = paths
            .into_iter()
            .zip(1..)
            .map(|(path, id)| Story::new(id, duration_ms, path))
            .collect();
        Self::new(stories)
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Story> {
        self.stories.iter()
    }
}

impl std::ops::Index<usize> for StoryList {
    type Output = Story;

    fn index(&self, index: usize) -> &Story {
        &self.stories[index]
    }
}
