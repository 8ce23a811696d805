use std::time::Duration;
use log::debug;
use crate::keyed::KeyedTask;
use crate::story::StoryList;
use crate::timer::Delay;

/// Identity of one display of one position. `count` grows on every activation,
/// so showing the same index again still yields a new key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub index: usize,
    pub count: u64,
}

/// Owns the active index and moves it forward when the active story's delay expires.
pub struct Sequencer {
    durations: Vec<Duration>,
    index: usize,
    activations: u64,
    delay: KeyedTask<Activation, Delay>,
}

impl Sequencer {
    pub fn new(stories: &StoryList) -> Self {
        let mut sequencer = Self {
            durations: stories.iter().map(|s| s.duration()).collect(),
            index: 0,
            activations: 0,
            delay: KeyedTask::new(),
        };
        sequencer.schedule();
        sequencer
    }

    pub fn starting_at(stories: &StoryList, index: usize) -> Self {
        let mut sequencer = Self::new(stories);
        sequencer.jump_to(index);
        sequencer
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn activation(&self) -> Activation {
        Activation {
            index: self.index,
            count: self.activations,
        }
    }

    /// Moves to `index`, abandoning the pending delay. Out-of-range jumps go to 0
    /// and jumping to the active index changes nothing.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let index = if index < self.durations.len() {
            index
        } else {
            debug!("Index {} is out of range, restarting at 0", index);
            0
        };
        if index == self.index {
            return false;
        }
        self.activate(index);
        true
    }

    /// Advances the pending delay by `dt`. Returns `true` when the index moved.
    /// At most one advance happens per call.
    pub fn update(&mut self, dt: Duration) -> bool {
        let expired = self.delay.task_mut().is_some_and(|delay| delay.tick(dt));
        if expired {
            self.advance();
        }
        expired
    }

    fn advance(&mut self) {
        self.activate((self.index + 1) % self.durations.len());
    }

    fn activate(&mut self, index: usize) {
        self.index = index;
        self.activations += 1;
        self.schedule();
    }

    fn schedule(&mut self) {
        let duration = self.durations[self.index];
        self.delay.launch(self.activation(), || Delay::new(duration));
    }
}
