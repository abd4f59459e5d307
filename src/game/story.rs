// Story banner shown at the top of the screen
//
// One message at a time. Each story event replaces the message and restarts
// the countdown; the banner hides once the countdown reaches zero.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StoryMessage {
    Intro,
    BossAwakened,
    Victory,
}

impl StoryMessage {
    pub fn text(self) -> &'static str {
        match self {
            StoryMessage::Intro => "Gather resources and defeat the boss to restore the world.",
            StoryMessage::BossAwakened => "The boss has awoken! Defeat it to save the land.",
            StoryMessage::Victory => "You have defeated the boss! Peace has returned.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryBanner {
    message: StoryMessage,
    frames_left: u32,
    duration: u32,
}

impl StoryBanner {
    /// Starts out showing the intro for `duration` frames
    pub fn new(duration: u32) -> Self {
        StoryBanner {
            message: StoryMessage::Intro,
            frames_left: duration,
            duration,
        }
    }

    pub fn show(&mut self, message: StoryMessage) {
        self.message = message;
        self.frames_left = self.duration;
    }

    pub fn tick(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
    }

    /// The message on screen, if the banner is still up
    pub fn visible(&self) -> Option<StoryMessage> {
        (self.frames_left > 0).then_some(self.message)
    }

    pub fn frames_left(&self) -> u32 {
        self.frames_left
    }
}
