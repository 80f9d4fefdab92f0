//! Timing of the title sequence.
//!
//! The waterfall shot fades to black, then the intro story scrolls up,
//! pauses, and the treasure list scrolls after it. Everything is driven by
//! the seconds since the sequence (re)started.

use crate::config::scale::coordinates;
use crate::config::{NES_WINDOW_SIZE, TILE_SCALING};
use crate::tiles::WATERFALL_SPRAY_FRAMES;
use bevy::math::IVec2;
use std::time::Duration;

pub const START_TITLE_FADE_AT_SECS: f64 = 8.0;
pub const FINISH_TITLE_FADE_AT_SECS: f64 = 16.0;
pub const PAUSE_STORY_SCROLL_AT_SECS: f64 = 23.5;
pub const RESUME_STORY_SCROLL_AT_SECS: f64 = 27.5;
pub const FINISH_STORY_SCROLL_AT_SECS: f64 = 74.5;
pub const RESTART_TITLE_SHOT_AT_SECS: f64 = 82.75;

/// NES pixels per second the story scrolls at
const STORY_SCROLL_SPEED: f64 = 29.467;
/// How far the story has scrolled when it pauses
const STORY_PAUSE_OFFSET: f64 = 221.25;
/// How far the treasure list scrolls after the pause
const TREASURE_SCROLL_DISTANCE: f64 = 713.0;
/// Left margin of the intro text, in NES pixels
const INTRO_TEXT_X: f64 = 2.0;

/// Time each waterfall frame is shown
pub const TITLE_FRAME_TIME: Duration = Duration::from_millis(75);

/// Title background tile (row, col) for each frame. Every background shows
/// for two frames so the waterfall moves twice as fast, and the sequence
/// undulates back and forth.
pub const BACKGROUND_FRAME_ORDER: [(u32, u32); 12] = [
    (0, 0),
    (0, 0),
    (0, 1),
    (0, 1),
    (1, 0),
    (1, 0),
    (1, 1),
    (1, 1),
    (1, 0),
    (1, 0),
    (0, 1),
    (0, 1),
];

// Waterfall layer positions in NES pixels
pub const SPRAY_LOCATION: IVec2 = IVec2::new(79, 176);
pub const WATERFALL_LOCATION: IVec2 = IVec2::new(80, 181);
/// The waves jump between these two spots on alternate frames
pub const WAVES_LOCATIONS: [IVec2; 2] = [IVec2::new(80, 171), IVec2::new(80, 181)];

/// Part of the sequence showing at a given time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePhase {
    /// Animated waterfall, fading to black
    Waterfall,
    ScrollStory,
    PauseStory,
    ScrollTreasures,
    PauseTreasures,
}

impl TitlePhase {
    pub fn at(elapsed_secs: f64) -> Self {
        if elapsed_secs < FINISH_TITLE_FADE_AT_SECS {
            TitlePhase::Waterfall
        } else if elapsed_secs < PAUSE_STORY_SCROLL_AT_SECS {
            TitlePhase::ScrollStory
        } else if elapsed_secs < RESUME_STORY_SCROLL_AT_SECS {
            TitlePhase::PauseStory
        } else if elapsed_secs < FINISH_STORY_SCROLL_AT_SECS {
            TitlePhase::ScrollTreasures
        } else {
            TitlePhase::PauseTreasures
        }
    }

    pub fn shows_waterfall(self) -> bool {
        self == TitlePhase::Waterfall
    }
}

/// Opacity of the black layer fading out the waterfall shot
pub fn alpha_value(elapsed_secs: f64) -> u8 {
    if elapsed_secs < START_TITLE_FADE_AT_SECS {
        return 0;
    }
    if elapsed_secs > FINISH_TITLE_FADE_AT_SECS {
        return 255;
    }
    ((elapsed_secs - START_TITLE_FADE_AT_SECS) * (255.0 / START_TITLE_FADE_AT_SECS)) as u8
}

/// Top-left screen position of the intro text
pub fn intro_text_location(elapsed_secs: f64) -> IVec2 {
    let bottom = NES_WINDOW_SIZE.y as f64;
    let nes_y = if elapsed_secs < FINISH_TITLE_FADE_AT_SECS {
        bottom
    } else if elapsed_secs < PAUSE_STORY_SCROLL_AT_SECS {
        bottom - STORY_SCROLL_SPEED * (elapsed_secs - FINISH_TITLE_FADE_AT_SECS)
    } else if elapsed_secs < RESUME_STORY_SCROLL_AT_SECS {
        bottom - STORY_PAUSE_OFFSET
    } else {
        let scrolling = RESUME_STORY_SCROLL_AT_SECS..FINISH_STORY_SCROLL_AT_SECS;
        let since_resume = elapsed_secs.min(scrolling.end) - scrolling.start;
        let speed = TREASURE_SCROLL_DISTANCE / (scrolling.end - scrolling.start);
        bottom - STORY_PAUSE_OFFSET - speed * since_resume
    };
    let scaling = TILE_SCALING.as_dvec2();
    IVec2::new(
        (INTRO_TEXT_X * scaling.x) as i32,
        (nes_y * scaling.y) as i32,
    )
}

/// Seconds into the current run of the sequence, which starts over every
/// `RESTART_TITLE_SHOT_AT_SECS`
pub fn sequence_time(total_secs: f64) -> f64 {
    total_secs.rem_euclid(RESTART_TITLE_SHOT_AT_SECS)
}

/// Everything that changes between waterfall frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterfallFrame {
    /// (row, col) of the title background tile
    pub background: (u32, u32),
    pub spray: usize,
    /// Screen position of the waves
    pub waves: IVec2,
}

pub fn waterfall_frame(frame: usize) -> WaterfallFrame {
    WaterfallFrame {
        background: BACKGROUND_FRAME_ORDER[frame % BACKGROUND_FRAME_ORDER.len()],
        spray: frame % WATERFALL_SPRAY_FRAMES,
        waves: coordinates(WAVES_LOCATIONS[frame % WAVES_LOCATIONS.len()]),
    }
}
