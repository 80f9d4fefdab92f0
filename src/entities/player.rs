use super::types::{Direction, Step};
use crate::config::PLAYER_STOPPED_VELOCITY;
use crate::map::Background;
use crate::screen::ScreenRect;
use bevy::math::{IVec2, UVec2};
use bevy::prelude::Resource;

/// Frame sizes indexed by `[Direction::index()][Step::index()]`
pub type FrameSizes = [[UVec2; 2]; 4];

/// What happened on a move tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not moving, nothing changed
    Idle,
    Moved,
    /// Something in the way; velocity was halved for the next try
    Blocked,
    /// The next step would leave the map window; the map should switch
    LeftRegion(Direction),
}

/// The player character.
///
/// Position is kept in screen pixels with a top-left origin. The rectangle
/// always has the size of the frame currently showing.
#[derive(Resource, Debug, Clone)]
pub struct Player {
    facing: Direction,
    moving: bool,
    step: Step,
    rect: ScreenRect,
    velocity: IVec2,
    frame_sizes: FrameSizes,
    map_window: ScreenRect,
}

impl Player {
    /// A stopped player facing down in the middle of `map_window`
    pub fn new(frame_sizes: FrameSizes, map_window: ScreenRect) -> Self {
        let facing = Direction::default();
        let step = Step::default();
        let size = frame_sizes[facing.index()][step.index()];
        let top_left = map_window.center() - (size / 2).as_ivec2();
        Self {
            facing,
            moving: false,
            step,
            rect: ScreenRect::from_corner(top_left, size),
            velocity: IVec2::ZERO,
            frame_sizes,
            map_window,
        }
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn rect(&self) -> ScreenRect {
        self.rect
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    /// (direction, step) of the frame to draw
    pub fn current_frame(&self) -> (Direction, Step) {
        (self.facing, self.step)
    }

    /// Start walking in `direction`
    pub fn key_down(&mut self, direction: Direction) {
        self.facing = direction;
        self.moving = true;
        self.velocity = direction.velocity();
        self.rect = self.rect.resized(self.frame_size());
    }

    /// Stop walking, keep facing the same way
    pub fn key_up(&mut self) {
        self.moving = false;
        self.velocity = PLAYER_STOPPED_VELOCITY;
    }

    /// Advance one move tick against `background`
    pub fn tick(&mut self, background: &impl Background) -> TickOutcome {
        if !self.moving {
            return TickOutcome::Idle;
        }

        self.step = self.step.toggled();
        self.rect = self.rect.resized(self.frame_size());

        let next = self.rect.moved(self.velocity);
        if self.can_move_to(next, background) {
            self.rect = next;
            TickOutcome::Moved
        } else if !self.map_window.contains(&next) {
            TickOutcome::LeftRegion(self.facing)
        } else {
            // Squeeze: retry with a smaller step next tick
            self.velocity = halved(self.velocity, self.facing);
            TickOutcome::Blocked
        }
    }

    /// True if every point on the leading edge at `next` sees the same
    /// color as that point does now. Samples off the background block.
    pub fn can_move_to(&self, next: ScreenRect, background: &impl Background) -> bool {
        let current = sample_colors(self.rect, self.facing, background);
        let ahead = sample_colors(next, self.facing, background);

        #[cfg(feature = "debug_collision")]
        bevy::log::debug!(
            "Collision {:?}: {:?} -> {:?}",
            self.facing,
            current,
            ahead
        );

        match (current, ahead) {
            (Some(current), Some(ahead)) => current == ahead,
            _ => false,
        }
    }

    /// Move to the far edge of the map window after the map switched
    /// regions in `direction`
    pub fn switch_maps(&mut self, direction: Direction) {
        match direction {
            Direction::Right => self.rect.set_left(self.map_window.left()),
            Direction::Left => self.rect.set_right(self.map_window.right()),
            Direction::Up => self.rect.set_bottom(self.map_window.bottom()),
            Direction::Down => self.rect.set_top(self.map_window.top()),
        }
    }

    fn frame_size(&self) -> UVec2 {
        self.frame_sizes[self.facing.index()][self.step.index()]
    }
}

/// Points on the leading edge of `rect` when walking `facing`
pub fn collision_points(rect: ScreenRect, facing: Direction) -> Vec<IVec2> {
    let one_up = IVec2::Y;
    let one_left = IVec2::X;
    match facing {
        Direction::Left => vec![rect.mid_left(), rect.bottom_left() - one_up],
        Direction::Up => vec![rect.top_left(), rect.top_right() - one_left],
        Direction::Right => vec![rect.bottom_right() - IVec2::ONE],
        Direction::Down => vec![
            rect.bottom_left() - one_up,
            rect.mid_bottom() - one_up,
            rect.bottom_right() - IVec2::ONE,
        ],
    }
}

fn sample_colors(
    rect: ScreenRect,
    facing: Direction,
    background: &impl Background,
) -> Option<Vec<[u8; 4]>> {
    collision_points(rect, facing)
        .into_iter()
        .map(|point| background.color_at(point).map(|color| color.0))
        .collect()
}

/// Half the velocity, rounding ties to even, but never less than one pixel
/// in the facing direction
pub fn halved(velocity: IVec2, facing: Direction) -> IVec2 {
    let half = IVec2::new(
        (velocity.x as f32 / 2.0).round_ties_even() as i32,
        (velocity.y as f32 / 2.0).round_ties_even() as i32,
    );
    if half == IVec2::ZERO {
        facing.offset()
    } else {
        half
    }
}
