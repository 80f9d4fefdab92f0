use bevy::math::{IVec2, UVec2};

/// Axis-aligned rectangle in top-left-origin screen pixels.
///
/// `right` and `bottom` are one past the last pixel (they behave more like a
/// size than a pixel coordinate), so they need a -1 adjustment before being
/// used to sample a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_corner(top_left: IVec2, size: UVec2) -> Self {
        Self::new(top_left.x, top_left.y, size.x as i32, size.y as i32)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width.max(0) as u32, self.height.max(0) as u32)
    }

    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn top_right(&self) -> IVec2 {
        IVec2::new(self.right(), self.y)
    }

    pub fn bottom_left(&self) -> IVec2 {
        IVec2::new(self.x, self.bottom())
    }

    pub fn bottom_right(&self) -> IVec2 {
        IVec2::new(self.right(), self.bottom())
    }

    pub fn mid_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y + self.height / 2)
    }

    pub fn mid_bottom(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.bottom())
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Translated copy
    pub fn moved(&self, by: IVec2) -> Self {
        Self::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }

    /// Same top-left corner, new size
    pub fn resized(&self, size: UVec2) -> Self {
        Self::from_corner(self.top_left(), size)
    }

    /// True when `other` lies completely inside this rectangle
    pub fn contains(&self, other: &ScreenRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn contains_point(&self, point: IVec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }
}
