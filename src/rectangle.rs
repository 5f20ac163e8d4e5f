use crate::{
    colour::Colour,
    factory::SceneBounds,
    math::{Fl, Vec2},
};

/// An axis aligned rectangle with an outline and a fill colour.
///
/// Coordinates are in scene pixels with the origin at the top-left corner.
/// A rectangle covers the half-open region `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Rectangle {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width, in pixels
    pub width: i32,
    /// Height, in pixels
    pub height: i32,
    /// Colour of the outline
    pub stroke: Colour,
    /// Colour of the interior
    pub fill: Colour,
}

impl Rectangle {
    /// Create a rectangle
    pub fn new(x: i32, y: i32, width: i32, height: i32, stroke: Colour, fill: Colour) -> Self {
        Self {
            x,
            y,
            width,
            height,
            stroke,
            fill,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Width and height
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Midpoint, which may fall between pixels
    pub fn center(&self) -> Vec2 {
        self.position() + self.size() * (0.5 as Fl)
    }

    /// Area, in square pixels
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Whether the point lies inside the rectangle
    pub fn contains(&self, px: i32, py: i32) -> bool {
        (self.x..self.right()).contains(&px) && (self.y..self.bottom()).contains(&py)
    }

    /// Whether this rectangle is one the given bounds could have produced:
    /// inside the placement bounds, at least the minimum size, and fully
    /// inside the scene.
    pub fn fits_within(&self, bounds: &SceneBounds) -> bool {
        (0..bounds.max_rectangle_x()).contains(&self.x)
            && (0..bounds.max_rectangle_y()).contains(&self.y)
            && (bounds.min_rectangle_width()..bounds.scene_width() - self.x).contains(&self.width)
            && (bounds.min_rectangle_height()..bounds.scene_height() - self.y)
                .contains(&self.height)
    }
}
