use crate::{factory::GraphicObjectBuilder, rectangle::Rectangle};

/// A flat list of rectangles in draw order, later rectangles are drawn on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Scene {
    rectangles: Vec<Rectangle>,
}

impl Scene {
    /// An empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rectangle on top of everything else
    pub fn push(&mut self, rect: Rectangle) {
        self.rectangles.push(rect);
    }

    /// Ask `builder` for a new rectangle and add it on top
    pub fn spawn(&mut self, builder: &mut impl GraphicObjectBuilder) -> &Rectangle {
        let index = self.rectangles.len();
        self.rectangles.push(builder.create_rectangle());
        &self.rectangles[index]
    }

    /// Add `count` new rectangles from `builder`
    pub fn spawn_many(&mut self, builder: &mut impl GraphicObjectBuilder, count: usize) {
        self.rectangles.reserve(count);
        for _ in 0..count {
            self.rectangles.push(builder.create_rectangle());
        }
    }

    /// Rectangles from bottom to top
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Number of rectangles
    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    /// Whether there are no rectangles
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    /// Remove every rectangle
    pub fn clear(&mut self) {
        self.rectangles.clear();
    }

    /// Index of the top-most rectangle containing the point
    pub fn topmost_at(&self, px: i32, py: i32) -> Option<usize> {
        self.rectangles.iter().rposition(|r| r.contains(px, py))
    }

    /// Remove and return the rectangle at `index`, if there is one
    pub fn remove(&mut self, index: usize) -> Option<Rectangle> {
        (index < self.rectangles.len()).then(|| self.rectangles.remove(index))
    }

    /// Move the rectangle at `index` to the top, keeping the order of the others.
    /// Returns `false` when `index` is out of bounds.
    pub fn bring_to_front(&mut self, index: usize) -> bool {
        if index >= self.rectangles.len() {
            return false;
        }
        self.rectangles[index..].rotate_left(1);
        true
    }
}

impl Extend<Rectangle> for Scene {
    fn extend<T: IntoIterator<Item = Rectangle>>(&mut self, iter: T) {
        self.rectangles.extend(iter);
    }
}

impl FromIterator<Rectangle> for Scene {
    fn from_iter<T: IntoIterator<Item = Rectangle>>(iter: T) -> Self {
        Self {
            rectangles: iter.into_iter().collect(),
        }
    }
}
