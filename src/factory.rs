//! Building rectangles with random position, size and colour.
//!
//! A [RandomRectangleFactory] is created once from the scene size and the
//! minimum rectangle size. Construction validates those numbers and derives the
//! placement bounds, after which [RandomRectangleFactory::create_rectangle]
//! cannot fail.

use parking_lot::Mutex;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    colour::Colour,
    config::Conf,
    error::{Error, Field, Result},
    rectangle::Rectangle,
};

/// Validated scene and minimum rectangle size, with the placement bounds derived from them.
///
/// Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneBounds {
    scene_width: i32,
    scene_height: i32,
    min_rectangle_width: i32,
    min_rectangle_height: i32,
    max_rectangle_x: i32,
    max_rectangle_y: i32,
}

impl SceneBounds {
    /// Validate the configuration.
    ///
    /// Fails with [Error::OutOfRange] for the first negative argument, then with
    /// [Error::InvalidConfiguration] if a minimum dimension is not strictly less
    /// than the matching scene dimension.
    pub fn new(
        scene_width: i32,
        scene_height: i32,
        min_rectangle_width: i32,
        min_rectangle_height: i32,
    ) -> Result<Self> {
        let fields = [
            (Field::SceneWidth, scene_width),
            (Field::SceneHeight, scene_height),
            (Field::MinRectangleWidth, min_rectangle_width),
            (Field::MinRectangleHeight, min_rectangle_height),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, value)| *value < 0) {
            return Err(rejected(Error::OutOfRange { field, value }));
        }
        if min_rectangle_width >= scene_width {
            return Err(rejected(Error::InvalidConfiguration {
                field: Field::MinRectangleWidth,
                min: min_rectangle_width,
                scene: scene_width,
            }));
        }
        if min_rectangle_height >= scene_height {
            return Err(rejected(Error::InvalidConfiguration {
                field: Field::MinRectangleHeight,
                min: min_rectangle_height,
                scene: scene_height,
            }));
        }

        Ok(Self {
            scene_width,
            scene_height,
            min_rectangle_width,
            min_rectangle_height,
            max_rectangle_x: scene_width - min_rectangle_width,
            max_rectangle_y: scene_height - min_rectangle_height,
        })
    }

    /// Validate the dimensions held by a [Conf], ignoring its seed
    pub fn from_conf(conf: &Conf) -> Result<Self> {
        Self::new(
            conf.scene_width,
            conf.scene_height,
            conf.min_rectangle_width,
            conf.min_rectangle_height,
        )
    }

    /// Width of the scene
    pub fn scene_width(&self) -> i32 {
        self.scene_width
    }

    /// Height of the scene
    pub fn scene_height(&self) -> i32 {
        self.scene_height
    }

    /// Smallest width a rectangle may have
    pub fn min_rectangle_width(&self) -> i32 {
        self.min_rectangle_width
    }

    /// Smallest height a rectangle may have
    pub fn min_rectangle_height(&self) -> i32 {
        self.min_rectangle_height
    }

    /// Exclusive upper bound for a rectangle's x coordinate, always at least 1
    pub fn max_rectangle_x(&self) -> i32 {
        self.max_rectangle_x
    }

    /// Exclusive upper bound for a rectangle's y coordinate, always at least 1
    pub fn max_rectangle_y(&self) -> i32 {
        self.max_rectangle_y
    }
}

fn rejected(err: Error) -> Error {
    log::debug!("rejecting rectangle factory configuration: {err}");
    err
}

/// Something that hands out new rectangles on demand
pub trait GraphicObjectBuilder {
    /// Create a new rectangle, owned by the caller
    fn create_rectangle(&mut self) -> Rectangle;
}

/// Creates rectangles with random position, size and colour inside a scene.
///
/// Every rectangle satisfies, with `b` the factory's [SceneBounds]:
/// - `0 <= x < b.max_rectangle_x()` and `0 <= y < b.max_rectangle_y()`
/// - `b.min_rectangle_width() <= width < b.scene_width() - x`
/// - `b.min_rectangle_height() <= height < b.scene_height() - y`
/// - every stroke and fill channel in `[0, 255)`
///
/// The factory owns its random source, so it is meant to stay on one thread.
/// Use [SharedFactory] to call it from several.
#[derive(Debug, Clone)]
pub struct RandomRectangleFactory<R = StdRng> {
    bounds: SceneBounds,
    rng: R,
}

impl RandomRectangleFactory<StdRng> {
    /// Validate the configuration and seed the factory from the operating system
    pub fn new(
        scene_width: i32,
        scene_height: i32,
        min_rectangle_width: i32,
        min_rectangle_height: i32,
    ) -> Result<Self> {
        let bounds = SceneBounds::new(
            scene_width,
            scene_height,
            min_rectangle_width,
            min_rectangle_height,
        )?;
        Ok(Self::with_rng(bounds, StdRng::from_entropy()))
    }

    /// A factory whose output depends only on `bounds` and `seed`
    pub fn seeded(bounds: SceneBounds, seed: u64) -> Self {
        log::debug!("seeding rectangle factory with {seed}");
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    /// Build from a [Conf], using its seed when it has one
    pub fn from_conf(conf: &Conf) -> Result<Self> {
        let bounds = SceneBounds::from_conf(conf)?;
        Ok(match conf.seed {
            Some(seed) => Self::seeded(bounds, seed),
            None => Self::with_rng(bounds, StdRng::from_entropy()),
        })
    }
}

impl<R: Rng> RandomRectangleFactory<R> {
    /// Use an already validated configuration with any random source
    pub fn with_rng(bounds: SceneBounds, rng: R) -> Self {
        log::debug!(
            "rectangle factory ready: scene {}x{}, minimum {}x{}, top-left below ({}, {})",
            bounds.scene_width,
            bounds.scene_height,
            bounds.min_rectangle_width,
            bounds.min_rectangle_height,
            bounds.max_rectangle_x,
            bounds.max_rectangle_y,
        );
        Self { bounds, rng }
    }

    /// The configuration this factory was built with
    pub fn bounds(&self) -> &SceneBounds {
        &self.bounds
    }

    /// Create one rectangle.
    ///
    /// Position is drawn first, then a size that keeps the rectangle inside the
    /// scene, then the stroke and fill colours.
    pub fn create_rectangle(&mut self) -> Rectangle {
        let b = &self.bounds;
        let rng = &mut self.rng;

        // Ranges are never empty: max_rectangle_x >= 1 and
        // scene_width - x > min_rectangle_width for any x < max_rectangle_x.
        let x = rng.gen_range(0..b.max_rectangle_x);
        let y = rng.gen_range(0..b.max_rectangle_y);
        let width = rng.gen_range(b.min_rectangle_width..b.scene_width - x);
        let height = rng.gen_range(b.min_rectangle_height..b.scene_height - y);
        let stroke = Colour::random(rng);
        let fill = Colour::random(rng);

        let rect = Rectangle::new(x, y, width, height, stroke, fill);
        log::trace!("created {rect:?}");
        rect
    }

    /// Lazily create `count` rectangles
    pub fn create_rectangles(&mut self, count: usize) -> impl Iterator<Item = Rectangle> + '_ {
        (0..count).map(move |_| self.create_rectangle())
    }

    /// Put the factory behind a lock so it can be shared between threads
    pub fn into_shared(self) -> SharedFactory<R> {
        SharedFactory {
            inner: Mutex::new(self),
        }
    }
}

impl<R: Rng> GraphicObjectBuilder for RandomRectangleFactory<R> {
    fn create_rectangle(&mut self) -> Rectangle {
        RandomRectangleFactory::create_rectangle(self)
    }
}

/// A [RandomRectangleFactory] that can be called from several threads, put it in an
/// `Arc` to share it.
#[derive(Debug)]
pub struct SharedFactory<R = StdRng> {
    inner: Mutex<RandomRectangleFactory<R>>,
}

impl<R: Rng> SharedFactory<R> {
    /// Create one rectangle, waiting for any other caller to finish first
    pub fn create_rectangle(&self) -> Rectangle {
        self.inner.lock().create_rectangle()
    }

    /// The configuration of the wrapped factory
    pub fn bounds(&self) -> SceneBounds {
        *self.inner.lock().bounds()
    }

    /// Take the factory back out
    pub fn into_inner(self) -> RandomRectangleFactory<R> {
        self.inner.into_inner()
    }
}

impl<R: Rng> GraphicObjectBuilder for &SharedFactory<R> {
    fn create_rectangle(&mut self) -> Rectangle {
        SharedFactory::create_rectangle(*self)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use super::*;

    #[test]
    fn derives_placement_bounds() {
        let b = SceneBounds::new(100, 50, 10, 5).unwrap();
        assert_eq!(b.max_rectangle_x(), 90);
        assert_eq!(b.max_rectangle_y(), 45);
        assert_eq!((b.scene_width(), b.scene_height()), (100, 50));
        assert_eq!((b.min_rectangle_width(), b.min_rectangle_height()), (10, 5));
    }

    #[test]
    fn zero_minimum_is_allowed() {
        let b = SceneBounds::new(1, 1, 0, 0).unwrap();
        assert_eq!((b.max_rectangle_x(), b.max_rectangle_y()), (1, 1));
    }

    #[test]
    fn reports_first_negative_field() {
        let cases = [
            ((-1, 5, 1, 1), Field::SceneWidth, -1),
            ((5, -2, 1, 1), Field::SceneHeight, -2),
            ((5, 5, -3, 1), Field::MinRectangleWidth, -3),
            ((5, 5, 1, -4), Field::MinRectangleHeight, -4),
            ((-1, -1, -1, -1), Field::SceneWidth, -1),
            ((5, 5, -1, -1), Field::MinRectangleWidth, -1),
        ];
        for ((sw, sh, mw, mh), field, value) in cases {
            assert_eq!(
                SceneBounds::new(sw, sh, mw, mh),
                Err(Error::OutOfRange { field, value }),
                "{sw} {sh} {mw} {mh}"
            );
        }
    }

    #[test]
    fn negatives_are_checked_before_relations() {
        // min width >= scene width too, but the negative height wins
        assert_eq!(
            SceneBounds::new(5, -5, 9, 1).unwrap_err().field(),
            Field::SceneHeight
        );
    }

    #[test]
    fn minimum_must_leave_room() {
        assert_eq!(
            SceneBounds::new(5, 5, 5, 1),
            Err(Error::InvalidConfiguration {
                field: Field::MinRectangleWidth,
                min: 5,
                scene: 5,
            })
        );
        assert_eq!(
            SceneBounds::new(5, 5, 1, 7),
            Err(Error::InvalidConfiguration {
                field: Field::MinRectangleHeight,
                min: 7,
                scene: 5,
            })
        );
        // width is checked first
        assert_eq!(
            SceneBounds::new(5, 5, 6, 6).unwrap_err().field(),
            Field::MinRectangleWidth
        );
        // an empty scene leaves no room for anything
        assert!(matches!(
            SceneBounds::new(0, 0, 0, 0),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn size_ranges_are_never_empty() {
        for scene in 1..40 {
            for min in 0..scene {
                let b = SceneBounds::new(scene, scene, min, min).unwrap();
                assert!(b.max_rectangle_x() >= 1);
                for x in 0..b.max_rectangle_x() {
                    assert!(b.scene_width() - x > b.min_rectangle_width());
                }
            }
        }
    }

    #[test]
    fn same_seed_same_rectangles() {
        let b = SceneBounds::new(640, 480, 4, 4).unwrap();
        let a: Vec<_> = RandomRectangleFactory::seeded(b, 42)
            .create_rectangles(50)
            .collect();
        let c: Vec<_> = RandomRectangleFactory::seeded(b, 42)
            .create_rectangles(50)
            .collect();
        assert_eq!(a, c);
    }

    #[test]
    fn successive_draws_differ() {
        let mut factory = RandomRectangleFactory::new(640, 480, 4, 4).unwrap();
        let seen: HashSet<_> = factory.create_rectangles(100).collect();
        assert!(seen.len() > 90, "only {} distinct rectangles", seen.len());
    }

    #[test]
    fn bounds_are_not_changed_by_drawing() {
        let b = SceneBounds::new(30, 20, 3, 2).unwrap();
        let mut factory = RandomRectangleFactory::seeded(b, 1);
        factory.create_rectangles(100).for_each(drop);
        assert_eq!(*factory.bounds(), b);
    }

    #[test]
    fn from_conf_uses_seed() {
        let conf = Conf::default().with_scene(200, 100).with_seed(9);
        let mut a = RandomRectangleFactory::from_conf(&conf).unwrap();
        let mut b = RandomRectangleFactory::from_conf(&conf).unwrap();
        assert_eq!(a.create_rectangle(), b.create_rectangle());
        assert_eq!(a.bounds().max_rectangle_x(), 190);

        let bad = conf.with_min_rectangle(10, 100);
        assert_eq!(
            RandomRectangleFactory::from_conf(&bad).unwrap_err().field(),
            Field::MinRectangleHeight
        );
    }

    #[test]
    fn usable_through_trait_object() {
        let b = SceneBounds::new(10, 10, 1, 1).unwrap();
        let mut builder: Box<dyn GraphicObjectBuilder> =
            Box::new(RandomRectangleFactory::seeded(b, 5));
        assert!(builder.create_rectangle().fits_within(&b));
    }

    #[test]
    fn shared_between_threads() {
        let b = SceneBounds::new(320, 240, 8, 8).unwrap();
        let shared = Arc::new(RandomRectangleFactory::seeded(b, 3).into_shared());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    (0..250)
                        .map(|_| shared.create_rectangle())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            for rect in handle.join().unwrap() {
                assert!(rect.fits_within(&b), "{rect:?}");
            }
        }
        assert_eq!(shared.bounds(), b);
    }
}
