/// Configuration for a [RandomRectangleFactory](crate::factory::RandomRectangleFactory),
/// usually supplied by the application at startup, e.g.
/// `RandomRectangleFactory::from_conf(&Conf { seed: Some(1), ..Default::default() })`.
///
/// A `Conf` is not validated until a factory is built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct Conf {
    /// Width of the scene, in pixels
    pub scene_width: i32,
    /// Height of the scene, in pixels
    pub scene_height: i32,
    /// Smallest width a rectangle may have, must be less than `scene_width`
    pub min_rectangle_width: i32,
    /// Smallest height a rectangle may have, must be less than `scene_height`
    pub min_rectangle_height: i32,
    /// Seed for the random source, `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            scene_width: 800,
            scene_height: 600,
            min_rectangle_width: 10,
            min_rectangle_height: 10,
            seed: None,
        }
    }
}

impl Conf {
    /// Set the scene size
    pub fn with_scene(self, width: i32, height: i32) -> Self {
        Self {
            scene_width: width,
            scene_height: height,
            ..self
        }
    }

    /// Set the minimum rectangle size
    pub fn with_min_rectangle(self, width: i32, height: i32) -> Self {
        Self {
            min_rectangle_width: width,
            min_rectangle_height: height,
            ..self
        }
    }

    /// Use a fixed seed, making every run produce the same rectangles
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
}
