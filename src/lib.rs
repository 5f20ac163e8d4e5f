#![warn(missing_docs)]
#![doc = include_str!("../readme.md")]

/// RGB colours for outlines and fills
pub mod colour;
/// Configuration parameters for building a factory
pub mod config;
/// Errors reported when a factory is configured badly
pub mod error;
pub mod factory;
/// Float vectors for handing geometry and colours to a renderer
pub mod math;
/// The rectangle value handed out by factories
pub mod rectangle;
/// A flat collection of rectangles
pub mod scene;

pub use config::Conf;
pub use error::{Error, Result};
pub use factory::{GraphicObjectBuilder, RandomRectangleFactory, SceneBounds, SharedFactory};

/// The nalgebra crate backs the vector types in [math]
pub use nalgebra;
/// The rand crate is used to generate random numbers, pass your own generator to
/// [RandomRectangleFactory::with_rng]
pub use rand;

/// Useful structs to have imported
pub mod prelude {
    pub use crate::colour::Colour;
    pub use crate::config::Conf;
    pub use crate::error::{Error, Field};
    pub use crate::factory::{
        GraphicObjectBuilder, RandomRectangleFactory, SceneBounds, SharedFactory,
    };
    pub use crate::math::prelude::*;
    pub use crate::rectangle::Rectangle;
    pub use crate::scene::Scene;
}
