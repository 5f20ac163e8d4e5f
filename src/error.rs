use std::fmt;

/// One of the four numbers a factory is configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Width of the scene
    SceneWidth,
    /// Height of the scene
    SceneHeight,
    /// Smallest width a generated rectangle may have
    MinRectangleWidth,
    /// Smallest height a generated rectangle may have
    MinRectangleHeight,
}

impl Field {
    /// Name of the field as it appears in configuration
    pub fn name(self) -> &'static str {
        match self {
            Field::SceneWidth => "scene_width",
            Field::SceneHeight => "scene_height",
            Field::MinRectangleWidth => "min_rectangle_width",
            Field::MinRectangleHeight => "min_rectangle_height",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a factory could not be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A dimension was negative
    #[error("{field} must not be negative, got {value}")]
    OutOfRange {
        /// The negative field
        field: Field,
        /// The value it was given
        value: i32,
    },

    /// A minimum rectangle dimension does not leave room inside the scene
    #[error("{field} ({min}) must be less than the scene's ({scene})")]
    InvalidConfiguration {
        /// The minimum dimension that is too large
        field: Field,
        /// The minimum that was requested
        min: i32,
        /// The matching scene dimension
        scene: i32,
    },
}

impl Error {
    /// The field that caused the failure
    pub fn field(&self) -> Field {
        match *self {
            Error::OutOfRange { field, .. } | Error::InvalidConfiguration { field, .. } => field,
        }
    }
}

/// Result type used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = Error::OutOfRange {
            field: Field::SceneWidth,
            value: -1,
        };
        assert_eq!(err.to_string(), "scene_width must not be negative, got -1");
        assert_eq!(err.field(), Field::SceneWidth);

        let err = Error::InvalidConfiguration {
            field: Field::MinRectangleHeight,
            min: 5,
            scene: 5,
        };
        assert_eq!(
            err.to_string(),
            "min_rectangle_height (5) must be less than the scene's (5)"
        );
        assert_eq!(err.field(), Field::MinRectangleHeight);
    }
}
