use nalgebra::{Vector2, Vector4};

#[cfg(not(feature = "f64"))]
/// Floating point type handed to renderers
pub type Fl = f32;
#[cfg(feature = "f64")]
/// Floating point type handed to renderers
pub type Fl = f64;

/// Lossy conversion of a number into [Fl]
pub trait IntoFl {
    /// Convert into a float
    fn into_fl(self) -> Fl;
}

macro_rules! impl_into_fl {
    ($($ty:ident),*) => {
        $(
            impl IntoFl for $ty {
                #[inline(always)]
                fn into_fl(self) -> Fl {
                    self as Fl
                }
            }
        )*
    };
}

impl_into_fl!(f32, f64, u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

macro_rules! vec_newtype {
    ( $vec:ident, $inner:ident, $serde:ident = $serde_str:literal; $( $name:ident: $ty_name:ident ),* ) => {
        #[doc = concat!("Thin wrapper around nalgebra's `", stringify!($inner), "` of [Fl]")]
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        #[cfg_attr(
            feature = "serde",
            derive(::serde::Deserialize, ::serde::Serialize),
            serde(from = $serde_str, into = $serde_str)
        )]
        pub struct $vec(pub $inner<Fl>);

        impl $vec {
            /// Build a vector from anything convertible into [Fl]
            #[inline(always)]
            pub fn new( $($name: impl IntoFl,)* ) -> Self {
                Self($inner::new( $($name.into_fl(),)* ))
            }
            $(
                #[inline(always)]
                #[doc = concat!("The ", stringify!($name), " component")]
                pub fn $name(&self) -> Fl {
                    self.0.$name
                }
            )*
        }

        impl<$($ty_name: IntoFl,)*> From<($($ty_name,)*)> for $vec {
            #[inline(always)]
            fn from(($($name,)*): ($($ty_name,)*)) -> Self {
                Self::new($($name,)*)
            }
        }

        impl From<$vec> for $inner<Fl> {
            #[inline(always)]
            fn from(vec: $vec) -> Self {
                vec.0
            }
        }

        impl std::ops::Deref for $vec {
            type Target = $inner<Fl>;

            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        #[cfg(feature = "serde")]
        #[doc(hidden)]
        #[derive(Debug, ::serde::Deserialize, ::serde::Serialize)]
        struct $serde {
            $( $name: Fl, )*
        }

        #[cfg(feature = "serde")]
        impl From<$vec> for $serde {
            fn from(vec: $vec) -> Self {
                Self { $( $name: vec.$name(), )* }
            }
        }

        #[cfg(feature = "serde")]
        impl From<$serde> for $vec {
            fn from(vec: $serde) -> Self {
                Self::new($( vec.$name, )*)
            }
        }
    };
}

vec_newtype!(Vec2, Vector2, SerdeVec2 = "SerdeVec2"; x: T, y: U);
vec_newtype!(Vec4, Vector4, SerdeVec4 = "SerdeVec4"; x: T, y: U, z: V, w: W);

impl std::ops::Add<Vec2> for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Mul<Fl> for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    fn mul(self, rhs: Fl) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Good set of default imports
pub mod prelude {
    pub use super::Fl;
    pub use super::Vec2;
    pub use super::Vec4;
}
