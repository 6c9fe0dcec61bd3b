//! Colour values shared by the theme surface and the widget layer.

mod color;

pub use color::{Color, ColorParseError};
