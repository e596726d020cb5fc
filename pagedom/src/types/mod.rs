mod color;
mod rect;
mod style;

pub use color::{Color, ColorParseError};
pub use rect::Rect;
pub use style::{Declaration, Display, Style, StyleProperty, Transform};
