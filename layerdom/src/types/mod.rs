mod color;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use enums::{Border, Direction, Position, Size, TextStyle};
pub use style::Style;
