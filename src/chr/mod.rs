pub mod decoder;
pub mod model;
pub mod sheet;

pub use self::decoder::decode;
pub use self::model::{Colour, Palette, PixelBuffer, SpriteSheet, Tile};
pub use self::sheet::{apply_palette, assemble, patterns, Pattern, Patterns};
