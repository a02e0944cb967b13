pub mod model;
pub mod reader;
pub mod splitter;

pub use self::model::{Format, INesHeader, Mirroring, Region, SystemType};
pub use self::reader::parse;
pub use self::splitter::{split, trainer_region, Rom};
