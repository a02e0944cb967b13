use std::ops::Range;

use crate::rom::model::INES_MAGIC;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way decoding a ROM image or its tiles can fail. Nothing is recovered internally;
/// each variant is handed straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Bytes 0..4 are not `NES\x1A`. `found` holds whatever was there (possibly fewer than 4 bytes).
    #[error("magic bytes at 0..4 didn't match; expected {:02X?}, got {:02X?}", INES_MAGIC, .found)]
    BadMagic { found: Vec<u8> },

    #[error("truncated {section}: needs bytes {}..{} but only {available} are available", .range.start, .range.end)]
    Truncated {
        section: Section,
        range: Range<usize>,
        available: usize,
    },

    #[error("a tile is exactly 16 bytes, got {len}")]
    InvalidTileLength { len: usize },

    #[error("graphics region of {len} bytes leaves {} trailing bytes at {}..{len}", .len % 16, .len - .len % 16)]
    MisalignedGraphicsRegion { len: usize },

    #[error("a palette holds exactly 4 colours, got {len}")]
    PaletteSizeMismatch { len: usize },

    /// The header reports zero CHR banks; the cartridge uses CHR RAM instead.
    #[error("ROM has no CHR ROM banks (graphics live in CHR RAM)")]
    EmptyGraphics,
}

/// The part of the image a `Truncated` error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Trainer,
    Program,
    Graphics,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Section::Header => "header",
            Section::Trainer => "trainer",
            Section::Program => "PRG ROM",
            Section::Graphics => "CHR ROM",
        };
        f.write_str(name)
    }
}
