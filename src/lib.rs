//! Decode iNES cartridge images and pull the 8x8 CHR ROM tiles out of them.
//!
//! [`rom`] validates the 16-byte header and locates the PRG and CHR regions; [`chr`] turns the
//! CHR region into palette-index tiles and, optionally, colours.
//!
//! File format reference: https://wiki.nesdev.com/w/index.php/INES

#[macro_use]
extern crate bitflags;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

pub mod chr;
pub mod error;
pub mod rom;

pub use crate::error::{Error, Result, Section};
