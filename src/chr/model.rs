use std::ops::Index;

use crate::error::{Error, Result};

/// Bytes per encoded 8x8 tile: two 8-byte bit-planes.
pub const TILE_SIZE: usize = 16;
/// Tiles are square; this is both width and height in pixels.
pub const TILE_WIDTH_HEIGHT: usize = 8;
/// Number of entries a palette must have, one per 2-bit pixel value.
pub const PALETTE_SIZE: usize = 4;

/// An 8x8 tile, one row per element, each value a palette index in 0..=3.
pub type PixelRows<T> = [[T; TILE_WIDTH_HEIGHT]; TILE_WIDTH_HEIGHT];

/// A decoded tile mapped through a palette.
pub type PixelBuffer<C> = PixelRows<C>;

/// A decoded 8x8 tile of 2-bit palette indices.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash)]
pub struct Tile {
    pixels: PixelRows<u8>,
}

impl Tile {
    /// Every value must already be in 0..=3; the decoder is the only producer.
    pub(crate) fn from_rows(pixels: PixelRows<u8>) -> Tile {
        Tile { pixels }
    }

    /// Panics if `row` or `col` is 8 or more; see [`Tile::get`].
    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        self.pixels[row][col]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.pixels.get(row)?.get(col).copied()
    }

    pub fn rows(&self) -> &PixelRows<u8> {
        &self.pixels
    }

    /// Pixel indices in row-major order.
    pub fn indices<'a>(&'a self) -> impl Iterator<Item = u8> + 'a {
        self.pixels.iter().flat_map(|row| row.iter().copied())
    }

    pub fn to_colours<C: Copy>(&self, palette: &Palette<C>) -> PixelBuffer<C> {
        let mut out = [[palette.background(); TILE_WIDTH_HEIGHT]; TILE_WIDTH_HEIGHT];
        for (dst, src) in out.iter_mut().zip(self.pixels.iter()) {
            for (colour, &index) in dst.iter_mut().zip(src.iter()) {
                *colour = palette[index];
            }
        }
        out
    }
}

/// An ordered run of tiles. Tile `i` came from bytes `i*16..i*16+16` of the CHR region, which is
/// the same numbering the PPU uses for its pattern tables.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct SpriteSheet {
    tiles: Vec<Tile>,
}

impl SpriteSheet {
    pub(crate) fn new(tiles: Vec<Tile>) -> SpriteSheet {
        SpriteSheet { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a SpriteSheet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn raw_colour(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Colour {
    fn from(raw_rgb: [u8; 3]) -> Self {
        Self::new(raw_rgb[0], raw_rgb[1], raw_rgb[2])
    }
}

impl From<Colour> for [u8; 3] {
    fn from(colour: Colour) -> Self {
        colour.raw_colour()
    }
}

/// Exactly four colours, indexed by pixel value. Index 0 is the background by convention only;
/// nothing here treats it as transparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette<C> {
    colours: [C; PALETTE_SIZE],
}

impl Palette<Colour> {
    pub const CLASSIC_MARIO: Palette<Colour> = Palette::new(
        Colour::new(0, 0, 0),
        [
            Colour::new(189, 8, 8),
            Colour::new(217, 167, 57),
            Colour::new(126, 153, 83),
        ],
    );
}

impl<C: Copy> Palette<C> {
    pub const fn new(background: C, colours: [C; 3]) -> Self {
        Self {
            colours: [background, colours[0], colours[1], colours[2]],
        }
    }

    /// Build a palette from caller-supplied colours, which must number exactly four.
    pub fn from_slice(colours: &[C]) -> Result<Self> {
        match *colours {
            [background, a, b, c] => Ok(Self::new(background, [a, b, c])),
            _ => Err(Error::PaletteSizeMismatch { len: colours.len() }),
        }
    }

    pub fn background(&self) -> C {
        self.colours[0]
    }

    pub fn colours(&self) -> &[C; PALETTE_SIZE] {
        &self.colours
    }
}

impl<C> Index<u8> for Palette<C> {
    type Output = C;

    /// Only the low two bits of `index` are used.
    fn index(&self, index: u8) -> &C {
        &self.colours[(index & 0b11) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectest::prelude::*;

    #[test]
    fn palette_from_slice() {
        let palette = Palette::from_slice(&[10u32, 11, 12, 13]).unwrap();
        expect!(palette.background()).to(be_eq(10));
        expect!(palette[3]).to(be_eq(13));
        expect!(palette[7]).to(be_eq(13));

        expect!(Palette::from_slice(&[1u8, 2, 3])).to(be_err().value(Error::PaletteSizeMismatch { len: 3 }));
        expect!(Palette::from_slice(&[1u8, 2, 3, 4, 5])).to(be_err().value(Error::PaletteSizeMismatch { len: 5 }));
        expect!(Palette::<u8>::from_slice(&[])).to(be_err().value(Error::PaletteSizeMismatch { len: 0 }));
    }

    #[test]
    fn classic_mario() {
        let palette = Palette::CLASSIC_MARIO;
        expect!(palette.background().raw_colour()).to(be_eq([0, 0, 0]));
        expect!(palette[1]).to(be_eq(Colour::new(189, 8, 8)));
    }

    #[test]
    fn tile_to_colours() {
        let mut rows = [[0u8; 8]; 8];
        rows[2][5] = 3;
        rows[7][0] = 1;
        let tile = Tile::from_rows(rows);
        let palette = Palette::new('.', ['a', 'b', 'c']);

        let out = tile.to_colours(&palette);
        expect!(out[2][5]).to(be_eq('c'));
        expect!(out[7][0]).to(be_eq('a'));
        expect!(out[0][0]).to(be_eq('.'));
        expect!(tile.indices().filter(|&p| p != 0).count()).to(be_eq(2));
    }

    #[test]
    fn tile_get_out_of_range() {
        let mut rows = [[0u8; 8]; 8];
        rows[7][7] = 2;
        let tile = Tile::from_rows(rows);

        expect!(tile.get(7, 7)).to(be_some().value(2));
        expect!(tile.get(8, 0)).to(be_none());
        expect!(tile.get(0, 8)).to(be_none());
    }

    #[test]
    fn colour_conversions() {
        let colour = Colour::from([1, 2, 3]);
        let raw: [u8; 3] = colour.into();
        expect!(raw).to(be_eq([1, 2, 3]));
    }
}
