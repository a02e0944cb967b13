use std::iter::FusedIterator;
use std::ops::Range;
use std::slice::ChunksExact;

use crate::chr::decoder;
use crate::chr::model::*;
use crate::error::{Error, Result};

/// One still-encoded tile of a CHR region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern<'a> {
    index: usize,
    bytes: &'a [u8],
}

impl<'a> Pattern<'a> {
    /// Pattern-table index: the byte offset in the region divided by 16.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The 16 source bytes this tile decodes from.
    pub fn buffer(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn source_range(&self) -> Range<usize> {
        self.index * TILE_SIZE..(self.index + 1) * TILE_SIZE
    }

    pub fn decode(&self) -> Result<Tile> {
        decoder::decode(self.bytes)
    }
}

/// Iterates the tiles of a CHR region in pattern-table order without decoding them.
#[derive(Clone, Debug)]
pub struct Patterns<'a> {
    chunks: ChunksExact<'a, u8>,
    next_index: usize,
}

impl<'a> Iterator for Patterns<'a> {
    type Item = Pattern<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.chunks.next()?;
        let index = self.next_index;
        self.next_index += 1;
        Some(Pattern { index, bytes })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a> ExactSizeIterator for Patterns<'a> {}

impl<'a> FusedIterator for Patterns<'a> {}

/// Lazily walk `region`, which must be a whole number of 16-byte tiles.
pub fn patterns(region: &[u8]) -> Result<Patterns<'_>> {
    if region.len() % TILE_SIZE != 0 {
        return Err(Error::MisalignedGraphicsRegion { len: region.len() });
    }
    Ok(Patterns {
        chunks: region.chunks_exact(TILE_SIZE),
        next_index: 0,
    })
}

/// Decode every tile of a CHR region, in ascending byte-offset order.
///
/// An empty region (a CHR RAM board) gives an empty sheet. A length that isn't a multiple of 16
/// fails before anything is decoded.
pub fn assemble(region: &[u8]) -> Result<SpriteSheet> {
    let tiles = patterns(region)?
        .map(|pattern| {
            trace!("decoding tile {} from {:?}", pattern.index(), pattern.source_range());
            pattern.decode()
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("assembled {} tile(s) from {} byte(s) of CHR", tiles.len(), region.len());
    Ok(SpriteSheet::new(tiles))
}

/// Map every tile of `sheet` through `palette`, which must hold exactly four colours. The sheet
/// is left untouched so it can be re-paletted later.
pub fn apply_palette<C: Copy>(sheet: &SpriteSheet, palette: &[C]) -> Result<Vec<PixelBuffer<C>>> {
    let palette = Palette::from_slice(palette)?;
    Ok(sheet.iter().map(|tile| tile.to_colours(&palette)).collect())
}
