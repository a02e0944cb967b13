use crate::chr::model::*;
use crate::error::{Error, Result};

lazy_static! {
    /// Every possible plane byte spread into its 8 column bits, column 0 taken from bit 7.
    static ref PLANE_COLUMNS: [[u8; TILE_WIDTH_HEIGHT]; 256] = {
        let mut table = [[0u8; TILE_WIDTH_HEIGHT]; 256];
        for (byte, columns) in table.iter_mut().enumerate() {
            for (col, bit) in columns.iter_mut().enumerate() {
                *bit = ((byte >> (7 - col)) & 1) as u8;
            }
        }
        table
    };
}

/// Decode one 16-byte tile in the NES 2bpp planar layout.
///
/// Bytes 0..8 are plane 0 and bytes 8..16 are plane 1, one byte per row. For row `r` and column
/// `c` the pixel is `bit(7 - c) of plane1[r]` shifted left once, OR'd with `bit(7 - c) of
/// plane0[r]`, giving a value in 0..=3. Any length other than 16 is `InvalidTileLength`.
pub fn decode(tile_bytes: &[u8]) -> Result<Tile> {
    if tile_bytes.len() != TILE_SIZE {
        return Err(Error::InvalidTileLength { len: tile_bytes.len() });
    }

    let (plane0, plane1) = tile_bytes.split_at(TILE_WIDTH_HEIGHT);
    let mut pixels = [[0u8; TILE_WIDTH_HEIGHT]; TILE_WIDTH_HEIGHT];
    for (row, (&lo, &hi)) in pixels.iter_mut().zip(plane0.iter().zip(plane1.iter())) {
        let lo = &PLANE_COLUMNS[lo as usize];
        let hi = &PLANE_COLUMNS[hi as usize];
        for (col, pixel) in row.iter_mut().enumerate() {
            *pixel = hi[col] << 1 | lo[col];
        }
    }

    Ok(Tile::from_rows(pixels))
}
