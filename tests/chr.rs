mod common;

use common::*;
use expectest::prelude::*;
use nesgfx::chr::{self, Colour, Palette};
use nesgfx::rom::Rom;
use nesgfx::Error;

#[test]
fn decode_known_tiles() {
    let mut bytes = [0u8; 16];
    bytes[0] = 0xFF;
    let tile = chr::decode(&bytes).unwrap();
    for row in 0..8 {
        for col in 0..8 {
            let expected = if row == 0 { 1 } else { 0 };
            expect!(tile.pixel(row, col)).to(be_eq(expected));
        }
    }

    let tile = chr::decode(&[0u8; 16]).unwrap();
    expect!(tile.indices().all(|p| p == 0)).to(be_true());
}

#[test]
fn tiles_follow_pattern_table_order() {
    init_logging();
    // Tile i has plane 0 row 0 set to i, so its first row spells i in binary.
    let data = build_rom(1, 1, 0, |offset| if offset % 16 == 0 { (offset / 16) as u8 } else { 0 });
    let rom = Rom::from_bytes(&data).unwrap();
    let sheet = rom.sprite_sheet().unwrap();

    expect!(sheet.len()).to(be_eq(CHR_BANK / 16));
    for (i, tile) in sheet.iter().enumerate() {
        let value = tile.rows()[0].iter().fold(0usize, |acc, &p| acc << 1 | p as usize);
        expect!(value).to(be_eq(i % 256));
    }

    for pattern in chr::patterns(rom.chr_rom).unwrap() {
        let i = pattern.index();
        expect!(pattern.buffer()).to(be_eq(&rom.chr_rom[i * 16..i * 16 + 16]));
        expect!(&pattern.decode().unwrap()).to(be_eq(&sheet.tiles()[i]));
    }
}

#[test]
fn misaligned_region_fails_without_partial_output() {
    let region = vec![0xAAu8; 16 * 3 + 7];
    expect!(chr::assemble(&region)).to(be_err().value(Error::MisalignedGraphicsRegion { len: 55 }));
    expect!(chr::patterns(&region).is_err()).to(be_true());
}

#[test]
fn palette_mapping() {
    init_logging();
    let data = build_rom(1, 1, 0, |offset| (offset * 7) as u8);
    let rom = Rom::from_bytes(&data).unwrap();
    let sheet = rom.sprite_sheet().unwrap();
    let palette = Palette::CLASSIC_MARIO;

    let first = chr::apply_palette(&sheet, palette.colours()).unwrap();
    let second = chr::apply_palette(&sheet, palette.colours()).unwrap();
    expect!(first.len()).to(be_eq(sheet.len()));
    expect!(first == second).to(be_true());
    expect!(first[3]).to(be_eq(sheet.tiles()[3].to_colours(&palette)));

    let three = [Colour::new(0, 0, 0); 3];
    let five = [Colour::new(0, 0, 0); 5];
    expect!(chr::apply_palette(&sheet, &three).map(|b| b.len())).to(be_err().value(Error::PaletteSizeMismatch { len: 3 }));
    expect!(chr::apply_palette(&sheet, &five).map(|b| b.len())).to(be_err().value(Error::PaletteSizeMismatch { len: 5 }));
}
