use crate::error::{Error, Result, Section};
use crate::rom::model::*;
use nom::{
    IResult,
    bits::{
        bits,
        streaming::take as take_bits,
    },
    bytes::complete::{tag, take},
    error::ErrorKind,
    number::complete::be_u8,
    sequence::{
        pair,
        tuple,
    }
};

type BitInput<'a> = (&'a [u8], usize);

bitflags! {
    struct Flags6: u8 {
        const VERTICAL_MIRRORING = 1 as u8;
        const BATTERY_BACKED_RAM = (1 << 1) as u8;
        const TRAINER_EXISTS = (1 << 2) as u8;
        const FOUR_SCREEN_MIRRORING = (1 << 3) as u8;
    }
}

impl Into<Mirroring> for Flags6 {
    fn into(self) -> Mirroring {
        if self.contains(Flags6::FOUR_SCREEN_MIRRORING) {
            Mirroring::FourScreen
        } else if self.contains(Flags6::VERTICAL_MIRRORING) {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }
}

bitflags! {
    struct Flags7: u8 {
        const VS_UNISYSTEM = 1 as u8;
        const PLAYCHOICE_10 = (1 << 1) as u8;
        // Bits 2-3 equal to 0b10 mark a NES 2.0 header. 0b11 and 0b01 are not NES 2.0.
        const NES2_LOW = (1 << 2) as u8;
        const NES2_HIGH = (1 << 3) as u8;
    }
}

impl Flags7 {
    fn format(self) -> Format {
        if (self & (Flags7::NES2_LOW | Flags7::NES2_HIGH)) == Flags7::NES2_HIGH {
            Format::Nes2Partial
        } else {
            Format::INes1
        }
    }
}

impl Into<SystemType> for Flags7 {
    fn into(self) -> SystemType {
        if self.contains(Flags7::VS_UNISYSTEM) {
            SystemType::VsUnisystem
        } else if self.contains(Flags7::PLAYCHOICE_10) {
            SystemType::PlayChoice10
        } else {
            SystemType::Nes
        }
    }
}

/// Decode the 16-byte iNES header at the start of `bytes`. Anything after byte 16 is ignored.
///
/// A CHR bank count of zero is not an error; check [`INesHeader::has_chr_rom`] before asking
/// for tiles.
pub fn parse(bytes: &[u8]) -> Result<INesHeader> {
    let (_, header) = parse_ines_header(bytes).map_err(|err| header_error(bytes, err))?;

    debug!(
        "iNES header: {} PRG bank(s), {} CHR bank(s), mapper {}, {:?}, {:?}",
        header.prg_rom_banks, header.chr_rom_banks, header.mapper, header.nametable_mirror_mode, header.format
    );
    Ok(header)
}

/// The signature check is the first parser, so a `Tag` failure always means bytes 0..4 aren't
/// `NES\x1A` (inputs shorter than 4 bytes included). Anything else ran out of input.
fn header_error(bytes: &[u8], err: nom::Err<(&[u8], ErrorKind)>) -> Error {
    match err {
        nom::Err::Error((_, ErrorKind::Tag)) | nom::Err::Failure((_, ErrorKind::Tag)) => Error::BadMagic {
            found: bytes[..bytes.len().min(INES_MAGIC.len())].to_vec(),
        },
        _ => Error::Truncated {
            section: Section::Header,
            range: 0..HEADER_SIZE,
            available: bytes.len(),
        },
    }
}

fn magic(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(&INES_MAGIC[..])(input)
}

fn bank_count(input: &[u8]) -> IResult<&[u8], u8> {
    be_u8(input)
}

/// Split one byte into its (high, low) nibbles.
fn nibbles(input: &[u8]) -> IResult<&[u8], (u8, u8)> {
    bits(pair(
        take_bits::<_, u8, _, (BitInput, ErrorKind)>(4usize),
        take_bits::<_, u8, _, (BitInput, ErrorKind)>(4usize),
    ))(input)
}

fn flags_6(input: &[u8]) -> IResult<&[u8], (u8, Flags6)> {
    let (i, (mapper_lo, flags)) = nibbles(input)?;
    Ok((i, (mapper_lo, Flags6::from_bits_truncate(flags))))
}

fn flags_7(input: &[u8]) -> IResult<&[u8], (u8, Flags7)> {
    let (i, (mapper_hi, flags)) = nibbles(input)?;
    Ok((i, (mapper_hi, Flags7::from_bits_truncate(flags))))
}

fn reserved(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take(7usize)(input)
}

fn parse_ines_header(input: &[u8]) -> IResult<&[u8], INesHeader> {
    let (i, (sig, prg_rom_banks, chr_rom_banks, (mapper_lo, flags6), (mapper_hi, flags7))) =
        tuple((magic, bank_count, bank_count, flags_6, flags_7))(input)?;
    // Byte 8: NES 2.0 submapper (high nibble) and mapper MSB (low nibble).
    let (i, (_submapper, mapper_msb)) = nibbles(i)?;
    let (i, padding) = reserved(i)?;

    let format = flags7.format();
    // Tools used to sign bytes 7-15 ("DiskDude!"). The mapper still comes from the nibbles.
    if format == Format::INes1 && padding[3..] != [0u8; 4] {
        warn!("iNES header has data in reserved bytes 12-15: {:02X?}", &padding[3..]);
    }
    let mapper = match format {
        Format::Nes2Partial => {
            warn!("NES 2.0 header: bank counts use the iNES 1.0 fields only");
            (mapper_msb as u16) << 8 | (mapper_hi as u16) << 4 | mapper_lo as u16
        }
        Format::INes1 => (mapper_hi as u16) << 4 | mapper_lo as u16,
    };

    let mut magic = [0u8; 4];
    magic.copy_from_slice(sig);

    Ok((i, INesHeader {
        magic,
        prg_rom_banks,
        chr_rom_banks,
        nametable_mirror_mode: flags6.into(),
        battery_backed: flags6.contains(Flags6::BATTERY_BACKED_RAM),
        trainer_exists: flags6.contains(Flags6::TRAINER_EXISTS),
        mapper,
        system_type: flags7.into(),
        format,
    }))
}
