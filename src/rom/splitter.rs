use crate::chr::model::SpriteSheet;
use crate::chr::sheet;
use crate::error::{Error, Result, Section};
use crate::rom::model::*;
use crate::rom::reader;

/// The 512 byte trainer, if the header says there is one.
pub fn trainer_region(header: &INesHeader) -> Option<Region> {
    if header.trainer_exists {
        Some(Region::new(HEADER_SIZE, TRAINER_SIZE))
    } else {
        None
    }
}

/// Locate the PRG ROM and CHR ROM regions of `rom`, skipping the header and trainer.
///
/// Bytes past the end of the CHR region are tolerated and ignored. The returned regions are
/// contiguous: the CHR region starts where the PRG region ends.
pub fn split(rom: &[u8], header: &INesHeader) -> Result<(Region, Region)> {
    let trainer = trainer_region(header);
    let prg = Region::new(header.data_offset(), header.prg_rom_size());
    let chr = Region::new(prg.end(), header.chr_rom_size());

    let sections = [
        (Section::Header, Region::new(0, HEADER_SIZE)),
        (Section::Trainer, trainer.unwrap_or_default()),
        (Section::Program, prg),
        (Section::Graphics, chr),
    ];
    // Report the first section that runs off the end, naming its own range.
    for (section, region) in sections.iter() {
        if region.end() > rom.len() {
            return Err(Error::Truncated {
                section: *section,
                range: region.range(),
                available: rom.len(),
            });
        }
    }

    debug!(
        "split {} byte image: PRG {:?}, CHR {:?}, {} trailing byte(s)",
        rom.len(),
        prg.range(),
        chr.range(),
        rom.len() - chr.end()
    );
    Ok((prg, chr))
}

/// A parsed and split iNES image, borrowing its regions from the caller's buffer.
#[derive(Debug, Clone)]
pub struct Rom<'a> {
    pub header: INesHeader,
    pub trainer: Option<&'a [u8]>,
    pub prg_rom: &'a [u8],
    /// Empty when the header reports zero CHR banks.
    pub chr_rom: &'a [u8],
}

impl<'a> Rom<'a> {
    /// Parse an iNES image from a byte slice.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        let header = reader::parse(data)?;
        let (prg, chr) = split(data, &header)?;

        // split has already checked every region against data.len().
        let trainer = trainer_region(&header).map(|r| &data[r.range()]);
        let prg_rom = &data[prg.range()];
        let chr_rom = &data[chr.range()];

        Ok(Rom {
            header,
            trainer,
            prg_rom,
            chr_rom,
        })
    }

    /// The CHR ROM, or `EmptyGraphics` for boards that use CHR RAM.
    pub fn graphics(&self) -> Result<&'a [u8]> {
        if self.header.has_chr_rom() {
            Ok(self.chr_rom)
        } else {
            Err(Error::EmptyGraphics)
        }
    }

    /// Decode every tile of the CHR ROM. A CHR RAM board yields an empty sheet.
    pub fn sprite_sheet(&self) -> Result<SpriteSheet> {
        sheet::assemble(self.chr_rom)
    }
}
