use std::ops::Range;

/// String "NES^Z" used to recognize .NES files.
pub const INES_MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

pub const HEADER_SIZE: usize = 16;
pub const TRAINER_SIZE: usize = 512;
pub const KILOBYTE_SIZE: usize = 1024;
pub const PRG_ROM_PAGE_SIZE: usize = 16 * KILOBYTE_SIZE;
pub const CHR_ROM_PAGE_SIZE: usize = 8 * KILOBYTE_SIZE;

/// Decoded form of the fixed 16-byte iNES header. Only `reader::parse` builds one, and only
/// from bytes that start with [`INES_MAGIC`].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct INesHeader {
    // The four signature bytes as read.
    pub magic: [u8; 4],
    // Number of 16 KiB PRG (Program) ROM pages.
    pub prg_rom_banks: u8,
    // Number of 8 KiB CHR (Character) ROM pages. Zero means the board uses CHR RAM.
    pub chr_rom_banks: u8,
    // The nametable mirroring mode.
    pub nametable_mirror_mode: Mirroring,
    // Battery-backed PRG RAM or other persistent memory.
    pub battery_backed: bool,
    // A 512 byte trainer sits between the header and PRG ROM.
    pub trainer_exists: bool,
    /// Mapper number. 0..=255 for iNES 1.0; NES 2.0 headers contribute 4 more bits from byte 8.
    pub mapper: u16,
    // The system type.
    pub system_type: SystemType,
    // The header flavour.
    pub format: Format,
}

impl INesHeader {
    pub fn has_valid_magic(&self) -> bool {
        self.magic == INES_MAGIC
    }

    pub fn prg_rom_size(&self) -> usize {
        self.prg_rom_banks as usize * PRG_ROM_PAGE_SIZE
    }

    pub fn chr_rom_size(&self) -> usize {
        self.chr_rom_banks as usize * CHR_ROM_PAGE_SIZE
    }

    /// False when the cartridge relies on writable CHR RAM; there are no tiles to extract.
    pub fn has_chr_rom(&self) -> bool {
        self.chr_rom_banks != 0
    }

    /// Offset of the first PRG ROM byte: the header plus the trainer, if any.
    pub fn data_offset(&self) -> usize {
        if self.trainer_exists {
            HEADER_SIZE + TRAINER_SIZE
        } else {
            HEADER_SIZE
        }
    }

    /// The smallest image length that holds every region this header describes.
    pub fn expected_len(&self) -> usize {
        self.data_offset() + self.prg_rom_size() + self.chr_rom_size()
    }
}

/// Definition of possible nametable mirror modes.
///
/// Reference: https://wiki.nesdev.com/w/index.php/Mirroring#Nametable_Mirroring
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Definition of possible system types.
///
/// Reference: https://wiki.nesdev.com/w/index.php/INES#Flags_7
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SystemType {
    Nes,
    VsUnisystem,
    PlayChoice10,
}

/// Header flavour, from bits 2-3 of flags 7.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Format {
    INes1,
    /// NES 2.0 was detected. The extended mapper bits are decoded, but PRG/CHR sizes are still
    /// taken from the iNES 1.0 bytes alone, so images using the size MSB nibbles will be
    /// reported too small.
    Nes2Partial,
}

/// A non-owning view (offset + length) into a ROM image.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct Region {
    pub offset: usize,
    pub len: usize,
}

impl Region {
    pub fn new(offset: usize, len: usize) -> Region {
        Region { offset, len }
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow this region out of `rom`. Returns `None` if the region doesn't fit.
    pub fn slice<'a>(&self, rom: &'a [u8]) -> Option<&'a [u8]> {
        rom.get(self.range())
    }
}
