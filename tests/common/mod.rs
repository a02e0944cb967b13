pub const PRG_BANK: usize = 16 * 1024;
pub const CHR_BANK: usize = 8 * 1024;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build an iNES image: header, optional trainer, then PRG filled with 0xEA and CHR filled by
/// `chr_byte(offset)`.
pub fn build_rom(prg_banks: u8, chr_banks: u8, flags6: u8, chr_byte: impl Fn(usize) -> u8) -> Vec<u8> {
    let mut data = vec![0x4E, 0x45, 0x53, 0x1A, prg_banks, chr_banks, flags6, 0x00];
    data.extend_from_slice(&[0u8; 8]);
    if flags6 & 0b0000_0100 != 0 {
        data.extend(std::iter::repeat(0x55).take(512));
    }
    data.extend(std::iter::repeat(0xEA).take(prg_banks as usize * PRG_BANK));
    data.extend((0..chr_banks as usize * CHR_BANK).map(chr_byte));
    data
}
