//! NES cartridge loading from iNES format (.nes files).
//!
//! Implements the [iNES](https://www.nesdev.org/wiki/INES) container: 4-byte
//! magic, PRG size in 16 KiB units, CHR size in 8 KiB units, two flag bytes
//! carrying the mapper number and board wiring, RAM bank count, TV mode, six
//! reserved bytes, then the PRG and CHR images. Bank-switching mappers are
//! out of scope; PRG is served as a plain NROM-style pass-through.

use std::fs;

/// iNES magic: "NES\x1A".
pub const MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

const PRG_BANK_SIZE: usize = 16 * 1024;
const CHR_BANK_SIZE: usize = 8 * 1024;

/// Raw iNES header fields past the magic.
#[derive(Clone, Copy, Debug)]
pub struct RomHeader {
    pub prg_banks: u8,
    pub chr_banks: u8,
    pub flags: u8,
    pub flags2: u8,
    pub ram_banks: u8,
    pub tv_mode: u8,
}

impl RomHeader {
    /// Mapper number: high nibble from flags2, low nibble from flags.
    pub fn mapper(&self) -> u8 {
        (self.flags2 & 0xF0) | (self.flags >> 4)
    }

    /// Flags bit 0: nametable mirroring, 1 = vertical.
    pub fn vertical_mirroring(&self) -> bool {
        self.flags & 0x01 != 0
    }

    pub fn battery(&self) -> bool {
        self.flags & 0x02 != 0
    }

    pub fn four_screen(&self) -> bool {
        self.flags & 0x04 != 0
    }

    pub fn trainer(&self) -> bool {
        self.flags & 0x08 != 0
    }

    pub fn vs_system(&self) -> bool {
        self.flags2 & 0x01 != 0
    }

    /// TV mode byte: 1 = PAL.
    pub fn pal(&self) -> bool {
        self.tv_mode == 1
    }
}

/// A parsed cartridge: header plus the PRG/CHR images.
pub struct Cartridge {
    pub header: RomHeader,
    pub prg: Vec<u8>,
    pub chr: Vec<u8>,
}

impl Cartridge {
    /// Parse an iNES image. `None` on bad magic or truncated banks; no
    /// partial state survives a failed parse.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < 16 || data[..4] != MAGIC {
            return None;
        }

        let header = RomHeader {
            prg_banks: data[4],
            chr_banks: data[5],
            flags: data[6],
            flags2: data[7],
            ram_banks: data[8],
            tv_mode: data[9],
        };
        // data[10..16] is reserved padding, skipped

        let prg_len = header.prg_banks as usize * PRG_BANK_SIZE;
        let chr_len = header.chr_banks as usize * CHR_BANK_SIZE;

        let prg = data.get(16..16 + prg_len)?.to_vec();
        let chr = data.get(16 + prg_len..16 + prg_len + chr_len)?.to_vec();

        Some(Self { header, prg, chr })
    }

    /// Load and parse a .nes file.
    pub fn load(path: &str) -> Option<Self> {
        let data = fs::read(path).ok()?;
        Self::parse(&data)
    }

    /// CPU reads in $8000-$FFFF; a single 16 KiB bank mirrors across the
    /// 32 KiB window (NROM-128 behavior).
    pub fn prg_read(&self, addr: u16) -> u8 {
        if self.prg.is_empty() {
            return 0;
        }
        self.prg[(addr & 0x7FFF) as usize % self.prg.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ines_image(prg_banks: u8, chr_banks: u8, flags: u8, flags2: u8) -> Vec<u8> {
        let mut data = MAGIC.to_vec();
        data.extend_from_slice(&[prg_banks, chr_banks, flags, flags2, 0, 0]);
        data.extend_from_slice(&[0; 6]);
        data.extend(vec![0; prg_banks as usize * 16 * 1024]);
        data.extend(vec![0; chr_banks as usize * 8 * 1024]);
        data
    }

    #[test]
    fn parse_rejects_bad_magic() {
        let mut data = ines_image(1, 0, 0, 0);
        data[0] = b'X';
        assert!(Cartridge::parse(&data).is_none());
    }

    #[test]
    fn parse_rejects_truncated_prg() {
        let mut data = ines_image(2, 0, 0, 0);
        data.truncate(16 + 16 * 1024); // header claims two banks
        assert!(Cartridge::parse(&data).is_none());
    }

    #[test]
    fn parse_reads_header_fields() {
        // battery + trainer set, mapper low nibble 4; vs-system, mapper high nibble 3
        let data = ines_image(2, 1, 0x4A, 0x31);
        let cart = Cartridge::parse(&data).unwrap();

        assert_eq!(cart.header.prg_banks, 2);
        assert_eq!(cart.header.chr_banks, 1);
        assert_eq!(cart.header.mapper(), 0x34);
        assert!(cart.header.battery());
        assert!(cart.header.trainer());
        assert!(cart.header.vs_system());
        assert!(!cart.header.vertical_mirroring());
        assert!(!cart.header.four_screen());
        assert!(!cart.header.pal());
        assert_eq!(cart.prg.len(), 32 * 1024);
        assert_eq!(cart.chr.len(), 8 * 1024);
    }

    #[test]
    fn pal_mode_from_tv_byte() {
        let mut data = ines_image(1, 0, 0, 0);
        data[9] = 1;
        let cart = Cartridge::parse(&data).unwrap();
        assert!(cart.header.pal());
    }

    #[test]
    fn single_bank_prg_mirrors_across_window() {
        let mut data = ines_image(1, 0, 0, 0);
        data[16] = 0xAB; // first PRG byte
        let cart = Cartridge::parse(&data).unwrap();

        assert_eq!(cart.prg_read(0x8000), 0xAB);
        assert_eq!(cart.prg_read(0xC000), 0xAB);
    }

    #[test]
    fn two_banks_fill_the_window() {
        let mut data = ines_image(2, 0, 0, 0);
        data[16] = 0x11;
        data[16 + 16 * 1024] = 0x22; // first byte of the second bank
        let cart = Cartridge::parse(&data).unwrap();

        assert_eq!(cart.prg_read(0x8000), 0x11);
        assert_eq!(cart.prg_read(0xC000), 0x22);
    }

    #[test]
    fn load_missing_file_is_none() {
        assert!(Cartridge::load("/no/such/file.nes").is_none());
    }
}
