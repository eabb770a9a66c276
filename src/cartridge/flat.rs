use super::{Cartridge, CartridgeError};
use crate::helpers::BitExt;

/// A non-banked cartridge: two fixed 16 KiB ROM banks and, optionally,
/// one 8 KiB RAM bank. Sufficient for exercising the bus and PPU in
/// isolation; real bank-switching logic lives outside this crate.
pub struct FlatCartridge {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl FlatCartridge {
    /// Wrap a ROM image. Fails if the image is too small to contain a
    /// header.
    pub fn new(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        if rom.len() < 0x150 {
            return Err(CartridgeError::RomTooSmall(rom.len()));
        }

        Ok(Self {
            rom,
            ram: vec![0; 0x2000],
        })
    }
}

impl Cartridge for FlatCartridge {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.rom.get(addr as usize).copied().unwrap_or(0xFF),
            0xA000..=0xBFFF => self.ram[(addr - 0xA000) as usize],
            _ => 0xFF,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0xA000..=0xBFFF => self.ram[(addr - 0xA000) as usize] = value,
            0x0000..=0x7FFF => log::warn!(
                "write of {:#04x} to ROM-space {:#06x} ignored, no MBC present",
                value,
                addr
            ),
            _ => {}
        }
    }

    fn is_cgb(&self) -> bool {
        self.rom.get(0x0143).copied().unwrap_or(0).bit(7)
    }

    fn is_sgb(&self) -> bool {
        self.rom.get(0x0146).copied().unwrap_or(0) == 0x03
    }
}
