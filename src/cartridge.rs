use thiserror::Error;

mod flat;

pub use flat::FlatCartridge;

/// Trait implemented by the cartridge collaborator.
///
/// Production memory-bank-controller logic lives outside this crate; a
/// driver wires up its own `Cartridge` for real ROMs and is only
/// expected to satisfy this boundary.
pub trait Cartridge {
    /// Read a byte from ROM (`0x0000..=0x7FFF`) or external RAM
    /// (`0xA000..=0xBFFF`).
    fn read(&self, addr: u16) -> u8;

    /// Write a byte to ROM-space (bank switching) or external RAM.
    fn write(&mut self, addr: u16, value: u8);

    /// Returns `true` if the cartridge header marks CGB support.
    fn is_cgb(&self) -> bool;

    /// Returns `true` if the cartridge header marks SGB support.
    fn is_sgb(&self) -> bool;
}

/// Errors that can occur constructing the bundled [`FlatCartridge`].
#[derive(Error, Debug)]
pub enum CartridgeError {
    /// The supplied ROM image is too small to contain a valid header.
    #[error("ROM is too small to contain a valid header ({0} bytes, need at least 0x150)")]
    RomTooSmall(usize),
}
