mod bus;
mod cartridge;
mod config;
mod helpers;
mod joypad;
mod ppu;
mod timer;

pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeError, FlatCartridge};
pub use config::BusConfig;
pub use joypad::GbKey;
