use crate::error::CoreError;

/// Minimal cartridge-header fields this core cares about. MBC bank switching
/// is out of scope; the type byte is only read to decide whether to warn
/// that bank switching will not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartridgeKind {
    RomOnly,
    BankSwitched(u8),
}

impl CartridgeKind {
    fn from_header_byte(b: u8) -> Self {
        match b {
            0x00 => CartridgeKind::RomOnly,
            other => CartridgeKind::BankSwitched(other),
        }
    }
}

/// A loaded cartridge image plus the handful of header fields the bus needs
/// to size external RAM.
#[derive(Debug, Clone)]
pub struct Cartridge {
    pub rom: Vec<u8>,
    pub kind: CartridgeKind,
    pub title: String,
    pub ram_size: usize,
}

const MIN_ROM_SIZE: usize = 0x8000;
const HEADER_TITLE: std::ops::Range<usize> = 0x134..0x143;
const HEADER_KIND: usize = 0x147;
const HEADER_RAM_SIZE: usize = 0x149;
const DEFAULT_RAM_SIZE: usize = 0x2000;

impl Cartridge {
    /// Load a raw cartridge image. Bytes 0..0x8000 are mapped verbatim into
    /// the ROM region; anything beyond that is retained but unused by a
    /// plain 32 KiB ROM-only mapping.
    pub fn from_bytes(rom: Vec<u8>) -> Result<Self, CoreError> {
        if rom.len() < MIN_ROM_SIZE {
            return Err(CoreError::LoadError(format!(
                "cartridge image is {} bytes, need at least {MIN_ROM_SIZE}",
                rom.len()
            )));
        }

        let kind = CartridgeKind::from_header_byte(rom[HEADER_KIND]);
        let title = String::from_utf8_lossy(&rom[HEADER_TITLE])
            .trim_matches('\0')
            .to_string();
        let ram_size = match rom.get(HEADER_RAM_SIZE) {
            Some(0x01) => 0x800,
            Some(0x02) => 0x2000,
            Some(0x03) => 0x8000,
            Some(0x04) => 0x20000,
            Some(0x05) => 0x10000,
            _ => DEFAULT_RAM_SIZE,
        };

        Ok(Cartridge {
            rom,
            kind,
            title,
            ram_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_of(len: usize) -> Vec<u8> {
        let mut rom = vec![0u8; len];
        rom[HEADER_KIND] = 0x00;
        rom[HEADER_RAM_SIZE] = 0x02;
        rom
    }

    #[test]
    fn rejects_short_images() {
        let err = Cartridge::from_bytes(vec![0u8; 0x100]).unwrap_err();
        assert!(matches!(err, CoreError::LoadError(_)));
    }

    #[test]
    fn reads_header_fields() {
        let cart = Cartridge::from_bytes(rom_of(MIN_ROM_SIZE)).unwrap();
        assert_eq!(cart.kind, CartridgeKind::RomOnly);
        assert_eq!(cart.ram_size, 0x2000);
    }
}
