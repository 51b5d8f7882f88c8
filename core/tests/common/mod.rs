use gb_core::cartridge::Cartridge;
use gb_core::machine::GameBoy;

/// Build a `GameBoy` with `program` placed at the boot entry point 0x0100,
/// the way a real cartridge's header-check bypass would leave it.
pub fn machine_with_program(program: &[u8]) -> GameBoy {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    GameBoy::new(Cartridge::from_bytes(rom).unwrap())
}
