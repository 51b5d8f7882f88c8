use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gb_core::cartridge::{Cartridge, CartridgeKind};
use gb_core::error::CoreError;
use gb_core::machine::GameBoy;

mod emulator;
mod overlay;
mod video;

/// Minimal host driver: load a cartridge, step the core, present frames.
#[derive(Parser)]
#[command(name = "gb", about = "Runs a cartridge image against the SM83 core")]
struct Cli {
    /// Path to a raw cartridge image (at least 32 KiB).
    rom_path: PathBuf,

    /// Window scale factor; the LCD is 160x144 native.
    #[arg(long, default_value_t = 3)]
    scale: u32,

    /// Show an FPS counter overlay in the corner of the window.
    #[arg(long)]
    fps: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let rom = match std::fs::read(&cli.rom_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("failed to read {}: {e}", cli.rom_path.display());
            return ExitCode::FAILURE;
        }
    };

    let cartridge = match Cartridge::from_bytes(rom) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let CartridgeKind::BankSwitched(code) = cartridge.kind {
        log::warn!(
            "cartridge declares MBC type 0x{code:02X}; bank switching is not emulated, only the first 32 KiB is mapped"
        );
    }
    log::info!("loaded \"{}\"", cartridge.title);

    let mut gb = GameBoy::new(cartridge);
    let outcome = emulator::run(&mut gb, cli.scale, cli.fps);

    // §7: the core reports fatal/terminal states up to the host loop as
    // `CoreError`; the host's job is just to print it and pick an exit code.
    match outcome.into_error() {
        Some(err @ CoreError::UnassignedOpcode { .. }) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
        Some(err) => {
            log::info!("{err}");
            ExitCode::SUCCESS
        }
        None => ExitCode::SUCCESS, // host window closed with the CPU still running
    }
}
