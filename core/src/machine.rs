//! Top-level interpreter: owns the CPU, bus, and video subsystems and wires
//! them together the way `core/src/core/machine.rs`'s `Machine` trait wires
//! a CPU and its devices for the teacher's arcade boards — but as a
//! concrete struct, since this scope has exactly one hardware
//! configuration rather than a family of them.

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::{Cpu, StepOutcome};
use crate::video::Video;

/// A single instance of the console: CPU, memory-mapped bus, and the
/// background video pacer, all owned together since the bus is shared
/// mutable state between the other two (§5 Concurrency & resource model).
pub struct GameBoy {
    cpu: Cpu,
    bus: Bus,
    video: Video,
}

impl GameBoy {
    /// Reset to architectural boot defaults (§3 Lifecycles) with `cartridge`
    /// mapped into ROM and, if declared, external RAM.
    pub fn new(cartridge: Cartridge) -> Self {
        GameBoy {
            cpu: Cpu::new(),
            bus: Bus::new(&cartridge),
            video: Video::new(),
        }
    }

    /// Execute exactly one CPU instruction and advance `Video` by its cycle
    /// cost. Returns the CPU's outcome unchanged so a host loop can react
    /// to HALT/STOP/fatal termination.
    pub fn step(&mut self) -> StepOutcome {
        let outcome = self.cpu.step(&mut self.bus);
        self.video.advance(outcome.cycles(), &mut self.bus);
        outcome
    }

    /// Step repeatedly until a frame has been presented or the CPU hits a
    /// terminal state, whichever comes first — the method a host loop
    /// calls once per vsync.
    pub fn run_frame(&mut self) -> StepOutcome {
        loop {
            let outcome = self.cpu.step(&mut self.bus);
            if outcome.is_terminal() {
                return outcome;
            }
            let presented = self.video.advance(outcome.cycles(), &mut self.bus);
            if presented {
                return outcome;
            }
        }
    }

    /// The last-rendered RGB24 frame, 160×144 pixels, 3 bytes per pixel.
    pub fn frame_buffer(&self) -> &[u8] {
        self.video.frame_buffer()
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }
}
