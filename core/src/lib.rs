//! SM83 CPU interpreter, memory bus, and background video timing for a
//! classic handheld console. No windowing, audio, or input handling lives
//! here — see the `frontend` crate for that; this crate is the part a host
//! steps forward one instruction or one frame at a time.

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod error;
pub mod machine;
pub mod video;

pub mod prelude {
    pub use crate::bus::Bus;
    pub use crate::cartridge::Cartridge;
    pub use crate::cpu::{Cpu, CpuState, StepOutcome};
    pub use crate::error::CoreError;
    pub use crate::machine::GameBoy;
    pub use crate::video::Video;
}
