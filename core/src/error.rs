use std::fmt;

/// Errors surfaced by the core up to a host driver.
///
/// Decoding never fails — the opcode tables are total — so every variant
/// here is either a startup-time problem or one of the three terminal
/// states a running CPU can reach (`UnassignedOpcode`, `Halted`, `Stopped`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The program counter landed on a byte in the reserved opcode set.
    UnassignedOpcode { pc: u16, opcode: u8 },
    /// The program executed `HALT`.
    Halted { pc: u16 },
    /// The program executed `STOP`.
    Stopped { pc: u16 },
    /// The cartridge image was missing or too short to be mapped.
    LoadError(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnassignedOpcode { pc, opcode } => write!(
                f,
                "unassigned opcode 0x{opcode:02X} at PC=0x{pc:04X}"
            ),
            Self::Halted { pc } => write!(f, "HALT at PC=0x{pc:04X}"),
            Self::Stopped { pc } => write!(f, "STOP at PC=0x{pc:04X}"),
            Self::LoadError(msg) => write!(f, "cartridge load error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}
