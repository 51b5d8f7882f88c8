//! Decode tables for the primary opcode page.
//!
//! Expressed as match statements rather than literal 256-entry arrays — the
//! pattern the hardware's own bit layout makes regular (e.g. `LD r,r'` or
//! the ALU-on-A block) collapses to a formula, and the irregular opcodes
//! (branches, loads with immediates) are listed one by one. Either a table
//! of structs or a switch is an equally valid "decode table"; this file is
//! the one of the two this core uses.

use super::Reg8;

/// Opcodes the hardware never defines. Fetching one of these is fatal.
pub const UNASSIGNED: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

pub fn is_unassigned(opcode: u8) -> bool {
    UNASSIGNED.contains(&opcode)
}

/// Instruction length in bytes, including the opcode byte itself.
pub fn primary_length(opcode: u8) -> u8 {
    match opcode {
        0x01 | 0x11 | 0x21 | 0x31 => 3, // LD rr,d16
        0x08 => 3,                      // LD (a16),SP
        0xC3 | 0xCD => 3,               // JP a16 / CALL a16
        0xC2 | 0xCA | 0xD2 | 0xDA => 3, // JP cc,a16
        0xC4 | 0xCC | 0xD4 | 0xDC => 3, // CALL cc,a16
        0xEA | 0xFA => 3,               // LD (a16),A / LD A,(a16)
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => 2, // LD r,d8
        0x10 => 2,                      // STOP (second byte conventionally 0x00)
        0x18 | 0x20 | 0x28 | 0x30 | 0x38 => 2, // JR / JR cc
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => 2, // ALU A,d8
        0xE0 | 0xF0 => 2,               // LDH (a8),A / LDH A,(a8)
        0xE8 | 0xF8 => 2,               // ADD SP,r8 / LD HL,SP+r8
        0xCB => 2,                      // prefix + sub-opcode
        _ => 1,
    }
}

/// Baseline cycle cost: for conditional branches this is the NOT-TAKEN
/// cost, with the taken extra added by the branch handler itself.
pub fn primary_base_cycles(opcode: u8) -> u32 {
    match opcode {
        0x00 | 0x76 => 4, // NOP, HALT
        0x01 | 0x11 | 0x21 | 0x31 => 12, // LD rr,d16
        0x08 => 20,        // LD (a16),SP
        0x02 | 0x12 | 0x0A | 0x1A | 0x22 | 0x32 | 0x2A | 0x3A => 8, // LD (rr),A / LD A,(rr) family
        0x03 | 0x13 | 0x23 | 0x33 => 8, // INC rr
        0x0B | 0x1B | 0x2B | 0x3B => 8, // DEC rr
        0x09 | 0x19 | 0x29 | 0x39 => 8, // ADD HL,rr
        0x34 | 0x35 => 12,              // INC (HL) / DEC (HL)
        0x36 => 12,                     // LD (HL),d8
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x3E => 8, // LD r,d8
        0x07 | 0x0F | 0x17 | 0x1F => 4, // RLCA/RRCA/RLA/RRA
        0x10 => 4,                      // STOP
        0x18 => 8,                      // JR r8 (unconditional, always "taken": 8 base + 4 extra = 12)
        0x20 | 0x28 | 0x30 | 0x38 => 8, // JR cc,r8 (not taken)
        0x27 | 0x2F | 0x37 | 0x3F => 4, // DAA/CPL/SCF/CCF
        0x40..=0x7F => {
            if opcode == 0x76 {
                4
            } else {
                let dst = (opcode >> 3) & 0x07;
                let src = opcode & 0x07;
                if dst == Reg8::HlInd as u8 || src == Reg8::HlInd as u8 {
                    8
                } else {
                    4
                }
            }
        }
        0x80..=0xBF => {
            if (opcode & 0x07) == Reg8::HlInd as u8 {
                8
            } else {
                4
            }
        }
        0xC0 | 0xC8 | 0xD0 | 0xD8 => 8, // RET cc (not taken)
        0xC1 | 0xD1 | 0xE1 | 0xF1 => 12, // POP rr
        0xC2 | 0xCA | 0xD2 | 0xDA => 12, // JP cc,a16 (not taken)
        0xC3 => 16,                      // JP a16
        0xC4 | 0xCC | 0xD4 | 0xDC => 12, // CALL cc,a16 (not taken)
        0xC5 | 0xD5 | 0xE5 | 0xF5 => 16, // PUSH rr
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => 8, // ALU A,d8
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => 16, // RST
        0xC9 => 16,                      // RET
        0xCB => 0,                       // prefix byte; the CB sub-opcode supplies the full cost
        0xCD => 24,                      // CALL a16
        0xD9 => 16,                      // RETI
        0xE0 | 0xF0 => 12,               // LDH
        0xE2 | 0xF2 => 8,                // LD (C),A / LD A,(C)
        0xE8 => 16,                      // ADD SP,r8
        0xE9 => 4,                       // JP (HL)
        0xEA | 0xFA => 16,               // LD (a16),A / LD A,(a16)
        0xF3 | 0xFB => 4,                // DI / EI
        0xF8 => 12,                      // LD HL,SP+r8
        0xF9 => 8,                       // LD SP,HL
        _ => 4,
    }
}

/// Extra cycles added when a conditional branch is taken.
pub const JR_TAKEN_EXTRA: u32 = 4;
pub const JP_TAKEN_EXTRA: u32 = 4;
pub const CALL_TAKEN_EXTRA: u32 = 12;
pub const RET_TAKEN_EXTRA: u32 = 12;

/// CB-page cycle cost: 8 for a plain register target, 16 for `(HL)`.
pub fn cb_cycles(target: Reg8) -> u32 {
    if target == Reg8::HlInd { 16 } else { 8 }
}
