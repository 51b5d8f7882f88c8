//! Jumps, calls, returns, and restarts.

use crate::bus::Bus;
use super::{tables, Cpu, FLAG_C, FLAG_Z};

impl Cpu {
    /// Evaluate a conditional branch's flag test from its opcode. Bits 4-3
    /// select NZ/Z/NC/C for every conditional JR/JP/CALL/RET.
    pub(crate) fn eval_condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.flag(FLAG_Z), // NZ
            1 => self.flag(FLAG_Z),  // Z
            2 => !self.flag(FLAG_C), // NC
            3 => self.flag(FLAG_C),  // C
            _ => unreachable!(),
        }
    }

    /// JR r8 / JR cc,r8. `offset` has already been fetched as the
    /// instruction's immediate byte. Returns extra cycles beyond the base.
    pub(crate) fn jr(&mut self, offset: i8, taken: bool) -> u32 {
        if taken {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            tables::JR_TAKEN_EXTRA
        } else {
            0
        }
    }

    /// JP a16 / JP cc,a16.
    pub(crate) fn jp(&mut self, addr: u16, taken: bool) -> u32 {
        if taken {
            self.pc = addr;
            tables::JP_TAKEN_EXTRA
        } else {
            0
        }
    }

    /// CALL a16: unconditional, always taken.
    pub(crate) fn call(&mut self, addr: u16, bus: &mut Bus) {
        self.push_u16(self.pc, bus);
        self.pc = addr;
    }

    /// CALL cc,a16.
    pub(crate) fn call_cc(&mut self, addr: u16, taken: bool, bus: &mut Bus) -> u32 {
        if taken {
            self.call(addr, bus);
            tables::CALL_TAKEN_EXTRA
        } else {
            0
        }
    }

    /// RET: unconditional, always taken.
    pub(crate) fn ret(&mut self, bus: &mut Bus) {
        self.pc = self.pop_u16(bus);
    }

    /// RET cc.
    pub(crate) fn ret_cc(&mut self, taken: bool, bus: &mut Bus) -> u32 {
        if taken {
            self.ret(bus);
            tables::RET_TAKEN_EXTRA
        } else {
            0
        }
    }

    /// RST vector: bits 5-3 of the opcode give the target, 0x00/0x08/.../0x38.
    pub(crate) fn rst(&mut self, opcode: u8, bus: &mut Bus) {
        let target = (opcode & 0x38) as u16;
        self.push_u16(self.pc, bus);
        self.pc = target;
    }
}
