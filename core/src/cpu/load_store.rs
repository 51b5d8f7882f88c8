//! Loads and stores that don't fit the regular `LD r,r'` or 16-bit-immediate
//! grids: indirect loads through BC/DE/HL, the HL+/HL- auto-index forms, and
//! `LD (a16),SP`.

use crate::bus::Bus;

use super::Cpu;

impl Cpu {
    /// LD (a16),SP — stores SP little-endian at the given address.
    pub(crate) fn store_sp_at(&mut self, addr: u16, bus: &mut Bus) {
        bus.write(addr, self.sp as u8);
        bus.write(addr.wrapping_add(1), (self.sp >> 8) as u8);
    }

    /// LD (BC),A / LD (DE),A. `opcode` is 0x02 or 0x12.
    pub(crate) fn store_a_at_rr(&mut self, opcode: u8, bus: &mut Bus) {
        let addr = if opcode == 0x02 { self.bc() } else { self.de() };
        bus.write(addr, self.a);
    }

    /// LD A,(BC) / LD A,(DE). `opcode` is 0x0A or 0x1A.
    pub(crate) fn load_a_from_rr(&mut self, opcode: u8, bus: &mut Bus) {
        let addr = if opcode == 0x0A { self.bc() } else { self.de() };
        self.a = bus.read(addr);
    }

    /// LD (HL+),A / LD (HL-),A / LD A,(HL+) / LD A,(HL-).
    /// `opcode` is one of 0x22, 0x32, 0x2A, 0x3A.
    pub(crate) fn hl_indirect_a(&mut self, opcode: u8, bus: &mut Bus) {
        let hl = self.hl();
        match opcode {
            0x22 => {
                bus.write(hl, self.a);
                self.set_hl(hl.wrapping_add(1));
            }
            0x32 => {
                bus.write(hl, self.a);
                self.set_hl(hl.wrapping_sub(1));
            }
            0x2A => {
                self.a = bus.read(hl);
                self.set_hl(hl.wrapping_add(1));
            }
            0x3A => {
                self.a = bus.read(hl);
                self.set_hl(hl.wrapping_sub(1));
            }
            _ => unreachable!(),
        }
    }
}
