//! Arithmetic, logic, rotate, and flag-adjustment instructions.

use crate::bus::Bus;
use super::{Cpu, Reg16, Reg8, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};

impl Cpu {
    pub(crate) fn inc_r8(&mut self, r: Reg8, bus: &mut Bus) {
        let val = self.get_r8(r, bus);
        let result = val.wrapping_add(1);
        self.set_r8(r, result, bus);
        self.set_flag(FLAG_Z, result == 0);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, (val & 0x0F) + 1 > 0x0F);
    }

    pub(crate) fn dec_r8(&mut self, r: Reg8, bus: &mut Bus) {
        let val = self.get_r8(r, bus);
        let result = val.wrapping_sub(1);
        self.set_r8(r, result, bus);
        self.set_flag(FLAG_Z, result == 0);
        self.set_flag(FLAG_N, true);
        self.set_flag(FLAG_H, (val & 0x0F) == 0);
    }

    pub(crate) fn add_hl_rr(&mut self, rr: Reg16) {
        let hl = self.hl();
        let val = match rr {
            Reg16::Bc => self.bc(),
            Reg16::De => self.de(),
            Reg16::Hl => self.hl(),
            Reg16::Sp => self.sp,
        };
        let (result, carry) = hl.overflowing_add(val);
        self.set_hl(result);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, (hl & 0x0FFF) + (val & 0x0FFF) > 0x0FFF);
        self.set_flag(FLAG_C, carry);
    }

    pub(crate) fn add_sp_r8(&mut self, offset: i8) {
        let sp = self.sp;
        let off16 = offset as i16 as u16;
        let result = sp.wrapping_add(off16);
        let unsigned_off = offset as u8;
        self.set_flag(FLAG_Z, false);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, (sp & 0x0F) + (unsigned_off as u16 & 0x0F) > 0x0F);
        self.set_flag(FLAG_C, (sp & 0xFF) + (unsigned_off as u16) > 0xFF);
        self.sp = result;
    }

    pub(crate) fn ld_hl_sp_r8(&mut self, offset: i8) {
        let sp = self.sp;
        let off16 = offset as i16 as u16;
        let result = sp.wrapping_add(off16);
        let unsigned_off = offset as u8;
        self.set_flag(FLAG_Z, false);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, (sp & 0x0F) + (unsigned_off as u16 & 0x0F) > 0x0F);
        self.set_flag(FLAG_C, (sp & 0xFF) + (unsigned_off as u16) > 0xFF);
        self.set_hl(result);
    }

    /// Dispatch the ALU-on-A block, shared by `ALU A,r` (0x80-0xBF) and
    /// `ALU A,d8` (0xC6/0xCE/.../0xFE). `op` is bits 5-3 of the opcode:
    /// 0=ADD 1=ADC 2=SUB 3=SBC 4=AND 5=XOR 6=OR 7=CP.
    pub(crate) fn alu_op(&mut self, op: u8, val: u8) {
        match op & 0x07 {
            0 => self.add_a(val, false),
            1 => self.add_a(val, true),
            2 => self.sub_a(val, false, true),
            3 => self.sub_a(val, true, true),
            4 => self.and_a(val),
            5 => self.xor_a(val),
            6 => self.or_a(val),
            7 => {
                self.sub_a(val, false, false);
            }
            _ => unreachable!(),
        }
    }

    fn add_a(&mut self, val: u8, with_carry: bool) {
        let carry_in = if with_carry && self.flag(FLAG_C) { 1u8 } else { 0 };
        let a = self.a;
        let result16 = a as u16 + val as u16 + carry_in as u16;
        let result = result16 as u8;
        self.set_flag(FLAG_Z, result == 0);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, (a & 0x0F) + (val & 0x0F) + carry_in > 0x0F);
        self.set_flag(FLAG_C, result16 > 0xFF);
        self.a = result;
    }

    /// Shared by SUB/SBC/CP. `store` is false for CP, which discards the
    /// result but still sets flags from A-val(-carry).
    fn sub_a(&mut self, val: u8, with_carry: bool, store: bool) {
        let carry_in = if with_carry && self.flag(FLAG_C) { 1u8 } else { 0 };
        let a = self.a;
        let result16 = (a as i16) - (val as i16) - (carry_in as i16);
        let result = result16 as u8;
        self.set_flag(FLAG_Z, result == 0);
        self.set_flag(FLAG_N, true);
        self.set_flag(FLAG_H, (a & 0x0F) < (val & 0x0F) + carry_in);
        self.set_flag(FLAG_C, result16 < 0);
        if store {
            self.a = result;
        }
    }

    fn and_a(&mut self, val: u8) {
        self.a &= val;
        self.set_flag(FLAG_Z, self.a == 0);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, true);
        self.set_flag(FLAG_C, false);
    }

    fn or_a(&mut self, val: u8) {
        self.a |= val;
        self.set_flag(FLAG_Z, self.a == 0);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, false);
        self.set_flag(FLAG_C, false);
    }

    fn xor_a(&mut self, val: u8) {
        self.a ^= val;
        self.set_flag(FLAG_Z, self.a == 0);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, false);
        self.set_flag(FLAG_C, false);
    }

    pub(crate) fn rlca(&mut self) {
        let carry = (self.a >> 7) & 1;
        self.a = (self.a << 1) | carry;
        self.f = 0;
        self.set_flag(FLAG_C, carry != 0);
    }

    pub(crate) fn rrca(&mut self) {
        let carry = self.a & 1;
        self.a = (self.a >> 1) | (carry << 7);
        self.f = 0;
        self.set_flag(FLAG_C, carry != 0);
    }

    pub(crate) fn rla(&mut self) {
        let old_carry = if self.flag(FLAG_C) { 1 } else { 0 };
        let new_carry = (self.a >> 7) & 1;
        self.a = (self.a << 1) | old_carry;
        self.f = 0;
        self.set_flag(FLAG_C, new_carry != 0);
    }

    pub(crate) fn rra(&mut self) {
        let old_carry = if self.flag(FLAG_C) { 0x80 } else { 0 };
        let new_carry = self.a & 1;
        self.a = (self.a >> 1) | old_carry;
        self.f = 0;
        self.set_flag(FLAG_C, new_carry != 0);
    }

    pub(crate) fn cpl(&mut self) {
        self.a = !self.a;
        self.set_flag(FLAG_N, true);
        self.set_flag(FLAG_H, true);
    }

    pub(crate) fn scf(&mut self) {
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, false);
        self.set_flag(FLAG_C, true);
    }

    pub(crate) fn ccf(&mut self) {
        let carry = self.flag(FLAG_C);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, false);
        self.set_flag(FLAG_C, !carry);
    }

    /// Adjust A to valid BCD after an addition or subtraction, per the
    /// standard SM83 table (§4.2.5) — not the source's `A > operand`
    /// shortcut flagged as likely-buggy by §9 open question 1.
    pub(crate) fn daa(&mut self) {
        let mut a = self.a;
        let n = self.flag(FLAG_N);
        let mut carry = self.flag(FLAG_C);

        if !n {
            if carry || a > 0x99 {
                a = a.wrapping_add(0x60);
                carry = true;
            }
            if self.flag(FLAG_H) || (a & 0x0F) > 0x09 {
                a = a.wrapping_add(0x06);
            }
        } else {
            if carry {
                a = a.wrapping_sub(0x60);
            }
            if self.flag(FLAG_H) {
                a = a.wrapping_sub(0x06);
            }
        }

        self.a = a;
        self.set_flag(FLAG_Z, a == 0);
        self.set_flag(FLAG_H, false);
        self.set_flag(FLAG_C, carry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;

    fn test_bus() -> Bus {
        Bus::new(&Cartridge::from_bytes(vec![0u8; 0x8000]).unwrap())
    }

    /// S3: DAA after two adds of 0x06 to 0x15 yields 0x27.
    #[test]
    fn s3_daa_after_addition() {
        let mut cpu = Cpu::new();
        cpu.a = 0x15;
        cpu.f = 0;
        cpu.alu_op(0, 0x06);
        assert_eq!(cpu.a, 0x1B);
        cpu.alu_op(0, 0x06);
        assert_eq!(cpu.a, 0x21);
        assert!(cpu.flag(FLAG_H));
        cpu.daa();
        assert_eq!(cpu.a, 0x27);
        assert!(!cpu.flag(FLAG_Z));
        assert!(!cpu.flag(FLAG_H));
    }

    #[test]
    fn add_a_sets_half_and_full_carry() {
        let mut cpu = Cpu::new();
        cpu.a = 0x0F;
        cpu.f = 0;
        cpu.alu_op(0, 0x01);
        assert_eq!(cpu.a, 0x10);
        assert!(cpu.flag(FLAG_H));
        assert!(!cpu.flag(FLAG_C));

        cpu.a = 0xFF;
        cpu.alu_op(0, 0x01);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.flag(FLAG_Z));
        assert!(cpu.flag(FLAG_C));
    }

    /// Invariant 4: ADD A,b then SUB b restores A, with SUB's flags
    /// matching the documented borrow rule.
    #[test]
    fn add_then_sub_restores_a() {
        let mut cpu = Cpu::new();
        cpu.a = 0x3C;
        cpu.f = 0;
        let original = cpu.a;
        cpu.alu_op(0, 0x12); // ADD A,0x12
        cpu.alu_op(2, 0x12); // SUB 0x12
        assert_eq!(cpu.a, original);
        assert!(cpu.flag(FLAG_N));
    }

    #[test]
    fn sub_sets_borrow_flags() {
        let mut cpu = Cpu::new();
        cpu.a = 0x10;
        cpu.f = 0;
        cpu.alu_op(2, 0x01); // SUB 0x01
        assert_eq!(cpu.a, 0x0F);
        assert!(cpu.flag(FLAG_H), "borrow from bit 4 into low nibble");
        assert!(!cpu.flag(FLAG_C));
    }

    #[test]
    fn add_hl_rr_half_carry_is_from_bit_11() {
        let mut cpu = Cpu::new();
        cpu.set_hl(0x0FFF);
        cpu.set_bc(0x0001);
        cpu.f = 0;
        cpu.add_hl_rr(Reg16::Bc);
        assert_eq!(cpu.hl(), 0x1000);
        assert!(cpu.flag(FLAG_H));
        assert!(!cpu.flag(FLAG_C));
    }

    /// S5: CB SWAP is exercised from the bit module; this checks the rotate
    /// helpers used by RLCA/RRCA/RLA/RRA directly.
    #[test]
    fn rla_rotates_through_carry() {
        let mut cpu = Cpu::new();
        cpu.a = 0x80;
        cpu.f = 0;
        cpu.rla();
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.flag(FLAG_C));
        cpu.rla();
        assert_eq!(cpu.a, 0x01);
        assert!(!cpu.flag(FLAG_C));
    }

    #[test]
    fn inc_dec_r8_leave_carry_unchanged() {
        let mut cpu = Cpu::new();
        let mut bus = test_bus();
        cpu.f = FLAG_C;
        cpu.b = 0xFF;
        cpu.inc_r8(Reg8::B, &mut bus);
        assert_eq!(cpu.b, 0x00);
        assert!(cpu.flag(FLAG_Z));
        assert!(cpu.flag(FLAG_H));
        assert!(cpu.flag(FLAG_C), "INC must not touch C");
    }
}
