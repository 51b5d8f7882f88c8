mod common;
use common::machine_with_program;

/// Invariant 5: PUSH rr then POP rr restores rr and leaves SP unchanged,
/// driven through the full fetch/decode/execute path for every pair.
#[test]
fn push_pop_bc_round_trips() {
    let mut gb = machine_with_program(&[
        0x01, 0xEF, 0xBE, // LD BC,0xBEEF
        0xC5, // PUSH BC
        0x01, 0x00, 0x00, // LD BC,0x0000
        0xC1, // POP BC
    ]);
    for _ in 0..4 {
        gb.step();
    }
    assert_eq!(gb.cpu().bc(), 0xBEEF);
    assert_eq!(gb.cpu().sp, 0xFFFE);
}

/// POP AF masks the popped byte's low nibble into F, since F's low four
/// bits are architecturally always zero.
#[test]
fn pop_af_masks_low_nibble() {
    let mut gb = machine_with_program(&[
        0x21, 0x00, 0xC0, // LD HL,0xC000
        0x36, 0xFF, // LD (HL),0xFF — the byte POP AF will read as F
        0x31, 0x00, 0xC0, // LD SP,0xC000
        0xF1, // POP AF
    ]);
    for _ in 0..4 {
        gb.step();
    }
    assert_eq!(gb.cpu().f & 0x0F, 0, "POP AF must mask the low nibble");
}

/// CALL's push leaves SP decremented by exactly 2.
#[test]
fn call_decrements_sp_by_exactly_two() {
    let mut gb = machine_with_program(&[0xCD, 0x00, 0x02]); // CALL 0x0200
    let sp_before = gb.cpu().sp;
    gb.step();
    assert_eq!(sp_before - gb.cpu().sp, 2);
}
