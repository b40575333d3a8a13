//! Golden-byte encoding tests.
//!
//! Expected byte sequences are cross-validated against GNU as (Intel
//! syntax) and iced-x86. Each helper call encodes a single instruction
//! through the public one-shot API.

use x64asm::operand::*;
use x64asm::{encode, AsmError};

fn check(mnemonic: &str, args: &[Operand], expect: &[u8]) {
    let code = encode(mnemonic, args)
        .unwrap_or_else(|e| panic!("{} failed: {}", mnemonic, e));
    assert_eq!(
        code, expect,
        "{} {:?}: got {:02X?}, expected {:02X?}",
        mnemonic, args, code, expect
    );
}

// ─── Zero-operand forms ─────────────────────────────────────────────────────

#[test]
fn fixed_encodings() {
    check("ret", &[], &[0xC3]);
    check("nop", &[], &[0x90]);
    check("leave", &[], &[0xC9]);
    check("int3", &[], &[0xCC]);
    check("hlt", &[], &[0xF4]);
    check("cpuid", &[], &[0x0F, 0xA2]);
    check("syscall", &[], &[0x0F, 0x05]);
    check("rdtsc", &[], &[0x0F, 0x31]);
    check("pause", &[], &[0xF3, 0x90]);
    check("ud2", &[], &[0x0F, 0x0B]);
    check("cbw", &[], &[0x66, 0x98]);
    check("cwde", &[], &[0x98]);
    check("cdqe", &[], &[0x48, 0x98]);
    check("cwd", &[], &[0x66, 0x99]);
    check("cdq", &[], &[0x99]);
    check("cqo", &[], &[0x48, 0x99]);
    check("lfence", &[], &[0x0F, 0xAE, 0xE8]);
    check("mfence", &[], &[0x0F, 0xAE, 0xF0]);
    check("sfence", &[], &[0x0F, 0xAE, 0xF8]);
    check("endbr64", &[], &[0xF3, 0x0F, 0x1E, 0xFA]);
    check("vzeroupper", &[], &[0xC5, 0xF8, 0x77]);
    check("vzeroall", &[], &[0xC5, 0xFC, 0x77]);
}

/// RET imm16 pops the argument without an operand-size prefix.
#[test]
fn ret_imm16() {
    check("ret", &[Operand::from(3i64)], &[0xC2, 0x03, 0x00]);
    check("ret", &[Operand::from(0x100i64)], &[0xC2, 0x00, 0x01]);
}

#[test]
fn int_forms() {
    check("int", &[Operand::from(3i64)], &[0xCC]);
    check("int", &[Operand::from(0x80i64)], &[0xCD, 0x80]);
}

// ─── MOV ────────────────────────────────────────────────────────────────────

/// MOV RBX, -123 → REX.W C7 /0 with a sign-extended imm32.
#[test]
fn mov_r64_imm32_sx() {
    check(
        "mov",
        &[RBX.into(), Operand::from(-123i64)],
        &[0x48, 0xC7, 0xC3, 0x85, 0xFF, 0xFF, 0xFF],
    );
}

/// MOV EAX, 123 → the register-addend B8+r form.
#[test]
fn mov_r32_imm32() {
    check(
        "mov",
        &[EAX.into(), Operand::from(123i64)],
        &[0xB8, 0x7B, 0x00, 0x00, 0x00],
    );
}

/// MOV BX, 123 → B8+r with the operand-size override.
#[test]
fn mov_r16_imm16() {
    check(
        "mov",
        &[BX.into(), Operand::from(123i64)],
        &[0x66, 0xBB, 0x7B, 0x00],
    );
}

#[test]
fn mov_r8_imm8() {
    check("mov", &[AL.into(), Operand::from(-1i64)], &[0xB0, 0xFF]);
    check("mov", &[AH.into(), Operand::from(5i64)], &[0xB4, 0x05]);
    // SPL needs a bare REX; without it the encoding would name AH.
    check("mov", &[SPL.into(), Operand::from(5i64)], &[0x40, 0xB4, 0x05]);
    check("mov", &[R9B.into(), Operand::from(5i64)], &[0x41, 0xB1, 0x05]);
}

/// All-ones matches the sign-extended imm32 slot: MOV RAX, -1.
#[test]
fn mov_r64_all_ones() {
    check(
        "mov",
        &[RAX.into(), Operand::from(u64::MAX)],
        &[0x48, 0xC7, 0xC0, 0xFF, 0xFF, 0xFF, 0xFF],
    );
}

/// A genuinely 64-bit constant takes the B8+r imm64 form.
#[test]
fn mov_r64_imm64() {
    check(
        "mov",
        &[RDX.into(), Operand::from(0x1122_3344_5566_7788u64)],
        &[0x48, 0xBA, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
    );
}

#[test]
fn mov_reg_reg() {
    check("mov", &[RAX.into(), RBX.into()], &[0x48, 0x89, 0xD8]);
    check("mov", &[EAX.into(), EBX.into()], &[0x89, 0xD8]);
    check("mov", &[AL.into(), BL.into()], &[0x88, 0xD8]);
    check("mov", &[AX.into(), BX.into()], &[0x66, 0x89, 0xD8]);
    check("mov", &[R15.into(), RAX.into()], &[0x49, 0x89, 0xC7]);
    check("mov", &[RAX.into(), R15.into()], &[0x4C, 0x89, 0xF8]);
    check("mov", &[SIL.into(), AL.into()], &[0x40, 0x88, 0xC6]);
}

#[test]
fn mov_mem_basic() {
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).into()],
        &[0x48, 0x8B, 0x03],
    );
    check(
        "mov",
        &[Mem::base(RBX).into(), RAX.into()],
        &[0x48, 0x89, 0x03],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).disp(8).into()],
        &[0x48, 0x8B, 0x43, 0x08],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).index(RCX, 4).into()],
        &[0x48, 0x8B, 0x04, 0x8B],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).index(RCX, 4).disp(16).into()],
        &[0x48, 0x8B, 0x44, 0x8B, 0x10],
    );
}

/// MOV qword [RBX], 123 and the SIB variants.
#[test]
fn mov_mem_imm() {
    check(
        "mov",
        &[Mem::base(RBX).size(S64).into(), Operand::from(123i64)],
        &[0x48, 0xC7, 0x03, 0x7B, 0x00, 0x00, 0x00],
    );
    check(
        "mov",
        &[
            Mem::base(RBX).index(RCX, 8).size(S64).into(),
            Operand::from(123i64),
        ],
        &[0x48, 0xC7, 0x04, 0xCB, 0x7B, 0x00, 0x00, 0x00],
    );
    check(
        "mov",
        &[
            Mem::base(RBX).index(RCX, 8).disp(4).size(S64).into(),
            Operand::from(123i64),
        ],
        &[0x48, 0xC7, 0x44, 0xCB, 0x04, 0x7B, 0x00, 0x00, 0x00],
    );
    check(
        "mov",
        &[Mem::base(RAX).size(S8).into(), Operand::from(0x42i64)],
        &[0xC6, 0x00, 0x42],
    );
}

/// RSP/RBP/R12/R13 bases exercise the SIB escape and the forced disp8=0.
#[test]
fn mov_mem_special_bases() {
    check(
        "mov",
        &[RAX.into(), Mem::base(RSP).into()],
        &[0x48, 0x8B, 0x04, 0x24],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBP).into()],
        &[0x48, 0x8B, 0x45, 0x00],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(R12).into()],
        &[0x49, 0x8B, 0x04, 0x24],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(R13).into()],
        &[0x49, 0x8B, 0x45, 0x00],
    );
    // RBP as SIB base still needs the explicit zero displacement.
    check(
        "mov",
        &[RAX.into(), Mem::base(RBP).index(RAX, 2).into()],
        &[0x48, 0x8B, 0x44, 0x45, 0x00],
    );
}

/// Displacement width boundaries.
#[test]
fn mov_mem_disp_boundaries() {
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).disp(1).into()],
        &[0x48, 0x8B, 0x43, 0x01],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).disp(-1).into()],
        &[0x48, 0x8B, 0x43, 0xFF],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).disp(127).into()],
        &[0x48, 0x8B, 0x43, 0x7F],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).disp(128).into()],
        &[0x48, 0x8B, 0x83, 0x80, 0x00, 0x00, 0x00],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).disp(-128).into()],
        &[0x48, 0x8B, 0x43, 0x80],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).disp(-129).into()],
        &[0x48, 0x8B, 0x83, 0x7F, 0xFF, 0xFF, 0xFF],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).disp(i32::MAX).into()],
        &[0x48, 0x8B, 0x83, 0xFF, 0xFF, 0xFF, 0x7F],
    );
}

/// 32-bit base registers get the 0x67 address-size override.
#[test]
fn mov_mem_addr32() {
    check(
        "mov",
        &[EAX.into(), Mem::base(EBX).into()],
        &[0x67, 0x8B, 0x03],
    );
}

/// Segment overrides are emitted for any memory operand with a segment.
#[test]
fn mov_mem_segment() {
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).segment(FS).into()],
        &[0x64, 0x48, 0x8B, 0x03],
    );
    check(
        "mov",
        &[RAX.into(), Mem::base(RBX).segment(GS).into()],
        &[0x65, 0x48, 0x8B, 0x03],
    );
}

/// RIP-relative addressing: mod=00, rm=101, disp32.
#[test]
fn mov_mem_rip_relative() {
    check(
        "mov",
        &[RAX.into(), Mem::base(RIP).disp(16).into()],
        &[0x48, 0x8B, 0x05, 0x10, 0x00, 0x00, 0x00],
    );
}

/// Extended registers in every SIB role at once.
#[test]
fn mov_mem_extended_sib() {
    check(
        "mov",
        &[R8D.into(), Mem::base(R12).index(R13, 4).disp(8).into()],
        &[0x47, 0x8B, 0x44, 0xAC, 0x08],
    );
}

// ─── ALU / unary / shifts ───────────────────────────────────────────────────

#[test]
fn alu_imm_forms() {
    check("add", &[AL.into(), Operand::from(1i64)], &[0x04, 0x01]);
    check("add", &[EAX.into(), Operand::from(1i64)], &[0x83, 0xC0, 0x01]);
    check(
        "add",
        &[RBX.into(), Operand::from(1i64)],
        &[0x48, 0x83, 0xC3, 0x01],
    );
    check(
        "add",
        &[RAX.into(), Operand::from(1000i64)],
        &[0x48, 0x05, 0xE8, 0x03, 0x00, 0x00],
    );
    check(
        "add",
        &[RBX.into(), Operand::from(1000i64)],
        &[0x48, 0x81, 0xC3, 0xE8, 0x03, 0x00, 0x00],
    );
    check(
        "sub",
        &[RSP.into(), Operand::from(8i64)],
        &[0x48, 0x83, 0xEC, 0x08],
    );
    check(
        "cmp",
        &[Mem::base(RDI).size(S8).into(), Operand::from(0i64)],
        &[0x80, 0x3F, 0x00],
    );
    // Sign-extended negatives pick the imm8 form.
    check(
        "and",
        &[RAX.into(), Operand::from(-16i64)],
        &[0x48, 0x83, 0xE0, 0xF0],
    );
}

#[test]
fn alu_reg_forms() {
    check("xor", &[EAX.into(), EAX.into()], &[0x31, 0xC0]);
    check("and", &[CL.into(), DL.into()], &[0x20, 0xD1]);
    check("or", &[R9.into(), R10.into()], &[0x4D, 0x09, 0xD1]);
    check("adc", &[RAX.into(), RBX.into()], &[0x48, 0x11, 0xD8]);
    check("sbb", &[EAX.into(), EBX.into()], &[0x19, 0xD8]);
    check(
        "add",
        &[RBX.into(), Mem::base(RAX).into()],
        &[0x48, 0x03, 0x18],
    );
    check(
        "add",
        &[Mem::base(RAX).into(), RBX.into()],
        &[0x48, 0x01, 0x18],
    );
}

#[test]
fn test_forms() {
    check("test", &[AL.into(), Operand::from(1i64)], &[0xA8, 0x01]);
    check("test", &[RAX.into(), RBX.into()], &[0x48, 0x85, 0xD8]);
    check(
        "test",
        &[EAX.into(), Operand::from(0x100i64)],
        &[0xA9, 0x00, 0x01, 0x00, 0x00],
    );
    check(
        "test",
        &[BL.into(), Operand::from(0x80i64)],
        &[0xF6, 0xC3, 0x80],
    );
}

#[test]
fn unary_forms() {
    check("not", &[RAX.into()], &[0x48, 0xF7, 0xD0]);
    check("neg", &[ECX.into()], &[0xF7, 0xD9]);
    check("mul", &[RBX.into()], &[0x48, 0xF7, 0xE3]);
    check("div", &[ECX.into()], &[0xF7, 0xF1]);
    check("idiv", &[R8.into()], &[0x49, 0xF7, 0xF8]);
    check("inc", &[RAX.into()], &[0x48, 0xFF, 0xC0]);
    check("dec", &[Mem::base(RAX).size(S8).into()], &[0xFE, 0x08]);
}

#[test]
fn shift_forms() {
    check("shl", &[RBX.into(), Operand::from(1i64)], &[0x48, 0xD1, 0xE3]);
    check(
        "shl",
        &[RBX.into(), Operand::from(2i64)],
        &[0x48, 0xC1, 0xE3, 0x02],
    );
    check("shr", &[AL.into(), CL.into()], &[0xD2, 0xE8]);
    check(
        "sar",
        &[RAX.into(), Operand::from(63i64)],
        &[0x48, 0xC1, 0xF8, 0x3F],
    );
    check("rol", &[EAX.into(), Operand::from(1i64)], &[0xD1, 0xC0]);
}

#[test]
fn imul_forms() {
    check("imul", &[RBX.into()], &[0x48, 0xF7, 0xEB]);
    check("imul", &[RBX.into(), RCX.into()], &[0x48, 0x0F, 0xAF, 0xD9]);
    check(
        "imul",
        &[RAX.into(), RBX.into(), Operand::from(8i64)],
        &[0x48, 0x6B, 0xC3, 0x08],
    );
    check(
        "imul",
        &[EAX.into(), EBX.into(), Operand::from(1000i64)],
        &[0x69, 0xC3, 0xE8, 0x03, 0x00, 0x00],
    );
}

#[test]
fn bit_ops() {
    check("bt", &[EAX.into(), Operand::from(3i64)], &[0x0F, 0xBA, 0xE0, 0x03]);
    check("bts", &[RAX.into(), RBX.into()], &[0x48, 0x0F, 0xAB, 0xD8]);
    check("bsf", &[EAX.into(), ECX.into()], &[0x0F, 0xBC, 0xC1]);
    check("bsr", &[RAX.into(), RDX.into()], &[0x48, 0x0F, 0xBD, 0xC2]);
    check("popcnt", &[EAX.into(), ECX.into()], &[0xF3, 0x0F, 0xB8, 0xC1]);
    check(
        "lzcnt",
        &[RAX.into(), RBX.into()],
        &[0xF3, 0x48, 0x0F, 0xBD, 0xC3],
    );
    check(
        "tzcnt",
        &[RAX.into(), RBX.into()],
        &[0xF3, 0x48, 0x0F, 0xBC, 0xC3],
    );
}

// ─── Stack / control flow ───────────────────────────────────────────────────

#[test]
fn push_pop() {
    check("push", &[RAX.into()], &[0x50]);
    check("push", &[R9.into()], &[0x41, 0x51]);
    check("pop", &[RBX.into()], &[0x5B]);
    check("pop", &[R12.into()], &[0x41, 0x5C]);
    check("push", &[Operand::from(1i64)], &[0x6A, 0x01]);
    check(
        "push",
        &[Operand::from(0x12345i64)],
        &[0x68, 0x45, 0x23, 0x01, 0x00],
    );
    check("push", &[Mem::base(RAX).size(S64).into()], &[0xFF, 0x30]);
    check("pop", &[Mem::base(RAX).size(S64).into()], &[0x8F, 0x00]);
}

#[test]
fn indirect_branches() {
    check("jmp", &[RAX.into()], &[0xFF, 0xE0]);
    check("call", &[RAX.into()], &[0xFF, 0xD0]);
    check("call", &[R12.into()], &[0x41, 0xFF, 0xD4]);
    check("jmp", &[Mem::base(RAX).size(S64).into()], &[0xFF, 0x20]);
    check("call", &[Mem::base(RAX).size(S64).into()], &[0xFF, 0x10]);
}

#[test]
fn setcc_cmovcc() {
    check("setz", &[AL.into()], &[0x0F, 0x94, 0xC0]);
    check("setnz", &[BL.into()], &[0x0F, 0x95, 0xC3]);
    check("seta", &[SPL.into()], &[0x40, 0x0F, 0x97, 0xC4]);
    check("cmove", &[RAX.into(), RBX.into()], &[0x48, 0x0F, 0x44, 0xC3]);
    check("cmovl", &[EAX.into(), EBX.into()], &[0x0F, 0x4C, 0xC3]);
}

#[test]
fn xchg_forms() {
    check("xchg", &[RAX.into(), RBX.into()], &[0x48, 0x93]);
    check("xchg", &[EAX.into(), ECX.into()], &[0x91]);
    check("xchg", &[BL.into(), CL.into()], &[0x86, 0xCB]);
}

#[test]
fn lea_movzx_movsx() {
    check(
        "lea",
        &[RAX.into(), Mem::base(RBX).index(RCX, 1).into()],
        &[0x48, 0x8D, 0x04, 0x0B],
    );
    check("lea", &[EAX.into(), Mem::base(RBX).into()], &[0x8D, 0x03]);
    check("movzx", &[EAX.into(), BL.into()], &[0x0F, 0xB6, 0xC3]);
    check("movzx", &[RAX.into(), BX.into()], &[0x48, 0x0F, 0xB7, 0xC3]);
    check(
        "movsx",
        &[EAX.into(), Mem::base(RBX).size(S8).into()],
        &[0x0F, 0xBE, 0x03],
    );
    check("movsxd", &[RAX.into(), ECX.into()], &[0x48, 0x63, 0xC1]);
}

// ─── SSE ────────────────────────────────────────────────────────────────────

#[test]
fn sse_moves() {
    check("movaps", &[XMM1.into(), XMM2.into()], &[0x0F, 0x28, 0xCA]);
    check("movaps", &[XMM8.into(), XMM2.into()], &[0x44, 0x0F, 0x28, 0xC2]);
    check(
        "movaps",
        &[Mem::base(RAX).into(), XMM1.into()],
        &[0x0F, 0x29, 0x08],
    );
    check(
        "movdqa",
        &[XMM1.into(), Mem::base(RAX).into()],
        &[0x66, 0x0F, 0x6F, 0x08],
    );
    check(
        "movdqu",
        &[XMM2.into(), Mem::base(RBX).into()],
        &[0xF3, 0x0F, 0x6F, 0x13],
    );
    check("movq", &[XMM0.into(), RAX.into()], &[0x66, 0x48, 0x0F, 0x6E, 0xC0]);
    check("movd", &[EAX.into(), XMM2.into()], &[0x66, 0x0F, 0x7E, 0xD0]);
}

#[test]
fn sse_arith() {
    check("addps", &[XMM0.into(), XMM1.into()], &[0x0F, 0x58, 0xC1]);
    check("addpd", &[XMM0.into(), XMM1.into()], &[0x66, 0x0F, 0x58, 0xC1]);
    check("addsd", &[XMM0.into(), XMM1.into()], &[0xF2, 0x0F, 0x58, 0xC1]);
    check("addss", &[XMM0.into(), XMM1.into()], &[0xF3, 0x0F, 0x58, 0xC1]);
    check(
        "addsd",
        &[XMM0.into(), Mem::base(RAX).size(S64).into()],
        &[0xF2, 0x0F, 0x58, 0x00],
    );
    check("mulps", &[XMM3.into(), XMM4.into()], &[0x0F, 0x59, 0xDC]);
    check("pand", &[XMM3.into(), XMM7.into()], &[0x66, 0x0F, 0xDB, 0xDF]);
    check("pxor", &[XMM0.into(), XMM0.into()], &[0x66, 0x0F, 0xEF, 0xC0]);
    check(
        "paddd",
        &[XMM0.into(), Mem::base(RBX).into()],
        &[0x66, 0x0F, 0xFE, 0x03],
    );
    check("ucomisd", &[XMM0.into(), XMM1.into()], &[0x66, 0x0F, 0x2E, 0xC1]);
}

// ─── AVX (VEX) ──────────────────────────────────────────────────────────────

/// VPAND XMM0, XMM1, XMM2 → two-byte VEX.
#[test]
fn vpand_xmm() {
    check(
        "vpand",
        &[XMM0.into(), XMM1.into(), XMM2.into()],
        &[0xC5, 0xF1, 0xDB, 0xC2],
    );
}

/// VPAND YMM12, YMM13, YMM14 → three-byte VEX with R and B extensions.
#[test]
fn vpand_ymm_extended() {
    check(
        "vpand",
        &[YMM12.into(), YMM13.into(), YMM14.into()],
        &[0xC4, 0x41, 0x15, 0xDB, 0xE6],
    );
}

#[test]
fn vex_extended_register_variants() {
    check(
        "vpand",
        &[XMM0.into(), XMM12.into(), XMM2.into()],
        &[0xC5, 0x99, 0xDB, 0xC2],
    );
    check(
        "vpand",
        &[XMM0.into(), XMM1.into(), XMM12.into()],
        &[0xC4, 0xC1, 0x71, 0xDB, 0xC4],
    );
}

#[test]
fn vex_arith() {
    check(
        "vaddps",
        &[YMM0.into(), YMM1.into(), YMM2.into()],
        &[0xC5, 0xF4, 0x58, 0xC2],
    );
    check(
        "vaddpd",
        &[YMM0.into(), YMM1.into(), YMM2.into()],
        &[0xC5, 0xF5, 0x58, 0xC2],
    );
    check(
        "vpxor",
        &[XMM0.into(), XMM0.into(), XMM0.into()],
        &[0xC5, 0xF9, 0xEF, 0xC0],
    );
    check(
        "vaddps",
        &[XMM0.into(), XMM1.into(), Mem::base(RAX).into()],
        &[0xC5, 0xF0, 0x58, 0x00],
    );
}

#[test]
fn vex_moves() {
    check(
        "vmovdqa",
        &[YMM1.into(), Mem::base(RAX).into()],
        &[0xC5, 0xFD, 0x6F, 0x08],
    );
    check(
        "vmovdqu",
        &[XMM2.into(), Mem::base(RBX).into()],
        &[0xC5, 0xFA, 0x6F, 0x13],
    );
    check(
        "vmovaps",
        &[Mem::base(RAX).into(), YMM3.into()],
        &[0xC5, 0xFC, 0x29, 0x18],
    );
}

// ─── AVX-512 (EVEX) ─────────────────────────────────────────────────────────

#[test]
fn evex_arith() {
    check(
        "vaddps",
        &[ZMM0.into(), ZMM1.into(), ZMM2.into()],
        &[0x62, 0xF1, 0x74, 0x48, 0x58, 0xC2],
    );
    check(
        "vpandd",
        &[ZMM1.into(), ZMM2.into(), ZMM3.into()],
        &[0x62, 0xF1, 0x6D, 0x48, 0xDB, 0xCB],
    );
    check(
        "vpandq",
        &[ZMM0.into(), ZMM1.into(), ZMM2.into()],
        &[0x62, 0xF1, 0xF5, 0x48, 0xDB, 0xC2],
    );
    check(
        "vpaddd",
        &[ZMM0.into(), ZMM1.into(), ZMM2.into()],
        &[0x62, 0xF1, 0x75, 0x48, 0xFE, 0xC2],
    );
}

#[test]
fn evex_masking() {
    check(
        "vaddps",
        &[ZMM0.merge_mask(K1).into(), ZMM1.into(), ZMM2.into()],
        &[0x62, 0xF1, 0x74, 0x49, 0x58, 0xC2],
    );
    check(
        "vaddps",
        &[ZMM0.mask(K1).into(), ZMM1.into(), ZMM2.into()],
        &[0x62, 0xF1, 0x74, 0xC9, 0x58, 0xC2],
    );
}

#[test]
fn evex_high_registers() {
    check(
        "vaddps",
        &[ZMM0.into(), ZMM8.into(), ZMM30.into()],
        &[0x62, 0x91, 0x3C, 0x48, 0x58, 0xC6],
    );
    check(
        "vaddps",
        &[ZMM16.into(), ZMM1.into(), ZMM2.into()],
        &[0x62, 0xE1, 0x74, 0x48, 0x58, 0xC2],
    );
}

#[test]
fn evex_memory_and_broadcast() {
    check(
        "vpaddd",
        &[ZMM0.into(), ZMM1.into(), Mem::base(RAX).size(S512).into()],
        &[0x62, 0xF1, 0x75, 0x48, 0xFE, 0x00],
    );
    // 256 = 4 × 64: compressed to disp8.
    check(
        "vpaddd",
        &[
            ZMM0.into(),
            ZMM1.into(),
            Mem::base(RAX).disp(256).size(S512).into(),
        ],
        &[0x62, 0xF1, 0x75, 0x48, 0xFE, 0x40, 0x04],
    );
    // 260 is not a multiple of 64: falls back to disp32.
    check(
        "vpaddd",
        &[
            ZMM0.into(),
            ZMM1.into(),
            Mem::base(RAX).disp(260).size(S512).into(),
        ],
        &[0x62, 0xF1, 0x75, 0x48, 0xFE, 0x80, 0x04, 0x01, 0x00, 0x00],
    );
    check(
        "vpaddd",
        &[
            ZMM0.into(),
            ZMM1.into(),
            Mem::base(RAX).size(S32).broadcast().into(),
        ],
        &[0x62, 0xF1, 0x75, 0x58, 0xFE, 0x00],
    );
}

// ─── Error paths ────────────────────────────────────────────────────────────

#[test]
fn ambiguous_operand_size() {
    let err = encode("mov", &[Mem::base(RBX).into(), Operand::from(123i64)]).unwrap_err();
    assert!(matches!(err, AsmError::AmbiguousOperandSize { .. }));
}

#[test]
fn unsupported_combination() {
    let err = encode("mov", &[AL.into(), Operand::from(1000i64)]).unwrap_err();
    assert!(matches!(err, AsmError::UnsupportedInstruction { .. }));
}

#[test]
fn high_byte_with_rex() {
    let err = encode("mov", &[AH.into(), R8B.into()]).unwrap_err();
    assert!(matches!(err, AsmError::HighByteWithRex { .. }));
    let err = encode("mov", &[SIL.into(), AH.into()]).unwrap_err();
    assert!(matches!(err, AsmError::HighByteWithRex { .. }));
}

#[test]
fn invalid_memory_operands() {
    let err = encode(
        "mov",
        &[RAX.into(), Mem::base(RBX).index(RSP, 2).into()],
    )
    .unwrap_err();
    assert!(matches!(err, AsmError::UnsupportedIndex { .. }));

    let err = encode(
        "mov",
        &[RAX.into(), Mem::base(RBX).index(ECX, 2).into()],
    )
    .unwrap_err();
    assert!(matches!(err, AsmError::IndexSizeMismatch { .. }));

    let err = encode(
        "mov",
        &[RAX.into(), Mem::base(RBX).index(RCX, 3).into()],
    )
    .unwrap_err();
    assert!(matches!(err, AsmError::InvalidScale { .. }));

    let err = encode("mov", &[RAX.into(), Mem::base(AX).into()]).unwrap_err();
    assert!(matches!(err, AsmError::InvalidMemBase { .. }));
}

#[test]
fn unknown_mnemonic() {
    let err = encode("xyzzy", &[]).unwrap_err();
    assert!(matches!(err, AsmError::UnknownMnemonic { .. }));
}
