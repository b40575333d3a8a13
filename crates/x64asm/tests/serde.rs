//! Serde round-trip tests for the public value types.
//!
//! Validates that operands and errors serialize to JSON and deserialize
//! back to identical values.

#![cfg(feature = "serde")]

use x64asm::operand::*;
use x64asm::{AsmError, Pos};

/// Helper: serialize to JSON, deserialize back, assert equality.
fn round_trip<T>(val: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + core::fmt::Debug,
{
    let json = serde_json::to_string(val).expect("serialize");
    let back: T = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(val, &back, "round-trip mismatch for JSON: {json}");
}

#[test]
fn serde_size() {
    for s in [S0, S8, S16, S32, S64, S128, S256, S512] {
        round_trip(&s);
    }
}

#[test]
fn serde_reg() {
    round_trip(&RAX);
    round_trip(&AH);
    round_trip(&ZMM31);
    round_trip(&ZMM0.mask(K1));
    round_trip(&ZMM0.merge_mask(K7));
    round_trip(&RIP);
    round_trip(&FS);
}

#[test]
fn serde_mem() {
    round_trip(&Mem::base(RBX));
    round_trip(&Mem::base(RBX).index(RCX, 8).disp(-64).size(S64).segment(GS));
    round_trip(&Mem::base(RAX).size(S32).broadcast());
}

#[test]
fn serde_operand() {
    round_trip(&Operand::Imm(Int(-123)));
    round_trip(&Operand::UImm(Uint(u64::MAX)));
    round_trip(&Operand::Reg(R15));
    round_trip(&Operand::Mem(Mem::base(RSP).disp(16)));
    round_trip(&Operand::label("loop"));
    round_trip(&Operand::RelFwd(127));
    round_trip(&Operand::RelRwd(-126));
    round_trip(&Operand::Misc(Misc::Sae));
}

#[test]
fn serde_errors() {
    round_trip(&AsmError::HighByteWithRex { reg: AH });
    round_trip(&AsmError::AmbiguousOperandSize {
        mnemonic: "MOV".into(),
    });
    round_trip(&AsmError::Multiple {
        errors: vec![
            AsmError::ScaleWithoutIndex,
            AsmError::UndefinedLabel { label: "a".into() },
        ],
    });
    round_trip(&Pos {
        file: "gen.rs".into(),
        line: 10,
        col: 4,
    });
}
