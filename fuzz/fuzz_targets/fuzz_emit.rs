#![no_main]
//! Fuzz the emit API: arbitrary operand combinations against every
//! catalogue mnemonic must return Ok/Err without panicking, and successful
//! encodings must respect the 15-byte limit.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use x64asm::operand::*;
use x64asm::{instructions, Assembler, Operand};

#[derive(Arbitrary, Debug)]
enum FuzzOperand {
    Imm(i64),
    UImm(u64),
    Gp { id: u8, size: u8 },
    Vec { id: u8, size: u8 },
    Mem {
        base: u8,
        index: Option<(u8, u8)>,
        disp: i32,
        size: u8,
        broadcast: bool,
    },
    Label(u8),
}

impl FuzzOperand {
    fn build(&self) -> Operand {
        match *self {
            FuzzOperand::Imm(v) => Operand::Imm(Int(v)),
            FuzzOperand::UImm(v) => Operand::UImm(Uint(v)),
            FuzzOperand::Gp { id, size } => {
                Operand::Reg(Reg::new(id % 24, RegType::General, Size::from_bits(1 + size % 4)))
            }
            FuzzOperand::Vec { id, size } => {
                Operand::Reg(Reg::new(id % 32, RegType::Vector, Size::from_bits(4 + size % 4)))
            }
            FuzzOperand::Mem {
                base,
                index,
                disp,
                size,
                broadcast,
            } => {
                let mut m = Mem::base(Reg::new(
                    base % 16,
                    RegType::General,
                    if base & 0x10 == 0 { S64 } else { S32 },
                ))
                .disp(disp)
                .size(Size::from_bits(size % 8));
                if let Some((i, scale)) = index {
                    m = m.index(
                        Reg::new(i % 16, RegType::General, S64),
                        1 << (scale % 4),
                    );
                }
                if broadcast {
                    m = m.broadcast();
                }
                Operand::Mem(m)
            }
            FuzzOperand::Label(n) => Operand::label(["a", "b", "c", "d"][n as usize % 4]),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    ops: Vec<(u16, Vec<FuzzOperand>, Option<u8>)>,
}

fuzz_target!(|input: FuzzInput| {
    let catalogue = instructions();
    let mut asm = Assembler::new(Vec::new());
    for (mnemonic, operands, label) in input.ops.iter().take(64) {
        let iset = &catalogue[*mnemonic as usize % catalogue.len()];
        let args: Vec<Operand> = operands.iter().take(4).map(FuzzOperand::build).collect();
        let _ = asm.emit(iset.name, &args);
        if let Some(n) = label {
            let _ = asm.label(["a", "b", "c", "d"][*n as usize % 4]);
        }
    }
    match asm.finish() {
        Ok(code) => {
            // Every instruction respects the architectural limit, so the
            // stream is at most 15 bytes per emitted op.
            assert!(code.len() <= 64 * 15);
        }
        Err(_) => {}
    }
});
