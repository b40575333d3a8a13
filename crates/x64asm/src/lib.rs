//! # x64asm — x86-64 instruction encoder and runtime assembler
//!
//! `x64asm` turns symbolic machine instructions (mnemonic plus typed
//! operands) into the exact byte stream an AMD64 CPU executes.
//!
//! ## Quick Start
//!
//! ```rust
//! use x64asm::operand::*;
//!
//! let code = x64asm::encode("mov", &[EAX.into(), Operand::from(123i64)]).unwrap();
//! assert_eq!(code, vec![0xB8, 0x7B, 0x00, 0x00, 0x00]);
//! ```
//!
//! Sequences with labels go through the streaming [`Assembler`]:
//!
//! ```rust
//! use x64asm::operand::*;
//! use x64asm::Assembler;
//!
//! let mut asm = Assembler::new(Vec::new());
//! asm.label("spin")?;
//! asm.emit("pause", &[])?;
//! asm.emit("jmp", &[Operand::label("spin")])?;
//! let code = asm.finish()?;
//! assert_eq!(code, vec![0xF3, 0x90, 0xEB, 0xFC]);
//! # Ok::<(), x64asm::AsmError>(())
//! ```
//!
//! ## Design
//!
//! - **Form catalogue** — every mnemonic carries an ordered list of forms
//!   (parameter signature + encoding recipe), cheapest encoding first; the
//!   selector picks the first signature match, so the shortest legal
//!   encoding wins automatically.
//! - **Byte-exact emission** — legacy/REX/VEX/EVEX prefixes, opcode,
//!   ModR/M, SIB, displacement, and immediates are produced bit-for-bit as
//!   a reference assembler would.
//! - **Two-pass labels** — forward references buffer the call; label
//!   binding retries buffered calls in order and streams finalized bytes
//!   to the downstream [`Sink`].
//! - **`no_std` + `alloc`** — embeddable in JIT runtimes, kernels, and
//!   firmware; no C dependencies.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// ── Lint policy ──────────────────────────────────────────────────────────
// An instruction encoder lives on narrowing casts between integer widths
// and dense hex literals (0x0F38, 0b1100_0100); the lints below are
// expected and acceptable in this context.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::unreadable_literal,
    clippy::match_same_arms,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::uninlined_format_args,
    clippy::doc_markdown,
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::missing_errors_doc
)]

extern crate alloc;

/// Two-pass streaming assembler and the downstream [`Sink`] trait.
pub mod assembler;
/// Encoding primitives (prefix accumulators, ModR/M, SIB) and the
/// single-form encoder.
pub mod encoding;
/// Error types and caller-location diagnostics.
pub mod error;
/// The instruction catalogue and form selection.
pub mod isa;
/// Operand model: sizes, registers, immediates, memory, labels, and
/// parameter descriptors.
pub mod operand;

// Re-exports
#[cfg(feature = "std")]
pub use assembler::IoSink;
pub use assembler::{Assembler, Sink};
pub use encoding::{Encoding, Format, MAX_INSTR_LEN};
pub use error::{AsmError, Pos};
pub use isa::{instructions, lookup, Form, InstSet};
pub use operand::{Int, Kind, Label, Mem, MemKind, Misc, Operand, Param, Reg, RegType, Size, Uint};

use alloc::string::String;
use alloc::vec::Vec;

/// Encode a single instruction to bytes.
///
/// # Errors
///
/// Returns [`AsmError`] for unknown mnemonics, invalid operands,
/// unsupported operand combinations, or encoding failures.
///
/// # Examples
///
/// ```rust
/// use x64asm::operand::*;
///
/// let code = x64asm::encode(
///     "mov",
///     &[Mem::base(RBX).index(RCX, 8).disp(4).size(S64).into(), Operand::from(123i64)],
/// )
/// .unwrap();
/// assert_eq!(code, vec![0x48, 0xC7, 0x44, 0xCB, 0x04, 0x7B, 0x00, 0x00, 0x00]);
/// ```
pub fn encode(mnemonic: &str, args: &[Operand]) -> Result<Vec<u8>, AsmError> {
    let iset = isa::lookup(mnemonic).ok_or_else(|| AsmError::UnknownMnemonic {
        mnemonic: String::from(mnemonic),
    })?;
    Ok(iset.encode(args)?.bytes().to_vec())
}
