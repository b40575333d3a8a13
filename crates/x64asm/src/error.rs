//! Error types and caller-location diagnostics.

#[allow(unused_imports)]
use alloc::format;
use alloc::boxed::Box;
use alloc::string::String;
#[allow(unused_imports)]
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::operand::{Reg, Size};

/// Caller source location for diagnostics.
///
/// Captured with `#[track_caller]` on [`Assembler::emit`] and
/// [`Assembler::label`], so that errors surfaced at
/// [`Assembler::finish`] point back at the call site that produced the
/// offending instruction.
///
/// [`Assembler::emit`]: crate::assembler::Assembler::emit
/// [`Assembler::label`]: crate::assembler::Assembler::label
/// [`Assembler::finish`]: crate::assembler::Assembler::finish
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    /// Source file path as reported by the compiler.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub col: u32,
}

impl Pos {
    /// Capture the current caller location.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let loc = core::panic::Location::caller();
        Self {
            file: String::from(loc.file()),
            line: loc.line(),
            col: loc.column(),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Assembly error with descriptive payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsmError {
    /// Register has a size outside the 8..512-bit range.
    InvalidRegister {
        /// The invalid size carried by the register.
        size: Size,
    },

    /// Memory operand without a base register.
    MissingMemBase,

    /// Memory base register is neither 32- nor 64-bit.
    InvalidMemBase {
        /// Size of the offending base register.
        size: Size,
    },

    /// Memory index register size differs from the base register size.
    IndexSizeMismatch {
        /// Size of the base register.
        base: Size,
        /// Size of the index register.
        index: Size,
    },

    /// A scale factor was provided without an index register.
    ScaleWithoutIndex,

    /// Scale factor is not one of 1, 2, 4, or 8.
    InvalidScale {
        /// The rejected scale factor.
        scale: u8,
    },

    /// Index register cannot be encoded (RSP, or a `.4` register at scale 1).
    UnsupportedIndex {
        /// The rejected index register.
        reg: Reg,
    },

    /// Memory operand present but no operand carries an explicit size.
    AmbiguousOperandSize {
        /// The instruction mnemonic.
        mnemonic: String,
    },

    /// No form of the instruction accepts the given operand combination.
    UnsupportedInstruction {
        /// The instruction mnemonic.
        mnemonic: String,
    },

    /// The mnemonic is not present in the instruction catalogue.
    UnknownMnemonic {
        /// The unrecognized mnemonic.
        mnemonic: String,
    },

    /// AH/CH/DH/BH cannot be encoded in an instruction that emits a REX prefix.
    HighByteWithRex {
        /// The offending high-byte register.
        reg: Reg,
    },

    /// Encoded instruction length exceeds the 15-byte architectural limit.
    InstructionTooLong {
        /// The produced length.
        len: usize,
    },

    /// Label was defined more than once.
    DuplicateLabel {
        /// The duplicated label name.
        label: String,
    },

    /// Referenced label was never defined before `finish`.
    UndefinedLabel {
        /// The undefined label name.
        label: String,
    },

    /// A buffered instruction could not be encoded once its labels resolved.
    EncodingFailed {
        /// The instruction mnemonic.
        mnemonic: String,
    },

    /// The downstream sink reported a write failure.
    Sink {
        /// The sink's error message.
        msg: String,
    },

    /// An error wrapped with the emit-site mnemonic/label name and position.
    Context {
        /// Mnemonic or label name the error belongs to.
        name: String,
        /// Caller position, when available.
        pos: Option<Pos>,
        /// The underlying error.
        source: Box<AsmError>,
    },

    /// Multiple errors collected during assembly.
    Multiple {
        /// The collected errors, in emission order.
        errors: Vec<AsmError>,
    },
}

impl AsmError {
    /// Wrap an error with the mnemonic/label name and caller position.
    #[must_use]
    pub(crate) fn context(self, name: &str, pos: Option<Pos>) -> AsmError {
        AsmError::Context {
            name: String::from(name),
            pos,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmError::InvalidRegister { size } => {
                write!(f, "invalid {}-bit register", size.bits())
            }
            AsmError::MissingMemBase => {
                write!(f, "base register not provided")
            }
            AsmError::InvalidMemBase { size } => {
                write!(f, "invalid {}-bit base register", size.bits())
            }
            AsmError::IndexSizeMismatch { base, index } => {
                write!(
                    f,
                    "base register is {}-bit, but index is {}-bit",
                    base.bits(),
                    index.bits()
                )
            }
            AsmError::ScaleWithoutIndex => {
                write!(f, "scale provided without index")
            }
            AsmError::InvalidScale { scale } => {
                write!(f, "unsupported scale {} (must be 1, 2, 4, or 8)", scale)
            }
            AsmError::UnsupportedIndex { reg } => {
                write!(f, "unsupported index register '{}'", reg)
            }
            AsmError::AmbiguousOperandSize { mnemonic } => {
                write!(f, "ambiguous operand size for '{}'", mnemonic)
            }
            AsmError::UnsupportedInstruction { mnemonic } => {
                write!(f, "unsupported instruction '{}'", mnemonic)
            }
            AsmError::UnknownMnemonic { mnemonic } => {
                write!(f, "unknown mnemonic '{}'", mnemonic)
            }
            AsmError::HighByteWithRex { reg } => {
                write!(
                    f,
                    "cannot encode register '{}' in REX-prefixed instruction",
                    reg
                )
            }
            AsmError::InstructionTooLong { len } => {
                write!(f, "instruction length {} exceeds 15 bytes", len)
            }
            AsmError::DuplicateLabel { label } => {
                write!(f, "symbol '{}' already defined", label)
            }
            AsmError::UndefinedLabel { label } => {
                write!(f, "symbol '{}' is not defined", label)
            }
            AsmError::EncodingFailed { mnemonic } => {
                write!(f, "unable to encode instruction '{}'", mnemonic)
            }
            AsmError::Sink { msg } => {
                write!(f, "sink write failed: {}", msg)
            }
            AsmError::Context { name, pos, source } => match pos {
                Some(pos) => write!(f, "{}: '{}' failed: {}", pos, name, source),
                None => write!(f, "'{}' failed: {}", name, source),
            },
            AsmError::Multiple { errors } => {
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", e)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AsmError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::{AH, S16, S32};

    #[test]
    fn pos_display() {
        let pos = Pos {
            file: "demo.rs".into(),
            line: 42,
            col: 7,
        };
        assert_eq!(format!("{}", pos), "demo.rs:42");
    }

    #[test]
    fn pos_caller_captures_this_file() {
        let pos = Pos::caller();
        assert!(pos.file.ends_with("error.rs"));
        assert!(pos.line > 0);
    }

    #[test]
    fn invalid_register_display() {
        let err = AsmError::InvalidRegister { size: S16 };
        assert_eq!(format!("{}", err), "invalid 16-bit register");
    }

    #[test]
    fn index_size_mismatch_display() {
        let err = AsmError::IndexSizeMismatch {
            base: Size::S64,
            index: S32,
        };
        assert_eq!(
            format!("{}", err),
            "base register is 64-bit, but index is 32-bit"
        );
    }

    #[test]
    fn high_byte_display() {
        let err = AsmError::HighByteWithRex { reg: AH };
        assert_eq!(
            format!("{}", err),
            "cannot encode register 'ah' in REX-prefixed instruction"
        );
    }

    #[test]
    fn context_display() {
        let err = AsmError::UndefinedLabel { label: "a".into() }.context(
            "JMP",
            Some(Pos {
                file: "gen.rs".into(),
                line: 3,
                col: 1,
            }),
        );
        assert_eq!(
            format!("{}", err),
            "gen.rs:3: 'JMP' failed: symbol 'a' is not defined"
        );
    }

    #[test]
    fn multiple_display_joins_lines() {
        let err = AsmError::Multiple {
            errors: vec![
                AsmError::ScaleWithoutIndex,
                AsmError::DuplicateLabel { label: "x".into() },
            ],
        };
        let s = format!("{}", err);
        assert!(s.contains("scale provided without index"));
        assert!(s.contains("symbol 'x' already defined"));
    }
}
