//! Operand model: sizes, registers, immediates, memory references, labels,
//! and the bit-packed parameter descriptors that instruction forms match
//! against.
//!
//! Operands are a closed tagged union ([`Operand`]) with exhaustive matching
//! in the encoder — encoding wants case analysis, not polymorphism.

#[allow(unused_imports)]
use alloc::format;
use alloc::rc::Rc;
use core::fmt;

use crate::error::AsmError;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Operand size lattice.
///
/// The ordering is total and used throughout matching to decide whether a
/// value fits a slot ("an immediate matches iff the slot size is at least its
/// minimum size").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Size {
    /// No size / unsized.
    #[default]
    S0 = 0,
    /// 8 bits.
    S8 = 1,
    /// 16 bits.
    S16 = 2,
    /// 32 bits.
    S32 = 3,
    /// 64 bits.
    S64 = 4,
    /// 128 bits.
    S128 = 5,
    /// 256 bits.
    S256 = 6,
    /// 512 bits.
    S512 = 7,
}

pub use Size::{S0, S128, S16, S256, S32, S512, S64, S8};

impl Size {
    /// Special-case zero size used when working with immediates.
    ///
    /// Immediate operands must have a size, so a zero size is interpreted as
    /// a 4-bit immediate (the `imm4` payload of the XOP `VPERMIL2` forms).
    pub const S4: Size = Size::S0;

    pub(crate) const BITS: u32 = 3;
    pub(crate) const MASK: u32 = 0b111;

    /// Reconstruct a size from its 3-bit field encoding.
    #[must_use]
    pub const fn from_bits(v: u8) -> Size {
        match v & 0b111 {
            1 => S8,
            2 => S16,
            3 => S32,
            4 => S64,
            5 => S128,
            6 => S256,
            7 => S512,
            _ => S0,
        }
    }

    /// Width in bytes (0 for [`Size::S0`]).
    #[must_use]
    pub const fn bytes(self) -> usize {
        (1 << self as usize) >> 1
    }

    /// Width in bits (0 for [`Size::S0`]).
    #[must_use]
    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }

    /// Width in bits when used as an immediate size (4 for [`Size::S4`]).
    #[must_use]
    pub const fn imm_bits(self) -> usize {
        if matches!(self, S0) {
            4
        } else {
            self.bits()
        }
    }

    /// Largest unsigned value representable at this immediate width.
    #[must_use]
    pub const fn max_uint(self) -> u64 {
        let bits = self.imm_bits();
        if bits >= 64 {
            u64::MAX
        } else {
            !(u64::MAX << bits)
        }
    }
}

// ─── Kind ───────────────────────────────────────────────────────────────────

/// Coarse operand classification shared by operands and parameter
/// descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Modifier pseudo-operands such as `{sae}`.
    Misc,
    /// Immediate value.
    Imm,
    /// Register.
    Reg,
    /// Memory reference.
    Mem,
    /// Code-relative offset (branch target).
    Rel,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Misc => write!(f, "misc"),
            Kind::Imm => write!(f, "imm"),
            Kind::Reg => write!(f, "reg"),
            Kind::Mem => write!(f, "mem"),
            Kind::Rel => write!(f, "rel"),
        }
    }
}

// ─── Registers ──────────────────────────────────────────────────────────────

/// Register class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RegType {
    /// General-purpose registers.
    General = 0,
    /// MMX/XMM/YMM/ZMM vector registers.
    Vector = 1,
    /// AVX-512 opmask registers k0..k7.
    Mask = 2,
    /// Instruction pointer (IP/EIP/RIP).
    Ip = 3,
    /// Status register (FLAGS/EFLAGS/RFLAGS).
    Status = 4,
    /// Segment registers.
    Segment = 5,
}

/// A register identity, bit-packed as `(kind, id, size)` plus an optional
/// AVX-512 opmask modifier.
///
/// Bit layout:
///
/// ```text
///       23  22  18    16 15       8       5      2     0
///     ╭───┬───┬──────────┬─────────┬────────┬──────────╮
///     │ M ╎ K ╎ MASK REG │   ID    │  TYPE  ╎   SIZE   │
///     ╰───┴───┴──────────┴─────────┴────────┴──────────╯
/// ```
///
/// `K` is the masked flag and `M` the merge flag; both are used only by EVEX
/// encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reg(u32);

const R_TYPE_SHIFT: u32 = Size::BITS;
const R_TYPE_MASK: u32 = 0b111 << R_TYPE_SHIFT;
const R_ID_SHIFT: u32 = 8;
const R_MATCH_MASK: u32 = R_TYPE_MASK | Size::MASK;
const R_MASK_SHIFT: u32 = 16;
const R_MASK_MASK: u32 = 0b111 << R_MASK_SHIFT;
const R_MASKED: u32 = 1 << 22;
const R_MERGED: u32 = 1 << 23;
const R_IP_ID: u8 = 0b101;

impl Reg {
    /// Construct a register from its class, number, and size.
    #[must_use]
    pub const fn new(id: u8, ty: RegType, size: Size) -> Reg {
        Reg(((id as u32) << R_ID_SHIFT) | ((ty as u32) << R_TYPE_SHIFT) | size as u32)
    }

    /// The register size.
    #[must_use]
    pub const fn size(self) -> Size {
        Size::from_bits((self.0 & Size::MASK) as u8)
    }

    /// The register class.
    #[must_use]
    pub const fn ty(self) -> RegType {
        match (self.0 & R_TYPE_MASK) >> R_TYPE_SHIFT {
            0 => RegType::General,
            1 => RegType::Vector,
            2 => RegType::Mask,
            3 => RegType::Ip,
            4 => RegType::Status,
            _ => RegType::Segment,
        }
    }

    /// The register number.
    #[must_use]
    pub const fn id(self) -> u8 {
        (self.0 >> R_ID_SHIFT) as u8
    }

    /// Low three bits of the register number (the ModR/M / SIB field value).
    #[must_use]
    pub(crate) const fn low3(self) -> u8 {
        self.id() & 0b111
    }

    /// Whether this is one of the legacy high-byte registers AH/CH/DH/BH.
    #[must_use]
    pub const fn high_byte(self) -> bool {
        matches!(self.ty(), RegType::General)
            && matches!(self.size(), S8)
            && self.id() & 0b1111_1100 == 20
    }

    /// Whether this is SPL/BPL/SIL/DIL — encodable only with a REX prefix.
    #[must_use]
    pub const fn uniform_byte(self) -> bool {
        matches!(self.ty(), RegType::General) && matches!(self.size(), S8) && {
            let id = self.id();
            4 <= id && id <= 7
        }
    }

    /// Whether register number bit 3 is set — requires REX.R/X/B (or the
    /// inverted VEX/EVEX equivalents).
    #[must_use]
    pub const fn ext8(self) -> bool {
        self.id() & 0b1000 != 0
            && matches!(self.ty(), RegType::General | RegType::Vector)
    }

    /// Whether register number bit 4 is set — requires EVEX.R′/V′.
    #[must_use]
    pub const fn ext16(self) -> bool {
        self.id() & 0b1_0000 != 0 && matches!(self.ty(), RegType::Vector)
    }

    /// Whether this is an instruction-pointer register.
    #[must_use]
    pub const fn is_ip(self) -> bool {
        matches!(self.ty(), RegType::Ip)
    }

    /// Whether this is an MMX register (64-bit vector).
    #[must_use]
    pub const fn mmx(self) -> bool {
        matches!(self.ty(), RegType::Vector) && matches!(self.size(), S64)
    }

    /// Attach a zeroing opmask (`{k}{z}`).
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a vector register or `k` is not a mask
    /// register.
    #[must_use]
    pub fn mask(self, k: Reg) -> Reg {
        assert!(
            matches!(self.ty(), RegType::Vector),
            "vector register required"
        );
        assert!(matches!(k.ty(), RegType::Mask), "mask register required");
        Reg(self.unmask().0 | R_MASKED | (((k.id() as u32) << R_MASK_SHIFT) & R_MASK_MASK))
    }

    /// Attach a merging opmask (`{k}`).
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a vector register or `k` is not a mask
    /// register.
    #[must_use]
    pub fn merge_mask(self, k: Reg) -> Reg {
        Reg(self.mask(k).0 | R_MERGED)
    }

    /// Strip any opmask modifier.
    #[must_use]
    pub const fn unmask(self) -> Reg {
        Reg(self.0 & !(R_MASKED | R_MERGED | R_MASK_MASK))
    }

    /// Whether any opmask modifier is attached.
    #[must_use]
    pub const fn masked(self) -> bool {
        self.0 & R_MASKED != 0
    }

    /// Whether the merging opmask modifier is attached.
    #[must_use]
    pub const fn merge_masked(self) -> bool {
        self.0 & (R_MASKED | R_MERGED) == (R_MASKED | R_MERGED)
    }

    /// The attached opmask register, if any.
    #[must_use]
    pub const fn mask_reg(self) -> Option<Reg> {
        if self.0 & R_MASKED == 0 {
            None
        } else {
            Some(Reg::new(
                ((self.0 & R_MASK_MASK) >> R_MASK_SHIFT) as u8,
                RegType::Mask,
                S64,
            ))
        }
    }

    /// Legacy segment-override prefix byte for segment registers.
    #[must_use]
    pub const fn segment_prefix(self) -> Option<u8> {
        match self.ty() {
            RegType::Segment => Some(SEGMENT_PREFIX[self.id() as usize]),
            _ => None,
        }
    }

    /// Check the register for a representable size.
    ///
    /// # Errors
    ///
    /// Returns [`AsmError::InvalidRegister`] for sizes outside 8..512 bits.
    pub fn validate(self) -> Result<(), AsmError> {
        let s = self.size();
        if s < S8 {
            return Err(AsmError::InvalidRegister { size: s });
        }
        Ok(())
    }

    /// Look up a register by its lowercase canonical name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Reg> {
        for (row, names) in GEN_NAMES.iter().enumerate() {
            for (id, n) in names.iter().enumerate() {
                if !n.is_empty() && n.eq_ignore_ascii_case(name) {
                    return Some(Reg::new(
                        id as u8,
                        RegType::General,
                        Size::from_bits(row as u8 + 1),
                    ));
                }
            }
        }
        for (row, names) in VEC_NAMES.iter().enumerate() {
            for (id, n) in names.iter().enumerate() {
                if n.eq_ignore_ascii_case(name) {
                    return Some(Reg::new(
                        id as u8,
                        RegType::Vector,
                        Size::from_bits(row as u8 + 4),
                    ));
                }
            }
        }
        for (id, n) in MASK_NAMES.iter().enumerate() {
            if n.eq_ignore_ascii_case(name) {
                return Some(Reg::new(id as u8, RegType::Mask, S64));
            }
        }
        for (i, n) in IP_NAMES.iter().enumerate() {
            if n.eq_ignore_ascii_case(name) {
                return Some(Reg::new(R_IP_ID, RegType::Ip, Size::from_bits(i as u8 + 2)));
            }
        }
        for (i, n) in STATUS_NAMES.iter().enumerate() {
            if n.eq_ignore_ascii_case(name) {
                return Some(Reg::new(0, RegType::Status, Size::from_bits(i as u8 + 2)));
            }
        }
        for (id, n) in SEGMENT_NAMES.iter().enumerate() {
            if n.eq_ignore_ascii_case(name) {
                return Some(Reg::new(id as u8, RegType::Segment, S16));
            }
        }
        None
    }

    /// Match against a parameter descriptor.
    #[must_use]
    pub fn matches(self, p: Param) -> bool {
        if p.kind() != Kind::Reg {
            return false;
        }
        if p.is_const() {
            return self.0 as u16 == p.0 as u16;
        }
        (self.0 ^ p.0) & R_MATCH_MASK == 0
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const INVALID: &str = "%!";
        let id = self.id() as usize;
        let size = self.size() as usize;
        let name = match self.ty() {
            RegType::General => size
                .checked_sub(1)
                .and_then(|row| GEN_NAMES.get(row))
                .and_then(|row| row.get(id))
                .copied()
                .filter(|n| !n.is_empty()),
            RegType::Vector => size
                .checked_sub(4)
                .and_then(|row| VEC_NAMES.get(row))
                .and_then(|row| row.get(id))
                .copied(),
            RegType::Mask => MASK_NAMES.get(id).copied(),
            RegType::Ip => size.checked_sub(2).and_then(|i| IP_NAMES.get(i)).copied(),
            RegType::Status => size
                .checked_sub(2)
                .and_then(|i| STATUS_NAMES.get(i))
                .copied(),
            RegType::Segment => SEGMENT_NAMES.get(id).copied(),
        };
        write!(f, "{}", name.unwrap_or(INVALID))
    }
}

macro_rules! regs {
    ($ty:expr, $size:expr; $($name:ident = $id:expr),+ $(,)?) => {
        $(
            #[doc = concat!("The `", stringify!($name), "` register.")]
            pub const $name: Reg = Reg::new($id, $ty, $size);
        )+
    };
}

regs!(RegType::General, S8;
    AL = 0, CL = 1, DL = 2, BL = 3, SPL = 4, BPL = 5, SIL = 6, DIL = 7,
    R8B = 8, R9B = 9, R10B = 10, R11B = 11, R12B = 12, R13B = 13, R14B = 14, R15B = 15,
    AH = 20, CH = 21, DH = 22, BH = 23,
);
regs!(RegType::General, S16;
    AX = 0, CX = 1, DX = 2, BX = 3, SP = 4, BP = 5, SI = 6, DI = 7,
    R8W = 8, R9W = 9, R10W = 10, R11W = 11, R12W = 12, R13W = 13, R14W = 14, R15W = 15,
);
regs!(RegType::General, S32;
    EAX = 0, ECX = 1, EDX = 2, EBX = 3, ESP = 4, EBP = 5, ESI = 6, EDI = 7,
    R8D = 8, R9D = 9, R10D = 10, R11D = 11, R12D = 12, R13D = 13, R14D = 14, R15D = 15,
);
regs!(RegType::General, S64;
    RAX = 0, RCX = 1, RDX = 2, RBX = 3, RSP = 4, RBP = 5, RSI = 6, RDI = 7,
    R8 = 8, R9 = 9, R10 = 10, R11 = 11, R12 = 12, R13 = 13, R14 = 14, R15 = 15,
);
regs!(RegType::Vector, S64;
    MM0 = 0, MM1 = 1, MM2 = 2, MM3 = 3, MM4 = 4, MM5 = 5, MM6 = 6, MM7 = 7,
);
regs!(RegType::Vector, S128;
    XMM0 = 0, XMM1 = 1, XMM2 = 2, XMM3 = 3, XMM4 = 4, XMM5 = 5, XMM6 = 6, XMM7 = 7,
    XMM8 = 8, XMM9 = 9, XMM10 = 10, XMM11 = 11, XMM12 = 12, XMM13 = 13, XMM14 = 14,
    XMM15 = 15,
);
regs!(RegType::Vector, S256;
    YMM0 = 0, YMM1 = 1, YMM2 = 2, YMM3 = 3, YMM4 = 4, YMM5 = 5, YMM6 = 6, YMM7 = 7,
    YMM8 = 8, YMM9 = 9, YMM10 = 10, YMM11 = 11, YMM12 = 12, YMM13 = 13, YMM14 = 14,
    YMM15 = 15,
);
regs!(RegType::Vector, S512;
    ZMM0 = 0, ZMM1 = 1, ZMM2 = 2, ZMM3 = 3, ZMM4 = 4, ZMM5 = 5, ZMM6 = 6, ZMM7 = 7,
    ZMM8 = 8, ZMM9 = 9, ZMM10 = 10, ZMM11 = 11, ZMM12 = 12, ZMM13 = 13, ZMM14 = 14,
    ZMM15 = 15, ZMM16 = 16, ZMM17 = 17, ZMM18 = 18, ZMM19 = 19, ZMM20 = 20, ZMM21 = 21,
    ZMM22 = 22, ZMM23 = 23, ZMM24 = 24, ZMM25 = 25, ZMM26 = 26, ZMM27 = 27, ZMM28 = 28,
    ZMM29 = 29, ZMM30 = 30, ZMM31 = 31,
);
regs!(RegType::Mask, S64;
    K0 = 0, K1 = 1, K2 = 2, K3 = 3, K4 = 4, K5 = 5, K6 = 6, K7 = 7,
);
regs!(RegType::Segment, S16;
    SS = 0, CS = 1, DS = 2, ES = 3, FS = 4, GS = 5,
);

/// The 16-bit instruction pointer.
pub const IP: Reg = Reg::new(R_IP_ID, RegType::Ip, S16);
/// The 32-bit instruction pointer.
pub const EIP: Reg = Reg::new(R_IP_ID, RegType::Ip, S32);
/// The 64-bit instruction pointer.
pub const RIP: Reg = Reg::new(R_IP_ID, RegType::Ip, S64);
/// The 16-bit status register.
pub const FLAGS: Reg = Reg::new(0, RegType::Status, S16);
/// The 32-bit status register.
pub const EFLAGS: Reg = Reg::new(0, RegType::Status, S32);
/// The 64-bit status register.
pub const RFLAGS: Reg = Reg::new(0, RegType::Status, S64);

const GEN_NAMES: [&[&str]; 4] = [
    &[
        "al", "cl", "dl", "bl", "spl", "bpl", "sil", "dil", "r8b", "r9b", "r10b", "r11b",
        "r12b", "r13b", "r14b", "r15b", "", "", "", "", "ah", "ch", "dh", "bh",
    ],
    &[
        "ax", "cx", "dx", "bx", "sp", "bp", "si", "di", "r8w", "r9w", "r10w", "r11w", "r12w",
        "r13w", "r14w", "r15w",
    ],
    &[
        "eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi", "r8d", "r9d", "r10d", "r11d",
        "r12d", "r13d", "r14d", "r15d",
    ],
    &[
        "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11",
        "r12", "r13", "r14", "r15",
    ],
];

const VEC_NAMES: [&[&str]; 4] = [
    &["mm0", "mm1", "mm2", "mm3", "mm4", "mm5", "mm6", "mm7"],
    &[
        "xmm0", "xmm1", "xmm2", "xmm3", "xmm4", "xmm5", "xmm6", "xmm7", "xmm8", "xmm9",
        "xmm10", "xmm11", "xmm12", "xmm13", "xmm14", "xmm15",
    ],
    &[
        "ymm0", "ymm1", "ymm2", "ymm3", "ymm4", "ymm5", "ymm6", "ymm7", "ymm8", "ymm9",
        "ymm10", "ymm11", "ymm12", "ymm13", "ymm14", "ymm15",
    ],
    &[
        "zmm0", "zmm1", "zmm2", "zmm3", "zmm4", "zmm5", "zmm6", "zmm7", "zmm8", "zmm9",
        "zmm10", "zmm11", "zmm12", "zmm13", "zmm14", "zmm15", "zmm16", "zmm17", "zmm18",
        "zmm19", "zmm20", "zmm21", "zmm22", "zmm23", "zmm24", "zmm25", "zmm26", "zmm27",
        "zmm28", "zmm29", "zmm30", "zmm31",
    ],
];

const MASK_NAMES: [&str; 8] = ["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7"];
const IP_NAMES: [&str; 3] = ["ip", "eip", "rip"];
const STATUS_NAMES: [&str; 3] = ["flags", "eflags", "rflags"];
const SEGMENT_NAMES: [&str; 6] = ["ss", "cs", "ds", "es", "fs", "gs"];
// Prefix group 2 bytes in SEGMENT_NAMES order.
const SEGMENT_PREFIX: [u8; 6] = [0x36, 0x2E, 0x3E, 0x26, 0x64, 0x65];

// ─── Immediates ─────────────────────────────────────────────────────────────

/// A signed immediate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Int(pub i64);

/// An unsigned immediate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uint(pub u64);

impl Int {
    /// Smallest size that represents the value.
    #[must_use]
    pub const fn min_size(self) -> Size {
        let v = self.0;
        if 0 <= v && v <= 0b1111 {
            Size::S4
        } else if i8::MIN as i64 <= v && v <= i8::MAX as i64 {
            S8
        } else if i16::MIN as i64 <= v && v <= i16::MAX as i64 {
            S16
        } else if i32::MIN as i64 <= v && v <= i32::MAX as i64 {
            S32
        } else {
            S64
        }
    }

    /// Match against a parameter descriptor.
    ///
    /// Non-negative values fall back to the unsigned rule when the slot is
    /// not sign-extending, so that e.g. `200` still matches a plain `imm8`.
    #[must_use]
    pub fn matches(self, p: Param) -> bool {
        if p.kind() != Kind::Imm {
            return false;
        }
        if p.is_const() {
            return self.0 >= 0 && self.0 as u64 == u64::from(p.const_bits());
        }
        let s = p.imm_size();
        if p.extended_size() == S0 && self.0 >= 0 {
            return s >= Uint(self.0 as u64).min_size();
        }
        s >= self.min_size()
    }

    /// Write the value little-endian at the given width, returning the byte
    /// count written.
    pub(crate) fn encode(self, out: &mut [u8], size: Size) -> usize {
        encode_int(out, self.0 as u64, size)
    }
}

impl Uint {
    /// Smallest size that represents the value.
    #[must_use]
    pub const fn min_size(self) -> Size {
        let v = self.0;
        if v <= 0b1111 {
            Size::S4
        } else if v <= u8::MAX as u64 {
            S8
        } else if v <= u16::MAX as u64 {
            S16
        } else if v <= u32::MAX as u64 {
            S32
        } else {
            S64
        }
    }

    /// Match against a parameter descriptor.
    ///
    /// When the slot sign-extends to a wider destination, an unsigned value
    /// also matches if its bits above the slot width are all ones in the
    /// destination width — i.e. it is the two's-complement form of a negative
    /// number that fits. This is what lets `mov r64, 0xFFFFFFFFFFFFFFFF`
    /// select the `imm32` sign-extended form.
    #[must_use]
    pub fn matches(self, p: Param) -> bool {
        if p.kind() != Kind::Imm {
            return false;
        }
        if p.is_const() {
            return self.0 == u64::from(p.const_bits());
        }
        let (s, es) = (p.imm_size(), p.extended_size());
        if es > s {
            let b = s.imm_bits() - 1;
            let n = self.0 >> b;
            return n == 0 || n == es.max_uint() >> b;
        }
        s >= self.min_size()
    }

    /// Write the value little-endian at the given width, returning the byte
    /// count written.
    pub(crate) fn encode(self, out: &mut [u8], size: Size) -> usize {
        encode_int(out, self.0, size)
    }
}

fn encode_int(out: &mut [u8], v: u64, size: Size) -> usize {
    let n = size.bytes();
    match size {
        Size::S0 => {
            // imm4 payload: merged into the high nibble of the register byte.
            out[0] = ((v as u8) << 4) | (out[0] & 0b1111);
        }
        S8 => out[0] = v as u8,
        S16 => out[..2].copy_from_slice(&(v as u16).to_le_bytes()),
        S32 => out[..4].copy_from_slice(&(v as u32).to_le_bytes()),
        S64 => out[..8].copy_from_slice(&v.to_le_bytes()),
        _ => unreachable!("invalid immediate size"),
    }
    n
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Memory ─────────────────────────────────────────────────────────────────

/// A memory reference: `size [segment: base + index*scale + disp]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mem {
    /// Base register (required; 32- or 64-bit general, or IP for
    /// RIP-relative addressing).
    pub base: Reg,
    /// Optional index register.
    pub index: Option<Reg>,
    /// Scale factor (1, 2, 4, or 8); meaningful only with an index.
    pub scale: u8,
    /// Signed 32-bit displacement.
    pub disp: i32,
    /// Optional segment override.
    pub segment: Option<Reg>,
    /// Referenced memory width ([`Size::S0`] when unspecified).
    pub size: Size,
    /// EVEX broadcast request (`{1toN}`): the element at `base` is repeated
    /// to fill the vector width.
    pub broadcast: bool,
}

impl Mem {
    /// Start a memory reference from a base register.
    #[must_use]
    pub const fn base(base: Reg) -> Mem {
        Mem {
            base,
            index: None,
            scale: 0,
            disp: 0,
            segment: None,
            size: S0,
            broadcast: false,
        }
    }

    /// Add an index register with a scale factor.
    #[must_use]
    pub const fn index(mut self, index: Reg, scale: u8) -> Mem {
        self.index = Some(index);
        self.scale = scale;
        self
    }

    /// Set the displacement.
    #[must_use]
    pub const fn disp(mut self, disp: i32) -> Mem {
        self.disp = disp;
        self
    }

    /// Set a segment override.
    #[must_use]
    pub const fn segment(mut self, segment: Reg) -> Mem {
        self.segment = Some(segment);
        self
    }

    /// Set the referenced memory width.
    #[must_use]
    pub const fn size(mut self, size: Size) -> Mem {
        self.size = size;
        self
    }

    /// Request EVEX broadcast.
    #[must_use]
    pub const fn broadcast(mut self) -> Mem {
        self.broadcast = true;
        self
    }

    /// Check the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the specific violation: missing/invalid base, base/index size
    /// mismatch, scale without index, unsupported scale, or an index that
    /// cannot be encoded.
    pub fn validate(&self) -> Result<(), AsmError> {
        if self.base.validate().is_err() {
            return Err(AsmError::MissingMemBase);
        }

        let bs = self.base.size();
        if !self.base.is_ip() && bs != S64 && bs != S32 {
            return Err(AsmError::InvalidMemBase { size: bs });
        }

        match self.index {
            None => {
                if self.scale != 0 {
                    return Err(AsmError::ScaleWithoutIndex);
                }
            }
            Some(index) => {
                // IP-relative addressing has no index component.
                if self.base.is_ip() {
                    return Err(AsmError::UnsupportedIndex { reg: index });
                }
                if index.size() != bs {
                    return Err(AsmError::IndexSizeMismatch {
                        base: bs,
                        index: index.size(),
                    });
                }
                if !matches!(self.scale, 1 | 2 | 4 | 8) {
                    return Err(AsmError::InvalidScale { scale: self.scale });
                }
                // SIB index 100 selects "no index"; RSP can never be an
                // index, and nothing with a .4 number can be at scale 1.
                if matches!(index.ty(), RegType::General) && index.id() == 0b100 {
                    return Err(AsmError::UnsupportedIndex { reg: index });
                }
                if self.scale == 1 && index.low3() == 0b100 {
                    return Err(AsmError::UnsupportedIndex { reg: index });
                }
            }
        }

        Ok(())
    }

    /// Match against a parameter descriptor.
    #[must_use]
    pub fn matches(self, p: Param) -> bool {
        if p.kind() != Kind::Mem {
            return false;
        }

        if p.mem_kind() == MemKind::Offset && self.segment.is_none() {
            return false;
        }

        if p.mem_kind() == MemKind::Broadcast && self.broadcast {
            return self.size == S0 || self.size == p.mem_elem_size();
        }
        if self.broadcast {
            return false;
        }

        let (s, ms) = (p.mem_size(), self.size);
        if ms == S0 {
            return true;
        }
        if s > S0 {
            return s == ms;
        }
        S16 <= ms && ms <= S64
    }
}

impl fmt::Display for Mem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MEM_NAMES: [&str; 8] = [
            "",
            "BYTE PTR",
            "WORD PTR",
            "DWORD PTR",
            "QWORD PTR",
            "XMMWORD PTR",
            "YMMWORD PTR",
            "ZMMWORD PTR",
        ];
        if self.size > S0 {
            write!(f, "{} ", MEM_NAMES[self.size as usize])?;
        }
        write!(f, "[{}", self.base)?;
        if let Some(index) = self.index {
            write!(f, " + {}", index)?;
            if self.scale > 1 {
                write!(f, "*{}", self.scale)?;
            }
        }
        if self.disp != 0 {
            if self.disp > 0 {
                write!(f, " + {}", self.disp)?;
            } else {
                write!(f, " - {}", -i64::from(self.disp))?;
            }
        }
        write!(f, "]")
    }
}

// ─── Labels and relative offsets ────────────────────────────────────────────

/// An opaque label name, resolved by the assembler to a relative
/// displacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label(pub Rc<str>);

impl Label {
    /// Create a label from a name.
    #[must_use]
    pub fn new(name: &str) -> Label {
        Label(Rc::from(name))
    }

    /// The label name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relative displacement bounds. Backward displacements leave headroom for
/// the branch instruction itself, which is not included in the slot sums
/// when it is still being encoded.
pub(crate) const MAX_REL8: i64 = i8::MAX as i64;
pub(crate) const MIN_REL8: i64 = i8::MIN as i64 + 2;
pub(crate) const MAX_REL32: i64 = i32::MAX as i64;
pub(crate) const MIN_REL32: i64 = i32::MIN as i64 + 6;

fn rel_fwd_matches(r: i64, p: Param) -> bool {
    if p.kind() != Kind::Rel {
        return false;
    }
    match p.imm_size() {
        S8 => (0..=MAX_REL8).contains(&r),
        S32 => (0..=MAX_REL32).contains(&r),
        _ => false,
    }
}

fn rel_rwd_matches(r: i64, p: Param) -> bool {
    if p.kind() != Kind::Rel {
        return false;
    }
    match p.imm_size() {
        S8 => (MIN_REL8..=0).contains(&r),
        S32 => (MIN_REL32..=0).contains(&r),
        _ => false,
    }
}

// ─── Misc modifiers ─────────────────────────────────────────────────────────

/// Modifier pseudo-operands used by EVEX rounding forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Misc {
    /// `{sae}` — suppress all exceptions.
    Sae = 1,
    /// `{er}` — embedded rounding control.
    Er = 2,
}

impl Misc {
    /// Match against a parameter descriptor.
    #[must_use]
    pub fn matches(self, p: Param) -> bool {
        p.kind() == Kind::Misc && p.0 as u16 == self as u16
    }
}

impl fmt::Display for Misc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Misc::Sae => write!(f, "{{sae}}"),
            Misc::Er => write!(f, "{{er}}"),
        }
    }
}

// ─── Operand ────────────────────────────────────────────────────────────────

/// An instruction argument.
///
/// `RelFwd`/`RelRwd` are produced by the assembler when it resolves a
/// [`Label`] into a concrete forward/backward byte displacement; callers
/// normally pass labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Signed immediate.
    Imm(Int),
    /// Unsigned immediate.
    UImm(Uint),
    /// Register.
    Reg(Reg),
    /// Memory reference.
    Mem(Mem),
    /// Branch target by name.
    Label(Label),
    /// Resolved forward displacement (≥ 0).
    RelFwd(i64),
    /// Resolved backward displacement (≤ 0).
    RelRwd(i64),
    /// EVEX modifier.
    Misc(Misc),
}

impl Operand {
    /// Convenience constructor for a label operand.
    #[must_use]
    pub fn label(name: &str) -> Operand {
        Operand::Label(Label::new(name))
    }

    /// The coarse operand kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Operand::Imm(_) | Operand::UImm(_) => Kind::Imm,
            Operand::Reg(_) => Kind::Reg,
            Operand::Mem(_) => Kind::Mem,
            Operand::Label(_) | Operand::RelFwd(_) | Operand::RelRwd(_) => Kind::Rel,
            Operand::Misc(_) => Kind::Misc,
        }
    }

    /// The explicit size the operand carries, if any.
    ///
    /// Immediates carry only a *minimum* size and report [`Size::S0`] here;
    /// this is what makes `MOV [RBX], 123` ambiguous while
    /// `MOV qword [RBX], 123` is not.
    #[must_use]
    pub fn size(&self) -> Size {
        match self {
            Operand::Reg(r) => r.size(),
            Operand::Mem(m) => m.size,
            _ => S0,
        }
    }

    /// Validate the operand in isolation.
    ///
    /// # Errors
    ///
    /// Returns the register or memory violation, if any.
    pub fn validate(&self) -> Result<(), AsmError> {
        match self {
            Operand::Reg(r) => r.validate(),
            Operand::Mem(m) => m.validate(),
            _ => Ok(()),
        }
    }

    /// Match against a parameter descriptor.
    #[must_use]
    pub fn matches(&self, p: Param) -> bool {
        match self {
            Operand::Imm(i) => i.matches(p),
            Operand::UImm(u) => u.matches(p),
            Operand::Reg(r) => r.matches(p),
            Operand::Mem(m) => m.matches(p),
            Operand::Label(_) => false,
            Operand::RelFwd(r) => rel_fwd_matches(*r, p),
            Operand::RelRwd(r) => rel_rwd_matches(*r, p),
            Operand::Misc(m) => m.matches(p),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Imm(v) => write!(f, "{}", v),
            Operand::UImm(v) => write!(f, "{}", v),
            Operand::Reg(r) => write!(f, "{}", r),
            Operand::Mem(m) => write!(f, "{}", m),
            Operand::Label(l) => write!(f, "{}", l),
            Operand::RelFwd(r) | Operand::RelRwd(r) => write!(f, "{}", r),
            Operand::Misc(m) => write!(f, "{}", m),
        }
    }
}

impl From<Reg> for Operand {
    fn from(r: Reg) -> Operand {
        Operand::Reg(r)
    }
}

impl From<Mem> for Operand {
    fn from(m: Mem) -> Operand {
        Operand::Mem(m)
    }
}

impl From<Int> for Operand {
    fn from(i: Int) -> Operand {
        Operand::Imm(i)
    }
}

impl From<Uint> for Operand {
    fn from(u: Uint) -> Operand {
        Operand::UImm(u)
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Operand {
        Operand::Imm(Int(v))
    }
}

impl From<u64> for Operand {
    fn from(v: u64) -> Operand {
        Operand::UImm(Uint(v))
    }
}

impl From<Label> for Operand {
    fn from(l: Label) -> Operand {
        Operand::Label(l)
    }
}

impl From<Misc> for Operand {
    fn from(m: Misc) -> Operand {
        Operand::Misc(m)
    }
}

// ─── Parameter descriptors ──────────────────────────────────────────────────

/// Memory parameter flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MemKind {
    /// Plain sized memory operand.
    General = 0,
    /// Segment-relative offset (`moffs*`).
    Offset = 1,
    /// 80-bit x87 operand.
    Float80 = 2,
    /// Vector memory with optional element broadcast (`m512/m32bcst`).
    Broadcast = 3,
    /// VSIB with 32-bit indices (`vm32*`).
    Vector32 = 4,
    /// VSIB with 64-bit indices (`vm64*`).
    Vector64 = 5,
}

/// Bit-packed form-parameter descriptor.
///
/// ```text
///      27  26  25  24  23  22  21  19 18  16 15             0
///     ╭───┬───┬───┬───┬───┬───┬───────┬──────┬───────────────╮
///     │ C ╎ I ╎ W ╎ R ╎ Z ╎ K ╎ ESIZE ╎ KIND │   KIND BITS   │
///     ╰───┴───┴───┴───┴───┴───┴───────┴──────┴───────────────╯
/// ```
///
/// `KIND BITS` hold 16 bits of kind-specific values — for register
/// parameters the packed register identity, for memory parameters the size,
/// element size, target size, and [`MemKind`], for immediates the size (and
/// the constant value for const parameters), for relative offsets the size.
///
/// `ESIZE` is the extension size of sign-extending immediate slots. `K`/`Z`
/// mark opmask acceptance, `R`/`W` input/output, `I` implicit operands
/// (present in the form but not passed as arguments), and `C` exact-value
/// const parameters such as `al` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param(pub(crate) u32);

const P_KIND_SHIFT: u32 = 16;
const P_KIND_MASK: u32 = 0b111 << P_KIND_SHIFT;
const P_ESIZE_SHIFT: u32 = P_KIND_SHIFT + 3;
const P_MASKED: u32 = 1 << 22;
const P_MERGED: u32 = 1 << 23;
const P_INPUT: u32 = 1 << 24;
const P_OUTPUT: u32 = 1 << 25;
const P_IMPLICIT: u32 = 1 << 26;
const P_CONST: u32 = 1 << 27;

const PK_MISC: u32 = 1 << P_KIND_SHIFT;
const PK_IMM: u32 = 2 << P_KIND_SHIFT;
const PK_REG: u32 = 3 << P_KIND_SHIFT;
const PK_MEM: u32 = 4 << P_KIND_SHIFT;
const PK_REL: u32 = 5 << P_KIND_SHIFT;

const M_ELEM_SHIFT: u32 = Size::BITS;
const M_TARGET_SHIFT: u32 = M_ELEM_SHIFT + Size::BITS;
const M_KIND_SHIFT: u32 = M_TARGET_SHIFT + Size::BITS;

impl Param {
    /// An immediate slot of the given size.
    #[must_use]
    pub const fn imm(size: Size) -> Param {
        Param(PK_IMM | size as u32)
    }

    /// An immediate slot sign-extended to a wider destination.
    #[must_use]
    pub const fn imm_sx(size: Size, ext: Size) -> Param {
        Param(PK_IMM | size as u32 | ((ext as u32) << P_ESIZE_SHIFT))
    }

    /// An exact-value immediate parameter (`1`, `3`).
    #[must_use]
    pub const fn imm_const(v: u16) -> Param {
        Param(PK_IMM | P_CONST | v as u32)
    }

    /// A register slot matching by class and size.
    #[must_use]
    pub const fn reg(ty: RegType, size: Size) -> Param {
        Param(PK_REG | ((ty as u32) << R_TYPE_SHIFT) | size as u32)
    }

    /// An exact-register parameter (`al`, `cl`, …).
    #[must_use]
    pub const fn reg_const(r: Reg) -> Param {
        Param(PK_REG | P_CONST | (r.0 & 0xFFFF))
    }

    /// A plain memory slot of the given size ([`Size::S0`] = any size).
    #[must_use]
    pub const fn mem(size: Size) -> Param {
        Param(PK_MEM | size as u32)
    }

    /// A segment-relative offset slot (`moffs*`).
    #[must_use]
    pub const fn moffs(size: Size) -> Param {
        Param(PK_MEM | ((MemKind::Offset as u32) << M_KIND_SHIFT) | size as u32)
    }

    /// An 80-bit x87 memory slot.
    #[must_use]
    pub const fn m80() -> Param {
        Param(PK_MEM | ((MemKind::Float80 as u32) << M_KIND_SHIFT))
    }

    /// A vector memory slot with optional element broadcast.
    #[must_use]
    pub const fn mem_bcst(size: Size, elem: Size) -> Param {
        Param(
            PK_MEM
                | ((MemKind::Broadcast as u32) << M_KIND_SHIFT)
                | ((elem as u32) << M_ELEM_SHIFT)
                | size as u32,
        )
    }

    /// A VSIB slot with the given index width (32 or 64) and target vector
    /// size.
    #[must_use]
    pub const fn vmem(index: Size, target: Size) -> Param {
        let kind = match index {
            S32 => MemKind::Vector32,
            _ => MemKind::Vector64,
        };
        Param(PK_MEM | ((kind as u32) << M_KIND_SHIFT) | ((target as u32) << M_TARGET_SHIFT))
    }

    /// A code-offset slot of the given size.
    #[must_use]
    pub const fn rel(size: Size) -> Param {
        Param(PK_REL | size as u32)
    }

    /// A modifier slot (`{sae}`, `{er}`).
    #[must_use]
    pub const fn misc(m: Misc) -> Param {
        Param(PK_MISC | m as u32)
    }

    /// Allow a zeroing opmask on this slot (`{k}{z}`).
    #[must_use]
    pub const fn masked(self) -> Param {
        Param(self.0 | P_MASKED)
    }

    /// Allow a merging opmask on this slot (`{k}`).
    #[must_use]
    pub const fn merge_masked(self) -> Param {
        Param(self.0 | P_MASKED | P_MERGED)
    }

    /// Mark the slot implicit — fixed by the form, not passed by callers.
    #[must_use]
    pub const fn implicit(self) -> Param {
        Param(self.0 | P_IMPLICIT)
    }

    /// Mark the slot as read by the instruction.
    #[must_use]
    pub const fn input(self) -> Param {
        Param(self.0 | P_INPUT)
    }

    /// Mark the slot as written by the instruction.
    #[must_use]
    pub const fn output(self) -> Param {
        Param(self.0 | P_OUTPUT)
    }

    /// The coarse kind of the slot.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self.0 & P_KIND_MASK {
            PK_IMM => Kind::Imm,
            PK_REG => Kind::Reg,
            PK_MEM => Kind::Mem,
            PK_REL => Kind::Rel,
            _ => Kind::Misc,
        }
    }

    /// Whether the slot is an exact-value parameter.
    #[must_use]
    pub const fn is_const(self) -> bool {
        self.0 & P_CONST != 0
    }

    /// Whether the slot is implicit (not passed as an argument).
    #[must_use]
    pub const fn is_implicit(self) -> bool {
        self.0 & P_IMPLICIT != 0
    }

    /// Whether the slot accepts an opmask.
    #[must_use]
    pub const fn is_masked(self) -> bool {
        self.0 & P_MASKED != 0
    }

    /// The immediate/register/relative size field.
    #[must_use]
    pub const fn imm_size(self) -> Size {
        Size::from_bits(self.0 as u8)
    }

    /// The sign-extension destination size for immediate slots.
    #[must_use]
    pub const fn extended_size(self) -> Size {
        Size::from_bits(((self.0 >> P_ESIZE_SHIFT) & Size::MASK) as u8)
    }

    /// The constant payload of const parameters.
    #[must_use]
    pub const fn const_bits(self) -> u16 {
        self.0 as u16
    }

    /// The memory size field.
    #[must_use]
    pub const fn mem_size(self) -> Size {
        Size::from_bits(self.0 as u8)
    }

    /// The broadcast element size of `m*/m*bcst` slots.
    #[must_use]
    pub const fn mem_elem_size(self) -> Size {
        Size::from_bits(((self.0 >> M_ELEM_SHIFT) & Size::MASK) as u8)
    }

    /// The target vector size of VSIB slots.
    #[must_use]
    pub const fn mem_target_size(self) -> Size {
        Size::from_bits(((self.0 >> M_TARGET_SHIFT) & Size::MASK) as u8)
    }

    /// The memory flavor.
    #[must_use]
    pub const fn mem_kind(self) -> MemKind {
        match (self.0 >> M_KIND_SHIFT) & 0b111 {
            1 => MemKind::Offset,
            2 => MemKind::Float80,
            3 => MemKind::Broadcast,
            4 => MemKind::Vector32,
            5 => MemKind::Vector64,
            _ => MemKind::General,
        }
    }

    /// Look up a parameter descriptor by its catalogue type name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Param> {
        PARAM_TYPES
            .binary_search_by_key(&name, |&(n, _)| n)
            .ok()
            .map(|i| PARAM_TYPES[i].1)
    }
}

/// The catalogue parameter-type vocabulary, sorted by name for binary
/// search.
pub(crate) static PARAM_TYPES: &[(&str, Param)] = &[
    ("1", Param::imm_const(1)),
    ("3", Param::imm_const(3)),
    ("al", Param::reg_const(AL)),
    ("ax", Param::reg_const(AX)),
    ("cl", Param::reg_const(CL)),
    ("dx", Param::reg_const(DX)),
    ("eax", Param::reg_const(EAX)),
    ("ebx", Param::reg_const(EBX)),
    ("ecx", Param::reg_const(ECX)),
    ("edx", Param::reg_const(EDX)),
    ("imm16", Param::imm(S16)),
    ("imm32", Param::imm(S32)),
    ("imm4", Param::imm(Size::S4)),
    ("imm64", Param::imm(S64)),
    ("imm8", Param::imm(S8)),
    ("k", Param::reg(RegType::Mask, S64)),
    ("k{k}", Param::reg(RegType::Mask, S64).merge_masked()),
    ("m", Param::mem(S0)),
    ("m128", Param::mem(S128)),
    ("m128/m32bcst", Param::mem_bcst(S128, S32)),
    ("m128/m64bcst", Param::mem_bcst(S128, S64)),
    ("m128{k}{z}", Param::mem(S128).masked()),
    ("m16", Param::mem(S16)),
    ("m16{k}{z}", Param::mem(S16).masked()),
    ("m256", Param::mem(S256)),
    ("m256/m32bcst", Param::mem_bcst(S256, S32)),
    ("m256/m64bcst", Param::mem_bcst(S256, S64)),
    ("m256{k}{z}", Param::mem(S256).masked()),
    ("m32", Param::mem(S32)),
    ("m32{k}", Param::mem(S32).merge_masked()),
    ("m32{k}{z}", Param::mem(S32).masked()),
    ("m512", Param::mem(S512)),
    ("m512/m32bcst", Param::mem_bcst(S512, S32)),
    ("m512/m64bcst", Param::mem_bcst(S512, S64)),
    ("m512{k}{z}", Param::mem(S512).masked()),
    ("m64", Param::mem(S64)),
    ("m64/m32bcst", Param::mem_bcst(S64, S32)),
    ("m64{k}", Param::mem(S64).merge_masked()),
    ("m64{k}{z}", Param::mem(S64).masked()),
    ("m8", Param::mem(S8)),
    ("m80", Param::m80()),
    ("mm", Param::reg(RegType::Vector, S64)),
    ("moffs16", Param::moffs(S16)),
    ("moffs32", Param::moffs(S32)),
    ("moffs64", Param::moffs(S64)),
    ("moffs8", Param::moffs(S8)),
    ("r11", Param::reg_const(R11)),
    ("r16", Param::reg(RegType::General, S16)),
    ("r32", Param::reg(RegType::General, S32)),
    ("r64", Param::reg(RegType::General, S64)),
    ("r8", Param::reg(RegType::General, S8)),
    ("rax", Param::reg_const(RAX)),
    ("rbx", Param::reg_const(RBX)),
    ("rcx", Param::reg_const(RCX)),
    ("rdi", Param::reg_const(RDI)),
    ("rdx", Param::reg_const(RDX)),
    ("rel32", Param::rel(S32)),
    ("rel8", Param::rel(S8)),
    ("vm32x", Param::vmem(S32, S128)),
    ("vm32x{k}", Param::vmem(S32, S128).merge_masked()),
    ("vm32y", Param::vmem(S32, S256)),
    ("vm32y{k}", Param::vmem(S32, S256).merge_masked()),
    ("vm32z", Param::vmem(S32, S512)),
    ("vm32z{k}", Param::vmem(S32, S512).merge_masked()),
    ("vm64x", Param::vmem(S64, S128)),
    ("vm64x{k}", Param::vmem(S64, S128).merge_masked()),
    ("vm64y", Param::vmem(S64, S256)),
    ("vm64y{k}", Param::vmem(S64, S256).merge_masked()),
    ("vm64z", Param::vmem(S64, S512)),
    ("vm64z{k}", Param::vmem(S64, S512).merge_masked()),
    ("xmm", Param::reg(RegType::Vector, S128)),
    ("xmm0", Param::reg_const(XMM0)),
    ("xmm{k}", Param::reg(RegType::Vector, S128).merge_masked()),
    ("xmm{k}{z}", Param::reg(RegType::Vector, S128).masked()),
    ("ymm", Param::reg(RegType::Vector, S256)),
    ("ymm{k}", Param::reg(RegType::Vector, S256).merge_masked()),
    ("ymm{k}{z}", Param::reg(RegType::Vector, S256).masked()),
    ("zmm", Param::reg(RegType::Vector, S512)),
    ("zmm{k}", Param::reg(RegType::Vector, S512).merge_masked()),
    ("zmm{k}{z}", Param::reg(RegType::Vector, S512).masked()),
    ("{er}", Param::misc(Misc::Er)),
    ("{sae}", Param::misc(Misc::Sae)),
];
