//! Instruction catalogue and form selection.
//!
//! Every mnemonic maps to an ordered list of [`Form`]s. Within a list, forms
//! are sorted by encoding cost ([`Encoding::cost`]) so that the selector's
//! first match is the shortest encoding. The table layout follows the
//! upstream opcode catalogue: register and memory variants are separate
//! forms, each carrying its own complete encoding recipe.
//!
//! The whole catalogue is `const`-built static data — immutable after
//! startup and freely shareable across threads.

use crate::encoding::{
    Encoding, EvexDesc, ExDesc, Format, ImmDesc, ModRmDesc, OffsetDesc, Opt, RexDesc, VexDesc,
};
use crate::error::AsmError;
use crate::operand::{
    Kind, Operand, Param, RegType, Size, AL, AX, CL, EAX, ECX, RAX, S0, S128, S16, S256, S32,
    S512, S64, S8,
};
use alloc::string::String;

// ─── Form ───────────────────────────────────────────────────────────────────

/// Fixed-capacity parameter signature (at most 6 operands).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamList {
    val: [Param; 6],
    len: u8,
}

impl ParamList {
    const fn new(params: &[Param]) -> ParamList {
        let mut val = [Param::imm(S0); 6];
        let mut i = 0;
        while i < params.len() {
            val[i] = params[i];
            i += 1;
        }
        ParamList {
            val,
            len: params.len() as u8,
        }
    }

    /// The parameter descriptors.
    #[must_use]
    pub fn as_slice(&self) -> &[Param] {
        &self.val[..self.len as usize]
    }
}

/// One encodable form of a mnemonic: a parameter signature plus an encoding
/// recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Form {
    params: ParamList,
    /// Declared operand size; a 16↔32 mismatch with the instruction-set
    /// default operand size emits the 0x66 override.
    op_size: Size,
    enc: Encoding,
}

impl Form {
    const fn new(params: &[Param]) -> Form {
        Form {
            params: ParamList::new(params),
            op_size: S0,
            enc: Encoding::EMPTY,
        }
    }

    /// The parameter signature.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        self.params.as_slice()
    }

    /// The encoding recipe.
    #[must_use]
    pub fn encoding(&self) -> &Encoding {
        &self.enc
    }

    /// Encoding cost, used for form ordering.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.enc.cost()
    }

    /// Number of parameters an argument list must supply (implicit slots are
    /// baked into the form).
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params()
            .iter()
            .filter(|p| !p.is_implicit())
            .count()
    }

    /// Whether the argument list matches this form's signature.
    #[must_use]
    pub fn matches(&self, args: &[Operand]) -> bool {
        let mut a = 0;
        for p in self.params() {
            if p.is_implicit() {
                continue;
            }
            match args.get(a) {
                Some(arg) if arg.matches(*p) => a += 1,
                _ => return false,
            }
        }
        a == args.len()
    }

    /// Encode this form against concrete arguments.
    ///
    /// # Errors
    ///
    /// Propagates encoding failures (high-byte register meeting REX, or an
    /// instruction longer than 15 bytes).
    pub fn encode(&self, default_size: Size, args: &[Operand]) -> Result<Format, AsmError> {
        let osz66 = (self.op_size == S16 && default_size == S32)
            || (self.op_size == S32 && default_size == S16);
        self.enc.encode(args, osz66)
    }

    // ── const builders ──────────────────────────────────────────────────

    const fn osz16(mut self) -> Form {
        self.op_size = S16;
        self
    }

    const fn pfx(mut self, b: u8) -> Form {
        self.enc.prefixes[self.enc.prefix_len as usize] = b;
        self.enc.prefix_len += 1;
        self
    }

    const fn op(mut self, bytes: &[u8]) -> Form {
        let mut i = 0;
        while i < bytes.len() {
            self.enc.opcodes[i] = bytes[i];
            i += 1;
        }
        self.enc.opcode_len = bytes.len() as u8;
        self
    }

    /// Merge the low 3 bits of the register at operand `i` into the last
    /// opcode byte.
    const fn addend(mut self, i: u8) -> Form {
        self.enc.addend = Opt::Arg(i);
        self
    }

    /// REX with a literal W and no operand references.
    const fn rex(mut self, w: u8) -> Form {
        self.enc.ex = ExDesc::Rex(RexDesc {
            w,
            r: Opt::None,
            x: Opt::None,
            b: Opt::None,
        });
        self
    }

    /// REX with R referencing operand `r` and X/B referencing operand `rm`.
    const fn rex_rb(mut self, w: u8, r: u8, rm: u8) -> Form {
        self.enc.ex = ExDesc::Rex(RexDesc {
            w,
            r: Opt::Arg(r),
            x: Opt::Arg(rm),
            b: Opt::Arg(rm),
        });
        self
    }

    /// REX with X/B referencing operand `rm` (no reg-field operand).
    const fn rex_b(mut self, w: u8, rm: u8) -> Form {
        self.enc.ex = ExDesc::Rex(RexDesc {
            w,
            r: Opt::None,
            x: Opt::Arg(rm),
            b: Opt::Arg(rm),
        });
        self
    }

    /// VEX scaffold: opcode map, implied prefix, vector length, W.
    const fn vex(mut self, mp: u8, pp: u8, l: u8, w: u8) -> Form {
        self.enc.ex = ExDesc::Vex(VexDesc {
            mp,
            pp,
            l,
            w,
            r: Opt::None,
            x: Opt::None,
            b: Opt::None,
            v: Opt::None,
        });
        self
    }

    /// VEX R/vvvv/X+B operand references (reg, non-destructive source, r/m).
    const fn vex_rvm(mut self, r: u8, v: u8, rm: u8) -> Form {
        if let ExDesc::Vex(mut d) = self.enc.ex {
            d.r = Opt::Arg(r);
            d.v = Opt::Arg(v);
            d.x = Opt::Arg(rm);
            d.b = Opt::Arg(rm);
            self.enc.ex = ExDesc::Vex(d);
        }
        self
    }

    /// VEX R and X+B operand references (no vvvv operand).
    const fn vex_rm(mut self, r: u8, rm: u8) -> Form {
        if let ExDesc::Vex(mut d) = self.enc.ex {
            d.r = Opt::Arg(r);
            d.x = Opt::Arg(rm);
            d.b = Opt::Arg(rm);
            self.enc.ex = ExDesc::Vex(d);
        }
        self
    }

    /// EVEX scaffold: escape, implied prefix, W, vector length, disp8×N.
    const fn evex(mut self, mm: u8, pp: u8, w: u8, ll: u8, disp8xn: u8) -> Form {
        self.enc.ex = ExDesc::Evex(EvexDesc {
            mm,
            pp,
            w,
            ll,
            rr: Opt::None,
            x: Opt::None,
            b: Opt::None,
            v: Opt::None,
            z: Opt::None,
            bcast: Opt::None,
            aaa: Opt::None,
            disp8xn,
        });
        self
    }

    /// EVEX operand references: masked destination `r`, vvvv source `v`,
    /// r/m (and broadcast) source `rm`.
    const fn evex_rvm(mut self, r: u8, v: u8, rm: u8) -> Form {
        if let ExDesc::Evex(mut d) = self.enc.ex {
            d.rr = Opt::Arg(r);
            d.v = Opt::Arg(v);
            d.x = Opt::Arg(rm);
            d.b = Opt::Arg(rm);
            d.z = Opt::Arg(r);
            d.aaa = Opt::Arg(r);
            d.bcast = Opt::Arg(rm);
            self.enc.ex = ExDesc::Evex(d);
        }
        self
    }

    /// Register-direct ModR/M: reg field from operand `reg`, rm from
    /// operand `rm`.
    const fn modrm_rr(mut self, reg: u8, rm: u8) -> Form {
        self.enc.modrm = ModRmDesc {
            mode: Opt::Val(0b11),
            reg: Opt::Arg(reg),
            rm: Opt::Arg(rm),
        };
        self
    }

    /// Memory ModR/M: reg field from operand `reg`, addressing mode from
    /// the memory operand `mem`.
    const fn modrm_rm(mut self, reg: u8, mem: u8) -> Form {
        self.enc.modrm = ModRmDesc {
            mode: Opt::Arg(mem),
            reg: Opt::Arg(reg),
            rm: Opt::Arg(mem),
        };
        self
    }

    /// Register-direct ModR/M with a literal opcode extension in reg.
    const fn modrm_xr(mut self, ext: u8, rm: u8) -> Form {
        self.enc.modrm = ModRmDesc {
            mode: Opt::Val(0b11),
            reg: Opt::Val(ext),
            rm: Opt::Arg(rm),
        };
        self
    }

    /// Memory ModR/M with a literal opcode extension in reg.
    const fn modrm_xm(mut self, ext: u8, mem: u8) -> Form {
        self.enc.modrm = ModRmDesc {
            mode: Opt::Arg(mem),
            reg: Opt::Val(ext),
            rm: Opt::Arg(mem),
        };
        self
    }

    /// Immediate slot referencing operand `i`.
    const fn imm(mut self, size: Size, i: u8) -> Form {
        self.enc.imms[self.enc.imm_len as usize] = ImmDesc {
            size,
            value: Opt::Arg(i),
        };
        self.enc.imm_len += 1;
        self
    }

    /// Code-offset slot referencing operand `i`.
    const fn rel(mut self, size: Size, i: u8) -> Form {
        self.enc.code_offset = OffsetDesc {
            size,
            value: Opt::Arg(i),
        };
        self
    }
}

// ─── Instruction sets ───────────────────────────────────────────────────────

/// All forms of one mnemonic.
#[derive(Debug, Clone, Copy)]
pub struct InstSet {
    /// Uppercase mnemonic.
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    /// Default operand size of the instruction set (16↔32 mismatches with a
    /// form's declared size emit the 0x66 override).
    pub default_size: Size,
    /// Forms sorted by encoding cost.
    pub forms: &'static [Form],
}

impl InstSet {
    /// Pick the lowest-cost form matching the argument list.
    ///
    /// # Errors
    ///
    /// Returns the first argument-validation error, an
    /// [`AsmError::AmbiguousOperandSize`] when a memory operand is present
    /// but nothing carries an explicit size, or
    /// [`AsmError::UnsupportedInstruction`] when no form matches.
    pub fn select(&self, args: &[Operand]) -> Result<&Form, AsmError> {
        let mut sized = false;
        let mut mems = false;
        for arg in args {
            arg.validate()?;
            if arg.size() > S0 {
                sized = true;
            }
            if arg.kind() == Kind::Mem {
                mems = true;
            }
        }
        if mems && !sized {
            return Err(AsmError::AmbiguousOperandSize {
                mnemonic: String::from(self.name),
            });
        }

        for form in self.forms {
            if form.matches(args) {
                return Ok(form);
            }
        }

        Err(AsmError::UnsupportedInstruction {
            mnemonic: String::from(self.name),
        })
    }

    /// Select and encode in one step.
    ///
    /// # Errors
    ///
    /// Propagates selection and encoding errors.
    pub fn encode(&self, args: &[Operand]) -> Result<Format, AsmError> {
        self.select(args)?.encode(self.default_size, args)
    }
}

/// Look up an instruction set by mnemonic (case-insensitive).
#[must_use]
pub fn lookup(mnemonic: &str) -> Option<&'static InstSet> {
    INSTRUCTIONS
        .binary_search_by(|probe| cmp_mnemonic(probe.name, mnemonic))
        .ok()
        .map(|i| &INSTRUCTIONS[i])
}

/// The full catalogue, sorted by mnemonic.
#[must_use]
pub fn instructions() -> &'static [InstSet] {
    INSTRUCTIONS
}

fn cmp_mnemonic(entry: &str, query: &str) -> core::cmp::Ordering {
    let mut e = entry.bytes();
    let mut q = query.bytes();
    loop {
        match (e.next(), q.next()) {
            (None, None) => return core::cmp::Ordering::Equal,
            (None, Some(_)) => return core::cmp::Ordering::Less,
            (Some(_), None) => return core::cmp::Ordering::Greater,
            (Some(a), Some(b)) => {
                let b = b.to_ascii_uppercase();
                if a != b {
                    return a.cmp(&b);
                }
            }
        }
    }
}

// ─── Parameter shorthands ───────────────────────────────────────────────────

const GP8: Param = Param::reg(RegType::General, S8);
const GP16: Param = Param::reg(RegType::General, S16);
const GP32: Param = Param::reg(RegType::General, S32);
const GP64: Param = Param::reg(RegType::General, S64);
const XMM: Param = Param::reg(RegType::Vector, S128);
const YMM: Param = Param::reg(RegType::Vector, S256);
const ZMM: Param = Param::reg(RegType::Vector, S512);
const ZMM_KZ: Param = Param::reg(RegType::Vector, S512).masked();

const C_AL: Param = Param::reg_const(AL);
const C_CL: Param = Param::reg_const(CL);
const C_AX: Param = Param::reg_const(AX);
const C_EAX: Param = Param::reg_const(EAX);
const C_ECX: Param = Param::reg_const(ECX);
const C_RAX: Param = Param::reg_const(RAX);
const C_1: Param = Param::imm_const(1);
const C_3: Param = Param::imm_const(3);

const IMM8: Param = Param::imm(S8);
const IMM16: Param = Param::imm(S16);
const IMM32: Param = Param::imm(S32);
const IMM64: Param = Param::imm(S64);
const IMM8SX16: Param = Param::imm_sx(S8, S16);
const IMM8SX32: Param = Param::imm_sx(S8, S32);
const IMM8SX64: Param = Param::imm_sx(S8, S64);
const IMM32SX64: Param = Param::imm_sx(S32, S64);

const M_ANY: Param = Param::mem(S0);
const M8: Param = Param::mem(S8);
const M16: Param = Param::mem(S16);
const M32: Param = Param::mem(S32);
const M64: Param = Param::mem(S64);
const M128: Param = Param::mem(S128);
const M256: Param = Param::mem(S256);
const M512B32: Param = Param::mem_bcst(S512, S32);
const M512B64: Param = Param::mem_bcst(S512, S64);

const REL8: Param = Param::rel(S8);
const REL32: Param = Param::rel(S32);

// ─── Form-family generators ─────────────────────────────────────────────────

/// The classic two-operand ALU family (ADD/OR/ADC/SBB/AND/SUB/XOR/CMP).
///
/// `b` is the base opcode (the MR r/m8 form); `ext` the /digit used by the
/// 0x80/0x81/0x83 immediate group.
const fn alu(b: u8, ext: u8) -> [Form; 30] {
    [
        Form::new(&[C_AL, IMM8]).op(&[b + 4]).imm(S8, 1),
        Form::new(&[C_AX, IMM16]).osz16().op(&[b + 5]).imm(S16, 1),
        Form::new(&[GP8, GP8]).rex_rb(0, 1, 0).op(&[b]).modrm_rr(1, 0),
        Form::new(&[GP16, GP16]).osz16().rex_rb(0, 1, 0).op(&[b + 1]).modrm_rr(1, 0),
        Form::new(&[GP32, GP32]).rex_rb(0, 1, 0).op(&[b + 1]).modrm_rr(1, 0),
        Form::new(&[GP64, GP64]).rex_rb(1, 1, 0).op(&[b + 1]).modrm_rr(1, 0),
        Form::new(&[GP8, M8]).rex_rb(0, 0, 1).op(&[b + 2]).modrm_rm(0, 1),
        Form::new(&[GP16, M16]).osz16().rex_rb(0, 0, 1).op(&[b + 3]).modrm_rm(0, 1),
        Form::new(&[GP32, M32]).rex_rb(0, 0, 1).op(&[b + 3]).modrm_rm(0, 1),
        Form::new(&[GP64, M64]).rex_rb(1, 0, 1).op(&[b + 3]).modrm_rm(0, 1),
        Form::new(&[GP8, IMM8]).rex_b(0, 0).op(&[0x80]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[GP16, IMM8SX16]).osz16().rex_b(0, 0).op(&[0x83]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[GP32, IMM8SX32]).rex_b(0, 0).op(&[0x83]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[GP64, IMM8SX64]).rex_b(1, 0).op(&[0x83]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[M8, GP8]).rex_rb(0, 1, 0).op(&[b]).modrm_rm(1, 0),
        Form::new(&[M16, GP16]).osz16().rex_rb(0, 1, 0).op(&[b + 1]).modrm_rm(1, 0),
        Form::new(&[M32, GP32]).rex_rb(0, 1, 0).op(&[b + 1]).modrm_rm(1, 0),
        Form::new(&[M64, GP64]).rex_rb(1, 1, 0).op(&[b + 1]).modrm_rm(1, 0),
        Form::new(&[C_EAX, IMM32]).op(&[b + 5]).imm(S32, 1),
        Form::new(&[M8, IMM8]).rex_b(0, 0).op(&[0x80]).modrm_xm(ext, 0).imm(S8, 1),
        Form::new(&[M16, IMM8SX16]).osz16().rex_b(0, 0).op(&[0x83]).modrm_xm(ext, 0).imm(S8, 1),
        Form::new(&[M32, IMM8SX32]).rex_b(0, 0).op(&[0x83]).modrm_xm(ext, 0).imm(S8, 1),
        Form::new(&[M64, IMM8SX64]).rex_b(1, 0).op(&[0x83]).modrm_xm(ext, 0).imm(S8, 1),
        Form::new(&[GP16, IMM16]).osz16().rex_b(0, 0).op(&[0x81]).modrm_xr(ext, 0).imm(S16, 1),
        Form::new(&[C_RAX, IMM32SX64]).rex(1).op(&[b + 5]).imm(S32, 1),
        Form::new(&[M16, IMM16]).osz16().rex_b(0, 0).op(&[0x81]).modrm_xm(ext, 0).imm(S16, 1),
        Form::new(&[GP32, IMM32]).rex_b(0, 0).op(&[0x81]).modrm_xr(ext, 0).imm(S32, 1),
        Form::new(&[GP64, IMM32SX64]).rex_b(1, 0).op(&[0x81]).modrm_xr(ext, 0).imm(S32, 1),
        Form::new(&[M32, IMM32]).rex_b(0, 0).op(&[0x81]).modrm_xm(ext, 0).imm(S32, 1),
        Form::new(&[M64, IMM32SX64]).rex_b(1, 0).op(&[0x81]).modrm_xm(ext, 0).imm(S32, 1),
    ]
}

/// Shift/rotate family (/digit of the D0–D3 and C0/C1 groups).
const fn shift(ext: u8) -> [Form; 24] {
    [
        Form::new(&[GP8, C_1]).rex_b(0, 0).op(&[0xD0]).modrm_xr(ext, 0),
        Form::new(&[GP16, C_1]).osz16().rex_b(0, 0).op(&[0xD1]).modrm_xr(ext, 0),
        Form::new(&[GP32, C_1]).rex_b(0, 0).op(&[0xD1]).modrm_xr(ext, 0),
        Form::new(&[GP64, C_1]).rex_b(1, 0).op(&[0xD1]).modrm_xr(ext, 0),
        Form::new(&[GP8, C_CL]).rex_b(0, 0).op(&[0xD2]).modrm_xr(ext, 0),
        Form::new(&[GP16, C_CL]).osz16().rex_b(0, 0).op(&[0xD3]).modrm_xr(ext, 0),
        Form::new(&[GP32, C_CL]).rex_b(0, 0).op(&[0xD3]).modrm_xr(ext, 0),
        Form::new(&[GP64, C_CL]).rex_b(1, 0).op(&[0xD3]).modrm_xr(ext, 0),
        Form::new(&[M8, C_1]).rex_b(0, 0).op(&[0xD0]).modrm_xm(ext, 0),
        Form::new(&[M16, C_1]).osz16().rex_b(0, 0).op(&[0xD1]).modrm_xm(ext, 0),
        Form::new(&[M32, C_1]).rex_b(0, 0).op(&[0xD1]).modrm_xm(ext, 0),
        Form::new(&[M64, C_1]).rex_b(1, 0).op(&[0xD1]).modrm_xm(ext, 0),
        Form::new(&[M8, C_CL]).rex_b(0, 0).op(&[0xD2]).modrm_xm(ext, 0),
        Form::new(&[M16, C_CL]).osz16().rex_b(0, 0).op(&[0xD3]).modrm_xm(ext, 0),
        Form::new(&[M32, C_CL]).rex_b(0, 0).op(&[0xD3]).modrm_xm(ext, 0),
        Form::new(&[M64, C_CL]).rex_b(1, 0).op(&[0xD3]).modrm_xm(ext, 0),
        Form::new(&[GP8, IMM8]).rex_b(0, 0).op(&[0xC0]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[GP16, IMM8]).osz16().rex_b(0, 0).op(&[0xC1]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[GP32, IMM8]).rex_b(0, 0).op(&[0xC1]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[GP64, IMM8]).rex_b(1, 0).op(&[0xC1]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[M8, IMM8]).rex_b(0, 0).op(&[0xC0]).modrm_xm(ext, 0).imm(S8, 1),
        Form::new(&[M16, IMM8]).osz16().rex_b(0, 0).op(&[0xC1]).modrm_xm(ext, 0).imm(S8, 1),
        Form::new(&[M32, IMM8]).rex_b(0, 0).op(&[0xC1]).modrm_xm(ext, 0).imm(S8, 1),
        Form::new(&[M64, IMM8]).rex_b(1, 0).op(&[0xC1]).modrm_xm(ext, 0).imm(S8, 1),
    ]
}

/// One-operand F6/F7 group (/digit): NOT, NEG, MUL, DIV, IDIV and the
/// single-operand IMUL.
const fn unary(ext: u8) -> [Form; 8] {
    [
        Form::new(&[GP8]).rex_b(0, 0).op(&[0xF6]).modrm_xr(ext, 0),
        Form::new(&[GP16]).osz16().rex_b(0, 0).op(&[0xF7]).modrm_xr(ext, 0),
        Form::new(&[GP32]).rex_b(0, 0).op(&[0xF7]).modrm_xr(ext, 0),
        Form::new(&[GP64]).rex_b(1, 0).op(&[0xF7]).modrm_xr(ext, 0),
        Form::new(&[M8]).rex_b(0, 0).op(&[0xF6]).modrm_xm(ext, 0),
        Form::new(&[M16]).osz16().rex_b(0, 0).op(&[0xF7]).modrm_xm(ext, 0),
        Form::new(&[M32]).rex_b(0, 0).op(&[0xF7]).modrm_xm(ext, 0),
        Form::new(&[M64]).rex_b(1, 0).op(&[0xF7]).modrm_xm(ext, 0),
    ]
}

/// INC/DEC (FE/FF /digit).
const fn inc_dec(ext: u8) -> [Form; 8] {
    [
        Form::new(&[GP8]).rex_b(0, 0).op(&[0xFE]).modrm_xr(ext, 0),
        Form::new(&[GP16]).osz16().rex_b(0, 0).op(&[0xFF]).modrm_xr(ext, 0),
        Form::new(&[GP32]).rex_b(0, 0).op(&[0xFF]).modrm_xr(ext, 0),
        Form::new(&[GP64]).rex_b(1, 0).op(&[0xFF]).modrm_xr(ext, 0),
        Form::new(&[M8]).rex_b(0, 0).op(&[0xFE]).modrm_xm(ext, 0),
        Form::new(&[M16]).osz16().rex_b(0, 0).op(&[0xFF]).modrm_xm(ext, 0),
        Form::new(&[M32]).rex_b(0, 0).op(&[0xFF]).modrm_xm(ext, 0),
        Form::new(&[M64]).rex_b(1, 0).op(&[0xFF]).modrm_xm(ext, 0),
    ]
}

/// Conditional branch: rel8 then rel32.
const fn jcc(cc: u8) -> [Form; 2] {
    [
        Form::new(&[REL8]).op(&[0x70 + cc]).rel(S8, 0),
        Form::new(&[REL32]).op(&[0x0F, 0x80 + cc]).rel(S32, 0),
    ]
}

/// SETcc r/m8.
const fn setcc(cc: u8) -> [Form; 2] {
    [
        Form::new(&[GP8]).rex_b(0, 0).op(&[0x0F, 0x90 + cc]).modrm_xr(0, 0),
        Form::new(&[M8]).rex_b(0, 0).op(&[0x0F, 0x90 + cc]).modrm_xm(0, 0),
    ]
}

/// CMOVcc r32/r64, r/m.
const fn cmovcc(cc: u8) -> [Form; 4] {
    [
        Form::new(&[GP32, GP32]).rex_rb(0, 0, 1).op(&[0x0F, 0x40 + cc]).modrm_rr(0, 1),
        Form::new(&[GP64, GP64]).rex_rb(1, 0, 1).op(&[0x0F, 0x40 + cc]).modrm_rr(0, 1),
        Form::new(&[GP32, M32]).rex_rb(0, 0, 1).op(&[0x0F, 0x40 + cc]).modrm_rm(0, 1),
        Form::new(&[GP64, M64]).rex_rb(1, 0, 1).op(&[0x0F, 0x40 + cc]).modrm_rm(0, 1),
    ]
}

/// BT/BTS/BTR/BTC: MR forms plus the 0F BA immediate group.
const fn btx(op: u8, ext: u8) -> [Form; 8] {
    [
        Form::new(&[GP32, GP32]).rex_rb(0, 1, 0).op(&[0x0F, op]).modrm_rr(1, 0),
        Form::new(&[GP64, GP64]).rex_rb(1, 1, 0).op(&[0x0F, op]).modrm_rr(1, 0),
        Form::new(&[GP32, IMM8]).rex_b(0, 0).op(&[0x0F, 0xBA]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[GP64, IMM8]).rex_b(1, 0).op(&[0x0F, 0xBA]).modrm_xr(ext, 0).imm(S8, 1),
        Form::new(&[M32, GP32]).rex_rb(0, 1, 0).op(&[0x0F, op]).modrm_rm(1, 0),
        Form::new(&[M64, GP64]).rex_rb(1, 1, 0).op(&[0x0F, op]).modrm_rm(1, 0),
        Form::new(&[M32, IMM8]).rex_b(0, 0).op(&[0x0F, 0xBA]).modrm_xm(ext, 0).imm(S8, 1),
        Form::new(&[M64, IMM8]).rex_b(1, 0).op(&[0x0F, 0xBA]).modrm_xm(ext, 0).imm(S8, 1),
    ]
}

/// Two-byte-opcode RM bit scanners (BSF/BSR and the F3-prefixed counters).
const fn bitscan(pfx: u8, op: u8) -> [Form; 4] {
    [
        bitscan_form(&[GP32, GP32], pfx, 0, op, false),
        bitscan_form(&[GP64, GP64], pfx, 1, op, false),
        bitscan_form(&[GP32, M32], pfx, 0, op, true),
        bitscan_form(&[GP64, M64], pfx, 1, op, true),
    ]
}

const fn bitscan_form(params: &[Param], pfx: u8, w: u8, op: u8, mem: bool) -> Form {
    let mut f = Form::new(params);
    if pfx != 0 {
        f = f.pfx(pfx);
    }
    f = f.rex_rb(w, 0, 1).op(&[0x0F, op]);
    if mem {
        f.modrm_rm(0, 1)
    } else {
        f.modrm_rr(0, 1)
    }
}

/// Legacy SSE RM arithmetic: `op xmm, xmm/mN` with an optional mandatory
/// prefix.
const fn sse_rm(pfx: u8, op: u8, msize: Size) -> [Form; 2] {
    [
        sse_form(&[XMM, XMM], pfx, op, false),
        sse_form_sized(pfx, op, msize),
    ]
}

const fn sse_form(params: &[Param], pfx: u8, op: u8, mem: bool) -> Form {
    let mut f = Form::new(params);
    if pfx != 0 {
        f = f.pfx(pfx);
    }
    f = f.rex_rb(0, 0, 1).op(&[0x0F, op]);
    if mem {
        f.modrm_rm(0, 1)
    } else {
        f.modrm_rr(0, 1)
    }
}

const fn sse_form_sized(pfx: u8, op: u8, msize: Size) -> Form {
    let m = Param::mem(msize);
    let mut f = Form::new(&[XMM, m]);
    if pfx != 0 {
        f = f.pfx(pfx);
    }
    f.rex_rb(0, 0, 1).op(&[0x0F, op]).modrm_rm(0, 1)
}

/// VEX RVM arithmetic over 128- and 256-bit registers.
const fn vex_rvm(pp: u8, op: u8) -> [Form; 4] {
    [
        Form::new(&[XMM, XMM, XMM]).vex(1, pp, 0, 0).vex_rvm(0, 1, 2).op(&[op]).modrm_rr(0, 2),
        Form::new(&[YMM, YMM, YMM]).vex(1, pp, 1, 0).vex_rvm(0, 1, 2).op(&[op]).modrm_rr(0, 2),
        Form::new(&[XMM, XMM, M128]).vex(1, pp, 0, 0).vex_rvm(0, 1, 2).op(&[op]).modrm_rm(0, 2),
        Form::new(&[YMM, YMM, M256]).vex(1, pp, 1, 0).vex_rvm(0, 1, 2).op(&[op]).modrm_rm(0, 2),
    ]
}

/// EVEX RVM arithmetic over 512-bit registers with element broadcast.
const fn evex_rvm512(pp: u8, w: u8, op: u8, belem: Size) -> [Form; 2] {
    let m = match belem {
        S64 => M512B64,
        _ => M512B32,
    };
    [
        Form::new(&[ZMM_KZ, ZMM, ZMM]).evex(1, pp, w, 2, 64).evex_rvm(0, 1, 2).op(&[op]).modrm_rr(0, 2),
        Form::new(&[ZMM_KZ, ZMM, m]).evex(1, pp, w, 2, 64).evex_rvm(0, 1, 2).op(&[op]).modrm_rm(0, 2),
    ]
}

/// VEX 128/256 plus EVEX 512 forms of one packed-arithmetic mnemonic.
const fn vex_evex(pp: u8, w_evex: u8, op: u8, belem: Size) -> [Form; 6] {
    let vex = vex_rvm(pp, op);
    let evex = evex_rvm512(pp, w_evex, op, belem);
    [vex[0], vex[1], vex[2], vex[3], evex[0], evex[1]]
}

// ─── Form tables ────────────────────────────────────────────────────────────

const fn fixed(bytes: &[u8]) -> [Form; 1] {
    [Form::new(&[]).op(bytes)]
}

const fn fixed_pfx(pfx: u8, bytes: &[u8]) -> [Form; 1] {
    [Form::new(&[]).pfx(pfx).op(bytes)]
}

static ADC_FORMS: [Form; 30] = alu(0x10, 2);
static ADD_FORMS: [Form; 30] = alu(0x00, 0);
static ADDPD_FORMS: [Form; 2] = sse_rm(0x66, 0x58, S128);
static ADDPS_FORMS: [Form; 2] = sse_rm(0, 0x58, S128);
static ADDSD_FORMS: [Form; 2] = sse_rm(0xF2, 0x58, S64);
static ADDSS_FORMS: [Form; 2] = sse_rm(0xF3, 0x58, S32);
static AND_FORMS: [Form; 30] = alu(0x20, 4);
static BSF_FORMS: [Form; 4] = bitscan(0, 0xBC);
static BSR_FORMS: [Form; 4] = bitscan(0, 0xBD);
static BT_FORMS: [Form; 8] = btx(0xA3, 4);
static BTC_FORMS: [Form; 8] = btx(0xBB, 7);
static BTR_FORMS: [Form; 8] = btx(0xB3, 6);
static BTS_FORMS: [Form; 8] = btx(0xAB, 5);
static CALL_FORMS: [Form; 3] = [
    Form::new(&[GP64]).rex_b(0, 0).op(&[0xFF]).modrm_xr(2, 0),
    Form::new(&[M64]).rex_b(0, 0).op(&[0xFF]).modrm_xm(2, 0),
    Form::new(&[REL32]).op(&[0xE8]).rel(S32, 0),
];
static CBW_FORMS: [Form; 1] = fixed_pfx(0x66, &[0x98]);
static CDQ_FORMS: [Form; 1] = fixed(&[0x99]);
static CDQE_FORMS: [Form; 1] = [Form::new(&[]).rex(1).op(&[0x98])];
static CLC_FORMS: [Form; 1] = fixed(&[0xF8]);
static CLD_FORMS: [Form; 1] = fixed(&[0xFC]);
static CMC_FORMS: [Form; 1] = fixed(&[0xF5]);
static CMOV_A: [Form; 4] = cmovcc(0x7);
static CMOV_AE: [Form; 4] = cmovcc(0x3);
static CMOV_B: [Form; 4] = cmovcc(0x2);
static CMOV_BE: [Form; 4] = cmovcc(0x6);
static CMOV_E: [Form; 4] = cmovcc(0x4);
static CMOV_G: [Form; 4] = cmovcc(0xF);
static CMOV_GE: [Form; 4] = cmovcc(0xD);
static CMOV_L: [Form; 4] = cmovcc(0xC);
static CMOV_LE: [Form; 4] = cmovcc(0xE);
static CMOV_NE: [Form; 4] = cmovcc(0x5);
static CMOV_NO: [Form; 4] = cmovcc(0x1);
static CMOV_NP: [Form; 4] = cmovcc(0xB);
static CMOV_NS: [Form; 4] = cmovcc(0x9);
static CMOV_O: [Form; 4] = cmovcc(0x0);
static CMOV_P: [Form; 4] = cmovcc(0xA);
static CMOV_S: [Form; 4] = cmovcc(0x8);
static CMP_FORMS: [Form; 30] = alu(0x38, 7);
static CPUID_FORMS: [Form; 1] = [Form::new(&[
    C_EAX.implicit().input().output(),
    C_ECX.implicit().input(),
])
.op(&[0x0F, 0xA2])];
static CQO_FORMS: [Form; 1] = [Form::new(&[]).rex(1).op(&[0x99])];
static CWD_FORMS: [Form; 1] = fixed_pfx(0x66, &[0x99]);
static CWDE_FORMS: [Form; 1] = fixed(&[0x98]);
static DEC_FORMS: [Form; 8] = inc_dec(1);
static DIV_FORMS: [Form; 8] = unary(6);
static DIVPD_FORMS: [Form; 2] = sse_rm(0x66, 0x5E, S128);
static DIVPS_FORMS: [Form; 2] = sse_rm(0, 0x5E, S128);
static EMMS_FORMS: [Form; 1] = fixed(&[0x0F, 0x77]);
static ENDBR64_FORMS: [Form; 1] = fixed_pfx(0xF3, &[0x0F, 0x1E, 0xFA]);
static HLT_FORMS: [Form; 1] = fixed(&[0xF4]);
static IDIV_FORMS: [Form; 8] = unary(7);
static IMUL_FORMS: [Form; 20] = [
    Form::new(&[GP8]).rex_b(0, 0).op(&[0xF6]).modrm_xr(5, 0),
    Form::new(&[GP16]).osz16().rex_b(0, 0).op(&[0xF7]).modrm_xr(5, 0),
    Form::new(&[GP32]).rex_b(0, 0).op(&[0xF7]).modrm_xr(5, 0),
    Form::new(&[GP64]).rex_b(1, 0).op(&[0xF7]).modrm_xr(5, 0),
    Form::new(&[M8]).rex_b(0, 0).op(&[0xF6]).modrm_xm(5, 0),
    Form::new(&[M16]).osz16().rex_b(0, 0).op(&[0xF7]).modrm_xm(5, 0),
    Form::new(&[M32]).rex_b(0, 0).op(&[0xF7]).modrm_xm(5, 0),
    Form::new(&[M64]).rex_b(1, 0).op(&[0xF7]).modrm_xm(5, 0),
    Form::new(&[GP32, GP32]).rex_rb(0, 0, 1).op(&[0x0F, 0xAF]).modrm_rr(0, 1),
    Form::new(&[GP64, GP64]).rex_rb(1, 0, 1).op(&[0x0F, 0xAF]).modrm_rr(0, 1),
    Form::new(&[GP32, GP32, IMM8SX32]).rex_rb(0, 0, 1).op(&[0x6B]).modrm_rr(0, 1).imm(S8, 2),
    Form::new(&[GP64, GP64, IMM8SX64]).rex_rb(1, 0, 1).op(&[0x6B]).modrm_rr(0, 1).imm(S8, 2),
    Form::new(&[GP32, M32]).rex_rb(0, 0, 1).op(&[0x0F, 0xAF]).modrm_rm(0, 1),
    Form::new(&[GP64, M64]).rex_rb(1, 0, 1).op(&[0x0F, 0xAF]).modrm_rm(0, 1),
    Form::new(&[GP32, M32, IMM8SX32]).rex_rb(0, 0, 1).op(&[0x6B]).modrm_rm(0, 1).imm(S8, 2),
    Form::new(&[GP64, M64, IMM8SX64]).rex_rb(1, 0, 1).op(&[0x6B]).modrm_rm(0, 1).imm(S8, 2),
    Form::new(&[GP32, GP32, IMM32]).rex_rb(0, 0, 1).op(&[0x69]).modrm_rr(0, 1).imm(S32, 2),
    Form::new(&[GP64, GP64, IMM32SX64]).rex_rb(1, 0, 1).op(&[0x69]).modrm_rr(0, 1).imm(S32, 2),
    Form::new(&[GP32, M32, IMM32]).rex_rb(0, 0, 1).op(&[0x69]).modrm_rm(0, 1).imm(S32, 2),
    Form::new(&[GP64, M64, IMM32SX64]).rex_rb(1, 0, 1).op(&[0x69]).modrm_rm(0, 1).imm(S32, 2),
];
static INC_FORMS: [Form; 8] = inc_dec(0);
static INT_FORMS: [Form; 2] = [
    Form::new(&[C_3]).op(&[0xCC]),
    Form::new(&[IMM8]).op(&[0xCD]).imm(S8, 0),
];
static INT3_FORMS: [Form; 1] = fixed(&[0xCC]);
static J_A: [Form; 2] = jcc(0x7);
static J_AE: [Form; 2] = jcc(0x3);
static J_B: [Form; 2] = jcc(0x2);
static J_BE: [Form; 2] = jcc(0x6);
static J_E: [Form; 2] = jcc(0x4);
static J_G: [Form; 2] = jcc(0xF);
static J_GE: [Form; 2] = jcc(0xD);
static J_L: [Form; 2] = jcc(0xC);
static J_LE: [Form; 2] = jcc(0xE);
static J_NE: [Form; 2] = jcc(0x5);
static J_NO: [Form; 2] = jcc(0x1);
static J_NP: [Form; 2] = jcc(0xB);
static J_NS: [Form; 2] = jcc(0x9);
static J_O: [Form; 2] = jcc(0x0);
static J_P: [Form; 2] = jcc(0xA);
static J_S: [Form; 2] = jcc(0x8);
static JMP_FORMS: [Form; 4] = [
    Form::new(&[REL8]).op(&[0xEB]).rel(S8, 0),
    Form::new(&[GP64]).rex_b(0, 0).op(&[0xFF]).modrm_xr(4, 0),
    Form::new(&[M64]).rex_b(0, 0).op(&[0xFF]).modrm_xm(4, 0),
    Form::new(&[REL32]).op(&[0xE9]).rel(S32, 0),
];
static LEA_FORMS: [Form; 3] = [
    Form::new(&[GP16, M_ANY]).osz16().rex_rb(0, 0, 1).op(&[0x8D]).modrm_rm(0, 1),
    Form::new(&[GP32, M_ANY]).rex_rb(0, 0, 1).op(&[0x8D]).modrm_rm(0, 1),
    Form::new(&[GP64, M_ANY]).rex_rb(1, 0, 1).op(&[0x8D]).modrm_rm(0, 1),
];
static LEAVE_FORMS: [Form; 1] = fixed(&[0xC9]);
static LFENCE_FORMS: [Form; 1] = fixed(&[0x0F, 0xAE, 0xE8]);
static LZCNT_FORMS: [Form; 4] = bitscan(0xF3, 0xBD);
static MFENCE_FORMS: [Form; 1] = fixed(&[0x0F, 0xAE, 0xF0]);
static MOV_FORMS: [Form; 21] = [
    Form::new(&[GP8, IMM8]).rex_b(0, 0).op(&[0xB0]).addend(0).imm(S8, 1),
    Form::new(&[GP16, IMM16]).osz16().rex_b(0, 0).op(&[0xB8]).addend(0).imm(S16, 1),
    Form::new(&[GP8, GP8]).rex_rb(0, 1, 0).op(&[0x88]).modrm_rr(1, 0),
    Form::new(&[GP16, GP16]).osz16().rex_rb(0, 1, 0).op(&[0x89]).modrm_rr(1, 0),
    Form::new(&[GP32, GP32]).rex_rb(0, 1, 0).op(&[0x89]).modrm_rr(1, 0),
    Form::new(&[GP64, GP64]).rex_rb(1, 1, 0).op(&[0x89]).modrm_rr(1, 0),
    Form::new(&[GP8, M8]).rex_rb(0, 0, 1).op(&[0x8A]).modrm_rm(0, 1),
    Form::new(&[GP16, M16]).osz16().rex_rb(0, 0, 1).op(&[0x8B]).modrm_rm(0, 1),
    Form::new(&[GP32, M32]).rex_rb(0, 0, 1).op(&[0x8B]).modrm_rm(0, 1),
    Form::new(&[GP64, M64]).rex_rb(1, 0, 1).op(&[0x8B]).modrm_rm(0, 1),
    Form::new(&[M8, GP8]).rex_rb(0, 1, 0).op(&[0x88]).modrm_rm(1, 0),
    Form::new(&[M16, GP16]).osz16().rex_rb(0, 1, 0).op(&[0x89]).modrm_rm(1, 0),
    Form::new(&[M32, GP32]).rex_rb(0, 1, 0).op(&[0x89]).modrm_rm(1, 0),
    Form::new(&[M64, GP64]).rex_rb(1, 1, 0).op(&[0x89]).modrm_rm(1, 0),
    Form::new(&[GP32, IMM32]).rex_b(0, 0).op(&[0xB8]).addend(0).imm(S32, 1),
    Form::new(&[M8, IMM8]).rex_b(0, 0).op(&[0xC6]).modrm_xm(0, 0).imm(S8, 1),
    Form::new(&[M16, IMM16]).osz16().rex_b(0, 0).op(&[0xC7]).modrm_xm(0, 0).imm(S16, 1),
    Form::new(&[GP64, IMM32SX64]).rex_b(1, 0).op(&[0xC7]).modrm_xr(0, 0).imm(S32, 1),
    Form::new(&[M32, IMM32]).rex_b(0, 0).op(&[0xC7]).modrm_xm(0, 0).imm(S32, 1),
    Form::new(&[M64, IMM32SX64]).rex_b(1, 0).op(&[0xC7]).modrm_xm(0, 0).imm(S32, 1),
    Form::new(&[GP64, IMM64]).rex_b(1, 0).op(&[0xB8]).addend(0).imm(S64, 1),
];
static MOVAPS_FORMS: [Form; 3] = [
    sse_form(&[XMM, XMM], 0, 0x28, false),
    sse_form(&[XMM, M128], 0, 0x28, true),
    Form::new(&[M128, XMM]).rex_rb(0, 1, 0).op(&[0x0F, 0x29]).modrm_rm(1, 0),
];
static MOVD_FORMS: [Form; 4] = [
    Form::new(&[XMM, GP32]).pfx(0x66).rex_rb(0, 0, 1).op(&[0x0F, 0x6E]).modrm_rr(0, 1),
    Form::new(&[GP32, XMM]).pfx(0x66).rex_rb(0, 1, 0).op(&[0x0F, 0x7E]).modrm_rr(1, 0),
    Form::new(&[XMM, M32]).pfx(0x66).rex_rb(0, 0, 1).op(&[0x0F, 0x6E]).modrm_rm(0, 1),
    Form::new(&[M32, XMM]).pfx(0x66).rex_rb(0, 1, 0).op(&[0x0F, 0x7E]).modrm_rm(1, 0),
];
static MOVDQA_FORMS: [Form; 3] = [
    sse_form(&[XMM, XMM], 0x66, 0x6F, false),
    sse_form(&[XMM, M128], 0x66, 0x6F, true),
    Form::new(&[M128, XMM]).pfx(0x66).rex_rb(0, 1, 0).op(&[0x0F, 0x7F]).modrm_rm(1, 0),
];
static MOVDQU_FORMS: [Form; 3] = [
    sse_form(&[XMM, XMM], 0xF3, 0x6F, false),
    sse_form(&[XMM, M128], 0xF3, 0x6F, true),
    Form::new(&[M128, XMM]).pfx(0xF3).rex_rb(0, 1, 0).op(&[0x0F, 0x7F]).modrm_rm(1, 0),
];
static MOVQ_FORMS: [Form; 5] = [
    Form::new(&[XMM, GP64]).pfx(0x66).rex_rb(1, 0, 1).op(&[0x0F, 0x6E]).modrm_rr(0, 1),
    Form::new(&[GP64, XMM]).pfx(0x66).rex_rb(1, 1, 0).op(&[0x0F, 0x7E]).modrm_rr(1, 0),
    Form::new(&[XMM, XMM]).pfx(0xF3).rex_rb(0, 0, 1).op(&[0x0F, 0x7E]).modrm_rr(0, 1),
    Form::new(&[XMM, M64]).pfx(0xF3).rex_rb(0, 0, 1).op(&[0x0F, 0x7E]).modrm_rm(0, 1),
    Form::new(&[M64, XMM]).pfx(0x66).rex_rb(0, 1, 0).op(&[0x0F, 0xD6]).modrm_rm(1, 0),
];
static MOVSX_FORMS: [Form; 8] = [
    Form::new(&[GP32, GP8]).rex_rb(0, 0, 1).op(&[0x0F, 0xBE]).modrm_rr(0, 1),
    Form::new(&[GP64, GP8]).rex_rb(1, 0, 1).op(&[0x0F, 0xBE]).modrm_rr(0, 1),
    Form::new(&[GP32, GP16]).rex_rb(0, 0, 1).op(&[0x0F, 0xBF]).modrm_rr(0, 1),
    Form::new(&[GP64, GP16]).rex_rb(1, 0, 1).op(&[0x0F, 0xBF]).modrm_rr(0, 1),
    Form::new(&[GP32, M8]).rex_rb(0, 0, 1).op(&[0x0F, 0xBE]).modrm_rm(0, 1),
    Form::new(&[GP64, M8]).rex_rb(1, 0, 1).op(&[0x0F, 0xBE]).modrm_rm(0, 1),
    Form::new(&[GP32, M16]).rex_rb(0, 0, 1).op(&[0x0F, 0xBF]).modrm_rm(0, 1),
    Form::new(&[GP64, M16]).rex_rb(1, 0, 1).op(&[0x0F, 0xBF]).modrm_rm(0, 1),
];
static MOVSXD_FORMS: [Form; 2] = [
    Form::new(&[GP64, GP32]).rex_rb(1, 0, 1).op(&[0x63]).modrm_rr(0, 1),
    Form::new(&[GP64, M32]).rex_rb(1, 0, 1).op(&[0x63]).modrm_rm(0, 1),
];
static MOVUPS_FORMS: [Form; 3] = [
    sse_form(&[XMM, XMM], 0, 0x10, false),
    sse_form(&[XMM, M128], 0, 0x10, true),
    Form::new(&[M128, XMM]).rex_rb(0, 1, 0).op(&[0x0F, 0x11]).modrm_rm(1, 0),
];
static MOVZX_FORMS: [Form; 8] = [
    Form::new(&[GP32, GP8]).rex_rb(0, 0, 1).op(&[0x0F, 0xB6]).modrm_rr(0, 1),
    Form::new(&[GP64, GP8]).rex_rb(1, 0, 1).op(&[0x0F, 0xB6]).modrm_rr(0, 1),
    Form::new(&[GP32, GP16]).rex_rb(0, 0, 1).op(&[0x0F, 0xB7]).modrm_rr(0, 1),
    Form::new(&[GP64, GP16]).rex_rb(1, 0, 1).op(&[0x0F, 0xB7]).modrm_rr(0, 1),
    Form::new(&[GP32, M8]).rex_rb(0, 0, 1).op(&[0x0F, 0xB6]).modrm_rm(0, 1),
    Form::new(&[GP64, M8]).rex_rb(1, 0, 1).op(&[0x0F, 0xB6]).modrm_rm(0, 1),
    Form::new(&[GP32, M16]).rex_rb(0, 0, 1).op(&[0x0F, 0xB7]).modrm_rm(0, 1),
    Form::new(&[GP64, M16]).rex_rb(1, 0, 1).op(&[0x0F, 0xB7]).modrm_rm(0, 1),
];
static MUL_FORMS: [Form; 8] = unary(4);
static MULPD_FORMS: [Form; 2] = sse_rm(0x66, 0x59, S128);
static MULPS_FORMS: [Form; 2] = sse_rm(0, 0x59, S128);
static MULSD_FORMS: [Form; 2] = sse_rm(0xF2, 0x59, S64);
static MULSS_FORMS: [Form; 2] = sse_rm(0xF3, 0x59, S32);
static NEG_FORMS: [Form; 8] = unary(3);
static NOP_FORMS: [Form; 3] = [
    Form::new(&[]).op(&[0x90]),
    Form::new(&[GP32]).rex_b(0, 0).op(&[0x0F, 0x1F]).modrm_xr(0, 0),
    Form::new(&[M32]).rex_b(0, 0).op(&[0x0F, 0x1F]).modrm_xm(0, 0),
];
static NOT_FORMS: [Form; 8] = unary(2);
static OR_FORMS: [Form; 30] = alu(0x08, 1);
static PADDB_FORMS: [Form; 2] = sse_rm(0x66, 0xFC, S128);
static PADDD_FORMS: [Form; 2] = sse_rm(0x66, 0xFE, S128);
static PADDQ_FORMS: [Form; 2] = sse_rm(0x66, 0xD4, S128);
static PADDW_FORMS: [Form; 2] = sse_rm(0x66, 0xFD, S128);
static PAND_FORMS: [Form; 2] = sse_rm(0x66, 0xDB, S128);
static PANDN_FORMS: [Form; 2] = sse_rm(0x66, 0xDF, S128);
static PAUSE_FORMS: [Form; 1] = fixed_pfx(0xF3, &[0x90]);
static PCMPEQB_FORMS: [Form; 2] = sse_rm(0x66, 0x74, S128);
static PCMPEQD_FORMS: [Form; 2] = sse_rm(0x66, 0x76, S128);
static POP_FORMS: [Form; 2] = [
    Form::new(&[GP64]).rex_b(0, 0).op(&[0x58]).addend(0),
    Form::new(&[M64]).rex_b(0, 0).op(&[0x8F]).modrm_xm(0, 0),
];
static POPCNT_FORMS: [Form; 4] = bitscan(0xF3, 0xB8);
static POR_FORMS: [Form; 2] = sse_rm(0x66, 0xEB, S128);
static PSUBB_FORMS: [Form; 2] = sse_rm(0x66, 0xF8, S128);
static PSUBD_FORMS: [Form; 2] = sse_rm(0x66, 0xFA, S128);
static PSUBQ_FORMS: [Form; 2] = sse_rm(0x66, 0xFB, S128);
static PSUBW_FORMS: [Form; 2] = sse_rm(0x66, 0xF9, S128);
static PUSH_FORMS: [Form; 4] = [
    Form::new(&[GP64]).rex_b(0, 0).op(&[0x50]).addend(0),
    Form::new(&[IMM8SX64]).op(&[0x6A]).imm(S8, 0),
    Form::new(&[M64]).rex_b(0, 0).op(&[0xFF]).modrm_xm(6, 0),
    Form::new(&[IMM32SX64]).op(&[0x68]).imm(S32, 0),
];
static PXOR_FORMS: [Form; 2] = sse_rm(0x66, 0xEF, S128);
static RCL_FORMS: [Form; 24] = shift(2);
static RCR_FORMS: [Form; 24] = shift(3);
static RDTSC_FORMS: [Form; 1] = fixed(&[0x0F, 0x31]);
static RET_FORMS: [Form; 2] = [
    Form::new(&[]).op(&[0xC3]),
    Form::new(&[IMM16]).op(&[0xC2]).imm(S16, 0),
];
static ROL_FORMS: [Form; 24] = shift(0);
static ROR_FORMS: [Form; 24] = shift(1);
static SAR_FORMS: [Form; 24] = shift(7);
static SBB_FORMS: [Form; 30] = alu(0x18, 3);
static SET_A: [Form; 2] = setcc(0x7);
static SET_AE: [Form; 2] = setcc(0x3);
static SET_B: [Form; 2] = setcc(0x2);
static SET_BE: [Form; 2] = setcc(0x6);
static SET_E: [Form; 2] = setcc(0x4);
static SET_G: [Form; 2] = setcc(0xF);
static SET_GE: [Form; 2] = setcc(0xD);
static SET_L: [Form; 2] = setcc(0xC);
static SET_LE: [Form; 2] = setcc(0xE);
static SET_NE: [Form; 2] = setcc(0x5);
static SET_NO: [Form; 2] = setcc(0x1);
static SET_NP: [Form; 2] = setcc(0xB);
static SET_NS: [Form; 2] = setcc(0x9);
static SET_O: [Form; 2] = setcc(0x0);
static SET_P: [Form; 2] = setcc(0xA);
static SET_S: [Form; 2] = setcc(0x8);
static SFENCE_FORMS: [Form; 1] = fixed(&[0x0F, 0xAE, 0xF8]);
static SHL_FORMS: [Form; 24] = shift(4);
static SHR_FORMS: [Form; 24] = shift(5);
static STC_FORMS: [Form; 1] = fixed(&[0xF9]);
static STD_FORMS: [Form; 1] = fixed(&[0xFD]);
static SUB_FORMS: [Form; 30] = alu(0x28, 5);
static SUBPD_FORMS: [Form; 2] = sse_rm(0x66, 0x5C, S128);
static SUBPS_FORMS: [Form; 2] = sse_rm(0, 0x5C, S128);
static SYSCALL_FORMS: [Form; 1] = fixed(&[0x0F, 0x05]);
static TEST_FORMS: [Form; 20] = [
    Form::new(&[C_AL, IMM8]).op(&[0xA8]).imm(S8, 1),
    Form::new(&[C_AX, IMM16]).osz16().op(&[0xA9]).imm(S16, 1),
    Form::new(&[GP8, GP8]).rex_rb(0, 1, 0).op(&[0x84]).modrm_rr(1, 0),
    Form::new(&[GP16, GP16]).osz16().rex_rb(0, 1, 0).op(&[0x85]).modrm_rr(1, 0),
    Form::new(&[GP32, GP32]).rex_rb(0, 1, 0).op(&[0x85]).modrm_rr(1, 0),
    Form::new(&[GP64, GP64]).rex_rb(1, 1, 0).op(&[0x85]).modrm_rr(1, 0),
    Form::new(&[M8, GP8]).rex_rb(0, 1, 0).op(&[0x84]).modrm_rm(1, 0),
    Form::new(&[M16, GP16]).osz16().rex_rb(0, 1, 0).op(&[0x85]).modrm_rm(1, 0),
    Form::new(&[M32, GP32]).rex_rb(0, 1, 0).op(&[0x85]).modrm_rm(1, 0),
    Form::new(&[M64, GP64]).rex_rb(1, 1, 0).op(&[0x85]).modrm_rm(1, 0),
    Form::new(&[GP8, IMM8]).rex_b(0, 0).op(&[0xF6]).modrm_xr(0, 0).imm(S8, 1),
    Form::new(&[C_EAX, IMM32]).op(&[0xA9]).imm(S32, 1),
    Form::new(&[GP16, IMM16]).osz16().rex_b(0, 0).op(&[0xF7]).modrm_xr(0, 0).imm(S16, 1),
    Form::new(&[M8, IMM8]).rex_b(0, 0).op(&[0xF6]).modrm_xm(0, 0).imm(S8, 1),
    Form::new(&[C_RAX, IMM32SX64]).rex(1).op(&[0xA9]).imm(S32, 1),
    Form::new(&[M16, IMM16]).osz16().rex_b(0, 0).op(&[0xF7]).modrm_xm(0, 0).imm(S16, 1),
    Form::new(&[GP32, IMM32]).rex_b(0, 0).op(&[0xF7]).modrm_xr(0, 0).imm(S32, 1),
    Form::new(&[GP64, IMM32SX64]).rex_b(1, 0).op(&[0xF7]).modrm_xr(0, 0).imm(S32, 1),
    Form::new(&[M32, IMM32]).rex_b(0, 0).op(&[0xF7]).modrm_xm(0, 0).imm(S32, 1),
    Form::new(&[M64, IMM32SX64]).rex_b(1, 0).op(&[0xF7]).modrm_xm(0, 0).imm(S32, 1),
];
static TZCNT_FORMS: [Form; 4] = bitscan(0xF3, 0xBC);
static UCOMISD_FORMS: [Form; 2] = sse_rm(0x66, 0x2E, S64);
static UCOMISS_FORMS: [Form; 2] = sse_rm(0, 0x2E, S32);
static UD2_FORMS: [Form; 1] = fixed(&[0x0F, 0x0B]);
static VADDPD_FORMS: [Form; 6] = vex_evex(1, 1, 0x58, S64);
static VADDPS_FORMS: [Form; 6] = vex_evex(0, 0, 0x58, S32);
static VDIVPD_FORMS: [Form; 6] = vex_evex(1, 1, 0x5E, S64);
static VDIVPS_FORMS: [Form; 6] = vex_evex(0, 0, 0x5E, S32);
static VMOVAPS_FORMS: [Form; 6] = vex_mov(0, 0x28, 0x29);
static VMOVDQA_FORMS: [Form; 6] = vex_mov(1, 0x6F, 0x7F);
static VMOVDQU_FORMS: [Form; 6] = vex_mov(2, 0x6F, 0x7F);
static VMOVUPS_FORMS: [Form; 6] = vex_mov(0, 0x10, 0x11);
static VMULPD_FORMS: [Form; 6] = vex_evex(1, 1, 0x59, S64);
static VMULPS_FORMS: [Form; 6] = vex_evex(0, 0, 0x59, S32);
static VPADDB_FORMS: [Form; 4] = vex_rvm(1, 0xFC);
static VPADDD_FORMS: [Form; 6] = vex_evex(1, 0, 0xFE, S32);
static VPADDQ_FORMS: [Form; 6] = vex_evex(1, 1, 0xD4, S64);
static VPADDW_FORMS: [Form; 4] = vex_rvm(1, 0xFD);
static VPAND_FORMS: [Form; 4] = vex_rvm(1, 0xDB);
static VPANDD_FORMS: [Form; 2] = evex_rvm512(1, 0, 0xDB, S32);
static VPANDN_FORMS: [Form; 4] = vex_rvm(1, 0xDF);
static VPANDQ_FORMS: [Form; 2] = evex_rvm512(1, 1, 0xDB, S64);
static VPOR_FORMS: [Form; 4] = vex_rvm(1, 0xEB);
static VPSUBB_FORMS: [Form; 4] = vex_rvm(1, 0xF8);
static VPSUBD_FORMS: [Form; 6] = vex_evex(1, 0, 0xFA, S32);
static VPSUBQ_FORMS: [Form; 6] = vex_evex(1, 1, 0xFB, S64);
static VPSUBW_FORMS: [Form; 4] = vex_rvm(1, 0xF9);
static VPXOR_FORMS: [Form; 4] = vex_rvm(1, 0xEF);
static VSUBPD_FORMS: [Form; 6] = vex_evex(1, 1, 0x5C, S64);
static VSUBPS_FORMS: [Form; 6] = vex_evex(0, 0, 0x5C, S32);
static VZEROALL_FORMS: [Form; 1] = [Form::new(&[]).vex(1, 0, 1, 0).op(&[0x77])];
static VZEROUPPER_FORMS: [Form; 1] = [Form::new(&[]).vex(1, 0, 0, 0).op(&[0x77])];
static XCHG_FORMS: [Form; 18] = [
    Form::new(&[C_AX, GP16]).osz16().rex_b(0, 1).op(&[0x90]).addend(1),
    Form::new(&[GP16, C_AX]).osz16().rex_b(0, 0).op(&[0x90]).addend(0),
    Form::new(&[C_EAX, GP32]).rex_b(0, 1).op(&[0x90]).addend(1),
    Form::new(&[GP32, C_EAX]).rex_b(0, 0).op(&[0x90]).addend(0),
    Form::new(&[C_RAX, GP64]).rex_b(1, 1).op(&[0x90]).addend(1),
    Form::new(&[GP64, C_RAX]).rex_b(1, 0).op(&[0x90]).addend(0),
    Form::new(&[GP8, GP8]).rex_rb(0, 1, 0).op(&[0x86]).modrm_rr(1, 0),
    Form::new(&[GP16, GP16]).osz16().rex_rb(0, 1, 0).op(&[0x87]).modrm_rr(1, 0),
    Form::new(&[GP32, GP32]).rex_rb(0, 1, 0).op(&[0x87]).modrm_rr(1, 0),
    Form::new(&[GP64, GP64]).rex_rb(1, 1, 0).op(&[0x87]).modrm_rr(1, 0),
    Form::new(&[M8, GP8]).rex_rb(0, 1, 0).op(&[0x86]).modrm_rm(1, 0),
    Form::new(&[GP8, M8]).rex_rb(0, 0, 1).op(&[0x86]).modrm_rm(0, 1),
    Form::new(&[M16, GP16]).osz16().rex_rb(0, 1, 0).op(&[0x87]).modrm_rm(1, 0),
    Form::new(&[GP16, M16]).osz16().rex_rb(0, 0, 1).op(&[0x87]).modrm_rm(0, 1),
    Form::new(&[M32, GP32]).rex_rb(0, 1, 0).op(&[0x87]).modrm_rm(1, 0),
    Form::new(&[GP32, M32]).rex_rb(0, 0, 1).op(&[0x87]).modrm_rm(0, 1),
    Form::new(&[M64, GP64]).rex_rb(1, 1, 0).op(&[0x87]).modrm_rm(1, 0),
    Form::new(&[GP64, M64]).rex_rb(1, 0, 1).op(&[0x87]).modrm_rm(0, 1),
];
static XOR_FORMS: [Form; 30] = alu(0x30, 6);

/// VEX move family: load and store opcodes over xmm/ymm and memory.
/// `pp` is the implied-prefix selector (0 = none, 1 = 66, 2 = F3).
const fn vex_mov(pp: u8, ld: u8, st: u8) -> [Form; 6] {
    [
        Form::new(&[XMM, XMM]).vex(1, pp, 0, 0).vex_rm(0, 1).op(&[ld]).modrm_rr(0, 1),
        Form::new(&[YMM, YMM]).vex(1, pp, 1, 0).vex_rm(0, 1).op(&[ld]).modrm_rr(0, 1),
        Form::new(&[XMM, M128]).vex(1, pp, 0, 0).vex_rm(0, 1).op(&[ld]).modrm_rm(0, 1),
        Form::new(&[YMM, M256]).vex(1, pp, 1, 0).vex_rm(0, 1).op(&[ld]).modrm_rm(0, 1),
        Form::new(&[M128, XMM]).vex(1, pp, 0, 0).vex_rm(1, 0).op(&[st]).modrm_rm(1, 0),
        Form::new(&[M256, YMM]).vex(1, pp, 1, 0).vex_rm(1, 0).op(&[st]).modrm_rm(1, 0),
    ]
}

// ─── Catalogue ──────────────────────────────────────────────────────────────

const fn iset(
    name: &'static str,
    summary: &'static str,
    forms: &'static [Form],
) -> InstSet {
    InstSet {
        name,
        summary,
        default_size: S32,
        forms,
    }
}

const fn iset16(
    name: &'static str,
    summary: &'static str,
    forms: &'static [Form],
) -> InstSet {
    InstSet {
        name,
        summary,
        default_size: S16,
        forms,
    }
}

/// The instruction catalogue, sorted by mnemonic for binary search.
static INSTRUCTIONS: &[InstSet] = &[
    iset("ADC", "Add with carry", &ADC_FORMS),
    iset("ADD", "Add", &ADD_FORMS),
    iset("ADDPD", "Add packed double-precision values", &ADDPD_FORMS),
    iset("ADDPS", "Add packed single-precision values", &ADDPS_FORMS),
    iset("ADDSD", "Add scalar double-precision values", &ADDSD_FORMS),
    iset("ADDSS", "Add scalar single-precision values", &ADDSS_FORMS),
    iset("AND", "Logical AND", &AND_FORMS),
    iset("BSF", "Bit scan forward", &BSF_FORMS),
    iset("BSR", "Bit scan reverse", &BSR_FORMS),
    iset("BT", "Bit test", &BT_FORMS),
    iset("BTC", "Bit test and complement", &BTC_FORMS),
    iset("BTR", "Bit test and reset", &BTR_FORMS),
    iset("BTS", "Bit test and set", &BTS_FORMS),
    iset("CALL", "Call procedure", &CALL_FORMS),
    iset("CBW", "Convert byte to word", &CBW_FORMS),
    iset("CDQ", "Convert doubleword to quadword", &CDQ_FORMS),
    iset("CDQE", "Convert doubleword to quadword in RAX", &CDQE_FORMS),
    iset("CLC", "Clear carry flag", &CLC_FORMS),
    iset("CLD", "Clear direction flag", &CLD_FORMS),
    iset("CMC", "Complement carry flag", &CMC_FORMS),
    iset("CMOVA", "Move if above", &CMOV_A),
    iset("CMOVAE", "Move if above or equal", &CMOV_AE),
    iset("CMOVB", "Move if below", &CMOV_B),
    iset("CMOVBE", "Move if below or equal", &CMOV_BE),
    iset("CMOVC", "Move if carry", &CMOV_B),
    iset("CMOVE", "Move if equal", &CMOV_E),
    iset("CMOVG", "Move if greater", &CMOV_G),
    iset("CMOVGE", "Move if greater or equal", &CMOV_GE),
    iset("CMOVL", "Move if less", &CMOV_L),
    iset("CMOVLE", "Move if less or equal", &CMOV_LE),
    iset("CMOVNA", "Move if not above", &CMOV_BE),
    iset("CMOVNAE", "Move if not above or equal", &CMOV_B),
    iset("CMOVNB", "Move if not below", &CMOV_AE),
    iset("CMOVNBE", "Move if not below or equal", &CMOV_A),
    iset("CMOVNC", "Move if not carry", &CMOV_AE),
    iset("CMOVNE", "Move if not equal", &CMOV_NE),
    iset("CMOVNG", "Move if not greater", &CMOV_LE),
    iset("CMOVNGE", "Move if not greater or equal", &CMOV_L),
    iset("CMOVNL", "Move if not less", &CMOV_GE),
    iset("CMOVNLE", "Move if not less or equal", &CMOV_G),
    iset("CMOVNO", "Move if not overflow", &CMOV_NO),
    iset("CMOVNP", "Move if not parity", &CMOV_NP),
    iset("CMOVNS", "Move if not sign", &CMOV_NS),
    iset("CMOVNZ", "Move if not zero", &CMOV_NE),
    iset("CMOVO", "Move if overflow", &CMOV_O),
    iset("CMOVP", "Move if parity", &CMOV_P),
    iset("CMOVPE", "Move if parity even", &CMOV_P),
    iset("CMOVPO", "Move if parity odd", &CMOV_NP),
    iset("CMOVS", "Move if sign", &CMOV_S),
    iset("CMOVZ", "Move if zero", &CMOV_E),
    iset("CMP", "Compare", &CMP_FORMS),
    iset("CPUID", "CPU identification", &CPUID_FORMS),
    iset("CQO", "Convert quadword to octaword", &CQO_FORMS),
    iset("CWD", "Convert word to doubleword", &CWD_FORMS),
    iset("CWDE", "Convert word to doubleword in EAX", &CWDE_FORMS),
    iset("DEC", "Decrement by 1", &DEC_FORMS),
    iset("DIV", "Unsigned divide", &DIV_FORMS),
    iset("DIVPD", "Divide packed double-precision values", &DIVPD_FORMS),
    iset("DIVPS", "Divide packed single-precision values", &DIVPS_FORMS),
    iset("EMMS", "Empty MMX technology state", &EMMS_FORMS),
    iset("ENDBR64", "Terminate indirect branch in 64-bit mode", &ENDBR64_FORMS),
    iset("HLT", "Halt", &HLT_FORMS),
    iset("IDIV", "Signed divide", &IDIV_FORMS),
    iset("IMUL", "Signed multiply", &IMUL_FORMS),
    iset("INC", "Increment by 1", &INC_FORMS),
    iset("INT", "Software interrupt", &INT_FORMS),
    iset("INT3", "Breakpoint trap", &INT3_FORMS),
    iset("JA", "Jump if above", &J_A),
    iset("JAE", "Jump if above or equal", &J_AE),
    iset("JB", "Jump if below", &J_B),
    iset("JBE", "Jump if below or equal", &J_BE),
    iset("JC", "Jump if carry", &J_B),
    iset("JE", "Jump if equal", &J_E),
    iset("JG", "Jump if greater", &J_G),
    iset("JGE", "Jump if greater or equal", &J_GE),
    iset("JL", "Jump if less", &J_L),
    iset("JLE", "Jump if less or equal", &J_LE),
    iset("JMP", "Jump", &JMP_FORMS),
    iset("JNA", "Jump if not above", &J_BE),
    iset("JNAE", "Jump if not above or equal", &J_B),
    iset("JNB", "Jump if not below", &J_AE),
    iset("JNBE", "Jump if not below or equal", &J_A),
    iset("JNC", "Jump if not carry", &J_AE),
    iset("JNE", "Jump if not equal", &J_NE),
    iset("JNG", "Jump if not greater", &J_LE),
    iset("JNGE", "Jump if not greater or equal", &J_L),
    iset("JNL", "Jump if not less", &J_GE),
    iset("JNLE", "Jump if not less or equal", &J_G),
    iset("JNO", "Jump if not overflow", &J_NO),
    iset("JNP", "Jump if not parity", &J_NP),
    iset("JNS", "Jump if not sign", &J_NS),
    iset("JNZ", "Jump if not zero", &J_NE),
    iset("JO", "Jump if overflow", &J_O),
    iset("JP", "Jump if parity", &J_P),
    iset("JPE", "Jump if parity even", &J_P),
    iset("JPO", "Jump if parity odd", &J_NP),
    iset("JS", "Jump if sign", &J_S),
    iset("JZ", "Jump if zero", &J_E),
    iset("LEA", "Load effective address", &LEA_FORMS),
    iset("LEAVE", "High-level procedure exit", &LEAVE_FORMS),
    iset("LFENCE", "Load fence", &LFENCE_FORMS),
    iset("LZCNT", "Count leading zero bits", &LZCNT_FORMS),
    iset("MFENCE", "Memory fence", &MFENCE_FORMS),
    iset("MOV", "Move", &MOV_FORMS),
    iset("MOVAPS", "Move aligned packed single-precision values", &MOVAPS_FORMS),
    iset("MOVD", "Move doubleword", &MOVD_FORMS),
    iset("MOVDQA", "Move aligned packed integer values", &MOVDQA_FORMS),
    iset("MOVDQU", "Move unaligned packed integer values", &MOVDQU_FORMS),
    iset("MOVQ", "Move quadword", &MOVQ_FORMS),
    iset("MOVSX", "Move with sign extension", &MOVSX_FORMS),
    iset("MOVSXD", "Move doubleword with sign extension", &MOVSXD_FORMS),
    iset("MOVUPS", "Move unaligned packed single-precision values", &MOVUPS_FORMS),
    iset("MOVZX", "Move with zero extension", &MOVZX_FORMS),
    iset("MUL", "Unsigned multiply", &MUL_FORMS),
    iset("MULPD", "Multiply packed double-precision values", &MULPD_FORMS),
    iset("MULPS", "Multiply packed single-precision values", &MULPS_FORMS),
    iset("MULSD", "Multiply scalar double-precision values", &MULSD_FORMS),
    iset("MULSS", "Multiply scalar single-precision values", &MULSS_FORMS),
    iset("NEG", "Two's complement negation", &NEG_FORMS),
    iset("NOP", "No operation", &NOP_FORMS),
    iset("NOT", "One's complement negation", &NOT_FORMS),
    iset("OR", "Logical inclusive OR", &OR_FORMS),
    iset("PADDB", "Add packed byte integers", &PADDB_FORMS),
    iset("PADDD", "Add packed doubleword integers", &PADDD_FORMS),
    iset("PADDQ", "Add packed quadword integers", &PADDQ_FORMS),
    iset("PADDW", "Add packed word integers", &PADDW_FORMS),
    iset("PAND", "Logical AND (packed)", &PAND_FORMS),
    iset("PANDN", "Logical AND NOT (packed)", &PANDN_FORMS),
    iset("PAUSE", "Spin-loop hint", &PAUSE_FORMS),
    iset("PCMPEQB", "Compare packed bytes for equality", &PCMPEQB_FORMS),
    iset("PCMPEQD", "Compare packed doublewords for equality", &PCMPEQD_FORMS),
    iset("POP", "Pop from stack", &POP_FORMS),
    iset("POPCNT", "Count set bits", &POPCNT_FORMS),
    iset("POR", "Logical OR (packed)", &POR_FORMS),
    iset("PSUBB", "Subtract packed byte integers", &PSUBB_FORMS),
    iset("PSUBD", "Subtract packed doubleword integers", &PSUBD_FORMS),
    iset("PSUBQ", "Subtract packed quadword integers", &PSUBQ_FORMS),
    iset("PSUBW", "Subtract packed word integers", &PSUBW_FORMS),
    iset("PUSH", "Push onto stack", &PUSH_FORMS),
    iset("PXOR", "Logical exclusive OR (packed)", &PXOR_FORMS),
    iset("RCL", "Rotate through carry left", &RCL_FORMS),
    iset("RCR", "Rotate through carry right", &RCR_FORMS),
    iset("RDTSC", "Read time-stamp counter", &RDTSC_FORMS),
    iset16("RET", "Return from procedure", &RET_FORMS),
    iset("ROL", "Rotate left", &ROL_FORMS),
    iset("ROR", "Rotate right", &ROR_FORMS),
    iset("SAL", "Shift arithmetic left", &SHL_FORMS),
    iset("SAR", "Shift arithmetic right", &SAR_FORMS),
    iset("SBB", "Subtract with borrow", &SBB_FORMS),
    iset("SETA", "Set byte if above", &SET_A),
    iset("SETAE", "Set byte if above or equal", &SET_AE),
    iset("SETB", "Set byte if below", &SET_B),
    iset("SETBE", "Set byte if below or equal", &SET_BE),
    iset("SETC", "Set byte if carry", &SET_B),
    iset("SETE", "Set byte if equal", &SET_E),
    iset("SETG", "Set byte if greater", &SET_G),
    iset("SETGE", "Set byte if greater or equal", &SET_GE),
    iset("SETL", "Set byte if less", &SET_L),
    iset("SETLE", "Set byte if less or equal", &SET_LE),
    iset("SETNA", "Set byte if not above", &SET_BE),
    iset("SETNAE", "Set byte if not above or equal", &SET_B),
    iset("SETNB", "Set byte if not below", &SET_AE),
    iset("SETNBE", "Set byte if not below or equal", &SET_A),
    iset("SETNC", "Set byte if not carry", &SET_AE),
    iset("SETNE", "Set byte if not equal", &SET_NE),
    iset("SETNG", "Set byte if not greater", &SET_LE),
    iset("SETNGE", "Set byte if not greater or equal", &SET_L),
    iset("SETNL", "Set byte if not less", &SET_GE),
    iset("SETNLE", "Set byte if not less or equal", &SET_G),
    iset("SETNO", "Set byte if not overflow", &SET_NO),
    iset("SETNP", "Set byte if not parity", &SET_NP),
    iset("SETNS", "Set byte if not sign", &SET_NS),
    iset("SETNZ", "Set byte if not zero", &SET_NE),
    iset("SETO", "Set byte if overflow", &SET_O),
    iset("SETP", "Set byte if parity", &SET_P),
    iset("SETPE", "Set byte if parity even", &SET_P),
    iset("SETPO", "Set byte if parity odd", &SET_NP),
    iset("SETS", "Set byte if sign", &SET_S),
    iset("SETZ", "Set byte if zero", &SET_E),
    iset("SFENCE", "Store fence", &SFENCE_FORMS),
    iset("SHL", "Shift logical left", &SHL_FORMS),
    iset("SHR", "Shift logical right", &SHR_FORMS),
    iset("STC", "Set carry flag", &STC_FORMS),
    iset("STD", "Set direction flag", &STD_FORMS),
    iset("SUB", "Subtract", &SUB_FORMS),
    iset("SUBPD", "Subtract packed double-precision values", &SUBPD_FORMS),
    iset("SUBPS", "Subtract packed single-precision values", &SUBPS_FORMS),
    iset("SYSCALL", "Fast system call", &SYSCALL_FORMS),
    iset("TEST", "Logical compare", &TEST_FORMS),
    iset("TZCNT", "Count trailing zero bits", &TZCNT_FORMS),
    iset("UCOMISD", "Unordered compare scalar double-precision values", &UCOMISD_FORMS),
    iset("UCOMISS", "Unordered compare scalar single-precision values", &UCOMISS_FORMS),
    iset("UD2", "Undefined instruction", &UD2_FORMS),
    iset("VADDPD", "Add packed double-precision values", &VADDPD_FORMS),
    iset("VADDPS", "Add packed single-precision values", &VADDPS_FORMS),
    iset("VDIVPD", "Divide packed double-precision values", &VDIVPD_FORMS),
    iset("VDIVPS", "Divide packed single-precision values", &VDIVPS_FORMS),
    iset("VMOVAPS", "Move aligned packed single-precision values", &VMOVAPS_FORMS),
    iset("VMOVDQA", "Move aligned packed integer values", &VMOVDQA_FORMS),
    iset("VMOVDQU", "Move unaligned packed integer values", &VMOVDQU_FORMS),
    iset("VMOVUPS", "Move unaligned packed single-precision values", &VMOVUPS_FORMS),
    iset("VMULPD", "Multiply packed double-precision values", &VMULPD_FORMS),
    iset("VMULPS", "Multiply packed single-precision values", &VMULPS_FORMS),
    iset("VPADDB", "Add packed byte integers", &VPADDB_FORMS),
    iset("VPADDD", "Add packed doubleword integers", &VPADDD_FORMS),
    iset("VPADDQ", "Add packed quadword integers", &VPADDQ_FORMS),
    iset("VPADDW", "Add packed word integers", &VPADDW_FORMS),
    iset("VPAND", "Logical AND (packed)", &VPAND_FORMS),
    iset("VPANDD", "Logical AND of packed doubleword integers", &VPANDD_FORMS),
    iset("VPANDN", "Logical AND NOT (packed)", &VPANDN_FORMS),
    iset("VPANDQ", "Logical AND of packed quadword integers", &VPANDQ_FORMS),
    iset("VPOR", "Logical OR (packed)", &VPOR_FORMS),
    iset("VPSUBB", "Subtract packed byte integers", &VPSUBB_FORMS),
    iset("VPSUBD", "Subtract packed doubleword integers", &VPSUBD_FORMS),
    iset("VPSUBQ", "Subtract packed quadword integers", &VPSUBQ_FORMS),
    iset("VPSUBW", "Subtract packed word integers", &VPSUBW_FORMS),
    iset("VPXOR", "Logical exclusive OR (packed)", &VPXOR_FORMS),
    iset("VSUBPD", "Subtract packed double-precision values", &VSUBPD_FORMS),
    iset("VSUBPS", "Subtract packed single-precision values", &VSUBPS_FORMS),
    iset("VZEROALL", "Zero all vector registers", &VZEROALL_FORMS),
    iset("VZEROUPPER", "Zero upper halves of vector registers", &VZEROUPPER_FORMS),
    iset("XCHG", "Exchange", &XCHG_FORMS),
    iset("XOR", "Logical exclusive OR", &XOR_FORMS),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::*;
    use alloc::vec::Vec;

    #[test]
    fn catalogue_is_sorted_by_name() {
        for pair in INSTRUCTIONS.windows(2) {
            assert!(
                pair[0].name < pair[1].name,
                "{} >= {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn forms_are_sorted_by_cost() {
        for iset in INSTRUCTIONS {
            let costs: Vec<u32> = iset.forms.iter().map(Form::cost).collect();
            for pair in costs.windows(2) {
                assert!(
                    pair[0] <= pair[1],
                    "{}: form costs not sorted: {:?}",
                    iset.name,
                    costs
                );
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("mov").unwrap().name, "MOV");
        assert_eq!(lookup("Mov").unwrap().name, "MOV");
        assert_eq!(lookup("VPAND").unwrap().name, "VPAND");
        assert!(lookup("bogus").is_none());
    }

    #[test]
    fn aliases_share_forms() {
        assert_eq!(lookup("JZ").unwrap().forms.as_ptr(), J_E.as_ptr());
        assert_eq!(lookup("SAL").unwrap().forms.as_ptr(), SHL_FORMS.as_ptr());
        assert_eq!(
            lookup("CMOVNAE").unwrap().forms.as_ptr(),
            CMOV_B.as_ptr()
        );
    }

    #[test]
    fn select_prefers_shortest_form() {
        let mov = lookup("MOV").unwrap();
        // MOV EAX, 123 → the register-addend imm32 form, not C7 /0.
        let form = mov
            .select(&[EAX.into(), Operand::from(123i64)])
            .unwrap();
        assert_eq!(form.encoding().opcodes[0], 0xB8);

        // MOV RBX, -123 → the imm32 sign-extended C7 form, not imm64.
        let form = mov
            .select(&[RBX.into(), Operand::from(-123i64)])
            .unwrap();
        assert_eq!(form.encoding().opcodes[0], 0xC7);

        // A 64-bit-only constant requires the B8+r imm64 form.
        let form = mov
            .select(&[RBX.into(), Operand::from(0x1_0000_0000u64)])
            .unwrap();
        assert_eq!(form.encoding().opcodes[0], 0xB8);
    }

    #[test]
    fn select_validates_arguments() {
        let mov = lookup("MOV").unwrap();
        let err = mov
            .select(&[Mem::base(RBX).index(RSP, 2).size(S64).into(), RAX.into()])
            .unwrap_err();
        assert!(matches!(err, AsmError::UnsupportedIndex { .. }));
    }

    #[test]
    fn select_ambiguous_operand_size() {
        let mov = lookup("MOV").unwrap();
        let err = mov
            .select(&[Mem::base(RBX).into(), Operand::from(123i64)])
            .unwrap_err();
        assert!(matches!(err, AsmError::AmbiguousOperandSize { .. }));

        // A sized register sibling disambiguates.
        assert!(mov.select(&[Mem::base(RBX).into(), RAX.into()]).is_ok());
    }

    #[test]
    fn select_unsupported_combination() {
        let ret = lookup("RET").unwrap();
        let err = ret.select(&[RAX.into()]).unwrap_err();
        assert!(matches!(err, AsmError::UnsupportedInstruction { .. }));
    }

    #[test]
    fn const_params_match_exact_operands() {
        let shl = lookup("SHL").unwrap();
        // SHL RBX, 1 → the D1 /4 const-1 form (no immediate byte).
        let form = shl
            .select(&[RBX.into(), Operand::from(1i64)])
            .unwrap();
        assert_eq!(form.encoding().opcodes[0], 0xD1);
        // SHL RBX, 2 → the C1 /4 imm8 form.
        let form = shl
            .select(&[RBX.into(), Operand::from(2i64)])
            .unwrap();
        assert_eq!(form.encoding().opcodes[0], 0xC1);
        // SHL RBX, CL → the D3 /4 form.
        let form = shl.select(&[RBX.into(), CL.into()]).unwrap();
        assert_eq!(form.encoding().opcodes[0], 0xD3);
    }

    #[test]
    fn implicit_params_are_not_supplied() {
        let cpuid = lookup("CPUID").unwrap();
        assert_eq!(cpuid.forms[0].arity(), 0);
        assert!(cpuid.select(&[]).is_ok());
        assert!(cpuid.select(&[EAX.into()]).is_err());
    }

    #[test]
    fn encode_smoke() {
        assert_eq!(lookup("RET").unwrap().encode(&[]).unwrap().bytes(), &[0xC3]);
        assert_eq!(
            lookup("RET")
                .unwrap()
                .encode(&[Operand::from(3i64)])
                .unwrap()
                .bytes(),
            &[0xC2, 0x03, 0x00]
        );
        assert_eq!(
            lookup("NOP").unwrap().encode(&[]).unwrap().bytes(),
            &[0x90]
        );
        assert_eq!(
            lookup("INT")
                .unwrap()
                .encode(&[Operand::from(3i64)])
                .unwrap()
                .bytes(),
            &[0xCC]
        );
        assert_eq!(
            lookup("INT")
                .unwrap()
                .encode(&[Operand::from(0x80i64)])
                .unwrap()
                .bytes(),
            &[0xCD, 0x80]
        );
    }

    #[test]
    fn high_byte_with_rex_is_rejected() {
        // MOV SIL, AH: SIL forces a REX prefix, AH cannot live under one.
        let mov = lookup("MOV").unwrap();
        let err = mov.encode(&[SIL.into(), AH.into()]).unwrap_err();
        assert!(matches!(err, AsmError::HighByteWithRex { .. }));
        // MOV AH, AL alone is fine (no REX).
        assert_eq!(
            mov.encode(&[AH.into(), AL.into()]).unwrap().bytes(),
            &[0x88, 0xC4]
        );
    }
}
