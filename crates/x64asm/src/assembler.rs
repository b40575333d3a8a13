//! Two-pass streaming assembler.
//!
//! The assembler accepts a stream of instruction calls and label
//! definitions. Calls whose label arguments are already resolvable are
//! encoded immediately; the rest are buffered and retried, in order, each
//! time a label is bound. Encoded slots are flushed to the downstream sink
//! as soon as every earlier slot has a final length, so output streams in
//! program order.

#[allow(unused_imports)]
use alloc::format;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
#[allow(unused_imports)]
use alloc::vec;
use alloc::vec::Vec;

use crate::encoding::Format;
use crate::error::{AsmError, Pos};
use crate::isa::{lookup, InstSet};
use crate::operand::Operand;

// ─── Sink ───────────────────────────────────────────────────────────────────

/// Downstream writer borrowed by the assembler for the duration of one
/// assembly session.
///
/// Writes are never reentrant, and after the first failure the assembler
/// stops calling [`Sink::write_code`] (the byte stream would no longer make
/// sense) while continuing to diagnose the remaining input.
pub trait Sink {
    /// Receive the finalized bytes of one instruction.
    ///
    /// # Errors
    ///
    /// Implementations report failures as [`AsmError::Sink`].
    fn write_code(&mut self, bytes: &[u8]) -> Result<(), AsmError>;
}

impl Sink for Vec<u8> {
    fn write_code(&mut self, bytes: &[u8]) -> Result<(), AsmError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapter wrapping any [`std::io::Write`] as a [`Sink`].
#[cfg(feature = "std")]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    fn write_code(&mut self, bytes: &[u8]) -> Result<(), AsmError> {
        use alloc::string::ToString;
        self.0.write_all(bytes).map_err(|e| AsmError::Sink {
            msg: e.to_string(),
        })
    }
}

// ─── Assembler ──────────────────────────────────────────────────────────────

/// One per-instruction slot in the output stream.
#[derive(Debug)]
enum Slot {
    /// Reserved, not yet encoded (blocked on a label).
    Empty,
    /// Final bytes.
    Done(Format),
    /// Encoding failed after its labels resolved; the error is recorded and
    /// the slot contributes zero bytes so the stream stays diagnosable.
    Failed,
}

impl Slot {
    fn byte_len(&self) -> Option<usize> {
        match self {
            Slot::Empty => None,
            Slot::Done(f) => Some(f.len()),
            Slot::Failed => Some(0),
        }
    }
}

/// A buffered call whose encoding is blocked on unresolved labels.
struct Pending {
    slot: usize,
    iset: &'static InstSet,
    args: Vec<Operand>,
    pos: Pos,
}

/// Streaming two-pass assembler.
///
/// # Examples
///
/// ```
/// use x64asm::operand::*;
/// use x64asm::Assembler;
///
/// let mut asm = Assembler::new(Vec::new());
/// asm.emit("jmp", &[Operand::label("done")])?;
/// asm.emit("mov", &[RBX.into(), Operand::from(123i64)])?;
/// asm.label("done")?;
/// asm.emit("ret", &[])?;
/// let code = asm.finish()?;
/// assert_eq!(
///     code,
///     vec![0xEB, 0x07, 0x48, 0xC7, 0xC3, 0x7B, 0x00, 0x00, 0x00, 0xC3],
/// );
/// # Ok::<(), x64asm::AsmError>(())
/// ```
pub struct Assembler<S> {
    sink: S,
    encoded: Vec<Slot>,
    pending: Vec<Pending>,
    labels: BTreeMap<Rc<str>, usize>,
    errors: Vec<AsmError>,
    written: usize,
    sink_dead: bool,
}

impl<S: Sink> Assembler<S> {
    /// Create an assembler writing to `sink`.
    pub fn new(sink: S) -> Assembler<S> {
        Assembler {
            sink,
            encoded: Vec::new(),
            pending: Vec::new(),
            labels: BTreeMap::new(),
            errors: Vec::new(),
            written: 0,
            sink_dead: false,
        }
    }

    /// Emit one instruction.
    ///
    /// Label arguments referring to not-yet-defined labels buffer the call;
    /// it is encoded when the label is bound. All other errors are
    /// returned immediately, do not advance the instruction stream, and are
    /// also reported again by [`Assembler::finish`].
    ///
    /// # Errors
    ///
    /// Validation, selection, and encoding errors, wrapped with the
    /// mnemonic and call-site position.
    #[track_caller]
    pub fn emit(&mut self, mnemonic: &str, args: &[Operand]) -> Result<(), AsmError> {
        let pos = Pos::caller();
        match self.try_emit(mnemonic, args, &pos) {
            Ok(()) => Ok(()),
            Err(e) => {
                let e = e.context(mnemonic, Some(pos));
                self.errors.push(e.clone());
                Err(e)
            }
        }
    }

    fn try_emit(&mut self, mnemonic: &str, args: &[Operand], pos: &Pos) -> Result<(), AsmError> {
        let iset = lookup(mnemonic).ok_or_else(|| AsmError::UnknownMnemonic {
            mnemonic: String::from(mnemonic),
        })?;

        let id = self.encoded.len();
        self.encoded.push(Slot::Empty);

        let mut args = args.to_vec();
        if !self.resolve_labels(id, &mut args) {
            self.pending.push(Pending {
                slot: id,
                iset,
                args,
                pos: pos.clone(),
            });
            return Ok(());
        }

        match iset.encode(&args) {
            Ok(f) => {
                self.encoded[id] = Slot::Done(f);
                self.flush();
                Ok(())
            }
            Err(e) => {
                // The slot was reserved last; drop it so the error does not
                // advance the instruction stream.
                self.encoded.pop();
                Err(e)
            }
        }
    }

    /// Bind a label to the current position and retry buffered calls.
    ///
    /// # Errors
    ///
    /// Returns [`AsmError::DuplicateLabel`] if the name is already bound.
    #[track_caller]
    pub fn label(&mut self, name: &str) -> Result<(), AsmError> {
        let pos = Pos::caller();
        if self.labels.contains_key(name) {
            let e = AsmError::DuplicateLabel {
                label: String::from(name),
            }
            .context(name, Some(pos));
            self.errors.push(e.clone());
            return Err(e);
        }
        self.labels.insert(Rc::from(name), self.encoded.len());

        // Retry buffered calls in order, repeating until a full pass makes
        // no progress. Each resolved slot fixes a length that may unblock
        // earlier entries (consecutive forward branches to one label), so a
        // single in-order sweep is not enough.
        loop {
            let mut progressed = false;
            let mut i = 0;
            while i < self.pending.len() {
                let slot = self.pending[i].slot;
                let mut args = core::mem::take(&mut self.pending[i].args);
                if !self.resolve_labels(slot, &mut args) {
                    self.pending[i].args = args;
                    i += 1;
                    continue;
                }
                let p = &self.pending[i];
                match p.iset.encode(&args) {
                    Ok(f) => self.encoded[slot] = Slot::Done(f),
                    Err(e) => {
                        self.encoded[slot] = Slot::Failed;
                        self.errors.push(e.context(p.iset.name, Some(p.pos.clone())));
                    }
                }
                self.pending.remove(i);
                progressed = true;
            }
            if !progressed {
                break;
            }
        }

        self.flush();
        Ok(())
    }

    /// Finish the session, surfacing all collected errors.
    ///
    /// # Errors
    ///
    /// A single error, or [`AsmError::Multiple`] when several were
    /// collected. Undefined labels referenced by still-buffered calls are
    /// reported here.
    pub fn finish(mut self) -> Result<S, AsmError> {
        if let Some(p) = self.pending.first() {
            let mut missing = None;
            for arg in &p.args {
                if let Operand::Label(l) = arg {
                    if !self.labels.contains_key(l.name()) {
                        missing = Some(String::from(l.name()));
                        break;
                    }
                }
            }
            let e = match missing {
                Some(label) => AsmError::UndefinedLabel { label },
                None => AsmError::EncodingFailed {
                    mnemonic: String::from(p.iset.name),
                },
            };
            self.errors.push(e.context(p.iset.name, Some(p.pos.clone())));
        }

        match self.errors.len() {
            0 => Ok(self.sink),
            1 => Err(self.errors.pop().unwrap_or(AsmError::Multiple {
                errors: Vec::new(),
            })),
            _ => Err(AsmError::Multiple {
                errors: self.errors,
            }),
        }
    }

    /// Whether any calls are still blocked on unresolved labels.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The slot index a label is bound to, if defined.
    #[must_use]
    pub fn label_slot(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    /// Replace label arguments with resolved relative displacements.
    /// Returns false when any label is unbound or an intervening slot has
    /// no final length yet.
    fn resolve_labels(&self, id: usize, args: &mut [Operand]) -> bool {
        for arg in args.iter_mut() {
            if let Operand::Label(l) = arg {
                let Some(&to) = self.labels.get(l.name()) else {
                    return false;
                };
                let Some(rel) = self.resolve_rel(id, to) else {
                    return false;
                };
                *arg = rel;
            }
        }
        true
    }

    /// Relative displacement from slot `from` to slot `to`: the summed
    /// lengths of the slots in between (negative when backward). The
    /// current instruction's own length is accounted for at code-offset
    /// emission time.
    fn resolve_rel(&self, from: usize, to: usize) -> Option<Operand> {
        if from >= to {
            let mut rel: i64 = 0;
            for slot in &self.encoded[to..from] {
                rel -= slot.byte_len()? as i64;
            }
            Some(Operand::RelRwd(rel))
        } else {
            let mut rel: i64 = 0;
            for slot in &self.encoded[from + 1..to] {
                rel += slot.byte_len()? as i64;
            }
            Some(Operand::RelFwd(rel))
        }
    }

    /// Write every finalized slot at or after the cursor to the sink.
    fn flush(&mut self) {
        while self.written < self.encoded.len() {
            match &self.encoded[self.written] {
                Slot::Empty => break,
                Slot::Failed => self.written += 1,
                Slot::Done(f) => {
                    if !self.sink_dead {
                        if let Err(e) = self.sink.write_code(f.bytes()) {
                            self.sink_dead = true;
                            self.errors.push(e);
                        }
                    }
                    self.written += 1;
                }
            }
        }
    }
}
