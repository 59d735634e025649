//! # Instruction Word View
//!
//! [`Instruction`] wraps one encoded 32-bit word by value and exposes the
//! ISA fields. It never allocates and carries no state besides the word
//! itself, so it is `Copy` and can be built on the fly wherever a raw `u32`
//! shows up.
//!
//! The register-carrying D-form illustrates the named accessors:
//!
//! ```text
//! 31       26 25    21 20    16 15                              0
//! ┌──────────┬────────┬────────┬────────────────────────────────┐
//! │  opcode  │ RS/RT  │   RA   │         displacement           │
//! └──────────┴────────┴────────┴────────────────────────────────┘
//! ```
//!
//! RS and RT are the same bits; which name applies depends on whether the
//! mnemonic reads a source (stores, logical forms) or writes a target
//! (loads, arithmetic forms). Both accessors exist so call sites can say
//! what they mean.
//!
//! [`Instruction::kind`] is the total entry point: every word maps to a
//! native opcode, a legacy fake opcode, a stub marker, or `Undefined`.
//! Nothing in here panics on runtime input.

use serde::{Deserialize, Serialize};

use crate::arm::fake_opcode::{FAKE_OPCODE, FakeOpcode, MARKER_SUBOPCODE_BIT};
use crate::arm::svc::SoftwareInterrupt;
use crate::bitwise::Bits;
use crate::ppc::opcode::Opcode;

/// Word pattern reserved to mark a runtime call redirected to the
/// simulator. Trap-word-immediate never occurs in generated code, so the
/// simulator can claim it.
pub const RUNTIME_CALL_REDIRECT_INSTR: u32 = Opcode::TWI as u32;

/// Recognized class of one instruction word.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A native operation out of the primary opcode table.
    Native(Opcode),
    /// A legacy placeholder out of the reserved slot, standing in for a
    /// source-notation instruction that has no native encoding yet.
    FakeArm(FakeOpcode),
    /// A stub marker out of the reserved slot, carrying a 9-bit id.
    StubMarker(u32),
    /// No table recognizes the word.
    Undefined,
}

/// One encoded instruction word.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Instruction(u32);

impl Instruction {
    /// Byte size of every instruction word.
    pub const SIZE: u32 = 4;

    /// `log2(SIZE)`, for switching between word and byte offsets.
    pub const SIZE_LOG2: u32 = 2;

    /// Distance between an instruction address and the value a legacy
    /// program-counter read yields: the source pipeline exposed the address
    /// two instructions ahead, and ported code still expects that.
    pub const PC_READ_OFFSET: u32 = 8;

    /// The raw encoded word.
    #[must_use]
    pub const fn instruction_bits(self) -> u32 {
        self.0
    }

    /// Replaces the whole word. Partial-field writes are the assembler's
    /// business, not this view's.
    pub const fn set_instruction_bits(&mut self, value: u32) {
        self.0 = value;
    }

    /// Bit `bit_idx` of the word, as 0 or 1.
    #[must_use]
    pub fn bit(self, bit_idx: u8) -> u32 {
        u32::from(self.0.get_bit(bit_idx))
    }

    /// Bits `hi` down to `lo` inclusive, shifted right into place.
    #[must_use]
    pub fn bits(self, hi: u8, lo: u8) -> u32 {
        debug_assert!(lo <= hi && hi < 32);
        self.0.get_bits(lo..=hi)
    }

    /// Bits `hi` down to `lo` inclusive, left at their original position.
    #[must_use]
    pub fn bit_field(self, hi: u8, lo: u8) -> u32 {
        debug_assert!(lo <= hi && hi < 32);
        self.bits(hi, lo) << lo
    }

    /// RS field, bits 25-21: the register a store or logical form reads.
    #[must_use]
    pub fn rs_value(self) -> u32 {
        self.bits(25, 21)
    }

    /// RT field, bits 25-21: the register a load or arithmetic form writes.
    /// Same bits as [`Self::rs_value`].
    #[must_use]
    pub fn rt_value(self) -> u32 {
        self.bits(25, 21)
    }

    /// RA field, bits 20-16.
    #[must_use]
    pub fn ra_value(self) -> u32 {
        self.bits(20, 16)
    }

    /// RB field, bits 15-11.
    #[must_use]
    pub fn rb_value(self) -> u32 {
        self.bits(15, 11)
    }

    /// RC field of the four-operand arithmetic forms, bits 10-6.
    #[must_use]
    pub fn rc_value(self) -> u32 {
        self.bits(10, 6)
    }

    /// Raw primary opcode field, bits 31-26.
    #[must_use]
    pub fn opcode_value(self) -> u32 {
        self.bits(31, 26)
    }

    /// The primary opcode, if the table knows it.
    pub fn opcode(self) -> Result<Opcode, String> {
        Opcode::try_from(self.0)
    }

    /// The 16-bit displacement/immediate field as a signed value.
    #[must_use]
    pub fn signed_imm16(self) -> i32 {
        self.bits(15, 0).sign_extended(16) as i32
    }

    /// Raw payload of a system call, bits 23-0.
    #[must_use]
    pub fn svc_value(self) -> u32 {
        self.bits(23, 0)
    }

    /// The system call payload, split into the known service codes. Unknown
    /// codes come back as [`SoftwareInterrupt::User`].
    #[must_use]
    pub fn svc_code(self) -> SoftwareInterrupt {
        SoftwareInterrupt::from(self.svc_value())
    }

    /// Classifies the word against every table. Total: undecodable words
    /// yield [`InstructionKind::Undefined`] instead of an error.
    #[must_use]
    pub fn kind(self) -> InstructionKind {
        if self.bit_field(31, 26) == FAKE_OPCODE {
            if self.0.is_bit_off(MARKER_SUBOPCODE_BIT) {
                return match FakeOpcode::try_from(self.0) {
                    Ok(fake) => InstructionKind::FakeArm(fake),
                    Err(_) => {
                        tracing::debug!(
                            "Unassigned fake opcode tag {} in word 0x{:08X}",
                            self.bits(6, 0),
                            self.0
                        );
                        InstructionKind::Undefined
                    }
                };
            }

            return InstructionKind::StubMarker(self.bits(8, 0));
        }

        match Opcode::try_from(self.0) {
            Ok(op) => InstructionKind::Native(op),
            Err(_) => {
                tracing::debug!(
                    "Undefined primary opcode {} in word 0x{:08X}",
                    self.opcode_value(),
                    self.0
                );
                InstructionKind::Undefined
            }
        }
    }
}

impl From<u32> for Instruction {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

impl From<Instruction> for u32 {
    fn from(instr: Instruction) -> Self {
        instr.0
    }
}
