//! Service codes carried in the payload of an `sc` word, bits 23-0.
//!
//! Generated code never reaches a real supervisor: a simulator backs the
//! target, traps every system call and dispatches on the payload. A few
//! codes are reserved for the simulator's own protocol; every other value
//! passes through untouched.

use serde::{Deserialize, Serialize};

/// Transition to host C code through the runtime redirection thunk.
pub const CALL_RT_REDIRECTED: u32 = 0x10;

/// Break point. The value is bits 23-0 of `0x7D82_1008`, the trap word
/// `twge r2, r2`, so a breakpoint reads as a trap even when the payload
/// is interpreted as a whole instruction.
pub const BREAKPOINT: u32 = 0x0082_1008;

/// Base of the stop range. Any payload with this bit set and no more
/// specific meaning is a stop, and the low bits carry its stop code.
pub const STOP_CODE: u32 = 1 << 23;

/// Extracts the stop code out of a stop payload.
pub const STOP_CODE_MASK: u32 = STOP_CODE - 1;

/// Largest stop code a stop payload can carry.
pub const MAX_STOP_CODE: u32 = STOP_CODE - 1;

/// Print simulator state. Bits 23-0 of `0x7D9F_F808`, `twge r31, r31`,
/// chosen the same way as [`BREAKPOINT`].
pub const INFO: u32 = 0x009F_F808;

/// A decoded `sc` payload.
///
/// The breakpoint and info codes land numerically inside the stop range,
/// so the conversion matches them before it checks the range bit.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum SoftwareInterrupt {
    /// Leave generated code for the host runtime.
    CallRtRedirected,
    /// Drop into the debugger.
    Breakpoint,
    /// A stop with its code, in `[0, MAX_STOP_CODE]`.
    Stop(u32),
    /// Dump simulator state.
    Info,
    /// Anything else, kept verbatim for the embedder.
    User(u32),
}

impl From<u32> for SoftwareInterrupt {
    fn from(code: u32) -> Self {
        match code {
            CALL_RT_REDIRECTED => Self::CallRtRedirected,
            BREAKPOINT => Self::Breakpoint,
            INFO => Self::Info,
            _ if code & STOP_CODE != 0 => Self::Stop(code & STOP_CODE_MASK),
            _ => Self::User(code),
        }
    }
}
