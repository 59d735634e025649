//! # Register Name Tables
//!
//! Canonical names and lookup for the 32 general-purpose and 32
//! floating-point registers, as the disassembler prints them and the
//! assembler parser accepts them.
//!
//! The canonical spellings follow the ported backend's conventions rather
//! than plain `rN` everywhere: `sp` for r1, `ip` for r12 and `fp` for r31.
//! The plain spellings still resolve through the alias table, as does the
//! historical `sl` for r10.

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Number of floating-point registers.
pub const NUM_FP_REGISTERS: usize = 32;

const NAMES: [&str; NUM_REGISTERS] = [
    "r0", "sp", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "ip", "r13", "r14",
    "r15", "r16", "r17", "r18", "r19", "r20", "r21", "r22", "r23", "r24", "r25", "r26", "r27",
    "r28", "r29", "r30", "fp",
];

const ALIASES: [(&str, usize); 4] = [("r1", 1), ("sl", 10), ("r12", 12), ("r31", 31)];

const FP_NAMES: [&str; NUM_FP_REGISTERS] = [
    "d0", "d1", "d2", "d3", "d4", "d5", "d6", "d7", "d8", "d9", "d10", "d11", "d12", "d13", "d14",
    "d15", "d16", "d17", "d18", "d19", "d20", "d21", "d22", "d23", "d24", "d25", "d26", "d27",
    "d28", "d29", "d30", "d31",
];

/// Canonical name of general-purpose register `reg`, or `None` when the
/// number is out of range.
#[must_use]
pub fn name(reg: usize) -> Option<&'static str> {
    NAMES.get(reg).copied()
}

/// Register number for a general-purpose register name, canonical spellings
/// first, then aliases. `None` when nothing matches.
#[must_use]
pub fn number(name: &str) -> Option<usize> {
    if let Some(reg) = NAMES.iter().position(|&canonical| canonical == name) {
        return Some(reg);
    }

    ALIASES
        .iter()
        .find(|&&(alias, _)| alias == name)
        .map(|&(_, reg)| reg)
}

/// Canonical name of floating-point register `reg`, or `None` when the
/// number is out of range.
#[must_use]
pub fn fp_name(reg: usize) -> Option<&'static str> {
    FP_NAMES.get(reg).copied()
}

/// Register number for a floating-point register name. `None` when nothing
/// matches.
#[must_use]
pub fn fp_number(name: &str) -> Option<usize> {
    FP_NAMES.iter().position(|&canonical| canonical == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_register_round_trips() {
        for reg in 0..NUM_REGISTERS {
            let n = name(reg).unwrap();
            assert_eq!(number(n), Some(reg));
        }
    }

    #[test]
    fn every_fp_register_round_trips() {
        for reg in 0..NUM_FP_REGISTERS {
            let n = fp_name(reg).unwrap();
            assert_eq!(fp_number(n), Some(reg));
        }
    }

    #[test]
    fn conventional_names_win() {
        assert_eq!(name(1), Some("sp"));
        assert_eq!(name(12), Some("ip"));
        assert_eq!(name(31), Some("fp"));
    }

    #[test]
    fn aliases_resolve_on_lookup() {
        assert_eq!(number("r1"), Some(1));
        assert_eq!(number("sl"), Some(10));
        assert_eq!(number("r12"), Some(12));
        assert_eq!(number("r31"), Some(31));

        // The canonical spelling of the same registers still resolves.
        assert_eq!(number("sp"), Some(1));
        assert_eq!(number("fp"), Some(31));
    }

    #[test]
    fn unknown_lookups_miss() {
        assert_eq!(name(NUM_REGISTERS), None);
        assert_eq!(fp_name(NUM_FP_REGISTERS), None);
        assert_eq!(number("r32"), None);
        assert_eq!(number("d0"), None);
        assert_eq!(fp_number("r0"), None);
        assert_eq!(fp_number("d32"), None);
    }
}
