//! Rounding controls for the ported floating point surface.

use serde::{Deserialize, Serialize};

/// Rounding modes, in the legacy notation's two-bit encoding.
///
/// The values happen to coincide with the native FPSCR RN field, which is
/// why ported conversion emitters could keep passing them through.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum VFPRoundingMode {
    /// Round to nearest.
    RN = 0,
    /// Round towards zero.
    RZ = 1,
    /// Round towards plus infinity.
    RP = 2,
    /// Round towards minus infinity.
    RM = 3,
}

impl VFPRoundingMode {
    // Spelled-out aliases used by call sites that name the intent rather
    // than the mode register value.
    pub const ROUND_TO_NEAREST: Self = Self::RN;
    pub const ROUND_TO_ZERO: Self = Self::RZ;
    pub const ROUND_TO_PLUS_INF: Self = Self::RP;
    pub const ROUND_TO_MINUS_INF: Self = Self::RM;
}

/// Both rounding mode bits.
pub const ROUNDING_MODE_MASK: u32 = 3;

/// Whether a float-to-integer conversion should also flag inexactness.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum CheckForInexactConversion {
    Check,
    #[default]
    DontCheck,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn modes_fit_the_mask() {
        for mode in [
            VFPRoundingMode::RN,
            VFPRoundingMode::RZ,
            VFPRoundingMode::RP,
            VFPRoundingMode::RM,
        ] {
            assert_eq!(mode as u32 & !ROUNDING_MODE_MASK, 0);
        }
    }

    #[test]
    fn aliases_name_the_same_modes() {
        assert_eq!(VFPRoundingMode::ROUND_TO_NEAREST, VFPRoundingMode::RN);
        assert_eq!(VFPRoundingMode::ROUND_TO_ZERO, VFPRoundingMode::RZ);
        assert_eq!(VFPRoundingMode::ROUND_TO_PLUS_INF, VFPRoundingMode::RP);
        assert_eq!(VFPRoundingMode::ROUND_TO_MINUS_INF, VFPRoundingMode::RM);
    }

    #[test]
    fn conversions_skip_the_inexact_check_by_default() {
        assert_eq!(
            CheckForInexactConversion::default(),
            CheckForInexactConversion::DontCheck
        );
    }
}
