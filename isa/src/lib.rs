#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
mod bitwise;

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::upper_case_acronyms)]
pub mod arm;

#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::upper_case_acronyms)]
pub mod ppc;
