pub mod condition;
pub mod fake_opcode;
pub mod fields;
pub mod svc;
pub mod vfp;
