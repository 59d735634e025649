pub mod fields;
pub mod instruction;
pub mod opcode;
pub mod registers;
