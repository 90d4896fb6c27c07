//! Instruction data accepted by the quotient program.

pub mod divide;

pub use divide::*;
