//! Logic node implementations
//!
//! Logic nodes operate on truthiness (zero, the empty string and the empty
//! list are falsy) and emit Int 0/1; an Error operand propagates.

pub mod and;
pub mod not;
pub mod or;
pub mod xor;
