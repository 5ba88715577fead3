//! Literal source node implementations
//!
//! The int/float/string/list literals are editable in place via
//! double-click; the random literals are sampled once at creation and never
//! re-rolled.

pub mod float_value;
pub mod int_value;
pub mod list_value;
pub mod random_float;
pub mod random_int;
pub mod string_value;
