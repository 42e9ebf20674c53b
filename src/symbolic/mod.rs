//! Exact symbolic representation of spin eigenfunctions.

pub mod coefficient;
pub mod expr;
