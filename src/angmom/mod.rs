//! Exact angular momentum quantities for spin-$`\tfrac{1}{2}`$ coupling.

pub mod coupling;
pub mod spin;
