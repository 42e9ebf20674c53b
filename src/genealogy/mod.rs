//! Genealogical spin coupling: branching-diagram paths and multiplet counting.

pub mod multiplet;
pub mod path;
