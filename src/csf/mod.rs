//! Construction of configuration state functions from genealogical paths.

pub mod construction;
