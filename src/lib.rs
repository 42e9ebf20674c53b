//! # GenCSF: A Program for the Genealogical Construction of Configuration State Functions
//!
//! GenCSF enumerates the configuration state functions (CSFs) of a system of $`N`$
//! unpaired spin-$`\tfrac{1}{2}`$ electrons with prescribed total spin $`S`$ and
//! spin projection $`M_S`$, using the genealogical (branching-diagram) coupling
//! scheme. For every admissible sequence of intermediate total spins, the
//! corresponding spin eigenfunction is constructed exactly as a linear
//! combination of elementary $`\alpha`$/$`\beta`$ spin-label products weighted by
//! Clebsch–Gordan coupling coefficients.
//!
//! All spin quantum numbers and expansion coefficients are handled exactly:
//! half-integer spins are stored as exact fractions, and coefficients as signed
//! square roots of rationals, so that no floating-point comparison ever decides
//! recursion termination, memoisation, or term collection.
//!
//! This documentation details the public API of the `gencsf` crate. The
//! compiled `gencsf` binary accepts either a YAML configuration file or direct
//! command-line arguments; see the `README.md` file for usage examples.
//!
//! ## License
//!
//! GNU Lesser General Public License v3.0.

pub mod angmom;
pub mod csf;
pub mod drivers;
pub mod genealogy;
pub mod interfaces;
pub mod io;
pub mod symbolic;
