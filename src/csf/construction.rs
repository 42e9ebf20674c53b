//! Recursive construction of configuration state functions.

use indexmap::IndexMap;

use crate::angmom::coupling::cg_spin_half;
use crate::angmom::spin::HalfSpin;
use crate::genealogy::path::SpinPath;
use crate::symbolic::coefficient::SignedSqrtRational;
use crate::symbolic::expr::{CsfExpr, SpinLabel};

#[cfg(test)]
#[path = "construction_tests.rs"]
mod construction_tests;

/// A short-lived context for constructing the configuration state functions of
/// one generation request.
///
/// The context owns the memoisation table mapping `(path, M)` to the
/// already-expanded spin eigenfunction of that subproblem. Distinct paths of
/// one $`(N, S)`$ request share ancestors, so the same `(path, M)` pair recurs
/// across top-level constructions and memoisation converts the exponential
/// recursion tree into a polynomial number of distinct subproblems. The table
/// dies with the context, so no state can leak between requests.
pub struct CsfConstructionContext {
    cache: IndexMap<(SpinPath, HalfSpin), CsfExpr>,
}

impl CsfConstructionContext {
    /// Constructs a fresh context with an empty memoisation table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: IndexMap::new(),
        }
    }

    /// Constructs the spin eigenfunction of a genealogical path at a given
    /// total projection.
    ///
    /// Each recursion step strips the last electron $`k`$ off the path and
    /// couples it back symbolically: the eigenfunction is the sum of the parent
    /// eigenfunction at $`M - \tfrac{1}{2}`$ multiplied by $`a(k)`$ and the
    /// parent eigenfunction at $`M + \tfrac{1}{2}`$ multiplied by $`b(k)`$,
    /// each weighted by the corresponding Clebsch–Gordan coefficient. A
    /// vanishing coefficient or a vanishing parent eigenfunction prunes the
    /// branch before any expression is built.
    ///
    /// # Arguments
    ///
    /// * `path` - The genealogical path whose eigenfunction is required.
    /// * `m_total` - The total spin projection $`M`$.
    ///
    /// # Returns
    ///
    /// The fully expanded eigenfunction as a flat sum of monomials. A
    /// projection outside $`[-S, S]`$ yields the zero expression at any
    /// recursion level, which is a legitimate outcome rather than an error: it
    /// is how physically inadmissible branches and exact cancellations
    /// propagate.
    pub fn construct(&mut self, path: &SpinPath, m_total: HalfSpin) -> CsfExpr {
        let key = (path.clone(), m_total);
        if let Some(expr) = self.cache.get(&key) {
            return expr.clone();
        }

        let s_total = path.final_spin();
        if m_total.abs() > s_total {
            return CsfExpr::zero();
        }

        let k = path.n_electrons();
        if k == 0 {
            // The vacuum reference state with no electron coupled.
            return if s_total.is_zero() && m_total.is_zero() {
                CsfExpr::scalar(SignedSqrtRational::one())
            } else {
                CsfExpr::zero()
            };
        }

        let parent_path = path
            .parent()
            .expect("Unable to obtain the parent of a non-vacuum path.");
        let s_parent = parent_path.final_spin();

        let c_alpha = cg_spin_half(
            s_parent,
            m_total.lowered(),
            HalfSpin::one_half(),
            s_total,
            m_total,
        );
        let c_beta = cg_spin_half(
            s_parent,
            m_total.raised(),
            -HalfSpin::one_half(),
            s_total,
            m_total,
        );

        let mut result = CsfExpr::zero();
        if !c_alpha.is_zero() {
            let parent_expr = self.construct(&parent_path, m_total.lowered());
            if !parent_expr.is_zero() {
                result = result + parent_expr.scaled(&c_alpha).appended(SpinLabel::alpha(k));
            }
        }
        if !c_beta.is_zero() {
            let parent_expr = self.construct(&parent_path, m_total.raised());
            if !parent_expr.is_zero() {
                result = result + parent_expr.scaled(&c_beta).appended(SpinLabel::beta(k));
            }
        }

        self.cache.insert(key, result.clone());
        result
    }
}

impl Default for CsfConstructionContext {
    fn default() -> Self {
        Self::new()
    }
}
