//! Symbolic spin eigenfunction expressions and their canonicalisation.

use std::fmt;
use std::ops::Add;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::symbolic::coefficient::SignedSqrtRational;

#[cfg(test)]
#[path = "expr_tests.rs"]
mod expr_tests;

/// An enumerated type for the two spin states of a single electron.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum SpinFunction {
    /// Variant for the $`\alpha`$ (spin-up) state.
    Alpha,

    /// Variant for the $`\beta`$ (spin-down) state.
    Beta,
}

impl fmt::Display for SpinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinFunction::Alpha => write!(f, "a"),
            SpinFunction::Beta => write!(f, "b"),
        }
    }
}

/// An elementary spin label: one spin function at one orbital position,
/// *i.e.* the symbolic factor $`a(k)`$ or $`b(k)`$.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SpinLabel {
    /// The 1-based orbital position $`k`$.
    pub index: usize,

    /// The spin function occupying the position.
    pub function: SpinFunction,
}

impl SpinLabel {
    /// Constructs an $`\alpha`$ label at orbital position `index`.
    #[must_use]
    pub fn alpha(index: usize) -> Self {
        Self {
            index,
            function: SpinFunction::Alpha,
        }
    }

    /// Constructs a $`\beta`$ label at orbital position `index`.
    #[must_use]
    pub fn beta(index: usize) -> Self {
        Self {
            index,
            function: SpinFunction::Beta,
        }
    }
}

impl fmt::Display for SpinLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function, self.index)
    }
}

/// A single product term of a spin eigenfunction: an exact coefficient
/// multiplying a product of elementary spin labels over pairwise distinct
/// orbital positions.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CsfTerm {
    coefficient: SignedSqrtRational,
    labels: Vec<SpinLabel>,
}

impl CsfTerm {
    /// Constructs a term from a coefficient and a label product.
    #[must_use]
    pub fn new(coefficient: SignedSqrtRational, labels: Vec<SpinLabel>) -> Self {
        Self {
            coefficient,
            labels,
        }
    }

    /// Constructs the pure-scalar term with no spin labels.
    #[must_use]
    pub fn scalar(coefficient: SignedSqrtRational) -> Self {
        Self {
            coefficient,
            labels: Vec::new(),
        }
    }

    /// The exact coefficient of this term.
    pub fn coefficient(&self) -> &SignedSqrtRational {
        &self.coefficient
    }

    /// The spin labels of this term, in their current order.
    pub fn labels(&self) -> &[SpinLabel] {
        &self.labels
    }
}

impl fmt::Display for CsfTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_product = self.labels.iter().map(|l| l.to_string()).join(" ");
        if self.labels.is_empty() {
            write!(f, "{}", self.coefficient)
        } else if self.coefficient.is_one() {
            write!(f, "{label_product}")
        } else {
            write!(f, "{} {label_product}", self.coefficient)
        }
    }
}

/// A spin eigenfunction expression: a finite flat sum of product terms. The
/// zero expression is the empty sum.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CsfExpr {
    terms: Vec<CsfTerm>,
}

impl CsfExpr {
    /// The zero expression.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// A pure-scalar expression with no spin labels.
    #[must_use]
    pub fn scalar(coefficient: SignedSqrtRational) -> Self {
        if coefficient.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![CsfTerm::scalar(coefficient)],
            }
        }
    }

    /// Constructs an expression from a list of terms, dropping any with zero
    /// coefficients.
    #[must_use]
    pub fn from_terms(terms: Vec<CsfTerm>) -> Self {
        Self {
            terms: terms
                .into_iter()
                .filter(|t| !t.coefficient.is_zero())
                .collect(),
        }
    }

    /// Checks if this expression is structurally zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The number of product terms in this expression.
    #[must_use]
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// The product terms of this expression.
    pub fn terms(&self) -> &[CsfTerm] {
        &self.terms
    }

    /// Multiplies every term of this expression by a scalar coefficient.
    ///
    /// # Arguments
    ///
    /// * `coefficient` - The scalar factor.
    ///
    /// # Returns
    ///
    /// The scaled expression. Scaling by zero yields the zero expression.
    #[must_use]
    pub fn scaled(&self, coefficient: &SignedSqrtRational) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|term| CsfTerm {
                    coefficient: &term.coefficient * coefficient,
                    labels: term.labels.clone(),
                })
                .collect(),
        }
    }

    /// Distributes an elementary spin label over every term of this
    /// expression, *i.e.* multiplies the whole sum by $`a(k)`$ or $`b(k)`$.
    ///
    /// # Arguments
    ///
    /// * `label` - The label to be appended to every product term.
    ///
    /// # Returns
    ///
    /// The expanded expression.
    #[must_use]
    pub fn appended(&self, label: SpinLabel) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|term| {
                    let mut labels = term.labels.clone();
                    labels.push(label);
                    CsfTerm {
                        coefficient: term.coefficient.clone(),
                        labels,
                    }
                })
                .collect(),
        }
    }

    /// Rewrites this expression in canonical form.
    ///
    /// The commutative spin-label factors of every term are sorted by orbital
    /// position, like terms (identical sorted label sequences) are collected by
    /// exact coefficient addition, terms with vanishing coefficients are
    /// dropped, and the surviving terms are ordered by their label sequences.
    /// Algebraically identical expressions arising from different recursion
    /// orders therefore compare identically. This rewrite has no numeric
    /// effect and is idempotent.
    ///
    /// # Returns
    ///
    /// The canonicalised expression.
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        let mut collected: IndexMap<Vec<SpinLabel>, SignedSqrtRational> = IndexMap::new();
        for term in &self.terms {
            let mut labels = term.labels.clone();
            labels.sort_by_key(|label| label.index);
            match collected.entry(labels) {
                indexmap::map::Entry::Occupied(mut entry) => {
                    let sum = entry
                        .get()
                        .checked_add(&term.coefficient)
                        .expect("Unable to add coefficients with incommensurate radicands.");
                    entry.insert(sum);
                }
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(term.coefficient.clone());
                }
            }
        }
        let mut terms = collected
            .into_iter()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(labels, coefficient)| CsfTerm {
                coefficient,
                labels,
            })
            .collect_vec();
        terms.sort_by(|t1, t2| t1.labels.cmp(&t2.labels));
        Self { terms }
    }
}

impl Add for CsfExpr {
    type Output = CsfExpr;

    /// Forms the flat sum of two expressions. No like-term collection is
    /// performed here; see [`Self::canonicalize`].
    fn add(mut self, mut rhs: CsfExpr) -> Self::Output {
        self.terms.append(&mut rhs.terms);
        self
    }
}

impl fmt::Display for CsfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i == 0 {
                write!(f, "{term}")?;
            } else if term.coefficient.is_negative() {
                let flipped = CsfTerm {
                    coefficient: term.coefficient.abs(),
                    labels: term.labels.clone(),
                };
                write!(f, " - {flipped}")?;
            } else {
                write!(f, " + {term}")?;
            }
        }
        Ok(())
    }
}
