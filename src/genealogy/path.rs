//! Genealogical spin-coupling paths and their memoised enumeration.

use std::fmt;

use anyhow::{self, bail};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::angmom::spin::HalfSpin;

#[cfg(test)]
#[path = "path_tests.rs"]
mod path_tests;

// ==================
// Struct definitions
// ==================

/// A structure to represent one genealogical spin-coupling path.
///
/// A path for $`N`$ electrons is the ordered sequence of $`N + 1`$ intermediate
/// total spins $`[S_0 = 0, S_1, \ldots, S_N]`$ obtained by coupling one
/// spin-$`\tfrac{1}{2}`$ electron at a time, where every step changes the spin
/// by exactly $`\tfrac{1}{2}`$ and every intermediate value satisfies
/// $`0 \le S_k \le k/2`$. Paths are immutable once constructed; two paths with
/// the same final spin but different intermediate histories address two
/// linearly independent configuration state functions, which is the
/// combinatorial origin of spin degeneracy.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SpinPath {
    spins: Vec<HalfSpin>,
}

impl SpinPath {
    /// Validates a spin sequence and constructs the corresponding path.
    ///
    /// # Arguments
    ///
    /// * `spins` - The sequence of intermediate total spins, starting from the
    /// vacuum value $`S_0 = 0`$.
    ///
    /// # Returns
    ///
    /// A `Result` containing the path, or an error describing the violated
    /// invariant.
    pub fn from_spins(spins: Vec<HalfSpin>) -> Result<Self, anyhow::Error> {
        let Some(first) = spins.first() else {
            bail!("A spin path cannot be empty.");
        };
        if !first.is_zero() {
            bail!("A spin path must start from the vacuum spin 0, not {first}.");
        }
        for (k, (previous, current)) in spins.iter().tuple_windows().enumerate() {
            let step = current.twice() - previous.twice();
            if step.abs() != 1 {
                bail!(
                    "Consecutive spins {previous} and {current} do not differ by exactly 1/2 in \
                     a spin path."
                );
            }
            let k = i64::try_from(k + 1).expect("Unable to convert a path position.");
            if current.is_negative() || current.twice() > k {
                bail!("Intermediate spin {current} at position {k} lies outside [0, {k}/2].");
            }
        }
        Ok(Self { spins })
    }

    /// The number of electrons coupled along this path.
    #[must_use]
    pub fn n_electrons(&self) -> usize {
        self.spins.len() - 1
    }

    /// The intermediate total spins of this path.
    pub fn spins(&self) -> &[HalfSpin] {
        &self.spins
    }

    /// The final total spin of this path.
    #[must_use]
    pub fn final_spin(&self) -> HalfSpin {
        *self
            .spins
            .last()
            .expect("Unable to obtain the final spin of a path.")
    }

    /// The spin of this path before the last electron was coupled, if any
    /// electron has been coupled at all.
    #[must_use]
    pub fn parent_spin(&self) -> Option<HalfSpin> {
        let len = self.spins.len();
        (len >= 2).then(|| self.spins[len - 2])
    }

    /// The path with the last coupling step removed, if any electron has been
    /// coupled at all.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        (self.spins.len() >= 2).then(|| Self {
            spins: self.spins[..self.spins.len() - 1].to_vec(),
        })
    }
}

impl fmt::Display for SpinPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.spins.iter().map(|s| s.to_string()).join(", ")
        )
    }
}

// ==========
// Enumerator
// ==========

/// A short-lived enumerator for the genealogical spin paths of one
/// $`(N, S)`$ request.
///
/// The enumerator performs a depth-first recursive search over the branching
/// diagram, memoised on `(depth, current spin)`: the set of completions from a
/// node depends only on the remaining depth and the spin at that node, never on
/// the history above it, which is what keeps the enumeration polynomial despite
/// the exponential-looking tree. The memoisation table lives inside the
/// enumerator and dies with it, so no state can leak between requests.
pub struct SpinPathEnumerator {
    /// The number $`N`$ of electrons to be coupled.
    n_electrons: usize,

    /// The target total spin $`S_N`$.
    target_spin: HalfSpin,

    /// The memoisation table mapping `(depth, current spin)` to the list of
    /// path completions from that node.
    cache: IndexMap<(usize, HalfSpin), Vec<Vec<HalfSpin>>>,
}

impl SpinPathEnumerator {
    /// Constructs an enumerator for a given electron count and target spin.
    ///
    /// # Arguments
    ///
    /// * `n_electrons` - The number $`N`$ of electrons.
    /// * `target_spin` - The target total spin $`S`$.
    #[must_use]
    pub fn new(n_electrons: usize, target_spin: HalfSpin) -> Self {
        Self {
            n_electrons,
            target_spin,
            cache: IndexMap::new(),
        }
    }

    /// Enumerates every genealogical path compatible with the request.
    ///
    /// The returned order is deterministic: at every node the spin-raising
    /// branch is explored before the spin-lowering one, so downstream consumers
    /// may number the resulting configuration state functions stably.
    ///
    /// # Returns
    ///
    /// All admissible paths, possibly none.
    pub fn enumerate(&mut self) -> Vec<SpinPath> {
        self.completions(0, HalfSpin::zero())
            .into_iter()
            .map(|spins| SpinPath { spins })
            .collect()
    }

    /// Returns every admissible spin sequence from a node of the branching
    /// diagram down to the target.
    ///
    /// # Arguments
    ///
    /// * `depth` - The number of electrons already coupled at this node.
    /// * `current_spin` - The total spin at this node.
    ///
    /// # Returns
    ///
    /// The completions, each of length `n_electrons - depth + 1` and starting
    /// at `current_spin`.
    fn completions(&mut self, depth: usize, current_spin: HalfSpin) -> Vec<Vec<HalfSpin>> {
        if let Some(paths) = self.cache.get(&(depth, current_spin)) {
            return paths.clone();
        }

        if depth == self.n_electrons {
            return if current_spin == self.target_spin {
                vec![vec![self.target_spin]]
            } else {
                Vec::new()
            };
        }

        // A node is physically inadmissible when its spin cannot be reached by
        // `depth` spin-1/2 couplings from zero.
        let max_twice = i64::try_from(depth).expect("Unable to convert a coupling depth.");
        if current_spin.is_negative() || current_spin.twice() > max_twice {
            return Vec::new();
        }

        let mut paths = Vec::new();
        for completion in self.completions(depth + 1, current_spin.raised()) {
            let mut path = Vec::with_capacity(completion.len() + 1);
            path.push(current_spin);
            path.extend(completion);
            paths.push(path);
        }
        // The spin-lowering branch from S = 0 is forbidden: total spins are
        // non-negative by convention.
        if !current_spin.is_zero() {
            for completion in self.completions(depth + 1, current_spin.lowered()) {
                let mut path = Vec::with_capacity(completion.len() + 1);
                path.push(current_spin);
                path.extend(completion);
                paths.push(path);
            }
        }

        self.cache.insert((depth, current_spin), paths.clone());
        paths
    }
}

/// Enumerates the genealogical spin paths for `n_electrons` electrons coupled
/// to total spin `target_spin`.
///
/// This is a convenience wrapper constructing a fresh [`SpinPathEnumerator`]
/// for one request.
#[must_use]
pub fn enumerate_spin_paths(n_electrons: usize, target_spin: HalfSpin) -> Vec<SpinPath> {
    SpinPathEnumerator::new(n_electrons, target_spin).enumerate()
}
