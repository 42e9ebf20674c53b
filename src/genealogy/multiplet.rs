//! Spin-multiplet degeneracy counting and multiplet distributions.

use std::fmt;

use factorial::Factorial;
use itertools::Itertools;
use num::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::angmom::spin::HalfSpin;

#[cfg(test)]
#[path = "multiplet_tests.rs"]
mod multiplet_tests;

/// Calculates the number of combinations of `n` things taken `r` at a time
/// (unsigned arguments).
///
/// If $`r > n`$, `0` is returned.
///
/// # Arguments
///
/// * `n` - Number of things.
/// * `r` - Number of elements taken.
///
/// # Returns
///
/// The number of combinations.
fn combu(nu: u32, ru: u32) -> BigUint {
    if ru > nu {
        BigUint::zero()
    } else {
        (nu - ru + 1..=nu).product::<BigUint>()
            / BigUint::from(ru)
                .checked_factorial()
                .unwrap_or_else(|| panic!("Unable to compute the factorial of {ru}."))
    }
}

/// Calculates the degeneracy of the spin multiplet with total spin `total_spin`
/// for `n_electrons` unpaired electrons, *i.e.* the number of linearly
/// independent spin eigenfunctions sharing that total spin:
///
/// ```math
/// d(N, S) = \binom{N}{N/2 + S} - \binom{N}{N/2 + S + 1}.
/// ```
///
/// A negative `total_spin`, or one whose parity is incompatible with
/// `n_electrons`, yields zero.
///
/// # Arguments
///
/// * `n_electrons` - The number $`N`$ of unpaired electrons.
/// * `total_spin` - The total spin $`S`$.
///
/// # Returns
///
/// The degeneracy $`d(N, S)`$.
#[must_use]
pub fn multiplet_degeneracy(n_electrons: usize, total_spin: HalfSpin) -> BigUint {
    let ts = total_spin.twice();
    let n = u32::try_from(n_electrons).expect("Unable to convert an electron count.");
    if ts < 0 {
        return BigUint::zero();
    }
    let ts = u32::try_from(ts).expect("Unable to convert a doubled spin.");
    if (n + ts) % 2 != 0 || ts > n {
        return BigUint::zero();
    }
    let k = (n + ts) / 2;
    combu(n, k) - combu(n, k + 1)
}

// ==================
// Struct definitions
// ==================

/// A structure to represent one spin multiplet of an $`N`$-electron system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinMultiplet {
    /// The total spin $`S`$ of the multiplet.
    total_spin: HalfSpin,

    /// The number of linearly independent spin eigenfunctions with this total
    /// spin.
    count: BigUint,
}

impl SpinMultiplet {
    /// The total spin $`S`$ of this multiplet.
    #[must_use]
    pub fn total_spin(&self) -> HalfSpin {
        self.total_spin
    }

    /// The degeneracy count of this multiplet.
    pub fn count(&self) -> &BigUint {
        &self.count
    }

    /// The multiplicity $`2S + 1`$ of this multiplet.
    #[must_use]
    pub fn multiplicity(&self) -> u64 {
        u64::try_from(self.total_spin.twice() + 1)
            .expect("Unable to convert a spin multiplicity.")
    }

    /// The spectroscopic name of this multiplet: `Singlet` through `Octet` for
    /// multiplicities up to eight, `n-plet` beyond.
    #[must_use]
    pub fn name(&self) -> String {
        match self.multiplicity() {
            1 => "Singlet".to_string(),
            2 => "Doublet".to_string(),
            3 => "Triplet".to_string(),
            4 => "Quartet".to_string(),
            5 => "Quintet".to_string(),
            6 => "Sextet".to_string(),
            7 => "Septet".to_string(),
            8 => "Octet".to_string(),
            m => format!("{m}-plet"),
        }
    }

    /// The admissible spin projections $`M_S = -S, -S + 1, \ldots, S`$ of this
    /// multiplet.
    #[must_use]
    pub fn projections(&self) -> Vec<HalfSpin> {
        let ts = self.total_spin.twice();
        (-ts..=ts)
            .step_by(2)
            .map(HalfSpin::from_twice)
            .collect()
    }
}

/// A structure to represent the full spin-multiplet distribution of an
/// $`N`$-electron system, listing every total spin with a nonzero degeneracy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipletDistribution {
    /// The number $`N`$ of unpaired electrons.
    n_electrons: usize,

    /// The multiplets with nonzero counts, in order of decreasing total spin.
    multiplets: Vec<SpinMultiplet>,
}

impl MultipletDistribution {
    /// Analyses the spin-multiplet distribution of `n_electrons` unpaired
    /// electrons.
    ///
    /// # Arguments
    ///
    /// * `n_electrons` - The number $`N`$ of unpaired electrons.
    ///
    /// # Returns
    ///
    /// The distribution, with multiplets ordered by decreasing total spin.
    #[must_use]
    pub fn analyse(n_electrons: usize) -> Self {
        let n = i64::try_from(n_electrons).expect("Unable to convert an electron count.");
        let start = n % 2;
        let multiplets = (start..=n)
            .step_by(2)
            .map(HalfSpin::from_twice)
            .map(|total_spin| SpinMultiplet {
                total_spin,
                count: multiplet_degeneracy(n_electrons, total_spin),
            })
            .filter(|multiplet| !multiplet.count.is_zero())
            .sorted_by_key(|multiplet| -multiplet.total_spin.twice())
            .collect_vec();
        Self {
            n_electrons,
            multiplets,
        }
    }

    /// The number $`N`$ of unpaired electrons.
    #[must_use]
    pub fn n_electrons(&self) -> usize {
        self.n_electrons
    }

    /// The multiplets with nonzero counts, ordered by decreasing total spin.
    pub fn multiplets(&self) -> &[SpinMultiplet] {
        &self.multiplets
    }

    /// The total number of spin microstates, $`2^N`$.
    #[must_use]
    pub fn total_microstates(&self) -> BigUint {
        BigUint::from(1u8) << self.n_electrons
    }
}

impl fmt::Display for MultipletDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total microstates: 2^{} = {}",
            self.n_electrons,
            self.total_microstates()
        )?;
        writeln!(f)?;
        writeln!(f, "Unique spin multiplets:")?;
        for multiplet in &self.multiplets {
            let plural = if multiplet.count > BigUint::from(1u8) {
                "s"
            } else {
                ""
            };
            writeln!(
                f,
                "  {} {}{}  (S = {}, multiplicity = {})",
                multiplet.count,
                multiplet.name(),
                plural,
                multiplet.total_spin,
                multiplet.multiplicity()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Spin multiplet distribution:")?;
        let label_width = self
            .multiplets
            .iter()
            .map(|multiplet| multiplet.total_spin.to_string().chars().count())
            .max()
            .unwrap_or(1);
        let mut max_count = 0;
        for multiplet in &self.multiplets {
            let count = multiplet.count.to_usize().unwrap_or(usize::MAX).min(64);
            max_count = max_count.max(count);
            writeln!(
                f,
                "  {:>label_width$} │ {}",
                multiplet.total_spin.to_string(),
                "●".repeat(count)
            )?;
        }
        writeln!(
            f,
            "  {}└{} N = {}",
            " ".repeat(label_width + 1),
            "─".repeat(max_count.max(1)),
            self.n_electrons
        )?;
        writeln!(f)?;
        writeln!(f, "Admissible projections M for each S:")?;
        for multiplet in &self.multiplets {
            writeln!(
                f,
                "  S = {}: M ∈ {{{}}}",
                multiplet.total_spin,
                multiplet
                    .projections()
                    .iter()
                    .map(|m| m.to_string())
                    .join(", ")
            )?;
        }
        Ok(())
    }
}
