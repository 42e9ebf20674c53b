//! Clebsch–Gordan coefficients for coupling with a single spin-$`\tfrac{1}{2}`$
//! particle.

use crate::angmom::spin::HalfSpin;
use crate::symbolic::coefficient::SignedSqrtRational;

#[cfg(test)]
#[path = "coupling_tests.rs"]
mod coupling_tests;

/// Evaluates the Clebsch–Gordan coefficient
/// $`\braket{S_{\mathrm{p}} M_{\mathrm{p}}; \tfrac{1}{2} m | S M}`$ for the
/// coupling of a spin-$`S_{\mathrm{p}}`$ system with a single
/// spin-$`\tfrac{1}{2}`$ particle, in the Condon–Shortley phase convention.
///
/// This is the only coupling the genealogical scheme requires, for which the
/// closed forms are
///
/// ```math
/// \braket{S_{\mathrm{p}} (M \mp \tfrac{1}{2}); \tfrac{1}{2} (\pm\tfrac{1}{2})
///     | (S_{\mathrm{p}} + \tfrac{1}{2}) M}
///     = +\sqrt{\frac{S_{\mathrm{p}} \pm M + \tfrac{1}{2}}{2S_{\mathrm{p}} + 1}},
/// ```
///
/// ```math
/// \braket{S_{\mathrm{p}} (M \mp \tfrac{1}{2}); \tfrac{1}{2} (\pm\tfrac{1}{2})
///     | (S_{\mathrm{p}} - \tfrac{1}{2}) M}
///     = \mp\sqrt{\frac{S_{\mathrm{p}} \mp M + \tfrac{1}{2}}{2S_{\mathrm{p}} + 1}},
/// ```
///
/// evaluated exactly as signed square roots of rationals. Any selection-rule
/// violation — a projection out of range, $`M_{\mathrm{p}} + m \neq M`$, or
/// $`|S - S_{\mathrm{p}}| \neq \tfrac{1}{2}`$ — yields the exact zero
/// coefficient rather than an error, so that vanishing branches of a
/// genealogical recursion can be pruned by a simple zero test.
///
/// # Arguments
///
/// * `s_parent` - The spin $`S_{\mathrm{p}}`$ of the system before coupling.
/// * `m_parent` - The projection $`M_{\mathrm{p}}`$ of the system before
/// coupling.
/// * `m_spin` - The projection $`m = \pm\tfrac{1}{2}`$ of the added particle.
/// * `s_total` - The total spin $`S`$ after coupling.
/// * `m_total` - The total projection $`M`$ after coupling.
///
/// # Returns
///
/// The exact coupling coefficient.
#[must_use]
pub fn cg_spin_half(
    s_parent: HalfSpin,
    m_parent: HalfSpin,
    m_spin: HalfSpin,
    s_total: HalfSpin,
    m_total: HalfSpin,
) -> SignedSqrtRational {
    let ts = s_parent.twice();
    let tm = m_total.twice();
    if m_spin.twice().abs() != 1
        || s_parent.is_negative()
        || m_parent.twice() + m_spin.twice() != tm
        || m_parent.twice().abs() > ts
        || tm.abs() > s_total.twice()
    {
        return SignedSqrtRational::zero();
    }

    // Doubling the closed forms: S_p ± M + 1/2 = (ts ± tm + 1)/2 over
    // 2S_p + 1 = ts + 1 gives the radicand (ts ± tm + 1) / (2(ts + 1)).
    let denom = u64::try_from(2 * (ts + 1)).expect("Unable to convert a radicand denominator.");
    let spin_up = m_spin.twice() == 1;
    let ds = s_total.twice() - ts;
    let (signed_numer, negative) = match (ds, spin_up) {
        (1, true) => (ts + tm + 1, false),
        (1, false) => (ts - tm + 1, false),
        (-1, true) => (ts - tm + 1, true),
        (-1, false) => (ts + tm + 1, false),
        _ => return SignedSqrtRational::zero(),
    };
    let numer = u64::try_from(signed_numer.max(0)).expect("Unable to convert a radicand numerator.");
    SignedSqrtRational::sqrt_of(numer, denom, negative)
}
