use approx::assert_relative_eq;

use crate::angmom::spin::HalfSpin;
use crate::csf::construction::CsfConstructionContext;
use crate::genealogy::path::SpinPath;
use crate::symbolic::coefficient::SignedSqrtRational;
use crate::symbolic::expr::{CsfExpr, CsfTerm, SpinLabel};

fn path_from_twices(twices: &[i64]) -> SpinPath {
    SpinPath::from_spins(twices.iter().map(|&t| HalfSpin::from_twice(t)).collect()).unwrap()
}

fn construct(twices: &[i64], tm: i64) -> CsfExpr {
    CsfConstructionContext::new()
        .construct(&path_from_twices(twices), HalfSpin::from_twice(tm))
        .canonicalize()
}

/// The Euclidean inner product of two canonicalised expressions in the
/// orthonormal monomial basis, evaluated in floating point.
fn dot(lhs: &CsfExpr, rhs: &CsfExpr) -> f64 {
    lhs.terms()
        .iter()
        .map(|lterm| {
            rhs.terms()
                .iter()
                .filter(|rterm| rterm.labels() == lterm.labels())
                .map(|rterm| lterm.coefficient().to_f64() * rterm.coefficient().to_f64())
                .sum::<f64>()
        })
        .sum()
}

#[test]
fn test_construction_vacuum() {
    let vacuum = construct(&[0], 0);
    assert_eq!(vacuum, CsfExpr::scalar(SignedSqrtRational::one()));
}

#[test]
fn test_construction_single_electron() {
    assert_eq!(construct(&[0, 1], 1).to_string(), "a(1)");
    assert_eq!(construct(&[0, 1], -1).to_string(), "b(1)");
}

#[test]
fn test_construction_two_electrons() {
    // Triplet, M = 0: (αβ + βα)/√2.
    let triplet = construct(&[0, 1, 2], 0);
    assert_eq!(triplet.to_string(), "√2/2 a(1) b(2) + √2/2 b(1) a(2)");

    // Triplet, M = ±1: single stretched monomials.
    assert_eq!(construct(&[0, 1, 2], 2).to_string(), "a(1) a(2)");
    assert_eq!(construct(&[0, 1, 2], -2).to_string(), "b(1) b(2)");

    // Singlet, M = 0: (αβ - βα)/√2.
    let singlet = construct(&[0, 1, 0], 0);
    assert_eq!(singlet.to_string(), "√2/2 a(1) b(2) - √2/2 b(1) a(2)");

    assert_relative_eq!(dot(&triplet, &triplet), 1.0, epsilon = 1e-12);
    assert_relative_eq!(dot(&singlet, &singlet), 1.0, epsilon = 1e-12);
    assert_relative_eq!(dot(&triplet, &singlet), 0.0, epsilon = 1e-12);
}

#[test]
fn test_construction_three_electron_doublets() {
    // The two linearly independent S = 1/2 doublets of three electrons at
    // M = +1/2.
    let via_triplet = construct(&[0, 1, 2, 1], 1);
    let expected = CsfExpr::from_terms(vec![
        CsfTerm::new(
            SignedSqrtRational::sqrt_of(2, 3, false),
            vec![
                SpinLabel::alpha(1),
                SpinLabel::alpha(2),
                SpinLabel::beta(3),
            ],
        ),
        CsfTerm::new(
            SignedSqrtRational::sqrt_of(1, 6, true),
            vec![SpinLabel::alpha(1), SpinLabel::beta(2), SpinLabel::alpha(3)],
        ),
        CsfTerm::new(
            SignedSqrtRational::sqrt_of(1, 6, true),
            vec![SpinLabel::beta(1), SpinLabel::alpha(2), SpinLabel::alpha(3)],
        ),
    ]);
    assert_eq!(via_triplet, expected);

    let via_singlet = construct(&[0, 1, 0, 1], 1);
    assert_eq!(
        via_singlet.to_string(),
        "√2/2 a(1) b(2) a(3) - √2/2 b(1) a(2) a(3)"
    );

    assert_relative_eq!(dot(&via_triplet, &via_triplet), 1.0, epsilon = 1e-12);
    assert_relative_eq!(dot(&via_singlet, &via_singlet), 1.0, epsilon = 1e-12);
    assert_relative_eq!(dot(&via_triplet, &via_singlet), 0.0, epsilon = 1e-12);
}

#[test]
fn test_construction_four_electron_singlets() {
    // The singlet through the intermediate triplet expands into six monomials.
    let via_triplet = construct(&[0, 1, 2, 1, 0], 0);
    assert_eq!(via_triplet.n_terms(), 6);
    let third = SignedSqrtRational::sqrt_of(1, 3, false);
    let neg_sixth = SignedSqrtRational::sqrt_of(1, 12, true);
    let expected = CsfExpr::from_terms(vec![
        CsfTerm::new(
            third.clone(),
            vec![
                SpinLabel::alpha(1),
                SpinLabel::alpha(2),
                SpinLabel::beta(3),
                SpinLabel::beta(4),
            ],
        ),
        CsfTerm::new(
            neg_sixth.clone(),
            vec![
                SpinLabel::alpha(1),
                SpinLabel::beta(2),
                SpinLabel::alpha(3),
                SpinLabel::beta(4),
            ],
        ),
        CsfTerm::new(
            neg_sixth.clone(),
            vec![
                SpinLabel::alpha(1),
                SpinLabel::beta(2),
                SpinLabel::beta(3),
                SpinLabel::alpha(4),
            ],
        ),
        CsfTerm::new(
            neg_sixth.clone(),
            vec![
                SpinLabel::beta(1),
                SpinLabel::alpha(2),
                SpinLabel::alpha(3),
                SpinLabel::beta(4),
            ],
        ),
        CsfTerm::new(
            neg_sixth,
            vec![
                SpinLabel::beta(1),
                SpinLabel::alpha(2),
                SpinLabel::beta(3),
                SpinLabel::alpha(4),
            ],
        ),
        CsfTerm::new(
            third,
            vec![
                SpinLabel::beta(1),
                SpinLabel::beta(2),
                SpinLabel::alpha(3),
                SpinLabel::alpha(4),
            ],
        ),
    ]);
    assert_eq!(via_triplet, expected);

    // The singlet through the intermediate singlet expands into four monomials
    // with rational coefficients ±1/2.
    let via_singlet = construct(&[0, 1, 0, 1, 0], 0);
    assert_eq!(via_singlet.n_terms(), 4);
    assert_eq!(
        via_singlet.to_string(),
        "1/2 a(1) b(2) a(3) b(4) - 1/2 a(1) b(2) b(3) a(4) \
         - 1/2 b(1) a(2) a(3) b(4) + 1/2 b(1) a(2) b(3) a(4)"
    );

    assert_relative_eq!(dot(&via_triplet, &via_triplet), 1.0, epsilon = 1e-12);
    assert_relative_eq!(dot(&via_singlet, &via_singlet), 1.0, epsilon = 1e-12);
    assert_relative_eq!(dot(&via_triplet, &via_singlet), 0.0, epsilon = 1e-12);
}

#[test]
fn test_construction_projection_out_of_range() {
    // |M| > S vanishes structurally at every level.
    assert!(construct(&[0, 1, 0], 2).is_zero());
    assert!(construct(&[0, 1], 3).is_zero());
    assert!(construct(&[0, 1, 2, 1, 0], 2).is_zero());
}

#[test]
fn test_construction_projection_symmetry() {
    // Flipping M swaps every α with β, up to an overall phase; term counts and
    // normalisation agree.
    for (twices, tm) in [
        (&[0i64, 1, 2, 1][..], 1i64),
        (&[0, 1, 2, 3][..], 1),
        (&[0, 1, 2, 1, 2][..], 2),
    ] {
        let up = construct(twices, tm);
        let down = construct(twices, -tm);
        assert_eq!(up.n_terms(), down.n_terms());
        assert_relative_eq!(dot(&up, &up), 1.0, epsilon = 1e-12);
        assert_relative_eq!(dot(&down, &down), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_construction_memoisation_consistency() {
    // A shared context reused across paths and projections must agree with
    // fresh contexts.
    let mut context = CsfConstructionContext::new();
    let path1 = path_from_twices(&[0, 1, 2, 1, 0]);
    let path2 = path_from_twices(&[0, 1, 0, 1, 0]);
    let m0 = HalfSpin::zero();
    let shared1 = context.construct(&path1, m0).canonicalize();
    let shared2 = context.construct(&path2, m0).canonicalize();
    let again1 = context.construct(&path1, m0).canonicalize();
    assert_eq!(shared1, construct(&[0, 1, 2, 1, 0], 0));
    assert_eq!(shared2, construct(&[0, 1, 0, 1, 0], 0));
    assert_eq!(shared1, again1);
}
