use approx::assert_relative_eq;
use fraction::BigFraction;

use crate::symbolic::coefficient::SignedSqrtRational;

type Q = BigFraction;

#[test]
fn test_coefficient_normalisation() {
    // √(1/2) = √2/2 and √(2/4) = √2/2 normalise identically.
    let c1 = SignedSqrtRational::sqrt_of(1, 2, false);
    let c2 = SignedSqrtRational::sqrt_of(2, 4, false);
    assert_eq!(c1, c2);

    // √(4/9) is purely rational.
    let c3 = SignedSqrtRational::sqrt_of(4, 9, false);
    assert_eq!(c3, SignedSqrtRational::from_rational(Q::new(2u8, 3u8)));

    // √(8/3) = 2√6/3.
    let c4 = SignedSqrtRational::sqrt_of(8, 3, false);
    assert_relative_eq!(
        c4.to_f64(),
        (8.0f64 / 3.0).sqrt(),
        epsilon = 1e-12,
        max_relative = 1e-12
    );

    // √1 and √0.
    assert!(SignedSqrtRational::sqrt_of(1, 1, false).is_one());
    assert!(SignedSqrtRational::sqrt_of(0, 5, false).is_zero());
    assert!(SignedSqrtRational::sqrt_of(0, 5, true).is_zero());
}

#[test]
fn test_coefficient_signs() {
    let c = SignedSqrtRational::sqrt_of(1, 2, true);
    assert!(c.is_negative());
    assert!(!c.is_zero());
    assert_eq!(c.abs(), SignedSqrtRational::sqrt_of(1, 2, false));
    assert_eq!(-c.clone(), c.abs());
    assert!(!SignedSqrtRational::zero().is_negative());
}

#[test]
fn test_coefficient_multiplication() {
    let sqrt_half = SignedSqrtRational::sqrt_of(1, 2, false);
    // √(1/2) × √(1/2) = 1/2.
    assert_eq!(
        &sqrt_half * &sqrt_half,
        SignedSqrtRational::from_rational(Q::new(1u8, 2u8))
    );
    // √(1/2) × √(2/3) = √3/3.
    let sqrt_two_thirds = SignedSqrtRational::sqrt_of(2, 3, false);
    assert_eq!(
        &sqrt_half * &sqrt_two_thirds,
        SignedSqrtRational::sqrt_of(1, 3, false)
    );
    // Signs multiply.
    let neg = SignedSqrtRational::sqrt_of(1, 2, true);
    assert_eq!(
        &neg * &neg,
        SignedSqrtRational::from_rational(Q::new(1u8, 2u8))
    );
    assert!((&neg * &sqrt_half).is_negative());
    // Zero annihilates.
    assert!((&neg * &SignedSqrtRational::zero()).is_zero());
}

#[test]
fn test_coefficient_checked_add() {
    let sqrt_half = SignedSqrtRational::sqrt_of(1, 2, false);
    let neg_sqrt_half = SignedSqrtRational::sqrt_of(1, 2, true);

    // Like radicands add on the rational multiplier.
    let doubled = sqrt_half.checked_add(&sqrt_half).unwrap();
    assert_relative_eq!(
        doubled.to_f64(),
        2.0 * 0.5f64.sqrt(),
        epsilon = 1e-12,
        max_relative = 1e-12
    );

    // Exact cancellation yields the canonical zero.
    let cancelled = sqrt_half.checked_add(&neg_sqrt_half).unwrap();
    assert!(cancelled.is_zero());
    assert_eq!(cancelled, SignedSqrtRational::zero());

    // Zero is the additive identity for any radicand.
    assert_eq!(
        SignedSqrtRational::zero().checked_add(&sqrt_half).unwrap(),
        sqrt_half
    );
    assert_eq!(
        sqrt_half.checked_add(&SignedSqrtRational::zero()).unwrap(),
        sqrt_half
    );

    // Incommensurate radicands cannot be added within the set.
    let sqrt_third = SignedSqrtRational::sqrt_of(1, 3, false);
    assert!(sqrt_half.checked_add(&sqrt_third).is_none());
}

#[test]
fn test_coefficient_display() {
    assert_eq!(SignedSqrtRational::zero().to_string(), "0");
    assert_eq!(SignedSqrtRational::one().to_string(), "1");
    assert_eq!(
        SignedSqrtRational::from_rational(Q::new(3u8, 4u8)).to_string(),
        "3/4"
    );
    assert_eq!(
        SignedSqrtRational::sqrt_of(1, 2, false).to_string(),
        "√2/2"
    );
    assert_eq!(
        SignedSqrtRational::sqrt_of(1, 2, true).to_string(),
        "-√2/2"
    );
    assert_eq!(SignedSqrtRational::sqrt_of(3, 1, false).to_string(), "√3");
    assert_eq!(
        SignedSqrtRational::sqrt_of(8, 3, false).to_string(),
        "2√6/3"
    );
    assert_eq!(
        SignedSqrtRational::sqrt_of(4, 1, true).to_string(),
        "-2"
    );
}

#[test]
fn test_coefficient_serde() {
    for coefficient in [
        SignedSqrtRational::zero(),
        SignedSqrtRational::one(),
        SignedSqrtRational::sqrt_of(1, 2, false),
        SignedSqrtRational::sqrt_of(1, 12, true),
        SignedSqrtRational::sqrt_of(8, 3, false),
        SignedSqrtRational::from_rational(Q::new(7u8, 5u8)),
    ] {
        let yaml = serde_yaml::to_string(&coefficient).unwrap();
        let recovered: SignedSqrtRational = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(recovered, coefficient);
    }

    // Non-normalised text normalises on parsing.
    let parsed: SignedSqrtRational = "1/2*sqrt(8)".parse().unwrap();
    assert_eq!(parsed, SignedSqrtRational::sqrt_of(2, 1, false));
    assert!("".parse::<SignedSqrtRational>().is_err());
    assert!("sqrt(".parse::<SignedSqrtRational>().is_err());
}
