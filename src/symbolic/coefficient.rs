//! Exact coefficients of the form $`r\sqrt{q}`$ with rational $`r`$ and $`q`$.

use std::fmt;
use std::ops::{Mul, Neg};
use std::str::FromStr;

use fraction::{self, BigFraction};
use num::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(test)]
#[path = "coefficient_tests.rs"]
mod coefficient_tests;

type Q = BigFraction;

/// A structure to represent signed square roots of rationals exactly.
///
/// A value of this type has the form $`r\sqrt{q}`$ where $`r`$ is a signed
/// rational and $`q`$ a square-free non-negative integer. The Clebsch–Gordan
/// coefficients arising from the coupling of a spin-$`S`$ system with a single
/// spin-$`\tfrac{1}{2}`$ particle, and all products thereof, belong to this set,
/// which is therefore closed under the arithmetic required to expand a
/// genealogically coupled spin eigenfunction.
///
/// The normalised form is canonical: perfect-square factors of the radicand are
/// extracted into the rational multiplier, so structural equality and hashing
/// coincide with numerical equality.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SignedSqrtRational {
    /// The signed rational multiplier $`r`$.
    multiplier: Q,

    /// The square-free non-negative radicand $`q`$. A zero multiplier always
    /// comes with a unit radicand.
    radicand: BigUint,
}

/// Splits a non-negative integer into its largest square root factor and its
/// square-free remainder, *i.e.* $`n = a^2 q`$ with $`q`$ square-free.
///
/// # Arguments
///
/// * `n` - A non-negative integer.
///
/// # Returns
///
/// The pair $`(a, q)`$.
fn extract_square(n: &BigUint) -> (BigUint, BigUint) {
    let one = BigUint::one();
    if n.is_zero() || n.is_one() {
        return (one.clone(), n.clone());
    }
    let mut root = one.clone();
    let mut free = one;
    let mut remainder = n.clone();
    let mut divisor = BigUint::from(2u8);
    while &divisor * &divisor <= remainder {
        let mut exponent = 0usize;
        while (&remainder % &divisor).is_zero() {
            remainder /= &divisor;
            exponent += 1;
        }
        for _ in 0..(exponent / 2) {
            root *= &divisor;
        }
        if exponent % 2 == 1 {
            free *= &divisor;
        }
        divisor += 1u8;
    }
    free *= remainder;
    (root, free)
}

impl SignedSqrtRational {
    /// The zero coefficient.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            multiplier: Q::zero(),
            radicand: BigUint::one(),
        }
    }

    /// The unit coefficient.
    #[must_use]
    pub fn one() -> Self {
        Self {
            multiplier: Q::one(),
            radicand: BigUint::one(),
        }
    }

    /// Constructs a purely rational coefficient.
    #[must_use]
    pub fn from_rational(rational: Q) -> Self {
        if rational.is_zero() {
            Self::zero()
        } else {
            Self {
                multiplier: rational,
                radicand: BigUint::one(),
            }
        }
    }

    /// Constructs the coefficient $`\pm\sqrt{n/d}`$ in normalised form.
    ///
    /// The identity $`\sqrt{n/d} = \sqrt{nd}/d`$ rationalises the denominator,
    /// after which perfect-square factors of $`nd`$ are moved into the rational
    /// multiplier.
    ///
    /// # Arguments
    ///
    /// * `numer` - The numerator $`n`$ of the radicand.
    /// * `denom` - The denominator $`d`$ of the radicand. Must be non-zero.
    /// * `negative` - A boolean indicating if the negative branch of the square
    /// root is taken.
    ///
    /// # Returns
    ///
    /// The normalised coefficient.
    ///
    /// # Panics
    ///
    /// Panics when `denom` is zero.
    #[must_use]
    pub fn sqrt_of(numer: u64, denom: u64, negative: bool) -> Self {
        assert_ne!(denom, 0, "The radicand denominator cannot be zero.");
        if numer == 0 {
            return Self::zero();
        }
        let nd = BigUint::from(numer) * BigUint::from(denom);
        let (root, free) = extract_square(&nd);
        let multiplier = Q::new(root, BigUint::from(denom));
        Self {
            multiplier: if negative { -multiplier } else { multiplier },
            radicand: free,
        }
    }

    /// Checks if this coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.multiplier.is_zero()
    }

    /// Checks if this coefficient is unity.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.multiplier.is_one() && self.radicand.is_one()
    }

    /// Checks if this coefficient is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.multiplier.sign() == Some(fraction::Sign::Minus)
    }

    /// The absolute value of this coefficient.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Adds another coefficient to this one, provided both lie on the same ray,
    /// *i.e.* their normalised radicands agree or at least one side is zero.
    ///
    /// # Arguments
    ///
    /// * `other` - The coefficient to be added.
    ///
    /// # Returns
    ///
    /// The sum, or `None` when the radicands are incommensurate so that the sum
    /// leaves the $`r\sqrt{q}`$ set.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.is_zero() {
            return Some(other.clone());
        }
        if other.is_zero() {
            return Some(self.clone());
        }
        if self.radicand != other.radicand {
            return None;
        }
        let multiplier = self.multiplier.clone() + other.multiplier.clone();
        Some(if multiplier.is_zero() {
            Self::zero()
        } else {
            Self {
                multiplier,
                radicand: self.radicand.clone(),
            }
        })
    }

    /// Converts this coefficient to a floating-point approximation. Intended
    /// for diagnostics only; all algebra remains exact.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let r = self
            .multiplier
            .to_f64()
            .expect("Unable to convert a rational multiplier to `f64`.");
        let q = self
            .radicand
            .to_f64()
            .expect("Unable to convert a radicand to `f64`.");
        r * q.sqrt()
    }
}

impl Mul<&'_ SignedSqrtRational> for &SignedSqrtRational {
    type Output = SignedSqrtRational;

    fn mul(self, rhs: &SignedSqrtRational) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return SignedSqrtRational::zero();
        }
        let (root, free) = extract_square(&(&self.radicand * &rhs.radicand));
        SignedSqrtRational {
            multiplier: self.multiplier.clone() * rhs.multiplier.clone() * Q::new(root, BigUint::one()),
            radicand: free,
        }
    }
}

impl Mul<SignedSqrtRational> for SignedSqrtRational {
    type Output = SignedSqrtRational;

    fn mul(self, rhs: SignedSqrtRational) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for SignedSqrtRational {
    type Output = SignedSqrtRational;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            self
        } else {
            Self {
                multiplier: -self.multiplier,
                radicand: self.radicand,
            }
        }
    }
}

impl fmt::Display for SignedSqrtRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let numer = self
            .multiplier
            .numer()
            .expect("Unable to extract the numerator of a multiplier.");
        let denom = self
            .multiplier
            .denom()
            .expect("Unable to extract the denominator of a multiplier.");
        let sign = if self.is_negative() { "-" } else { "" };
        if self.radicand.is_one() {
            if denom.is_one() {
                write!(f, "{sign}{numer}")
            } else {
                write!(f, "{sign}{numer}/{denom}")
            }
        } else {
            let radical = format!("√{}", self.radicand);
            let numer_part = if numer.is_one() {
                radical
            } else {
                format!("{numer}{radical}")
            };
            if denom.is_one() {
                write!(f, "{sign}{numer_part}")
            } else {
                write!(f, "{sign}{numer_part}/{denom}")
            }
        }
    }
}

// ------------------------------
// Serde via a portable text form
// ------------------------------

impl SignedSqrtRational {
    /// Renders this coefficient in the portable text form used for
    /// serialisation, *e.g.* `-3/4*sqrt(2)`.
    fn to_portable_string(&self) -> String {
        let mut s = String::new();
        if self.is_negative() {
            s.push('-');
        }
        let numer = self
            .multiplier
            .numer()
            .expect("Unable to extract the numerator of a multiplier.");
        let denom = self
            .multiplier
            .denom()
            .expect("Unable to extract the denominator of a multiplier.");
        s.push_str(&numer.to_string());
        if !denom.is_one() {
            s.push('/');
            s.push_str(&denom.to_string());
        }
        if !self.radicand.is_one() {
            s.push_str(&format!("*sqrt({})", self.radicand));
        }
        s
    }
}

impl FromStr for SignedSqrtRational {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || format!("`{s}` does not describe a signed square-root coefficient.");
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (rational_str, radicand) = if let Some((head, tail)) = body.split_once("*sqrt(") {
            let radicand_str = tail.strip_suffix(')').ok_or_else(err)?;
            (head, radicand_str.parse::<BigUint>().map_err(|_| err())?)
        } else {
            (body, BigUint::one())
        };
        let multiplier = if let Some((numer_str, denom_str)) = rational_str.split_once('/') {
            Q::new(
                numer_str.parse::<BigUint>().map_err(|_| err())?,
                denom_str.parse::<BigUint>().map_err(|_| err())?,
            )
        } else {
            Q::new(
                rational_str.parse::<BigUint>().map_err(|_| err())?,
                BigUint::one(),
            )
        };
        if multiplier.is_zero() {
            return Ok(Self::zero());
        }
        let (root, free) = extract_square(&radicand);
        let multiplier = multiplier * Q::new(root, BigUint::one());
        Ok(Self {
            multiplier: if negative { -multiplier } else { multiplier },
            radicand: free,
        })
    }
}

impl Serialize for SignedSqrtRational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_portable_string())
    }
}

struct SignedSqrtRationalVisitor;

impl Visitor<'_> for SignedSqrtRationalVisitor {
    type Value = SignedSqrtRational;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a coefficient in the form `[-]n[/d][*sqrt(q)]`")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<SignedSqrtRational>().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for SignedSqrtRational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(SignedSqrtRationalVisitor)
    }
}
