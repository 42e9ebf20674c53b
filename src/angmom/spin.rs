//! Exact half-integer spin quantum numbers.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use fraction::{self, GenericFraction};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(test)]
#[path = "spin_tests.rs"]
mod spin_tests;

type F = GenericFraction<u32>;

/// A structure to represent half-integer spin quantum numbers exactly.
///
/// A half-integer spin is an exact rational number that is either an integer or
/// an odd multiple of $`\tfrac{1}{2}`$. Total spins $`S`$, spin projections
/// $`M_S`$, and the intermediate spins of a genealogical coupling path are all
/// of this kind. Exact representation guarantees that equality tests driving
/// recursion termination and memoisation keys are free of accumulation error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Debug)]
pub struct HalfSpin {
    /// The exact value of the spin quantum number, represented as a fraction
    /// whose denominator is restricted to $`1`$ or $`2`$.
    value: F,
}

impl HalfSpin {
    /// Constructs a half-integer spin from twice its value.
    ///
    /// # Arguments
    ///
    /// * `twice` - Twice the desired spin value, *e.g.* `3` for a spin of
    /// $`\tfrac{3}{2}`$ and `-1` for a spin of $`-\tfrac{1}{2}`$.
    ///
    /// # Returns
    ///
    /// The corresponding half-integer spin.
    #[must_use]
    pub fn from_twice(twice: i64) -> Self {
        let mag = u32::try_from(twice.unsigned_abs())
            .unwrap_or_else(|_| panic!("Unable to convert `{twice}` to a spin magnitude."));
        let value = F::new(mag, 2u32);
        Self {
            value: if twice < 0 { -value } else { value },
        }
    }

    /// The zero spin.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_twice(0)
    }

    /// The spin $`\tfrac{1}{2}`$ of a single unpaired electron.
    #[must_use]
    pub fn one_half() -> Self {
        Self::from_twice(1)
    }

    /// Returns twice the value of this spin as an exact integer.
    #[must_use]
    pub fn twice(&self) -> i64 {
        let doubled = self.value * F::from(2u32);
        let numer = i64::from(
            *doubled
                .numer()
                .expect("Unable to extract the numerator of a spin value."),
        );
        if doubled.sign() == Some(fraction::Sign::Minus) {
            -numer
        } else {
            numer
        }
    }

    /// The exact fractional value of this spin.
    pub fn value(&self) -> &F {
        &self.value
    }

    /// Checks if this spin is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.twice() == 0
    }

    /// Checks if this spin is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.twice() < 0
    }

    /// Checks if this spin is an integer, as opposed to an odd multiple of
    /// $`\tfrac{1}{2}`$.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.twice().rem_euclid(2) == 0
    }

    /// The absolute value of this spin.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_twice(self.twice().abs())
    }

    /// The spin obtained by coupling one further spin-$`\tfrac{1}{2}`$ particle
    /// in the stretched sense: $`S + \tfrac{1}{2}`$.
    #[must_use]
    pub fn raised(&self) -> Self {
        Self::from_twice(self.twice() + 1)
    }

    /// The spin obtained by coupling one further spin-$`\tfrac{1}{2}`$ particle
    /// in the anti-stretched sense: $`S - \tfrac{1}{2}`$.
    #[must_use]
    pub fn lowered(&self) -> Self {
        Self::from_twice(self.twice() - 1)
    }
}

impl std::ops::Neg for HalfSpin {
    type Output = HalfSpin;

    fn neg(self) -> Self::Output {
        Self::from_twice(-self.twice())
    }
}

impl Ord for HalfSpin {
    fn cmp(&self, other: &Self) -> Ordering {
        self.twice().cmp(&other.twice())
    }
}

impl fmt::Display for HalfSpin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// ------------------
// String conversions
// ------------------

/// An error indicating that a string does not describe a half-integer spin.
#[derive(Clone, Debug)]
pub struct ParseHalfSpinError {
    input: String,
}

impl fmt::Display for ParseHalfSpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` does not describe a half-integer spin value.",
            self.input
        )
    }
}

impl Error for ParseHalfSpinError {}

impl FromStr for HalfSpin {
    type Err = ParseHalfSpinError;

    /// Parses a half-integer spin from a string.
    ///
    /// Accepted forms are integers (`"2"`, `"-1"`), explicit fractions with an
    /// even numerator-doubling (`"1/2"`, `"-3/2"`), and decimal values that are
    /// exact multiples of $`\tfrac{1}{2}`$ (`"0.5"`, `"1.0"`). Decimal input is
    /// converted to an exact fraction at this boundary; no floating-point value
    /// survives the conversion.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseHalfSpinError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if body.is_empty() {
            return Err(err());
        }
        let twice_mag = if let Some((numer_str, denom_str)) = body.split_once('/') {
            let numer = numer_str.parse::<i64>().map_err(|_| err())?;
            let denom = denom_str.parse::<i64>().map_err(|_| err())?;
            if denom <= 0 || numer < 0 || (2 * numer).rem_euclid(denom) != 0 {
                return Err(err());
            }
            2 * numer / denom
        } else if let Some((int_str, frac_str)) = body.split_once('.') {
            let int_part = if int_str.is_empty() {
                0
            } else {
                int_str.parse::<i64>().map_err(|_| err())?
            };
            match frac_str.trim_end_matches('0') {
                "" => 2 * int_part,
                "5" => 2 * int_part + 1,
                _ => return Err(err()),
            }
        } else {
            2 * body.parse::<i64>().map_err(|_| err())?
        };
        Ok(Self::from_twice(if negative { -twice_mag } else { twice_mag }))
    }
}

// -----
// Serde
// -----

impl Serialize for HalfSpin {
    /// Serialises this spin into its display string, *e.g.* `"1/2"` or `"-2"`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct HalfSpinVisitor;

impl Visitor<'_> for HalfSpinVisitor {
    type Value = HalfSpin;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a half-integer spin value such as `1/2`, `0.5`, or `2`")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<HalfSpin>().map_err(de::Error::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(HalfSpin::from_twice(2 * v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let v = i64::try_from(v).map_err(de::Error::custom)?;
        Ok(HalfSpin::from_twice(2 * v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        let doubled = 2.0 * v;
        if doubled.fract() != 0.0 {
            return Err(de::Error::custom(format!(
                "`{v}` is not a half-integer spin value."
            )));
        }
        Ok(HalfSpin::from_twice(doubled as i64))
    }
}

impl<'de> Deserialize<'de> for HalfSpin {
    /// Deserialises a spin from a string (`"1/2"`), an integer, or a decimal
    /// number that is an exact multiple of $`\tfrac{1}{2}`$. Non-self-describing
    /// formats such as `bincode` always store the string form.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(HalfSpinVisitor)
        } else {
            deserializer.deserialize_str(HalfSpinVisitor)
        }
    }
}
