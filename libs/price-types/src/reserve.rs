use core::fmt;
use core::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::{PriceError, PriceResult};

/// Quantity of one pool asset. Arbitrary precision, never negative.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reserve(BigUint);

impl Reserve {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }
}

impl fmt::Display for Reserve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Reserve {
    type Err = PriceError;

    fn from_str(s: &str) -> PriceResult<Self> {
        parse_unsigned(s).map(Self)
    }
}

impl From<BigUint> for Reserve {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

/// Parse a non-negative integer written in decimal or `0x`-prefixed hex.
///
/// Surrounding whitespace and a leading `+` are accepted. A leading `-` in
/// front of an otherwise valid number yields [`PriceError::NegativeReserve`]
/// (unless the magnitude is zero) so callers can tell a domain error from
/// garbage input.
pub(crate) fn parse_unsigned(input: &str) -> PriceResult<BigUint> {
    let invalid = || PriceError::InvalidReserve {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (digits, radix) = match unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    let value = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(invalid)?;

    if negative && !value.is_zero() {
        return Err(PriceError::NegativeReserve {
            value: trimmed.to_string(),
        });
    }
    Ok(value)
}

/// Conversion into a [`Reserve`], validating sign and syntax.
///
/// Implemented for native integers, big integers, strings and `Reserve`
/// itself, so encoders can take reserves in whatever form test code has.
pub trait IntoReserve {
    fn into_reserve(self) -> PriceResult<Reserve>;
}

impl IntoReserve for Reserve {
    fn into_reserve(self) -> PriceResult<Reserve> {
        Ok(self)
    }
}

impl IntoReserve for &Reserve {
    fn into_reserve(self) -> PriceResult<Reserve> {
        Ok(self.clone())
    }
}

impl IntoReserve for BigUint {
    fn into_reserve(self) -> PriceResult<Reserve> {
        Ok(Reserve(self))
    }
}

impl IntoReserve for &BigUint {
    fn into_reserve(self) -> PriceResult<Reserve> {
        Ok(Reserve(self.clone()))
    }
}

impl IntoReserve for BigInt {
    fn into_reserve(self) -> PriceResult<Reserve> {
        (&self).into_reserve()
    }
}

impl IntoReserve for &BigInt {
    fn into_reserve(self) -> PriceResult<Reserve> {
        self.to_biguint()
            .map(Reserve)
            .ok_or_else(|| PriceError::NegativeReserve {
                value: self.to_string(),
            })
    }
}

impl IntoReserve for &str {
    fn into_reserve(self) -> PriceResult<Reserve> {
        self.parse()
    }
}

impl IntoReserve for String {
    fn into_reserve(self) -> PriceResult<Reserve> {
        self.parse()
    }
}

impl IntoReserve for &String {
    fn into_reserve(self) -> PriceResult<Reserve> {
        self.parse()
    }
}

macro_rules! impl_unsigned_reserve {
    ($($t:ty),*) => {$(
        impl From<$t> for Reserve {
            fn from(value: $t) -> Self {
                Self(BigUint::from(value))
            }
        }

        impl IntoReserve for $t {
            fn into_reserve(self) -> PriceResult<Reserve> {
                Ok(Reserve::from(self))
            }
        }
    )*};
}

macro_rules! impl_signed_reserve {
    ($($t:ty),*) => {$(
        impl IntoReserve for $t {
            fn into_reserve(self) -> PriceResult<Reserve> {
                u128::try_from(self)
                    .map(Reserve::from)
                    .map_err(|_| PriceError::NegativeReserve {
                        value: self.to_string(),
                    })
            }
        }
    )*};
}

impl_unsigned_reserve!(u8, u16, u32, u64, u128, usize);
impl_signed_reserve!(i8, i16, i32, i64, i128, isize);

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(i128),
        Text(String),
    }

    impl Serialize for Reserve {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.0.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Reserve {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match Repr::deserialize(deserializer)? {
                Repr::Int(value) => value.into_reserve().map_err(serde::de::Error::custom),
                Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
            }
        }
    }
}
