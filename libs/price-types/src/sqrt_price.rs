use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::reserve::parse_unsigned;
use crate::{PriceError, PriceResult, MAX_SQRT_RATIO_BE, MIN_SQRT_RATIO, Q96};

/// sqrt(reserve1 / reserve0) as a Q64.96 fixed-point number
///
/// Not bounded by the type: an encoded price may fall outside
/// `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`. Use [`SqrtPriceX96::check_bounds`]
/// before handing it to a pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqrtPriceX96(BigUint);

impl SqrtPriceX96 {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// 2^96, i.e. a price of exactly 1
    pub fn one() -> Self {
        Self(BigUint::from(Q96))
    }

    pub fn min_ratio() -> Self {
        Self(BigUint::from(MIN_SQRT_RATIO))
    }

    /// Exclusive upper bound
    pub fn max_ratio() -> Self {
        Self(BigUint::from_bytes_be(&MAX_SQRT_RATIO_BE))
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

    pub fn to_u128(&self) -> Option<u128> {
        self.0.to_u128()
    }

    /// MIN_SQRT_RATIO <= self < MAX_SQRT_RATIO
    pub fn is_within_bounds(&self) -> bool {
        *self >= Self::min_ratio() && *self < Self::max_ratio()
    }

    pub fn check_bounds(&self) -> PriceResult<&Self> {
        if self.is_within_bounds() {
            Ok(self)
        } else {
            Err(PriceError::SqrtRatioOutOfBounds {
                value: self.to_string(),
            })
        }
    }
}

impl fmt::Display for SqrtPriceX96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for SqrtPriceX96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for SqrtPriceX96 {
    type Err = PriceError;

    fn from_str(s: &str) -> PriceResult<Self> {
        parse_unsigned(s).map(Self)
    }
}

impl From<BigUint> for SqrtPriceX96 {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u128> for SqrtPriceX96 {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<SqrtPriceX96> for BigUint {
    fn from(value: SqrtPriceX96) -> Self {
        value.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SqrtPriceX96 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SqrtPriceX96 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
