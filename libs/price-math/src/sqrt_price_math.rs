use crate::big_math::{div_round_half_up, mul_div, pow10, sqrt_floor, sqrt_round_half_up};
use crate::precision::{EncoderConfig, Precision};
use num_bigint::BigUint;
use num_traits::One;
use price_types::{IntoReserve, PriceError, PriceResult, Reserve, SqrtPriceX96, RESOLUTION};
use tracing::trace;

/// Returns the sqrt price as a Q64.96 for the ratio reserve1 / reserve0,
/// i.e. floor(sqrt(reserve1 / reserve0) * 2^96)
///
/// Reserves may be native integers, big integers or decimal/hex strings.
/// Fails with `DivisionByZero` when reserve0 is zero and `NegativeReserve`
/// when either side is negative. Bounds are not checked.
pub fn encode_price_sqrt(
    reserve1: impl IntoReserve,
    reserve0: impl IntoReserve,
) -> PriceResult<SqrtPriceX96> {
    SqrtPriceEncoder::default().encode(reserve1, reserve0)
}

/// Same as [`encode_price_sqrt`] with explicit rounding settings
pub fn encode_price_sqrt_with(
    reserve1: impl IntoReserve,
    reserve0: impl IntoReserve,
    config: &EncoderConfig,
) -> PriceResult<SqrtPriceX96> {
    SqrtPriceEncoder::new(*config).encode(reserve1, reserve0)
}

/// Converts reserve ratios into Q64.96 sqrt prices
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SqrtPriceEncoder {
    config: EncoderConfig,
}

impl SqrtPriceEncoder {
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn encode(
        &self,
        reserve1: impl IntoReserve,
        reserve0: impl IntoReserve,
    ) -> PriceResult<SqrtPriceX96> {
        let reserve1 = reserve1.into_reserve()?;
        let reserve0 = reserve0.into_reserve()?;
        if reserve0.is_zero() {
            return Err(PriceError::DivisionByZero);
        }

        let sqrt_price = match self.config.precision {
            Precision::Exact => encode_exact(&reserve1, &reserve0)?,
            Precision::DecimalPlaces(places) => encode_decimal(&reserve1, &reserve0, places)?,
        };

        trace!(
            %reserve1,
            %reserve0,
            sqrt_price_x96 = %sqrt_price,
            precision = ?self.config.precision,
            "encoded sqrt price"
        );
        Ok(SqrtPriceX96::new(sqrt_price))
    }
}

/// floor(sqrt(r1 * 2^192 / r0)). Flooring the radicand first does not change
/// the floor of the root.
fn encode_exact(reserve1: &Reserve, reserve0: &Reserve) -> PriceResult<BigUint> {
    let q192 = BigUint::one() << (2 * RESOLUTION);
    let radicand = mul_div(reserve1.as_biguint(), &q192, reserve0.as_biguint())?;
    Ok(sqrt_floor(&radicand))
}

/// Ratio and root each rounded half-up to `places` decimals, then scaled by
/// 2^96 and truncated.
fn encode_decimal(reserve1: &Reserve, reserve0: &Reserve, places: u32) -> PriceResult<BigUint> {
    let scale = pow10(places);
    let q96 = BigUint::one() << RESOLUTION;

    // ratio * 10^places
    let ratio = div_round_half_up(&(reserve1.as_biguint() * &scale), reserve0.as_biguint())?;
    // sqrt(ratio) * 10^places == sqrt(ratio * 10^places * 10^places)
    let root = sqrt_round_half_up(&(ratio * &scale));

    mul_div(&root, &q96, &scale)
}
