use num_bigint::BigUint;
use num_traits::{One, Zero};
use price_types::{PriceError, PriceResult};

/// Multiply and divide at arbitrary precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(a: &BigUint, b: &BigUint, denominator: &BigUint) -> PriceResult<BigUint> {
    if denominator.is_zero() {
        return Err(PriceError::DivisionByZero);
    }
    Ok(a * b / denominator)
}

/// Unsigned division rounding to nearest, ties away from zero
pub fn div_round_half_up(a: &BigUint, b: &BigUint) -> PriceResult<BigUint> {
    if b.is_zero() {
        return Err(PriceError::DivisionByZero);
    }
    let quotient = a / b;
    let remainder = a % b;
    if (remainder << 1u8) >= *b {
        Ok(quotient + 1u8)
    } else {
        Ok(quotient)
    }
}

/// floor(sqrt(x))
pub fn sqrt_floor(x: &BigUint) -> BigUint {
    x.sqrt()
}

/// sqrt(x) rounded to nearest, ties away from zero.
///
/// With q = floor(sqrt(x)) the true root is >= q + 1/2 iff x >= q^2 + q + 1/4,
/// and since x is an integer that is x > q^2 + q.
pub fn sqrt_round_half_up(x: &BigUint) -> BigUint {
    let root = x.sqrt();
    let threshold = &root * &root + &root;
    if *x > threshold {
        root + BigUint::one()
    } else {
        root
    }
}

/// 10^exponent
pub fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u8).pow(exponent)
}
