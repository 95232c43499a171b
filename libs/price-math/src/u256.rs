use num_bigint::BigUint;
use price_types::{PriceError, PriceResult, SqrtPriceX96};
use soroban_sdk::{Bytes, Env, U256};

/// Convert an encoded sqrt price to the host U256 taken by pool initialization
pub fn sqrt_price_to_u256(env: &Env, sqrt_price: &SqrtPriceX96) -> PriceResult<U256> {
    let digits = sqrt_price.as_biguint().to_bytes_be();
    if digits.len() > 32 {
        return Err(PriceError::Overflow { bits: 256 });
    }

    // U256::from_be_bytes wants exactly 32 bytes
    let mut word = [0u8; 32];
    word[32 - digits.len()..].copy_from_slice(&digits);
    Ok(U256::from_be_bytes(env, &Bytes::from_slice(env, &word)))
}

pub fn sqrt_price_from_u256(value: &U256) -> SqrtPriceX96 {
    let word: Vec<u8> = value.to_be_bytes().iter().collect();
    SqrtPriceX96::new(BigUint::from_bytes_be(&word))
}

/// Narrow to u128 for pools that store the price as u128
pub fn sqrt_price_to_u128(sqrt_price: &SqrtPriceX96) -> PriceResult<u128> {
    sqrt_price.to_u128().ok_or(PriceError::Overflow { bits: 128 })
}
