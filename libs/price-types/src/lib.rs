mod error;
mod reserve;
mod sqrt_price;

pub use error::*;
pub use reserve::*;
pub use sqrt_price::*;

/// Number of fractional bits in a Q64.96 value
pub const RESOLUTION: u32 = 96;

/// Q96 constant (2^96) for fixed-point math
pub const Q96: u128 = 1 << RESOLUTION;

/// Minimum sqrt price accepted by the pool (at tick -887272)
pub const MIN_SQRT_RATIO: u128 = 4_295_128_739;

/// Decimal form of [`MIN_SQRT_RATIO`]
pub const MIN_SQRT_RATIO_STR: &str = "4295128739";

/// Maximum sqrt price accepted by the pool (at tick 887272), exclusive.
/// 160 bits wide, so it is stored big-endian: 0xfffd8963efd1fc6a506488495d951d5263988d26
pub const MAX_SQRT_RATIO_BE: [u8; 20] = [
    0xff, 0xfd, 0x89, 0x63, 0xef, 0xd1, 0xfc, 0x6a, 0x50, 0x64, 0x88, 0x49, 0x5d, 0x95, 0x1d, 0x52,
    0x63, 0x98, 0x8d, 0x26,
];

/// Decimal form of [`MAX_SQRT_RATIO_BE`]
pub const MAX_SQRT_RATIO_STR: &str = "1461446703485210103287273052203988822378723970342";

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_q96_value() {
        assert_eq!(Q96.to_string(), "79228162514264337593543950336");
        assert_eq!(Q96, 1u128 << 96);
    }

    #[test]
    fn test_max_sqrt_ratio_bytes_match_decimal() {
        let from_bytes = BigUint::from_bytes_be(&MAX_SQRT_RATIO_BE);
        assert_eq!(from_bytes.to_string(), MAX_SQRT_RATIO_STR);
        assert_eq!(from_bytes.bits(), 160);
    }

    #[test]
    fn test_min_sqrt_ratio_decimal() {
        assert_eq!(MIN_SQRT_RATIO.to_string(), MIN_SQRT_RATIO_STR);
        assert_eq!(MIN_SQRT_RATIO, 0x1_0002_76a3);
    }
}
