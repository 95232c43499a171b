pub mod big_math;
pub mod precision;
pub mod sqrt_price_math;
pub mod u256;

pub use big_math::*;
pub use precision::*;
pub use sqrt_price_math::*;
pub use u256::*;
