#![no_std]
pub mod types;
pub mod validation;

pub use types::*;

// Rent-period clock
pub const RENT_PERIOD_SECONDS: u64 = 2_419_200; // four weeks

// Token amounts are 18-decimal fixed point
pub const TOKEN_UNIT: i128 = 1_000_000_000_000_000_000;

pub const AMOUNT_UPPER_BOUND: i128 = i128::MAX / 2; // headroom for term sums
pub const AMOUNT_LOWER_BOUND: i128 = 0;
