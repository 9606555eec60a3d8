//! Conversions between on-chain `U256` values and unbounded integers.

use alloy_primitives::U256;
use num_bigint::BigUint;

use crate::error::{AmmError, Result};

/// Widens a `U256` into a [`BigUint`].
#[must_use]
pub fn to_big(value: U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes::<32>())
}

/// Narrows a [`BigUint`] back into a `U256`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the value needs more than 256 bits.
pub fn from_big(value: &BigUint) -> Result<U256> {
    U256::try_from_be_slice(&value.to_bytes_be())
        .ok_or(AmmError::Overflow("value exceeds 256 bits"))
}
