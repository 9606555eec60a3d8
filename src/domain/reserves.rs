//! Pair state oriented along the direction of a swap.

use alloy_primitives::{Address, U256};

use crate::error::AmmError;

/// A pair's reserves seen from one side: tokens, balances and decimals
/// for the token going in and the token coming out, plus the pair's fee.
///
/// Curves only ever see this view, so every curve formula is written
/// once, in the `in → out` direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectedReserves {
    token_in: Address,
    token_out: Address,
    reserve_in: U256,
    reserve_out: U256,
    decimals_in: u8,
    decimals_out: u8,
    swap_fee: u32,
}

impl DirectedReserves {
    /// Creates a directed view.
    ///
    /// `tokens` and `decimals` are `(in, out)`; `swap_fee` is in parts per
    /// [`FEE_ACCURACY`](crate::constants::FEE_ACCURACY).
    #[must_use]
    pub const fn new(
        tokens: (Address, Address),
        reserves: (U256, U256),
        decimals: (u8, u8),
        swap_fee: u32,
    ) -> Self {
        Self {
            token_in: tokens.0,
            token_out: tokens.1,
            reserve_in: reserves.0,
            reserve_out: reserves.1,
            decimals_in: decimals.0,
            decimals_out: decimals.1,
            swap_fee,
        }
    }

    /// Returns the token entering the pair.
    #[must_use]
    pub const fn token_in(&self) -> Address {
        self.token_in
    }

    /// Returns the token leaving the pair.
    #[must_use]
    pub const fn token_out(&self) -> Address {
        self.token_out
    }

    /// Returns the balance of the input token.
    #[must_use]
    pub const fn reserve_in(&self) -> U256 {
        self.reserve_in
    }

    /// Returns the balance of the output token.
    #[must_use]
    pub const fn reserve_out(&self) -> U256 {
        self.reserve_out
    }

    /// Returns the input token's decimals.
    #[must_use]
    pub const fn decimals_in(&self) -> u8 {
        self.decimals_in
    }

    /// Returns the output token's decimals.
    #[must_use]
    pub const fn decimals_out(&self) -> u8 {
        self.decimals_out
    }

    /// Returns the swap fee in parts per `FEE_ACCURACY`.
    #[must_use]
    pub const fn swap_fee(&self) -> u32 {
        self.swap_fee
    }

    /// Returns `true` if either side holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reserve_in.is_zero() || self.reserve_out.is_zero()
    }

    /// The same pair seen from the other side.
    #[must_use]
    pub const fn flipped(&self) -> Self {
        Self {
            token_in: self.token_out,
            token_out: self.token_in,
            reserve_in: self.reserve_out,
            reserve_out: self.reserve_in,
            decimals_in: self.decimals_out,
            decimals_out: self.decimals_in,
            swap_fee: self.swap_fee,
        }
    }

    /// [`AmmError::InsufficientLiquidity`] for this direction.
    #[must_use]
    pub const fn insufficient_liquidity(&self) -> AmmError {
        AmmError::InsufficientLiquidity {
            token_in: self.token_in,
            token_out: self.token_out,
        }
    }

    /// [`AmmError::InsufficientInputAmount`] for this direction.
    #[must_use]
    pub const fn insufficient_input(&self) -> AmmError {
        AmmError::InsufficientInputAmount {
            token_in: self.token_in,
            token_out: self.token_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserves() -> DirectedReserves {
        DirectedReserves::new(
            (Address::repeat_byte(1), Address::repeat_byte(2)),
            (U256::from(100u8), U256::from(200u8)),
            (6, 18),
            3_000,
        )
    }

    #[test]
    fn flipped_swaps_sides() {
        let f = reserves().flipped();
        assert_eq!(f.token_in(), Address::repeat_byte(2));
        assert_eq!(f.reserve_in(), U256::from(200u8));
        assert_eq!(f.decimals_out(), 6);
        assert_eq!(f.swap_fee(), 3_000);
        assert_eq!(f.flipped(), reserves());
    }

    #[test]
    fn empty_when_any_side_is_zero() {
        assert!(!reserves().is_empty());
        let r = DirectedReserves::new(
            (Address::repeat_byte(1), Address::repeat_byte(2)),
            (U256::ZERO, U256::from(1u8)),
            (18, 18),
            0,
        );
        assert!(r.is_empty());
    }

    #[test]
    fn errors_carry_direction() {
        assert_eq!(
            reserves().insufficient_liquidity(),
            AmmError::InsufficientLiquidity {
                token_in: Address::repeat_byte(1),
                token_out: Address::repeat_byte(2),
            }
        );
    }
}
