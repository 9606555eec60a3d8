//! Immutable snapshot of one liquidity pool.

use alloy_primitives::{Address, U256};

use crate::constants::{FEE_ACCURACY, MINIMUM_LIQUIDITY, STABLE_DECIMALS};
use crate::curves::CurveBox;
use crate::domain::{CurrencyAmount, CurveId, DirectedReserves, Price, Token};
use crate::error::{AmmError, Result};
use crate::math::isqrt;
use crate::traits::SwapCurve;

/// One pool: two tokens, their reserves, a fee and a pricing curve.
///
/// Tokens are stored in canonical order (`token0` sorts before `token1` by
/// address bytes), which is how the factory contract addresses pairs.
/// A pair never changes; refreshing state means building a new one.
///
/// # Example
///
/// ```rust
/// use alloy_primitives::{Address, U256};
/// use multicurve_sdk::curves::ConstantProductCurve;
/// use multicurve_sdk::domain::{CurrencyAmount, Token};
/// use multicurve_sdk::entities::Pair;
///
/// let usdc = Token::new(1, Address::repeat_byte(0x22), 6);
/// let weth = Token::new(1, Address::repeat_byte(0x11), 18);
///
/// // Tokens may be given in any order; the pair sorts them.
/// let pair = Pair::new(
///     (usdc.clone(), weth.clone()),
///     (U256::from(2_000_000_000_000u64), U256::from(1_000_000_000_000_000_000_000u128)),
///     3_000,
///     ConstantProductCurve,
/// )
/// .expect("valid pair");
/// assert_eq!(pair.token0(), &weth);
///
/// let out = pair
///     .quote_output_for_input(&CurrencyAmount::from_raw(usdc, 2_000_000_000))
///     .expect("quote");
/// assert_eq!(out.currency().wrapped(), &weth);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    token0: Token,
    token1: Token,
    reserve0: U256,
    reserve1: U256,
    swap_fee: u32,
    curve: CurveBox,
}

impl Pair {
    /// Creates a pair, sorting the tokens (and their reserves) canonically.
    ///
    /// `tokens` and `reserves` are given in matching order; `swap_fee` is in
    /// parts per [`FEE_ACCURACY`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::ChainIdMismatch`] / [`AmmError::SameToken`] from token ordering.
    /// - [`AmmError::InvalidConfiguration`] if the fee is not below
    ///   `FEE_ACCURACY`, a stable pair has a token above 18 decimals, or a
    ///   non-empty pair is below the minimum-liquidity floor.
    pub fn new(
        tokens: (Token, Token),
        reserves: (U256, U256),
        swap_fee: u32,
        curve: impl Into<CurveBox>,
    ) -> Result<Self> {
        let curve = curve.into();
        let ((token0, reserve0), (token1, reserve1)) = if tokens.0.sorts_before(&tokens.1)? {
            ((tokens.0, reserves.0), (tokens.1, reserves.1))
        } else {
            ((tokens.1, reserves.1), (tokens.0, reserves.0))
        };

        check_fee(swap_fee)?;
        if curve.curve_id() == CurveId::Stable {
            check_stable_decimals(&token0, &token1)?;
        }
        check_minimum_liquidity(reserve0, reserve1)?;

        Ok(Self {
            token0,
            token1,
            reserve0,
            reserve1,
            swap_fee,
            curve,
        })
    }

    /// Returns the chain id of both tokens.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.token0.chain_id()
    }

    /// Returns the lower-sorting token.
    #[must_use]
    pub const fn token0(&self) -> &Token {
        &self.token0
    }

    /// Returns the higher-sorting token.
    #[must_use]
    pub const fn token1(&self) -> &Token {
        &self.token1
    }

    /// Returns the balance of `token0`.
    pub fn reserve0(&self) -> CurrencyAmount {
        CurrencyAmount::new(self.token0.clone(), self.reserve0)
    }

    /// Returns the balance of `token1`.
    pub fn reserve1(&self) -> CurrencyAmount {
        CurrencyAmount::new(self.token1.clone(), self.reserve1)
    }

    /// Returns the swap fee in parts per [`FEE_ACCURACY`].
    #[must_use]
    pub const fn swap_fee(&self) -> u32 {
        self.swap_fee
    }

    /// Returns the curve identifier.
    #[must_use]
    pub fn curve_id(&self) -> CurveId {
        self.curve.curve_id()
    }

    /// Returns the pricing curve.
    #[must_use]
    pub const fn curve(&self) -> &CurveBox {
        &self.curve
    }

    /// Returns the amplification coefficient (stable pairs only).
    #[must_use]
    pub const fn amplification_coefficient(&self) -> Option<U256> {
        self.curve.amplification()
    }

    /// The pair's identity: `(chain id, token0, token1, curve id)`.
    #[must_use]
    pub fn key(&self) -> (u64, Address, Address, CurveId) {
        (
            self.chain_id(),
            self.token0.address(),
            self.token1.address(),
            self.curve_id(),
        )
    }

    /// Returns `true` if `token` is one of the pair's tokens.
    #[must_use]
    pub fn involves_token(&self, token: &Token) -> bool {
        *token == self.token0 || *token == self.token1
    }

    /// Returns the token on the other side of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Result<&Token> {
        if *token == self.token0 {
            Ok(&self.token1)
        } else if *token == self.token1 {
            Ok(&self.token0)
        } else {
            Err(self.invalid_token(token))
        }
    }

    /// Returns the balance of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn reserve_of(&self, token: &Token) -> Result<CurrencyAmount> {
        if *token == self.token0 {
            Ok(self.reserve0())
        } else if *token == self.token1 {
            Ok(self.reserve1())
        } else {
            Err(self.invalid_token(token))
        }
    }

    /// Returns the pair's state oriented for a swap that sells `token_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    pub fn directed(&self, token_in: &Token) -> Result<DirectedReserves> {
        let (t_in, t_out, r_in, r_out) = if *token_in == self.token0 {
            (&self.token0, &self.token1, self.reserve0, self.reserve1)
        } else if *token_in == self.token1 {
            (&self.token1, &self.token0, self.reserve1, self.reserve0)
        } else {
            return Err(self.invalid_token(token_in));
        };
        Ok(DirectedReserves::new(
            (t_in.address(), t_out.address()),
            (r_in, r_out),
            (t_in.decimals(), t_out.decimals()),
            self.swap_fee,
        ))
    }

    /// Quotes the output for selling `input`, rounded down.
    ///
    /// Native amounts are priced as their wrapped token. The result is in
    /// the other pair token.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if the input token is not in the pair.
    /// - [`AmmError::InsufficientLiquidity`] if a reserve is empty or the
    ///   output would drain the pool.
    /// - [`AmmError::InsufficientInputAmount`] if the input buys nothing.
    /// - [`AmmError::ConvergenceFailure`] from the stable solver.
    pub fn quote_output_for_input(&self, input: &CurrencyAmount) -> Result<CurrencyAmount> {
        let token_in = input.token();
        let reserves = self.directed(token_in)?;
        let amount_out = self.curve.amount_out(&reserves, input.raw())?;
        Ok(CurrencyAmount::new(self.other(token_in)?.clone(), amount_out))
    }

    /// Quotes the input needed to receive exactly `output`, rounded up.
    ///
    /// # Errors
    ///
    /// Same as [`quote_output_for_input`](Self::quote_output_for_input).
    pub fn quote_input_for_output(&self, output: &CurrencyAmount) -> Result<CurrencyAmount> {
        let token_in = self.other(output.token())?;
        let reserves = self.directed(token_in)?;
        let amount_in = self.curve.amount_in(&reserves, output.raw())?;
        Ok(CurrencyAmount::new(token_in.clone(), amount_in))
    }

    /// Marginal price of `token` in units of the other token, fee excluded.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `token` is not in the pair.
    /// - [`AmmError::InsufficientLiquidity`] if a reserve is empty.
    pub fn spot_price(&self, token: &Token) -> Result<Price> {
        let reserves = self.directed(token)?;
        let fraction = self.curve.spot_price(&reserves)?;
        Ok(Price::from_fraction(
            token.clone().into(),
            self.other(token)?.clone().into(),
            fraction,
        ))
    }

    fn invalid_token(&self, token: &Token) -> AmmError {
        AmmError::InvalidToken {
            token: token.address(),
            token0: self.token0.address(),
            token1: self.token1.address(),
        }
    }
}

// ---------------------------------------------------------------------------
// Construction checks shared with `PairSnapshot::validate`
// ---------------------------------------------------------------------------

pub(crate) fn check_fee(swap_fee: u32) -> Result<()> {
    if swap_fee >= FEE_ACCURACY {
        return Err(AmmError::InvalidConfiguration(
            "swap fee must be below FEE_ACCURACY",
        ));
    }
    Ok(())
}

pub(crate) fn check_stable_decimals(token0: &Token, token1: &Token) -> Result<()> {
    if token0.decimals() > STABLE_DECIMALS || token1.decimals() > STABLE_DECIMALS {
        return Err(AmmError::InvalidConfiguration(
            "stable pairs support at most 18 decimals",
        ));
    }
    Ok(())
}

/// Empty pairs are allowed (quoting them fails later); a funded pair must
/// hold at least `MINIMUM_LIQUIDITY` in `√(reserve0 · reserve1)`.
pub(crate) fn check_minimum_liquidity(reserve0: U256, reserve1: U256) -> Result<()> {
    if reserve0.is_zero() || reserve1.is_zero() {
        return Ok(());
    }
    let Some(product) = reserve0.checked_mul(reserve1) else {
        return Ok(());
    };
    if isqrt(product) < U256::from(MINIMUM_LIQUIDITY) {
        return Err(AmmError::InvalidConfiguration(
            "pair liquidity is below MINIMUM_LIQUIDITY",
        ));
    }
    Ok(())
}
