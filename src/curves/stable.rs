//! Two-coin StableSwap curve (Curve / Saddle style).
//!
//! Specialised for pegged assets. Balances are first normalized to
//! [`STABLE_DECIMALS`] with per-token precision multipliers, then priced
//! against the invariant
//!
//! ```text
//! A·n^n·(x + y) + D = A·D·n^n + D^(n+1) / (n^n · x · y)      (n = 2)
//! ```
//!
//! `A` is stored multiplied by [`A_PRECISION`]. Both `D` and the balance
//! `y` solving the invariant for a new `x` are found by Newton iteration,
//! capped at [`MAX_LOOP_LIMIT`] steps and converged when two successive
//! iterates differ by at most one unit.
//!
//! # Amplification Behaviour
//!
//! | A | Curve |
//! |---|-------|
//! | 1 | Close to constant product |
//! | 50–5 000 | Flat near the peg |
//! | → ∞ | Constant sum (1:1 swaps) |

use alloy_primitives::U256;
use num_bigint::BigUint;

use crate::constants::{A_PRECISION, FEE_ACCURACY, MAX_LOOP_LIMIT, N_COINS, STABLE_DECIMALS};
use crate::domain::{CurveId, DirectedReserves, Fraction, Rounding};
use crate::error::AmmError;
use crate::math::{to_big, CheckedArithmetic};
use crate::traits::SwapCurve;

// ---------------------------------------------------------------------------
// StableSwap solvers
// ---------------------------------------------------------------------------

/// Precision multiplier lifting a balance with `decimals` to [`STABLE_DECIMALS`].
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if `decimals` exceeds
/// [`STABLE_DECIMALS`].
pub fn precision_multiplier(decimals: u8) -> Result<U256, AmmError> {
    let shift = STABLE_DECIMALS
        .checked_sub(decimals)
        .ok_or(AmmError::InvalidConfiguration(
            "stable pairs support at most 18 decimals",
        ))?;
    Ok(U256::from(10u8).pow(U256::from(shift)))
}

/// Computes the invariant `D` of two normalized balances.
///
/// ```text
/// D_P    = D³ / (4·x·y)                                        (stepwise)
/// D_next = (nA·S/A_P + 2·D_P) · D / ((nA − A_P)·D/A_P + 3·D_P)
/// ```
///
/// with `nA = amp · 2` and `S = x + y`, starting from `D = S`.
///
/// # Errors
///
/// - [`AmmError::ConvergenceFailure`] after [`MAX_LOOP_LIMIT`] iterations.
/// - [`AmmError::DivisionByZero`] if exactly one balance is zero.
/// - [`AmmError::Overflow`] on 256-bit overflow.
pub fn compute_d(x: U256, y: U256, amp: U256) -> Result<U256, AmmError> {
    let n = U256::from(N_COINS);
    let a_precision = U256::from(A_PRECISION);
    let s = x.safe_add(y, "D: S")?;
    if s.is_zero() {
        return Ok(U256::ZERO);
    }

    let n_a = amp.safe_mul(n, "D: nA")?;
    let two_x = x.safe_mul(n, "D: n·x")?;
    let two_y = y.safe_mul(n, "D: n·y")?;

    let mut d = s;
    for iteration in 0..MAX_LOOP_LIMIT {
        // D_P = D · D / (2x) · D / (2y)
        let d_p = d
            .safe_mul(d, "D: D_P·D")?
            .safe_div(two_x, Rounding::Down)?
            .safe_mul(d, "D: D_P·D")?
            .safe_div(two_y, Rounding::Down)?;

        let d_prev = d;

        let numerator = n_a
            .safe_mul(s, "D: nA·S")?
            .safe_div(a_precision, Rounding::Down)?
            .safe_add(d_p.safe_mul(n, "D: n·D_P")?, "D: numerator inner")?
            .safe_mul(d, "D: numerator")?;
        let denominator = n_a
            .safe_sub(a_precision, "D: nA − A_P")?
            .safe_mul(d, "D: denominator left")?
            .safe_div(a_precision, Rounding::Down)?
            .safe_add(
                d_p.safe_mul(n.safe_add(U256::from(1u8), "D: n+1")?, "D: (n+1)·D_P")?,
                "D: denominator",
            )?;

        d = numerator.safe_div(denominator, Rounding::Down)?;

        if d.abs_diff(d_prev) <= U256::from(1u8) {
            tracing::trace!(iterations = iteration + 1, "stable invariant converged");
            return Ok(d);
        }
    }

    tracing::warn!(%x, %y, %amp, "stable invariant did not converge");
    Err(AmmError::ConvergenceFailure {
        stage: "invariant D",
        iterations: MAX_LOOP_LIMIT,
    })
}

/// Computes the balance `y` of the other coin once one coin's normalized
/// balance is set to `x`, keeping the invariant `d`.
///
/// ```text
/// c      = D · D / (2x) · D · A_P / (nA · 2)
/// b      = x + D · A_P / nA
/// y_next = (y² + c) / (2y + b − D)
/// ```
///
/// starting from `y = D`.
///
/// # Errors
///
/// - [`AmmError::ConvergenceFailure`] after [`MAX_LOOP_LIMIT`] iterations.
/// - [`AmmError::DivisionByZero`] if `x` is zero.
/// - [`AmmError::Overflow`] on 256-bit overflow.
pub fn compute_y(x: U256, d: U256, amp: U256) -> Result<U256, AmmError> {
    let n = U256::from(N_COINS);
    let a_precision = U256::from(A_PRECISION);
    let n_a = amp.safe_mul(n, "y: nA")?;

    let c = d
        .safe_mul(d, "y: c")?
        .safe_div(x.safe_mul(n, "y: n·x")?, Rounding::Down)?
        .safe_mul(d, "y: c·D")?
        .safe_mul(a_precision, "y: c·A_P")?
        .safe_div(n_a.safe_mul(n, "y: nA·n")?, Rounding::Down)?;
    let b = x.safe_add(
        d.safe_mul(a_precision, "y: D·A_P")?
            .safe_div(n_a, Rounding::Down)?,
        "y: b",
    )?;

    let mut y = d;
    for iteration in 0..MAX_LOOP_LIMIT {
        let y_prev = y;
        let numerator = y.safe_mul(y, "y: y²")?.safe_add(c, "y: y² + c")?;
        let denominator = y
            .safe_mul(n, "y: 2y")?
            .safe_add(b, "y: 2y + b")?
            .safe_sub(d, "y: 2y + b − D")?;
        y = numerator.safe_div(denominator, Rounding::Down)?;

        if y.abs_diff(y_prev) <= U256::from(1u8) {
            tracing::trace!(iterations = iteration + 1, "stable balance converged");
            return Ok(y);
        }
    }

    tracing::warn!(%x, %d, %amp, "stable balance did not converge");
    Err(AmmError::ConvergenceFailure {
        stage: "balance y",
        iterations: MAX_LOOP_LIMIT,
    })
}

// ---------------------------------------------------------------------------
// StableCurve
// ---------------------------------------------------------------------------

/// Normalized view of a pair: balances at 18 decimals, their multipliers
/// and the invariant.
struct Normalized {
    x_in: U256,
    x_out: U256,
    mul_in: U256,
    mul_out: U256,
    d: U256,
}

/// The two-coin StableSwap pricing formula.
///
/// # Example
///
/// ```rust
/// use alloy_primitives::{Address, U256};
/// use multicurve_sdk::curves::StableCurve;
/// use multicurve_sdk::domain::DirectedReserves;
/// use multicurve_sdk::traits::SwapCurve;
///
/// let curve = StableCurve::new(U256::from(20_000u64)).expect("A = 200");
/// let reserves = DirectedReserves::new(
///     (Address::repeat_byte(1), Address::repeat_byte(2)),
///     (U256::from(1_000_000_000_000u64), U256::from(1_000_000_000_000u64)),
///     (6, 6),
///     500,
/// );
/// let out = curve.amount_out(&reserves, U256::from(1_000_000u64)).expect("quote");
/// // Near the peg a stable pair pays out almost one-for-one, minus the fee.
/// assert!(out > U256::from(999_000u64) && out < U256::from(1_000_000u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StableCurve {
    amplification: U256,
}

impl StableCurve {
    /// Creates a stable curve with `amplification` already scaled by
    /// [`A_PRECISION`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `amplification` is below
    /// [`A_PRECISION`] (an effective `A` under 1).
    pub fn new(amplification: U256) -> Result<Self, AmmError> {
        if amplification < U256::from(A_PRECISION) {
            return Err(AmmError::InvalidConfiguration(
                "amplification coefficient must be at least A_PRECISION",
            ));
        }
        Ok(Self { amplification })
    }

    /// Returns the amplification coefficient, scaled by [`A_PRECISION`].
    #[must_use]
    pub const fn amplification(&self) -> U256 {
        self.amplification
    }

    fn normalize(&self, reserves: &DirectedReserves) -> Result<Normalized, AmmError> {
        let mul_in = precision_multiplier(reserves.decimals_in())?;
        let mul_out = precision_multiplier(reserves.decimals_out())?;
        let x_in = reserves.reserve_in().safe_mul(mul_in, "normalized input reserve")?;
        let x_out = reserves.reserve_out().safe_mul(mul_out, "normalized output reserve")?;
        let d = compute_d(x_in, x_out, self.amplification)?;
        Ok(Normalized {
            x_in,
            x_out,
            mul_in,
            mul_out,
            d,
        })
    }

    /// Smallest input whose forward quote delivers `amount_out`, searched
    /// around `estimate`.
    ///
    /// The inverse solve and the forward quote round independently, so the
    /// estimate can land a few units either side of the true minimum. It is
    /// first raised until it suffices, then the bound is galloped down and
    /// bisected.
    fn settle_input(
        &self,
        reserves: &DirectedReserves,
        pool: &Normalized,
        amount_out: U256,
        estimate: U256,
    ) -> Result<U256, AmmError> {
        let one = U256::from(1u8);
        let delivers = |amount_in: U256| -> Result<bool, AmmError> {
            Ok(self.quote_out(reserves, pool, amount_in)? >= amount_out)
        };

        let mut high = estimate;
        let mut raised = 0u32;
        while !delivers(high)? {
            if raised == MAX_LOOP_LIMIT {
                tracing::warn!(%amount_out, "stable exact-output input did not settle");
                return Err(AmmError::ConvergenceFailure {
                    stage: "exact-output input",
                    iterations: MAX_LOOP_LIMIT,
                });
            }
            high = high.safe_add(one, "adjusted input")?;
            raised += 1;
        }

        // `low` never delivers, `high` always does.
        let mut stride = one;
        let mut low = loop {
            let candidate = high.saturating_sub(stride);
            if candidate.is_zero() || !delivers(candidate)? {
                break candidate;
            }
            high = candidate;
            stride = stride.saturating_mul(U256::from(2u8));
        };
        while high - low > one {
            let mid = low + (high - low) / U256::from(2u8);
            if delivers(mid)? {
                high = mid;
            } else {
                low = mid;
            }
        }

        if raised > 0 {
            tracing::trace!(steps = raised, "stable exact-output input raised");
        }
        Ok(high)
    }

    /// Exact-input quote against an already normalized pair; `Ok(0)` when
    /// the input is too small to move the output balance.
    fn quote_out(
        &self,
        reserves: &DirectedReserves,
        pool: &Normalized,
        amount_in: U256,
    ) -> Result<U256, AmmError> {
        let accuracy = U256::from(FEE_ACCURACY);
        let in_after_fee = amount_in
            .safe_mul(
                accuracy.safe_sub(U256::from(reserves.swap_fee()), "fee complement")?,
                "input after fee",
            )?
            .safe_div(accuracy, Rounding::Down)?;
        let x = pool.x_in.safe_add(
            in_after_fee.safe_mul(pool.mul_in, "normalized input")?,
            "new input balance",
        )?;
        let y = compute_y(x, pool.d, self.amplification)?;

        // One unit is kept back against solver rounding.
        let Some(dy) = pool
            .x_out
            .checked_sub(y)
            .and_then(|v| v.checked_sub(U256::from(1u8)))
        else {
            return Ok(U256::ZERO);
        };
        dy.safe_div(pool.mul_out, Rounding::Down)
    }
}

impl SwapCurve for StableCurve {
    fn curve_id(&self) -> CurveId {
        CurveId::Stable
    }

    fn amount_out(&self, reserves: &DirectedReserves, amount_in: U256) -> Result<U256, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("input amount must be non-zero"));
        }
        if reserves.is_empty() {
            return Err(reserves.insufficient_liquidity());
        }

        let pool = self.normalize(reserves)?;
        let amount_out = self.quote_out(reserves, &pool, amount_in)?;

        if amount_out.is_zero() {
            return Err(reserves.insufficient_input());
        }
        if amount_out >= reserves.reserve_out() {
            return Err(reserves.insufficient_liquidity());
        }
        Ok(amount_out)
    }

    fn amount_in(&self, reserves: &DirectedReserves, amount_out: U256) -> Result<U256, AmmError> {
        if amount_out.is_zero() {
            return Err(AmmError::InvalidQuantity("output amount must be non-zero"));
        }
        if reserves.is_empty() || amount_out >= reserves.reserve_out() {
            return Err(reserves.insufficient_liquidity());
        }

        let pool = self.normalize(reserves)?;
        let accuracy = U256::from(FEE_ACCURACY);
        let complement = accuracy.safe_sub(U256::from(reserves.swap_fee()), "fee complement")?;
        if complement.is_zero() {
            return Err(AmmError::InvalidConfiguration("swap fee consumes the whole input"));
        }

        let y = pool.x_out.safe_sub(
            amount_out.safe_mul(pool.mul_out, "normalized output")?,
            "new output balance",
        )?;
        let x = compute_y(y, pool.d, self.amplification)?;
        let in_after_fee = x
            .saturating_sub(pool.x_in)
            .safe_div(pool.mul_in, Rounding::Up)?;
        let estimate = in_after_fee
            .safe_mul(accuracy, "gross input")?
            .safe_div(complement, Rounding::Up)?;

        self.settle_input(reserves, &pool, amount_out, estimate)
    }

    fn spot_price(&self, reserves: &DirectedReserves) -> Result<Fraction, AmmError> {
        if reserves.is_empty() {
            return Err(reserves.insufficient_liquidity());
        }
        let pool = self.normalize(reserves)?;

        // -dy/dx of the invariant at (x, y), in normalized units:
        // (8·amp·x²y² + A_P·D³·y) / (8·amp·x²y² + A_P·D³·x)
        let x = to_big(pool.x_in);
        let y = to_big(pool.x_out);
        let d = to_big(pool.d);
        let d_cubed = &d * &d * &d * BigUint::from(A_PRECISION);
        let shared = BigUint::from(8u8) * to_big(self.amplification) * &x * &x * &y * &y;

        let numerator = (&shared + &d_cubed * &y) * to_big(pool.mul_in);
        let denominator = (shared + d_cubed * x) * to_big(pool.mul_out);
        Fraction::new(numerator, denominator)
    }
}
