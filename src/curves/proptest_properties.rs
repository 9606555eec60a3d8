//! Property-based checks of the curve formulas.
//!
//! 1. **Exact-output sufficiency**: the input quoted for an output buys
//!    at least that output.
//! 2. **Exact-input consistency**: re-quoting the input needed for an
//!    exact-input result never asks for more than was paid.
//! 3. **Reserve bound**: no quote drains the output reserve.
//! 4. **Monotonicity**: more input never yields less output.
//! 5. **Round-trip loss**: A → B → A returns at most the original.
//! 6. **Fee monotonicity**: a higher fee never yields more output.
//! 7. **Mixed-decimal symmetry**: on stable pairs of any decimals,
//!    `in(out(x)) ≤ x` and `out(in(o)) ≥ o`.
//! 8. **Invariant consistency**: re-solving `D` from the balances the
//!    stable solver produced reproduces the original `D` within 4 units.

#![allow(clippy::panic)]

use alloy_primitives::{Address, U256};
use proptest::prelude::*;

use crate::constants::A_PRECISION;
use crate::curves::stable::{compute_d, compute_y};
use crate::curves::{ConstantProductCurve, StableCurve};
use crate::domain::DirectedReserves;
use crate::error::AmmError;
use crate::traits::SwapCurve;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn reserves(r_in: u128, r_out: u128, decimals: (u8, u8), fee: u32) -> DirectedReserves {
    DirectedReserves::new(
        (Address::repeat_byte(1), Address::repeat_byte(2)),
        (U256::from(r_in), U256::from(r_out)),
        decimals,
        fee,
    )
}

fn stable(amp: u64) -> StableCurve {
    let Ok(c) = StableCurve::new(U256::from(amp * A_PRECISION)) else {
        panic!("valid amplification");
    };
    c
}

/// Quote errors that are legitimate outcomes for a random input.
fn is_expected_rejection(err: &AmmError) -> bool {
    matches!(
        err,
        AmmError::InsufficientLiquidity { .. } | AmmError::InsufficientInputAmount { .. }
    )
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves in `[10^4, 10^24]`, from dust pools to deep 18-decimal pools.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000_000_000_000_000u128
}

/// Fees from zero to 10%.
fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=100_000u32
}

/// Effective amplification in `[1, 5_000]`.
fn amplification_strategy() -> impl Strategy<Value = u64> {
    1u64..=5_000u64
}

/// Token decimals seen on stable pairs, from whole-unit tokens to 18.
fn decimals_strategy() -> impl Strategy<Value = u8> {
    prop::sample::select(vec![0u8, 6, 8, 18])
}

/// A fraction of the reserve in basis points.
fn share_strategy() -> impl Strategy<Value = u128> {
    1u128..=9_000u128
}

// ---------------------------------------------------------------------------
// Constant product
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_cp_exact_output_is_sufficient(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        fee in fee_strategy(),
        share in share_strategy(),
    ) {
        let r = reserves(r_in, r_out, (18, 18), fee);
        let want = U256::from((r_out * share / 10_000).max(1));
        let needed = match ConstantProductCurve.amount_in(&r, want) {
            Ok(v) => v,
            Err(e) => {
                prop_assert!(is_expected_rejection(&e), "unexpected error {e}");
                return Ok(());
            }
        };
        let Ok(got) = ConstantProductCurve.amount_out(&r, needed) else {
            return Ok(());
        };
        prop_assert!(got >= want, "bought {} < requested {}", got, want);
    }

    #[test]
    fn prop_cp_exact_input_consistency(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        fee in fee_strategy(),
        share in share_strategy(),
    ) {
        let r = reserves(r_in, r_out, (18, 18), fee);
        let paid = U256::from((r_in * share / 10_000).max(1));
        let Ok(out) = ConstantProductCurve.amount_out(&r, paid) else {
            return Ok(());
        };
        prop_assert!(out < r.reserve_out());
        let Ok(required) = ConstantProductCurve.amount_in(&r, out) else {
            return Ok(());
        };
        prop_assert!(required <= paid, "required {} > paid {}", required, paid);
    }

    #[test]
    fn prop_cp_monotonic_in_input(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        share in 1u128..=4_000u128,
    ) {
        let r = reserves(r_in, r_out, (18, 18), 3_000);
        let small = U256::from((r_in * share / 10_000).max(1));
        let large = small * U256::from(2u8);
        let (Ok(a), Ok(b)) = (
            ConstantProductCurve.amount_out(&r, small),
            ConstantProductCurve.amount_out(&r, large),
        ) else {
            return Ok(());
        };
        prop_assert!(b >= a);
    }

    #[test]
    fn prop_cp_fee_monotonic(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        fee in 0u32..=50_000u32,
        share in share_strategy(),
    ) {
        let amount = U256::from((r_in * share / 10_000).max(1));
        let (Ok(low), Ok(high)) = (
            ConstantProductCurve.amount_out(&reserves(r_in, r_out, (18, 18), fee), amount),
            ConstantProductCurve.amount_out(&reserves(r_in, r_out, (18, 18), fee * 2), amount),
        ) else {
            return Ok(());
        };
        prop_assert!(high <= low);
    }

    #[test]
    fn prop_cp_round_trip_loses_value(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        share in share_strategy(),
    ) {
        let r = reserves(r_in, r_out, (18, 18), 3_000);
        let paid = U256::from((r_in * share / 10_000).max(1));
        let Ok(received) = ConstantProductCurve.amount_out(&r, paid) else {
            return Ok(());
        };
        let after = reserves(
            r_in + paid.to::<u128>(),
            r_out - received.to::<u128>(),
            (18, 18),
            3_000,
        );
        let Ok(back) = ConstantProductCurve.amount_out(&after.flipped(), received) else {
            return Ok(());
        };
        prop_assert!(back <= paid, "round trip gained: {} > {}", back, paid);
    }
}

// ---------------------------------------------------------------------------
// Stable
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_stable_exact_output_is_sufficient(
        r_in in reserve_strategy(),
        ratio in 50u128..=200u128,
        amp in amplification_strategy(),
        fee in fee_strategy(),
        share in share_strategy(),
    ) {
        let r_out = r_in * ratio / 100;
        let r = reserves(r_in, r_out, (18, 18), fee);
        let want = U256::from((r_out * share / 10_000).max(1));
        let c = stable(amp);
        let needed = match c.amount_in(&r, want) {
            Ok(v) => v,
            Err(e) => {
                prop_assert!(is_expected_rejection(&e), "unexpected error {e}");
                return Ok(());
            }
        };
        let Ok(got) = c.amount_out(&r, needed) else {
            return Ok(());
        };
        prop_assert!(got >= want, "bought {} < requested {}", got, want);
        prop_assert!(got < r.reserve_out());
    }

    #[test]
    fn prop_stable_mixed_decimals_exact_output(
        whole in 10_000u128..=1_000_000_000u128,
        amp in amplification_strategy(),
        share in share_strategy(),
    ) {
        // Same whole-unit depth on a 6-decimal and an 18-decimal token.
        let r = reserves(
            whole * 1_000_000,
            whole * 1_000_000_000_000_000_000,
            (6, 18),
            400,
        );
        let want = U256::from(whole * 1_000_000_000_000_000_000 * share / 10_000);
        let c = stable(amp);
        let Ok(needed) = c.amount_in(&r, want) else {
            return Ok(());
        };
        let Ok(got) = c.amount_out(&r, needed) else {
            return Ok(());
        };
        prop_assert!(got >= want);
    }

    #[test]
    fn prop_stable_monotonic_in_input(
        r_in in reserve_strategy(),
        amp in amplification_strategy(),
        share in 1u128..=4_000u128,
    ) {
        let r = reserves(r_in, r_in, (18, 18), 3_000);
        let small = U256::from((r_in * share / 10_000).max(1));
        let large = small * U256::from(2u8);
        let c = stable(amp);
        let (Ok(a), Ok(b)) = (c.amount_out(&r, small), c.amount_out(&r, large)) else {
            return Ok(());
        };
        prop_assert!(b >= a);
    }

    #[test]
    fn prop_stable_round_trip_loses_value(
        reserve in reserve_strategy(),
        amp in amplification_strategy(),
        share in share_strategy(),
    ) {
        let r = reserves(reserve, reserve, (18, 18), 3_000);
        let paid = U256::from((reserve * share / 10_000).max(1));
        let c = stable(amp);
        let Ok(received) = c.amount_out(&r, paid) else {
            return Ok(());
        };
        let after = reserves(
            reserve + paid.to::<u128>(),
            reserve - received.to::<u128>(),
            (18, 18),
            3_000,
        );
        let Ok(back) = c.amount_out(&after.flipped(), received) else {
            return Ok(());
        };
        prop_assert!(back <= paid, "round trip gained: {} > {}", back, paid);
    }

    #[test]
    fn prop_stable_mixed_decimals_symmetric(
        whole_in in 1_000u128..=1_000_000_000u128,
        whole_out in 1_000u128..=1_000_000_000u128,
        dec_in in decimals_strategy(),
        dec_out in decimals_strategy(),
        amp in amplification_strategy(),
        fee in fee_strategy(),
        share in share_strategy(),
    ) {
        let r_in = whole_in * 10u128.pow(u32::from(dec_in));
        let r_out = whole_out * 10u128.pow(u32::from(dec_out));
        let r = reserves(r_in, r_out, (dec_in, dec_out), fee);
        let c = stable(amp);

        let sold = U256::from((r_in * share / 10_000).max(1));
        if let Ok(received) = c.amount_out(&r, sold) {
            let needed = c.amount_in(&r, received);
            prop_assert!(
                matches!(needed, Ok(n) if n <= sold),
                "selling {} for {} re-quotes as {:?}", sold, received, needed
            );
        }

        let want = U256::from((r_out * share / 10_000).max(1));
        let Ok(needed) = c.amount_in(&r, want) else {
            return Ok(());
        };
        let Ok(got) = c.amount_out(&r, needed) else {
            return Ok(());
        };
        prop_assert!(got >= want, "{} bought {} < {}", needed, got, want);
    }

    #[test]
    fn prop_stable_invariant_is_consistent(
        reserve in reserve_strategy(),
        ratio in 50u128..=200u128,
        amp in amplification_strategy(),
        share in 1u128..=5_000u128,
    ) {
        let amp = U256::from(amp * A_PRECISION);
        let x = U256::from(reserve);
        let y = U256::from(reserve * ratio / 100);
        let Ok(d) = compute_d(x, y, amp) else {
            panic!("D converges for x={x} y={y}");
        };
        let x_new = x + x * U256::from(share) / U256::from(10_000u16);
        let Ok(y_new) = compute_y(x_new, d, amp) else {
            panic!("y converges for x={x_new}");
        };
        let Ok(d_again) = compute_d(x_new, y_new, amp) else {
            panic!("D converges for x={x_new} y={y_new}");
        };
        prop_assert!(
            d_again.abs_diff(d) <= U256::from(4u8),
            "D drifted: {} vs {}", d_again, d
        );
    }
}
