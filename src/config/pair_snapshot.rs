//! The pair record read from the ledger.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::constants::A_PRECISION;
use crate::domain::{CurveId, Token};
use crate::entities::pair::{check_fee, check_minimum_liquidity, check_stable_decimals};
use crate::error::AmmError;

/// A point-in-time snapshot of one deployed pair, as the data source
/// supplies it.
///
/// Field names serialize in camelCase (`token0`, `curveId`, `reserve0`,
/// `swapFee`, `amplificationCoefficient`, ...). Reserves and the
/// amplification coefficient are `uint256` values.
///
/// # Validation
///
/// - The tokens are distinct, on one chain, and in canonical order
///   (`token0` has the lower address), matching the pair contract.
/// - `swap_fee` is below [`FEE_ACCURACY`](crate::constants::FEE_ACCURACY).
/// - `amplification_coefficient` is present iff the curve is stable, and
///   then at least [`A_PRECISION`].
/// - Stable pairs hold tokens of at most 18 decimals.
/// - A funded pair meets the minimum-liquidity floor.
///
/// Freshness is the caller's concern; a snapshot is never re-checked
/// against the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSnapshot {
    token0: Token,
    token1: Token,
    curve_id: CurveId,
    reserve0: U256,
    reserve1: U256,
    swap_fee: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amplification_coefficient: Option<U256>,
}

impl PairSnapshot {
    /// Creates a validated constant-product snapshot.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PairSnapshot::validate`].
    pub fn constant_product(
        tokens: (Token, Token),
        reserves: (U256, U256),
        swap_fee: u32,
    ) -> Result<Self, AmmError> {
        Self::new(tokens, reserves, swap_fee, CurveId::ConstantProduct, None)
    }

    /// Creates a validated stable snapshot; `amplification` is scaled by
    /// [`A_PRECISION`].
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PairSnapshot::validate`].
    pub fn stable(
        tokens: (Token, Token),
        reserves: (U256, U256),
        swap_fee: u32,
        amplification: U256,
    ) -> Result<Self, AmmError> {
        Self::new(tokens, reserves, swap_fee, CurveId::Stable, Some(amplification))
    }

    /// Creates a validated snapshot.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PairSnapshot::validate`].
    pub fn new(
        tokens: (Token, Token),
        reserves: (U256, U256),
        swap_fee: u32,
        curve_id: CurveId,
        amplification_coefficient: Option<U256>,
    ) -> Result<Self, AmmError> {
        let snapshot = Self {
            token0: tokens.0,
            token1: tokens.1,
            curve_id,
            reserve0: reserves.0,
            reserve1: reserves.1,
            swap_fee,
            amplification_coefficient,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Validates all snapshot invariants.
    ///
    /// Deserialized snapshots are not validated until this is called
    /// (the factory always calls it).
    ///
    /// # Errors
    ///
    /// - [`AmmError::ChainIdMismatch`] / [`AmmError::SameToken`] for bad tokens.
    /// - [`AmmError::InvalidConfiguration`] for every other violation,
    ///   including tokens recorded out of canonical order.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.token0.sorts_before(&self.token1)? {
            return Err(AmmError::InvalidConfiguration("token0 must have the lower address"));
        }
        check_fee(self.swap_fee)?;

        match (self.curve_id, self.amplification_coefficient) {
            (CurveId::ConstantProduct, None) => {}
            (CurveId::ConstantProduct, Some(_)) => {
                return Err(AmmError::InvalidConfiguration(
                    "constant-product pairs take no amplification coefficient",
                ));
            }
            (CurveId::Stable, None) => {
                return Err(AmmError::InvalidConfiguration(
                    "stable pairs require an amplification coefficient",
                ));
            }
            (CurveId::Stable, Some(amp)) => {
                if amp < U256::from(A_PRECISION) {
                    return Err(AmmError::InvalidConfiguration(
                        "amplification coefficient must be at least A_PRECISION",
                    ));
                }
                check_stable_decimals(&self.token0, &self.token1)?;
            }
        }

        check_minimum_liquidity(self.reserve0, self.reserve1)
    }

    /// Returns `token0`, the lower-address token.
    #[must_use]
    pub const fn token0(&self) -> &Token {
        &self.token0
    }

    /// Returns `token1`, the higher-address token.
    #[must_use]
    pub const fn token1(&self) -> &Token {
        &self.token1
    }

    /// Returns the curve id.
    #[must_use]
    pub const fn curve_id(&self) -> CurveId {
        self.curve_id
    }

    /// Returns the balance of `token0`.
    #[must_use]
    pub const fn reserve0(&self) -> U256 {
        self.reserve0
    }

    /// Returns the balance of `token1`.
    #[must_use]
    pub const fn reserve1(&self) -> U256 {
        self.reserve1
    }

    /// Returns the swap fee in parts per `FEE_ACCURACY`.
    #[must_use]
    pub const fn swap_fee(&self) -> u32 {
        self.swap_fee
    }

    /// Returns the amplification coefficient, if any.
    #[must_use]
    pub const fn amplification_coefficient(&self) -> Option<U256> {
        self.amplification_coefficient
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use alloy_primitives::Address;

    fn tok(byte: u8, decimals: u8) -> Token {
        Token::new(1, Address::repeat_byte(byte), decimals)
    }

    fn reserves() -> (U256, U256) {
        (U256::from(1_000_000u64), U256::from(2_000_000u64))
    }

    #[test]
    fn valid_constant_product() {
        let result = PairSnapshot::constant_product((tok(1, 18), tok(2, 6)), reserves(), 3_000);
        assert!(result.is_ok());
    }

    #[test]
    fn valid_stable() {
        let result = PairSnapshot::stable(
            (tok(1, 18), tok(2, 6)),
            reserves(),
            400,
            U256::from(200 * A_PRECISION),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn amplification_must_match_curve() {
        let missing =
            PairSnapshot::new((tok(1, 18), tok(2, 6)), reserves(), 0, CurveId::Stable, None);
        assert!(matches!(missing, Err(AmmError::InvalidConfiguration(_))));

        let extra = PairSnapshot::new(
            (tok(1, 18), tok(2, 6)),
            reserves(),
            0,
            CurveId::ConstantProduct,
            Some(U256::from(A_PRECISION)),
        );
        assert!(matches!(extra, Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn low_amplification_rejected() {
        let result =
            PairSnapshot::stable((tok(1, 18), tok(2, 6)), reserves(), 0, U256::from(50u8));
        assert!(matches!(result, Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn fee_at_accuracy_rejected() {
        let result =
            PairSnapshot::constant_product((tok(1, 18), tok(2, 6)), reserves(), 1_000_000);
        assert!(matches!(result, Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn same_token_rejected() {
        let Err(AmmError::SameToken(_)) =
            PairSnapshot::constant_product((tok(1, 18), tok(1, 18)), reserves(), 0)
        else {
            panic!("expected SameToken");
        };
    }

    #[test]
    fn unsorted_tokens_rejected() {
        let Err(AmmError::InvalidConfiguration(reason)) =
            PairSnapshot::constant_product((tok(2, 6), tok(1, 18)), reserves(), 3_000)
        else {
            panic!("expected InvalidConfiguration");
        };
        assert!(reason.contains("token0"));
    }

    #[test]
    fn unsorted_record_fails_validation() {
        let json = r#"{
            "token0": {"chainId": 1, "address": "0x2222222222222222222222222222222222222222", "decimals": 6},
            "token1": {"chainId": 1, "address": "0x1111111111111111111111111111111111111111", "decimals": 18},
            "curveId": 0,
            "reserve0": "0xf4240",
            "reserve1": "0x1e8480",
            "swapFee": 3000
        }"#;
        let Ok(snapshot) = serde_json::from_str::<PairSnapshot>(json) else {
            panic!("well-formed record");
        };
        assert!(matches!(snapshot.validate(), Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "token0": {"chainId": 1, "address": "0x1111111111111111111111111111111111111111", "decimals": 18},
            "token1": {"chainId": 1, "address": "0x2222222222222222222222222222222222222222", "decimals": 6, "symbol": "USDC"},
            "curveId": 1,
            "reserve0": "0xf4240",
            "reserve1": "0x1e8480",
            "swapFee": 400,
            "amplificationCoefficient": "0x4e20"
        }"#;
        let Ok(snapshot) = serde_json::from_str::<PairSnapshot>(json) else {
            panic!("valid record");
        };
        assert_eq!(snapshot.validate(), Ok(()));
        assert_eq!(snapshot.curve_id(), CurveId::Stable);
        assert_eq!(snapshot.reserve0(), U256::from(1_000_000u64));
        assert_eq!(snapshot.amplification_coefficient(), Some(U256::from(20_000u64)));
        assert_eq!(snapshot.token1().symbol(), Some("USDC"));
    }

    #[test]
    fn serialization_round_trips() {
        let Ok(snapshot) =
            PairSnapshot::constant_product((tok(1, 18), tok(2, 6)), reserves(), 3_000)
        else {
            panic!("valid snapshot");
        };
        let Ok(json) = serde_json::to_string(&snapshot) else {
            panic!("serializable");
        };
        assert!(json.contains("\"swapFee\":3000"));
        assert!(!json.contains("amplificationCoefficient"));
        let Ok(back) = serde_json::from_str::<PairSnapshot>(&json) else {
            panic!("deserializable");
        };
        assert_eq!(back, snapshot);
    }
}
