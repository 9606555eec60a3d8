//! Builds pairs from ledger snapshots.

use crate::config::PairSnapshot;
use crate::curves::CurveBox;
use crate::domain::CurveId;
use crate::entities::Pair;
use crate::error::AmmError;

/// Stateless factory turning [`PairSnapshot`]s into [`Pair`]s.
///
/// Validates the snapshot, picks the curve from its curve id and builds
/// the pair. A curve whose Cargo feature is disabled is reported as
/// [`AmmError::InvalidConfiguration`].
///
/// # Example
///
/// ```rust
/// use alloy_primitives::{Address, U256};
/// use multicurve_sdk::config::PairSnapshot;
/// use multicurve_sdk::domain::{CurveId, Token};
/// use multicurve_sdk::factory::PairFactory;
///
/// let a = Token::new(1, Address::repeat_byte(1), 18);
/// let b = Token::new(1, Address::repeat_byte(2), 6);
/// let snapshot = PairSnapshot::stable(
///     (a, b),
///     (U256::from(1_000_000_000_000_000_000_000u128), U256::from(1_000_000_000u64)),
///     400,
///     U256::from(20_000u64),
/// )
/// .expect("valid snapshot");
///
/// let pair = PairFactory::from_snapshot(&snapshot).expect("pair built");
/// assert_eq!(pair.curve_id(), CurveId::Stable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairFactory;

impl PairFactory {
    /// Builds the pair described by `snapshot`.
    ///
    /// # Errors
    ///
    /// - Any error from [`PairSnapshot::validate`].
    /// - [`AmmError::InvalidConfiguration`] if the curve is not compiled in.
    pub fn from_snapshot(snapshot: &PairSnapshot) -> Result<Pair, AmmError> {
        snapshot.validate()?;

        let curve = Self::curve_for(snapshot)?;
        Pair::new(
            (snapshot.token0().clone(), snapshot.token1().clone()),
            (snapshot.reserve0(), snapshot.reserve1()),
            snapshot.swap_fee(),
            curve,
        )
    }

    /// Builds every pair, failing on the first invalid snapshot.
    ///
    /// # Errors
    ///
    /// See [`PairFactory::from_snapshot`].
    pub fn from_snapshots<'a>(
        snapshots: impl IntoIterator<Item = &'a PairSnapshot>,
    ) -> Result<Vec<Pair>, AmmError> {
        snapshots.into_iter().map(Self::from_snapshot).collect()
    }

    fn curve_for(snapshot: &PairSnapshot) -> Result<CurveBox, AmmError> {
        match snapshot.curve_id() {
            #[cfg(feature = "constant-product")]
            CurveId::ConstantProduct => Ok(crate::curves::ConstantProductCurve.into()),

            #[cfg(feature = "stable")]
            CurveId::Stable => {
                let amp = snapshot.amplification_coefficient().ok_or(
                    AmmError::InvalidConfiguration(
                        "stable pairs require an amplification coefficient",
                    ),
                )?;
                Ok(crate::curves::StableCurve::new(amp)?.into())
            }

            #[allow(unreachable_patterns)]
            _ => Err(AmmError::InvalidConfiguration(
                "curve type not enabled (check feature flags)",
            )),
        }
    }
}
