//! Validated chain of pairs from an input currency to an output currency.

use once_cell::sync::OnceCell;

use super::Pair;
use crate::domain::{Currency, CurveId, Price, Token};
use crate::error::{AmmError, Result};

/// An ordered, connected sequence of pairs.
///
/// The `path` lists every token visited, starting with the wrapped input
/// and ending with the wrapped output, so it is one longer than the pair
/// list. The mid price is computed on first use and cached in the route;
/// a route never changes, so the cache never goes stale.
///
/// # Example
///
/// ```rust
/// use alloy_primitives::{Address, U256};
/// use multicurve_sdk::curves::ConstantProductCurve;
/// use multicurve_sdk::domain::Token;
/// use multicurve_sdk::entities::{Pair, Route};
///
/// let a = Token::new(1, Address::repeat_byte(1), 18);
/// let b = Token::new(1, Address::repeat_byte(2), 18);
/// let c = Token::new(1, Address::repeat_byte(3), 18);
/// let ab = Pair::new((a.clone(), b.clone()), (U256::from(1_000_000u64), U256::from(950_000u64)), 3_000, ConstantProductCurve)
///     .expect("pair");
/// let bc = Pair::new((b.clone(), c.clone()), (U256::from(2_000_000u64), U256::from(2_100_000u64)), 3_000, ConstantProductCurve)
///     .expect("pair");
///
/// let route = Route::new(vec![ab, bc], a.clone(), c.clone()).expect("connected");
/// assert_eq!(route.path(), &[a, b, c]);
/// assert_eq!(route.mid_price().expect("priced").to_fixed(4), "0.9975");
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    pairs: Vec<Pair>,
    path: Vec<Token>,
    input: Currency,
    output: Currency,
    mid_price: OnceCell<Price>,
}

impl Route {
    /// Validates and builds a route.
    ///
    /// Checks, in order: the pair list is non-empty; every pair and both
    /// currencies share one chain id; the first pair holds the (wrapped)
    /// input; the last pair holds the (wrapped) output; each pair holds the
    /// token the previous hop produced, and the walk ends at the output.
    ///
    /// # Errors
    ///
    /// [`AmmError::EmptyRoute`], [`AmmError::ChainIdMismatch`],
    /// [`AmmError::InputNotInRoute`], [`AmmError::OutputNotInRoute`] or
    /// [`AmmError::DisconnectedPath`], for the first check that fails.
    pub fn new(
        pairs: Vec<Pair>,
        input: impl Into<Currency>,
        output: impl Into<Currency>,
    ) -> Result<Self> {
        let input = input.into();
        let output = output.into();

        let Some(first) = pairs.first() else {
            return Err(AmmError::EmptyRoute);
        };
        let chain_id = first.chain_id();
        let chains = pairs
            .iter()
            .map(Pair::chain_id)
            .chain([input.chain_id(), output.chain_id()]);
        for found in chains {
            if found != chain_id {
                return Err(AmmError::ChainIdMismatch {
                    expected: chain_id,
                    found,
                });
            }
        }

        let wrapped_in = input.wrapped();
        let wrapped_out = output.wrapped();
        if !first.involves_token(wrapped_in) {
            return Err(AmmError::InputNotInRoute(wrapped_in.address()));
        }
        if !pairs.last().is_some_and(|p| p.involves_token(wrapped_out)) {
            return Err(AmmError::OutputNotInRoute(wrapped_out.address()));
        }

        let mut path = Vec::with_capacity(pairs.len() + 1);
        path.push(wrapped_in.clone());
        let mut current = wrapped_in.clone();
        for (hop, pair) in pairs.iter().enumerate() {
            if !pair.involves_token(&current) {
                return Err(AmmError::DisconnectedPath {
                    hop,
                    token: current.address(),
                });
            }
            current = pair.other(&current)?.clone();
            path.push(current.clone());
        }
        if current != *wrapped_out {
            return Err(AmmError::OutputNotInRoute(wrapped_out.address()));
        }

        tracing::debug!(
            chain_id,
            hops = pairs.len(),
            input = %input,
            output = %output,
            "route built"
        );

        Ok(Self {
            pairs,
            path,
            input,
            output,
            mid_price: OnceCell::new(),
        })
    }

    /// Returns the pairs in hop order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Returns the tokens visited, input first.
    #[must_use]
    pub fn path(&self) -> &[Token] {
        &self.path
    }

    /// Returns the input currency (possibly native).
    #[must_use]
    pub const fn input(&self) -> &Currency {
        &self.input
    }

    /// Returns the output currency (possibly native).
    #[must_use]
    pub const fn output(&self) -> &Currency {
        &self.output
    }

    /// Returns the chain every pair lives on.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.input.chain_id()
    }

    /// Returns each hop's curve id, in hop order.
    #[must_use]
    pub fn curve_ids(&self) -> Vec<CurveId> {
        self.pairs.iter().map(Pair::curve_id).collect()
    }

    /// The product of every hop's spot price, as a price of the input
    /// currency in the output currency.
    ///
    /// Computed once and cached.
    ///
    /// # Errors
    ///
    /// Propagates the first hop whose spot price fails (for example
    /// [`AmmError::InsufficientLiquidity`] on an empty pair).
    pub fn mid_price(&self) -> Result<&Price> {
        self.mid_price.get_or_try_init(|| {
            let mut hops = self.pairs.iter().zip(&self.path);
            let Some((pair, token)) = hops.next() else {
                return Err(AmmError::EmptyRoute);
            };
            let mut price = pair.spot_price(token)?;
            for (pair, token) in hops {
                price = price.multiply(&pair.spot_price(token)?)?;
            }
            tracing::trace!(price = %price, "route mid price computed");
            Ok(price.with_currencies(&self.input, &self.output))
        })
    }
}
