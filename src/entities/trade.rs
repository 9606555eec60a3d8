//! A sized swap along a route.

use super::Route;
use crate::domain::{CurrencyAmount, Fraction, Percent, Price, Rounding, TradeType};
use crate::error::{AmmError, Result};
use crate::math::to_big;

/// A route plus a fixed amount on one side and the quoted amount on the
/// other.
///
/// Exact-input trades walk the route forwards quoting outputs; exact-output
/// trades walk it backwards quoting required inputs. Intermediate hops are
/// priced on wrapped tokens; the two ends keep the route's currencies, so
/// a native input stays native.
#[derive(Debug, Clone)]
pub struct Trade {
    route: Route,
    trade_type: TradeType,
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
    execution_price: Price,
    price_impact: Percent,
}

impl Trade {
    /// Sizes a trade.
    ///
    /// `amount` must be in the route's input currency for
    /// [`TradeType::ExactInput`] and in its output currency for
    /// [`TradeType::ExactOutput`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::CurrencyMismatch`] if `amount` is on the wrong side.
    /// - Any quoting error from a hop ([`AmmError::InsufficientLiquidity`],
    ///   [`AmmError::ConvergenceFailure`], ...), surfaced unchanged.
    pub fn new(route: Route, amount: CurrencyAmount, trade_type: TradeType) -> Result<Self> {
        let (input_amount, output_amount) = match trade_type {
            TradeType::ExactInput => {
                if amount.currency() != route.input() {
                    return Err(AmmError::CurrencyMismatch(
                        "exact-input amount must be in the route input currency",
                    ));
                }
                let mut running = amount.wrapped();
                for pair in route.pairs() {
                    running = pair.quote_output_for_input(&running)?;
                }
                let output = running.with_currency(route.output());
                (amount, output)
            }
            TradeType::ExactOutput => {
                if amount.currency() != route.output() {
                    return Err(AmmError::CurrencyMismatch(
                        "exact-output amount must be in the route output currency",
                    ));
                }
                let mut running = amount.wrapped();
                for pair in route.pairs().iter().rev() {
                    running = pair.quote_input_for_output(&running)?;
                }
                let input = running.with_currency(route.input());
                (input, amount)
            }
        };

        let execution_price = Price::from_amounts(&input_amount, &output_amount)?;
        let price_impact = compute_price_impact(&route, &input_amount, &output_amount)?;

        tracing::debug!(
            %trade_type,
            input = %input_amount,
            output = %output_amount,
            impact = %price_impact,
            "trade sized"
        );

        Ok(Self {
            route,
            trade_type,
            input_amount,
            output_amount,
            execution_price,
            price_impact,
        })
    }

    /// Sizes a trade that sells exactly `amount_in`.
    ///
    /// # Errors
    ///
    /// See [`Trade::new`].
    pub fn exact_in(route: Route, amount_in: CurrencyAmount) -> Result<Self> {
        Self::new(route, amount_in, TradeType::ExactInput)
    }

    /// Sizes a trade that buys exactly `amount_out`.
    ///
    /// # Errors
    ///
    /// See [`Trade::new`].
    pub fn exact_out(route: Route, amount_out: CurrencyAmount) -> Result<Self> {
        Self::new(route, amount_out, TradeType::ExactOutput)
    }

    /// Returns the route.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Returns which side is fixed.
    #[must_use]
    pub const fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    /// Returns the input amount, in the route input currency.
    pub const fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    /// Returns the output amount, in the route output currency.
    pub const fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }

    /// Average price paid: output per input.
    #[must_use]
    pub const fn execution_price(&self) -> &Price {
        &self.execution_price
    }

    /// How far the execution price falls short of the route mid price.
    #[must_use]
    pub const fn price_impact(&self) -> &Percent {
        &self.price_impact
    }

    /// The least output the trade may deliver under `slippage`.
    ///
    /// Exact-input trades scale the quoted output by `1 − slippage`,
    /// rounding down; exact-output trades return the fixed output.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidSlippage`] if `slippage` exceeds 100%.
    /// - [`AmmError::Overflow`] from scaling.
    pub fn minimum_amount_out(&self, slippage: &Percent) -> Result<CurrencyAmount> {
        check_slippage(slippage)?;
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
            TradeType::ExactInput => {
                let keep = Fraction::one().sub(slippage.as_fraction())?;
                self.output_amount.multiply(&keep, Rounding::Down)
            }
        }
    }

    /// The most input the trade may consume under `slippage`.
    ///
    /// Exact-output trades scale the quoted input by `1 + slippage`,
    /// rounding up; exact-input trades return the fixed input.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidSlippage`] if `slippage` exceeds 100%.
    /// - [`AmmError::Overflow`] if the bound exceeds 256 bits.
    pub fn maximum_amount_in(&self, slippage: &Percent) -> Result<CurrencyAmount> {
        check_slippage(slippage)?;
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => {
                let allow = Fraction::one().add(slippage.as_fraction());
                self.input_amount.multiply(&allow, Rounding::Up)
            }
        }
    }

    /// The price of the worst fill allowed under `slippage`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Trade::minimum_amount_out`] and
    /// [`Trade::maximum_amount_in`].
    pub fn worst_execution_price(&self, slippage: &Percent) -> Result<Price> {
        Price::from_amounts(
            &self.maximum_amount_in(slippage)?,
            &self.minimum_amount_out(slippage)?,
        )
    }
}

fn check_slippage(slippage: &Percent) -> Result<()> {
    if slippage.exceeds_whole() {
        return Err(AmmError::InvalidSlippage("slippage tolerance above 100%"));
    }
    Ok(())
}

/// `(mid_quote − output) / mid_quote`, floored at zero.
fn compute_price_impact(
    route: &Route,
    input: &CurrencyAmount,
    output: &CurrencyAmount,
) -> Result<Percent> {
    let quoted = route.mid_price()?.quote(input)?;
    if quoted.is_zero() || output.raw() >= quoted.raw() {
        return Ok(Percent::zero());
    }
    let shortfall = to_big(quoted.raw()) - to_big(output.raw());
    Ok(Percent::from_fraction(Fraction::new(
        shortfall,
        to_big(quoted.raw()),
    )?))
}
