//! Turns a sized trade into router calldata.

use alloy_primitives::{hex, Address, Bytes, U256};
use alloy_sol_types::SolCall;

use super::abi::{method_name, IMultiCurveRouter};
use super::parameters::{SwapArg, SwapParameters};
use crate::config::SwapOptions;
use crate::domain::{CurveId, Token, TradeType};
use crate::entities::Trade;
use crate::error::{AmmError, Result};

/// Swap recipient meaning "leave the output in the router", so a following
/// `unwrapWETH` in the same multicall can pay it out natively.
pub const ROUTER_CUSTODY: Address = Address::ZERO;

/// Stateless encoder for the multi-curve router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRouter;

/// One router call before it is wrapped or returned.
struct EncodedCall {
    method: &'static str,
    args: Vec<SwapArg>,
    calldata: Vec<u8>,
}

impl EncodedCall {
    fn new<C: SolCall>(call: &C, args: Vec<SwapArg>) -> Self {
        Self {
            method: method_name::<C>(),
            args,
            calldata: call.abi_encode(),
        }
    }

    fn into_parameters(self, value: U256) -> SwapParameters {
        SwapParameters::new(self.method, self.args, value, self.calldata)
    }
}

impl SwapRouter {
    /// Produces the router call that executes `trade` under `options`.
    ///
    /// Exact-input trades call `swapExactForVariable` with the minimum
    /// output; exact-output trades call `swapVariableForExact` with the
    /// maximum input. `fee_on_transfer` changes no selector: it only
    /// restricts the trade to exact input, since a token taxed on transfer
    /// cannot pin the input the pool receives. A native input
    /// attaches the input bound as value. A native output sends the swap to
    /// [`ROUTER_CUSTODY`] and batches an `unwrapWETH` to the recipient in a
    /// `multicall`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidSlippage`] if the tolerance exceeds 100%.
    /// - [`AmmError::NativeInNativeOut`] if both ends are the native asset.
    /// - [`AmmError::FeeOnTransferExactOutput`] for fee-on-transfer exact output.
    /// - [`AmmError::Overflow`] if a slippage bound exceeds 256 bits.
    pub fn swap_call_parameters(trade: &Trade, options: &SwapOptions) -> Result<SwapParameters> {
        options.validate()?;
        let route = trade.route();
        let native_in = route.input().is_native();
        let native_out = route.output().is_native();
        if native_in && native_out {
            return Err(AmmError::NativeInNativeOut);
        }
        if options.fee_on_transfer() && trade.trade_type().is_exact_output() {
            return Err(AmmError::FeeOnTransferExactOutput);
        }

        let slippage = options.allowed_slippage();
        let amount_in = trade.maximum_amount_in(slippage)?.raw();
        let amount_out = trade.minimum_amount_out(slippage)?.raw();
        let path: Vec<Address> = route.path().iter().map(Token::address).collect();
        let curve_ids: Vec<u8> = route.curve_ids().into_iter().map(CurveId::as_u8).collect();
        let to = if native_out {
            ROUTER_CUSTODY
        } else {
            options.recipient()
        };

        let swap = Self::encode_swap(
            trade.trade_type(),
            (amount_in, amount_out),
            path,
            curve_ids,
            to,
        );
        let value = if native_in { amount_in } else { U256::ZERO };

        let params = if native_out {
            let unwrap = EncodedCall::new(
                &IMultiCurveRouter::unwrapWETHCall {
                    amountMinimum: amount_out,
                    recipient: options.recipient(),
                },
                vec![
                    SwapArg::quantity(amount_out),
                    SwapArg::address(options.recipient()),
                ],
            );
            Self::multicall(vec![swap, unwrap]).into_parameters(value)
        } else {
            swap.into_parameters(value)
        };

        tracing::debug!(
            method = params.method_name(),
            value = params.value(),
            calldata_len = params.calldata().len(),
            "encoded swap call"
        );
        Ok(params)
    }

    // -- helpers -----------------------------------------------------------

    fn encode_swap(
        trade_type: TradeType,
        (amount_in, amount_out): (U256, U256),
        path: Vec<Address>,
        curve_ids: Vec<u8>,
        to: Address,
    ) -> EncodedCall {
        let path_arg = SwapArg::List(path.iter().map(|a| a.to_checksum(None)).collect());
        let curve_arg = SwapArg::Numbers(curve_ids.clone());
        match trade_type {
            TradeType::ExactInput => EncodedCall::new(
                &IMultiCurveRouter::swapExactForVariableCall {
                    amountIn: amount_in,
                    amountOutMin: amount_out,
                    path,
                    curveIds: curve_ids,
                    to,
                },
                vec![
                    SwapArg::quantity(amount_in),
                    SwapArg::quantity(amount_out),
                    path_arg,
                    curve_arg,
                    SwapArg::address(to),
                ],
            ),
            TradeType::ExactOutput => EncodedCall::new(
                &IMultiCurveRouter::swapVariableForExactCall {
                    amountOut: amount_out,
                    amountInMax: amount_in,
                    path,
                    curveIds: curve_ids,
                    to,
                },
                vec![
                    SwapArg::quantity(amount_out),
                    SwapArg::quantity(amount_in),
                    path_arg,
                    curve_arg,
                    SwapArg::address(to),
                ],
            ),
        }
    }

    fn multicall(calls: Vec<EncodedCall>) -> EncodedCall {
        let data: Vec<Bytes> = calls.into_iter().map(|c| Bytes::from(c.calldata)).collect();
        let arg = SwapArg::List(data.iter().map(hex::encode_prefixed).collect());
        EncodedCall::new(&IMultiCurveRouter::multicallCall { data }, vec![arg])
    }
}
