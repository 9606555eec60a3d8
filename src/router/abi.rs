//! Solidity interface of the multi-curve router.

use alloy_sol_types::{sol, SolCall};

sol! {
    /// Router entry points used by the SDK.
    #[derive(Debug, PartialEq, Eq)]
    interface IMultiCurveRouter {
        function swapExactForVariable(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            uint8[] calldata curveIds,
            address to
        ) external payable returns (uint256[] memory amounts);

        function swapVariableForExact(
            uint256 amountOut,
            uint256 amountInMax,
            address[] calldata path,
            uint8[] calldata curveIds,
            address to
        ) external payable returns (uint256[] memory amounts);

        function unwrapWETH(uint256 amountMinimum, address recipient) external payable;

        function multicall(bytes[] calldata data) external payable returns (bytes[] memory results);
    }
}

/// The bare function name of `C`, e.g. `"multicall"`.
pub(crate) fn method_name<C: SolCall>() -> &'static str {
    C::SIGNATURE.split('(').next().unwrap_or(C::SIGNATURE)
}
