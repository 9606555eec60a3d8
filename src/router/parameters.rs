//! The call description handed to the submission layer.

use alloy_primitives::{Address, Bytes, U256};
use serde::Serialize;

/// One positional argument of a router call.
///
/// Serializes untagged, so JSON consumers see a plain string, an array of
/// strings or an array of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SwapArg {
    /// A hex quantity or a checksummed address.
    Single(String),
    /// A list of addresses or of hex-encoded calldata blobs.
    List(Vec<String>),
    /// A list of small integers (curve ids).
    Numbers(Vec<u8>),
}

impl SwapArg {
    /// A hex-encoded `uint256`.
    #[must_use]
    pub fn quantity(value: U256) -> Self {
        Self::Single(to_hex(value))
    }

    /// A checksummed address.
    #[must_use]
    pub fn address(address: Address) -> Self {
        Self::Single(address.to_checksum(None))
    }
}

/// A ready-to-submit router call: method, arguments, native value and
/// the ABI-encoded calldata of the same call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapParameters {
    method_name: String,
    args: Vec<SwapArg>,
    value: String,
    calldata: Bytes,
}

impl SwapParameters {
    pub(crate) fn new(
        method_name: impl Into<String>,
        args: Vec<SwapArg>,
        value: U256,
        calldata: impl Into<Bytes>,
    ) -> Self {
        Self {
            method_name: method_name.into(),
            args,
            value: to_hex(value),
            calldata: calldata.into(),
        }
    }

    /// Returns the router method to call.
    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Returns the positional arguments.
    #[must_use]
    pub fn args(&self) -> &[SwapArg] {
        &self.args
    }

    /// Returns the native value to attach, as `0x`-prefixed hex.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the ABI-encoded call (selector plus arguments).
    #[must_use]
    pub const fn calldata(&self) -> &Bytes {
        &self.calldata
    }
}

/// `0x`-prefixed, lowercase, even-length hex; zero is `0x00`.
///
/// ```
/// use alloy_primitives::U256;
/// use multicurve_sdk::router::to_hex;
///
/// assert_eq!(to_hex(U256::ZERO), "0x00");
/// assert_eq!(to_hex(U256::from(0xabcu64)), "0x0abc");
/// ```
#[must_use]
pub fn to_hex(value: U256) -> String {
    let digits = format!("{value:x}");
    if digits.len() % 2 == 1 {
        format!("0x0{digits}")
    } else {
        format!("0x{digits}")
    }
}
