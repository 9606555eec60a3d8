//! Execution options for encoding a swap.

use alloy_primitives::Address;

use crate::domain::Percent;
use crate::error::AmmError;

/// Default slippage tolerance in basis points (0.5%).
const DEFAULT_SLIPPAGE_BPS: u32 = 50;

/// How a trade should be executed on-chain.
///
/// Built with [`SwapOptions::new`] and refined with the `with_*` methods.
///
/// ```
/// use alloy_primitives::Address;
/// use multicurve_sdk::config::SwapOptions;
/// use multicurve_sdk::domain::Percent;
///
/// let options = SwapOptions::new(Address::repeat_byte(0xaa))
///     .with_allowed_slippage(Percent::from_bps(100))
///     .with_fee_on_transfer(true);
/// assert!(options.validate().is_ok());
/// assert!(options.fee_on_transfer());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOptions {
    allowed_slippage: Percent,
    recipient: Address,
    fee_on_transfer: bool,
}

impl SwapOptions {
    /// Options paying `recipient`, with 0.5% slippage and no
    /// fee-on-transfer support.
    #[must_use]
    pub fn new(recipient: Address) -> Self {
        Self {
            allowed_slippage: Percent::from_bps(DEFAULT_SLIPPAGE_BPS),
            recipient,
            fee_on_transfer: false,
        }
    }

    /// Sets the slippage tolerance.
    #[must_use]
    pub fn with_allowed_slippage(mut self, slippage: Percent) -> Self {
        self.allowed_slippage = slippage;
        self
    }

    /// Marks an input token that charges a transfer fee.
    ///
    /// The router has no separate entry point for such tokens. Enabling
    /// this restricts encoding to exact-input trades, since the amount the
    /// pair receives can't be fixed up front.
    #[must_use]
    pub const fn with_fee_on_transfer(mut self, enabled: bool) -> Self {
        self.fee_on_transfer = enabled;
        self
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidSlippage`] if the tolerance exceeds 100%.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.allowed_slippage.exceeds_whole() {
            return Err(AmmError::InvalidSlippage("slippage tolerance above 100%"));
        }
        Ok(())
    }

    /// Returns the slippage tolerance.
    #[must_use]
    pub const fn allowed_slippage(&self) -> &Percent {
        &self.allowed_slippage
    }

    /// Returns who receives the output.
    #[must_use]
    pub const fn recipient(&self) -> Address {
        self.recipient
    }

    /// Returns whether fee-on-transfer support is requested.
    #[must_use]
    pub const fn fee_on_transfer(&self) -> bool {
        self.fee_on_transfer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SwapOptions::new(Address::ZERO);
        assert_eq!(options.allowed_slippage(), &Percent::from_bps(50));
        assert!(!options.fee_on_transfer());
        assert_eq!(options.recipient(), Address::ZERO);
    }

    #[test]
    fn excessive_slippage_rejected() {
        let options =
            SwapOptions::new(Address::ZERO).with_allowed_slippage(Percent::from_bps(20_000));
        assert!(matches!(options.validate(), Err(AmmError::InvalidSlippage(_))));
    }
}
