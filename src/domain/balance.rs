use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One funding account's balance as reported by Bridge.
///
/// `available_balance` is kept exactly as received. Use
/// [`PrefundedAccountBalanceEntry::available_decimal`] for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefundedAccountBalanceEntry {
    pub id: String,
    pub available_balance: String,
    pub currency: String,
    pub name: String,
}

impl PrefundedAccountBalanceEntry {
    /// Parses the reported balance without going through binary floating point.
    pub fn available_decimal(&self) -> Result<Decimal> {
        Ok(Decimal::from_str(self.available_balance.trim())?)
    }
}

/// Envelope returned by the balance endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceListing {
    pub data: Vec<PrefundedAccountBalanceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use rust_decimal_macros::dec;

    fn entry(balance: &str) -> PrefundedAccountBalanceEntry {
        PrefundedAccountBalanceEntry {
            id: "pa_1".to_string(),
            available_balance: balance.to_string(),
            currency: "usdc".to_string(),
            name: "Treasury".to_string(),
        }
    }

    #[test]
    fn test_available_decimal_is_lossless() {
        let entry = entry("1234567.0000000001");
        assert_eq!(entry.available_decimal().unwrap(), dec!(1234567.0000000001));
        assert_eq!(entry.available_balance, "1234567.0000000001");
    }

    #[test]
    fn test_available_decimal_rejects_garbage() {
        assert!(matches!(
            entry("ten dollars").available_decimal(),
            Err(BridgeError::DecimalError(_))
        ));
    }
}
