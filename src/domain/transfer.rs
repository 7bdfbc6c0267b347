use super::rail::{Currency, PaymentRail};
use crate::error::Result as BridgeResult;
use crate::validation::{Actual, Constraint, FieldPath, StringFormat, ValidationError, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Inclusive range check shared by the numeric value objects.
fn check_bounds(n: f64, min: Option<f64>, max: Option<f64>) -> Option<Constraint> {
    if !n.is_finite() {
        return Some(Constraint::Finite);
    }
    match (min, max) {
        (Some(min), _) if n < min => Some(Constraint::Minimum(min)),
        (_, Some(max)) if n > max => Some(Constraint::Maximum(max)),
        _ => None,
    }
}

/// Transfer amount in the source currency. Must be at least [`TransferAmount::MIN`].
///
/// Plain `f64`: Bridge takes a JSON number here and no rounding policy is applied.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TransferAmount(f64);

impl TransferAmount {
    pub const MIN: f64 = 20.0;

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        match check_bounds(value, Some(Self::MIN), None) {
            None => Ok(Self(value)),
            Some(constraint) => Err(ValidationError::single(Violation::new(
                FieldPath::field("amount"),
                constraint,
                value,
            ))),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TransferAmount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TransferAmount> for f64 {
    fn from(amount: TransferAmount) -> Self {
        amount.0
    }
}

/// Percentage retained by the integrating platform, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DeveloperFee(f64);

impl DeveloperFee {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        match check_bounds(value, Some(Self::MIN), Some(Self::MAX)) {
            None => Ok(Self(value)),
            Some(constraint) => Err(ValidationError::single(Violation::new(
                FieldPath::field("developer_fee"),
                constraint,
                value,
            ))),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for DeveloperFee {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeveloperFee> for f64 {
    fn from(fee: DeveloperFee) -> Self {
        fee.0
    }
}

/// EVM-style destination address: `0x` and exactly 40 hex digits.
///
/// Case is preserved as received; no checksum is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    const PREFIX: &'static str = "0x";
    const HEX_DIGITS: usize = 40;

    pub fn is_valid(s: &str) -> bool {
        s.len() == Self::PREFIX.len() + Self::HEX_DIGITS
            && s.starts_with(Self::PREFIX)
            && s[Self::PREFIX.len()..].bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::try_from(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !Self::is_valid(&value) {
            return Err(ValidationError::single(Violation::new(
                FieldPath::field("destination").child("to_address"),
                Constraint::Format(StringFormat::WalletAddress),
                Actual::from(value.as_str()),
            )));
        }
        Ok(Self(value))
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Funding leg: always a prefunded account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferSource {
    pub payment_rail: PaymentRail,
    pub currency: Currency,
    /// Hyphenated UUID, kept exactly as sent.
    pub prefunded_account_id: String,
}

impl TransferSource {
    pub fn prefunded_account_uuid(&self) -> BridgeResult<Uuid> {
        Ok(Uuid::try_parse(&self.prefunded_account_id)?)
    }
}

/// Receiving leg. Rail and currency are independent of the source's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDestination {
    pub payment_rail: PaymentRail,
    pub currency: Currency,
    pub to_address: WalletAddress,
}

/// Body of a prefunded account transfer creation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub amount: TransferAmount,
    /// Hyphenated UUID of the customer, kept exactly as sent.
    pub on_behalf_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_fee: Option<DeveloperFee>,
    pub source: TransferSource,
    pub destination: TransferDestination,
}

impl TransferRequest {
    /// Parses `on_behalf_of` for lookups; the stored string is left untouched.
    pub fn on_behalf_of_uuid(&self) -> BridgeResult<Uuid> {
        Ok(Uuid::try_parse(&self.on_behalf_of)?)
    }
}
