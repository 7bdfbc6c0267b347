use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settlement mechanism a transfer leg moves over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentRail {
    Ach,
    Wire,
    InternalTransfer,
    Crypto,
}

impl PaymentRail {
    /// Wire names, in declaration order.
    pub const NAMES: &'static [&'static str] = &["ach", "wire", "internal_transfer", "crypto"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentRail::Ach => "ach",
            PaymentRail::Wire => "wire",
            PaymentRail::InternalTransfer => "internal_transfer",
            PaymentRail::Crypto => "crypto",
        }
    }
}

impl fmt::Display for PaymentRail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentRail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ach" => Ok(PaymentRail::Ach),
            "wire" => Ok(PaymentRail::Wire),
            "internal_transfer" => Ok(PaymentRail::InternalTransfer),
            "crypto" => Ok(PaymentRail::Crypto),
            _ => Err(format!("Invalid payment rail: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Usdc,
}

impl Currency {
    pub const NAMES: &'static [&'static str] = &["USD", "USDC"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Usdc => "USDC",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::Usd),
            "USDC" => Ok(Currency::Usdc),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
