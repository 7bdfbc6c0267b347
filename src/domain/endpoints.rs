//! Versioned Bridge paths. These are part of the external contract and only
//! change together with Bridge's API version.

use std::fmt;
use std::str::FromStr;

macro_rules! api_version {
    () => {
        "/v1"
    };
}

macro_rules! bridge_path {
    () => {
        concat!(api_version!(), "/bridge")
    };
    ($segment:literal) => {
        concat!(bridge_path!(), "/", $segment)
    };
}

pub const API_VERSION: &str = api_version!();
pub const PROVIDER_NAMESPACE: &str = bridge_path!();

pub const PREFUNDED_ACCOUNT_BALANCE_PATH: &str = bridge_path!("prefunded-account-balance");
pub const PREFUNDED_ACCOUNT_TRANSFER_PATH: &str = bridge_path!("prefunded-account-transfer");
pub const WEBHOOK_PATH: &str = bridge_path!("webhook");

/// The three calls exchanged with Bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetPrefundedAccountBalance,
    CreatePrefundedAccountTransfer,
    ProcessWebhook,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::GetPrefundedAccountBalance,
        Operation::CreatePrefundedAccountTransfer,
        Operation::ProcessWebhook,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Operation::GetPrefundedAccountBalance => PREFUNDED_ACCOUNT_BALANCE_PATH,
            Operation::CreatePrefundedAccountTransfer => PREFUNDED_ACCOUNT_TRANSFER_PATH,
            Operation::ProcessWebhook => WEBHOOK_PATH,
        }
    }

    /// Last path segment, also used as the operation's short name.
    pub fn name(&self) -> &'static str {
        let path = self.path();
        &path[PROVIDER_NAMESPACE.len() + 1..]
    }

    /// Joins `base` and the path with exactly one `/`.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_stable_literals() {
        assert_eq!(
            Operation::GetPrefundedAccountBalance.path(),
            "/v1/bridge/prefunded-account-balance"
        );
        assert_eq!(
            Operation::CreatePrefundedAccountTransfer.path(),
            "/v1/bridge/prefunded-account-transfer"
        );
        assert_eq!(Operation::ProcessWebhook.path(), "/v1/bridge/webhook");
    }

    #[test]
    fn test_segment_constants() {
        assert_eq!(API_VERSION, "/v1");
        assert_eq!(PROVIDER_NAMESPACE, "/v1/bridge");
        assert_eq!(WEBHOOK_PATH, "/v1/bridge/webhook");
    }

    #[test]
    fn test_paths_share_the_versioned_namespace() {
        assert!(PROVIDER_NAMESPACE.starts_with(API_VERSION));
        for op in Operation::ALL {
            assert!(op.path().starts_with(&format!("{}/", PROVIDER_NAMESPACE)));
        }
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        assert_eq!(Operation::ProcessWebhook.name(), "webhook");
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
        assert!("transfers".parse::<Operation>().is_err());
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let op = Operation::ProcessWebhook;
        assert_eq!(
            op.url("https://api.example.com/"),
            "https://api.example.com/v1/bridge/webhook"
        );
        assert_eq!(
            op.url("https://api.example.com"),
            "https://api.example.com/v1/bridge/webhook"
        );
    }
}
