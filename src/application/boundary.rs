use crate::domain::balance::{BalanceListing, PrefundedAccountBalanceEntry};
use crate::domain::endpoints::Operation;
use crate::domain::rail::{Currency, PaymentRail};
use crate::domain::transfer::{DeveloperFee, TransferAmount, TransferRequest};
use crate::domain::webhook::WebhookEvent;
use crate::error::{BridgeError, Result};
use crate::validation::{ADDRESS_PATTERN, ContractSchema, UUID_PATTERN, ValidationError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::LazyLock;
use tracing::debug;

static BALANCE_RESPONSE: LazyLock<ContractSchema> = LazyLock::new(|| {
    let text = json!({"type": "string"});
    ContractSchema::compile(json!({
        "type": "object",
        "required": ["data"],
        "properties": {
            "data": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "available_balance", "currency", "name"],
                    "properties": {
                        "id": text,
                        "available_balance": text,
                        "currency": text,
                        "name": text
                    }
                }
            }
        }
    }))
});

static TRANSFER_REQUEST: LazyLock<ContractSchema> = LazyLock::new(|| {
    let uuid = json!({"type": "string", "format": "uuid", "pattern": UUID_PATTERN});
    let rail = json!({"enum": PaymentRail::NAMES});
    let currency = json!({"enum": Currency::NAMES});
    ContractSchema::compile(json!({
        "type": "object",
        "required": ["amount", "on_behalf_of", "source", "destination"],
        "properties": {
            "amount": {"type": "number", "minimum": TransferAmount::MIN},
            "on_behalf_of": uuid,
            "developer_fee": {
                "type": "number",
                "minimum": DeveloperFee::MIN,
                "maximum": DeveloperFee::MAX
            },
            "source": {
                "type": "object",
                "required": ["payment_rail", "currency", "prefunded_account_id"],
                "properties": {
                    "payment_rail": rail,
                    "currency": currency,
                    "prefunded_account_id": uuid
                }
            },
            "destination": {
                "type": "object",
                "required": ["payment_rail", "currency", "to_address"],
                "properties": {
                    "payment_rail": rail,
                    "currency": currency,
                    "to_address": {"type": "string", "pattern": ADDRESS_PATTERN}
                }
            }
        }
    }))
});

static WEBHOOK_PAYLOAD: LazyLock<ContractSchema> = LazyLock::new(|| {
    let text = json!({"type": "string"});
    ContractSchema::compile(json!({
        "type": "object",
        "required": ["event_type", "event_object_id"],
        "properties": {
            "event_type": text,
            "event_object_id": text,
            "event_object": {
                "type": "object",
                "required": ["kyc_status", "tos_status"],
                "properties": {
                    "kyc_status": text,
                    "tos_status": text
                }
            }
        }
    }))
});

// Transfer creation and webhook responses have no observed contract yet.
static OPAQUE: LazyLock<ContractSchema> = LazyLock::new(|| ContractSchema::compile(json!(true)));

/// Request and response contracts for one operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationSchema {
    /// `None` when the operation sends no body.
    pub body: Option<&'static ContractSchema>,
    pub response: &'static ContractSchema,
}

pub fn schema_for(operation: Operation) -> OperationSchema {
    match operation {
        Operation::GetPrefundedAccountBalance => OperationSchema {
            body: None,
            response: &BALANCE_RESPONSE,
        },
        Operation::CreatePrefundedAccountTransfer => OperationSchema {
            body: Some(&*TRANSFER_REQUEST),
            response: &OPAQUE,
        },
        Operation::ProcessWebhook => OperationSchema {
            body: Some(&*WEBHOOK_PAYLOAD),
            response: &OPAQUE,
        },
    }
}

/// A payload that passed its operation's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Validated {
    Balances(Vec<PrefundedAccountBalanceEntry>),
    Transfer(TransferRequest),
    Webhook(WebhookEvent),
    /// Accepted without inspection.
    Opaque(Value),
}

fn conform<T: DeserializeOwned>(
    operation: Operation,
    schema: &ContractSchema,
    raw: &Value,
) -> std::result::Result<T, ValidationError> {
    let result = schema.conform(raw);
    match &result {
        Ok(_) => debug!(%operation, "payload accepted"),
        Err(e) => debug!(%operation, violations = e.count(), "payload rejected"),
    }
    result
}

/// Validates the balance endpoint's `{ "data": [...] }` envelope.
pub fn validate_balance_response(
    raw: &Value,
) -> std::result::Result<Vec<PrefundedAccountBalanceEntry>, ValidationError> {
    let listing: BalanceListing =
        conform(Operation::GetPrefundedAccountBalance, &BALANCE_RESPONSE, raw)?;
    Ok(listing.data)
}

pub fn validate_transfer_request(
    raw: &Value,
) -> std::result::Result<TransferRequest, ValidationError> {
    conform(Operation::CreatePrefundedAccountTransfer, &TRANSFER_REQUEST, raw)
}

/// Validates an inbound webhook body. Unrecognised top-level keys are kept.
pub fn validate_webhook_payload(raw: &Value) -> std::result::Result<WebhookEvent, ValidationError> {
    conform(Operation::ProcessWebhook, &WEBHOOK_PAYLOAD, raw)
}

/// Validates the body a caller sends (or receives, for webhooks) for `operation`.
pub fn validate_request(operation: Operation, raw: &Value) -> Result<Validated> {
    match operation {
        Operation::GetPrefundedAccountBalance => Err(BridgeError::NoRequestBody(operation)),
        Operation::CreatePrefundedAccountTransfer => {
            Ok(Validated::Transfer(validate_transfer_request(raw)?))
        }
        Operation::ProcessWebhook => Ok(Validated::Webhook(validate_webhook_payload(raw)?)),
    }
}

/// Validates what comes back from `operation`. Unmodelled responses pass through as-is.
pub fn validate_response(
    operation: Operation,
    raw: &Value,
) -> std::result::Result<Validated, ValidationError> {
    match operation {
        Operation::GetPrefundedAccountBalance => {
            Ok(Validated::Balances(validate_balance_response(raw)?))
        }
        _ => {
            schema_for(operation).response.check(raw)?;
            Ok(Validated::Opaque(raw.clone()))
        }
    }
}

pub fn parse_balance_response(text: &str) -> Result<Vec<PrefundedAccountBalanceEntry>> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(validate_balance_response(&raw)?)
}

pub fn parse_transfer_request(text: &str) -> Result<TransferRequest> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(validate_transfer_request(&raw)?)
}

pub fn parse_webhook_payload(text: &str) -> Result<WebhookEvent> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(validate_webhook_payload(&raw)?)
}
