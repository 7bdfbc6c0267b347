use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Customer status snapshot attached to KYC-related events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventObject {
    pub kyc_status: String,
    pub tos_status: String,
}

/// A webhook notification pushed by Bridge.
///
/// Only `event_type`, `event_object_id` and `event_object` are modelled. Every
/// other top-level key lands in `extra` untouched and is written back out at
/// the top level on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event_type: String,
    pub event_object_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_object: Option<EventObject>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WebhookEvent {
    /// Looks up a field Bridge sent that this crate does not model.
    pub fn extra_field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_survive_a_round_trip() {
        let raw = json!({
            "event_type": "customer.updated",
            "event_object_id": "cust_42",
            "event_created_at": "2026-10-19T12:00:00Z",
            "foo": {"nested": [1, 2, 3]}
        });
        let event: WebhookEvent = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(event.event_object, None);
        assert_eq!(event.extra.len(), 2);
        assert_eq!(event.extra_field("foo"), Some(&json!({"nested": [1, 2, 3]})));
        assert_eq!(serde_json::to_value(&event).unwrap(), raw);
    }

    #[test]
    fn test_known_fields_are_not_duplicated_into_extra() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "event_type": "kyc_link.updated",
            "event_object_id": "kyc_1",
            "event_object": {"kyc_status": "approved", "tos_status": "accepted"}
        }))
        .unwrap();
        assert!(event.extra.is_empty());
        assert_eq!(
            event.event_object,
            Some(EventObject {
                kyc_status: "approved".to_string(),
                tos_status: "accepted".to_string(),
            })
        );
    }
}
