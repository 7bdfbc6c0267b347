use bridge_contracts::application::OperationSchema;
use bridge_contracts::domain::transfer::TransferRequest;
use bridge_contracts::domain::webhook::WebhookEvent;
use bridge_contracts::validation::ContractSchema;
use bridge_contracts::{ValidationError, validate_transfer_request, validate_webhook_payload};
use serde_json::json;

mod common;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_boundary_types_are_send_and_sync() {
    assert_send_sync::<TransferRequest>();
    assert_send_sync::<WebhookEvent>();
    assert_send_sync::<ValidationError>();
    assert_send_sync::<ContractSchema>();
    assert_send_sync::<OperationSchema>();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_validation_from_tasks() {
    let mut handles = Vec::new();

    for i in 0..64u64 {
        handles.push(tokio::spawn(async move {
            let mut transfer = common::valid_transfer();
            // Every other task submits an amount below the minimum
            transfer["amount"] = json!(if i % 2 == 0 { 20 + i } else { i % 20 });
            let webhook = json!({
                "event_type": "customer.updated",
                "event_object_id": format!("cust_{}", i)
            });

            let transfer_ok = validate_transfer_request(&transfer).is_ok();
            let event = validate_webhook_payload(&webhook).unwrap();
            (i, transfer_ok, event.event_object_id)
        }));
    }

    for handle in handles {
        let (i, transfer_ok, event_object_id) = handle.await.unwrap();
        assert_eq!(transfer_ok, i % 2 == 0);
        assert_eq!(event_object_id, format!("cust_{}", i));
    }
}
