//! # Mock Framework
//!
//! Utilities for testing the order client in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_delete`] to assert behavior.

use serde_json::Value;
use tokio::sync::mpsc;

use crate::clients::OrderClient;
use crate::domain::Order;
use crate::messages::{OrderRequest, ServiceResponse};

/// Creates a client whose requests land on a receiver the test controls, so
/// the test can play the service: answer, fail, or drop the reply.
pub fn create_mock_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(Value, ServiceResponse<Order>)> {
    match receiver.recv().await {
        Some(OrderRequest::CreateOrder { body, respond_to }) => Some((body, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(String, Value, ServiceResponse<Order>)> {
    match receiver.recv().await {
        Some(OrderRequest::UpdateOrder { id, body, respond_to }) => Some((id, body, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(String, ServiceResponse<()>)> {
    match receiver.recv().await {
        Some(OrderRequest::DeleteOrder { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dish;
    use crate::error::OrderError;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_forwards_body_and_reply() {
        let (client, mut receiver) = create_mock_client(10);

        let body = json!({ "data": { "deliverTo": "A" } });
        let sent = body.clone();
        let create_task = tokio::spawn(async move { client.create_order(sent).await });

        let (received, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(received, body);
        let order = Order::new("order_1", "A", "555", vec![Dish::new(1)]);
        responder.send(Ok(order.clone())).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(order));
    }

    #[tokio::test]
    async fn test_update_passes_service_errors_through() {
        let (client, mut receiver) = create_mock_client(10);

        let update_task = tokio::spawn(async move {
            client.update_order("order_1".to_string(), json!({})).await
        });

        let (id, body, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, "order_1");
        assert_eq!(body, json!({}));
        let err = OrderError::validation("Order must include a deliverTo");
        responder.send(Err(err.clone())).unwrap();

        assert_eq!(update_task.await.unwrap(), Err(err));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let delete_task = tokio::spawn(async move { client.delete_order("order_1".to_string()).await });

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "order_1");
        drop(responder);

        assert_eq!(
            delete_task.await.unwrap(),
            Err(OrderError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_service_is_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert_eq!(
            client.read_order("order_1".to_string()).await,
            Err(OrderError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
