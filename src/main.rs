mod actors;
mod app_system;
mod clients;
mod domain;
mod error;
mod handlers;
mod messages;
mod response;
mod rules;
mod store;

#[cfg(test)]
mod mock_framework;

use serde_json::json;
use tracing::{info, instrument, warn};

use crate::app_system::{setup_tracing, OrderSystem, SystemConfig};
use crate::clients::OrderClient;
use crate::error::OrderError;
use crate::response::{ApiResponse, Reply};

fn report(operation: &str, response: &ApiResponse) {
    let body = response
        .body
        .as_ref()
        .map(|body| body.to_string())
        .unwrap_or_default();
    if response.status < 400 {
        info!(operation, status = response.status, %body, "Request handled");
    } else {
        warn!(operation, status = response.status, %body, "Request failed");
    }
}

#[instrument(name = "order_walkthrough", skip(client))]
async fn walkthrough(client: &OrderClient) -> Result<(), OrderError> {
    let created = client
        .create_order(json!({
            "data": {
                "deliverTo": "308 Negra Arroyo Lane",
                "mobileNumber": "(505) 143-3369",
                "dishes": [{ "name": "Falafel and tahini bagel", "quantity": 2 }],
                "status": "pending",
            }
        }))
        .await;
    report("create", &ApiResponse::from_result(created.clone().map(Reply::Created)));

    let rejected = client
        .create_order(json!({
            "data": { "deliverTo": "A", "mobileNumber": "555", "dishes": [{ "quantity": 0 }] }
        }))
        .await;
    report("create", &ApiResponse::from_result(rejected.map(Reply::Created)));

    let missing = client.read_order("unknown-id".to_string()).await;
    report("read", &ApiResponse::from_result(missing.map(Reply::Order)));

    let order = created?;
    let updated = client
        .update_order(
            order.id.clone(),
            json!({
                "data": {
                    "id": order.id,
                    "deliverTo": "308 Negra Arroyo Lane",
                    "mobileNumber": "(505) 143-3369",
                    "dishes": [{ "name": "Falafel and tahini bagel", "quantity": 3 }],
                    "status": "preparing",
                }
            }),
        )
        .await;
    report("update", &ApiResponse::from_result(updated.map(Reply::Order)));

    let not_pending = client.delete_order(order.id.clone()).await;
    report("delete", &ApiResponse::from_result(not_pending.map(|()| Reply::Deleted)));

    let orders = client.list_orders().await;
    report("list", &ApiResponse::from_result(orders.map(Reply::Orders)));

    Ok(())
}

/// Runs the walkthrough and always shuts the system down afterwards. A
/// walkthrough failure takes precedence over a shutdown failure.
async fn run(system: OrderSystem) -> Result<(), OrderError> {
    let outcome = walkthrough(&system.order_client).await;
    let stopped = system.shutdown().await;
    outcome.and(stopped)
}

#[tokio::main]
async fn main() -> Result<(), OrderError> {
    let config = SystemConfig::from_env();
    setup_tracing(&config.log_filter);

    info!("Starting restaurant order system");
    run(OrderSystem::new(&config)).await?;

    info!("Application completed successfully");
    Ok(())
}
