use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::OrderClient;
use crate::domain::{Order, OrderPayload, OrderStatus};
use crate::error::OrderError;
use crate::handlers::OrderHandlers;
use crate::messages::{OrderRequest, ServiceResponse, ServiceResult};

// =============================================================================
// ORDER SERVICE
// =============================================================================

/// Owns the order handlers (and through them the store). Requests are taken
/// off the channel one at a time, so each operation completes before the
/// next one starts.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    handlers: OrderHandlers,
}

impl OrderService {
    pub fn new(buffer_size: usize, handlers: OrderHandlers) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, handlers };
        let client = OrderClient::new(sender);
        (service, client)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!(orders = self.handlers.store().len(), "OrderService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::ListOrders { respond_to } => {
                    self.handle_list_orders(respond_to);
                }
                OrderRequest::CreateOrder { body, respond_to } => {
                    self.handle_create_order(body, respond_to);
                }
                OrderRequest::ReadOrder { id, respond_to } => {
                    self.handle_read_order(id, respond_to);
                }
                OrderRequest::UpdateOrder { id, body, respond_to } => {
                    self.handle_update_order(id, body, respond_to);
                }
                OrderRequest::DeleteOrder { id, respond_to } => {
                    self.handle_delete_order(id, respond_to);
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
            }
        }
        info!("OrderService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_orders(&self, respond_to: ServiceResponse<Vec<Order>>) {
        debug!("Processing list_orders request");
        let orders = self.handlers.list();
        debug!(count = orders.len(), "Orders listed");
        let _ = respond_to.send(Ok(orders));
    }

    #[instrument(skip(self, body, respond_to))]
    fn handle_create_order(&mut self, body: Value, respond_to: ServiceResponse<Order>) {
        debug!("Processing create_order request");
        let result = self.handlers.create(&OrderPayload::from_body(&body));
        match &result {
            Ok(order) => info!(order_id = %order.id, "Order created successfully"),
            Err(e) => log_rejection(e),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_read_order(&self, id: String, respond_to: ServiceResponse<Order>) {
        debug!("Processing read_order request");
        let result = self.handlers.read(&id);
        if let Err(e) = &result {
            log_rejection(e);
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = %id), skip(self, body, respond_to))]
    fn handle_update_order(&mut self, id: String, body: Value, respond_to: ServiceResponse<Order>) {
        debug!("Processing update_order request");
        let result = self.handlers.update(&id, &OrderPayload::from_body(&body));
        match &result {
            Ok(order) => {
                let status = order.status.as_ref().map(OrderStatus::as_str).unwrap_or_default();
                info!(status, "Order updated successfully");
            }
            Err(e) => log_rejection(e),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_delete_order(&mut self, id: String, respond_to: ServiceResponse<()>) {
        debug!("Processing delete_order request");
        let result: ServiceResult<()> = self.handlers.delete(&id);
        match &result {
            Ok(()) => info!("Order deleted successfully"),
            Err(e) => log_rejection(e),
        }
        let _ = respond_to.send(result);
    }
}

fn log_rejection(error: &OrderError) {
    warn!(error = %error, code = error.status_code(), "Order request rejected");
}
