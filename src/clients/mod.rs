use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::Order;
use crate::error::OrderError;
use crate::messages::OrderRequest;

// =============================================================================
// CLIENT METHOD MACRO
// =============================================================================

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// A closed or dropped channel becomes `ActorCommunicationError`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// ORDER CLIENT
// =============================================================================

/// Handle for talking to the order service. Cheap to clone; the service
/// stops once every clone is dropped or [`OrderClient::shutdown`] is called.
#[derive(Clone, Debug)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending shutdown");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|_| OrderError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(OrderClient => fn list_orders() -> Vec<Order> as OrderRequest::ListOrders, Error = OrderError);
client_method!(OrderClient => fn create_order(body: Value) -> Order as OrderRequest::CreateOrder, Error = OrderError);
client_method!(OrderClient => fn read_order(id: String) -> Order as OrderRequest::ReadOrder, Error = OrderError);
client_method!(OrderClient => fn update_order(id: String, body: Value) -> Order as OrderRequest::UpdateOrder, Error = OrderError);
client_method!(OrderClient => fn delete_order(id: String) -> () as OrderRequest::DeleteOrder, Error = OrderError);
