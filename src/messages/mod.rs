use serde_json::Value;
use tokio::sync::oneshot;

use crate::domain::Order;
use crate::error::OrderError;

pub type ServiceResult<T> = std::result::Result<T, OrderError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// Messages understood by the order service. Each variant carries its
/// parameters and a oneshot channel for the response; request bodies travel
/// as raw JSON and are parsed by the service.
#[derive(Debug)]
pub enum OrderRequest {
    ListOrders {
        respond_to: ServiceResponse<Vec<Order>>,
    },
    CreateOrder {
        body: Value,
        respond_to: ServiceResponse<Order>,
    },
    ReadOrder {
        id: String,
        respond_to: ServiceResponse<Order>,
    },
    UpdateOrder {
        id: String,
        body: Value,
        respond_to: ServiceResponse<Order>,
    },
    DeleteOrder {
        id: String,
        respond_to: ServiceResponse<()>,
    },
    Shutdown,
}
