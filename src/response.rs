use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::Order;
use crate::error::OrderError;

/// Successful outcome of an order operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Orders(Vec<Order>),
    Created(Order),
    Order(Order),
    Deleted,
}

/// Transport-agnostic response: an HTTP-equivalent status code and the JSON
/// body, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn data<T: Serialize>(status: u16, data: &T) -> Self {
        Self {
            status,
            body: Some(json!({ "data": data })),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    pub fn error(err: &OrderError) -> Self {
        let status = err.status_code();
        Self {
            status,
            body: Some(json!({ "status": status, "message": err.to_string() })),
        }
    }

    pub fn from_result(result: Result<Reply, OrderError>) -> Self {
        match result {
            Ok(reply) => reply.into(),
            Err(err) => Self::error(&err),
        }
    }
}

impl From<Reply> for ApiResponse {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::Orders(orders) => ApiResponse::data(200, &orders),
            Reply::Created(order) => ApiResponse::data(201, &order),
            Reply::Order(order) => ApiResponse::data(200, &order),
            Reply::Deleted => ApiResponse::no_content(),
        }
    }
}
