use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Validation and lookup failures display as their bare message, which is
/// what clients see in the `{status, message}` error body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn validation(message: impl Into<String>) -> Self {
        OrderError::ValidationError(message.into())
    }

    pub fn not_found(order_id: &str) -> Self {
        OrderError::NotFound(format!("Order id does not exist: {order_id}."))
    }

    /// HTTP-equivalent status code.
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::ValidationError(_) => 400,
            OrderError::NotFound(_) => 404,
            OrderError::ActorCommunicationError(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_status_codes() {
        let err = OrderError::validation("Order must include a deliverTo");
        assert_eq!(err.to_string(), "Order must include a deliverTo");
        assert_eq!(err.status_code(), 400);

        let err = OrderError::not_found("abc");
        assert_eq!(err.to_string(), "Order id does not exist: abc.");
        assert_eq!(err.status_code(), 404);

        let err = OrderError::ActorCommunicationError("Actor closed".to_string());
        assert_eq!(err.to_string(), "Actor communication error: Actor closed");
        assert_eq!(err.status_code(), 500);
    }
}
