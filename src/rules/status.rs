use crate::domain::payload::STATUS;
use crate::domain::{Order, OrderPayload, OrderStatus};
use crate::error::OrderError;

const STATUS_REQUIRED: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
const DELIVERED_IS_FINAL: &str = "A delivered order cannot be changed";
const DELETE_REQUIRES_PENDING: &str = "An order cannot be deleted unless it is pending";

/// Status the order moves to on update.
///
/// Rules apply in order: a status must be given; nothing moves to or from
/// `delivered`; the status must be one of the other three.
pub fn status_valid_for_update(
    payload: &OrderPayload,
    existing: Option<&Order>,
) -> Result<OrderStatus, OrderError> {
    let Some(requested) = payload.text(STATUS) else {
        return Err(OrderError::validation(STATUS_REQUIRED));
    };

    let requested = OrderStatus::from_name(&requested);
    let current = existing.and_then(|order| order.status.as_ref());
    if requested == Some(OrderStatus::Delivered) || current == Some(&OrderStatus::Delivered) {
        return Err(OrderError::validation(DELIVERED_IS_FINAL));
    }

    requested.ok_or_else(|| OrderError::validation(STATUS_REQUIRED))
}

pub fn status_valid_for_delete(order: &Order) -> Result<(), OrderError> {
    if order.is_pending() {
        Ok(())
    } else {
        Err(OrderError::validation(DELETE_REQUIRES_PENDING))
    }
}
