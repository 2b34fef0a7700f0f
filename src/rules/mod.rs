//! Validation rules for submitted orders, and the ordered pipelines each
//! operation runs before touching the store.

pub mod fields;
pub mod status;

pub use fields::*;
pub use status::*;

use crate::domain::payload::{DELIVER_TO, DISHES, MOBILE_NUMBER, STATUS};
use crate::domain::{Dish, Order, OrderPayload, OrderStatus};

use crate::error::OrderError;

/// The mutable order fields as they come out of a validation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrder {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Dish>,
    pub status: Option<OrderStatus>,
}

impl ValidOrder {
    pub fn apply_to(self, order: &mut Order) {
        order.deliver_to = self.deliver_to;
        order.mobile_number = self.mobile_number;
        order.dishes = self.dishes;
        order.status = self.status;
    }
}

/// Create pipeline: deliverTo, mobileNumber, dishes present, then dish
/// contents. The status is taken as given.
pub fn validate_create(payload: &OrderPayload) -> Result<ValidOrder, OrderError> {
    let deliver_to = required_text(payload, DELIVER_TO)?;
    let mobile_number = required_text(payload, MOBILE_NUMBER)?;
    require_field(payload, DISHES)?;
    let dishes = parse_dishes(payload)?;

    Ok(ValidOrder {
        deliver_to,
        mobile_number,
        dishes,
        status: payload.text(STATUS).map(OrderStatus::from),
    })
}

/// Update pipeline. Status runs before dish contents; the first failure
/// decides the message.
pub fn validate_update(payload: &OrderPayload, existing: &Order) -> Result<ValidOrder, OrderError> {
    let deliver_to = required_text(payload, DELIVER_TO)?;
    let mobile_number = required_text(payload, MOBILE_NUMBER)?;
    require_field(payload, DISHES)?;
    let status = status_valid_for_update(payload, Some(existing))?;
    let dishes = parse_dishes(payload)?;

    Ok(ValidOrder {
        deliver_to,
        mobile_number,
        dishes,
        status: Some(status),
    })
}
