use crate::domain::{Order, OrderPayload};
use crate::error::OrderError;
use crate::rules::{status_valid_for_delete, validate_create, validate_update};
use crate::store::OrderStore;

/// Source of fresh order ids, called once per successful create.
pub type IdGenerator = Box<dyn FnMut() -> String + Send>;

/// The five order operations over an owned [`OrderStore`].
///
/// Every operation validates fully before it mutates, so a failed call leaves
/// the store exactly as it was.
pub struct OrderHandlers {
    store: OrderStore,
    next_id: IdGenerator,
}

impl OrderHandlers {
    pub fn new(store: OrderStore, next_id: impl FnMut() -> String + Send + 'static) -> Self {
        Self {
            store,
            next_id: Box::new(next_id),
        }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn list(&self) -> Vec<Order> {
        self.store.list().to_vec()
    }

    pub fn create(&mut self, payload: &OrderPayload) -> Result<Order, OrderError> {
        let fields = validate_create(payload)?;

        let order = Order {
            id: (self.next_id)(),
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            dishes: fields.dishes,
            status: fields.status,
        };
        self.store.append(order.clone());
        Ok(order)
    }

    pub fn read(&self, order_id: &str) -> Result<Order, OrderError> {
        self.resolve(order_id).cloned()
    }

    pub fn update(&mut self, order_id: &str, payload: &OrderPayload) -> Result<Order, OrderError> {
        let order = self
            .store
            .find_by_id_mut(order_id)
            .ok_or_else(|| OrderError::not_found(order_id))?;
        ensure_route_id(order_id, payload)?;

        validate_update(payload, order)?.apply_to(order);
        Ok(order.clone())
    }

    pub fn delete(&mut self, order_id: &str) -> Result<(), OrderError> {
        status_valid_for_delete(self.resolve(order_id)?)?;
        self.store.remove_by_id(order_id);
        Ok(())
    }

    fn resolve(&self, order_id: &str) -> Result<&Order, OrderError> {
        self.store
            .find_by_id(order_id)
            .ok_or_else(|| OrderError::not_found(order_id))
    }
}

/// A body that carries an id of its own has to agree with the route.
fn ensure_route_id(order_id: &str, payload: &OrderPayload) -> Result<(), OrderError> {
    match payload.id() {
        Some(payload_id) if payload_id != order_id => Err(OrderError::validation(format!(
            "Order id does not match route id. Order: {payload_id}, Route: {order_id}."
        ))),
        _ => Ok(()),
    }
}
