use crate::domain::Order;

/// Orders in insertion order.
///
/// Ids are expected to be unique; `append` trusts the caller on that.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the store from existing orders, e.g. seed data.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn append(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id == id)
    }

    /// Removes the order with `id`, if present.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Order> {
        let index = self.orders.iter().position(|order| order.id == id)?;
        Some(self.orders.remove(index))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
