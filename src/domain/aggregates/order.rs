//! Order Aggregate

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use crate::domain::aggregates::product::{CatalogItem, Product};
use crate::domain::events::{StatusListeners, SubscriptionId};

/// An order owns its products in insertion order. Totals are recomputed on
/// every call and status changes are only broadcast, never stored.
#[derive(Debug)]
pub struct Order {
    order_number: u64,
    products: Vec<CatalogItem>,
    status_listeners: StatusListeners,
}

/// Serializable point-in-time view of an order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_number: u64,
    pub products: Vec<CatalogItem>,
    pub total_price: Decimal,
}

impl Order {
    pub fn new(order_number: u64) -> Self {
        Self { order_number, products: vec![], status_listeners: StatusListeners::new() }
    }

    pub fn order_number(&self) -> u64 { self.order_number }
    pub fn products(&self) -> &[CatalogItem] { &self.products }
    pub fn subscriber_count(&self) -> usize { self.status_listeners.len() }

    /// Appends a product. Duplicates are allowed.
    pub fn add_product(&mut self, product: impl Into<CatalogItem>) {
        let product = product.into();
        tracing::debug!(order = self.order_number, kind = product.kind(), name = product.name(), "product added");
        self.products.push(product);
    }

    /// Sum of every product's total; zero for an empty order.
    pub fn calculate_total_price(&self) -> Result<Decimal, OrderError> {
        self.products.iter().try_fold(Decimal::ZERO, |acc, p| {
            acc.checked_add(p.calculate_total_price()).ok_or(OrderError::TotalOverflow(self.order_number))
        })
    }

    pub fn total_price(&self) -> Result<Decimal, OrderError> { self.calculate_total_price() }

    pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) -> SubscriptionId {
        let id = self.status_listeners.subscribe(listener);
        tracing::debug!(order = self.order_number, subscription = %id, "status subscriber added");
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.status_listeners.unsubscribe(id);
        tracing::debug!(order = self.order_number, subscription = %id, removed, "status subscriber removed");
        removed
    }

    /// Passes `status` verbatim to every subscriber, in subscription order.
    pub fn change_status(&mut self, status: &str) {
        tracing::info!(order = self.order_number, status, subscribers = self.status_listeners.len(), "order status changed");
        self.status_listeners.broadcast(status);
    }

    pub fn summary(&self) -> Result<OrderSummary, OrderError> {
        Ok(OrderSummary {
            order_number: self.order_number,
            products: self.products.clone(),
            total_price: self.calculate_total_price()?,
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Total price of order #{0} exceeds the representable range")]
    TotalOverflow(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::product::{Book, Clothing, Electronics};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_order() -> Order {
        let mut order = Order::new(1);
        order.add_product(Book::new("1984", Decimal::new(1599, 2), 328).unwrap());
        order.add_product(Electronics::new("iPhone", Decimal::new(99999, 2), 128).unwrap());
        order.add_product(Clothing::new("Shirt", Decimal::new(1999, 2), "M").unwrap());
        order
    }

    #[test]
    fn test_empty_order_total() {
        let order = Order::new(7);
        assert_eq!(order.calculate_total_price(), Ok(Decimal::ZERO));
        assert!(order.products().is_empty());
    }

    #[test]
    fn test_order_total() {
        let order = sample_order();
        assert_eq!(order.calculate_total_price(), Ok(Decimal::new(103597, 2)));
        assert_eq!(order.total_price(), Ok(Decimal::new(103597, 2)));
        let names: Vec<&str> = order.products().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["1984", "iPhone", "Shirt"]);
    }

    #[test]
    fn test_duplicates_allowed_and_total_not_cached() {
        let mut order = Order::new(2);
        let book = Book::new("Dune", Decimal::new(10, 0), 412).unwrap();
        order.add_product(book.clone());
        assert_eq!(order.total_price(), Ok(Decimal::new(10, 0)));
        order.add_product(book);
        assert_eq!(order.products().len(), 2);
        assert_eq!(order.total_price(), Ok(Decimal::new(20, 0)));
    }

    #[test]
    fn test_change_status_notifies_once() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let mut order = sample_order();
        let sink = Rc::clone(&received);
        order.subscribe(move |status| sink.borrow_mut().push(status.to_string()));
        order.change_status("X");
        assert_eq!(*received.borrow(), vec!["X".to_string()]);
    }

    #[test]
    fn test_change_status_passes_empty_text_through() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let mut order = Order::new(3);
        let sink = Rc::clone(&received);
        order.subscribe(move |status| sink.borrow_mut().push(status.to_string()));
        order.change_status("");
        assert_eq!(*received.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_change_status_without_subscribers() {
        let mut order = Order::new(4);
        order.change_status("Shipped");
        assert_eq!(order.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let hits = Rc::new(RefCell::new(0));
        let mut order = Order::new(5);
        let counter = Rc::clone(&hits);
        let id = order.subscribe(move |_| *counter.borrow_mut() += 1);
        order.change_status("Confirmed");
        assert!(order.unsubscribe(id));
        order.change_status("Shipped");
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let mut order = Order::new(8);
        order.add_product(Book::new("Priceless", Decimal::MAX, 1).unwrap());
        assert_eq!(order.total_price(), Ok(Decimal::MAX));
        order.add_product(Book::new("Also priceless", Decimal::MAX, 1).unwrap());
        assert_eq!(order.calculate_total_price(), Err(OrderError::TotalOverflow(8)));
        assert_eq!(order.summary(), Err(OrderError::TotalOverflow(8)));
    }

    #[test]
    fn test_summary() {
        let order = sample_order();
        let summary = order.summary().unwrap();
        assert_eq!(summary.order_number, 1);
        assert_eq!(summary.products.len(), 3);
        assert_eq!(summary.total_price, Decimal::new(103597, 2));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["products"][0]["kind"], "book");
    }
}
