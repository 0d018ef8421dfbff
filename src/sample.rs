//! The hard-coded sample order run by the binary.

use std::io::Write;
use rust_decimal::Decimal;
use crate::config::Config;
use crate::domain::aggregates::{Book, Clothing, Electronics, Order, OrderSummary};
use crate::services::{Console, NotificationService, OrderProcessor};
use crate::Result;

pub const SAMPLE_ORDER_NUMBER: u64 = 1;

/// Builds the three-product sample order.
pub fn sample_order() -> Result<Order> {
    let mut order = Order::new(SAMPLE_ORDER_NUMBER);
    order.add_product(Book::new("1984", Decimal::new(1599, 2), 328)?);
    order.add_product(Electronics::new("iPhone", Decimal::new(99999, 2), 128)?);
    order.add_product(Clothing::new("T-shirt", Decimal::new(1999, 2), "M")?);
    Ok(order)
}

/// Subscribes a notifier, processes the sample order once and prints the
/// closing confirmation line.
pub fn run<W: Write + 'static>(config: &Config, console: Console<W>) -> Result<OrderSummary> {
    let mut order = sample_order()?;

    let processor = OrderProcessor::new(console.clone(), config.currency.clone());
    let notifications = NotificationService::new(console.clone());
    notifications.subscribe_to(&mut order);

    processor.process_order(&mut order)?;
    console.line(format_args!("Order #{} processed.", order.order_number()))?;
    Ok(order.summary()?)
}
