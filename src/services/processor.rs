//! Order processor

use std::io::Write;
use crate::domain::aggregates::Order;
use crate::domain::value_objects::{CurrencyCode, Money};
use crate::services::console::Console;
use crate::Result;

/// Status text broadcast once an order has been processed.
pub const PROCESSED_STATUS: &str = "Order processed";

#[derive(Debug)]
pub struct OrderProcessor<W: Write> {
    console: Console<W>,
    currency: CurrencyCode,
}

impl<W: Write> OrderProcessor<W> {
    pub fn new(console: Console<W>, currency: CurrencyCode) -> Self { Self { console, currency } }

    /// Prints the order's total, then broadcasts [`PROCESSED_STATUS`].
    ///
    /// An order whose total overflows is rejected before anything is printed
    /// or broadcast.
    pub fn process_order(&self, order: &mut Order) -> Result<()> {
        let span = tracing::info_span!("order", number = order.order_number());
        let _guard = span.enter();

        let total = Money::new(order.total_price()?, self.currency.clone());
        tracing::info!(products = order.products().len(), %total, "processing order");
        self.console.line(format_args!("Processing order #{}...", order.order_number()))?;
        self.console.line(format_args!("Total price: {total}"))?;

        order.change_status(PROCESSED_STATUS);
        Ok(())
    }
}
