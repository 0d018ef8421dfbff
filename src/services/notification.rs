//! Notification service: prints order status changes

use std::io::{self, Write};
use crate::domain::aggregates::Order;
use crate::domain::events::SubscriptionId;
use crate::services::console::Console;

#[derive(Debug)]
pub struct NotificationService<W: Write> {
    console: Console<W>,
}

impl<W: Write> Clone for NotificationService<W> {
    fn clone(&self) -> Self { Self { console: self.console.clone() } }
}

impl<W: Write + 'static> NotificationService<W> {
    pub fn new(console: Console<W>) -> Self { Self { console } }

    pub fn send_notification(&self, status: &str) -> io::Result<()> {
        self.console.line(format_args!("Notification: order status changed to: {status}"))
    }

    /// Registers this service as a status subscriber of `order`.
    pub fn subscribe_to(&self, order: &mut Order) -> SubscriptionId {
        let service = self.clone();
        order.subscribe(move |status| {
            if let Err(e) = service.send_notification(status) {
                tracing::warn!(error = %e, status, "failed to write notification");
            }
        })
    }
}
