//! Application services
pub mod console;
pub mod notification;
pub mod processor;

pub use console::Console;
pub use notification::NotificationService;
pub use processor::{OrderProcessor, PROCESSED_STATUS};
