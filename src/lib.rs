//! OpenSASE Order Flow
//!
//! Minimal retail order pipeline.
//!
//! ## Features
//! - Product variants (books, electronics, clothing) with validated price and name
//! - Percentage discounts
//! - Orders with on-demand totals
//! - Synchronous status-change notifications
//! - Console order processing

pub mod config;
pub mod domain;
pub mod sample;
pub mod services;
pub mod telemetry;

use thiserror::Error;

pub use config::{Config, ConfigError};
pub use domain::aggregates::{Book, CatalogItem, Clothing, Electronics, Order, OrderError, OrderSummary, Product, ProductBase, ProductError};
pub use domain::events::SubscriptionId;
pub use domain::value_objects::Money;
pub use services::{Console, NotificationService, OrderProcessor, PROCESSED_STATUS};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum OrderFlowError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrderFlowError>;
