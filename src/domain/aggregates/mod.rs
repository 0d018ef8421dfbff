//! Aggregates module
pub mod product;
pub mod order;

pub use product::{Book, CatalogItem, Clothing, Electronics, Product, ProductBase, ProductError};
pub use order::{Order, OrderError, OrderSummary};
