//! Product Aggregate

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Name and price shared by every product variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductBase {
    name: String,
    price: Decimal,
}

impl ProductBase {
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, ProductError> {
        let name = validate_name(name.into())?;
        let price = validate_price(price)?;
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn price(&self) -> Decimal { self.price }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    pub fn set_price(&mut self, price: Decimal) -> Result<(), ProductError> {
        self.price = validate_price(price)?;
        Ok(())
    }

    /// `price * percentage / 100` for a percentage within `[0, 100]`.
    pub fn calculate_discount(&self, percentage: Decimal) -> Result<Decimal, ProductError> {
        if percentage < Decimal::ZERO || percentage > ONE_HUNDRED {
            tracing::debug!(product = %self.name, %percentage, "rejected discount percentage");
            return Err(ProductError::DiscountOutOfRange(percentage));
        }
        Ok(self.price * (percentage / ONE_HUNDRED))
    }
}

fn validate_name(name: String) -> Result<String, ProductError> {
    if name.trim().is_empty() {
        tracing::debug!("rejected empty product name");
        return Err(ProductError::EmptyName);
    }
    Ok(name)
}

fn validate_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price < Decimal::ZERO {
        tracing::debug!(%price, "rejected negative price");
        return Err(ProductError::NegativePrice(price));
    }
    Ok(price)
}

/// Capabilities every sellable item offers.
pub trait Product {
    fn base(&self) -> &ProductBase;
    fn base_mut(&mut self) -> &mut ProductBase;

    /// Price the order charges for this item.
    fn calculate_total_price(&self) -> Decimal;

    fn name(&self) -> &str { self.base().name() }
    fn price(&self) -> Decimal { self.base().price() }
    fn calculate_discount(&self, percentage: Decimal) -> Result<Decimal, ProductError> {
        self.base().calculate_discount(percentage)
    }
    fn rename(&mut self, name: impl Into<String>) -> Result<(), ProductError> where Self: Sized {
        self.base_mut().rename(name)
    }
    fn set_price(&mut self, price: Decimal) -> Result<(), ProductError> {
        self.base_mut().set_price(price)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Book {
    #[serde(flatten)]
    base: ProductBase,
    number_of_pages: u32,
}

impl Book {
    pub fn new(name: impl Into<String>, price: Decimal, number_of_pages: u32) -> Result<Self, ProductError> {
        Ok(Self { base: ProductBase::new(name, price)?, number_of_pages })
    }
    pub fn number_of_pages(&self) -> u32 { self.number_of_pages }
    pub fn set_number_of_pages(&mut self, pages: u32) { self.number_of_pages = pages; }
}

impl Product for Book {
    fn base(&self) -> &ProductBase { &self.base }
    fn base_mut(&mut self) -> &mut ProductBase { &mut self.base }
    fn calculate_total_price(&self) -> Decimal { self.base.price() }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Electronics {
    #[serde(flatten)]
    base: ProductBase,
    memory_size_gb: u32,
}

impl Electronics {
    pub fn new(name: impl Into<String>, price: Decimal, memory_size_gb: u32) -> Result<Self, ProductError> {
        Ok(Self { base: ProductBase::new(name, price)?, memory_size_gb })
    }
    pub fn memory_size_gb(&self) -> u32 { self.memory_size_gb }
    pub fn set_memory_size_gb(&mut self, gb: u32) { self.memory_size_gb = gb; }
}

impl Product for Electronics {
    fn base(&self) -> &ProductBase { &self.base }
    fn base_mut(&mut self) -> &mut ProductBase { &mut self.base }
    fn calculate_total_price(&self) -> Decimal { self.base.price() }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Clothing {
    #[serde(flatten)]
    base: ProductBase,
    size: String,
}

impl Clothing {
    pub fn new(name: impl Into<String>, price: Decimal, size: impl Into<String>) -> Result<Self, ProductError> {
        Ok(Self { base: ProductBase::new(name, price)?, size: size.into() })
    }
    pub fn size(&self) -> &str { &self.size }
    pub fn set_size(&mut self, size: impl Into<String>) { self.size = size.into(); }
}

impl Product for Clothing {
    fn base(&self) -> &ProductBase { &self.base }
    fn base_mut(&mut self) -> &mut ProductBase { &mut self.base }
    fn calculate_total_price(&self) -> Decimal { self.base.price() }
}

/// The closed set of product variants an order can hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogItem {
    Book(Book),
    Electronics(Electronics),
    Clothing(Clothing),
}

impl CatalogItem {
    pub fn kind(&self) -> &'static str {
        match self { Self::Book(_) => "book", Self::Electronics(_) => "electronics", Self::Clothing(_) => "clothing" }
    }
}

impl Product for CatalogItem {
    fn base(&self) -> &ProductBase {
        match self { Self::Book(p) => p.base(), Self::Electronics(p) => p.base(), Self::Clothing(p) => p.base() }
    }
    fn base_mut(&mut self) -> &mut ProductBase {
        match self { Self::Book(p) => p.base_mut(), Self::Electronics(p) => p.base_mut(), Self::Clothing(p) => p.base_mut() }
    }
    fn calculate_total_price(&self) -> Decimal {
        match self {
            Self::Book(p) => p.calculate_total_price(),
            Self::Electronics(p) => p.calculate_total_price(),
            Self::Clothing(p) => p.calculate_total_price(),
        }
    }
}

impl From<Book> for CatalogItem { fn from(p: Book) -> Self { Self::Book(p) } }
impl From<Electronics> for CatalogItem { fn from(p: Electronics) -> Self { Self::Electronics(p) } }
impl From<Clothing> for CatalogItem { fn from(p: Clothing) -> Self { Self::Clothing(p) } }

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Price cannot be negative: {0}")]
    NegativePrice(Decimal),

    #[error("Discount must be between 0 and 100, got {0}")]
    DiscountOutOfRange(Decimal),
}
