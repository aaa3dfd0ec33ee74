//! Stepwise product construction.

use std::collections::BTreeMap;

use gadgetshop_core::{DomainError, DomainResult, Money};

use crate::line::Line;
use crate::product::{Computer, Phone, Product, ProductKind, Tablet};

/// Anything that can turn accumulated configuration into a product.
pub trait BuildProduct {
    fn build(&self) -> DomainResult<Product>;
}

pub const DEFAULT_NAME: &str = "Custom Product";

/// Mutable, reusable product configuration.
///
/// Setters chain on `&mut Self`; `build` leaves the configuration intact so
/// the same builder can produce several products, and `reset` starts over.
///
/// ```ignore
/// let mut builder = ProductBuilder::new();
/// let product = builder
///     .set_type(ProductKind::Computer)
///     .set_name("TestBox")
///     .set_price(Money::from_cents(99_999))
///     .set_line(Line::Premium)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductBuilder {
    kind: Option<ProductKind>,
    name: String,
    price: Money,
    line: Line,
    specs: BTreeMap<String, String>,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self {
            kind: None,
            name: DEFAULT_NAME.to_string(),
            price: Money::ZERO,
            line: Line::Standard,
            specs: BTreeMap::new(),
        }
    }
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn set_type(&mut self, kind: ProductKind) -> &mut Self {
        self.kind = Some(kind);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_price(&mut self, price: Money) -> &mut Self {
        self.price = price;
        self
    }

    pub fn set_line(&mut self, line: impl Into<Line>) -> &mut Self {
        self.line = line.into();
        self
    }

    /// Record a named spec override. Only the kind's primary spec
    /// (`processor`, `storage` or `screen`) is consulted by `build`.
    pub fn add_spec(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.specs.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> Option<ProductKind> {
        self.kind
    }

    pub fn specs(&self) -> &BTreeMap<String, String> {
        &self.specs
    }

    fn spec(&self, key: &str) -> Option<String> {
        self.specs.get(key).cloned()
    }
}

impl BuildProduct for ProductBuilder {
    fn build(&self) -> DomainResult<Product> {
        let Some(kind) = self.kind else {
            tracing::warn!("build requested without a product type");
            return Err(DomainError::missing_selector("product type"));
        };

        for key in self.specs.keys().filter(|k| k.as_str() != kind.primary_spec()) {
            tracing::debug!(%kind, spec = %key, "spec override ignored for this product type");
        }

        let name = self.name.clone();
        let line = self.line.clone();
        let primary = self.spec(kind.primary_spec());
        let product: Product = match kind {
            ProductKind::Computer => Computer::new(name, self.price, line, primary).into(),
            ProductKind::Phone => Phone::new(name, self.price, line, primary).into(),
            ProductKind::Tablet => Tablet::new(name, self.price, line, primary).into(),
        };

        tracing::info!(%kind, id = %product.id(), name = %product.name(), "product built");
        Ok(product)
    }
}
