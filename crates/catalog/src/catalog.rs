use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use gadgetshop_core::{DomainError, DomainResult, Money, ProductId};
use gadgetshop_products::{DecoratorKind, Product};

use crate::stats::{CatalogStats, Stats};

pub const EMPTY_CATALOG_MESSAGE: &str = "The catalog is empty.";

/// One row of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub index: usize,
    pub summary: String,
    pub specifications: String,
}

/// Outcome of decorating a catalog product; the product itself is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub product_id: ProductId,
    pub kind: DecoratorKind,
    pub description: String,
    pub base_price: Money,
    pub total_price: Money,
}

/// Serializable view of the whole catalog.
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub products: &'a [Product],
    pub stats: Option<CatalogStats>,
}

/// Ordered, append-only product catalog for one session.
///
/// The catalog owns its products and the random source used when cloning;
/// pass a seeded generator via [`Catalog::with_rng`] for reproducible sessions.
#[derive(Debug)]
pub struct Catalog<R = StdRng> {
    products: Vec<Product>,
    rng: R,
}

impl Catalog<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Catalog<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Catalog<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            products: Vec::new(),
            rng,
        }
    }

    /// Append a product; returns its position.
    pub fn add(&mut self, product: impl Into<Product>) -> usize {
        let product = product.into();
        let index = self.products.len();
        tracing::info!(
            index,
            id = %product.id(),
            kind = %product.kind(),
            name = %product.name(),
            "product added to catalog"
        );
        self.products.push(product);
        index
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> DomainResult<&Product> {
        self.products
            .get(index)
            .ok_or_else(|| DomainError::index_out_of_range(index, self.products.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn entries(&self) -> Vec<ListingEntry> {
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| ListingEntry {
                index,
                summary: product.to_string(),
                specifications: product.get_specifications(),
            })
            .collect()
    }

    /// Render the listing, or [`EMPTY_CATALOG_MESSAGE`] when there is nothing to show.
    pub fn show(&self) -> String {
        if self.products.is_empty() {
            return EMPTY_CATALOG_MESSAGE.to_string();
        }

        self.entries()
            .iter()
            .map(|e| format!("[{}] {}\n    {}", e.index, e.summary, e.specifications))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Clone the product at `index` with random variation and append the clone.
    pub fn clone_at(&mut self, index: usize) -> DomainResult<&Product> {
        let len = self.products.len();
        let Some(source) = self.products.get(index) else {
            tracing::warn!(index, len, "clone requested for missing product");
            return Err(DomainError::index_out_of_range(index, len));
        };

        let clone = source.clone_with_variation(&mut self.rng);
        tracing::info!(
            source_index = index,
            source_id = %source.id(),
            clone_id = %clone.id(),
            "product cloned"
        );
        self.products.push(clone);
        Ok(&self.products[len])
    }

    /// Price the product at `index` with one decorator, without touching the catalog.
    pub fn decorate_at(&self, index: usize, kind: DecoratorKind) -> DomainResult<Decoration> {
        let product = self.get(index).inspect_err(|_| {
            tracing::warn!(index, len = self.products.len(), "decorate requested for missing product");
        })?;

        let decorated = kind.wrap(product);
        let decoration = Decoration {
            product_id: product.id(),
            kind,
            description: decorated.get_description(),
            base_price: product.price(),
            total_price: decorated.get_total_price(),
        };
        tracing::info!(
            index,
            %kind,
            total = %decoration.total_price,
            "product decorated"
        );
        Ok(decoration)
    }

    /// Like [`Catalog::decorate_at`], with the decorator named by a selector string.
    ///
    /// The index is validated before the selector.
    pub fn decorate_named(&self, index: usize, selector: &str) -> DomainResult<Decoration> {
        self.get(index)?;
        let kind = selector.parse::<DecoratorKind>()?;
        self.decorate_at(index, kind)
    }

    pub fn stats(&self) -> Stats {
        Stats::from_products(&self.products)
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            products: &self.products,
            stats: self.stats().summary().copied(),
        }
    }
}
