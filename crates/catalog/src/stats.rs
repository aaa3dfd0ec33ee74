use serde::Serialize;

use gadgetshop_core::Money;
use gadgetshop_products::{Product, ProductKind};

/// Per-kind counts and the sum of current prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub computers: usize,
    pub phones: usize,
    pub tablets: usize,
    pub total_value: Money,
}

impl CatalogStats {
    pub fn total_products(&self) -> usize {
        self.computers + self.phones + self.tablets
    }
}

/// Result of a statistics query; an empty catalog is informational, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stats {
    Empty,
    Summary(CatalogStats),
}

impl Stats {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let mut stats = CatalogStats::default();
        let mut seen = false;
        for product in products {
            seen = true;
            match product.kind() {
                ProductKind::Computer => stats.computers += 1,
                ProductKind::Phone => stats.phones += 1,
                ProductKind::Tablet => stats.tablets += 1,
            }
            stats.total_value = stats.total_value + product.price();
        }

        if seen { Stats::Summary(stats) } else { Stats::Empty }
    }

    pub fn summary(&self) -> Option<&CatalogStats> {
        match self {
            Stats::Empty => None,
            Stats::Summary(s) => Some(s),
        }
    }
}

impl core::fmt::Display for Stats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Stats::Empty => f.write_str("No products to report: the catalog is empty."),
            Stats::Summary(s) => {
                writeln!(f, "Computers: {}", s.computers)?;
                writeln!(f, "Phones:    {}", s.phones)?;
                writeln!(f, "Tablets:   {}", s.tablets)?;
                write!(f, "Total value: ${}", s.total_value)
            }
        }
    }
}
