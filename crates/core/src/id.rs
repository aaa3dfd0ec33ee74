//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use core::sync::atomic::{AtomicU32, Ordering};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const FIRST_ID: u32 = 1000;
const ID_SPAN: u32 = 9000;

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Surrogate identifier of a catalog product.
///
/// Four-digit, display-only identifiers. They are handed out sequentially and
/// wrap after `9999`; a collision after wrap-around is harmless since nothing
/// looks products up by id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Allocate the next identifier.
    pub fn next() -> Self {
        let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(FIRST_ID + n % ID_SPAN)
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ProductId> for u32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| DomainError::validation(format!("ProductId: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_ids_are_distinct_and_four_digits() {
        let a = ProductId::next();
        let b = ProductId::next();
        assert_ne!(a, b);
        for id in [a, b] {
            assert!((1000..=9999).contains(&id.get()));
        }
    }

    #[test]
    fn parses_from_display_form() {
        let id = ProductId::from_raw(4242);
        assert_eq!(id.to_string().parse::<ProductId>().unwrap(), id);
        assert!("abc".parse::<ProductId>().is_err());
    }
}
