//! Add-on decorators.
//!
//! A decorator borrows an [`Offering`] (a product, or another decorator) and
//! reports an augmented description and total price. Nothing is ever written
//! back to the wrapped product.

use core::str::FromStr;

use gadgetshop_core::{DomainError, Money};

use crate::product::Product;

/// Something that can be described and priced for a customer.
pub trait Offering {
    fn get_description(&self) -> String;

    fn get_total_price(&self) -> Money;
}

impl Offering for Product {
    fn get_description(&self) -> String {
        self.name().to_string()
    }

    fn get_total_price(&self) -> Money {
        self.price()
    }
}

pub const WARRANTY_FEE: Money = Money::units(100);
pub const ACCESSORIES_FEE: Money = Money::units(50);
pub const PREMIUM_SUPPORT_FEE: Money = Money::units(150);
pub const DISCOUNT_FACTOR: f64 = 0.85;

macro_rules! flat_fee_decorator {
    ($(#[$meta:meta])* $name:ident, $annotation:literal, $fee:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $name<'a> {
            inner: &'a dyn Offering,
        }

        impl<'a> $name<'a> {
            pub fn new(inner: &'a dyn Offering) -> Self {
                Self { inner }
            }
        }

        impl Offering for $name<'_> {
            fn get_description(&self) -> String {
                format!("{}{}", self.inner.get_description(), $annotation)
            }

            fn get_total_price(&self) -> Money {
                self.inner.get_total_price() + $fee
            }
        }
    };
}

flat_fee_decorator!(
    /// Extended warranty, flat fee.
    Warranty,
    " + Extended Warranty (2 years)",
    WARRANTY_FEE
);

flat_fee_decorator!(
    /// Accessories bundle, flat fee.
    Accessories,
    " + Accessories Pack",
    ACCESSORIES_FEE
);

flat_fee_decorator!(
    /// Premium support plan, flat fee.
    PremiumSupport,
    " + Premium Support 24/7",
    PREMIUM_SUPPORT_FEE
);

/// 15% off the wrapped price.
#[derive(Clone, Copy)]
pub struct Discount<'a> {
    inner: &'a dyn Offering,
}

impl<'a> Discount<'a> {
    pub fn new(inner: &'a dyn Offering) -> Self {
        Self { inner }
    }
}

impl Offering for Discount<'_> {
    fn get_description(&self) -> String {
        format!("{} (15% off)", self.inner.get_description())
    }

    fn get_total_price(&self) -> Money {
        self.inner.get_total_price().scale(DISCOUNT_FACTOR)
    }
}

/// Decorator selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoratorKind {
    Warranty,
    Accessories,
    Discount,
    PremiumSupport,
}

impl DecoratorKind {
    pub const ALL: [DecoratorKind; 4] = [
        DecoratorKind::Warranty,
        DecoratorKind::Accessories,
        DecoratorKind::Discount,
        DecoratorKind::PremiumSupport,
    ];

    pub fn wrap<'a>(self, inner: &'a dyn Offering) -> Box<dyn Offering + 'a> {
        match self {
            DecoratorKind::Warranty => Box::new(Warranty::new(inner)),
            DecoratorKind::Accessories => Box::new(Accessories::new(inner)),
            DecoratorKind::Discount => Box::new(Discount::new(inner)),
            DecoratorKind::PremiumSupport => Box::new(PremiumSupport::new(inner)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DecoratorKind::Warranty => "warranty",
            DecoratorKind::Accessories => "accessories",
            DecoratorKind::Discount => "discount",
            DecoratorKind::PremiumSupport => "premium-support",
        }
    }
}

impl FromStr for DecoratorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warranty" => Ok(DecoratorKind::Warranty),
            "accessories" => Ok(DecoratorKind::Accessories),
            "discount" => Ok(DecoratorKind::Discount),
            "premium-support" => Ok(DecoratorKind::PremiumSupport),
            other => Err(DomainError::unknown_selector("decorator", other)),
        }
    }
}

impl core::fmt::Display for DecoratorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
