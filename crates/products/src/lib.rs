//! Products domain module.
//!
//! This crate holds the product hierarchy and every way of producing a product:
//! the stepwise builder, persona and line factories, clone-with-variation, and
//! the decorators that price add-ons. All of it is deterministic domain logic
//! except for the injected [`Randomness`] used by cloning.

pub mod builder;
pub mod decorator;
pub mod factory;
pub mod line;
pub mod line_factory;
pub mod product;
pub mod variation;

pub use builder::{BuildProduct, ProductBuilder};
pub use decorator::{Accessories, DecoratorKind, Discount, Offering, PremiumSupport, Warranty};
pub use factory::{GamingFactory, OfficeFactory, Persona, ProductFactory, StudentFactory};
pub use line::Line;
pub use line_factory::{EconomicLineFactory, LineFactory, PremiumLineFactory, StandardLineFactory};
pub use product::{Computer, ElectronicProduct, Phone, Product, ProductBase, ProductKind, Tablet};
pub use variation::Randomness;
