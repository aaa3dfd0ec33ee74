//! End-to-end catalog session: every creation strategy feeds one catalog.

use gadgetshop_catalog::{Catalog, Stats};
use gadgetshop_core::{DomainError, Money};
use gadgetshop_products::{
    BuildProduct, DecoratorKind, Line, Persona, Product, ProductBuilder, ProductKind,
};

#[test]
fn full_session_flow() {
    let mut catalog = Catalog::seeded(2024);
    assert_eq!(catalog.stats(), Stats::Empty);

    // Builder
    let mut builder = ProductBuilder::new();
    let built = builder
        .set_type(ProductKind::Computer)
        .set_name("TestBox")
        .set_price(Money::from_major(999.99).unwrap())
        .set_line(Line::Premium)
        .build()
        .unwrap();
    catalog.add(built);

    // Factory method
    catalog.add(Persona::Office.factory().create(ProductKind::Phone));

    // Abstract factory
    let family = Line::Economic.factory().unwrap();
    catalog.add(family.create(ProductKind::Tablet));

    let stats = catalog.stats();
    let summary = stats.summary().unwrap();
    assert_eq!((summary.computers, summary.phones, summary.tablets), (1, 1, 1));
    assert_eq!(
        summary.total_value,
        Money::from_cents(99_999) + Money::units(400) + Money::units(150)
    );

    // Prototype
    let before = catalog.get(0).unwrap().clone();
    let clone = catalog.clone_at(0).unwrap().clone();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.get(0).unwrap(), &before);
    let low = Money::from_cents(99_999).scale(0.7);
    let high = Money::from_cents(99_999).scale(1.3);
    assert!(clone.price() >= low && clone.price() <= high);

    // Decorator
    let decoration = catalog.decorate_at(1, DecoratorKind::Discount).unwrap();
    assert_eq!(decoration.total_price, Money::units(340));
    assert_eq!(catalog.get(1).unwrap().price(), Money::units(400));

    assert!(matches!(
        catalog.decorate_at(10, DecoratorKind::Warranty),
        Err(DomainError::IndexOutOfRange { index: 10, len: 4 })
    ));

    let listing = catalog.show();
    assert_eq!(listing.lines().filter(|l| l.starts_with('[')).count(), 4);
    assert!(listing.contains("TestBox"));
}

#[test]
fn builder_scenario_matches_premium_defaults() {
    let product = ProductBuilder::new()
        .set_type(ProductKind::Computer)
        .set_name("TestBox")
        .set_price(Money::from_major(999.99).unwrap())
        .set_line("Premium")
        .build()
        .unwrap();

    let Product::Computer(computer) = product else {
        panic!("builder produced the wrong kind");
    };
    assert_eq!(computer.processor, "Intel i9");
    assert_eq!(computer.ram, "32GB");
    assert_eq!(computer.base.price.to_string(), "999.99");
}
