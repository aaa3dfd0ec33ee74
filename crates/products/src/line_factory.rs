//! Line-keyed product families (abstract factory).

use gadgetshop_core::Money;

use crate::line::Line;
use crate::product::{Computer, Phone, Product, ProductKind, Tablet};

/// A family of products that all belong to one line.
pub trait LineFactory {
    /// The line every product of this family belongs to.
    fn line(&self) -> Line;

    fn create_computer(&self) -> Computer;

    fn create_phone(&self) -> Phone;

    fn create_tablet(&self) -> Tablet;

    fn create(&self, kind: ProductKind) -> Product {
        match kind {
            ProductKind::Computer => self.create_computer().into(),
            ProductKind::Phone => self.create_phone().into(),
            ProductKind::Tablet => self.create_tablet().into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PremiumLineFactory;

impl LineFactory for PremiumLineFactory {
    fn line(&self) -> Line {
        Line::Premium
    }

    fn create_computer(&self) -> Computer {
        Computer::new("Quantum Pro", Money::units(2500), self.line(), Some("Intel i9".into()))
    }

    fn create_phone(&self) -> Phone {
        Phone::new("Galaxy Ultra", Money::units(1200), self.line(), Some("512GB".into()))
    }

    fn create_tablet(&self) -> Tablet {
        Tablet::new("iPad Pro Max", Money::units(1500), self.line(), Some("12.9'".into()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardLineFactory;

impl LineFactory for StandardLineFactory {
    fn line(&self) -> Line {
        Line::Standard
    }

    fn create_computer(&self) -> Computer {
        Computer::new("Workstation Plus", Money::units(1200), self.line(), Some("Intel i5".into()))
    }

    fn create_phone(&self) -> Phone {
        Phone::new("Nova Prime", Money::units(600), self.line(), Some("256GB".into()))
    }

    fn create_tablet(&self) -> Tablet {
        Tablet::new("Tab Advanced", Money::units(400), self.line(), Some("11'".into()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EconomicLineFactory;

impl LineFactory for EconomicLineFactory {
    fn line(&self) -> Line {
        Line::Economic
    }

    fn create_computer(&self) -> Computer {
        Computer::new("Essential Basic", Money::units(500), self.line(), Some("Intel i3".into()))
    }

    fn create_phone(&self) -> Phone {
        Phone::new("Spark Lite", Money::units(200), self.line(), Some("128GB".into()))
    }

    fn create_tablet(&self) -> Tablet {
        Tablet::new("Simple Pad", Money::units(150), self.line(), Some("10.2'".into()))
    }
}

impl Line {
    /// The product family for a known line; `None` for unknown lines.
    pub fn factory(&self) -> Option<&'static dyn LineFactory> {
        match self {
            Line::Premium => Some(&PremiumLineFactory),
            Line::Standard => Some(&StandardLineFactory),
            Line::Economic => Some(&EconomicLineFactory),
            Line::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_of_a_family_shares_its_line() {
        for line in Line::KNOWN {
            let factory = line.factory().unwrap();
            assert_eq!(factory.line(), line);
            for kind in ProductKind::ALL {
                let product = factory.create(kind);
                assert_eq!(product.kind(), kind);
                assert_eq!(product.line(), &line);
            }
        }
    }

    #[test]
    fn premium_presets() {
        let f = PremiumLineFactory;
        assert_eq!(f.create_computer().base.name, "Quantum Pro");
        assert_eq!(f.create_phone().base.price, Money::units(1200));
        assert_eq!(f.create_tablet().screen, "12.9'");
        assert_eq!(f.create_tablet().battery, "12 hours");
    }

    #[test]
    fn economic_presets_are_cheapest() {
        let economic = EconomicLineFactory;
        let premium = PremiumLineFactory;
        for kind in ProductKind::ALL {
            assert!(economic.create(kind).price() < premium.create(kind).price());
        }
    }

    #[test]
    fn unknown_line_has_no_family() {
        assert!(Line::parse("Deluxe").factory().is_none());
    }
}
