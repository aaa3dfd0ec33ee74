//! Persona-based product factories (factory method).

use core::str::FromStr;

use gadgetshop_core::{DomainError, Money};

use crate::line::Line;
use crate::product::{Computer, Phone, Product, ProductKind, Tablet};

/// A family of preset products tailored to one kind of customer.
pub trait ProductFactory {
    fn create_computer(&self) -> Computer;

    fn create_phone(&self) -> Phone;

    fn create_tablet(&self) -> Tablet;

    /// Create the preset for `kind` without branching on the concrete factory.
    fn create(&self, kind: ProductKind) -> Product {
        match kind {
            ProductKind::Computer => self.create_computer().into(),
            ProductKind::Phone => self.create_phone().into(),
            ProductKind::Tablet => self.create_tablet().into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamingFactory;

impl ProductFactory for GamingFactory {
    fn create_computer(&self) -> Computer {
        Computer::new("Gaming Beast", Money::units(2000), Line::Premium, Some("Ryzen 9".into()))
    }

    fn create_phone(&self) -> Phone {
        Phone::new("Gaming Phone X", Money::units(800), Line::Premium, Some("256GB".into()))
    }

    fn create_tablet(&self) -> Tablet {
        Tablet::new("Gaming Tab Pro", Money::units(600), Line::Standard, Some("11'".into()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OfficeFactory;

impl ProductFactory for OfficeFactory {
    fn create_computer(&self) -> Computer {
        Computer::new("Office Master", Money::units(800), Line::Standard, Some("i5".into()))
    }

    fn create_phone(&self) -> Phone {
        Phone::new("Business Phone", Money::units(400), Line::Standard, Some("128GB".into()))
    }

    fn create_tablet(&self) -> Tablet {
        Tablet::new("Office Tablet", Money::units(300), Line::Economic, Some("10.2'".into()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentFactory;

impl ProductFactory for StudentFactory {
    fn create_computer(&self) -> Computer {
        Computer::new("Student Laptop", Money::units(600), Line::Economic, Some("i3".into()))
    }

    fn create_phone(&self) -> Phone {
        Phone::new("Campus Phone", Money::units(250), Line::Economic, Some("64GB".into()))
    }

    fn create_tablet(&self) -> Tablet {
        Tablet::new("Study Pad", Money::units(200), Line::Economic, Some("10.1'".into()))
    }
}

/// Use-case persona selecting a [`ProductFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    Gaming,
    Office,
    Student,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Gaming, Persona::Office, Persona::Student];

    pub fn factory(self) -> &'static dyn ProductFactory {
        match self {
            Persona::Gaming => &GamingFactory,
            Persona::Office => &OfficeFactory,
            Persona::Student => &StudentFactory,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Persona::Gaming => "gaming",
            Persona::Office => "office",
            Persona::Student => "student",
        }
    }
}

impl FromStr for Persona {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gaming" => Ok(Persona::Gaming),
            "office" => Ok(Persona::Office),
            "student" => Ok(Persona::Student),
            other => Err(DomainError::unknown_selector("persona", other)),
        }
    }
}

impl core::fmt::Display for Persona {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaming_presets() {
        let f = GamingFactory;
        let c = f.create_computer();
        assert_eq!((c.base.name.as_str(), c.base.price), ("Gaming Beast", Money::units(2000)));
        assert_eq!(c.processor, "Ryzen 9");
        assert_eq!(c.ram, "32GB");

        let p = f.create_phone();
        assert_eq!(p.base.line, Line::Premium);
        assert_eq!(p.storage, "256GB");

        let t = f.create_tablet();
        assert_eq!(t.base.line, Line::Standard);
        assert_eq!(t.screen, "11'");
        assert_eq!(t.battery, "10 hours");
    }

    #[test]
    fn office_and_student_presets() {
        assert_eq!(OfficeFactory.create_computer().base.price, Money::units(800));
        assert_eq!(OfficeFactory.create_tablet().base.line, Line::Economic);
        assert_eq!(StudentFactory.create_phone().storage, "64GB");
        assert_eq!(StudentFactory.create_tablet().base.name, "Study Pad");
    }

    #[test]
    fn every_persona_produces_every_kind() {
        for persona in Persona::ALL {
            let factory = persona.factory();
            for kind in ProductKind::ALL {
                assert_eq!(factory.create(kind).kind(), kind);
            }
        }
    }

    #[test]
    fn persona_parses_from_lowercase_name() {
        for persona in Persona::ALL {
            assert_eq!(persona.to_string().parse::<Persona>().unwrap(), persona);
        }
        assert!("Gaming".parse::<Persona>().is_err());
    }
}
