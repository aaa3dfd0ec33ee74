use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gadgetshop_core::{DomainError, Money, ProductId};

use crate::line::Line;

/// Product category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Computer,
    Phone,
    Tablet,
}

impl ProductKind {
    pub const ALL: [ProductKind; 3] = [ProductKind::Computer, ProductKind::Phone, ProductKind::Tablet];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Computer => "computer",
            ProductKind::Phone => "phone",
            ProductKind::Tablet => "tablet",
        }
    }

    /// Name of the spec override the builder consults for this kind.
    pub fn primary_spec(self) -> &'static str {
        match self {
            ProductKind::Computer => "processor",
            ProductKind::Phone => "storage",
            ProductKind::Tablet => "screen",
        }
    }
}

impl FromStr for ProductKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "computer" => Ok(ProductKind::Computer),
            "phone" => Ok(ProductKind::Phone),
            "tablet" => Ok(ProductKind::Tablet),
            other => Err(DomainError::unknown_selector("product type", other)),
        }
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes shared by every product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBase {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub line: Line,
}

impl ProductBase {
    /// Shared attributes with a freshly allocated id.
    pub fn new(name: impl Into<String>, price: Money, line: Line) -> Self {
        Self {
            id: ProductId::next(),
            name: name.into(),
            price,
            line,
        }
    }
}

/// Line-keyed default tables. Unknown lines take the last (fallback) value.
pub mod defaults {
    use crate::line::Line;

    pub fn processor(line: &Line) -> &'static str {
        line.pick("Intel i9", "Intel i5", "Intel i3", "Intel i5")
    }

    pub fn ram(line: &Line) -> &'static str {
        line.pick("32GB", "16GB", "8GB", "16GB")
    }

    pub fn storage(line: &Line) -> &'static str {
        line.pick("512GB", "256GB", "128GB", "128GB")
    }

    pub fn camera(line: &Line) -> &'static str {
        line.pick("200MP", "108MP", "48MP", "48MP")
    }

    pub fn screen(line: &Line) -> &'static str {
        line.pick("12.9' Retina", "11' LCD", "10.2' LCD", "10.5' LCD")
    }

    pub fn battery(line: &Line) -> &'static str {
        line.pick("12 hours", "10 hours", "8 hours", "9 hours")
    }
}

/// Capability set shared by every concrete product.
pub trait ElectronicProduct {
    fn kind(&self) -> ProductKind;

    fn base(&self) -> &ProductBase;

    fn base_mut(&mut self) -> &mut ProductBase;

    /// One-line, human-readable summary of the distinguishing attributes.
    fn get_specifications(&self) -> String;

    fn id(&self) -> ProductId {
        self.base().id
    }

    fn name(&self) -> &str {
        &self.base().name
    }

    fn price(&self) -> Money {
        self.base().price
    }

    fn line(&self) -> &Line {
        &self.base().line
    }
}

// An empty override counts as absent.
fn override_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    #[serde(flatten)]
    pub base: ProductBase,
    pub processor: String,
    pub ram: String,
}

impl Computer {
    pub fn new(name: impl Into<String>, price: Money, line: Line, processor: Option<String>) -> Self {
        let processor = override_or(processor, defaults::processor(&line));
        let ram = defaults::ram(&line).to_string();
        Self {
            base: ProductBase::new(name, price, line),
            processor,
            ram,
        }
    }
}

impl ElectronicProduct for Computer {
    fn kind(&self) -> ProductKind {
        ProductKind::Computer
    }

    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn get_specifications(&self) -> String {
        format!(
            "💻 {} | 🚀 {} | 🎯 {} | 📊 Line: {}",
            self.base.name, self.processor, self.ram, self.base.line
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(flatten)]
    pub base: ProductBase,
    pub storage: String,
    pub camera: String,
}

impl Phone {
    pub fn new(name: impl Into<String>, price: Money, line: Line, storage: Option<String>) -> Self {
        let storage = override_or(storage, defaults::storage(&line));
        let camera = defaults::camera(&line).to_string();
        Self {
            base: ProductBase::new(name, price, line),
            storage,
            camera,
        }
    }
}

impl ElectronicProduct for Phone {
    fn kind(&self) -> ProductKind {
        ProductKind::Phone
    }

    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn get_specifications(&self) -> String {
        format!(
            "📱 {} | 💾 {} | 📸 {} | 📊 Line: {}",
            self.base.name, self.storage, self.camera, self.base.line
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tablet {
    #[serde(flatten)]
    pub base: ProductBase,
    pub screen: String,
    pub battery: String,
}

impl Tablet {
    pub fn new(name: impl Into<String>, price: Money, line: Line, screen: Option<String>) -> Self {
        let screen = override_or(screen, defaults::screen(&line));
        let battery = defaults::battery(&line).to_string();
        Self {
            base: ProductBase::new(name, price, line),
            screen,
            battery,
        }
    }
}

impl ElectronicProduct for Tablet {
    fn kind(&self) -> ProductKind {
        ProductKind::Tablet
    }

    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn get_specifications(&self) -> String {
        format!(
            "📟 {} | 🖥️ {} | 🔋 {} | 📊 Line: {}",
            self.base.name, self.screen, self.battery, self.base.line
        )
    }
}

/// A catalog product of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Product {
    Computer(Computer),
    Phone(Phone),
    Tablet(Tablet),
}

impl Product {
    pub fn as_electronic(&self) -> &dyn ElectronicProduct {
        match self {
            Product::Computer(p) => p,
            Product::Phone(p) => p,
            Product::Tablet(p) => p,
        }
    }

    pub(crate) fn as_electronic_mut(&mut self) -> &mut dyn ElectronicProduct {
        match self {
            Product::Computer(p) => p,
            Product::Phone(p) => p,
            Product::Tablet(p) => p,
        }
    }

    pub fn kind(&self) -> ProductKind {
        self.as_electronic().kind()
    }

    pub fn base(&self) -> &ProductBase {
        self.as_electronic().base()
    }

    pub fn id(&self) -> ProductId {
        self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn price(&self) -> Money {
        self.base().price
    }

    pub fn line(&self) -> &Line {
        &self.base().line
    }

    pub fn get_specifications(&self) -> String {
        self.as_electronic().get_specifications()
    }
}

impl From<Computer> for Product {
    fn from(value: Computer) -> Self {
        Product::Computer(value)
    }
}

impl From<Phone> for Product {
    fn from(value: Phone) -> Self {
        Product::Phone(value)
    }
}

impl From<Tablet> for Product {
    fn from(value: Tablet) -> Self {
        Product::Tablet(value)
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let base = self.base();
        write!(
            f,
            "{} (Line {}) - ${} [ID:{}]",
            base.name, base.line, base.price, base.id
        )
    }
}
