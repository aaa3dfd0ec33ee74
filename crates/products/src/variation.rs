//! Clone-with-variation (prototype) logic.
//!
//! Cloning never mutates the source product: it copies it, perturbs the copy
//! and gives it a fresh id. All draws go through [`Randomness`], so tests can
//! script the exact outcome and sessions can run from a fixed seed.

use rand::Rng;

use gadgetshop_core::ProductId;

use crate::product::{Computer, Phone, Product, Tablet};

/// Source of the random draws used by cloning.
///
/// Implemented for every [`rand::Rng`]; tests provide scripted implementations.
pub trait Randomness {
    /// Uniform sample in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index in `[0, len)`; `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Randomness for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.gen_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen_bool(probability.clamp(0.0, 1.0))
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

pub const PRICE_FACTOR_MIN: f64 = 0.7;
pub const PRICE_FACTOR_MAX: f64 = 1.3;

pub const SUFFIX_PROBABILITY: f64 = 0.6;
pub const NAME_SUFFIXES: [&str; 7] = ["Plus", "Pro", "Max", "Edition", "Custom", "Limited", "Turbo"];

pub const LINE_SHIFT_PROBABILITY: f64 = 0.2;

pub const PROCESSOR_REROLL_PROBABILITY: f64 = 0.4;
pub const PROCESSORS: [&str; 4] = ["Intel i7", "AMD Ryzen 7", "Intel i9", "AMD Ryzen 9"];

pub const STORAGE_REROLL_PROBABILITY: f64 = 0.5;
pub const STORAGES: [&str; 4] = ["64GB", "128GB", "256GB", "512GB"];

pub const SCREEN_REROLL_PROBABILITY: f64 = 0.35;
pub const SCREEN_SIZES: [&str; 4] = ["10.1'", "10.5'", "11'", "12.9'"];

fn choose<'a>(rng: &mut dyn Randomness, items: &[&'a str]) -> &'a str {
    items[rng.pick(items.len())]
}

impl Product {
    /// Prototype operation: a varied copy of this product with a new id.
    pub fn clone_with_variation(&self, rng: &mut dyn Randomness) -> Product {
        let mut copy = self.clone();
        vary_base(&mut copy, rng);
        match &mut copy {
            Product::Computer(c) => reroll_processor(c, rng),
            Product::Phone(p) => reroll_storage(p, rng),
            Product::Tablet(t) => reroll_screen(t, rng),
        }
        copy.as_electronic_mut().base_mut().id = ProductId::next();

        tracing::debug!(
            source_id = %self.id(),
            clone_id = %copy.id(),
            price = %copy.price(),
            line = %copy.line(),
            "product cloned with variation"
        );
        copy
    }
}

fn vary_base(product: &mut Product, rng: &mut dyn Randomness) {
    let base = product.as_electronic_mut().base_mut();

    let factor = rng.uniform(PRICE_FACTOR_MIN, PRICE_FACTOR_MAX);
    base.price = base.price.scale(factor);

    if rng.chance(SUFFIX_PROBABILITY) {
        let suffix = choose(rng, &NAME_SUFFIXES);
        base.name = format!("{} {suffix}", base.name);
    }

    // Unknown lines are left untouched.
    if rng.chance(LINE_SHIFT_PROBABILITY) {
        if let Some(alternatives) = base.line.alternatives() {
            let [first, second] = alternatives;
            base.line = if rng.pick(2) == 0 { first } else { second };
        }
    }
}

fn reroll_processor(computer: &mut Computer, rng: &mut dyn Randomness) {
    if rng.chance(PROCESSOR_REROLL_PROBABILITY) {
        computer.processor = choose(rng, &PROCESSORS).to_string();
    }
}

fn reroll_storage(phone: &mut Phone, rng: &mut dyn Randomness) {
    if rng.chance(STORAGE_REROLL_PROBABILITY) {
        phone.storage = choose(rng, &STORAGES).to_string();
    }
}

fn reroll_screen(tablet: &mut Tablet, rng: &mut dyn Randomness) {
    if rng.chance(SCREEN_REROLL_PROBABILITY) {
        tablet.screen = format!("{} LCD", choose(rng, &SCREEN_SIZES));
    }
}
