//! Numbered menu loop.
//!
//! Generic over the input/output streams so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use gadgetshop_catalog::Catalog;
use gadgetshop_core::Money;
use gadgetshop_products::{BuildProduct, DecoratorKind, Line, Persona, ProductBuilder, ProductKind};

const MAIN_MENU: &str = "\
=== Electronic Products Catalog ===
1. Build a custom product (Builder)
2. Create from a persona family (Factory Method)
3. Create from a product line (Abstract Factory)
4. Show catalog
5. Clone a product (Prototype)
6. Add an extra to a product (Decorator)
7. Statistics
8. Export catalog as JSON
0. Exit";

const KINDS: [(&str, ProductKind); 3] = [
    ("Computer", ProductKind::Computer),
    ("Phone", ProductKind::Phone),
    ("Tablet", ProductKind::Tablet),
];

const PERSONAS: [(&str, Persona); 3] = [
    ("Gaming", Persona::Gaming),
    ("Office", Persona::Office),
    ("Student", Persona::Student),
];

const LINES: [(&str, Line); 3] = [
    ("Premium", Line::Premium),
    ("Standard", Line::Standard),
    ("Economic", Line::Economic),
];

const DECORATORS: [(&str, DecoratorKind); 4] = [
    ("Extended warranty (+$100)", DecoratorKind::Warranty),
    ("Accessories pack (+$50)", DecoratorKind::Accessories),
    ("15% discount", DecoratorKind::Discount),
    ("Premium support (+$150)", DecoratorKind::PremiumSupport),
];

/// What the loop should do after handling one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive session over one catalog.
pub struct Menu<I, O, G> {
    input: I,
    output: O,
    catalog: Catalog<G>,
    builder: ProductBuilder,
}

impl<I: BufRead, O: Write, G: Rng> Menu<I, O, G> {
    pub fn new(input: I, output: O, catalog: Catalog<G>) -> Self {
        Self {
            input,
            output,
            catalog,
            builder: ProductBuilder::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog<G> {
        &self.catalog
    }

    pub fn into_parts(self) -> (O, Catalog<G>) {
        (self.output, self.catalog)
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{MAIN_MENU}")?;
            let Some(choice) = self.ask("Choose an option: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.build_custom()?,
                "2" => self.create_from_persona()?,
                "3" => self.create_from_line()?,
                "4" => self.show()?,
                "5" => self.clone_product()?,
                "6" => self.decorate_product()?,
                "7" => self.stats()?,
                "8" => self.export()?,
                "0" => Flow::Quit,
                other => {
                    writeln!(self.output, "Invalid option: {other:?}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        tracing::info!(products = self.catalog.len(), "session finished");
        Ok(())
    }

    fn build_custom(&mut self) -> Result<Flow> {
        self.builder.reset();

        let Some(kind) = self.ask("Product type (computer/phone/tablet): ")? else {
            return Ok(Flow::Quit);
        };
        match kind.parse::<ProductKind>() {
            Ok(kind) => {
                self.builder.set_type(kind);
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }

        let Some(name) = self.ask("Name: ")? else {
            return Ok(Flow::Quit);
        };
        if !name.is_empty() {
            self.builder.set_name(name);
        }

        let Some(price) = self.ask_price("Price: ")? else {
            return Ok(Flow::Quit);
        };
        self.builder.set_price(price);

        let Some(line) = self.ask("Line (Economic/Standard/Premium): ")? else {
            return Ok(Flow::Quit);
        };
        if !line.is_empty() {
            self.builder.set_line(line);
        }

        if let Some(kind) = self.builder.kind() {
            let key = kind.primary_spec();
            let Some(value) = self.ask(&format!("{key} (leave empty for the line default): "))? else {
                return Ok(Flow::Quit);
            };
            if !value.is_empty() {
                self.builder.add_spec(key, value);
            }
        }

        match self.builder.build() {
            Ok(product) => {
                writeln!(self.output, "Created: {}", product.get_specifications())?;
                self.catalog.add(product);
            }
            Err(err) => writeln!(self.output, "Could not create product: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn create_from_persona(&mut self) -> Result<Flow> {
        let Some(persona) = self.choose("Persona", &PERSONAS)? else {
            return Ok(Flow::Quit);
        };
        let Some(kind) = self.choose("Product", &KINDS)? else {
            return Ok(Flow::Quit);
        };
        if let (Some(persona), Some(kind)) = (persona, kind) {
            let product = persona.factory().create(kind);
            writeln!(self.output, "Created: {}", product.get_specifications())?;
            self.catalog.add(product);
        }
        Ok(Flow::Continue)
    }

    fn create_from_line(&mut self) -> Result<Flow> {
        let Some(line) = self.choose("Line", &LINES)? else {
            return Ok(Flow::Quit);
        };
        let Some(kind) = self.choose("Product", &KINDS)? else {
            return Ok(Flow::Quit);
        };
        if let (Some(family), Some(kind)) = (line.and_then(|l| l.factory()), kind) {
            let product = family.create(kind);
            writeln!(self.output, "Created: {}", product.get_specifications())?;
            self.catalog.add(product);
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self) -> Result<Flow> {
        writeln!(self.output, "{}", self.catalog.show())?;
        Ok(Flow::Continue)
    }

    fn clone_product(&mut self) -> Result<Flow> {
        if self.catalog.is_empty() {
            return self.show();
        }
        let Some(index) = self.ask_index()? else {
            return Ok(Flow::Quit);
        };
        match self.catalog.clone_at(index) {
            Ok(clone) => {
                let line = format!("Cloned: {clone}\n    {}", clone.get_specifications());
                writeln!(self.output, "{line}")?;
            }
            Err(err) => writeln!(self.output, "Product not found: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn decorate_product(&mut self) -> Result<Flow> {
        if self.catalog.is_empty() {
            return self.show();
        }
        let Some(index) = self.ask_index()? else {
            return Ok(Flow::Quit);
        };
        let Some(kind) = self.choose("Extra", &DECORATORS)? else {
            return Ok(Flow::Quit);
        };
        let Some(kind) = kind else {
            return Ok(Flow::Continue);
        };
        match self.catalog.decorate_at(index, kind) {
            Ok(decoration) => writeln!(
                self.output,
                "{}\nBase price: ${} -> Total: ${}",
                decoration.description, decoration.base_price, decoration.total_price
            )?,
            Err(err) => writeln!(self.output, "Product not found: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn stats(&mut self) -> Result<Flow> {
        writeln!(self.output, "{}", self.catalog.stats())?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let json = serde_json::to_string_pretty(&self.catalog.snapshot())?;
        writeln!(self.output, "{json}")?;
        Ok(Flow::Continue)
    }

    /// Read one trimmed line; `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Re-prompt until a valid, non-negative price is entered.
    fn ask_price(&mut self, prompt: &str) -> Result<Option<Money>> {
        loop {
            let Some(raw) = self.ask(prompt)? else {
                return Ok(None);
            };
            let parsed = raw
                .parse::<f64>()
                .map_err(anyhow::Error::from)
                .and_then(|v| Money::from_major(v).map_err(anyhow::Error::from));
            match parsed {
                Ok(price) => return Ok(Some(price)),
                Err(err) => writeln!(self.output, "Invalid price {raw:?}: {err}. Try again.")?,
            }
        }
    }

    /// Re-prompt until a non-negative integer is entered.
    fn ask_index(&mut self) -> Result<Option<usize>> {
        loop {
            let Some(raw) = self.ask("Product index: ")? else {
                return Ok(None);
            };
            match raw.parse::<usize>() {
                Ok(index) => return Ok(Some(index)),
                Err(_) => writeln!(self.output, "Invalid index {raw:?}. Try again.")?,
            }
        }
    }

    /// Numbered choice. Outer `None` means input ended; inner `None` an invalid pick.
    fn choose<T: Clone>(&mut self, title: &str, options: &[(&str, T)]) -> Result<Option<Option<T>>> {
        writeln!(self.output, "{title}:")?;
        for (i, (label, _)) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {label}", i + 1)?;
        }
        let Some(raw) = self.ask("Choose: ")? else {
            return Ok(None);
        };

        let picked = raw
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
            .map(|(_, value)| value.clone());
        if picked.is_none() {
            writeln!(self.output, "Invalid option: {raw:?}")?;
        }
        Ok(Some(picked))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::StdRng;

    use super::*;

    fn run_session(script: &str) -> (String, Catalog<StdRng>) {
        let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::new(), Catalog::seeded(11));
        menu.run().unwrap();
        let (output, catalog) = menu.into_parts();
        (String::from_utf8(output).unwrap(), catalog)
    }

    #[test]
    fn exits_on_zero_and_on_end_of_input() {
        let (out, _) = run_session("0\n");
        assert!(out.ends_with("Goodbye!\n"));

        let (out, _) = run_session("");
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn builder_flow_retries_bad_price() {
        let (out, catalog) = run_session("1\ncomputer\nTestBox\nabc\n-5\n999.99\nPremium\n\n0\n");

        assert!(out.contains("Invalid price \"abc\""));
        assert!(out.contains("Invalid price \"-5\""));
        assert_eq!(catalog.len(), 1);
        let product = catalog.get(0).unwrap();
        assert_eq!(product.name(), "TestBox");
        assert_eq!(product.price(), Money::from_cents(99_999));
        assert!(product.get_specifications().contains("Intel i9"));
    }

    #[test]
    fn builder_flow_reports_unknown_type() {
        let (out, catalog) = run_session("1\nfridge\nCold\n10\nStandard\n0\n");
        assert!(out.contains("unrecognized product type: \"fridge\""));
        assert!(out.contains("Could not create product: product type not set"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn factories_clone_decorate_and_stats() {
        // persona Gaming phone, line Economic tablet, clone #0, warranty on #1, stats
        let script = "2\n1\n2\n3\n3\n3\n5\n0\n6\n1\n1\n7\n0\n";
        let (out, catalog) = run_session(script);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().name(), "Gaming Phone X");
        assert_eq!(catalog.get(1).unwrap().name(), "Simple Pad");
        assert!(out.contains("Cloned: Gaming Phone X"));
        assert!(out.contains("Simple Pad + Extended Warranty (2 years)"));
        assert!(out.contains("Base price: $150.00 -> Total: $250.00"));
        assert!(out.contains("Phones:    2"));
        assert!(out.contains("Tablets:   1"));
    }

    #[test]
    fn missing_product_is_reported() {
        let (out, catalog) = run_session("3\n3\n1\n5\n9\n0\n");
        assert!(out.contains("Product not found"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn empty_catalog_messages() {
        let (out, _) = run_session("4\n5\n7\n0\n");
        assert!(out.contains("The catalog is empty."));
        assert!(out.contains("the catalog is empty"));
    }

    #[test]
    fn export_prints_json() {
        let (out, _) = run_session("3\n3\n1\n8\n0\n");
        assert!(out.contains("\"kind\": \"computer\""));
        assert!(out.contains("\"name\": \"Essential Basic\""));
    }
}
