use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use gadgetshop_catalog::Catalog;
use gadgetshop_cli::{Cli, Menu};

fn main() -> Result<()> {
    let cli = Cli::parse();
    gadgetshop_observability::init(cli.log_format);

    let catalog = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded random source");
            Catalog::seeded(seed)
        }
        None => Catalog::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock(), catalog)
        .run()
        .context("menu session failed")
}
