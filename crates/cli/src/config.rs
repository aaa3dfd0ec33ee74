//! Command-line and environment configuration.

use clap::Parser;

use gadgetshop_observability::LogFormat;

#[derive(Debug, Clone, Parser)]
#[command(name = "gadgetshop")]
#[command(version, about = "Interactive catalog of electronic products")]
pub struct Cli {
    /// Seed for the random source used when cloning (reproducible sessions)
    #[arg(long, env = "GADGETSHOP_SEED")]
    pub seed: Option<u64>,

    /// Log output format: text or json (logs go to stderr)
    #[arg(long, env = "GADGETSHOP_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,
}
