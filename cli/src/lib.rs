mod largeuint_cli;

pub use largeuint_cli::*;
