// Licensed under the Apache-2.0 license

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fourcc-tables",
    author,
    version,
    about = "Generate format and modifier name tables from drm_fourcc.h"
)]
struct Cli {
    /// Path to drm_fourcc.h
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path of the C source file to generate
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .context("failed to initialize logger")?;

    let cli = Cli::parse();
    fourcc_tables_generator::generate_tables_from_file(&cli.input, &cli.output).with_context(
        || {
            format!(
                "failed to generate {} from {}",
                cli.output.display(),
                cli.input.display()
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_positional_arguments() {
        let cli = Cli::try_parse_from(["fourcc-tables", "drm_fourcc.h", "tables.c"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("drm_fourcc.h"));
        assert_eq!(cli.output, PathBuf::from("tables.c"));
    }

    #[test]
    fn test_missing_output_argument() {
        assert!(Cli::try_parse_from(["fourcc-tables", "drm_fourcc.h"]).is_err());
    }

    #[test]
    fn test_extra_argument_rejected() {
        assert!(Cli::try_parse_from(["fourcc-tables", "a.h", "b.c", "c.c"]).is_err());
    }
}
