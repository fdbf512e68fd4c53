//! sales-records-inspect
//!
//! Small driver that opens a sales workbook, lists its sheets, and loads the
//! requested ones, reporting their dimensions.
//!
//! # Usage
//!
//! ```bash
//! # Every sheet
//! cargo run --bin sales-records-inspect -- spreadsheets/sales_relatory.xlsx
//!
//! # Specific sheets only
//! cargo run --bin sales-records-inspect -- sales_relatory.xlsx Clients Products
//! ```

use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sales_records::loader::{self, LoadError};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_records=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = env::args().skip(1);
    let Some(workbook) = args.next().map(PathBuf::from) else {
        eprintln!("usage: sales-records-inspect <workbook.xlsx> [sheet ...]");
        return ExitCode::FAILURE;
    };
    let requested: Vec<String> = args.collect();

    match inspect(&workbook, &requested) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            let mut cause = error.source();
            while let Some(inner) = cause {
                eprintln!("  caused by: {inner}");
                cause = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn inspect(workbook: &Path, requested: &[String]) -> Result<(), LoadError> {
    let names = loader::sheet_names(workbook)?;
    tracing::info!(path = %workbook.display(), sheets = names.len(), "opened workbook");
    println!("{}: {} sheet(s)", workbook.display(), names.len());

    let selected = if requested.is_empty() {
        names.clone()
    } else {
        requested.to_vec()
    };

    for name in &selected {
        let table = loader::load_table(workbook, name.as_str())?;
        println!(
            "  {}: {} row(s) x {} column(s)",
            table.name(),
            table.len(),
            table.columns().len()
        );
    }
    Ok(())
}
