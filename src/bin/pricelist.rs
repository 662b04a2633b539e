//! Pricelist CLI - semicolon-CSV to PDF price list generator

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use pricelist::{
    collect_entries, read_rows, stamp_template, write_pages, FixedColumns, LetterColumns,
    PageOptions, StampOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pricelist")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Pricelist - semicolon-CSV to PDF price list generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Fill ${COLUMN} placeholders in a template PDF from the first CSV row
    Fill {
        /// Template PDF whose first page carries the placeholders
        #[arg(short, long)]
        template: String,

        /// Output PDF path
        #[arg(short, long)]
        output: String,

        /// Semicolon-delimited CSV input
        #[arg(short, long)]
        csv: String,

        /// Number of leading CSV lines to skip
        #[arg(short, long, default_value_t = 0)]
        skip: usize,

        /// Consider at most this many rows (the first one is used)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Lay out one PDF page per valid CSV row
    Pages {
        /// Semicolon-delimited CSV input
        #[arg(short, long)]
        csv: String,

        /// Output PDF path
        #[arg(short, long)]
        output: String,

        /// Number of leading CSV lines to skip
        #[arg(short, long, default_value_t = 0)]
        skip: usize,

        /// Address fields by fixed zero-based position instead of column letters
        #[arg(long)]
        positional: bool,

        /// Emit a blank page after the final entry
        #[arg(long)]
        trailing_break: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(command: Commands) -> pricelist::Result<()> {
    match command {
        Commands::Fill {
            template,
            output,
            csv,
            skip,
            limit,
        } => {
            stamp_template(&template, &output, &csv, &StampOptions { skip, limit })?;
            eprintln!("✓ Output written to: {}", output);
        }

        Commands::Pages {
            csv,
            output,
            skip,
            positional,
            trailing_break,
        } => {
            let rows = read_rows(&csv, skip)?;
            let entries = if positional {
                collect_entries(&rows, &FixedColumns)
            } else {
                collect_entries(&rows, &LetterColumns)
            };
            write_pages(
                &entries,
                &output,
                &PageOptions {
                    trailing_blank_page: trailing_break,
                },
            )?;
            eprintln!(
                "✓ {} page(s) written to: {} ({} row(s) read)",
                entries.len(),
                output,
                rows.len()
            );
        }

        Commands::Info => {
            println!("Pricelist - semicolon-CSV to PDF price list generator");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Spreadsheet-style column addressing (A, K, AJ, ...)");
            println!("  ✓ ${{COLUMN}} placeholder stamping into template PDFs");
            println!("  ✓ One A4 page per validated record");
            println!("  ✓ Letter or fixed-position field addressing");
            println!();
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install pricelist --features cli");
    eprintln!("  pricelist <COMMAND> [OPTIONS]");
}
