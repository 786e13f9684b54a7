//! polysheet CLI - multilingual store-import spreadsheet inspection
//!
//! A command-line tool for analyzing store import templates (XLSX/CSV),
//! estimating database import impact, and generating sample workbooks.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use polysheet::xlsx::WorkbookWriter;
use polysheet::{
    estimate, resolve_translation_fields, sample, ImpactOptions, SourceTable,
};
use serde_json::json;
use std::path::PathBuf;

/// Multilingual store-import spreadsheet inspection
#[derive(Parser)]
#[command(
    name = "polysheet",
    version,
    about = "Inspect multilingual store-import spreadsheets",
    long_about = "polysheet - multilingual store-import spreadsheet inspection.\n\n\
                  Analyzes XLSX and CSV import templates, resolves Kurdish/Arabic\n\
                  translation columns, and estimates database import impact."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a template: columns, sample data, translation columns
    Analyze {
        /// Input file path (.xlsx or .csv)
        input: PathBuf,

        /// Emit machine-readable JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Estimate what a database import of the template would create
    Impact {
        /// Input file path (.xlsx or .csv)
        input: PathBuf,

        /// Field whose values must be unique across the import
        #[arg(long, default_value = "email")]
        unique_field: String,

        /// Emit machine-readable JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Write the three-store multilingual sample workbook
    Sample {
        /// Output file path
        #[arg(short, long, default_value = "test_stores_multilingual.xlsx")]
        output: PathBuf,
    },

    /// Convert a CSV template to an XLSX workbook
    Convert {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: input with .xlsx extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Analyze { input, json } => {
            let pb = create_spinner("Reading table...");
            let table = polysheet::read_table(&input)?;
            pb.finish_and_clear();

            if json {
                print_analyze_json(&input, &table)?;
            } else {
                print_analyze_report(&input, &table);
            }
        }

        Commands::Impact {
            input,
            unique_field,
            json,
        } => {
            let pb = create_spinner("Reading table...");
            let table = polysheet::read_table(&input)?;
            pb.finish_and_clear();

            let resolution = resolve_translation_fields(&table);
            let options = ImpactOptions::with_unique_field(unique_field);
            let impact = estimate(&table, &resolution, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&impact)?);
            } else {
                print_impact_report(&input, &table, &impact);
            }
        }

        Commands::Sample { output } => {
            let table = sample::store_template();
            WorkbookWriter::new().write_file(&table, &output)?;

            println!(
                "{} Created sample workbook: {}",
                "✓".green().bold(),
                output.display()
            );
            println!(
                "  {} stores with Kurdish Sorani and Arabic translations",
                table.record_count()
            );
        }

        Commands::Convert { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("xlsx"));

            let pb = create_spinner("Converting...");
            let table = polysheet::read_table(&input)?;
            WorkbookWriter::new().write_file(&table, &output)?;
            pb.finish_and_clear();

            println!(
                "{} Converted {} to {}",
                "✓".green().bold(),
                input.display(),
                output.display()
            );
            println!(
                "  {} records x {} columns",
                table.record_count(),
                table.column_count()
            );

            let resolution = resolve_translation_fields(&table);
            if !resolution.is_empty() {
                println!("  {} translation columns carried over", resolution.len());
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_analyze_report(input: &PathBuf, table: &SourceTable) {
    println!("{}", "Template Analysis".cyan().bold());
    println!("{}", "─".repeat(50));
    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref name) = table.name {
        println!("{}: {}", "Sheet".bold(), name);
    }
    println!(
        "{}: {} rows x {} columns",
        "Data".bold(),
        table.record_count(),
        table.column_count()
    );

    println!("\n{}", "Column Analysis".cyan().bold());
    println!("{:<6} {:<25} {}", "Index".bold(), "Column".bold(), "Sample".bold());
    println!("{}", "─".repeat(50));
    for (i, header) in table.headers.iter().enumerate() {
        let mut sample_value = table
            .column_sample(header)
            .unwrap_or_else(|| "[empty]".to_string());
        if sample_value.chars().count() > 30 {
            sample_value = sample_value.chars().take(27).collect::<String>() + "...";
        }
        println!("{:<6} {:<25} {}", i + 1, header, sample_value);
    }

    let resolution = resolve_translation_fields(table);
    println!("\n{}", "Multilingual Analysis".cyan().bold());
    println!(
        "{}: {}",
        "Translation columns".bold(),
        resolution.len()
    );
    if resolution.is_empty() {
        println!("{} No translation columns found", "!".yellow().bold());
    } else {
        for field in &resolution.translations {
            println!(
                "  • {} ({} translation for '{}')",
                field.name,
                field.language.name(),
                field.base
            );
        }
    }
}

fn print_analyze_json(
    input: &PathBuf,
    table: &SourceTable,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolution = resolve_translation_fields(table);
    let columns: Vec<_> = table
        .headers
        .iter()
        .map(|header| {
            let translation = resolution.translations.iter().find(|t| &t.name == header);
            json!({
                "name": header,
                "sample": table.column_sample(header),
                "language": translation.map(|t| t.language.code()),
                "base": translation.map(|t| &t.base),
            })
        })
        .collect();

    let report = json!({
        "file": input.display().to_string(),
        "sheet": table.name,
        "records": table.record_count(),
        "columns": columns,
        "translation_columns": resolution.translations,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_impact_report(
    input: &PathBuf,
    table: &SourceTable,
    impact: &polysheet::ImportImpact,
) {
    println!("{}", "Import Impact Analysis".cyan().bold());
    println!("{}", "─".repeat(50));
    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {} records x {} columns",
        "Data".bold(),
        table.record_count(),
        table.column_count()
    );

    println!("\n{}", "Records that would be added".cyan().bold());
    println!("  • {} new records in 'vendors'", impact.satellite_count);
    println!("  • {} new records in 'stores'", impact.primary_count);
    println!(
        "  • {} new records in 'translations'",
        impact.translation_count
    );
    println!("  • {} database rows in total", impact.total_rows());

    if !impact.languages.is_empty() {
        println!("\n{}", "Multilingual Data Summary".cyan().bold());
        for breakdown in &impact.languages {
            println!(
                "  • Stores with {} translations: {} ({} entries)",
                breakdown.language.name(),
                breakdown.translated_records,
                breakdown.translation_entries
            );
        }
    }

    println!(
        "\n{} (by {})",
        "Duplicate Check".cyan().bold(),
        impact.unique_field
    );
    if impact.is_unique() {
        println!(
            "  {} No duplicate values found - all records are unique",
            "✓".green().bold()
        );
    } else {
        println!(
            "  {} Found {} duplicate {} value(s)",
            "!".yellow().bold(),
            impact.duplicate_count,
            impact.unique_field
        );
    }
}

fn print_version() {
    println!(
        "{} {}",
        "polysheet".green().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Multilingual store-import spreadsheet inspection");
    println!();
    println!("Supported formats: XLSX, CSV");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
