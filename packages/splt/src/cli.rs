//! Command-line interface for the splitter.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::config::{validate_extension, DEFAULT_EXTENSION};
use crate::document::Document;
use crate::error::Result;
use crate::splitter::{
    read_input_file, read_input_stdin, split_document, validate_output_dir, write_groups,
    SplitPlan,
};
use crate::splitting::Strategy;

/// splt - Split an HCL file into multiple files.
#[derive(Debug, Parser)]
#[command(name = "splt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input HCL file to split (default: read from stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination directory to write the split files
    #[arg(short, long, value_name = "./path/to/dir")]
    pub output: PathBuf,

    /// Splitting strategy
    #[arg(long, value_enum, default_value_t = Strategy::Scope)]
    pub strategy: Strategy,

    /// Extension appended to every written file
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Show the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the split plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI.
pub fn run(cli: Cli) -> Result<()> {
    // Configuration errors come before any input is read
    let extension = validate_extension(&cli.extension)?;
    validate_output_dir(&cli.output)?;

    let (source, origin) = match cli.input.as_deref() {
        Some(path) => read_input_file(path)?,
        None => read_input_stdin()?,
    };

    let document = Document::parse(source, origin)?;
    let groups = split_document(&document, cli.strategy);
    let plan = SplitPlan::new(&document, cli.strategy, &groups, &cli.output, &extension);

    if !cli.dry_run {
        write_groups(&document, &groups, &cli.output, &extension)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_summary(&plan, cli.dry_run);
    }

    Ok(())
}

fn print_summary(plan: &SplitPlan, dry_run: bool) {
    println!(
        "{} {} with strategy {}",
        style("Splitting").bold(),
        style(&plan.origin).cyan(),
        style(plan.strategy).green()
    );

    for file in &plan.files {
        let count = file.blocks.len();
        println!(
            "  {} ({} {})",
            file.path.display(),
            count,
            if count == 1 { "block" } else { "blocks" }
        );
    }

    let verb = if dry_run { "Would write" } else { "Wrote" };
    println!(
        "{} {} files",
        style(verb).green().bold(),
        plan.files.len()
    );
}
